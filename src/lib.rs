pub mod atom;
pub mod bond;
pub mod bond_order;
pub mod element;
pub mod geometry;
pub mod mol;
pub mod periodic;
pub mod sanitize;
pub mod topology;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder, BondOrderError};
pub use bond_order::{
    update_bonds_and_charges, update_bonds_and_charges_default, valence_deficits, Deficits,
    RepairError, RepairSummary,
};
pub use element::Element;
pub use mol::Mol;
pub use periodic::{PeriodicTable, TableConfigError, ValenceTable, Valences};
pub use sanitize::{sanitize, SanitizeError};
pub use topology::{residue_number, Topology, TopologyAtom, TopologyError};
pub use traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasFormalChargeMut,
    HasHydrogenCount,
};
pub use valence::{allowed_valences, check_valence, explicit_total_valence, ValenceError};

#[cfg(test)]
mod tests;
