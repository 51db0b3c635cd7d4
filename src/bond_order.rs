//! Bond-order and formal-charge inference.
//!
//! Trajectory and topology readers usually keep connectivity and explicit
//! hydrogens but drop bond multiplicities and formal charges. With every
//! hydrogen present, both can be recovered from valence alone: an atom
//! whose observed valence falls short of an allowed valence is missing a
//! multiple bond or a negative charge, and an atom that exceeds its only
//! allowed valence must carry a positive charge.
//!
//! [`update_bonds_and_charges`] makes a single greedy pass over the atoms in
//! index order. Each atom gets at most one corrective action:
//!
//! - one allowed valence exceeded: assign a positive formal charge;
//! - otherwise scan the neighbors for one with a matching deficit and raise
//!   the connecting bond to double (deficit 1) or triple (deficit 2);
//! - if the last neighbor shares no deficit at all, assign the negated first
//!   deficit as formal charge;
//! - an atom with no neighbors becomes an ion: metals and other atoms with
//!   fewer than four outer electrons give up their deficit as positive
//!   charge (Na⁺, Mg²⁺), the rest take it as negative charge (Cl⁻).
//!
//! Elements without a fixed valence (most transition metals) are never
//! acted on, and as neighbors they share no deficit with anything.
//!
//! Choices are never revisited. The molecule is sanitized once at the end.

use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::element::outer_shell_electrons;
use crate::mol::Mol;
use crate::periodic::{PeriodicTable, ValenceTable, Valences};
use crate::sanitize::{sanitize, SanitizeError};
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasFormalChargeMut,
    HasHydrogenCount,
};
use crate::valence::ValenceError;

/// Errors returned by [`update_bonds_and_charges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairError {
    /// The atomic number is not a known element.
    UnknownValence { atom: NodeIndex, atomic_num: u8 },
    /// Two atoms listed as neighbors have no bond between them.
    MissingBond { a: NodeIndex, b: NodeIndex },
    /// A valence was read after a mutation without a cache refresh.
    StaleCache { atom: NodeIndex },
    /// The charge to assign does not fit in a formal charge.
    ChargeOutOfRange { atom: NodeIndex, charge: i16 },
    /// The repaired molecule failed the final strict check.
    Sanitize(SanitizeError),
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownValence { atom, atomic_num } => write!(
                f,
                "no valence data for atom {} (atomic number {})",
                atom.index(),
                atomic_num
            ),
            Self::MissingBond { a, b } => {
                write!(f, "no bond between atoms {} and {}", a.index(), b.index())
            }
            Self::StaleCache { atom } => write!(
                f,
                "valence of atom {} read from a stale property cache",
                atom.index()
            ),
            Self::ChargeOutOfRange { atom, charge } => {
                write!(f, "charge {} out of range for atom {}", charge, atom.index())
            }
            Self::Sanitize(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RepairError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sanitize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SanitizeError> for RepairError {
    fn from(e: SanitizeError) -> Self {
        Self::Sanitize(e)
    }
}

impl From<ValenceError> for RepairError {
    fn from(e: ValenceError) -> Self {
        Self::Sanitize(e.into())
    }
}

/// What a repair pass changed, in the order it changed it.
///
/// Every charge assignment is listed, including ones that wrote the value
/// the atom already had.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairSummary {
    pub upgraded_bonds: Vec<(EdgeIndex, BondOrder)>,
    pub assigned_charges: Vec<(NodeIndex, i8)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deficits {
    /// One entry per allowed valence, in table order.
    Listed(Vec<i16>),
    /// The element accepts any valence.
    Unconstrained,
}

/// Allowed valence minus observed total valence, for each allowed valence
/// of the atom's element.
///
/// Positive entries mean the atom can take more bonds, negative entries
/// mean it is already over that valence. Reads the molecule's property
/// cache, which must be fresh.
pub fn valence_deficits<A, B, T>(
    mol: &Mol<A, B>,
    table: &T,
    atom: NodeIndex,
) -> Result<Deficits, RepairError>
where
    A: HasAtomicNum,
    T: ValenceTable,
{
    let atomic_num = mol.atom(atom).atomic_num();
    let valences = match table.valences(atomic_num) {
        Some(Valences::Listed(list)) if !list.is_empty() => list,
        Some(Valences::Listed(_)) | None => {
            return Err(RepairError::UnknownValence { atom, atomic_num })
        }
        Some(Valences::Any) => return Ok(Deficits::Unconstrained),
    };
    let total = mol
        .total_valence(atom)
        .ok_or(RepairError::StaleCache { atom })? as i16;
    Ok(Deficits::Listed(
        valences.iter().map(|&v| v as i16 - total).collect(),
    ))
}

/// Smallest deficit the two atoms have in common.
fn shared_deficit(a: &[i16], b: &[i16]) -> Option<i16> {
    a.iter().filter(|d| b.contains(d)).min().copied()
}

enum Action {
    Charge(i16),
    Upgrade { neighbor: NodeIndex, order: BondOrder },
    Settled,
}

fn decide<A, B, T>(
    mol: &Mol<A, B>,
    table: &T,
    atom: NodeIndex,
    deficits: &[i16],
) -> Result<Action, RepairError>
where
    A: HasAtomicNum,
    T: ValenceTable,
{
    if let [only] = *deficits {
        if only < 0 {
            return Ok(Action::Charge(-only));
        }
    }

    let neighbors: Vec<NodeIndex> = mol.neighbors(atom).collect();
    if neighbors.is_empty() {
        return Ok(Action::Charge(ion_charge(
            mol.atom(atom).atomic_num(),
            deficits[0],
        )));
    }

    let mut last_shares_nothing = false;
    for (i, &neighbor) in neighbors.iter().enumerate() {
        let neighbor_deficits = valence_deficits(mol, table, neighbor)?;
        let shared = match &neighbor_deficits {
            Deficits::Listed(list) => shared_deficit(deficits, list),
            Deficits::Unconstrained => None,
        };
        log::trace!(
            "atom {} neighbor {}: deficits {:?} / {:?}, shared {:?}",
            atom.index(),
            neighbor.index(),
            deficits,
            neighbor_deficits,
            shared
        );
        match shared {
            Some(0) => continue,
            None => last_shares_nothing = i + 1 == neighbors.len(),
            Some(1) => {
                return Ok(Action::Upgrade {
                    neighbor,
                    order: BondOrder::Double,
                })
            }
            Some(2) => {
                return Ok(Action::Upgrade {
                    neighbor,
                    order: BondOrder::Triple,
                })
            }
            // A shared need no single bond upgrade can meet ends the scan.
            Some(_) => return Ok(Action::Settled),
        }
    }

    if last_shares_nothing {
        Ok(Action::Charge(-deficits[0]))
    } else {
        Ok(Action::Settled)
    }
}

/// Charge of an atom with no bonds to explain its deficit.
fn ion_charge(atomic_num: u8, deficit: i16) -> i16 {
    if outer_shell_electrons(atomic_num) < 4 {
        deficit
    } else {
        -deficit
    }
}

fn refresh<A, B, T>(mol: &mut Mol<A, B>, table: &T) -> Result<(), RepairError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    T: ValenceTable,
{
    mol.update_property_cache(table, false)?;
    Ok(())
}

fn apply<A, B, T>(
    mol: &mut Mol<A, B>,
    table: &T,
    atom: NodeIndex,
    action: Action,
    summary: &mut RepairSummary,
) -> Result<(), RepairError>
where
    A: HasAtomicNum + HasFormalCharge + HasFormalChargeMut + HasHydrogenCount,
    B: HasBondOrder + HasBondOrderMut,
    T: ValenceTable,
{
    match action {
        Action::Charge(charge) => {
            let formal = i8::try_from(charge)
                .map_err(|_| RepairError::ChargeOutOfRange { atom, charge })?;
            log::debug!("atom {}: formal charge {:+}", atom.index(), formal);
            *mol.atom_mut(atom).formal_charge_mut() = formal;
            refresh(mol, table)?;
            summary.assigned_charges.push((atom, formal));
        }
        Action::Upgrade { neighbor, order } => {
            let edge = mol
                .bond_between(atom, neighbor)
                .ok_or(RepairError::MissingBond { a: atom, b: neighbor })?;
            let raised = mol.bond(edge).bond_order().raised_to(order);
            log::debug!(
                "bond {}-{}: {}",
                atom.index(),
                neighbor.index(),
                raised
            );
            *mol.bond_mut(edge).bond_order_mut() = raised;
            refresh(mol, table)?;
            summary.upgraded_bonds.push((edge, raised));
        }
        Action::Settled => {}
    }
    Ok(())
}

/// Infer bond orders and formal charges in place, then sanitize.
///
/// The molecule must carry all of its hydrogens, either as explicit atoms
/// or as implicit counts. On error the molecule may be left partially
/// modified.
pub fn update_bonds_and_charges<A, B, T>(
    mol: &mut Mol<A, B>,
    table: &T,
) -> Result<RepairSummary, RepairError>
where
    A: HasAtomicNum + HasFormalCharge + HasFormalChargeMut + HasHydrogenCount,
    B: HasBondOrder + HasBondOrderMut,
    T: ValenceTable,
{
    refresh(mol, table)?;
    let mut summary = RepairSummary::default();

    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for atom in atoms {
        let action = match valence_deficits(mol, table, atom)? {
            Deficits::Listed(deficits) => decide(mol, table, atom, &deficits)?,
            Deficits::Unconstrained => Action::Settled,
        };
        apply(mol, table, atom, action, &mut summary)?;
    }

    sanitize(mol, table)?;
    log::debug!(
        "repaired {} atoms: {} bond(s) raised, {} charge(s) assigned",
        mol.atom_count(),
        summary.upgraded_bonds.len(),
        summary.assigned_charges.len()
    );
    Ok(summary)
}

/// [`update_bonds_and_charges`] with the default [`PeriodicTable`].
pub fn update_bonds_and_charges_default<A, B>(
    mol: &mut Mol<A, B>,
) -> Result<RepairSummary, RepairError>
where
    A: HasAtomicNum + HasFormalCharge + HasFormalChargeMut + HasHydrogenCount,
    B: HasBondOrder + HasBondOrderMut,
{
    update_bonds_and_charges(mol, &PeriodicTable::new())
}
