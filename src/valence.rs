use petgraph::graph::NodeIndex;

use crate::element::{outer_shell_electrons, Element};
use crate::mol::Mol;
use crate::periodic::{ValenceTable, Valences};
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValenceError {
    pub atom_idx: NodeIndex,
    pub atomic_num: u8,
    pub formal_charge: i8,
    pub actual_valence: u8,
    pub allowed_valences: Vec<u8>,
}

impl std::fmt::Display for ValenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = Element::from_atomic_num(self.atomic_num)
            .map(|e| e.symbol())
            .unwrap_or("?");
        write!(
            f,
            "atom {} ({}, charge {:+}): valence {} not in {:?}",
            self.atom_idx.index(),
            sym,
            self.formal_charge,
            self.actual_valence,
            self.allowed_valences,
        )
    }
}

impl std::error::Error for ValenceError {}

/// Sum of bond orders plus implicit hydrogens, read straight off the graph.
///
/// Aromatic bonds count 1.5; a fractional sum rounds up. Sums above
/// `u8::MAX` saturate there; no element allows such a valence, so a
/// saturated atom still fails validation.
pub fn explicit_total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    let half: u16 = mol
        .bonds_of(atom)
        .map(|ei| mol.bond(ei).bond_order().half_valence())
        .sum();
    let bonds = (half + 1) / 2;
    let total = bonds + mol.atom(atom).hydrogen_count() as u16;
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Valences a charged atom may have, derived from the neutral valence list.
///
/// Atoms with more than four outer electrons gain one bond per positive
/// charge (N+ → 4) and lose one per negative charge (O− → 1); atoms with
/// fewer shift the other way (B− → 4). Group 14 loses one per unit of
/// charge in either direction (C+ and C− → 3).
///
/// Returns `None` when the element accepts any valence or is unknown.
pub fn allowed_valences<T: ValenceTable>(
    table: &T,
    atomic_num: u8,
    formal_charge: i8,
) -> Option<Vec<u8>> {
    let list = match table.valences(atomic_num)? {
        Valences::Listed(list) => list,
        Valences::Any => return None,
    };
    let charge = formal_charge as i16;
    let shift = match outer_shell_electrons(atomic_num) {
        4 => -charge.abs(),
        n if n > 4 => charge,
        _ => -charge,
    };
    Some(
        list.iter()
            .map(|&v| v as i16 + shift)
            .filter(|&v| (0..=u8::MAX as i16).contains(&v))
            .map(|v| v as u8)
            .collect(),
    )
}

/// Check one atom against its charge-adjusted allowed valences.
///
/// Atoms whose element accepts any valence pass, as do unknown atomic
/// numbers: there is nothing to check them against.
pub fn validate_atom<A, B, T>(
    mol: &Mol<A, B>,
    table: &T,
    idx: NodeIndex,
    actual_valence: u8,
) -> Result<(), ValenceError>
where
    A: HasAtomicNum + HasFormalCharge,
    T: ValenceTable,
{
    let atom = mol.atom(idx);
    let allowed = match allowed_valences(table, atom.atomic_num(), atom.formal_charge()) {
        Some(allowed) => allowed,
        None => return Ok(()),
    };
    if allowed.contains(&actual_valence) {
        return Ok(());
    }
    Err(ValenceError {
        atom_idx: idx,
        atomic_num: atom.atomic_num(),
        formal_charge: atom.formal_charge(),
        actual_valence,
        allowed_valences: allowed,
    })
}

pub fn check_valence<A, B, T>(mol: &Mol<A, B>, table: &T) -> Result<(), Vec<ValenceError>>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    T: ValenceTable,
{
    let errors: Vec<ValenceError> = mol
        .atoms()
        .filter_map(|idx| {
            let v = explicit_total_valence(mol, idx);
            validate_atom(mol, table, idx, v).err()
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
