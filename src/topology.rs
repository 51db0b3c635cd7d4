//! Structures as trajectory and topology readers hand them over.
//!
//! A [`Topology`] knows atom names, elements, residues and connectivity,
//! but not bond orders or formal charges. [`Topology::to_mol`] turns it
//! into an all-single-bond, all-neutral [`Mol`] ready for
//! [`update_bonds_and_charges`](crate::update_bonds_and_charges).
//!
//! Topologies are read from JSON:
//!
//! ```
//! use bondfix::topology::Topology;
//!
//! let top = Topology::from_json(r#"{
//!     "atoms": [
//!         {"name": "O", "element": "O", "resname": "HOH1"},
//!         {"name": "H1", "element": "H", "resname": "HOH1"},
//!         {"name": "H2", "element": "H", "resname": "HOH1"}
//!     ],
//!     "bonds": [[0, 1], [0, 2]]
//! }"#).unwrap();
//! let mol = top.to_mol().unwrap();
//! assert_eq!(mol.bond_count(), 2);
//! ```

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Deserialize;

use crate::atom::Atom;
use crate::bond::Bond;
use crate::element::Element;
use crate::mol::Mol;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopologyAtom {
    pub name: String,
    pub element: String,
    #[serde(default)]
    pub resname: String,
    #[serde(default)]
    pub resid: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Topology {
    pub atoms: Vec<TopologyAtom>,
    #[serde(default)]
    pub bonds: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    Json(String),
    UnknownElement { atom: usize, symbol: String },
    AtomOutOfRange { bond: usize, atom: usize },
    SelfBond { bond: usize, atom: usize },
    DuplicateBond { bond: usize, a: usize, b: usize },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid topology: {msg}"),
            Self::UnknownElement { atom, symbol } => {
                write!(f, "atom {atom}: unknown element '{symbol}'")
            }
            Self::AtomOutOfRange { bond, atom } => {
                write!(f, "bond {bond}: atom index {atom} out of range")
            }
            Self::SelfBond { bond, atom } => {
                write!(f, "bond {bond}: atom {atom} bonded to itself")
            }
            Self::DuplicateBond { bond, a, b } => {
                write!(f, "bond {bond}: atoms {a} and {b} are already bonded")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        serde_json::from_str(json).map_err(|e| TopologyError::Json(e.to_string()))
    }

    /// Build a molecule with every bond single and every charge zero.
    ///
    /// Atom `i` of the topology becomes node `i`; hydrogens stay explicit
    /// atoms.
    pub fn to_mol(&self) -> Result<Mol<Atom, Bond>, TopologyError> {
        let mut mol = Mol::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            let elem = Element::from_symbol_ignore_case(&atom.element).ok_or_else(|| {
                TopologyError::UnknownElement {
                    atom: i,
                    symbol: atom.element.clone(),
                }
            })?;
            mol.add_atom(Atom::new(elem.atomic_num()));
        }

        let n = self.atoms.len();
        for (i, &[a, b]) in self.bonds.iter().enumerate() {
            for atom in [a, b] {
                if atom >= n {
                    return Err(TopologyError::AtomOutOfRange { bond: i, atom });
                }
            }
            if a == b {
                return Err(TopologyError::SelfBond { bond: i, atom: a });
            }
            let (na, nb) = (NodeIndex::new(a), NodeIndex::new(b));
            if mol.bond_between(na, nb).is_some() {
                return Err(TopologyError::DuplicateBond { bond: i, a, b });
            }
            mol.add_bond(na, nb, Bond::default());
        }
        Ok(mol)
    }

    /// Residue number of an atom: the explicit `resid` if the reader gave
    /// one, otherwise the number embedded in the residue name.
    pub fn residue_number(&self, atom: usize) -> Option<u32> {
        let atom = self.atoms.get(atom)?;
        atom.resid.or_else(|| residue_number(&atom.resname))
    }
}

/// First run of decimal digits in a residue label (`"LYS33"` → 33).
pub fn residue_number(resname: &str) -> Option<u32> {
    let start = resname.find(|c: char| c.is_ascii_digit())?;
    let digits = &resname[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, element: &str) -> TopologyAtom {
        TopologyAtom {
            name: name.into(),
            element: element.into(),
            resname: "LIG1".into(),
            resid: None,
        }
    }

    #[test]
    fn residue_numbers() {
        assert_eq!(residue_number("LYS33"), Some(33));
        assert_eq!(residue_number("ASP129.A"), Some(129));
        assert_eq!(residue_number("A12B34"), Some(12));
        assert_eq!(residue_number("HOH"), None);
        assert_eq!(residue_number(""), None);
    }

    #[test]
    fn explicit_resid_wins() {
        let mut top = Topology {
            atoms: vec![atom("C1", "C")],
            bonds: vec![],
        };
        assert_eq!(top.residue_number(0), Some(1));
        top.atoms[0].resid = Some(7);
        assert_eq!(top.residue_number(0), Some(7));
        assert_eq!(top.residue_number(5), None);
    }

    #[test]
    fn builds_neutral_single_bonded_mol() {
        let top = Topology {
            atoms: vec![atom("C1", "C"), atom("CL1", "CL")],
            bonds: vec![[0, 1]],
        };
        let mol = top.to_mol().unwrap();
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.atom(NodeIndex::new(1)).atomic_num, 17);
        for e in mol.bonds() {
            assert_eq!(mol.bond(e).order, crate::BondOrder::Single);
        }
    }

    #[test]
    fn rejects_bad_input() {
        let top = Topology {
            atoms: vec![atom("X", "Qq")],
            bonds: vec![],
        };
        assert_eq!(
            top.to_mol().unwrap_err(),
            TopologyError::UnknownElement {
                atom: 0,
                symbol: "Qq".into()
            }
        );

        let top = Topology {
            atoms: vec![atom("C1", "C"), atom("C2", "C")],
            bonds: vec![[0, 2]],
        };
        assert_eq!(
            top.to_mol().unwrap_err(),
            TopologyError::AtomOutOfRange { bond: 0, atom: 2 }
        );

        let top = Topology {
            atoms: vec![atom("C1", "C"), atom("C2", "C")],
            bonds: vec![[1, 1]],
        };
        assert_eq!(
            top.to_mol().unwrap_err(),
            TopologyError::SelfBond { bond: 0, atom: 1 }
        );

        let top = Topology {
            atoms: vec![atom("C1", "C"), atom("C2", "C")],
            bonds: vec![[0, 1], [1, 0]],
        };
        assert_eq!(
            top.to_mol().unwrap_err(),
            TopologyError::DuplicateBond { bond: 1, a: 1, b: 0 }
        );
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            Topology::from_json("{\"bonds\": []}"),
            Err(TopologyError::Json(_))
        ));
    }
}
