//! Terminal chemical-consistency check.
//!
//! [`sanitize`] is the strict counterpart to the permissive
//! [`Mol::update_property_cache`] refresh: it rejects the molecule if any
//! atom's total valence is not allowed for its element and formal charge,
//! and reports every offending atom rather than only the first.

use std::fmt;

use crate::mol::Mol;
use crate::periodic::ValenceTable;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
use crate::valence::{check_valence, ValenceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// One or more atoms have a valence their element and charge do not allow.
    Valence(Vec<ValenceError>),
}

impl fmt::Display for SanitizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valence(errors) => {
                write!(f, "sanitization failed: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SanitizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Valence(errors) => errors
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ValenceError> for SanitizeError {
    fn from(e: ValenceError) -> Self {
        Self::Valence(vec![e])
    }
}

pub fn sanitize<A, B, T>(mol: &mut Mol<A, B>, table: &T) -> Result<(), SanitizeError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
    T: ValenceTable,
{
    if let Err(errors) = check_valence(mol, table) {
        log::debug!("sanitize: {} atom(s) with invalid valence", errors.len());
        return Err(SanitizeError::Valence(errors));
    }
    // already checked above
    mol.update_property_cache(table, false)?;
    Ok(())
}
