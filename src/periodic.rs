//! Valence lookup used by the inference pass.
//!
//! [`ValenceTable`] answers "which valences may this element have?". The
//! answer is either a list of allowed valences or [`Valences::Any`] for
//! elements with no fixed valence, such as zinc or iron. The default
//! [`PeriodicTable`] reads [`Element::valence_list`] and can be configured
//! with per-element overrides, either in code or from a JSON object mapping
//! element symbols to valence lists or to `"any"`:
//!
//! ```
//! use bondfix::periodic::{PeriodicTable, ValenceTable, Valences};
//!
//! let table = PeriodicTable::from_json(r#"{"N": [3, 5], "Mg": "any"}"#).unwrap();
//! assert_eq!(table.valences(7), Some(Valences::Listed(&[3, 5])));
//! assert_eq!(table.valences(6), Some(Valences::Listed(&[4])));
//! assert_eq!(table.valences(12), Some(Valences::Any));
//! assert_eq!(table.valences(30), Some(Valences::Any));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valences<'a> {
    /// Allowed valences of the neutral atom, lowest first.
    Listed(&'a [u8]),
    /// No fixed valence: any number of bonds is acceptable.
    Any,
}

pub trait ValenceTable {
    /// Valences for a neutral atom of `atomic_num`, or `None` when the
    /// atomic number is not a known element.
    fn valences(&self, atomic_num: u8) -> Option<Valences<'_>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Override {
    Listed(Vec<u8>),
    Any,
}

#[derive(Debug, Clone, Default)]
pub struct PeriodicTable {
    overrides: HashMap<u8, Override>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValences {
    List(Vec<u8>),
    Keyword(String),
}

impl PeriodicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, element: Element, valences: Vec<u8>) -> Self {
        self.overrides
            .insert(element.atomic_num(), Override::Listed(valences));
        self
    }

    pub fn with_any_valence(mut self, element: Element) -> Self {
        self.overrides.insert(element.atomic_num(), Override::Any);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, TableConfigError> {
        let raw: BTreeMap<String, RawValences> =
            serde_json::from_str(json).map_err(|e| TableConfigError::Json(e.to_string()))?;
        let mut table = Self::new();
        for (symbol, valences) in raw {
            let elem = Element::from_symbol(&symbol)
                .ok_or_else(|| TableConfigError::UnknownElement(symbol.clone()))?;
            table = match valences {
                RawValences::List(list) if list.is_empty() => {
                    return Err(TableConfigError::EmptyValenceList(symbol))
                }
                RawValences::List(list) => table.with_override(elem, list),
                RawValences::Keyword(word) if word == "any" => table.with_any_valence(elem),
                RawValences::Keyword(word) => {
                    return Err(TableConfigError::UnknownKeyword { symbol, word })
                }
            };
        }
        Ok(table)
    }
}

impl ValenceTable for PeriodicTable {
    fn valences(&self, atomic_num: u8) -> Option<Valences<'_>> {
        match self.overrides.get(&atomic_num) {
            Some(Override::Listed(list)) => return Some(Valences::Listed(list)),
            Some(Override::Any) => return Some(Valences::Any),
            None => {}
        }
        let elem = Element::from_atomic_num(atomic_num)?;
        Some(match elem.valence_list() {
            Some(list) => Valences::Listed(list),
            None => Valences::Any,
        })
    }
}

/// Error returned when a valence table configuration cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConfigError {
    /// The configuration is not a JSON object of symbol → valence list or `"any"`.
    Json(String),
    /// A key is not an element symbol.
    UnknownElement(String),
    /// An element was configured with no valences at all.
    EmptyValenceList(String),
    /// A string value other than `"any"`.
    UnknownKeyword { symbol: String, word: String },
}

impl fmt::Display for TableConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid valence table: {msg}"),
            Self::UnknownElement(sym) => write!(f, "unknown element symbol '{sym}'"),
            Self::EmptyValenceList(sym) => write!(f, "empty valence list for '{sym}'"),
            Self::UnknownKeyword { symbol, word } => {
                write!(f, "'{symbol}': expected a valence list or \"any\", got '{word}'")
            }
        }
    }
}

impl std::error::Error for TableConfigError {}
