use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Valence contribution in half-bond units (aromatic = 3, i.e. 1.5).
    pub fn half_valence(self) -> u16 {
        match self {
            BondOrder::Single => 2,
            BondOrder::Double => 4,
            BondOrder::Triple => 6,
            BondOrder::Aromatic => 3,
        }
    }

    /// The higher of `self` and `target`; bond orders never go down.
    pub fn raised_to(self, target: BondOrder) -> BondOrder {
        if target.half_valence() > self.half_valence() {
            target
        } else {
            self
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BondOrder::Single => "SINGLE",
            BondOrder::Double => "DOUBLE",
            BondOrder::Triple => "TRIPLE",
            BondOrder::Aromatic => "AROMATIC",
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a bond type name or integer order is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondOrderError {
    UnknownName(String),
    UnsupportedOrder(u8),
}

impl fmt::Display for BondOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName(name) => write!(f, "unknown bond type '{name}'"),
            Self::UnsupportedOrder(n) => write!(f, "unsupported bond order {n}"),
        }
    }
}

impl std::error::Error for BondOrderError {}

impl FromStr for BondOrder {
    type Err = BondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(BondOrder::Single),
            "DOUBLE" => Ok(BondOrder::Double),
            "TRIPLE" => Ok(BondOrder::Triple),
            "AROMATIC" => Ok(BondOrder::Aromatic),
            other => Err(BondOrderError::UnknownName(other.to_string())),
        }
    }
}

impl TryFrom<u8> for BondOrder {
    type Error = BondOrderError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            n => Err(BondOrderError::UnsupportedOrder(n)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondOrderMut for Bond {
    fn bond_order_mut(&mut self) -> &mut BondOrder {
        &mut self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("SINGLE".parse::<BondOrder>(), Ok(BondOrder::Single));
        assert_eq!("AROMATIC".parse::<BondOrder>(), Ok(BondOrder::Aromatic));
        assert_eq!(
            "double".parse::<BondOrder>(),
            Err(BondOrderError::UnknownName("double".into()))
        );
    }

    #[test]
    fn integer_orders() {
        assert_eq!(BondOrder::try_from(2), Ok(BondOrder::Double));
        assert_eq!(BondOrder::try_from(3), Ok(BondOrder::Triple));
        assert_eq!(
            BondOrder::try_from(4),
            Err(BondOrderError::UnsupportedOrder(4))
        );
    }

    #[test]
    fn raising_never_lowers() {
        assert_eq!(BondOrder::Single.raised_to(BondOrder::Double), BondOrder::Double);
        assert_eq!(BondOrder::Aromatic.raised_to(BondOrder::Double), BondOrder::Double);
        assert_eq!(BondOrder::Triple.raised_to(BondOrder::Double), BondOrder::Triple);
    }

    #[test]
    fn display_uses_upper_case_names() {
        assert_eq!(BondOrder::Triple.to_string(), "TRIPLE");
    }
}
