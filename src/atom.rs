/// Default atom type for a molecular graph node.
///
/// `Atom` carries what a topology reader knows about an atom plus the one
/// field the inference pass may rewrite: the formal charge. Derived values
/// such as total valence are cached on the [`Mol`](crate::Mol), not here.
///
/// # Examples
///
/// ```
/// use bondfix::Atom;
///
/// let oxygen = Atom {
///     atomic_num: 8,
///     formal_charge: 0,
///     hydrogen_count: 0,
/// };
/// assert_eq!(oxygen.atomic_num, 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units (e.g. −1 for a carboxylate oxygen).
    pub formal_charge: i8,
    /// Number of implicit hydrogens on this atom.
    ///
    /// Hydrogens supplied by a topology are usually explicit graph nodes, in
    /// which case this stays `0`. It still counts toward the total valence.
    pub hydrogen_count: u8,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasFormalChargeMut for Atom {
    fn formal_charge_mut(&mut self) -> &mut i8 {
        &mut self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
