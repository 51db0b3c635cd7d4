//! Periodic table data needed for valence reasoning.
//!
//! Only what the bond-order and charge inference consumes lives here:
//! element identity, symbols, outer-shell electron counts and the default
//! valence lists. Anything tunable goes through
//! [`ValenceTable`](crate::periodic::ValenceTable) instead.

pub fn outer_shell_electrons(atomic_num: u8) -> u8 {
    OUTER_ELECTRONS
        .get(atomic_num as usize)
        .copied()
        .unwrap_or(0)
}

static OUTER_ELECTRONS: [u8; 119] = [
    0,  // dummy
    1, 2,                                                       // H  He
    1, 2, 3, 4, 5, 6, 7, 8,                                    // Li Be B  C  N  O  F  Ne
    1, 2, 3, 4, 5, 6, 7, 8,                                    // Na Mg Al Si P  S  Cl Ar
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8, // K  Ca Sc..Zn Ga Ge As Se Br Kr
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8, // Rb Sr Y ..Cd In Sn Sb Te I  Xe
    1, 2,                                                       // Cs Ba
    3, 4, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14,            // La Ce..Yb
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8,       // Lu Hf..Hg Tl Pb Bi Po At Rn
    1, 2,                                                       // Fr Ra
    3, 4, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14,            // Ac Th..No
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4, 5, 6, 7, 8,       // Lr Rf..Cn Nh Fl Mc Lv Ts Og
];

/// Periodic table data for elements 1–118.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He = 2,
    Li = 3,
    Be = 4,
    B = 5,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Ne = 10,
    Na = 11,
    Mg = 12,
    Al = 13,
    Si = 14,
    P = 15,
    S = 16,
    Cl = 17,
    Ar = 18,
    K = 19,
    Ca = 20,
    Sc = 21,
    Ti = 22,
    V = 23,
    Cr = 24,
    Mn = 25,
    Fe = 26,
    Co = 27,
    Ni = 28,
    Cu = 29,
    Zn = 30,
    Ga = 31,
    Ge = 32,
    As = 33,
    Se = 34,
    Br = 35,
    Kr = 36,
    Rb = 37,
    Sr = 38,
    Y = 39,
    Zr = 40,
    Nb = 41,
    Mo = 42,
    Tc = 43,
    Ru = 44,
    Rh = 45,
    Pd = 46,
    Ag = 47,
    Cd = 48,
    In = 49,
    Sn = 50,
    Sb = 51,
    Te = 52,
    I = 53,
    Xe = 54,
    Cs = 55,
    Ba = 56,
    La = 57,
    Ce = 58,
    Pr = 59,
    Nd = 60,
    Pm = 61,
    Sm = 62,
    Eu = 63,
    Gd = 64,
    Tb = 65,
    Dy = 66,
    Ho = 67,
    Er = 68,
    Tm = 69,
    Yb = 70,
    Lu = 71,
    Hf = 72,
    Ta = 73,
    W = 74,
    Re = 75,
    Os = 76,
    Ir = 77,
    Pt = 78,
    Au = 79,
    Hg = 80,
    Tl = 81,
    Pb = 82,
    Bi = 83,
    Po = 84,
    At = 85,
    Rn = 86,
    Fr = 87,
    Ra = 88,
    Ac = 89,
    Th = 90,
    Pa = 91,
    U = 92,
    Np = 93,
    Pu = 94,
    Am = 95,
    Cm = 96,
    Bk = 97,
    Cf = 98,
    Es = 99,
    Fm = 100,
    Md = 101,
    No = 102,
    Lr = 103,
    Rf = 104,
    Db = 105,
    Sg = 106,
    Bh = 107,
    Hs = 108,
    Mt = 109,
    Ds = 110,
    Rg = 111,
    Cn = 112,
    Nh = 113,
    Fl = 114,
    Mc = 115,
    Lv = 116,
    Ts = 117,
    Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        let idx = (n as usize).checked_sub(1)?;
        SYMBOL_TABLE.get(idx).map(|(_, e)| *e)
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        SYMBOL_TABLE.iter().find(|(sym, _)| *sym == s).map(|(_, e)| *e)
    }

    /// Symbol lookup tolerant of the upper-case element columns written by
    /// PDB-style topology readers (`CL`, `NA`, `ZN`).
    pub fn from_symbol_ignore_case(s: &str) -> Option<Element> {
        let s = s.trim();
        SYMBOL_TABLE
            .iter()
            .find(|(sym, _)| sym.eq_ignore_ascii_case(s))
            .map(|(_, e)| *e)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        SYMBOL_TABLE[self as usize - 1].0
    }

    pub fn outer_shell_electrons(self) -> u8 {
        outer_shell_electrons(self as u8)
    }

    /// Chemically allowed valences for the neutral element, lowest first.
    ///
    /// `None` for elements with no fixed valence (transition metals,
    /// lanthanides, actinides), which bond to as many partners as the
    /// structure gives them.
    pub fn valence_list(self) -> Option<&'static [u8]> {
        use Element::*;
        let list: &'static [u8] = match self {
            H | Li | Na | K | Rb | Cs | Fr => &[1],
            Be | Mg | Ca | Sr | Ba | Ra => &[2],
            B | Al | Ga | In => &[3],
            Tl => &[1, 3],
            C | Si | Ge => &[4],
            Sn | Pb => &[2, 4],
            N => &[3],
            P | As | Sb | Bi => &[3, 5, 7],
            O => &[2],
            S | Se | Te | Po => &[2, 4, 6],
            F | Cl | Br | At => &[1],
            I => &[1, 3, 5],
            He | Ne | Ar | Kr | Rn => &[0],
            Xe => &[0, 2, 4, 6],
            _ => return None,
        };
        Some(list)
    }
}

// symbol, Element pairs for from_symbol lookup
const SYMBOL_TABLE: [(&str, Element); 118] = [
    ("H", Element::H), ("He", Element::He), ("Li", Element::Li), ("Be", Element::Be),
    ("B", Element::B), ("C", Element::C), ("N", Element::N), ("O", Element::O),
    ("F", Element::F), ("Ne", Element::Ne), ("Na", Element::Na), ("Mg", Element::Mg),
    ("Al", Element::Al), ("Si", Element::Si), ("P", Element::P), ("S", Element::S),
    ("Cl", Element::Cl), ("Ar", Element::Ar), ("K", Element::K), ("Ca", Element::Ca),
    ("Sc", Element::Sc), ("Ti", Element::Ti), ("V", Element::V), ("Cr", Element::Cr),
    ("Mn", Element::Mn), ("Fe", Element::Fe), ("Co", Element::Co), ("Ni", Element::Ni),
    ("Cu", Element::Cu), ("Zn", Element::Zn), ("Ga", Element::Ga), ("Ge", Element::Ge),
    ("As", Element::As), ("Se", Element::Se), ("Br", Element::Br), ("Kr", Element::Kr),
    ("Rb", Element::Rb), ("Sr", Element::Sr), ("Y", Element::Y), ("Zr", Element::Zr),
    ("Nb", Element::Nb), ("Mo", Element::Mo), ("Tc", Element::Tc), ("Ru", Element::Ru),
    ("Rh", Element::Rh), ("Pd", Element::Pd), ("Ag", Element::Ag), ("Cd", Element::Cd),
    ("In", Element::In), ("Sn", Element::Sn), ("Sb", Element::Sb), ("Te", Element::Te),
    ("I", Element::I), ("Xe", Element::Xe), ("Cs", Element::Cs), ("Ba", Element::Ba),
    ("La", Element::La), ("Ce", Element::Ce), ("Pr", Element::Pr), ("Nd", Element::Nd),
    ("Pm", Element::Pm), ("Sm", Element::Sm), ("Eu", Element::Eu), ("Gd", Element::Gd),
    ("Tb", Element::Tb), ("Dy", Element::Dy), ("Ho", Element::Ho), ("Er", Element::Er),
    ("Tm", Element::Tm), ("Yb", Element::Yb), ("Lu", Element::Lu), ("Hf", Element::Hf),
    ("Ta", Element::Ta), ("W", Element::W), ("Re", Element::Re), ("Os", Element::Os),
    ("Ir", Element::Ir), ("Pt", Element::Pt), ("Au", Element::Au), ("Hg", Element::Hg),
    ("Tl", Element::Tl), ("Pb", Element::Pb), ("Bi", Element::Bi), ("Po", Element::Po),
    ("At", Element::At), ("Rn", Element::Rn), ("Fr", Element::Fr), ("Ra", Element::Ra),
    ("Ac", Element::Ac), ("Th", Element::Th), ("Pa", Element::Pa), ("U", Element::U),
    ("Np", Element::Np), ("Pu", Element::Pu), ("Am", Element::Am), ("Cm", Element::Cm),
    ("Bk", Element::Bk), ("Cf", Element::Cf), ("Es", Element::Es), ("Fm", Element::Fm),
    ("Md", Element::Md), ("No", Element::No), ("Lr", Element::Lr), ("Rf", Element::Rf),
    ("Db", Element::Db), ("Sg", Element::Sg), ("Bh", Element::Bh), ("Hs", Element::Hs),
    ("Mt", Element::Mt), ("Ds", Element::Ds), ("Rg", Element::Rg), ("Cn", Element::Cn),
    ("Nh", Element::Nh), ("Fl", Element::Fl), ("Mc", Element::Mc), ("Lv", Element::Lv),
    ("Ts", Element::Ts), ("Og", Element::Og),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_num_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(e.atomic_num(), n);
        }
    }

    #[test]
    fn from_atomic_num_boundaries() {
        assert!(Element::from_atomic_num(0).is_none());
        assert!(Element::from_atomic_num(119).is_none());
        assert!(Element::from_atomic_num(255).is_none());
        assert_eq!(Element::from_atomic_num(1), Some(Element::H));
        assert_eq!(Element::from_atomic_num(118), Some(Element::Og));
    }

    #[test]
    fn symbol_lookup_is_case_sensitive() {
        assert_eq!(Element::from_symbol("Cl"), Some(Element::Cl));
        assert!(Element::from_symbol("CL").is_none());
        assert!(Element::from_symbol("").is_none());
    }

    #[test]
    fn topology_symbols_ignore_case() {
        assert_eq!(Element::from_symbol_ignore_case("CL"), Some(Element::Cl));
        assert_eq!(Element::from_symbol_ignore_case("na"), Some(Element::Na));
        assert_eq!(Element::from_symbol_ignore_case(" C "), Some(Element::C));
        assert!(Element::from_symbol_ignore_case("Xx").is_none());
    }

    #[test]
    fn symbol_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn organic_valences() {
        assert_eq!(Element::H.valence_list(), Some(&[1u8][..]));
        assert_eq!(Element::C.valence_list(), Some(&[4u8][..]));
        assert_eq!(Element::N.valence_list(), Some(&[3u8][..]));
        assert_eq!(Element::O.valence_list(), Some(&[2u8][..]));
        assert_eq!(Element::P.valence_list(), Some(&[3u8, 5, 7][..]));
        assert_eq!(Element::S.valence_list(), Some(&[2u8, 4, 6][..]));
        assert_eq!(Element::I.valence_list(), Some(&[1u8, 3, 5][..]));
    }

    #[test]
    fn main_group_metals_and_noble_gases() {
        assert_eq!(Element::Na.valence_list(), Some(&[1u8][..]));
        assert_eq!(Element::K.valence_list(), Some(&[1u8][..]));
        assert_eq!(Element::Mg.valence_list(), Some(&[2u8][..]));
        assert_eq!(Element::Ca.valence_list(), Some(&[2u8][..]));
        assert_eq!(Element::Al.valence_list(), Some(&[3u8][..]));
        assert_eq!(Element::He.valence_list(), Some(&[0u8][..]));
    }

    #[test]
    fn transition_metals_have_no_fixed_valence() {
        assert_eq!(Element::Zn.valence_list(), None);
        assert_eq!(Element::Fe.valence_list(), None);
        assert_eq!(Element::U.valence_list(), None);
    }

    #[test]
    fn outer_electrons_spot_check() {
        assert_eq!(Element::B.outer_shell_electrons(), 3);
        assert_eq!(Element::C.outer_shell_electrons(), 4);
        assert_eq!(Element::O.outer_shell_electrons(), 6);
        assert_eq!(outer_shell_electrons(0), 0);
        assert_eq!(outer_shell_electrons(200), 0);
    }
}
