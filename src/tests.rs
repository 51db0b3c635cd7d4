use crate::*;

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom {
        atomic_num: 6,
        ..Atom::default()
    });
    let o = mol.add_atom(Atom {
        atomic_num: 8,
        ..Atom::default()
    });
    let bond_idx = mol.add_bond(
        c,
        o,
        Bond {
            order: BondOrder::Double,
        },
    );

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_neighbors_and_bonds_of() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    mol.add_bond(a, b, Bond::default());
    mol.add_bond(a, c, Bond::default());

    let neighbors: Vec<_> = mol.neighbors(a).collect();
    assert_eq!(neighbors.len(), 2);

    let incident: Vec<_> = mol.bonds_of(a).collect();
    assert_eq!(incident.len(), 2);
}

#[test]
fn mol_bond_between_and_endpoints() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert_eq!(mol.bond_between(a, b), Some(e));
    assert_eq!(mol.bond_between(b, a), Some(e));
    assert_eq!(mol.bond_between(a, c), None);

    let (src, dst) = mol.bond_endpoints(e).unwrap();
    assert!((src == a && dst == b) || (src == b && dst == a));
}

#[test]
fn neighbor_order_is_stable() {
    let mut mol = Mol::<Atom, Bond>::new();
    let center = mol.add_atom(Atom::new(6));
    for _ in 0..4 {
        let h = mol.add_atom(Atom::new(1));
        mol.add_bond(center, h, Bond::default());
    }
    let first: Vec<_> = mol.neighbors(center).collect();
    let second: Vec<_> = mol.neighbors(center).collect();
    assert_eq!(first, second);
}

#[test]
fn mutation_invalidates_property_cache() {
    let table = PeriodicTable::new();
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom::new(6));
    let o = mol.add_atom(Atom::new(8));
    let e = mol.add_bond(c, o, Bond::default());
    assert_eq!(mol.total_valence(c), None);

    mol.update_property_cache(&table, false).unwrap();
    assert_eq!(mol.total_valence(c), Some(1));

    mol.bond_mut(e).order = BondOrder::Double;
    assert_eq!(mol.total_valence(c), None);
    mol.update_property_cache(&table, false).unwrap();
    assert_eq!(mol.total_valence(o), Some(2));

    mol.atom_mut(c).formal_charge = 1;
    assert!(!mol.is_property_cache_fresh());
}

#[test]
fn permissive_refresh_tolerates_invalid_state() {
    let table = PeriodicTable::new();
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom {
        atomic_num: 6,
        hydrogen_count: 5,
        ..Atom::default()
    });
    assert!(mol.update_property_cache(&table, false).is_ok());
    mol.atom_mut(c).hydrogen_count = 6;
    let err = mol.update_property_cache(&table, true).unwrap_err();
    assert_eq!(err.atom_idx, c);
    assert_eq!(mol.total_valence(c), Some(6));
}

#[test]
fn atom_trait_impls() {
    let mut atom = Atom {
        atomic_num: 6,
        formal_charge: -1,
        hydrogen_count: 3,
    };

    assert_eq!(HasAtomicNum::atomic_num(&atom), 6);
    assert_eq!(HasFormalCharge::formal_charge(&atom), -1);
    assert_eq!(HasHydrogenCount::hydrogen_count(&atom), 3);
    *HasFormalChargeMut::formal_charge_mut(&mut atom) = 0;
    assert_eq!(atom.formal_charge, 0);
}

#[test]
fn bond_trait_impls() {
    let mut bond = Bond {
        order: BondOrder::Triple,
    };
    assert_eq!(HasBondOrder::bond_order(&bond), BondOrder::Triple);
    *HasBondOrderMut::bond_order_mut(&mut bond) = BondOrder::Aromatic;
    assert_eq!(bond.order, BondOrder::Aromatic);
}

#[test]
fn bond_order_default_is_single() {
    assert_eq!(BondOrder::default(), BondOrder::Single);
}

#[test]
fn atom_default() {
    let atom = Atom::default();
    assert_eq!(atom.atomic_num, 0);
    assert_eq!(atom.formal_charge, 0);
    assert_eq!(atom.hydrogen_count, 0);
}

#[test]
fn mol_default() {
    let mol = Mol::<Atom, Bond>::default();
    assert_eq!(mol.atom_count(), 0);
    assert_eq!(mol.bond_count(), 0);
}

#[test]
fn mol_equality_ignores_cache() {
    let mut a = Mol::<Atom, Bond>::new();
    a.add_atom(Atom::new(8));
    let mut b = a.clone();
    b.update_property_cache(&PeriodicTable::new(), false).unwrap();
    assert_eq!(a, b);
    b.atom_mut(petgraph::graph::NodeIndex::new(0)).formal_charge = -2;
    assert_ne!(a, b);
}

#[test]
fn topology_to_repaired_mol() {
    // acetaldehyde, hydrogens explicit, no bond orders
    let top = Topology::from_json(
        r#"{
            "atoms": [
                {"name": "C1", "element": "C", "resname": "ACD1"},
                {"name": "C2", "element": "C", "resname": "ACD1"},
                {"name": "O1", "element": "O", "resname": "ACD1"},
                {"name": "H1", "element": "H", "resname": "ACD1"},
                {"name": "H2", "element": "H", "resname": "ACD1"},
                {"name": "H3", "element": "H", "resname": "ACD1"},
                {"name": "H4", "element": "H", "resname": "ACD1"}
            ],
            "bonds": [[0, 1], [1, 2], [0, 3], [0, 4], [0, 5], [1, 6]]
        }"#,
    )
    .unwrap();
    let mut mol = top.to_mol().unwrap();
    update_bonds_and_charges_default(&mut mol).unwrap();

    let c2 = petgraph::graph::NodeIndex::new(1);
    let o1 = petgraph::graph::NodeIndex::new(2);
    let co = mol.bond_between(c2, o1).unwrap();
    assert_eq!(mol.bond(co).order, BondOrder::Double);
    assert!(mol.atoms().all(|a| mol.atom(a).formal_charge == 0));
    assert_eq!(top.residue_number(0), Some(1));
}
