use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::periodic::ValenceTable;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};
use crate::valence::{explicit_total_valence, validate_atom, ValenceError};

/// A molecular graph plus the derived per-atom data computed from it.
///
/// Total valences are cached by [`update_property_cache`](Mol::update_property_cache).
/// Any mutable access to an atom or bond drops the cache, so readers see
/// `None` from [`total_valence`](Mol::total_valence) until it is refreshed.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
    valence_cache: Option<Vec<u8>>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            valence_cache: None,
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        self.valence_cache = None;
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        self.valence_cache = None;
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.valence_cache = None;
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.valence_cache = None;
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Cached total valence, or `None` if the graph changed since the last
    /// [`update_property_cache`](Mol::update_property_cache).
    pub fn total_valence(&self, idx: NodeIndex) -> Option<u8> {
        self.valence_cache.as_ref()?.get(idx.index()).copied()
    }

    pub fn is_property_cache_fresh(&self) -> bool {
        self.valence_cache.is_some()
    }
}

impl<A, B> Mol<A, B>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    /// Recompute the cached total valences.
    ///
    /// With `strict == false` this never fails, so it can run on
    /// intermediate states that are not chemically valid. With
    /// `strict == true` every atom is also checked against its allowed
    /// valences and the first violation is returned; the cache is
    /// refreshed either way.
    pub fn update_property_cache<T: ValenceTable>(
        &mut self,
        table: &T,
        strict: bool,
    ) -> Result<(), ValenceError> {
        let valences: Vec<u8> = self
            .atoms()
            .map(|idx| explicit_total_valence(self, idx))
            .collect();
        let violation = if strict {
            valences
                .iter()
                .enumerate()
                .find_map(|(i, &v)| validate_atom(self, table, NodeIndex::new(i), v).err())
        } else {
            None
        };
        self.valence_cache = Some(valences);
        match violation {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            valence_cache: self.valence_cache.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        for idx in self.atoms() {
            if self.atom(idx) != other.atom(idx) {
                return false;
            }
        }
        for idx in self.bonds() {
            if self.bond(idx) != other.bond(idx) {
                return false;
            }
            if self.bond_endpoints(idx) != other.bond_endpoints(idx) {
                return false;
            }
        }
        true
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .field("property_cache_fresh", &self.is_property_cache_fresh())
            .finish()
    }
}
