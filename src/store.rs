/*
 * Copyright (c) 2018-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The adjacency storage backing graphs and views.
//!
//! An [`AdjacencyStore`] is the single source of truth for the node set,
//! the node attributes and the edge topology/attributes of one graph. It
//! is a nested mapping: node to neighbor to edge slot. The slot of an
//! undirected edge is stored under both endpoints, the slot of a directed
//! edge under the successor row of its source and the predecessor row of
//! its sink — and both positions hold clones of the *same* shared handle,
//! so the two sides cannot diverge. Keeping those mirror entries in sync
//! on every mutation is this module's job; everything above it only reads.

use crate::attrmap::{shared, AttrMap, SharedAttrs};
use crate::error::GraphError;
use crate::traits::NodeKey;

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Directedness and multiplicity of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GraphKind {
    /// Simple undirected graph.
    Graph,
    /// Simple directed graph.
    DiGraph,
    /// Undirected graph with parallel edges.
    MultiGraph,
    /// Directed graph with parallel edges.
    MultiDiGraph,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        match self {
            GraphKind::DiGraph | GraphKind::MultiDiGraph => true,
            GraphKind::Graph | GraphKind::MultiGraph => false,
        }
    }

    pub fn is_multigraph(self) -> bool {
        match self {
            GraphKind::MultiGraph | GraphKind::MultiDiGraph => true,
            GraphKind::Graph | GraphKind::DiGraph => false,
        }
    }

    /// The directed kind of the same multiplicity.
    pub fn to_directed(self) -> GraphKind {
        if self.is_multigraph() {
            GraphKind::MultiDiGraph
        } else {
            GraphKind::DiGraph
        }
    }

    /// The undirected kind of the same multiplicity.
    pub fn to_undirected(self) -> GraphKind {
        if self.is_multigraph() {
            GraphKind::MultiGraph
        } else {
            GraphKind::Graph
        }
    }
}

/// Key distinguishing the parallel edges of one node pair in a multigraph.
///
/// Keys are unique only within their `(u, v)` pair. An automatically
/// assigned key is the smallest unused non-negative integer for that pair;
/// explicit keys may be integers or names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EdgeKey {
    Index(u64),
    Name(String),
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            EdgeKey::Index(k) => write!(f, "{}", k),
            EdgeKey::Name(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<u64> for EdgeKey {
    fn from(k: u64) -> Self {
        EdgeKey::Index(k)
    }
}

impl From<u32> for EdgeKey {
    fn from(k: u32) -> Self {
        EdgeKey::Index(k as u64)
    }
}

impl From<&str> for EdgeKey {
    fn from(s: &str) -> Self {
        EdgeKey::Name(s.to_string())
    }
}

impl From<String> for EdgeKey {
    fn from(s: String) -> Self {
        EdgeKey::Name(s)
    }
}

/// Table of the parallel edges of one node pair.
pub(crate) type KeyTable = Rc<RefCell<IndexMap<EdgeKey, SharedAttrs>>>;

/// Storage slot for the edges between one node pair.
///
/// `Clone` is aliasing: a cloned entry shares its handles with the
/// original. That is exactly what the mirror positions require.
#[derive(Clone)]
pub(crate) enum EdgeEntry {
    /// The single edge of a simple graph.
    Single(SharedAttrs),
    /// The keyed parallel edges of a multigraph.
    Multi(KeyTable),
}

impl EdgeEntry {
    /// Number of edges in this slot.
    pub(crate) fn multiplicity(&self) -> usize {
        match self {
            EdgeEntry::Single(_) => 1,
            EdgeEntry::Multi(table) => table.borrow().len(),
        }
    }

    /// The attribute handle for the given key shape, if present.
    pub(crate) fn attrs_for(&self, key: Option<&EdgeKey>) -> Option<SharedAttrs> {
        match (self, key) {
            (EdgeEntry::Single(handle), None) => Some(handle.clone()),
            (EdgeEntry::Multi(table), Some(k)) => table.borrow().get(k).cloned(),
            _ => None,
        }
    }

    pub(crate) fn keys(&self) -> Vec<EdgeKey> {
        match self {
            EdgeEntry::Single(_) => vec![],
            EdgeEntry::Multi(table) => table.borrow().keys().cloned().collect(),
        }
    }
}

/// How a scope reads the storage orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Projection {
    /// Read the storage as stored.
    Native,
    /// Undirected storage presented as a symmetric directed graph.
    Symmetric,
    /// Directed storage presented as its undirected union.
    Union,
    /// Directed storage, undirected union, presented directed again.
    UnionSymmetric,
}

/// Orientation and projection a graph object applies when reading its
/// root storage. Composed once at view-construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ReadPlan {
    /// Swap successor and predecessor roles. Only meaningful for the
    /// `Native` projection of directed storage; the other projections are
    /// orientation-free.
    pub(crate) reversed: bool,
    pub(crate) projection: Projection,
}

impl ReadPlan {
    pub(crate) fn native() -> Self {
        ReadPlan {
            reversed: false,
            projection: Projection::Native,
        }
    }
}

/// The nested adjacency mapping owning all node and edge data.
pub(crate) struct AdjacencyStore<N: NodeKey> {
    pub(crate) kind: GraphKind,
    pub(crate) graph_attrs: SharedAttrs,
    /// Node attributes, in node insertion order.
    pub(crate) nodes: IndexMap<N, SharedAttrs>,
    /// Adjacency rows. For undirected kinds this holds both mirror
    /// entries of every edge; for directed kinds only the outgoing arcs.
    pub(crate) succ: IndexMap<N, IndexMap<N, EdgeEntry>>,
    /// Incoming arcs of directed kinds, aliasing the successor entries.
    /// Unused (all rows empty) for undirected kinds.
    pub(crate) pred: IndexMap<N, IndexMap<N, EdgeEntry>>,
    /// Number of edges, self-loops counted once.
    pub(crate) nedges: usize,
}

impl<N: NodeKey> AdjacencyStore<N> {
    pub(crate) fn new(kind: GraphKind) -> Self {
        AdjacencyStore {
            kind,
            graph_attrs: shared(AttrMap::new()),
            nodes: IndexMap::new(),
            succ: IndexMap::new(),
            pred: IndexMap::new(),
            nedges: 0,
        }
    }

    pub(crate) fn contains_node(&self, n: &N) -> bool {
        self.nodes.contains_key(n)
    }

    pub(crate) fn node_attrs(&self, n: &N) -> Option<SharedAttrs> {
        self.nodes.get(n).cloned()
    }

    /// Insert a node if absent; merge the attributes if present.
    pub(crate) fn add_node(&mut self, n: N, attrs: AttrMap) {
        if let Some(handle) = self.nodes.get(&n) {
            handle.borrow_mut().merge(&attrs);
        } else {
            self.nodes.insert(n.clone(), shared(attrs));
            self.succ.insert(n.clone(), IndexMap::new());
            if self.kind.is_directed() {
                self.pred.insert(n, IndexMap::new());
            }
        }
    }

    fn ensure_node(&mut self, n: &N) {
        if !self.nodes.contains_key(n) {
            self.add_node(n.clone(), AttrMap::new());
        }
    }

    /// Remove a node, its attributes and every incident edge from every
    /// index position.
    pub(crate) fn remove_node(&mut self, n: &N) -> Result<(), GraphError> {
        if self.nodes.shift_remove(n).is_none() {
            return Err(GraphError::node_not_found(n));
        }
        if let Some(row) = self.succ.shift_remove(n) {
            for (v, entry) in row.iter() {
                self.nedges -= entry.multiplicity();
                if self.kind.is_directed() {
                    if let Some(r) = self.pred.get_mut(v) {
                        r.shift_remove(n);
                    }
                } else if v != n {
                    if let Some(r) = self.succ.get_mut(v) {
                        r.shift_remove(n);
                    }
                }
            }
        }
        if self.kind.is_directed() {
            if let Some(row) = self.pred.shift_remove(n) {
                for (v, entry) in row.iter() {
                    // the self-loop was already counted with the successor row
                    if v != n {
                        self.nedges -= entry.multiplicity();
                        if let Some(r) = self.succ.get_mut(v) {
                            r.shift_remove(n);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The stored edge slot of the pair `(u, v)` in storage orientation.
    pub(crate) fn entry(&self, u: &N, v: &N) -> Option<&EdgeEntry> {
        self.succ.get(u).and_then(|row| row.get(v))
    }

    /// Install `entry` under `(u, v)` and the aliasing mirror position.
    fn link(&mut self, u: &N, v: &N, entry: EdgeEntry) {
        self.succ
            .get_mut(u)
            .expect("source row must exist")
            .insert(v.clone(), entry.clone());
        if self.kind.is_directed() {
            self.pred
                .get_mut(v)
                .expect("sink row must exist")
                .insert(u.clone(), entry);
        } else if u != v {
            self.succ
                .get_mut(v)
                .expect("mirror row must exist")
                .insert(u.clone(), entry);
        }
    }

    /// Drop the slot of `(u, v)` from both index positions.
    fn unlink(&mut self, u: &N, v: &N) {
        if let Some(row) = self.succ.get_mut(u) {
            row.shift_remove(v);
        }
        if self.kind.is_directed() {
            if let Some(row) = self.pred.get_mut(v) {
                row.shift_remove(u);
            }
        } else if u != v {
            if let Some(row) = self.succ.get_mut(v) {
                row.shift_remove(u);
            }
        }
    }

    /// Add an edge, creating absent endpoints.
    ///
    /// On a simple graph an existing edge is upserted (the supplied
    /// attribute names overwrite, everything else is kept, the shared
    /// mapping object stays the same) and `None` is returned. On a
    /// multigraph a new parallel edge with an auto-assigned key is created
    /// and the key returned.
    pub(crate) fn add_edge(&mut self, u: N, v: N, attrs: AttrMap) -> Option<EdgeKey> {
        if self.kind.is_multigraph() {
            let key = self.next_key(&u, &v);
            Some(self.insert_keyed(u, v, key, attrs))
        } else {
            let existing = self.entry(&u, &v).cloned();
            if let Some(EdgeEntry::Single(handle)) = existing {
                handle.borrow_mut().merge(&attrs);
                return None;
            }
            self.ensure_node(&u);
            self.ensure_node(&v);
            self.link(&u, &v, EdgeEntry::Single(shared(attrs)));
            self.nedges += 1;
            None
        }
    }

    /// Add a parallel edge under an explicit key.
    ///
    /// A duplicate key upserts that parallel edge's attributes.
    pub(crate) fn add_edge_key(
        &mut self,
        u: N,
        v: N,
        key: EdgeKey,
        attrs: AttrMap,
    ) -> Result<EdgeKey, GraphError> {
        if !self.kind.is_multigraph() {
            return Err(GraphError::capability(
                "explicit edge keys require a multigraph",
            ));
        }
        Ok(self.insert_keyed(u, v, key, attrs))
    }

    fn insert_keyed(&mut self, u: N, v: N, key: EdgeKey, attrs: AttrMap) -> EdgeKey {
        self.ensure_node(&u);
        self.ensure_node(&v);
        let table = match self.entry(&u, &v).cloned() {
            Some(EdgeEntry::Multi(table)) => table,
            Some(EdgeEntry::Single(_)) => unreachable!("simple edge slot in a multigraph store"),
            None => {
                let table: KeyTable = Rc::new(RefCell::new(IndexMap::new()));
                self.link(&u, &v, EdgeEntry::Multi(table.clone()));
                table
            }
        };
        let mut table = table.borrow_mut();
        if let Some(handle) = table.get(&key) {
            handle.borrow_mut().merge(&attrs);
        } else {
            table.insert(key.clone(), shared(attrs));
            self.nedges += 1;
        }
        key
    }

    /// The smallest unused integer key for the pair `(u, v)`.
    fn next_key(&self, u: &N, v: &N) -> EdgeKey {
        let mut k = 0u64;
        if let Some(EdgeEntry::Multi(table)) = self.entry(u, v) {
            let table = table.borrow();
            while table.contains_key(&EdgeKey::Index(k)) {
                k += 1;
            }
        }
        EdgeKey::Index(k)
    }

    /// Remove the edge `(u, v)`.
    ///
    /// On a multigraph the most recently added parallel edge is removed.
    pub(crate) fn remove_edge(&mut self, u: &N, v: &N) -> Result<(), GraphError> {
        if self.kind.is_multigraph() {
            let last = match self.entry(u, v) {
                Some(EdgeEntry::Multi(table)) => table.borrow().keys().last().cloned(),
                _ => None,
            };
            match last {
                Some(key) => self.remove_edge_key(u, v, &key),
                None => Err(GraphError::edge_not_found(u, v)),
            }
        } else {
            if self.entry(u, v).is_none() {
                return Err(GraphError::edge_not_found(u, v));
            }
            self.unlink(u, v);
            self.nedges -= 1;
            Ok(())
        }
    }

    /// Remove the parallel edge `(u, v, key)`.
    pub(crate) fn remove_edge_key(&mut self, u: &N, v: &N, key: &EdgeKey) -> Result<(), GraphError> {
        if !self.kind.is_multigraph() {
            return Err(GraphError::capability(
                "explicit edge keys require a multigraph",
            ));
        }
        let table = match self.entry(u, v) {
            Some(EdgeEntry::Multi(table)) => table.clone(),
            _ => return Err(GraphError::edge_not_found(u, v)),
        };
        let emptied = {
            let mut table = table.borrow_mut();
            if table.shift_remove(key).is_none() {
                return Err(GraphError::edge_key_not_found(u, v, key));
            }
            self.nedges -= 1;
            table.is_empty()
        };
        if emptied {
            self.unlink(u, v);
        }
        Ok(())
    }

    /// Remove all nodes and edges and clear the graph attributes.
    ///
    /// The graph attribute handle itself is kept, so aliases observe the
    /// cleared mapping.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.succ.clear();
        self.pred.clear();
        self.nedges = 0;
        self.graph_attrs.borrow_mut().clear();
    }
}
