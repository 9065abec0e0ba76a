/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The mutable graph.
//!
//! [`Graph`] is the owning facade over one adjacency store. Its kind —
//! directed or not, parallel edges or not — is a runtime tag chosen at
//! construction; the read surface is the shared
//! [`GraphLike`](crate::traits::GraphLike) contract, so algorithms can take
//! any graph or view polymorphically.
//!
//! Adding a node or edge that already exists is an upsert: the supplied
//! attribute names overwrite, everything else (including the shared
//! attribute mapping object itself) is kept. Bulk operations apply their
//! elements in iteration order and stop at the first failure; the elements
//! already applied stay applied.
//!
//! # Example
//!
//! ```
//! use adjmaps::{Graph, GraphLike};
//!
//! let mut g = Graph::undirected();
//! g.add_edge(1, 2);
//! g.add_edge(2, 3);
//!
//! assert_eq!(g.degree(&2), Ok(2));
//! assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert!(!g.has_edge(&1, &3));
//! ```

use crate::adjacencies::{self, EdgeIt, NodeIt, Scope};
use crate::attrmap::{AttrMap, SharedAttrs};
use crate::error::GraphError;
use crate::store::{AdjacencyStore, EdgeKey, GraphKind, ReadPlan};
use crate::traits::{Edge, GraphLike, NodeKey};
use crate::views::GraphView;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A mutable graph over a shared adjacency store.
///
/// Views constructed from a graph keep the store alive and observe every
/// later mutation; the graph itself is the only writer.
pub struct Graph<N: NodeKey> {
    store: Rc<RefCell<AdjacencyStore<N>>>,
}

impl<N: NodeKey> Graph<N> {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            store: Rc::new(RefCell::new(AdjacencyStore::new(kind))),
        }
    }

    /// Create an empty simple undirected graph.
    pub fn undirected() -> Self {
        Graph::new(GraphKind::Graph)
    }

    /// Create an empty simple directed graph.
    pub fn directed() -> Self {
        Graph::new(GraphKind::DiGraph)
    }

    /// Create an empty undirected multigraph.
    pub fn multigraph() -> Self {
        Graph::new(GraphKind::MultiGraph)
    }

    /// Create an empty directed multigraph.
    pub fn multi_digraph() -> Self {
        Graph::new(GraphKind::MultiDiGraph)
    }

    /// Create a graph from an edge list.
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut g = Graph::new(kind);
        g.add_edges_from(edges);
        g
    }

    /// Create a graph from adjacency rows (node to neighbor list).
    ///
    /// Undirected inputs usually list every edge from both endpoints; the
    /// mirror listings collapse into one edge.
    pub fn from_adjacency<I, R>(kind: GraphKind, rows: I) -> Self
    where
        I: IntoIterator<Item = (N, R)>,
        R: IntoIterator<Item = N>,
    {
        let mut g = Graph::new(kind);
        let mut seen: Vec<(N, N)> = Vec::new();
        for (u, neighbors) in rows {
            g.add_node(u.clone());
            for v in neighbors {
                if !kind.is_directed() {
                    if seen.contains(&(v.clone(), u.clone())) {
                        continue;
                    }
                    seen.push((u.clone(), v.clone()));
                }
                g.add_edge(u.clone(), v);
            }
        }
        g
    }

    /// Create a graph from adjacency rows with edge attributes.
    ///
    /// For undirected kinds the two mirror listings of an edge must carry
    /// equal attribute mappings; a contradiction is malformed input.
    pub fn from_adjacency_attrs<I, R>(kind: GraphKind, rows: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, R)>,
        R: IntoIterator<Item = (N, AttrMap)>,
    {
        let mut g = Graph::new(kind);
        let mut seen: Vec<(N, N, AttrMap)> = Vec::new();
        for (u, neighbors) in rows {
            g.add_node(u.clone());
            for (v, attrs) in neighbors {
                if !kind.is_directed() {
                    if let Some((_, _, first)) = seen
                        .iter()
                        .find(|(a, b, _)| *a == v && *b == u)
                    {
                        if *first != attrs {
                            return Err(GraphError::MalformedInput(format!(
                                "conflicting attributes for the mirror listings of edge ({:?}, {:?})",
                                v, u
                            )));
                        }
                        continue;
                    }
                    seen.push((u.clone(), v.clone(), attrs.clone()));
                }
                g.add_edge_attrs(u.clone(), v, attrs);
            }
        }
        Ok(g)
    }

    /// Create an independent copy of any graph or view.
    ///
    /// The copy owns fresh storage and fresh attribute mappings: nothing
    /// is aliased with the source, while the internal sharing (mirror
    /// positions of one edge) is reestablished in the copy.
    pub fn from_graph<G>(g: &G) -> Graph<N>
    where
        G: GraphLike<N>,
    {
        let mut out = Graph::new(g.kind());
        out.graph_attrs().borrow_mut().merge(&g.graph_attrs().borrow());
        for n in g.nodes() {
            let attrs = match g.node_attrs(&n) {
                Ok(handle) => handle.borrow().clone(),
                Err(_) => AttrMap::new(),
            };
            out.add_node_attrs(n, attrs);
        }
        for e in g.edges() {
            let attrs = e.attrs.borrow().clone();
            if let Some(key) = e.key {
                // edges read from a multigraph always carry their key
                out.store
                    .borrow_mut()
                    .add_edge_key(e.u, e.v, key, attrs)
                    .expect("source and copy have the same multiplicity");
            } else {
                out.add_edge_attrs(e.u, e.v, attrs);
            }
        }
        out
    }

    /// An independent copy of this graph.
    pub fn copy(&self) -> Graph<N> {
        Graph::from_graph(self)
    }

    pub(crate) fn store_handle(&self) -> &Rc<RefCell<AdjacencyStore<N>>> {
        &self.store
    }

    // -- mutation --

    /// Insert a node; an existing node is left unchanged.
    pub fn add_node(&mut self, n: N) {
        self.store.borrow_mut().add_node(n, AttrMap::new());
    }

    /// Insert a node, upserting the given attributes if it exists.
    pub fn add_node_attrs(&mut self, n: N, attrs: AttrMap) {
        self.store.borrow_mut().add_node(n, attrs);
    }

    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = N>,
    {
        for n in nodes {
            self.add_node(n);
        }
    }

    /// Remove a node, its attributes and all incident edges.
    pub fn remove_node(&mut self, n: &N) -> Result<(), GraphError> {
        self.store.borrow_mut().remove_node(n)
    }

    /// Remove several nodes, stopping at the first missing one.
    pub fn remove_nodes_from<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        for n in nodes {
            self.remove_node(&n)?;
        }
        Ok(())
    }

    /// Add an edge, creating absent endpoints.
    ///
    /// Returns the assigned key on multigraphs; re-adding an existing edge
    /// of a simple graph upserts its attributes.
    pub fn add_edge(&mut self, u: N, v: N) -> Option<EdgeKey> {
        self.store.borrow_mut().add_edge(u, v, AttrMap::new())
    }

    /// Add an edge with attributes (upserting on simple graphs).
    pub fn add_edge_attrs(&mut self, u: N, v: N, attrs: AttrMap) -> Option<EdgeKey> {
        self.store.borrow_mut().add_edge(u, v, attrs)
    }

    /// Add a parallel edge under an explicit key (multigraphs only).
    ///
    /// A duplicate key upserts that parallel edge's attributes.
    pub fn add_edge_key<K>(&mut self, u: N, v: N, key: K, attrs: AttrMap) -> Result<EdgeKey, GraphError>
    where
        K: Into<EdgeKey>,
    {
        self.store.borrow_mut().add_edge_key(u, v, key.into(), attrs)
    }

    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Add edges with a `weight` attribute.
    pub fn add_weighted_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        for (u, v, w) in edges {
            self.add_edge_attrs(u, v, AttrMap::new().with("weight", w));
        }
    }

    /// Remove the edge `(u, v)`.
    ///
    /// On a multigraph the most recently added parallel edge is removed.
    pub fn remove_edge(&mut self, u: &N, v: &N) -> Result<(), GraphError> {
        self.store.borrow_mut().remove_edge(u, v)
    }

    /// Remove the parallel edge `(u, v, key)`.
    pub fn remove_edge_key(&mut self, u: &N, v: &N, key: &EdgeKey) -> Result<(), GraphError> {
        self.store.borrow_mut().remove_edge_key(u, v, key)
    }

    /// Remove several edges, stopping at the first missing one.
    pub fn remove_edges_from<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            self.remove_edge(&u, &v)?;
        }
        Ok(())
    }

    /// Remove all nodes and edges and clear the graph attributes.
    pub fn clear(&mut self) {
        self.store.borrow_mut().clear();
    }

    // -- views --

    /// The whole graph as a (read-only) view.
    pub fn as_view(&self) -> GraphView<N> {
        GraphView::whole(self)
    }

    /// The node-induced subgraph view: the given nodes and every edge of
    /// this graph between them. Live: later mutations of this graph show
    /// through the view.
    pub fn subgraph<I>(&self, nodes: I) -> GraphView<N>
    where
        I: IntoIterator<Item = N>,
    {
        self.as_view().subgraph(nodes)
    }

    /// The edge-induced subgraph view: exactly the given edges and their
    /// incident nodes.
    pub fn edge_subgraph<I>(&self, edges: I) -> Result<GraphView<N>, GraphError>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        self.as_view().edge_subgraph(edges)
    }

    /// The edge-induced subgraph view of a multigraph, keyed.
    pub fn edge_subgraph_keyed<I>(&self, edges: I) -> Result<GraphView<N>, GraphError>
    where
        I: IntoIterator<Item = (N, N, EdgeKey)>,
    {
        self.as_view().edge_subgraph_keyed(edges)
    }

    /// A view with successor and predecessor roles swapped.
    ///
    /// Fails on undirected graphs.
    pub fn reverse_view(&self) -> Result<GraphView<N>, GraphError> {
        self.as_view().reverse()
    }

    /// An independent reversed copy of a directed graph.
    pub fn reverse(&self) -> Result<Graph<N>, GraphError> {
        Ok(Graph::from_graph(&self.reverse_view()?))
    }

    /// A directed view of this graph (identity for directed kinds; an
    /// undirected edge becomes a symmetric pair of arcs).
    pub fn to_directed_view(&self) -> GraphView<N> {
        self.as_view().to_directed_view()
    }

    /// An independent directed copy.
    pub fn to_directed(&self) -> Graph<N> {
        Graph::from_graph(&self.to_directed_view())
    }

    /// An undirected view of this graph (identity for undirected kinds;
    /// opposite arcs collapse into one edge, successor attributes win).
    pub fn to_undirected_view(&self) -> GraphView<N> {
        self.as_view().to_undirected_view()
    }

    /// An independent undirected copy.
    pub fn to_undirected(&self) -> Graph<N> {
        Graph::from_graph(&self.to_undirected_view())
    }
}

impl<N: NodeKey> Scope<N> for Graph<N> {
    fn root(&self) -> &Rc<RefCell<AdjacencyStore<N>>> {
        &self.store
    }

    fn plan(&self) -> ReadPlan {
        ReadPlan::native()
    }

    fn scope_kind(&self) -> GraphKind {
        self.store.borrow().kind
    }

    fn admits_node(&self, _n: &N) -> bool {
        true
    }

    fn admits_arc(&self, _su: &N, _sv: &N, _key: Option<&EdgeKey>) -> bool {
        true
    }

    fn unrestricted(&self) -> bool {
        true
    }
}

impl<N: NodeKey> GraphLike<N> for Graph<N> {
    type NodeIt = NodeIt<N>;
    type EdgeIt = EdgeIt<N>;

    fn kind(&self) -> GraphKind {
        self.store.borrow().kind
    }

    fn num_nodes(&self) -> usize {
        adjacencies::count_nodes(self)
    }

    fn num_edges(&self) -> usize {
        adjacencies::count_edges(self)
    }

    fn nodes_iter(&self) -> NodeIt<N> {
        NodeIt::new()
    }

    fn edges_iter(&self) -> EdgeIt<N> {
        EdgeIt::new()
    }

    fn has_node(&self, u: &N) -> bool {
        adjacencies::contains_node(self, u)
    }

    fn has_edge(&self, u: &N, v: &N) -> bool {
        adjacencies::has_edge(self, u, v)
    }

    fn has_edge_key(&self, u: &N, v: &N, key: &EdgeKey) -> bool {
        adjacencies::has_edge_key(self, u, v, key)
    }

    fn graph_attrs(&self) -> SharedAttrs {
        self.store.borrow().graph_attrs.clone()
    }

    fn node_attrs(&self, u: &N) -> Result<SharedAttrs, GraphError> {
        adjacencies::node_attrs(self, u)
    }

    fn edge_attrs(&self, u: &N, v: &N) -> Result<SharedAttrs, GraphError> {
        adjacencies::edge_attrs(self, u, v)
    }

    fn edge_attrs_key(&self, u: &N, v: &N, key: &EdgeKey) -> Result<SharedAttrs, GraphError> {
        adjacencies::edge_attrs_key(self, u, v, key)
    }

    fn edge_keys(&self, u: &N, v: &N) -> Result<Vec<EdgeKey>, GraphError> {
        adjacencies::edge_keys(self, u, v)
    }

    fn number_of_edges_between(&self, u: &N, v: &N) -> usize {
        adjacencies::number_of_edges_between(self, u, v)
    }

    fn neighbors(&self, u: &N) -> Result<Vec<N>, GraphError> {
        adjacencies::neighbors(self, u)
    }

    fn successors(&self, u: &N) -> Result<Vec<N>, GraphError> {
        adjacencies::successors(self, u)
    }

    fn predecessors(&self, u: &N) -> Result<Vec<N>, GraphError> {
        adjacencies::predecessors(self, u)
    }

    fn edges_of(&self, u: &N) -> Result<Vec<Edge<N>>, GraphError> {
        adjacencies::edges_of(self, u)
    }

    fn degree(&self, u: &N) -> Result<usize, GraphError> {
        adjacencies::degree(self, u)
    }

    fn in_degree(&self, u: &N) -> Result<usize, GraphError> {
        adjacencies::in_degree(self, u)
    }

    fn out_degree(&self, u: &N) -> Result<usize, GraphError> {
        adjacencies::out_degree(self, u)
    }

    fn weighted_degree(&self, u: &N, weight: &str) -> Result<f64, GraphError> {
        adjacencies::weighted_degree(self, u, weight)
    }
}

impl<N: NodeKey> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "Graph({:?}, {} nodes, {} edges)",
            self.kind(),
            self.num_nodes(),
            self.num_edges()
        )
    }
}

/// `Clone` is an independent copy, not an alias.
impl<N: NodeKey> Clone for Graph<N> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrmap::AttrValue;
    use std::rc::Rc;

    #[test]
    fn test_basic_undirected() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        g.add_edge(2, 3);

        assert_eq!(g.degree(&2), Ok(2));
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!g.has_edge(&1, &3));
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_upsert_edge() {
        let mut g = Graph::undirected();
        g.add_edge_attrs(1, 2, AttrMap::new().with("weight", 5).with("color", "red"));
        let before = g.edge_attrs(&1, &2).unwrap();
        g.add_edge_attrs(1, 2, AttrMap::new().with("weight", 7));

        // the edge was not duplicated and the mapping object survived
        assert_eq!(g.num_edges(), 1);
        let after = g.edge_attrs(&1, &2).unwrap();
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.borrow().number("weight"), Some(7.0));
        assert_eq!(after.borrow().get("color"), Some(&AttrValue::from("red")));
    }

    #[test]
    fn test_mirror_identity() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);
        let a = g.edge_attrs(&1, &2).unwrap();
        let b = g.edge_attrs(&2, &1).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_degree_sum_with_selfloop() {
        let mut g = Graph::undirected();
        g.add_edges_from(vec![(1, 2), (2, 3), (2, 2)]);
        let total: usize = g.nodes().map(|n| g.degree(&n).unwrap()).sum();
        assert_eq!(total, 2 * g.num_edges());
        assert_eq!(g.degree(&2), Ok(4));
    }

    #[test]
    fn test_directed_mirror() {
        let mut g = Graph::directed();
        g.add_edges_from(vec![(0, 1), (1, 2)]);
        assert_eq!(g.successors(&1), Ok(vec![2]));
        assert_eq!(g.predecessors(&1), Ok(vec![0]));
        assert_eq!(g.degree(&1), Ok(2));
        assert_eq!(g.in_degree(&1), Ok(1));
        assert_eq!(g.out_degree(&1), Ok(1));
    }

    #[test]
    fn test_insertion_order_across_removal() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_nodes_from(vec![1, 2, 3, 4]);
        g.remove_node(&2).unwrap();
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 3, 4]);
        g.add_node(2);
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_bulk_remove_stops_at_failure() {
        let mut g: Graph<u32> = Graph::undirected();
        g.add_nodes_from(vec![1, 2, 3]);
        let err = g.remove_nodes_from(vec![2, 99, 3]).unwrap_err();
        assert_eq!(err, GraphError::NodeNotFound("99".to_string()));
        // fail fast, no rewind: 2 is gone, 3 is still there
        assert!(!g.has_node(&2));
        assert!(g.has_node(&3));
    }

    #[test]
    fn test_multigraph_keys() {
        let mut g = Graph::multigraph();
        assert_eq!(g.add_edge(0, 1), Some(EdgeKey::Index(0)));
        assert_eq!(g.add_edge(0, 1), Some(EdgeKey::Index(1)));
        assert_eq!(g.add_edge(0, 1), Some(EdgeKey::Index(2)));
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.number_of_edges_between(&0, &1), 3);

        g.add_edge_key(0, 1, "a", AttrMap::new().with("w", 1)).unwrap();
        g.add_edge_key(0, 1, "a", AttrMap::new().with("w", 2)).unwrap();
        assert_eq!(g.num_edges(), 4);
        let attrs = g.edge_attrs_key(&0, &1, &EdgeKey::from("a")).unwrap();
        assert_eq!(attrs.borrow().number("w"), Some(2.0));
    }

    #[test]
    fn test_keyed_ops_fail_on_simple_graph() {
        let mut g = Graph::undirected();
        g.add_edge(0, 1);
        assert!(matches!(
            g.add_edge_key(0, 1, 0u64, AttrMap::new()),
            Err(GraphError::Capability(_))
        ));
        assert!(matches!(
            g.remove_edge_key(&0, &1, &EdgeKey::Index(0)),
            Err(GraphError::Capability(_))
        ));
        assert!(matches!(g.edge_keys(&0, &1), Err(GraphError::Capability(_))));
    }

    #[test]
    fn test_copy_breaks_aliasing() {
        let mut g = Graph::undirected();
        g.add_edge_attrs(1, 2, AttrMap::new().with("weight", 1));
        let h = g.copy();

        let ga = g.edge_attrs(&1, &2).unwrap();
        let ha = h.edge_attrs(&1, &2).unwrap();
        assert!(!Rc::ptr_eq(&ga, &ha));

        ga.borrow_mut().insert("weight", 9);
        assert_eq!(ha.borrow().number("weight"), Some(1.0));

        // internal mirror sharing is reestablished in the copy
        let hb = h.edge_attrs(&2, &1).unwrap();
        assert!(Rc::ptr_eq(&ha, &hb));
    }

    #[test]
    fn test_from_adjacency() {
        let g: Graph<u32> = Graph::from_adjacency(
            GraphKind::Graph,
            vec![(1, vec![2, 3]), (2, vec![1]), (3, vec![1])],
        );
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 2);

        let d: Graph<u32> =
            Graph::from_adjacency(GraphKind::DiGraph, vec![(1, vec![2]), (2, vec![1])]);
        assert_eq!(d.num_edges(), 2);
    }

    #[test]
    fn test_from_adjacency_attrs_conflict() {
        let err = Graph::from_adjacency_attrs(
            GraphKind::Graph,
            vec![
                (1u32, vec![(2u32, AttrMap::new().with("w", 1))]),
                (2, vec![(1, AttrMap::new().with("w", 2))]),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput(_)));

        let ok = Graph::from_adjacency_attrs(
            GraphKind::Graph,
            vec![
                (1u32, vec![(2u32, AttrMap::new().with("w", 1))]),
                (2, vec![(1, AttrMap::new().with("w", 1))]),
            ],
        )
        .unwrap();
        assert_eq!(ok.num_edges(), 1);
    }

    #[test]
    fn test_weighted_degree() {
        let mut g = Graph::undirected();
        g.add_weighted_edges_from(vec![(1, 2, 2.5), (2, 3, 1.5)]);
        g.add_edge(2, 4);
        assert_eq!(g.weighted_degree(&2, "weight"), Ok(5.0));

        g.edge_attrs(&2, &4)
            .unwrap()
            .borrow_mut()
            .insert("weight", "heavy");
        assert!(matches!(
            g.weighted_degree(&2, "weight"),
            Err(GraphError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_density() {
        let empty: Graph<u32> = Graph::undirected();
        assert!(matches!(
            empty.density(),
            Err(GraphError::PointlessConcept(_))
        ));

        let mut k3 = Graph::undirected();
        k3.add_edges_from(vec![(0, 1), (1, 2), (0, 2)]);
        assert_eq!(k3.density(), Ok(1.0));
    }

    #[test]
    fn test_clear_keeps_graph_attr_handle() {
        let mut g: Graph<u32> = Graph::undirected();
        g.graph_attrs().borrow_mut().insert("name", "test");
        let handle = g.graph_attrs();
        g.add_edge(1, 2);
        g.clear();
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_edges(), 0);
        assert!(handle.borrow().is_empty());
        assert!(Rc::ptr_eq(&handle, &g.graph_attrs()));
    }
}
