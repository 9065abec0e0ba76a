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

//! Read-only graph views.
//!
//! A [`GraphView`] presents the [`GraphLike`] contract without owning any
//! data: it keeps the root storage of the graph it was derived from alive
//! through a shared handle and restricts or re-indexes what is visible.
//! Mutations of the root graph show through every live view immediately,
//! and attribute handles obtained through a view are the root's own
//! objects. Views expose no mutation API.
//!
//! Subgraphing a plain filtered view does not build a view of a view: the
//! new view points at the same parent with the filters intersected, so
//! repeated restriction stays one indirection deep. A layer that re-indexes
//! roles — reversal or a directedness projection — suppresses that
//! short-cut and the literal chain is kept, since collapsing across it
//! would lose the re-indexing.
//!
//! # Example
//!
//! ```
//! use adjmaps::{Graph, GraphLike};
//!
//! let mut g = Graph::directed();
//! g.add_edges_from(vec![(0, 1), (1, 2)]);
//!
//! let r = g.reverse_view().unwrap();
//! let pairs: Vec<_> = r.edges().map(|e| e.pair()).collect();
//! assert_eq!(pairs, vec![(1, 0), (2, 1)]);
//!
//! // the view is live: new edges show up without rebuilding it
//! g.add_edge(2, 0);
//! assert!(r.has_edge(&0, &2));
//! ```

use crate::adjacencies::{self, EdgeIt, NodeIt, Scope};
use crate::attrmap::SharedAttrs;
use crate::error::GraphError;
use crate::filters::{EdgeFilter, NodeFilter};
use crate::graph::Graph;
use crate::store::{AdjacencyStore, EdgeKey, GraphKind, Projection, ReadPlan};
use crate::traits::{Edge, GraphLike, NodeKey};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The structural parent of a view layer.
#[derive(Clone)]
enum Parent<N: NodeKey> {
    /// The view reads the owning graph's storage directly.
    Root,
    /// The view wraps another view (a chain kept below a role remap).
    View(Rc<GraphView<N>>),
}

/// What this layer changes relative to its parent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Remap {
    /// Plain restriction, no re-indexing.
    None,
    /// Successor and predecessor roles swapped.
    Reverse,
    /// Presented as directed.
    Directed,
    /// Presented as undirected.
    Undirected,
}

/// A read-only view of a graph.
///
/// Cheap to construct and to clone: a view is a handful of tags and
/// shared handles, never a copy of the data.
#[derive(Clone)]
pub struct GraphView<N: NodeKey> {
    root: Rc<RefCell<AdjacencyStore<N>>>,
    parent: Parent<N>,
    kind: GraphKind,
    /// Orientation/projection against the root storage, composed over the
    /// whole chain at construction time.
    plan: ReadPlan,
    remap: Remap,
    nodes: NodeFilter<N>,
    edges: EdgeFilter<N>,
}

impl<N: NodeKey> GraphView<N> {
    /// The whole graph as a view.
    pub(crate) fn whole(graph: &Graph<N>) -> Self {
        let store = graph.store_handle();
        let kind = store.borrow().kind;
        GraphView {
            root: store.clone(),
            parent: Parent::Root,
            kind,
            plan: ReadPlan::native(),
            remap: Remap::None,
            nodes: NodeFilter::All,
            edges: EdgeFilter::All,
        }
    }

    /// The immediate parent view, if this view wraps another view rather
    /// than the owning graph's storage.
    pub fn parent_view(&self) -> Option<&GraphView<N>> {
        match &self.parent {
            Parent::Root => None,
            Parent::View(v) => Some(v),
        }
    }

    /// True if this view reads the given graph's storage directly (its
    /// effective parent is `g`, not an intermediate view).
    pub fn is_view_of(&self, g: &Graph<N>) -> bool {
        match self.parent {
            Parent::Root => Rc::ptr_eq(&self.root, g.store_handle()),
            Parent::View(_) => false,
        }
    }

    /// A new view of the same root with identical restrictions, without
    /// deepening the chain.
    pub fn to_view(&self) -> GraphView<N> {
        self.clone()
    }

    /// Materialize into an independent owned graph of this view's kind.
    pub fn to_graph(&self) -> Graph<N> {
        Graph::from_graph(self)
    }

    /// The node-induced subgraph of this view.
    ///
    /// On a plain filtered view the result points at the same parent with
    /// the node sets intersected.
    pub fn subgraph<I>(&self, nodes: I) -> GraphView<N>
    where
        I: IntoIterator<Item = N>,
    {
        let filter = NodeFilter::from_nodes(nodes);
        if self.remap == Remap::None {
            GraphView {
                root: self.root.clone(),
                parent: self.parent.clone(),
                kind: self.kind,
                plan: self.plan,
                remap: Remap::None,
                nodes: self.nodes.and(&filter),
                edges: self.edges.clone(),
            }
        } else {
            GraphView {
                root: self.root.clone(),
                parent: Parent::View(Rc::new(self.clone())),
                kind: self.kind,
                plan: self.plan,
                remap: Remap::None,
                nodes: filter,
                edges: EdgeFilter::All,
            }
        }
    }

    /// The edge-induced subgraph: exactly the given endpoint pairs and
    /// their incident nodes. Fails on multigraphs, whose edges are only
    /// identified together with a key.
    pub fn edge_subgraph<I>(&self, edges: I) -> Result<GraphView<N>, GraphError>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        if self.kind.is_multigraph() {
            return Err(GraphError::capability(
                "edge_subgraph of a multigraph requires keys; use edge_subgraph_keyed",
            ));
        }
        let pairs: Vec<(N, N)> = edges.into_iter().collect();
        let mut incident: Vec<N> = Vec::new();
        for (u, v) in &pairs {
            if !incident.contains(u) {
                incident.push(u.clone());
            }
            if !incident.contains(v) {
                incident.push(v.clone());
            }
        }
        Ok(self.restricted(NodeFilter::from_nodes(incident), EdgeFilter::from_pairs(pairs)))
    }

    /// The edge-induced subgraph of a multigraph, keyed. Fails on simple
    /// graphs.
    pub fn edge_subgraph_keyed<I>(&self, edges: I) -> Result<GraphView<N>, GraphError>
    where
        I: IntoIterator<Item = (N, N, EdgeKey)>,
    {
        if !self.kind.is_multigraph() {
            return Err(GraphError::capability(
                "edge_subgraph_keyed requires a multigraph; use edge_subgraph",
            ));
        }
        let triples: Vec<(N, N, EdgeKey)> = edges.into_iter().collect();
        let mut incident: Vec<N> = Vec::new();
        for (u, v, _) in &triples {
            if !incident.contains(u) {
                incident.push(u.clone());
            }
            if !incident.contains(v) {
                incident.push(v.clone());
            }
        }
        Ok(self.restricted(
            NodeFilter::from_nodes(incident),
            EdgeFilter::from_keyed(triples),
        ))
    }

    fn restricted(&self, nodes: NodeFilter<N>, edges: EdgeFilter<N>) -> GraphView<N> {
        if self.remap == Remap::None {
            GraphView {
                root: self.root.clone(),
                parent: self.parent.clone(),
                kind: self.kind,
                plan: self.plan,
                remap: Remap::None,
                nodes: self.nodes.and(&nodes),
                edges: self.edges.and(&edges),
            }
        } else {
            GraphView {
                root: self.root.clone(),
                parent: Parent::View(Rc::new(self.clone())),
                kind: self.kind,
                plan: self.plan,
                remap: Remap::None,
                nodes,
                edges,
            }
        }
    }

    /// The parent link for a new role-remapping layer on top of this
    /// view. The trivial whole-graph view adds no chain link.
    fn layer_parent(&self) -> Parent<N> {
        let plain_whole = self.remap == Remap::None
            && self.nodes.is_all()
            && self.edges.is_all()
            && match self.parent {
                Parent::Root => true,
                Parent::View(_) => false,
            };
        if plain_whole {
            Parent::Root
        } else {
            Parent::View(Rc::new(self.clone()))
        }
    }

    /// A view with successor and predecessor roles swapped.
    ///
    /// Fails on undirected views, where the roles do not exist.
    pub fn reverse(&self) -> Result<GraphView<N>, GraphError> {
        if !self.kind.is_directed() {
            return Err(GraphError::capability(
                "reverse is not defined for undirected graphs",
            ));
        }
        Ok(GraphView {
            root: self.root.clone(),
            parent: self.layer_parent(),
            kind: self.kind,
            plan: ReadPlan {
                reversed: !self.plan.reversed,
                projection: self.plan.projection,
            },
            remap: Remap::Reverse,
            nodes: NodeFilter::All,
            edges: EdgeFilter::All,
        })
    }

    /// A directed view: identity for directed views; every undirected
    /// edge is presented as a symmetric pair of arcs (a self-loop as one).
    pub fn to_directed_view(&self) -> GraphView<N> {
        if self.kind.is_directed() {
            return self.clone();
        }
        let projection = match self.plan.projection {
            Projection::Native => Projection::Symmetric,
            Projection::Union => Projection::UnionSymmetric,
            other => other,
        };
        GraphView {
            root: self.root.clone(),
            parent: self.layer_parent(),
            kind: self.kind.to_directed(),
            plan: ReadPlan {
                reversed: false,
                projection,
            },
            remap: Remap::Directed,
            nodes: NodeFilter::All,
            edges: EdgeFilter::All,
        }
    }

    /// An undirected view: identity for undirected views; opposite arcs
    /// of a directed view collapse into one edge, successor attributes
    /// winning where both directions exist.
    pub fn to_undirected_view(&self) -> GraphView<N> {
        if !self.kind.is_directed() {
            return self.clone();
        }
        let projection = match self.plan.projection {
            Projection::Native => Projection::Union,
            Projection::Symmetric => Projection::Native,
            Projection::UnionSymmetric | Projection::Union => Projection::Union,
        };
        GraphView {
            root: self.root.clone(),
            parent: self.layer_parent(),
            kind: self.kind.to_undirected(),
            plan: ReadPlan {
                reversed: false,
                projection,
            },
            remap: Remap::Undirected,
            nodes: NodeFilter::All,
            edges: EdgeFilter::All,
        }
    }

    /// True when the cumulative plan swaps the presented orientation of
    /// storage arcs.
    fn presented_reversed(&self) -> bool {
        self.plan.reversed && self.plan.projection == Projection::Native
    }
}

impl<N: NodeKey> Scope<N> for GraphView<N> {
    fn root(&self) -> &Rc<RefCell<AdjacencyStore<N>>> {
        &self.root
    }

    fn plan(&self) -> ReadPlan {
        self.plan
    }

    fn scope_kind(&self) -> GraphKind {
        self.kind
    }

    fn admits_node(&self, n: &N) -> bool {
        self.nodes.admits(n)
            && match &self.parent {
                Parent::Root => true,
                Parent::View(v) => v.admits_node(n),
            }
    }

    fn admits_arc(&self, su: &N, sv: &N, key: Option<&EdgeKey>) -> bool {
        if !self.nodes.admits(su) || !self.nodes.admits(sv) {
            return false;
        }
        let own = if self.edges.is_all() {
            true
        } else {
            // the filter was given in this layer's presented orientation
            let (pu, pv) = if self.presented_reversed() {
                (sv, su)
            } else {
                (su, sv)
            };
            self.edges.admits(pu, pv, key, !self.kind.is_directed())
        };
        own && match &self.parent {
            Parent::Root => true,
            Parent::View(v) => v.admits_arc(su, sv, key),
        }
    }

    fn unrestricted(&self) -> bool {
        self.nodes.is_all()
            && self.edges.is_all()
            && match &self.parent {
                Parent::Root => true,
                Parent::View(v) => v.unrestricted(),
            }
    }
}

impl<N: NodeKey> GraphLike<N> for GraphView<N> {
    type NodeIt = NodeIt<N>;
    type EdgeIt = EdgeIt<N>;

    fn kind(&self) -> GraphKind {
        self.kind
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
        self.root.borrow().graph_attrs.clone()
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

impl<N: NodeKey> fmt::Debug for GraphView<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "GraphView({:?}, {} nodes, {} edges)",
            self.kind,
            self.num_nodes(),
            self.num_edges()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<u32> {
        let mut g = Graph::directed();
        g.add_edges_from(vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
        g
    }

    #[test]
    fn test_reverse_plan_composition() {
        let g = diamond();
        let r = g.reverse_view().unwrap();
        let rr = r.reverse().unwrap();
        assert!(r.presented_reversed());
        assert!(!rr.presented_reversed());

        // double reversal reads like the original
        assert_eq!(rr.successors(&0), g.successors(&0));
        assert_eq!(rr.predecessors(&3), g.predecessors(&3));
    }

    #[test]
    fn test_projection_composition() {
        let mut g = Graph::undirected();
        g.add_edge(1, 2);

        let d = g.to_directed_view();
        assert_eq!(d.kind(), GraphKind::DiGraph);
        assert_eq!(d.plan.projection, Projection::Symmetric);

        // projecting back reads the storage natively again
        let u = d.to_undirected_view();
        assert_eq!(u.kind(), GraphKind::Graph);
        assert_eq!(u.plan.projection, Projection::Native);
    }

    #[test]
    fn test_union_of_reversed_discards_orientation() {
        let g = diamond();
        let u = g.reverse_view().unwrap().to_undirected_view();
        assert_eq!(u.plan.projection, Projection::Union);
        assert!(!u.plan.reversed);
        assert_eq!(u.num_edges(), 4);
    }

    #[test]
    fn test_trivial_whole_view_stays_root() {
        let g = diamond();
        let r = g.reverse_view().unwrap();
        assert!(r.is_view_of(&g));
        assert!(r.parent_view().is_none());
    }

    #[test]
    fn test_subgraph_collapse() {
        let g = diamond();
        let s1 = g.subgraph(vec![0, 1, 3]);
        let s2 = s1.subgraph(vec![1, 3, 2]);
        assert!(s2.is_view_of(&g));
        assert!(s2.parent_view().is_none());

        // intersection of the two node sets
        assert_eq!(s2.nodes().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_remap_blocks_collapse() {
        let g = diamond();
        let chained = g.subgraph(vec![0, 1, 3]).reverse().unwrap().subgraph(vec![1, 3]);
        assert!(!chained.is_view_of(&g));
        assert!(chained.parent_view().is_some());

        // the chain still reads correctly: reversed arc 3 -> 1
        assert_eq!(chained.successors(&3), Ok(vec![1]));
        assert_eq!(chained.num_edges(), 1);
    }
}
