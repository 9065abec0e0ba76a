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

//! Traits for graph data structures.
//!
//! There is one read contract, [`GraphLike`], shared by owned graphs
//! ([`Graph`](crate::Graph)) and the view family
//! ([`GraphView`](crate::GraphView)). Whether a graph is directed or a
//! multigraph is a runtime property ([`GraphKind`]), so the query surface
//! is uniform and operations that do not apply to a graph's kind fail
//! with a capability error instead of being absent.

use crate::attrmap::SharedAttrs;
use crate::error::GraphError;
use crate::store::{EdgeKey, GraphKind};

use either::Either;
use std::fmt;
use std::hash::Hash;

/// Key type usable as a node identifier.
///
/// Any cheaply clonable, hashable, printable value qualifies; the trait is
/// blanket-implemented.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + fmt::Debug {}

/// A graph iterator.
///
/// This is roughly the same interface as a standard iterator. However,
/// all its methods take additionally the graph itself as parameter. This
/// allows the iterator to not contain a reference to internal graph data,
/// which matters here: the backing storage lives behind a `RefCell`, so an
/// iterator holding a borrow across steps would forbid interleaved reads.
pub trait GraphIterator<G: ?Sized>: Clone {
    type Item;

    fn next(&mut self, g: &G) -> Option<Self::Item>;

    fn size_hint(&self, _g: &G) -> (usize, Option<usize>) {
        (0, None)
    }

    fn count(mut self, g: &G) -> usize {
        let mut c = 0;
        while self.next(g).is_some() {
            c += 1
        }
        c
    }

    fn iter(self, g: &G) -> GraphIter<G, Self>
    where
        G: Sized,
    {
        GraphIter(self, g)
    }
}

/// A graph iterator as a standard iterator.
///
/// This is a pair consisting of a graph iterator and a reference to the
/// graph itself. It can be used as a standard iterator.
pub struct GraphIter<'a, G, I>(pub(crate) I, pub(crate) &'a G);

impl<'a, G, I> Clone for GraphIter<'a, G, I>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        GraphIter(self.0.clone(), self.1)
    }
}

impl<'a, G, I> Iterator for GraphIter<'a, G, I>
where
    I: GraphIterator<G>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next(self.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint(self.1)
    }

    fn count(self) -> usize {
        self.0.count(self.1)
    }
}

/// One edge as produced by edge iteration.
///
/// The endpoints are given in the presented orientation of the graph the
/// edge was read from (source first for directed graphs). `key` is `Some`
/// exactly on multigraphs. `attrs` is the live attribute handle, not a
/// copy: it is the same object the graph and all its views share.
#[derive(Clone, Debug)]
pub struct Edge<N> {
    pub u: N,
    pub v: N,
    pub key: Option<EdgeKey>,
    pub attrs: SharedAttrs,
}

impl<N: Clone> Edge<N> {
    /// The endpoint pair `(u, v)`.
    pub fn pair(&self) -> (N, N) {
        (self.u.clone(), self.v.clone())
    }

    /// True if both endpoints are the same node.
    pub fn is_selfloop(&self) -> bool
    where
        N: PartialEq,
    {
        self.u == self.v
    }
}

/// Endpoints and key are compared; the attribute handle is not.
impl<N: PartialEq> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.u == other.u && self.v == other.v && self.key == other.key
    }
}

/// The read contract shared by graphs and views.
///
/// Iteration order over nodes and edges is the insertion order of the
/// backing storage, preserved across removals. All attribute accessors
/// return shared handles; mutating a handle is visible through every graph
/// object referencing the same storage.
pub trait GraphLike<N: NodeKey>: Sized {
    /// Type of a graph iterator over all nodes.
    type NodeIt: GraphIterator<Self, Item = N>;

    /// Type of a graph iterator over all edges.
    type EdgeIt: GraphIterator<Self, Item = Edge<N>>;

    /// Directedness and multiplicity of this graph.
    fn kind(&self) -> GraphKind;

    /// Return the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Return the number of edges.
    fn num_edges(&self) -> usize;

    /// Return a graph iterator over all nodes.
    fn nodes_iter(&self) -> Self::NodeIt;

    /// Return a graph iterator over all edges.
    fn edges_iter(&self) -> Self::EdgeIt;

    fn has_node(&self, u: &N) -> bool;

    /// True if there is an edge between `u` and `v` (any parallel edge for
    /// multigraphs).
    fn has_edge(&self, u: &N, v: &N) -> bool;

    /// True if the parallel edge `(u, v, key)` exists.
    fn has_edge_key(&self, u: &N, v: &N, key: &EdgeKey) -> bool;

    /// The graph-level attribute mapping.
    fn graph_attrs(&self) -> SharedAttrs;

    /// The attribute mapping of a node.
    fn node_attrs(&self, u: &N) -> Result<SharedAttrs, GraphError>;

    /// The attribute mapping of the edge `(u, v)`.
    ///
    /// Fails with a capability error on multigraphs, where an edge is only
    /// identified together with its key.
    fn edge_attrs(&self, u: &N, v: &N) -> Result<SharedAttrs, GraphError>;

    /// The attribute mapping of the parallel edge `(u, v, key)`.
    fn edge_attrs_key(&self, u: &N, v: &N, key: &EdgeKey) -> Result<SharedAttrs, GraphError>;

    /// The keys of all parallel edges between `u` and `v`, in insertion
    /// order.
    fn edge_keys(&self, u: &N, v: &N) -> Result<Vec<EdgeKey>, GraphError>;

    /// The number of edges between one pair of nodes.
    fn number_of_edges_between(&self, u: &N, v: &N) -> usize;

    /// The neighbors of `u`, each once, in adjacency order.
    ///
    /// For directed graphs these are the successors.
    fn neighbors(&self, u: &N) -> Result<Vec<N>, GraphError>;

    /// The successors of `u` in a directed graph.
    fn successors(&self, u: &N) -> Result<Vec<N>, GraphError>;

    /// The predecessors of `u` in a directed graph.
    fn predecessors(&self, u: &N) -> Result<Vec<N>, GraphError>;

    /// The edges incident to `u` (outgoing edges for directed graphs).
    fn edges_of(&self, u: &N) -> Result<Vec<Edge<N>>, GraphError>;

    /// The degree of `u`.
    ///
    /// Every incident edge counts once, except that a self-loop of an
    /// undirected graph counts twice, so that the degrees of a graph sum
    /// to twice its edge count. The degree of a directed graph is the sum
    /// of in- and out-degree.
    fn degree(&self, u: &N) -> Result<usize, GraphError>;

    fn in_degree(&self, u: &N) -> Result<usize, GraphError>;

    fn out_degree(&self, u: &N) -> Result<usize, GraphError>;

    /// The degree of `u` with every incident edge weighted by its `weight`
    /// attribute (default 1 if absent).
    fn weighted_degree(&self, u: &N, weight: &str) -> Result<f64, GraphError>;

    // -- provided methods --

    fn is_directed(&self) -> bool {
        self.kind().is_directed()
    }

    fn is_multigraph(&self) -> bool {
        self.kind().is_multigraph()
    }

    /// Synonym of [`num_nodes`](GraphLike::num_nodes).
    fn order(&self) -> usize {
        self.num_nodes()
    }

    /// Synonym of [`num_edges`](GraphLike::num_edges).
    fn size(&self) -> usize {
        self.num_edges()
    }

    /// Return an iterator over all nodes.
    fn nodes(&self) -> GraphIter<'_, Self, Self::NodeIt> {
        GraphIter(self.nodes_iter(), self)
    }

    /// Return an iterator over all edges.
    fn edges(&self) -> GraphIter<'_, Self, Self::EdgeIt> {
        GraphIter(self.edges_iter(), self)
    }

    /// All nodes paired with their incident (outgoing) edges.
    fn adjacency(&self) -> Vec<(N, Vec<Edge<N>>)> {
        self.nodes()
            .map(|u| {
                let row = self.edges_of(&u).unwrap_or_default();
                (u, row)
            })
            .collect()
    }

    /// The sum of edge weights over all edges (default 1 per edge).
    fn weighted_size(&self, weight: &str) -> Result<f64, GraphError> {
        let mut total = 0.0;
        for e in self.edges() {
            let w = {
                let attrs = e.attrs.borrow();
                match attrs.get(weight) {
                    None => 1.0,
                    Some(value) => value.as_number().ok_or_else(|| {
                        GraphError::MalformedInput(format!(
                            "attribute {:?} of edge ({:?}, {:?}) is not numeric",
                            weight, e.u, e.v
                        ))
                    })?,
                }
            };
            total += w;
        }
        Ok(total)
    }

    /// The degrees of the given nodes (all nodes if `None`), as pairs in
    /// iteration order.
    fn degrees(&self, nbunch: Option<Vec<N>>) -> Result<Vec<(N, usize)>, GraphError> {
        let nodes = match nbunch {
            None => Either::Left(self.nodes()),
            Some(sel) => Either::Right(sel.into_iter()),
        };
        let mut out = Vec::new();
        for n in nodes {
            let d = self.degree(&n)?;
            out.push((n, d));
        }
        Ok(out)
    }

    /// Like [`degrees`](GraphLike::degrees) with every incident edge
    /// weighted by an attribute.
    fn weighted_degrees(
        &self,
        nbunch: Option<Vec<N>>,
        weight: &str,
    ) -> Result<Vec<(N, f64)>, GraphError> {
        let nodes = match nbunch {
            None => Either::Left(self.nodes()),
            Some(sel) => Either::Right(sel.into_iter()),
        };
        let mut out = Vec::new();
        for n in nodes {
            let d = self.weighted_degree(&n, weight)?;
            out.push((n, d));
        }
        Ok(out)
    }

    /// All self-loop edges.
    fn selfloop_edges(&self) -> Vec<Edge<N>> {
        self.edges().filter(|e| e.u == e.v).collect()
    }

    fn number_of_selfloops(&self) -> usize {
        self.edges().filter(|e| e.u == e.v).count()
    }

    /// The edge density.
    ///
    /// Fails on the null graph, where density is undefined.
    fn density(&self) -> Result<f64, GraphError> {
        let n = self.num_nodes();
        if n == 0 {
            return Err(GraphError::PointlessConcept(
                "density is undefined for the null graph".to_string(),
            ));
        }
        let m = self.num_edges();
        if n == 1 || m == 0 {
            return Ok(0.0);
        }
        let pairs = (n * (n - 1)) as f64;
        if self.is_directed() {
            Ok(m as f64 / pairs)
        } else {
            Ok(2.0 * m as f64 / pairs)
        }
    }
}
