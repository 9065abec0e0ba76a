// Copyright (c) 2016-2021 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Some common graph classes.
//!
//! Each generator takes the [`GraphKind`] of the graph to build, so the
//! same function produces the simple, directed and multi variants. Node
//! ids are synthesized from `0..n`.

use crate::graph::Graph;
use crate::store::GraphKind;
use crate::traits::NodeKey;
use num_traits::FromPrimitive;

/// Returns a path with `m` edges.
///
/// The path is directed if the kind is directed.
pub fn path<N>(kind: GraphKind, m: usize) -> Graph<N>
where
    N: NodeKey + FromPrimitive,
{
    let mut g = Graph::new(kind);
    let nodes: Vec<N> = (0..=m).map(|i| N::from_usize(i).unwrap()).collect();
    for n in &nodes {
        g.add_node(n.clone());
    }
    for (u, v) in nodes.iter().zip(nodes.iter().skip(1)) {
        g.add_edge(u.clone(), v.clone());
    }
    g
}

/// Returns a cycle with length `n`.
///
/// A cycle of length 1 is a single self-loop.
pub fn cycle<N>(kind: GraphKind, n: usize) -> Graph<N>
where
    N: NodeKey + FromPrimitive,
{
    let mut g = Graph::new(kind);
    let nodes: Vec<N> = (0..n).map(|i| N::from_usize(i).unwrap()).collect();
    for u in &nodes {
        g.add_node(u.clone());
    }
    for (u, v) in nodes.iter().zip(nodes.iter().cycle().skip(1)) {
        g.add_edge(u.clone(), v.clone());
    }
    g
}

/// Returns the complete graph on `n` nodes.
pub fn complete_graph<N>(kind: GraphKind, n: usize) -> Graph<N>
where
    N: NodeKey + FromPrimitive,
{
    let mut g = Graph::new(kind);
    let nodes: Vec<N> = (0..n).map(|i| N::from_usize(i).unwrap()).collect();
    for u in &nodes {
        g.add_node(u.clone());
    }
    for (i, u) in nodes.iter().enumerate() {
        for v in &nodes[i + 1..] {
            g.add_edge(u.clone(), v.clone());
        }
    }
    g
}

/// Returns a complete bipartite graph on `n + m` nodes.
///
/// The edges run between the first `n` nodes and the last `m` nodes, in
/// this direction if the kind is directed.
pub fn complete_bipartite<N>(kind: GraphKind, n: usize, m: usize) -> Graph<N>
where
    N: NodeKey + FromPrimitive,
{
    let mut g = Graph::new(kind);
    let nodes: Vec<N> = (0..n + m).map(|i| N::from_usize(i).unwrap()).collect();
    for u in &nodes {
        g.add_node(u.clone());
    }
    for u in &nodes[..n] {
        for v in &nodes[n..] {
            g.add_edge(u.clone(), v.clone());
        }
    }
    g
}

/// Returns a star graph with `n` rays.
///
/// The center node will be the first node. This is equivalent to
/// `complete_bipartite(kind, 1, n)`.
pub fn star<N>(kind: GraphKind, n: usize) -> Graph<N>
where
    N: NodeKey + FromPrimitive,
{
    complete_bipartite(kind, 1, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GraphLike;

    #[test]
    fn test_path() {
        let g: Graph<u32> = path(GraphKind::Graph, 4);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.degree(&0), Ok(1));
        assert_eq!(g.degree(&2), Ok(2));
    }

    #[test]
    fn test_cycle() {
        let g: Graph<u32> = cycle(GraphKind::DiGraph, 5);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 5);
        for n in g.nodes().collect::<Vec<_>>() {
            assert_eq!(g.out_degree(&n), Ok(1));
            assert_eq!(g.in_degree(&n), Ok(1));
        }

        let loop1: Graph<u32> = cycle(GraphKind::Graph, 1);
        assert_eq!(loop1.num_edges(), 1);
        assert_eq!(loop1.degree(&0), Ok(2));
    }

    #[test]
    fn test_complete() {
        let g: Graph<u32> = complete_graph(GraphKind::Graph, 5);
        assert_eq!(g.num_edges(), 10);
        assert_eq!(g.density(), Ok(1.0));
    }

    #[test]
    fn test_star() {
        let g: Graph<u32> = star(GraphKind::Graph, 6);
        assert_eq!(g.num_nodes(), 7);
        assert_eq!(g.degree(&0), Ok(6));
        assert_eq!(g.degree(&3), Ok(1));
    }
}
