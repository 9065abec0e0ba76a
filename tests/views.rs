/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use adjmaps::{AttrMap, EdgeKey, Graph, GraphError, GraphKind, GraphLike};
use std::rc::Rc;

fn pairs<N, G>(g: &G) -> Vec<(N, N)>
where
    N: Clone + Eq + std::hash::Hash + std::fmt::Debug,
    G: GraphLike<N>,
{
    g.edges().map(|e| e.pair()).collect()
}

#[test]
fn test_subgraph_restricts() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (2, 3), (3, 4), (4, 1)]);

    let v = g.subgraph(vec![1, 2, 3]);
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(pairs(&v), vec![(1, 2), (2, 3)]);
    assert_eq!(v.num_edges(), 2);
    assert_eq!(v.degree(&1), Ok(1));
    assert!(!v.has_node(&4));
    assert!(!v.has_edge(&4, &1));
    assert!(matches!(v.degree(&4), Err(GraphError::NodeNotFound(_))));
}

#[test]
fn test_view_liveness() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (3, 4)]);
    let v = g.subgraph(vec![1, 2, 3]);
    assert_eq!(v.num_edges(), 1);

    // an edge between members added after construction is visible
    g.add_edge(2, 3);
    assert_eq!(v.num_edges(), 2);
    assert!(v.has_edge(&2, &3));

    // so is a removal
    g.remove_edge(&1, &2).unwrap();
    assert_eq!(v.num_edges(), 1);
}

#[test]
fn test_view_shares_attribute_objects() {
    let mut g = Graph::undirected();
    g.add_edge_attrs(1, 2, AttrMap::new().with("weight", 1));

    let v = g.subgraph(vec![1, 2]);
    let through_view = v.edge_attrs(&1, &2).unwrap();
    let through_root = g.edge_attrs(&1, &2).unwrap();
    assert!(Rc::ptr_eq(&through_view, &through_root));

    through_view.borrow_mut().insert("weight", 42);
    assert_eq!(through_root.borrow().number("weight"), Some(42.0));

    let node_through_view = v.node_attrs(&1).unwrap();
    node_through_view.borrow_mut().insert("label", "x");
    assert!(g.node_attrs(&1).unwrap().borrow().contains("label"));
}

#[test]
fn test_subgraph_of_subgraph_short_cut() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (2, 3), (3, 4)]);

    let v = g.subgraph(vec![1, 2, 3]).subgraph(vec![2, 3, 4]);
    // the chain collapsed: the effective parent is the graph itself
    assert!(v.is_view_of(&g));
    assert!(v.parent_view().is_none());
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(pairs(&v), vec![(2, 3)]);
}

#[test]
fn test_role_remap_suppresses_short_cut() {
    let mut g = Graph::directed();
    g.add_edges_from(vec![(1, 2), (2, 3), (3, 4)]);

    let v = g.subgraph(vec![1, 2, 3]).reverse().unwrap().subgraph(vec![2, 3]);
    assert!(!v.is_view_of(&g));
    assert!(v.parent_view().is_some());

    // and the literal chain still reads correctly: 2 -> 3 reversed
    assert_eq!(pairs(&v), vec![(3, 2)]);
}

#[test]
fn test_reverse_scenario() {
    let g = Graph::from_edges(GraphKind::DiGraph, vec![(0, 1), (1, 2)]);
    let r = g.reverse_view().unwrap();

    assert_eq!(pairs(&r), vec![(1, 0), (2, 1)]);
    assert!(r.has_edge(&1, &0));
    assert!(!r.has_edge(&0, &1));
    assert_eq!(r.out_degree(&1), Ok(1));
    assert_eq!(r.in_degree(&1), Ok(1));

    // reversing the reversal reads like the original graph
    let rr = r.reverse().unwrap();
    assert_eq!(
        rr.nodes().collect::<Vec<_>>(),
        g.nodes().collect::<Vec<_>>()
    );
    assert_eq!(pairs(&rr), pairs(&g));
}

#[test]
fn test_reverse_preserves_keys_and_attrs() {
    let mut g = Graph::multi_digraph();
    g.add_edge_key(0, 1, "a", AttrMap::new().with("w", 1)).unwrap();
    g.add_edge_key(0, 1, "b", AttrMap::new().with("w", 2)).unwrap();

    let r = g.reverse_view().unwrap();
    assert_eq!(r.edge_keys(&1, &0).unwrap(), vec![EdgeKey::from("a"), EdgeKey::from("b")]);

    let a = r.edge_attrs_key(&1, &0, &EdgeKey::from("a")).unwrap();
    let orig = g.edge_attrs_key(&0, &1, &EdgeKey::from("a")).unwrap();
    assert!(Rc::ptr_eq(&a, &orig));
}

#[test]
fn test_to_directed_view() {
    let mut g = Graph::undirected();
    g.add_edge(1, 2);
    g.add_edge(2, 2);

    let d = g.to_directed_view();
    assert!(d.is_directed());
    assert_eq!(d.kind(), GraphKind::DiGraph);
    // each edge appears in both orientations, the self-loop once
    assert_eq!(pairs(&d), vec![(1, 2), (2, 1), (2, 2)]);
    assert_eq!(d.num_edges(), 3);
    assert_eq!(d.successors(&1), Ok(vec![2]));
    assert_eq!(d.predecessors(&1), Ok(vec![2]));

    // attribute objects are shared with the undirected storage
    let du = d.edge_attrs(&1, &2).unwrap();
    let dv = d.edge_attrs(&2, &1).unwrap();
    let orig = g.edge_attrs(&1, &2).unwrap();
    assert!(Rc::ptr_eq(&du, &orig));
    assert!(Rc::ptr_eq(&dv, &orig));
}

#[test]
fn test_to_undirected_view() {
    let mut g = Graph::directed();
    g.add_edge_attrs(0, 1, AttrMap::new().with("w", 1));
    g.add_edge_attrs(2, 1, AttrMap::new().with("w", 2));

    let u = g.to_undirected_view();
    assert!(!u.is_directed());
    assert_eq!(u.kind(), GraphKind::Graph);
    assert_eq!(pairs(&u), vec![(0, 1), (1, 2)]);
    assert_eq!(u.num_edges(), 2);
    assert_eq!(u.neighbors(&1).unwrap(), vec![0, 2]);
    assert_eq!(u.degree(&1), Ok(2));

    // the union edge keeps the stored arc's attribute object
    let ua = u.edge_attrs(&0, &1).unwrap();
    assert!(Rc::ptr_eq(&ua, &g.edge_attrs(&0, &1).unwrap()));

    // opposite arcs collapse into a single undirected edge
    g.add_edge(1, 0);
    assert_eq!(u.num_edges(), 2);
}

#[test]
fn test_edge_subgraph() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (2, 3), (3, 4)]);

    let v = g.edge_subgraph(vec![(2, 3)]).unwrap();
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(pairs(&v), vec![(2, 3)]);
    assert_eq!(v.degree(&2), Ok(1));

    // keyed form is a capability mismatch on a simple graph
    assert!(matches!(
        g.edge_subgraph_keyed(vec![(1, 2, EdgeKey::Index(0))]),
        Err(GraphError::Capability(_))
    ));
}

#[test]
fn test_edge_subgraph_keyed() {
    let mut g = Graph::multigraph();
    let k0 = g.add_edge(1, 2).unwrap();
    let k1 = g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3);

    let v = g
        .edge_subgraph_keyed(vec![(1, 2, k1.clone())])
        .unwrap();
    assert_eq!(v.num_edges(), 1);
    assert!(v.has_edge_key(&1, &2, &k1));
    assert!(!v.has_edge_key(&1, &2, &k0));
    assert!(!v.has_node(&3));

    assert!(matches!(
        g.edge_subgraph(vec![(1, 2)]),
        Err(GraphError::Capability(_))
    ));
}

#[test]
fn test_view_of_view_liveness_through_chain() {
    let mut g = Graph::directed();
    g.add_edges_from(vec![(1, 2), (2, 3)]);
    let chained = g.subgraph(vec![1, 2, 3]).reverse().unwrap();

    assert_eq!(pairs(&chained), vec![(2, 1), (3, 2)]);
    g.add_edge(3, 1);
    assert_eq!(pairs(&chained), vec![(1, 3), (2, 1), (3, 2)]);
}

#[test]
fn test_materialize_is_independent() {
    let mut g = Graph::directed();
    g.add_edge_attrs(0, 1, AttrMap::new().with("w", 1));
    let r = g.reverse_view().unwrap();

    let owned = r.to_graph();
    assert_eq!(owned.kind(), GraphKind::DiGraph);
    assert_eq!(pairs(&owned), vec![(1, 0)]);

    // no aliasing with the source and no liveness
    let oa = owned.edge_attrs(&1, &0).unwrap();
    assert!(!Rc::ptr_eq(&oa, &g.edge_attrs(&0, &1).unwrap()));
    g.add_edge(1, 0);
    assert_eq!(owned.num_edges(), 1);
}

#[test]
fn test_to_view_does_not_deepen() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (2, 3)]);

    let v = g.subgraph(vec![1, 2]);
    let w = v.to_view();
    assert!(w.is_view_of(&g));
    assert_eq!(w.nodes().collect::<Vec<_>>(), v.nodes().collect::<Vec<_>>());
}

#[test]
fn test_owned_copies_of_views() {
    let mut g = Graph::undirected();
    g.add_edges_from(vec![(1, 2), (2, 3)]);

    let d = g.to_directed();
    assert_eq!(d.kind(), GraphKind::DiGraph);
    assert_eq!(d.num_edges(), 4);

    let u = d.to_undirected();
    assert_eq!(u.kind(), GraphKind::Graph);
    assert_eq!(u.num_edges(), 2);

    let r = d.reverse().unwrap();
    assert_eq!(r.num_edges(), 4);
}

#[test]
fn test_subgraph_keeps_root_node_order() {
    let mut g: Graph<u32> = Graph::undirected();
    g.add_nodes_from(vec![1, 2, 3, 4]);
    let v = g.subgraph(vec![4, 2]);
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![2, 4]);
}

#[test]
fn test_missing_subgraph_nodes_are_ignored() {
    let mut g: Graph<u32> = Graph::undirected();
    g.add_nodes_from(vec![1, 2]);
    let v = g.subgraph(vec![2, 9]);
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![2]);
    assert_eq!(v.num_nodes(), 1);

    // the filter is live against the graph: adding node 9 reveals it
    g.add_node(9);
    assert_eq!(v.nodes().collect::<Vec<_>>(), vec![2, 9]);
}
