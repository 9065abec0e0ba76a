/*
 * Copyright (c) 2020-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Flat serializable graph representation.
//!
//! The shared-handle storage is not serialized directly; [`GraphData`] is
//! a plain node/edge list that round-trips losslessly through any serde
//! format. Converting back rebuilds the internal sharing (mirror entries,
//! parallel-edge keys) from scratch.

use crate::attrmap::AttrMap;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::store::{EdgeKey, GraphKind};
use crate::traits::{GraphLike, NodeKey};

use serde_derive::{Deserialize, Serialize};

/// A graph as plain data: kind, attributed nodes and attributed edges.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphData<N> {
    pub kind: GraphKind,
    pub graph_attrs: AttrMap,
    pub nodes: Vec<(N, AttrMap)>,
    pub edges: Vec<(N, N, Option<EdgeKey>, AttrMap)>,
}

impl<N: NodeKey> GraphData<N> {
    /// Snapshot any graph or view into plain data.
    pub fn from_graph<G>(g: &G) -> Self
    where
        G: GraphLike<N>,
    {
        GraphData {
            kind: g.kind(),
            graph_attrs: g.graph_attrs().borrow().clone(),
            nodes: g
                .nodes()
                .map(|n| {
                    let attrs = match g.node_attrs(&n) {
                        Ok(handle) => handle.borrow().clone(),
                        Err(_) => AttrMap::new(),
                    };
                    (n, attrs)
                })
                .collect(),
            edges: g
                .edges()
                .map(|e| {
                    let attrs = e.attrs.borrow().clone();
                    (e.u, e.v, e.key, attrs)
                })
                .collect(),
        }
    }

    /// Rebuild an owned graph.
    ///
    /// Fails if the data carries edge keys that contradict the kind.
    pub fn into_graph(self) -> Result<Graph<N>, GraphError> {
        let GraphData {
            kind,
            graph_attrs,
            nodes,
            edges,
        } = self;
        let mut g = Graph::new(kind);
        g.graph_attrs().borrow_mut().merge(&graph_attrs);
        for (n, attrs) in nodes {
            g.add_node_attrs(n, attrs);
        }
        for (u, v, key, attrs) in edges {
            match key {
                Some(k) => {
                    if !kind.is_multigraph() {
                        return Err(GraphError::MalformedInput(format!(
                            "keyed edge ({:?}, {:?}) in a simple graph",
                            u, v
                        )));
                    }
                    g.add_edge_key(u, v, k, attrs)?;
                }
                None => {
                    g.add_edge_attrs(u, v, attrs);
                }
            }
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrmap::AttrMap;
    use serde_json;

    #[test]
    fn test_roundtrip_graph() {
        let mut g = Graph::undirected();
        g.graph_attrs().borrow_mut().insert("name", "test");
        g.add_node_attrs(1u32, AttrMap::new().with("label", "a"));
        g.add_edge_attrs(1, 2, AttrMap::new().with("weight", 2.5));
        g.add_edge(2, 3);

        let serialized = serde_json::to_string(&GraphData::from_graph(&g)).unwrap();
        let data: GraphData<u32> = serde_json::from_str(&serialized).unwrap();
        let h = data.into_graph().unwrap();

        assert_eq!(h.kind(), g.kind());
        assert_eq!(h.num_nodes(), g.num_nodes());
        assert_eq!(h.num_edges(), g.num_edges());
        assert_eq!(
            h.edge_attrs(&1, &2).unwrap().borrow().number("weight"),
            Some(2.5)
        );
        assert_eq!(h.graph_attrs().borrow().get("name").map(|v| v.to_string()),
            Some("test".to_string()));
    }

    #[test]
    fn test_roundtrip_multigraph_keys() {
        let mut g = Graph::multi_digraph();
        g.add_edge_key(0u32, 1, "a", AttrMap::new().with("w", 1)).unwrap();
        g.add_edge(0, 1);

        let serialized = serde_json::to_string(&GraphData::from_graph(&g)).unwrap();
        let data: GraphData<u32> = serde_json::from_str(&serialized).unwrap();
        let h = data.into_graph().unwrap();

        assert_eq!(h.num_edges(), 2);
        assert!(h.has_edge_key(&0, &1, &EdgeKey::from("a")));
        assert!(h.has_edge_key(&0, &1, &EdgeKey::Index(0)));
    }

    #[test]
    fn test_keyed_edge_in_simple_graph_is_malformed() {
        let data: GraphData<u32> = GraphData {
            kind: GraphKind::Graph,
            graph_attrs: AttrMap::new(),
            nodes: vec![],
            edges: vec![(0, 1, Some(EdgeKey::Index(0)), AttrMap::new())],
        };
        assert!(matches!(
            data.into_graph(),
            Err(GraphError::MalformedInput(_))
        ));
    }
}
