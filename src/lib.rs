// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A library for mutable attributed graphs, multigraphs and live graph
//! views.
//!
//! Graphs are adjacency maps: ordered nested mappings from nodes to
//! neighbors to shared attribute dictionaries. The four kinds (simple or
//! multi, directed or undirected) share one storage model and one read
//! contract, and views — subgraphs, reversals, directedness projections —
//! are cheap objects that filter or re-index a graph's storage without
//! copying it, staying live under mutation of the underlying graph.
//!
//! The crate is an in-process, single-threaded data structure; there is
//! no I/O and no locking.
//!
//! # Example
//!
//! ```
//! use adjmaps::{Graph, GraphLike};
//!
//! let mut g = Graph::undirected();
//! g.add_edge("a", "b");
//! g.add_edge("b", "c");
//!
//! let view = g.subgraph(vec!["a", "c"]);
//! assert_eq!(view.num_edges(), 0);
//!
//! // views are live: later mutations show through
//! g.add_edge("c", "a");
//! assert_eq!(view.num_edges(), 1);
//! ```

// # Data structures

pub mod traits;
pub use self::traits::{Edge, GraphIter, GraphIterator, GraphLike, NodeKey};

pub mod attrmap;
pub use self::attrmap::{AttrMap, AttrValue, SharedAttrs};

pub mod error;
pub use self::error::GraphError;

mod store;
pub use self::store::{EdgeKey, GraphKind};

pub mod adjacencies;

pub mod filters;
pub use self::filters::{EdgeFilter, NodeFilter};

pub mod graph;
pub use self::graph::Graph;

pub mod views;
pub use self::views::GraphView;

/// Graph classes
pub mod classes;

#[cfg(feature = "serialize")]
pub mod serialize;
