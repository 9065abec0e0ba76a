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

//! Error types for graph operations.
//!
//! All failures of the mutation and query surface are reported through
//! [`GraphError`]. Errors are raised synchronously at the violating call;
//! a single mutation either applies completely or not at all, and bulk
//! operations stop at the first failing element without rolling back the
//! elements already applied.

use crate::store::EdgeKey;
use std::fmt;
use thiserror::Error;

/// Errors raised by graph mutations, queries and view construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The operation referenced a node that is not in the graph.
    #[error("node {0} is not in the graph")]
    NodeNotFound(String),

    /// The operation referenced an edge that is not in the graph.
    #[error("edge ({from}, {to}) is not in the graph")]
    EdgeNotFound { from: String, to: String },

    /// The operation referenced a parallel edge key that is not in the graph.
    #[error("edge ({from}, {to}, {key}) is not in the graph")]
    EdgeKeyNotFound { from: String, to: String, key: EdgeKey },

    /// The operation is not supported for this graph's directedness or
    /// multiplicity.
    #[error("{0}")]
    Capability(String),

    /// Structurally invalid input to a bulk constructor or a non-numeric
    /// attribute where a number is required.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The graph is well-formed but the question has no answer on it.
    #[error("{0}")]
    PointlessConcept(String),
}

impl GraphError {
    pub(crate) fn node_not_found<N: fmt::Debug>(n: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", n))
    }

    pub(crate) fn edge_not_found<N: fmt::Debug>(u: &N, v: &N) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{:?}", u),
            to: format!("{:?}", v),
        }
    }

    pub(crate) fn edge_key_not_found<N: fmt::Debug>(u: &N, v: &N, key: &EdgeKey) -> Self {
        GraphError::EdgeKeyNotFound {
            from: format!("{:?}", u),
            to: format!("{:?}", v),
            key: key.clone(),
        }
    }

    pub(crate) fn capability(msg: &str) -> Self {
        GraphError::Capability(msg.to_string())
    }
}
