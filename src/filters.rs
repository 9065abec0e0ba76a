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

//! Node and edge admission predicates for views.
//!
//! A view restricts what is visible of its parent through two predicates:
//! one over nodes, one over edges. Both are small enum values rather than
//! boxed closures, so the everything-passes case is recognizable by tag
//! and composing with it costs nothing, and conjoining two membership
//! filters collapses into a single intersected set instead of stacking
//! two checks.
//!
//! The membership sets are owned snapshots shared behind `Rc`; what stays
//! live through a view is the parent graph's data, not the set a filter
//! was built from.

use crate::store::EdgeKey;
use crate::traits::NodeKey;

use indexmap::IndexSet;
use std::rc::Rc;

/// Node admission predicate of a view.
#[derive(Clone, Debug)]
pub enum NodeFilter<N: NodeKey> {
    /// Admit every node.
    All,
    /// Admit exactly the nodes of the set.
    Within(Rc<IndexSet<N>>),
}

impl<N: NodeKey> NodeFilter<N> {
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        NodeFilter::Within(Rc::new(nodes.into_iter().collect()))
    }

    pub fn is_all(&self) -> bool {
        match self {
            NodeFilter::All => true,
            NodeFilter::Within(_) => false,
        }
    }

    pub fn admits(&self, n: &N) -> bool {
        match self {
            NodeFilter::All => true,
            NodeFilter::Within(set) => set.contains(n),
        }
    }

    /// Conjunction of two node filters.
    ///
    /// A no-op side is passed through unchanged; two membership sets are
    /// intersected into one, keeping the left set's order.
    pub fn and(&self, other: &NodeFilter<N>) -> NodeFilter<N> {
        match (self, other) {
            (NodeFilter::All, f) => f.clone(),
            (f, NodeFilter::All) => f.clone(),
            (NodeFilter::Within(a), NodeFilter::Within(b)) => {
                let both: IndexSet<N> = a.iter().filter(|n| b.contains(*n)).cloned().collect();
                NodeFilter::Within(Rc::new(both))
            }
        }
    }
}

/// Edge admission predicate of a view.
///
/// Endpoint pairs are interpreted in the orientation the filter's view
/// presents; for undirected views both orientations of a pair are
/// checked.
#[derive(Clone, Debug)]
pub enum EdgeFilter<N: NodeKey> {
    /// Admit every edge.
    All,
    /// Admit exactly the unkeyed endpoint pairs (simple graphs).
    Pairs(Rc<IndexSet<(N, N)>>),
    /// Admit exactly the keyed triples (multigraphs).
    Keyed(Rc<IndexSet<(N, N, EdgeKey)>>),
}

impl<N: NodeKey> EdgeFilter<N> {
    pub fn from_pairs<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        EdgeFilter::Pairs(Rc::new(edges.into_iter().collect()))
    }

    pub fn from_keyed<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, EdgeKey)>,
    {
        EdgeFilter::Keyed(Rc::new(edges.into_iter().collect()))
    }

    pub fn is_all(&self) -> bool {
        match self {
            EdgeFilter::All => true,
            _ => false,
        }
    }

    pub fn admits(&self, u: &N, v: &N, key: Option<&EdgeKey>, undirected: bool) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::Pairs(set) => {
                set.contains(&(u.clone(), v.clone()))
                    || (undirected && set.contains(&(v.clone(), u.clone())))
            }
            EdgeFilter::Keyed(set) => match key {
                None => false,
                Some(k) => {
                    set.contains(&(u.clone(), v.clone(), k.clone()))
                        || (undirected && set.contains(&(v.clone(), u.clone(), k.clone())))
                }
            },
        }
    }

    /// Conjunction of two edge filters.
    ///
    /// A no-op side is passed through unchanged; matching shapes are
    /// intersected into one set. Mixed shapes cannot arise from view
    /// composition (multiplicity never changes along a view chain), but
    /// are still answered conservatively by filtering the keyed set.
    pub fn and(&self, other: &EdgeFilter<N>) -> EdgeFilter<N> {
        match (self, other) {
            (EdgeFilter::All, f) => f.clone(),
            (f, EdgeFilter::All) => f.clone(),
            (EdgeFilter::Pairs(a), EdgeFilter::Pairs(b)) => {
                let both: IndexSet<(N, N)> = a.iter().filter(|e| b.contains(*e)).cloned().collect();
                EdgeFilter::Pairs(Rc::new(both))
            }
            (EdgeFilter::Keyed(a), EdgeFilter::Keyed(b)) => {
                let both: IndexSet<(N, N, EdgeKey)> =
                    a.iter().filter(|e| b.contains(*e)).cloned().collect();
                EdgeFilter::Keyed(Rc::new(both))
            }
            (EdgeFilter::Keyed(a), EdgeFilter::Pairs(b)) => {
                let both: IndexSet<(N, N, EdgeKey)> = a
                    .iter()
                    .filter(|(u, v, _)| b.contains(&(u.clone(), v.clone())))
                    .cloned()
                    .collect();
                EdgeFilter::Keyed(Rc::new(both))
            }
            (EdgeFilter::Pairs(a), EdgeFilter::Keyed(b)) => {
                let both: IndexSet<(N, N, EdgeKey)> = b
                    .iter()
                    .filter(|(u, v, _)| a.contains(&(u.clone(), v.clone())))
                    .cloned()
                    .collect();
                EdgeFilter::Keyed(Rc::new(both))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_composition() {
        let all: NodeFilter<u32> = NodeFilter::All;
        let some = NodeFilter::from_nodes(vec![1, 2, 3]);

        // composing with the no-op keeps the single membership check
        assert!(all.and(&some).admits(&2));
        assert!(!some.and(&all).admits(&4));
        assert!(all.and(&NodeFilter::All).is_all());
    }

    #[test]
    fn test_intersection() {
        let a = NodeFilter::from_nodes(vec![1, 2, 3]);
        let b = NodeFilter::from_nodes(vec![2, 3, 4]);
        let both = a.and(&b);
        assert!(!both.admits(&1));
        assert!(both.admits(&2));
        assert!(both.admits(&3));
        assert!(!both.admits(&4));
    }

    #[test]
    fn test_edge_orientation() {
        let f = EdgeFilter::from_pairs(vec![(1u32, 2u32)]);
        assert!(f.admits(&1, &2, None, false));
        assert!(!f.admits(&2, &1, None, false));
        assert!(f.admits(&2, &1, None, true));
    }

    #[test]
    fn test_keyed_filter() {
        let f = EdgeFilter::from_keyed(vec![(1u32, 2u32, EdgeKey::from("a"))]);
        assert!(f.admits(&1, &2, Some(&EdgeKey::from("a")), false));
        assert!(!f.admits(&1, &2, Some(&EdgeKey::from("b")), false));
        assert!(!f.admits(&1, &2, None, false));
    }
}
