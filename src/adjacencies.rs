/*
 * Copyright (c) 2018, 2020, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Reading adjacency through a scope.
//!
//! A scope bundles everything needed to answer a query: the root storage,
//! the read plan (orientation and directedness projection) and the
//! admission predicates of the view chain. Owned graphs are the trivial
//! scope (native plan, everything admitted), views are restricted scopes —
//! both answer every [`GraphLike`](crate::traits::GraphLike) query through
//! the functions of this module, so there is exactly one implementation of
//! the read semantics.
//!
//! The iterators here are cursors in the [`GraphIterator`] protocol: they
//! hold positions, not borrows, and re-resolve against the storage on each
//! step. Mutating the graph while an iterator is live is not an error, but
//! the iterator may then skip or repeat elements; the single-threaded
//! contract leaves that to the caller.

use crate::attrmap::SharedAttrs;
use crate::error::GraphError;
use crate::store::{AdjacencyStore, EdgeEntry, EdgeKey, GraphKind, Projection, ReadPlan};
use crate::traits::{Edge, GraphIterator, NodeKey};

use indexmap::IndexMap;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

/// Read access of one graph object: root storage, plan and admission.
///
/// `admits_arc` takes endpoints in *storage* orientation; translating a
/// storage arc into the presented orientation of each filter layer is the
/// implementor's concern.
pub(crate) trait Scope<N: NodeKey> {
    fn root(&self) -> &Rc<RefCell<AdjacencyStore<N>>>;

    fn plan(&self) -> ReadPlan;

    /// The presented kind (what `GraphLike::kind` reports).
    fn scope_kind(&self) -> GraphKind;

    fn admits_node(&self, n: &N) -> bool;

    fn admits_arc(&self, su: &N, sv: &N, key: Option<&EdgeKey>) -> bool;

    /// True if the whole chain admits every node and edge.
    fn unrestricted(&self) -> bool;
}

/// Incidence direction in presented orientation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    Out,
    In,
}

/// The stored slots that can hold the presented edge `(u, v)`.
///
/// At most two: the union projections look at both storage orientations,
/// successor side first.
fn candidates<'r, N: NodeKey>(
    store: &'r AdjacencyStore<N>,
    plan: ReadPlan,
    u: &'r N,
    v: &'r N,
) -> Vec<(&'r N, &'r N, &'r EdgeEntry)> {
    match plan.projection {
        Projection::Native => {
            if store.kind.is_directed() && plan.reversed {
                // the presented arc (u, v) is the storage arc (v, u)
                store.entry(v, u).map(|e| (v, u, e)).into_iter().collect()
            } else {
                store.entry(u, v).map(|e| (u, v, e)).into_iter().collect()
            }
        }
        Projection::Symmetric => store.entry(u, v).map(|e| (u, v, e)).into_iter().collect(),
        Projection::Union | Projection::UnionSymmetric => {
            let mut c = Vec::with_capacity(2);
            if let Some(e) = store.entry(u, v) {
                c.push((u, v, e));
            }
            if u != v {
                if let Some(e) = store.entry(v, u) {
                    c.push((v, u, e));
                }
            }
            c
        }
    }
}

/// Walk the admitted edge units incident to `u`.
///
/// The callback receives the presented neighbor, the storage endpoints of
/// the arc, the parallel-edge key (multigraphs) and the attribute handle.
fn incident<N, S, F>(s: &S, u: &N, dir: Dir, mut f: F) -> Result<(), GraphError>
where
    N: NodeKey,
    S: Scope<N>,
    F: FnMut(&N, &N, &N, Option<&EdgeKey>, &SharedAttrs),
{
    let store = s.root().borrow();
    if !store.contains_node(u) || !s.admits_node(u) {
        return Err(GraphError::node_not_found(u));
    }
    let plan = s.plan();
    match plan.projection {
        Projection::Native => {
            if store.kind.is_directed() {
                let use_pred = match dir {
                    Dir::Out => plan.reversed,
                    Dir::In => !plan.reversed,
                };
                let row = if use_pred {
                    store.pred.get(u)
                } else {
                    store.succ.get(u)
                };
                scan_row(s, u, row, use_pred, None, &mut f);
            } else {
                scan_row(s, u, store.succ.get(u), false, None, &mut f);
            }
        }
        Projection::Symmetric => {
            scan_row(s, u, store.succ.get(u), false, None, &mut f);
        }
        Projection::Union | Projection::UnionSymmetric => {
            scan_row(s, u, store.succ.get(u), false, None, &mut f);
            // incoming arcs contribute the neighbors not already seen on
            // the outgoing row
            scan_row(s, u, store.pred.get(u), true, store.succ.get(u), &mut f);
        }
    }
    Ok(())
}

fn scan_row<N, S, F>(
    s: &S,
    u: &N,
    row: Option<&IndexMap<N, EdgeEntry>>,
    incoming: bool,
    skip_if_in: Option<&IndexMap<N, EdgeEntry>>,
    f: &mut F,
) where
    N: NodeKey,
    S: Scope<N>,
    F: FnMut(&N, &N, &N, Option<&EdgeKey>, &SharedAttrs),
{
    let row = match row {
        Some(r) => r,
        None => return,
    };
    for (v, entry) in row.iter() {
        if let Some(seen) = skip_if_in {
            if seen.contains_key(v) {
                continue;
            }
        }
        if !s.admits_node(v) {
            continue;
        }
        let (su, sv) = if incoming { (v, u) } else { (u, v) };
        match entry {
            EdgeEntry::Single(handle) => {
                if s.admits_arc(su, sv, None) {
                    f(v, su, sv, None, handle);
                }
            }
            EdgeEntry::Multi(table) => {
                for (key, handle) in table.borrow().iter() {
                    if s.admits_arc(su, sv, Some(key)) {
                        f(v, su, sv, Some(key), handle);
                    }
                }
            }
        }
    }
}

// -- node queries --

pub(crate) fn contains_node<N: NodeKey, S: Scope<N>>(s: &S, n: &N) -> bool {
    s.admits_node(n) && s.root().borrow().contains_node(n)
}

pub(crate) fn count_nodes<N: NodeKey, S: Scope<N>>(s: &S) -> usize {
    if s.unrestricted() {
        return s.root().borrow().nodes.len();
    }
    let mut it: NodeIt<N> = NodeIt::new();
    let mut c = 0;
    while it.next(s).is_some() {
        c += 1;
    }
    c
}

pub(crate) fn node_attrs<N: NodeKey, S: Scope<N>>(s: &S, n: &N) -> Result<SharedAttrs, GraphError> {
    if !s.admits_node(n) {
        return Err(GraphError::node_not_found(n));
    }
    s.root()
        .borrow()
        .node_attrs(n)
        .ok_or_else(|| GraphError::node_not_found(n))
}

fn adjacent_nodes<N: NodeKey, S: Scope<N>>(s: &S, u: &N, dir: Dir) -> Result<Vec<N>, GraphError> {
    let mut out: Vec<N> = Vec::new();
    incident(s, u, dir, |v, _, _, _, _| {
        // parallel edges repeat the same neighbor consecutively
        if out.last() != Some(v) {
            out.push(v.clone());
        }
    })?;
    Ok(out)
}

pub(crate) fn neighbors<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<Vec<N>, GraphError> {
    adjacent_nodes(s, u, Dir::Out)
}

pub(crate) fn successors<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<Vec<N>, GraphError> {
    require_directed(s, "successors")?;
    adjacent_nodes(s, u, Dir::Out)
}

pub(crate) fn predecessors<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<Vec<N>, GraphError> {
    require_directed(s, "predecessors")?;
    adjacent_nodes(s, u, Dir::In)
}

fn require_directed<N: NodeKey, S: Scope<N>>(s: &S, op: &str) -> Result<(), GraphError> {
    if s.scope_kind().is_directed() {
        Ok(())
    } else {
        Err(GraphError::Capability(format!(
            "{} is not defined for undirected graphs",
            op
        )))
    }
}

// -- edge queries --

pub(crate) fn has_edge<N: NodeKey, S: Scope<N>>(s: &S, u: &N, v: &N) -> bool {
    let store = s.root().borrow();
    if !s.admits_node(u) || !s.admits_node(v) {
        return false;
    }
    candidates(&store, s.plan(), u, v)
        .into_iter()
        .any(|(su, sv, entry)| match entry {
            EdgeEntry::Single(_) => s.admits_arc(su, sv, None),
            EdgeEntry::Multi(table) => table
                .borrow()
                .keys()
                .any(|k| s.admits_arc(su, sv, Some(k))),
        })
}

pub(crate) fn has_edge_key<N: NodeKey, S: Scope<N>>(s: &S, u: &N, v: &N, key: &EdgeKey) -> bool {
    let store = s.root().borrow();
    if !s.admits_node(u) || !s.admits_node(v) {
        return false;
    }
    candidates(&store, s.plan(), u, v)
        .into_iter()
        .any(|(su, sv, entry)| match entry {
            EdgeEntry::Single(_) => false,
            EdgeEntry::Multi(table) => {
                table.borrow().contains_key(key) && s.admits_arc(su, sv, Some(key))
            }
        })
}

fn check_endpoints<N: NodeKey, S: Scope<N>>(s: &S, u: &N, v: &N) -> Result<(), GraphError> {
    if !contains_node(s, u) {
        return Err(GraphError::node_not_found(u));
    }
    if !contains_node(s, v) {
        return Err(GraphError::node_not_found(v));
    }
    Ok(())
}

pub(crate) fn edge_attrs<N: NodeKey, S: Scope<N>>(
    s: &S,
    u: &N,
    v: &N,
) -> Result<SharedAttrs, GraphError> {
    if s.scope_kind().is_multigraph() {
        return Err(GraphError::capability(
            "edge attributes of a multigraph require an edge key",
        ));
    }
    check_endpoints(s, u, v)?;
    let store = s.root().borrow();
    candidates(&store, s.plan(), u, v)
        .into_iter()
        .find_map(|(su, sv, entry)| {
            if s.admits_arc(su, sv, None) {
                entry.attrs_for(None)
            } else {
                None
            }
        })
        .ok_or_else(|| GraphError::edge_not_found(u, v))
}

pub(crate) fn edge_attrs_key<N: NodeKey, S: Scope<N>>(
    s: &S,
    u: &N,
    v: &N,
    key: &EdgeKey,
) -> Result<SharedAttrs, GraphError> {
    if !s.scope_kind().is_multigraph() {
        return Err(GraphError::capability(
            "explicit edge keys require a multigraph",
        ));
    }
    check_endpoints(s, u, v)?;
    let store = s.root().borrow();
    candidates(&store, s.plan(), u, v)
        .into_iter()
        .find_map(|(su, sv, entry)| {
            if s.admits_arc(su, sv, Some(key)) {
                entry.attrs_for(Some(key))
            } else {
                None
            }
        })
        .ok_or_else(|| GraphError::edge_key_not_found(u, v, key))
}

pub(crate) fn edge_keys<N: NodeKey, S: Scope<N>>(
    s: &S,
    u: &N,
    v: &N,
) -> Result<Vec<EdgeKey>, GraphError> {
    if !s.scope_kind().is_multigraph() {
        return Err(GraphError::capability(
            "edge keys are only defined for multigraphs",
        ));
    }
    check_endpoints(s, u, v)?;
    let store = s.root().borrow();
    let mut keys: Vec<EdgeKey> = Vec::new();
    for (su, sv, entry) in candidates(&store, s.plan(), u, v) {
        for key in entry.keys() {
            if s.admits_arc(su, sv, Some(&key)) && !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}

pub(crate) fn number_of_edges_between<N: NodeKey, S: Scope<N>>(s: &S, u: &N, v: &N) -> usize {
    if s.scope_kind().is_multigraph() {
        edge_keys(s, u, v).map(|k| k.len()).unwrap_or(0)
    } else if has_edge(s, u, v) {
        1
    } else {
        0
    }
}

pub(crate) fn count_edges<N: NodeKey, S: Scope<N>>(s: &S) -> usize {
    if s.unrestricted() && s.plan().projection == Projection::Native {
        return s.root().borrow().nedges;
    }
    let mut it: EdgeIt<N> = EdgeIt::new();
    let mut c = 0;
    while it.next(s).is_some() {
        c += 1;
    }
    c
}

pub(crate) fn edges_of<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<Vec<Edge<N>>, GraphError> {
    let mut out = Vec::new();
    incident(s, u, Dir::Out, |v, _, _, key, attrs| {
        out.push(Edge {
            u: u.clone(),
            v: v.clone(),
            key: key.cloned(),
            attrs: attrs.clone(),
        });
    })?;
    Ok(out)
}

// -- degrees --

pub(crate) fn degree<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<usize, GraphError> {
    if s.scope_kind().is_directed() {
        Ok(directed_degree(s, u, Dir::Out)? + directed_degree(s, u, Dir::In)?)
    } else {
        let mut d = 0;
        incident(s, u, Dir::Out, |v, _, _, _, _| {
            // an undirected self-loop contributes twice
            d += if v == u { 2 } else { 1 };
        })?;
        Ok(d)
    }
}

fn directed_degree<N: NodeKey, S: Scope<N>>(s: &S, u: &N, dir: Dir) -> Result<usize, GraphError> {
    let mut d = 0;
    incident(s, u, dir, |_, _, _, _, _| {
        d += 1;
    })?;
    Ok(d)
}

pub(crate) fn out_degree<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<usize, GraphError> {
    require_directed(s, "out_degree")?;
    directed_degree(s, u, Dir::Out)
}

pub(crate) fn in_degree<N: NodeKey, S: Scope<N>>(s: &S, u: &N) -> Result<usize, GraphError> {
    require_directed(s, "in_degree")?;
    directed_degree(s, u, Dir::In)
}

pub(crate) fn weighted_degree<N: NodeKey, S: Scope<N>>(
    s: &S,
    u: &N,
    weight: &str,
) -> Result<f64, GraphError> {
    if s.scope_kind().is_directed() {
        Ok(weighted_sum(s, u, Dir::Out, weight, false)? + weighted_sum(s, u, Dir::In, weight, false)?)
    } else {
        weighted_sum(s, u, Dir::Out, weight, true)
    }
}

fn weighted_sum<N: NodeKey, S: Scope<N>>(
    s: &S,
    u: &N,
    dir: Dir,
    weight: &str,
    double_selfloops: bool,
) -> Result<f64, GraphError> {
    let mut total = 0.0;
    let mut bad: Option<GraphError> = None;
    incident(s, u, dir, |v, su, sv, _, attrs| {
        let attrs = attrs.borrow();
        let w = match attrs.get(weight) {
            None => 1.0,
            Some(value) => match value.as_number() {
                Some(x) => x,
                None => {
                    if bad.is_none() {
                        bad = Some(GraphError::MalformedInput(format!(
                            "attribute {:?} of edge ({:?}, {:?}) is not numeric",
                            weight, su, sv
                        )));
                    }
                    return;
                }
            },
        };
        total += w;
        if double_selfloops && v == u {
            total += w;
        }
    })?;
    match bad {
        Some(err) => Err(err),
        None => Ok(total),
    }
}

// -- cursor iterators --

/// A graph iterator over all (admitted) nodes, in insertion order.
pub struct NodeIt<N> {
    pos: usize,
    marker: PhantomData<N>,
}

impl<N> Clone for NodeIt<N> {
    fn clone(&self) -> Self {
        NodeIt {
            pos: self.pos,
            marker: PhantomData,
        }
    }
}

impl<N> NodeIt<N> {
    pub(crate) fn new() -> Self {
        NodeIt {
            pos: 0,
            marker: PhantomData,
        }
    }
}

impl<N, S> GraphIterator<S> for NodeIt<N>
where
    N: NodeKey,
    S: Scope<N>,
{
    type Item = N;

    fn next(&mut self, g: &S) -> Option<N> {
        let store = g.root().borrow();
        while let Some((n, _)) = store.nodes.get_index(self.pos) {
            self.pos += 1;
            if g.admits_node(n) {
                return Some(n.clone());
            }
        }
        None
    }

    fn size_hint(&self, g: &S) -> (usize, Option<usize>) {
        let total = g.root().borrow().nodes.len();
        (0, Some(total.saturating_sub(self.pos)))
    }
}

/// A graph iterator over all (admitted) edges.
///
/// Edges are enumerated per presented source node in node insertion
/// order; an edge of an undirected presentation is reported once, at its
/// endpoint that comes first in node order.
pub struct EdgeIt<N> {
    upos: usize,
    /// 0: successor row, 1: predecessor row (union projections only).
    stage: u8,
    ipos: usize,
    kpos: usize,
    marker: PhantomData<N>,
}

impl<N> Clone for EdgeIt<N> {
    fn clone(&self) -> Self {
        EdgeIt {
            upos: self.upos,
            stage: self.stage,
            ipos: self.ipos,
            kpos: self.kpos,
            marker: PhantomData,
        }
    }
}

impl<N> EdgeIt<N> {
    pub(crate) fn new() -> Self {
        EdgeIt {
            upos: 0,
            stage: 0,
            ipos: 0,
            kpos: 0,
            marker: PhantomData,
        }
    }

    fn next_inner(&mut self) {
        self.ipos += 1;
        self.kpos = 0;
    }

    fn next_node(&mut self) {
        self.upos += 1;
        self.stage = 0;
        self.ipos = 0;
        self.kpos = 0;
    }
}

impl<N, S> GraphIterator<S> for EdgeIt<N>
where
    N: NodeKey,
    S: Scope<N>,
{
    type Item = Edge<N>;

    fn next(&mut self, g: &S) -> Option<Edge<N>> {
        let store = g.root().borrow();
        let plan = g.plan();
        let presented_undirected = !g.scope_kind().is_directed();
        let storage_directed = store.kind.is_directed();
        let reversed_native = plan.projection == Projection::Native && storage_directed && plan.reversed;
        let two_stage = match plan.projection {
            Projection::Union | Projection::UnionSymmetric => true,
            _ => false,
        };

        loop {
            let u = match store.nodes.get_index(self.upos) {
                Some((n, _)) => n,
                None => return None,
            };
            if !g.admits_node(u) {
                self.next_node();
                continue;
            }
            let row = if self.stage == 0 {
                if reversed_native {
                    store.pred.get(u)
                } else {
                    store.succ.get(u)
                }
            } else {
                store.pred.get(u)
            };
            let (v, entry) = match row.and_then(|r| r.get_index(self.ipos)) {
                Some(x) => x,
                None => {
                    if two_stage && self.stage == 0 {
                        self.stage = 1;
                        self.ipos = 0;
                        self.kpos = 0;
                    } else {
                        self.next_node();
                    }
                    continue;
                }
            };
            // second stage: neighbors already on the successor row are done
            if self.stage == 1 && store.succ.get(u).map_or(false, |r| r.contains_key(v)) {
                self.next_inner();
                continue;
            }
            if !g.admits_node(v) {
                self.next_inner();
                continue;
            }
            // undirected presentation: emit each edge at its first endpoint
            if presented_undirected {
                let vpos = store.nodes.get_index_of(v).expect("neighbor must be a node");
                if vpos < self.upos {
                    self.next_inner();
                    continue;
                }
            }
            // the storage arc this row entry describes
            let incoming = self.stage == 1 || reversed_native;
            let (su, sv) = if incoming { (v, u) } else { (u, v) };

            match entry {
                EdgeEntry::Single(handle) => {
                    let admitted = g.admits_arc(su, sv, None);
                    let item = if admitted {
                        Some(Edge {
                            u: u.clone(),
                            v: v.clone(),
                            key: None,
                            attrs: handle.clone(),
                        })
                    } else {
                        None
                    };
                    self.next_inner();
                    if item.is_some() {
                        return item;
                    }
                }
                EdgeEntry::Multi(table) => {
                    let table = table.borrow();
                    match table.get_index(self.kpos) {
                        None => {
                            drop(table);
                            self.next_inner();
                        }
                        Some((key, handle)) => {
                            self.kpos += 1;
                            if g.admits_arc(su, sv, Some(key)) {
                                return Some(Edge {
                                    u: u.clone(),
                                    v: v.clone(),
                                    key: Some(key.clone()),
                                    attrs: handle.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }
    }
}
