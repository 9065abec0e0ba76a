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

//! Ordered attribute mappings.
//!
//! Graphs, nodes and edges all carry the same kind of attribute storage: an
//! insertion-ordered mapping from string names to [`AttrValue`] payloads.
//! The ordering is part of the contract — iteration and serialization are
//! deterministic, removing an entry does not reorder the survivors, and
//! re-inserting a removed name appends it at the current end.
//!
//! Attribute mappings are shared by handle ([`SharedAttrs`]): the entry for
//! an undirected edge is the *same* object on both endpoints' adjacency
//! rows, and a view returns the same objects as its root graph. Mutating a
//! handle is therefore visible from every position that references it.
//!
//! # Example
//!
//! ```
//! use adjmaps::{AttrMap, AttrValue};
//!
//! let mut attrs = AttrMap::new().with("weight", 3).with("color", "red");
//! attrs.insert("weight", 5);
//! assert_eq!(attrs.number("weight"), Some(5.0));
//! assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["weight", "color"]);
//! ```

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A single attribute value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Interpret the value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Int(x) => Some(*x as f64),
            AttrValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Interpret the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            AttrValue::Bool(x) => write!(f, "{}", x),
            AttrValue::Int(x) => write!(f, "{}", x),
            AttrValue::Float(x) => write!(f, "{}", x),
            AttrValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(x: bool) -> Self {
        AttrValue::Bool(x)
    }
}

impl From<i64> for AttrValue {
    fn from(x: i64) -> Self {
        AttrValue::Int(x)
    }
}

impl From<i32> for AttrValue {
    fn from(x: i32) -> Self {
        AttrValue::Int(x as i64)
    }
}

impl From<u32> for AttrValue {
    fn from(x: u32) -> Self {
        AttrValue::Int(x as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// An insertion-ordered mapping from attribute names to values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AttrMap {
    entries: IndexMap<String, AttrValue>,
}

impl AttrMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        AttrMap {
            entries: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttrValue> {
        self.entries.get_mut(name)
    }

    /// Return the attribute interpreted as a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttrValue::as_number)
    }

    /// Insert or overwrite one attribute.
    ///
    /// Overwriting keeps the attribute's position; a new name is appended
    /// at the end.
    pub fn insert<V>(&mut self, name: impl Into<String>, value: V) -> Option<AttrValue>
    where
        V: Into<AttrValue>,
    {
        self.entries.insert(name.into(), value.into())
    }

    /// Remove one attribute, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    /// Builder-style [`insert`](AttrMap::insert).
    pub fn with<V>(mut self, name: impl Into<String>, value: V) -> Self
    where
        V: Into<AttrValue>,
    {
        self.insert(name, value);
        self
    }

    /// Upsert every entry of `other` into this mapping.
    ///
    /// Matching names are overwritten, all other entries are kept. This is
    /// the merge applied when a node or edge is added a second time.
    pub fn merge(&mut self, other: &AttrMap) {
        for (name, value) in other.iter() {
            self.insert(name, value.clone());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for AttrMap
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = AttrMap::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Shared handle to an attribute mapping.
///
/// The graph core is single-threaded by design, so plain reference
/// counting with interior mutability is the sharing mechanism.
pub type SharedAttrs = Rc<RefCell<AttrMap>>;

/// Wrap a mapping into a fresh shared handle.
pub(crate) fn shared(attrs: AttrMap) -> SharedAttrs {
    Rc::new(RefCell::new(attrs))
}
