//! Element equality
//!
//! Two modes:
//! - strict: same variant, same values, lists compared element by element.
//!   Floats compare bit for bit, so a decoded NaN equals the NaN it was
//!   encoded from.
//! - loose: numeric scalars compare by rendering (`Int32(1)` equals
//!   `Int64(1)`) and lists compare as multisets through their sort keys
//!
//! Loose List equality only looks at sort keys, which are renderings. Inside
//! a List, `String("1")` and `Int32(1)` both render as `1` and therefore
//! match, even though the two scalars are not loose-equal on their own.
//!
//! Maps are order-independent in both modes. Vertex and edge properties are
//! compared as key sets where the last duplicate key wins.

use std::collections::BTreeMap;

use super::{Edge, Element, ElementMap, LinkedMap, Property, PropertyValue, Vertex};

impl Element {
    /// Exact equality; what `==` uses
    pub fn strict_eq(&self, other: &Element) -> bool {
        self.eq_mode(other, true)
    }

    /// Equality that ignores List order and numeric width
    pub fn loose_eq(&self, other: &Element) -> bool {
        self.eq_mode(other, false)
    }

    fn eq_mode(&self, other: &Element, strict: bool) -> bool {
        use Element::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,
            (Float32(a), Float32(b)) => a.to_bits() == b.to_bits() || (!strict && a == b),
            (Float64(a), Float64(b)) => a.to_bits() == b.to_bits() || (!strict && a == b),
            (a, b) if !strict && a.is_numeric() && b.is_numeric() => a.sort_key() == b.sort_key(),
            (Property(a), Property(b)) => a == b,
            (Vertex(a), Vertex(b)) => a == b,
            (Edge(a), Edge(b)) => a == b,
            (Path(a), Path(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_mode(y, strict))
            }
            (List(a), List(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                if strict {
                    a.iter().zip(b).all(|(x, y)| x.eq_mode(y, true))
                } else {
                    self.sort_key() == other.sort_key()
                }
            }
            (Map(a), Map(b)) => map_eq(a, b, strict),
            (LinkedMap(a), LinkedMap(b)) => linked_map_eq(a, b, strict),
            _ => false,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(
            self,
            Element::Int32(_) | Element::Int64(_) | Element::Float32(_) | Element::Float64(_)
        )
    }

    /// Canonical string used for loose comparison
    ///
    /// Lists sort their members' keys, maps sort their `key: value` pairs.
    /// Paths keep their order.
    pub fn sort_key(&self) -> String {
        match self {
            Element::Path(items) => {
                let keys: Vec<String> = items.iter().map(Element::sort_key).collect();
                format!("Path[{}]", keys.join(", "))
            }
            Element::List(items) => {
                let mut keys: Vec<String> = items.iter().map(Element::sort_key).collect();
                keys.sort();
                format!("[{}]", keys.join(", "))
            }
            Element::Map(map) => format!("Map{{{}}}", sorted_pair_keys(map.iter())),
            Element::LinkedMap(map) => format!("LinkedMap{{{}}}", sorted_pair_keys(map.iter())),
            other => other.to_string(),
        }
    }
}

fn sorted_pair_keys<'a>(pairs: impl Iterator<Item = (&'a Element, &'a Element)>) -> String {
    let mut keys: Vec<String> = pairs
        .map(|(k, v)| format!("{}: {}", k.sort_key(), v.sort_key()))
        .collect();
    keys.sort();
    keys.join(", ")
}

/// Every pair of `a` must consume a distinct, equal pair of `b`
fn map_eq(a: &ElementMap, b: &ElementMap, strict: bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|(k, v)| {
        let hit = b.iter().enumerate().position(|(idx, (kk, vv))| {
            !used[idx] && k.eq_mode(kk, strict) && v.eq_mode(vv, strict)
        });
        match hit {
            Some(idx) => {
                used[idx] = true;
                true
            }
            None => false,
        }
    })
}

fn linked_map_eq(a: &LinkedMap, b: &LinkedMap, strict: bool) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|((k, v), (kk, vv))| k.eq_mode(kk, strict) && v.eq_mode(vv, strict))
}

/// Same key set with equal values, in any order
fn properties_eq(a: &[Property], b: &[Property]) -> bool {
    a.len() == b.len() && last_wins(a) == last_wins(b)
}

/// Key to value, later duplicates overwriting earlier ones
fn last_wins(properties: &[Property]) -> BTreeMap<&str, &PropertyValue> {
    properties.iter().map(|p| (p.key(), p.value())).collect()
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity() && properties_eq(self.properties(), other.properties())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
            && self.out_v() == other.out_v()
            && self.in_v() == other.in_v()
            && properties_eq(self.properties(), other.properties())
    }
}

impl PartialEq for ElementMap {
    fn eq(&self, other: &Self) -> bool {
        map_eq(self, other, true)
    }
}

impl PartialEq for LinkedMap {
    fn eq(&self, other: &Self) -> bool {
        linked_map_eq(self, other, true)
    }
}
