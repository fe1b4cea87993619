//! Map containers
//!
//! Element keys are arbitrary (vertices, lists, ...), so neither container
//! can hash them. Both keep entries in a vector and look keys up with
//! strict equality; result maps are small.

use super::Element;

/// Unordered mapping; insertion order is kept but carries no meaning
#[derive(Debug, Clone, Default)]
pub struct ElementMap {
    entries: Vec<(Element, Element)>,
}

impl ElementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert, replacing the value of an equal key in place
    pub fn insert(&mut self, key: Element, value: Element) -> Option<Element> {
        insert_entry(&mut self.entries, key, value)
    }

    pub fn get(&self, key: &Element) -> Option<&Element> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Element, &Element)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Element, Element)> for ElementMap {
    fn from_iter<I: IntoIterator<Item = (Element, Element)>>(iter: I) -> Self {
        let mut map = ElementMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Mapping that preserves wire order
#[derive(Debug, Clone, Default)]
pub struct LinkedMap {
    entries: Vec<(Element, Element)>,
}

impl LinkedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert at the end; an equal key keeps its position and takes the
    /// new value
    pub fn insert(&mut self, key: Element, value: Element) -> Option<Element> {
        insert_entry(&mut self.entries, key, value)
    }

    pub fn get(&self, key: &Element) -> Option<&Element> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Element> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Element, &Element)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Element, Element)> for LinkedMap {
    fn from_iter<I: IntoIterator<Item = (Element, Element)>>(iter: I) -> Self {
        let mut map = LinkedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

fn insert_entry(
    entries: &mut Vec<(Element, Element)>,
    key: Element,
    value: Element,
) -> Option<Element> {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => Some(std::mem::replace(slot, value)),
        None => {
            entries.push((key, value));
            None
        }
    }
}
