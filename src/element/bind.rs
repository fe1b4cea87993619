//! Binding elements into caller types
//!
//! Scalars, `String`, `Vec<T>` and `Option<T>` bind out of the box. Record
//! types implement [`Bindable`] by delegating to a [`RecordBinding`], a
//! table of `(tag, setter)` pairs built once per type:
//!
//! ```
//! use std::sync::OnceLock;
//! use graphwire::{Bindable, Element, RecordBinding, Result};
//!
//! #[derive(Default)]
//! struct User {
//!     id: i64,
//!     kind: i32,
//! }
//!
//! impl Bindable for User {
//!     fn bind(&mut self, element: &Element) -> Result<()> {
//!         static BINDING: OnceLock<RecordBinding<User>> = OnceLock::new();
//!         BINDING
//!             .get_or_init(|| {
//!                 RecordBinding::<User>::new()
//!                     .field("id", |u, e| u.id.bind(e))
//!                     .field("type", |u, e| u.kind.bind(e))
//!             })
//!             .bind(self, element)
//!     }
//! }
//! ```
//!
//! Vertices expose the tags `id` and `type`, edges `outV`, `inV` and `type`.
//! Maps and property lists use their keys as tags.

use std::borrow::Cow;

use crate::error::{GraphWireError, Result};
use super::{Element, VertexId};

/// A type an element can be bound into
pub trait Bindable {
    /// Overwrite `self` from `element`, or fail with `TypeMismatch`
    fn bind(&mut self, element: &Element) -> Result<()>;
}

impl Element {
    /// Bind into `target`; empty containers leave it untouched
    pub fn bind_to<T: Bindable + ?Sized>(&self, target: &mut T) -> Result<()> {
        if self.is_empty_container() {
            return Ok(());
        }
        target.bind(self)
    }
}

/// Properties bind through their value
fn unwrap_property(element: &Element) -> Cow<'_, Element> {
    match element {
        Element::Property(p) => Cow::Owned(p.value().to_element()),
        other => Cow::Borrowed(other),
    }
}

// =============================================================================
// Scalars
// =============================================================================

macro_rules! bind_scalar {
    ($target:ty, $name:literal, { $($variant:ident => $conv:expr),+ $(,)? }) => {
        impl Bindable for $target {
            fn bind(&mut self, element: &Element) -> Result<()> {
                let element = unwrap_property(element);
                *self = match element.as_ref() {
                    $(Element::$variant(v) => ($conv)(v),)+
                    other => return Err(GraphWireError::mismatch(other.type_name(), $name)),
                };
                Ok(())
            }
        }
    };
}

bind_scalar!(bool, "bool", { Bool => |v: &bool| *v });
bind_scalar!(i32, "i32", { Int32 => |v: &i32| *v });
bind_scalar!(i64, "i64", {
    Int32 => |v: &i32| *v as i64,
    Int64 => |v: &i64| *v,
});
bind_scalar!(f32, "f32", { Float32 => |v: &f32| *v });
bind_scalar!(f64, "f64", {
    Float32 => |v: &f32| *v as f64,
    Float64 => |v: &f64| *v,
});
bind_scalar!(String, "String", { String => |v: &String| v.clone() });

// =============================================================================
// Containers
// =============================================================================

impl<T: Bindable + Default> Bindable for Vec<T> {
    fn bind(&mut self, element: &Element) -> Result<()> {
        let items = match element {
            Element::List(items) | Element::Path(items) => items,
            other => return Err(GraphWireError::mismatch(other.type_name(), "Vec")),
        };
        if items.is_empty() {
            return Ok(());
        }
        self.clear();
        // A List of properties fills a single record.
        let properties_only = items.iter().all(|item| matches!(item, Element::Property(_)));
        if properties_only && matches!(element, Element::List(_)) {
            let mut record = T::default();
            record.bind(element)?;
            self.push(record);
            return Ok(());
        }
        self.resize_with(items.len(), T::default);
        for (slot, item) in self.iter_mut().zip(items) {
            item.bind_to(slot)?;
        }
        Ok(())
    }
}

impl<T: Bindable + Default> Bindable for Option<T> {
    fn bind(&mut self, element: &Element) -> Result<()> {
        let mut inner = self.take().unwrap_or_default();
        inner.bind(element)?;
        *self = Some(inner);
        Ok(())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Setter for one tagged field of `T`
pub type FieldSetter<T> = fn(&mut T, &Element) -> Result<()>;

/// Tag-driven field table for a record type
pub struct RecordBinding<T> {
    fields: Vec<(&'static str, FieldSetter<T>)>,
}

impl<T> Default for RecordBinding<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> RecordBinding<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route elements tagged `tag` into `setter`
    pub fn field(mut self, tag: &'static str, setter: FieldSetter<T>) -> Self {
        self.fields.push((tag, setter));
        self
    }

    fn setter(&self, tag: &str) -> Option<FieldSetter<T>> {
        self.fields
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, setter)| *setter)
    }

    fn set(&self, target: &mut T, tag: &str, value: &Element) -> Result<()> {
        match self.setter(tag) {
            Some(setter) => setter(target, value),
            None => Ok(()),
        }
    }

    /// Fill `target` from `element`; tags with no matching field are skipped
    pub fn bind(&self, target: &mut T, element: &Element) -> Result<()> {
        match element {
            Element::Vertex(v) => match v.identity() {
                VertexId::Numeric { id, vtype } => {
                    self.set(target, "id", &Element::Int64(*id))?;
                    self.set(target, "type", &Element::Int32(*vtype))
                }
                VertexId::Named { id, vtype } => {
                    self.set(target, "id", &Element::String(id.clone()))?;
                    self.set(target, "type", &Element::String(vtype.clone()))
                }
            },
            Element::Edge(e) => {
                if self.setter("outV").is_some() {
                    self.set(target, "outV", &Element::Vertex(e.out_v().clone()))?;
                }
                if self.setter("inV").is_some() {
                    self.set(target, "inV", &Element::Vertex(e.in_v().clone()))?;
                }
                self.set(target, "type", &Element::String(e.label().to_owned()))
            }
            Element::Map(map) => {
                for (k, v) in map.iter() {
                    self.set(target, &k.to_string(), v)?;
                }
                Ok(())
            }
            Element::LinkedMap(map) => {
                for (k, v) in map.iter() {
                    self.set(target, &k.to_string(), v)?;
                }
                Ok(())
            }
            Element::Property(p) => self.set(target, p.key(), element),
            Element::List(items) => self.bind_list(target, items),
            other => Err(GraphWireError::mismatch(other.type_name(), "record")),
        }
    }

    /// A list of properties fills fields by key; any other list must hold
    /// exactly one element
    fn bind_list(&self, target: &mut T, items: &[Element]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        if items.iter().all(|item| matches!(item, Element::Property(_))) {
            for item in items {
                self.bind(target, item)?;
            }
            return Ok(());
        }
        match items {
            [single] => self.bind(target, single),
            _ => Err(GraphWireError::TypeMismatch(format!(
                "cannot map a List of {} elements to a record, target must be a Vec",
                items.len()
            ))),
        }
    }
}
