//! Binding Tests
//!
//! Tests for binding elements into scalars, vectors, options and records.

use std::sync::OnceLock;

use graphwire::{
    Bindable, Edge, Element, ElementMap, GraphWireError, Property, RecordBinding, Result, Vertex,
};

#[derive(Debug, Default, PartialEq)]
struct VertexRef {
    id: i64,
    vtype: i32,
}

impl Bindable for VertexRef {
    fn bind(&mut self, element: &Element) -> Result<()> {
        static BINDING: OnceLock<RecordBinding<VertexRef>> = OnceLock::new();
        BINDING
            .get_or_init(|| {
                RecordBinding::<VertexRef>::new()
                    .field("id", |r, e| r.id.bind(e))
                    .field("type", |r, e| r.vtype.bind(e))
            })
            .bind(self, element)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Follows {
    from: VertexRef,
    to: VertexRef,
    label: String,
}

impl Bindable for Follows {
    fn bind(&mut self, element: &Element) -> Result<()> {
        static BINDING: OnceLock<RecordBinding<Follows>> = OnceLock::new();
        BINDING
            .get_or_init(|| {
                RecordBinding::<Follows>::new()
                    .field("outV", |r, e| r.from.bind(e))
                    .field("inV", |r, e| r.to.bind(e))
                    .field("type", |r, e| r.label.bind(e))
            })
            .bind(self, element)
    }
}

#[derive(Debug, Default, PartialEq)]
struct Person {
    name: String,
    age: Option<i64>,
    score: f64,
}

impl Bindable for Person {
    fn bind(&mut self, element: &Element) -> Result<()> {
        static BINDING: OnceLock<RecordBinding<Person>> = OnceLock::new();
        BINDING
            .get_or_init(|| {
                RecordBinding::<Person>::new()
                    .field("name", |r, e| r.name.bind(e))
                    .field("age", |r, e| r.age.bind(e))
                    .field("score", |r, e| r.score.bind(e))
            })
            .bind(self, element)
    }
}

// =============================================================================
// Scalars and Containers
// =============================================================================

#[test]
fn test_bind_scalars() {
    let mut flag = false;
    Element::Bool(true).bind_to(&mut flag).unwrap();
    assert!(flag);

    let mut f = 0.0f64;
    Element::Float32(0.5).bind_to(&mut f).unwrap();
    assert_eq!(f, 0.5);

    let mut s = String::new();
    Element::from("x").bind_to(&mut s).unwrap();
    assert_eq!(s, "x");
}

#[test]
fn test_bind_scalar_mismatch() {
    let mut n = 0i32;
    let err = Element::from("7").bind_to(&mut n).unwrap_err();
    assert!(matches!(err, GraphWireError::TypeMismatch(_)));

    let mut f = 0.0f32;
    assert!(Element::Float64(1.0).bind_to(&mut f).is_err());
}

#[test]
fn test_bind_vec() {
    let mut ids: Vec<i64> = Vec::new();
    Element::List(vec![Element::Int64(3), Element::Int32(4)])
        .bind_to(&mut ids)
        .unwrap();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn test_bind_option() {
    let mut age: Option<i64> = None;
    Element::Int64(40).bind_to(&mut age).unwrap();
    assert_eq!(age, Some(40));
}

#[test]
fn test_bind_empty_containers_noop() {
    let mut person = Person {
        name: "keep".into(),
        ..Person::default()
    };
    Element::Map(ElementMap::new()).bind_to(&mut person).unwrap();
    Element::Path(vec![]).bind_to(&mut person).unwrap();
    assert_eq!(person.name, "keep");
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_bind_vertex_record() {
    let mut v = VertexRef::default();
    Element::Vertex(Vertex::new(11, 3)).bind_to(&mut v).unwrap();
    assert_eq!(v, VertexRef { id: 11, vtype: 3 });
}

#[test]
fn test_bind_edge_record() {
    let edge = Edge::new(Vertex::new(1, 5), Vertex::new(2, 6), "follows");
    let mut f = Follows::default();
    Element::Edge(edge).bind_to(&mut f).unwrap();

    assert_eq!(f.from, VertexRef { id: 1, vtype: 5 });
    assert_eq!(f.to, VertexRef { id: 2, vtype: 6 });
    assert_eq!(f.label, "follows");
}

#[test]
fn test_bind_map_record() {
    let map: ElementMap = vec![
        (Element::from("name"), Element::from("ann")),
        (Element::from("age"), Element::Int32(31)),
        (Element::from("ignored"), Element::Bool(true)),
    ]
    .into_iter()
    .collect();

    let mut p = Person::default();
    Element::Map(map).bind_to(&mut p).unwrap();
    assert_eq!(p.name, "ann");
    assert_eq!(p.age, Some(31));
}

#[test]
fn test_bind_property_list_record() {
    let props = Element::List(vec![
        Property::new("name", "bob").into(),
        Property::new("score", 9.5f64).into(),
    ]);
    let mut p = Person::default();
    props.bind_to(&mut p).unwrap();
    assert_eq!(p.name, "bob");
    assert_eq!(p.score, 9.5);
    assert_eq!(p.age, None);
}

#[test]
fn test_bind_single_element_list_into_record() {
    let mut v = VertexRef::default();
    Element::List(vec![Vertex::new(8, 1).into()])
        .bind_to(&mut v)
        .unwrap();
    assert_eq!(v.id, 8);

    let err = Element::List(vec![Vertex::new(8, 1).into(), Vertex::new(9, 1).into()])
        .bind_to(&mut v)
        .unwrap_err();
    assert!(matches!(err, GraphWireError::TypeMismatch(_)));
}

#[test]
fn test_bind_vec_of_records() {
    let mut vs: Vec<VertexRef> = Vec::new();
    Element::List(vec![Vertex::new(1, 1).into(), Vertex::new(2, 2).into()])
        .bind_to(&mut vs)
        .unwrap();
    assert_eq!(vs.len(), 2);
    assert_eq!(vs[1], VertexRef { id: 2, vtype: 2 });
}

#[test]
fn test_bind_record_field_mismatch() {
    let map: ElementMap = vec![(Element::from("name"), Element::Int32(1))]
        .into_iter()
        .collect();
    let mut p = Person::default();
    assert!(Element::Map(map).bind_to(&mut p).is_err());
}

#[test]
fn test_bind_scalar_into_record_fails() {
    let mut p = Person::default();
    let err = Element::Int32(1).bind_to(&mut p).unwrap_err();
    assert!(matches!(err, GraphWireError::TypeMismatch(_)));
}

#[test]
fn test_bind_property_list_into_vec_of_records() {
    let props = Element::List(vec![
        Property::new("name", "bob").into(),
        Property::new("score", 9.5f64).into(),
    ]);
    let mut people: Vec<Person> = vec![Person::default(), Person::default()];
    props.bind_to(&mut people).unwrap();

    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "bob");
    assert_eq!(people[0].score, 9.5);
}
