//! Element Tests
//!
//! Tests for strict and loose equality, sort keys, rendering and the map
//! containers.

use graphwire::{Direction, Edge, Element, ElementMap, LinkedMap, Property, PropertyValue, Vertex};

fn list(items: Vec<Element>) -> Element {
    Element::List(items)
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_reordered_lists_loose_not_strict() {
    let a = list(vec![Element::Int32(1), "two".into(), Element::Bool(true)]);
    let b = list(vec![Element::Bool(true), Element::Int32(1), "two".into()]);

    assert!(a.loose_eq(&b));
    assert!(!a.strict_eq(&b));
    assert_ne!(a, b);
}

#[test]
fn test_lists_with_different_multisets() {
    let a = list(vec![Element::Int32(1), Element::Int32(1), Element::Int32(2)]);
    let b = list(vec![Element::Int32(1), Element::Int32(2), Element::Int32(2)]);
    assert!(!a.loose_eq(&b));
}

#[test]
fn test_reordered_maps_equal_both_ways() {
    let a: ElementMap = vec![
        (Element::from("name"), Element::from("ann")),
        (Element::from("age"), Element::Int32(31)),
    ]
    .into_iter()
    .collect();
    let b: ElementMap = vec![
        (Element::from("age"), Element::Int32(31)),
        (Element::from("name"), Element::from("ann")),
    ]
    .into_iter()
    .collect();

    let (a, b) = (Element::Map(a), Element::Map(b));
    assert!(a.strict_eq(&b));
    assert!(a.loose_eq(&b));
}

#[test]
fn test_linked_map_order_matters() {
    let a: LinkedMap = vec![
        (Element::Int32(1), Element::from("a")),
        (Element::Int32(2), Element::from("b")),
    ]
    .into_iter()
    .collect();
    let b: LinkedMap = vec![
        (Element::Int32(2), Element::from("b")),
        (Element::Int32(1), Element::from("a")),
    ]
    .into_iter()
    .collect();

    assert!(!Element::LinkedMap(a.clone()).strict_eq(&Element::LinkedMap(b)));
    assert!(Element::LinkedMap(a.clone()).strict_eq(&Element::LinkedMap(a)));
}

#[test]
fn test_path_order_matters_in_both_modes() {
    let a = Element::Path(vec![Vertex::new(1, 1).into(), Vertex::new(2, 1).into()]);
    let b = Element::Path(vec![Vertex::new(2, 1).into(), Vertex::new(1, 1).into()]);
    assert!(!a.loose_eq(&b));
    assert!(!a.strict_eq(&b));
}

#[test]
fn test_loose_numeric_comparison() {
    assert!(Element::Int32(5).loose_eq(&Element::Int64(5)));
    assert!(Element::Float32(0.5).loose_eq(&Element::Float64(0.5)));
    assert!(!Element::Int64(5).strict_eq(&Element::Int32(5)));

    let a = list(vec![Element::Int32(1), Element::Int64(2)]);
    let b = list(vec![Element::Int64(2), Element::Int64(1)]);
    assert!(a.loose_eq(&b));
}

#[test]
fn test_variant_mismatch_never_equal() {
    assert!(!Element::Bool(true).loose_eq(&Element::from("True")));
    assert!(!Element::List(vec![]).loose_eq(&Element::Path(vec![])));
}

#[test]
fn test_vertex_identity_forms_differ() {
    let numeric = Element::Vertex(Vertex::new(1, 2));
    let named = Element::Vertex(Vertex::named("1", "2"));
    assert!(!numeric.strict_eq(&named));
    assert!(!numeric.loose_eq(&named));
}

#[test]
fn test_edge_equality_ignores_property_order() {
    let a = Edge::new(Vertex::new(1, 1), Vertex::new(2, 1), "knows")
        .with_properties(vec![Property::new("since", 2020i32), Property::new("w", 0.5f64)]);
    let b = Edge::new(Vertex::new(1, 1), Vertex::new(2, 1), "knows")
        .with_properties(vec![Property::new("w", 0.5f64), Property::new("since", 2020i32)]);
    assert_eq!(Element::Edge(a), Element::Edge(b));
}

// =============================================================================
// Edges
// =============================================================================

#[test]
fn test_edge_direction_swaps_endpoints() {
    let start = Vertex::new(1, 10);
    let end = Vertex::new(2, 20);

    let forward = Edge::with_direction(start.clone(), end.clone(), "e", Direction::Forward);
    assert_eq!(forward.out_v().id(), Some(1));
    assert_eq!(forward.in_v().id(), Some(2));

    let reverse = Edge::with_direction(start.clone(), end.clone(), "e", Direction::Reverse);
    assert_eq!(reverse.out_v().id(), Some(2));
    assert_eq!(reverse.in_v().id(), Some(1));

    let double = Edge::with_direction(start, end, "e", Direction::Double);
    assert_eq!(double.out_v().id(), Some(1));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_scalar_rendering() {
    assert_eq!(Element::Bool(true).to_string(), "True");
    assert_eq!(Element::Bool(false).to_string(), "False");
    assert_eq!(Element::Int64(-9).to_string(), "-9");
    assert_eq!(Element::Float64(2.5).to_string(), "2.5");
    assert_eq!(Element::from("plain").to_string(), "plain");
}

#[test]
fn test_property_rendering_quotes_strings() {
    assert_eq!(
        Property::new("name", "ann").to_string(),
        r#"Property{Key:name, Value:"ann"}"#
    );
    assert_eq!(Property::new("age", 3i64).to_string(), "Property{Key:age, Value:3}");
}

#[test]
fn test_edge_rendering() {
    let edge = Edge::new(Vertex::new(1, 2), Vertex::new(3, 4), "likes")
        .with_properties(vec![Property::new("w", true)]);
    assert_eq!(
        edge.to_string(),
        "Edge{OutV:Vertex{Id:1, Type:2}, InV:Vertex{Id:3, Type:4}, Type:likes, properties:[Property{Key:w, Value:true}]}"
    );
}

#[test]
fn test_path_and_linked_map_rendering() {
    let path = Element::Path(vec![Vertex::new(1, 1).into(), Element::Int32(7)]);
    assert_eq!(path.to_string(), "Path[Vertex{Id:1, Type:1}, 7]");

    let linked: LinkedMap = vec![
        (Element::from("z"), Element::Int32(1)),
        (Element::from("a"), Element::Int32(2)),
    ]
    .into_iter()
    .collect();
    assert_eq!(Element::LinkedMap(linked).to_string(), "LinkedMap{z: 1, a: 2}");
}

#[test]
fn test_sort_keys() {
    let a = list(vec![Element::from("b"), Element::from("a")]);
    assert_eq!(a.sort_key(), "[a, b]");
    assert_eq!(a.to_string(), "[b, a]");

    let linked: LinkedMap = vec![
        (Element::from("z"), Element::Int32(1)),
        (Element::from("a"), Element::Int32(2)),
    ]
    .into_iter()
    .collect();
    assert_eq!(Element::LinkedMap(linked).sort_key(), "LinkedMap{a: 2, z: 1}");
}

#[test]
fn test_named_vertex_simple_string() {
    assert_eq!(Vertex::named("u1", "user").simple_string(), r#"vertex("u1", "user")"#);
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn test_map_insert_overwrites() {
    let mut map = ElementMap::new();
    assert!(map.insert(Element::Int32(1), Element::from("a")).is_none());
    let old = map.insert(Element::Int32(1), Element::from("b"));
    assert_eq!(old, Some(Element::from("a")));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Element::Int32(1)), Some(&Element::from("b")));
}

#[test]
fn test_linked_map_overwrite_keeps_position() {
    let mut map = LinkedMap::new();
    map.insert(Element::from("a"), Element::Int32(1));
    map.insert(Element::from("b"), Element::Int32(2));
    map.insert(Element::from("a"), Element::Int32(3));

    let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get(&Element::from("a")), Some(&Element::Int32(3)));
}

#[test]
fn test_property_value_accessors() {
    let p = Property::new("k", 1.25f32);
    assert_eq!(p.key(), "k");
    assert_eq!(p.value(), &PropertyValue::Float32(1.25));
    assert_eq!(p.value().type_name(), "float32");
    assert_eq!(Element::from(p.value().clone()), Element::Float32(1.25));
}

#[test]
fn test_duplicate_property_keys_compare_symmetrically() {
    let a = Vertex::new(1, 2).with_properties(vec![Property::new("x", 1i32), Property::new("y", 2i32)]);
    let b = Vertex::new(1, 2).with_properties(vec![Property::new("x", 1i32), Property::new("x", 1i32)]);
    assert_ne!(a, b);
    assert_ne!(b, a);

    // Last duplicate wins on both sides.
    let c = Vertex::new(1, 2).with_properties(vec![Property::new("x", 0i32), Property::new("x", 1i32)]);
    let d = Vertex::new(1, 2).with_properties(vec![Property::new("x", 1i32), Property::new("x", 1i32)]);
    assert_eq!(c, d);
    assert_eq!(d, c);

    let e1 = Edge::new(Vertex::new(1, 1), Vertex::new(2, 1), "e").with_properties(a.properties().to_vec());
    let e2 = Edge::new(Vertex::new(1, 1), Vertex::new(2, 1), "e").with_properties(b.properties().to_vec());
    assert_ne!(e1, e2);
    assert_ne!(e2, e1);
}

#[test]
fn test_float_strict_equality_is_bitwise() {
    assert!(Element::Float64(f64::NAN).strict_eq(&Element::Float64(f64::NAN)));
    assert!(Element::Float32(f32::NAN).strict_eq(&Element::Float32(f32::NAN)));
    assert!(!Element::Float64(0.0).strict_eq(&Element::Float64(-0.0)));
    assert!(Element::Float64(0.0).loose_eq(&Element::Float64(-0.0)));
    assert_eq!(
        Property::new("w", f64::NAN),
        Property::new("w", f64::NAN)
    );
}

#[test]
fn test_loose_list_equality_uses_renderings() {
    assert!(!Element::from("1").loose_eq(&Element::Int32(1)));
    let strings = list(vec![Element::from("1")]);
    let numbers = list(vec![Element::Int32(1)]);
    assert!(strings.loose_eq(&numbers));
    assert!(!strings.strict_eq(&numbers));
}
