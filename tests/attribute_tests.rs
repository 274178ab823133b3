//! Integration tests for dotted attribute-path resolution.

#![cfg(feature = "attribute")]

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use exos::attribute::{
    AttributePath, Attributes, each_method, map_attr, map_method, mattr, resolve, resolve_as,
    resolve_or, zip_with_attr,
};
use exos::{Error, Function, Signature, Value, args};
use rstest::rstest;

// =============================================================================
// Hand-written implementations
// =============================================================================

struct A {
    a: Value,
}

impl Attributes for A {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        match name {
            "a" => Some(&self.a),
            _ => None,
        }
    }
}

struct B {
    a: Box<dyn Attributes>,
    b: Option<i64>,
}

impl Attributes for B {
    fn attribute(&self, name: &str) -> Option<&dyn Attributes> {
        match name {
            "a" => Some(&self.a),
            "b" => Some(&self.b),
            _ => None,
        }
    }
}

// =============================================================================
// resolve
// =============================================================================

#[rstest]
fn resolves_a_single_segment() {
    let a = A { a: Value::from(42) };
    assert_eq!(resolve_as::<Value>(&a, "a"), Ok(&Value::from(42)));
}

#[rstest]
fn resolves_nested_segments() {
    let b = B {
        a: Box::new(A {
            a: Value::from("hello"),
        }),
        b: Some(31),
    };
    assert!(resolve(&b, "a").unwrap().is::<Box<dyn Attributes>>());
    assert_eq!(resolve_as::<Value>(&b, "a.a"), Ok(&Value::from("hello")));
    assert_eq!(resolve_as::<Option<i64>>(&b, "b"), Ok(&Some(31)));
}

#[rstest]
fn missing_segment_names_path_and_segment() {
    let a = A { a: Value::Null };
    assert_eq!(
        resolve(&a, "b").err(),
        Some(Error::AttributeMissing {
            path: "b".into(),
            segment: "b".into(),
        })
    );
}

#[rstest]
fn missing_first_segment_of_a_longer_path() {
    let record = Value::record([("a", Value::record([("b", 1)]))]);
    assert_eq!(
        resolve(&record, "x.b").err(),
        Some(Error::AttributeMissing {
            path: "x.b".into(),
            segment: "x".into(),
        })
    );
}

#[rstest]
fn none_has_no_attributes() {
    let nothing: Option<A> = None;
    assert!(resolve(&nothing, "a").is_err());
    let fallback = Value::from(42);
    let resolved = resolve_or(&nothing, "a", &fallback);
    assert_eq!(resolved.downcast_ref::<Value>(), Some(&Value::from(42)));
}

#[rstest]
#[case("a.b", Value::from(2))]
#[case("a.c", Value::from("default"))]
#[case("x.b", Value::from("default"))]
#[case("a.b.c", Value::from("default"))]
fn resolve_or_substitutes_for_any_missing_segment(#[case] path: &str, #[case] expected: Value) {
    let record = Value::record([("a", Value::record([("b", 2)]))]);
    let fallback = Value::from("default");
    let resolved = resolve_or(&record, path, &fallback);
    assert_eq!(resolved.downcast_ref::<Value>(), Some(&expected));
}

#[rstest]
fn resolve_or_never_fails_for_present_paths() {
    let record = Value::record([("a", Value::Null)]);
    let fallback = Value::from(1);
    let resolved = resolve_or(&record, "a", &fallback);
    assert_eq!(resolved.downcast_ref::<Value>(), Some(&Value::Null));
}

#[rstest]
fn empty_segment_is_missing() {
    let record = Value::record([("a", Value::record([("b", 1)]))]);
    assert!(matches!(
        resolve(&record, "a..b"),
        Err(Error::AttributeMissing { segment, .. }) if segment.is_empty()
    ));
}

#[rstest]
fn type_mismatch_is_reported() {
    let a = A { a: Value::from(1) };
    assert!(matches!(
        resolve_as::<String>(&a, "a"),
        Err(Error::AttributeType { .. })
    ));
}

// =============================================================================
// Containers
// =============================================================================

#[rstest]
fn maps_expose_their_entries() {
    let btree = BTreeMap::from([("price".to_owned(), 10_u32)]);
    let hash: HashMap<String, BTreeMap<String, u32>> =
        HashMap::from([("inner".to_owned(), btree.clone())]);

    assert_eq!(resolve_as::<u32>(&btree, "price"), Ok(&10));
    assert_eq!(resolve_as::<u32>(&hash, "inner.price"), Ok(&10));
}

#[rstest]
fn smart_pointers_are_transparent() {
    let record = Value::record([("a", 1)]);
    let boxed = Box::new(record.clone());
    let shared = Rc::new(record.clone());
    let atomic = Arc::new(record);

    let roots: [&dyn Attributes; 3] = [&boxed, &shared, &atomic];
    for root in roots {
        assert_eq!(resolve_as::<Value>(root, "a"), Ok(&Value::from(1)));
    }
}

// =============================================================================
// Mapping helpers
// =============================================================================

fn cars() -> Vec<Value> {
    vec![
        Value::record([("make", Value::from("Volvo")), ("price", Value::from(100))]),
        Value::record([("make", Value::from("Jeep")), ("price", Value::from(250))]),
    ]
}

#[rstest]
fn mattr_is_a_reusable_mapper() {
    let make = mattr("make");
    let makes: Vec<String> = cars()
        .iter()
        .map(|car| make.extract_as::<Value>(car).map(ToString::to_string))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(makes, vec!["\"Volvo\"", "\"Jeep\""]);
}

#[rstest]
fn map_attr_is_lazy_and_ordered() {
    let cars = cars();
    let prices: Vec<Value> = map_attr("price", &cars)
        .map(|price| price.map(|price| price.downcast_ref::<Value>().cloned().unwrap()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(prices, vec![Value::from(100), Value::from(250)]);
}

#[rstest]
fn zip_with_attr_pairs_items_with_paths() {
    let objects = vec![
        Value::record([
            ("a", Value::from(1)),
            ("b", Value::from(2)),
            ("c", Value::from(3)),
        ]),
        Value::record([
            ("a", Value::from("4")),
            ("b", Value::from(5.0)),
            ("c", Value::from("six")),
        ]),
    ];

    let zipped = zip_with_attr(&objects, &["b", "c"]).unwrap();
    let output: Vec<(Value, Value, Value)> = zipped
        .into_iter()
        .map(|(object, attributes)| {
            let value = |index: usize| attributes[index].downcast_ref::<Value>().cloned().unwrap();
            (object.get("a").cloned().unwrap(), value(0), value(1))
        })
        .collect();

    assert_eq!(
        output,
        vec![
            (Value::from(1), Value::from(2), Value::from(3)),
            (Value::from("4"), Value::from(5.0), Value::from("six")),
        ]
    );
}

fn with_method(label: &'static str) -> Value {
    Value::record([(
        "describe",
        Value::from(Function::new("describe", Signature::new(1), move |arguments| {
            Ok(Value::from(format!("{label}{}", arguments.text(0)?)))
        })),
    )])
}

#[rstest]
fn map_method_calls_each_resolved_function() {
    let items = vec![with_method("a:"), with_method("b:")];
    let described: Vec<Value> = map_method("describe", args!["x"], &items)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(described, vec![Value::from("a:x"), Value::from("b:x")]);
}

#[rstest]
fn each_method_stops_at_the_first_error() {
    let items = vec![with_method("a:"), Value::record([("describe", 1)])];
    assert_eq!(
        each_method("describe", args!["x"], &items),
        Err(Error::NotCallable {
            path: "describe".into()
        })
    );
}

#[rstest]
fn attribute_path_display_and_parse() {
    let path: AttributePath = "owner.address.city".into();
    assert_eq!(path.to_string(), "owner.address.city");
    assert_eq!(path.len(), 3);
    assert!(AttributePath::new("").is_empty());
}
