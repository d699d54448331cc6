use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use structextract::{ExtractError, Extractor, Record, Value};

#[allow(non_snake_case)]
#[derive(Debug, Record)]
struct TestStruct {
    #[extract(json = "field_1", db = "field1")]
    Field1: String,
    #[extract(json = "field_2", db = "field2")]
    Field2: String,
    #[extract(json = "field_3")]
    Field3: bool,
    #[extract(json = "field_4")]
    Field4: Value,
}

fn fake_data() -> TestStruct {
    TestStruct {
        Field1: "hello".to_string(),
        Field2: "world".to_string(),
        Field3: true,
        Field4: Value::from("2016-10-10"),
    }
}

fn all_values() -> Vec<Value> {
    vec![
        Value::from("hello"),
        Value::from("world"),
        Value::Boolean(true),
        Value::from("2016-10-10"),
    ]
}

#[test]
fn test_names() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    assert_eq!(
        extractor.names().unwrap(),
        vec!["Field1", "Field2", "Field3", "Field4"]
    );
}

#[test]
fn test_names_from_tag() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    assert_eq!(
        extractor.names_from_tag("json").unwrap(),
        vec!["field_1", "field_2", "field_3", "field_4"]
    );
    assert_eq!(
        extractor.names_from_tag("db").unwrap(),
        vec!["field1", "field2"]
    );
}

#[test]
fn test_names_from_tag_with_prefix() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    let names = extractor
        .names_from_tag_with_prefix("json", "default_")
        .unwrap();
    assert_eq!(
        names,
        vec![
            "default_field_1",
            "default_field_2",
            "default_field_3",
            "default_field_4"
        ]
    );

    let empty_tag = extractor
        .names_from_tag_with_prefix("", "default_")
        .unwrap();
    assert!(empty_tag.is_empty());

    let no_prefix = extractor.names_from_tag_with_prefix("json", "").unwrap();
    assert_eq!(no_prefix, extractor.names_from_tag("json").unwrap());
}

#[test]
fn test_values() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    let values = extractor.values().unwrap();
    assert_eq!(values, all_values());
    assert_eq!(values.len(), extractor.names().unwrap().len());
}

#[test]
fn test_values_from_tag() {
    let data = fake_data();
    let extractor = Extractor::new(&data).ignore_field(["Field4"]);

    let values = extractor.values_from_tag("db").unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values, vec![Value::from("hello"), Value::from("world")]);
    assert_eq!(
        values.len(),
        extractor.names_from_tag("db").unwrap().len()
    );
}

#[test]
fn test_field_value_map() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    let expected: HashMap<&str, Value> = HashMap::from([
        ("Field1", Value::from("hello")),
        ("Field2", Value::from("world")),
        ("Field3", Value::Boolean(true)),
        ("Field4", Value::from("2016-10-10")),
    ]);
    assert_eq!(extractor.field_value_map().unwrap(), expected);
}

#[test]
fn test_field_value_from_tag_map() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    let expected: HashMap<&str, Value> = HashMap::from([
        ("field_1", Value::from("hello")),
        ("field_2", Value::from("world")),
        ("field_3", Value::Boolean(true)),
        ("field_4", Value::from("2016-10-10")),
    ]);
    assert_eq!(extractor.field_value_from_tag_map("json").unwrap(), expected);
}

#[test]
fn test_field_value_from_tag_map_wrong_tag() {
    let data = fake_data();
    let extractor = Extractor::new(&data);

    assert_eq!(
        extractor.field_value_from_tag_map("json2").unwrap(),
        HashMap::new()
    );
}

#[test]
fn test_ignored_fields() {
    let data = fake_data();
    let extractor = Extractor::new(&data).ignore_field(["Field2", "Field4"]);

    assert_eq!(extractor.names().unwrap(), vec!["Field1", "Field3"]);
    assert_eq!(
        extractor.names_from_tag("json").unwrap(),
        vec!["field_1", "field_3"]
    );
    assert_eq!(
        extractor
            .names_from_tag_with_prefix("json", "default_")
            .unwrap(),
        vec!["default_field_1", "default_field_3"]
    );
    assert_eq!(
        extractor.values().unwrap(),
        vec![Value::from("hello"), Value::Boolean(true)]
    );
    assert_eq!(
        extractor.field_value_map().unwrap(),
        HashMap::from([
            ("Field1", Value::from("hello")),
            ("Field3", Value::Boolean(true)),
        ])
    );
    assert_eq!(
        extractor.field_value_from_tag_map("json").unwrap(),
        HashMap::from([
            ("field_1", Value::from("hello")),
            ("field_3", Value::Boolean(true)),
        ])
    );
}

#[test]
fn test_ignore_unknown_field() {
    let data = fake_data();
    let mut extractor = Extractor::new(&data);
    extractor.ignore(["NotAValidField"]);

    assert_eq!(extractor.values().unwrap(), all_values());
    assert_eq!(
        extractor.names().unwrap(),
        vec!["Field1", "Field2", "Field3", "Field4"]
    );

    let untouched = Extractor::new(&data);
    assert_eq!(
        extractor.names_from_tag("json").unwrap(),
        untouched.names_from_tag("json").unwrap()
    );
    assert_eq!(
        extractor.names_from_tag_with_prefix("db", "t_").unwrap(),
        untouched.names_from_tag_with_prefix("db", "t_").unwrap()
    );
    assert_eq!(
        extractor.values_from_tag("db").unwrap(),
        untouched.values_from_tag("db").unwrap()
    );
    assert_eq!(
        extractor.field_value_map().unwrap(),
        untouched.field_value_map().unwrap()
    );
    assert_eq!(
        extractor.field_value_from_tag_map("json").unwrap(),
        untouched.field_value_from_tag_map("json").unwrap()
    );
}

#[test]
fn test_ignore_uses_declared_name_not_tag() {
    let data = fake_data();
    let extractor = Extractor::new(&data).ignore_field(["field_1"]);

    assert_eq!(extractor.names().unwrap().len(), 4);
}

#[test]
fn test_ignore_not_a_struct() {
    let not_a_struct = vec!["test", "test2"];
    let extractor = Extractor::new(&not_a_struct).ignore_field(["test"]);

    assert!(extractor.ignored_fields().is_none());
}

#[test]
fn test_invalid_struct() {
    fn assert_invalid<R: Record + ?Sized>(value: &R) {
        let extractor = Extractor::new(value);

        assert!(matches!(
            extractor.names(),
            Err(ExtractError::InvalidRecordKind { .. })
        ));
        assert!(extractor.names_from_tag("json").is_err());
        assert!(extractor
            .names_from_tag_with_prefix("json", "default-")
            .is_err());
        assert!(extractor.values().is_err());
        assert!(extractor.values_from_tag("json").is_err());
        assert!(extractor.field_value_map().is_err());
        assert!(extractor.field_value_from_tag_map("json").is_err());
        // the shape check comes before the empty tag key shortcut
        assert!(extractor.names_from_tag("").is_err());
        assert!(extractor.names_from_tag_with_prefix("", "default-").is_err());
        assert!(extractor.values_from_tag("").is_err());
    }

    assert_invalid(&"test".to_string());
    assert_invalid("test");
    assert_invalid(&vec!["fail".to_string(), "fail2".to_string()]);
    assert_invalid(&[1u8, 2, 3][..]);
    assert_invalid(&42i64);
    assert_invalid(&Some(fake_data()));
}

#[test]
fn test_try_new_rejects_non_struct() {
    let value = vec!["fail"];
    assert!(matches!(
        Extractor::try_new(&value),
        Err(ExtractError::InvalidRecordKind { .. })
    ));

    let data = fake_data();
    assert!(Extractor::try_new(&data).is_ok());
}

#[test]
fn test_boxed_record() {
    let boxed = Box::new(fake_data());
    let extractor = Extractor::new(&boxed);

    assert_eq!(extractor.names().unwrap().len(), 4);
}

#[derive(Record)]
struct Mixed<'a, T> {
    #[extract(json = "id")]
    id: u64,
    #[extract(json = "label")]
    label: &'a str,
    #[extract(json = "")]
    score: Option<f64>,
    tags: Vec<T>,
    #[extract(skip)]
    #[allow(dead_code)]
    scratch: Vec<u8>,
    r#type: char,
}

#[test]
fn test_mixed_field_types() {
    let mixed = Mixed {
        id: 7,
        label: "seven",
        score: None,
        tags: vec![1i16, 2],
        scratch: vec![0; 16],
        r#type: 'x',
    };
    let extractor = Extractor::new(&mixed);

    assert_eq!(
        extractor.names().unwrap(),
        vec!["id", "label", "score", "tags", "type"]
    );
    assert_eq!(
        extractor.values().unwrap(),
        vec![
            Value::UInt64(7),
            Value::from("seven"),
            Value::Null,
            Value::List(vec![Value::Int16(1), Value::Int16(2)]),
            Value::Char('x'),
        ]
    );
    // an empty tag value counts as absent
    assert_eq!(extractor.names_from_tag("json").unwrap(), vec!["id", "label"]);
    assert_eq!(
        extractor.values_from_tag("json").unwrap(),
        vec![Value::UInt64(7), Value::from("seven")]
    );
    assert!(extractor.ignored_fields().unwrap().is_empty());

    let extractor = extractor.ignore_field(["scratch", "type"]);
    assert_eq!(
        extractor.names().unwrap(),
        vec!["id", "label", "score", "tags"]
    );
}

#[derive(Record)]
struct Empty;

#[test]
fn test_unit_struct_is_a_record() {
    let extractor = Extractor::new(&Empty);

    assert!(extractor.names().unwrap().is_empty());
    assert!(extractor.values().unwrap().is_empty());
    assert!(extractor.field_value_map().unwrap().is_empty());
}

#[derive(Debug, Clone, PartialEq)]
struct Address {
    city: String,
    zip: u32,
}

#[derive(Record)]
struct WithMap {
    #[extract(json = "id")]
    id: u32,
    #[extract(json = "meta")]
    meta: HashMap<String, String>,
    limits: BTreeMap<u8, u64>,
    #[extract(json = "pair")]
    pair: (u8, u8),
    labels: HashSet<String>,
    #[extract(any, json = "address")]
    address: Address,
}

fn with_map() -> WithMap {
    WithMap {
        id: 3,
        meta: HashMap::from([
            ("owner".to_string(), "ops".to_string()),
            ("env".to_string(), "prod".to_string()),
        ]),
        limits: BTreeMap::from([(1, 100), (2, 200)]),
        pair: (4, 5),
        labels: HashSet::from(["b".to_string(), "a".to_string()]),
        address: Address {
            city: "Lisbon".to_string(),
            zip: 1100,
        },
    }
}

#[test]
fn test_map_tuple_and_nested_fields() {
    let data = with_map();
    let extractor = Extractor::new(&data);

    assert_eq!(
        extractor.names().unwrap(),
        vec!["id", "meta", "limits", "pair", "labels", "address"]
    );

    let values = extractor.values().unwrap();
    assert_eq!(values.len(), 6);
    assert_eq!(values[0], Value::UInt32(3));
    assert_eq!(
        values[1],
        Value::Map(BTreeMap::from([
            (Value::from("env"), Value::from("prod")),
            (Value::from("owner"), Value::from("ops")),
        ]))
    );
    assert_eq!(
        values[2],
        Value::Map(BTreeMap::from([
            (Value::UInt8(1), Value::UInt64(100)),
            (Value::UInt8(2), Value::UInt64(200)),
        ]))
    );
    assert_eq!(
        values[3],
        Value::Tuple(vec![Value::UInt8(4), Value::UInt8(5)])
    );
    assert_eq!(
        values[4],
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(
        values[5].downcast_ref::<Address>(),
        Some(&data.address)
    );

    let by_tag = extractor.field_value_from_tag_map("json").unwrap();
    assert_eq!(
        by_tag.keys().copied().collect::<BTreeSet<_>>(),
        BTreeSet::from(["address", "id", "meta", "pair"])
    );
    let address = by_tag["address"].downcast_ref::<Address>().unwrap();
    assert_eq!(address.city, "Lisbon");
    assert_eq!(address.zip, 1100);

    let map = extractor.field_value_map().unwrap();
    assert_eq!(map["pair"], values[3]);
    assert_eq!(map["address"].type_name(), std::any::type_name::<Address>());
}

#[test]
fn test_nested_record_is_not_traversed() {
    let data = with_map();
    let extractor = Extractor::new(&data).ignore_field(["meta", "limits", "labels"]);

    // the nested struct is one opaque value, its own fields are not listed
    assert_eq!(extractor.names().unwrap(), vec!["id", "pair", "address"]);
    assert_eq!(
        extractor.names_from_tag("json").unwrap(),
        vec!["id", "pair", "address"]
    );
}
