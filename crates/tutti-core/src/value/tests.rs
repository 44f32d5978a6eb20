use super::*;

#[test]
fn null_is_the_only_null() {
    assert!(Value::Null.is_null());
    assert!(!Value::Text(String::new()).is_null());
    assert!(!Value::Uint(0).is_null());
    assert!(!Value::List(vec![]).is_null());
}

#[test]
fn variant_names_are_stable() {
    assert_eq!(Value::Bool(true).variant_name(), "Bool");
    assert_eq!(Value::Null.variant_name(), "Null");
    assert_eq!(Value::Text("x".into()).variant_name(), "Text");
    assert_eq!(Value::List(vec![Value::Int(1)]).variant_name(), "List");
}

#[test]
fn text_accessors() {
    let v = Value::from("EU");
    assert_eq!(v.as_text(), Some("EU"));
    assert_eq!(v.as_uint(), None);
    assert_eq!(v.as_bool(), None);

    assert_eq!(Value::from("EU".to_string()), v);
    assert_eq!(Value::Uint(9).as_uint(), Some(9));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
}

#[test]
fn serde_round_trip() {
    let v = Value::List(vec![
        Value::Text("violin".into()),
        Value::Uint(4),
        Value::Null,
    ]);
    let json = serde_json::to_string(&v).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
