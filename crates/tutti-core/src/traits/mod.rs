use crate::{
    model::{FieldAccessor, FieldDescriptor, FieldGroup},
    value::Value,
};

// ============================================================================
// ENTITY REGISTRATION
// ============================================================================
//
// These traits describe *what an entity declares*, not how instances
// behave at runtime.
//

///
/// EntityFields
///
/// Declarative registration contract for one entity type.
///
/// ## Semantics
/// - `field_descriptors` covers every declared field, mapped or not
/// - `mapped_fields` is the entity's own accessor table, declaration order
/// - `capability_fields` lists groups contributed by composed behaviors
/// - All three are pure: called once per process when the type's field
///   table is first built, and every call must return the same content
///
/// Normally generated by `#[derive(EntityFields)]`; hand-written impls are
/// validated at table build and rejected loudly on any mismatch.
///

pub trait EntityFields: Sized + 'static {
    const ENTITY_NAME: &'static str;

    /// Every declared field of the type, with its mapped flag.
    fn field_descriptors() -> Vec<FieldDescriptor>;

    /// Accessor entries for the type's own mapped fields.
    fn mapped_fields() -> Vec<FieldAccessor<Self>>;

    /// Field groups contributed by composed capabilities.
    fn capability_fields() -> Vec<FieldGroup<Self>> {
        Vec::new()
    }
}

// ============================================================================
// FIELD VALUE BOUNDARIES
// ============================================================================

///
/// FieldValue
///
/// Conversion boundary between typed field data and `Value` cells.
///
/// `to_value` feeds getter results through the array view; `from_value`
/// converts incoming cells for setters, returning `None` when the shape
/// does not fit the field.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }

    fn from_value(_value: &Value) -> Option<Self> {
        None
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: FieldValue> FieldValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn from_value(_value: &Value) -> Option<Self> {
        None
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if matches!(value, Value::Null) {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        let mut out = Self::with_capacity(items.len());
        for item in items {
            out.push(T::from_value(item)?);
        }

        Some(out)
    }
}

// impl_field_value
#[macro_export]
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    bool => Bool,
);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trips() {
        assert_eq!(7_u32.to_value(), Value::Uint(7));
        assert_eq!(u32::from_value(&Value::Uint(7)), Some(7));
        assert_eq!((-3_i64).to_value(), Value::Int(-3));
        assert_eq!(bool::from_value(&Value::Bool(true)), Some(true));
    }

    #[test]
    fn narrowing_out_of_range_is_rejected() {
        assert_eq!(u8::from_value(&Value::Uint(300)), None);
        assert_eq!(i32::from_value(&Value::Int(i64::MAX)), None);
    }

    #[test]
    fn option_lifts_null_to_none() {
        assert_eq!(Option::<String>::from_value(&Value::Null), Some(None));
        assert_eq!(
            Option::<String>::from_value(&Value::Text("x".into())),
            Some(Some("x".to_string()))
        );
        assert_eq!(Option::<String>::from_value(&Value::Uint(1)), None);
    }

    #[test]
    fn option_none_is_null() {
        let absent: Option<u64> = None;
        assert_eq!(absent.to_value(), Value::Null);
    }

    #[test]
    fn vec_maps_to_list_elementwise() {
        let v = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            v.to_value(),
            Value::List(vec![Value::Text("a".into()), Value::Text("b".into())])
        );

        let back = Vec::<String>::from_value(&v.to_value());
        assert_eq!(back, Some(v));

        // one bad element poisons the whole list
        let mixed = Value::List(vec![Value::Text("a".into()), Value::Uint(1)]);
        assert_eq!(Vec::<String>::from_value(&mixed), None);
    }

    #[test]
    fn reference_lift_converts_outward_only() {
        let s = "code".to_string();
        let r = &s;
        assert_eq!(FieldValue::to_value(&r), Value::Text("code".into()));
        assert_eq!(<&String>::from_value(&Value::Text("code".into())), None);
    }
}
