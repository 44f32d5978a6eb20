use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Declaration defects detected while building a type's field table.
/// These are developer-time faults: registry construction aborts rather
/// than returning a partial table.
///

// NOTE: `RegistryError` cannot use `#[derive(thiserror::Error)]`: its
// `CapabilityCollision` variant has a field named `source` (a `&'static str`
// display label), and thiserror unconditionally treats any field named
// `source` as the error's `std::error::Error::source()`, which requires the
// field to implement `Error`. A `&'static str` does not, so the derive fails
// to compile. thiserror 2.0 offers no attribute to opt a `source`-named field
// out of source detection, and the field name is part of the public API (it is
// constructed by name in `registry/mod.rs` and matched in tests). The `Display`
// and `Error` impls below reproduce the derive's exact messages verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    DuplicateField {
        entity: &'static str,
        field: &'static str,
    },

    MissingAccessor {
        entity: &'static str,
        field: &'static str,
    },

    StrayAccessor {
        entity: &'static str,
        field: &'static str,
    },

    DuplicateAccessor {
        entity: &'static str,
        field: &'static str,
    },

    CapabilityCollision {
        entity: &'static str,
        source: &'static str,
        field: &'static str,
    },
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateField { entity, field } => write!(
                f,
                "entity '{entity}' declares field '{field}' more than once"
            ),
            Self::MissingAccessor { entity, field } => write!(
                f,
                "entity '{entity}' has no accessor entry for mapped field '{field}'"
            ),
            Self::StrayAccessor { entity, field } => write!(
                f,
                "entity '{entity}' carries an accessor entry '{field}' that names no mapped field"
            ),
            Self::DuplicateAccessor { entity, field } => write!(
                f,
                "entity '{entity}' carries duplicate accessor entries for field '{field}'"
            ),
            Self::CapabilityCollision {
                entity,
                source,
                field,
            } => write!(
                f,
                "capability '{source}' on entity '{entity}' contributes field '{field}', which is already mapped"
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

///
/// AccessError
///
/// Caller-recoverable failures raised by `set`/`clear` on an array view.
/// `get`/`has` never fail; an absent value is not an error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("unknown field '{field}' on entity '{entity}'")]
    UnknownField { entity: &'static str, field: String },

    #[error("field '{field}' on entity '{entity}' cannot accept a {variant} value")]
    ValueShape {
        entity: &'static str,
        field: String,
        variant: &'static str,
    },
}

impl AccessError {
    /// Construct an unknown-field rejection for `set`/`clear`.
    pub fn unknown_field(entity: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            entity,
            field: field.into(),
        }
    }

    /// Construct a value-shape rejection naming the offending variant.
    pub fn value_shape(
        entity: &'static str,
        field: impl Into<String>,
        variant: &'static str,
    ) -> Self {
        Self::ValueShape {
            entity,
            field: field.into(),
            variant,
        }
    }

    #[must_use]
    pub const fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }
}
