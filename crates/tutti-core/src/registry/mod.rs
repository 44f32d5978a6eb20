
use crate::{
    error::{AccessError, RegistryError},
    model::{FieldAccessor, FieldDescriptor},
    traits::EntityFields,
    value::Value,
};
use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
    sync::{OnceLock, RwLock},
};

const LOCK_POISONED: &str = "field table cache poisoned";

type CacheEntry = &'static (dyn Any + Send + Sync);

/// Built tables, keyed by entity type. Populated at most once per type,
/// never invalidated; entries are leaked for `'static` access.
static TABLES: OnceLock<RwLock<HashMap<TypeId, CacheEntry>>> = OnceLock::new();

/// Build invocations per entity type. Diagnostic only.
static BUILDS: OnceLock<RwLock<HashMap<TypeId, usize>>> = OnceLock::new();

///
/// FieldTable
///
/// The mapped-field registry for one entity type: the declared
/// descriptors, the validated accessor entries (declaration order, own
/// fields first, then capability groups), and a name index.
///
/// Shared by every instance of the type; obtained through [`Self::of`].
///

pub struct FieldTable<E> {
    entity_name: &'static str,
    descriptors: Vec<FieldDescriptor>,
    accessors: Vec<FieldAccessor<E>>,
    index: HashMap<&'static str, usize>,
}

impl<E> std::fmt::Debug for FieldTable<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTable")
            .field("entity", &self.entity_name)
            .field("fields", &self.accessors.len())
            .finish_non_exhaustive()
    }
}

impl<E: EntityFields> FieldTable<E> {
    /// The table for `E`, built and validated on first use and cached for
    /// the process lifetime. Construction failures are declaration
    /// defects and are returned on every call rather than cached.
    pub fn of() -> Result<&'static Self, RegistryError> {
        let cache = TABLES.get_or_init(|| RwLock::new(HashMap::new()));

        if let Some(&entry) = cache.read().expect(LOCK_POISONED).get(&TypeId::of::<E>()) {
            return Ok(Self::downcast(entry));
        }

        // Build outside the lock; construction is pure, so a losing racer
        // discards its copy and adopts the stored one.
        let table = Self::build()?;

        let mut map = cache.write().expect(LOCK_POISONED);
        let entry = map.entry(TypeId::of::<E>()).or_insert_with(|| {
            let leaked: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(table));
            leaked
        });

        Ok(Self::downcast(*entry))
    }

    fn downcast(entry: CacheEntry) -> &'static Self {
        entry
            .downcast_ref::<Self>()
            .expect("field table entry downcast")
    }

    fn build() -> Result<Self, RegistryError> {
        note_build(TypeId::of::<E>());

        let entity_name = E::ENTITY_NAME;
        let mut descriptors = E::field_descriptors();

        let mut declared: HashSet<&'static str> = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if !declared.insert(descriptor.name) {
                return Err(RegistryError::DuplicateField {
                    entity: entity_name,
                    field: descriptor.name,
                });
            }
        }

        let own = E::mapped_fields();
        let mut accessors: Vec<FieldAccessor<E>> = Vec::with_capacity(own.len());
        let mut index: HashMap<&'static str, usize> = HashMap::with_capacity(own.len());

        for accessor in own {
            let known_mapped = descriptors
                .iter()
                .any(|d| d.name == accessor.name && d.mapped);
            if !known_mapped {
                return Err(RegistryError::StrayAccessor {
                    entity: entity_name,
                    field: accessor.name,
                });
            }

            if index.insert(accessor.name, accessors.len()).is_some() {
                return Err(RegistryError::DuplicateAccessor {
                    entity: entity_name,
                    field: accessor.name,
                });
            }

            accessors.push(accessor);
        }

        for descriptor in descriptors.iter().filter(|d| d.mapped) {
            if !index.contains_key(descriptor.name) {
                return Err(RegistryError::MissingAccessor {
                    entity: entity_name,
                    field: descriptor.name,
                });
            }
        }

        // Capability contributions extend the mapped set. A contribution
        // naming an unmapped declared field upgrades that field (the
        // capability owns the mapping of its backing storage); a name
        // already mapped is a declaration defect.
        for group in E::capability_fields() {
            for accessor in group.accessors {
                if index.contains_key(accessor.name) {
                    return Err(RegistryError::CapabilityCollision {
                        entity: entity_name,
                        source: group.source,
                        field: accessor.name,
                    });
                }

                match descriptors.iter_mut().find(|d| d.name == accessor.name) {
                    Some(backing) => backing.mapped = true,
                    None => descriptors.push(FieldDescriptor::column(accessor.name)),
                }

                index.insert(accessor.name, accessors.len());
                accessors.push(accessor);
            }
        }

        let table = Self {
            entity_name,
            descriptors,
            accessors,
            index,
        };

        tracing::debug!(
            entity = table.entity_name,
            fields = table.len(),
            "field table built"
        );

        Ok(table)
    }

    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Mapped key set, in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.accessors.iter().map(|accessor| accessor.name)
    }

    /// True when `field` names a mapped field of this type, regardless of
    /// any instance's current value.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    /// Every declared field, mapped or not, post capability resolution.
    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Number of mapped fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    fn accessor(&self, field: &str) -> Option<&FieldAccessor<E>> {
        self.index.get(field).map(|&slot| &self.accessors[slot])
    }

    /// True iff `field` is mapped and `entity` currently holds a value
    /// for it.
    #[must_use]
    pub fn has(&self, entity: &E, field: &str) -> bool {
        self.accessor(field)
            .is_some_and(|accessor| !(accessor.get)(entity).is_null())
    }

    /// The current value of `field` on `entity`, or `Value::Null` when the
    /// field is absent or the key is unknown. Unknown keys never reach an
    /// accessor.
    #[must_use]
    pub fn get(&self, entity: &E, field: &str) -> Value {
        self.accessor(field)
            .map_or(Value::Null, |accessor| (accessor.get)(entity))
    }

    /// Write `value` through the field's setter. Gated on key membership
    /// only, so an absent mapped field can be populated.
    pub fn set(&self, entity: &mut E, field: &str, value: Value) -> Result<(), AccessError> {
        let Some(accessor) = self.accessor(field) else {
            return Err(AccessError::unknown_field(self.entity_name, field));
        };

        (accessor.set)(entity, value)
            .map_err(|mismatch| AccessError::value_shape(self.entity_name, field, mismatch.variant))
    }

    /// Clear `field` on `entity`. A no-op when the field is already
    /// absent; unknown keys are rejected like `set`.
    pub fn clear(&self, entity: &mut E, field: &str) -> Result<(), AccessError> {
        self.set(entity, field, Value::Null)
    }
}

fn note_build(type_id: TypeId) {
    let counts = BUILDS.get_or_init(|| RwLock::new(HashMap::new()));
    *counts
        .write()
        .expect(LOCK_POISONED)
        .entry(type_id)
        .or_insert(0) += 1;
}

/// Number of table builds recorded for `E`. Diagnostic surface: a healthy
/// process reports at most 1 per type however many instances exist.
#[must_use]
pub fn build_count<E: EntityFields>() -> usize {
    BUILDS.get().map_or(0, |counts| {
        counts
            .read()
            .expect(LOCK_POISONED)
            .get(&TypeId::of::<E>())
            .copied()
            .unwrap_or(0)
    })
}

/// Number of entity types with a cached table.
#[must_use]
pub fn cached_tables() -> usize {
    TABLES.get().map_or(0, |cache| {
        cache.read().expect(LOCK_POISONED).len()
    })
}
