use tutti::{capability::timestamps, prelude::*};

///
/// Orchestra
///
/// An ensemble: the organisational root most other rows hang off.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
#[entity(capabilities(timestamps))]
pub struct Orchestra {
    id: Option<u64>,
    name: Option<String>,
    city: Option<String>,
    founded_on: Option<Date>,
    ensemble_size: Option<u32>,

    #[field(unmapped)]
    created_at: Option<Timestamp>,
    #[field(unmapped)]
    updated_at: Option<Timestamp>,
}

impl Orchestra {
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city;
    }

    #[must_use]
    pub const fn founded_on(&self) -> Option<Date> {
        self.founded_on
    }

    pub fn set_founded_on(&mut self, founded_on: Option<Date>) {
        self.founded_on = founded_on;
    }

    #[must_use]
    pub const fn ensemble_size(&self) -> Option<u32> {
        self.ensemble_size
    }

    pub fn set_ensemble_size(&mut self, ensemble_size: Option<u32>) {
        self.ensemble_size = ensemble_size;
    }
}

impl Timestamped for Orchestra {
    fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    fn set_created_at(&mut self, at: Option<Timestamp>) {
        self.created_at = at;
    }

    fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: Option<Timestamp>) {
        self.updated_at = at;
    }
}
