use tutti::{
    capability::{blame, timestamps},
    prelude::*,
};

///
/// Instrument
///
/// One instrument owned by the organisation and loaned out to members.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
#[entity(capabilities(timestamps, blame))]
pub struct Instrument {
    id: Option<u64>,
    serial_number: Option<String>,
    family: Option<String>,
    acquired_on: Option<Date>,
    on_loan: Option<bool>,

    #[field(unmapped)]
    created_at: Option<Timestamp>,
    #[field(unmapped)]
    updated_at: Option<Timestamp>,
    #[field(unmapped)]
    created_by: Option<String>,
    #[field(unmapped)]
    updated_by: Option<String>,
}

impl Instrument {
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    #[must_use]
    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    /// Stored uppercased with surrounding whitespace removed; serials are
    /// compared verbatim downstream.
    pub fn set_serial_number(&mut self, serial_number: Option<String>) {
        self.serial_number = serial_number.map(|s| s.trim().to_ascii_uppercase());
    }

    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Stored lowercased ("strings", "woodwind", "brass", "percussion");
    /// free-form labels survive, only the casing is folded.
    pub fn set_family(&mut self, family: Option<String>) {
        self.family = family.map(|f| f.trim().to_ascii_lowercase());
    }

    #[must_use]
    pub const fn acquired_on(&self) -> Option<Date> {
        self.acquired_on
    }

    pub fn set_acquired_on(&mut self, acquired_on: Option<Date>) {
        self.acquired_on = acquired_on;
    }

    #[must_use]
    pub const fn on_loan(&self) -> Option<bool> {
        self.on_loan
    }

    pub fn set_on_loan(&mut self, on_loan: Option<bool>) {
        self.on_loan = on_loan;
    }
}

impl Timestamped for Instrument {
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

impl Blamed for Instrument {
    fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    fn set_created_by(&mut self, by: Option<String>) {
        self.created_by = by;
    }

    fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    fn set_updated_by(&mut self, by: Option<String>) {
        self.updated_by = by;
    }
}

///
/// TESTS
///
