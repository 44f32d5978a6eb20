use tutti::{
    capability::{blame, timestamps},
    prelude::*,
};

///
/// Member
///
/// One playing member of an orchestra.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
#[entity(capabilities(timestamps, blame))]
pub struct Member {
    id: Option<u64>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    birth_date: Option<Date>,
    joined_on: Option<Date>,
    active: Option<bool>,
    specialisations: Option<Vec<String>>,

    // capability-backed columns
    #[field(unmapped)]
    created_at: Option<Timestamp>,
    #[field(unmapped)]
    updated_at: Option<Timestamp>,
    #[field(unmapped)]
    created_by: Option<String>,
    #[field(unmapped)]
    updated_by: Option<String>,

    /// Optimistic-lock counter, maintained by the persistence layer.
    #[field(unmapped)]
    row_version: u64,
}

impl Member {
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Stores the address trimmed and lowercased; member e-mail lookups
    /// are case-insensitive.
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email.map(|e| e.trim().to_ascii_lowercase());
    }

    #[must_use]
    pub const fn birth_date(&self) -> Option<Date> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: Option<Date>) {
        self.birth_date = birth_date;
    }

    #[must_use]
    pub const fn joined_on(&self) -> Option<Date> {
        self.joined_on
    }

    pub fn set_joined_on(&mut self, joined_on: Option<Date>) {
        self.joined_on = joined_on;
    }

    #[must_use]
    pub const fn active(&self) -> Option<bool> {
        self.active
    }

    pub fn set_active(&mut self, active: Option<bool>) {
        self.active = active;
    }

    #[must_use]
    pub const fn specialisations(&self) -> Option<&Vec<String>> {
        self.specialisations.as_ref()
    }

    pub fn set_specialisations(&mut self, specialisations: Option<Vec<String>>) {
        self.specialisations = specialisations;
    }

    #[must_use]
    pub const fn row_version(&self) -> u64 {
        self.row_version
    }
}

impl Timestamped for Member {
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

impl Blamed for Member {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_on_write() {
        let mut member = Member::default();
        member.set_email(Some("  Anna.Keller@Example.ORG ".to_string()));
        assert_eq!(member.email(), Some("anna.keller@example.org"));
    }

    #[test]
    fn clearing_email_stores_none() {
        let mut member = Member::default();
        member.set_email(Some("anna@example.org".into()));
        member.set_email(None);
        assert_eq!(member.email(), None);
    }

    #[test]
    fn row_version_is_invisible_to_the_view() {
        let mut member = Member::default();
        let view = ArrayView::new(&mut member).unwrap();
        assert!(!view.keys().any(|k| k == "row_version"));
    }
}
