//! Persistence-layer entity definitions for the orchestra-management
//! domain. These are data carriers: `Option<T>` storage per mapped
//! column, a typed accessor pair per field, and an `EntityFields`
//! registration so any instance can be driven through `ArrayView`.

pub mod concert;
pub mod geo;
pub mod instrument;
pub mod member;
pub mod orchestra;


pub use concert::Concert;
pub use geo::{Continent, ContinentTranslation};
pub use instrument::Instrument;
pub use member::Member;
pub use orchestra::Orchestra;
