//! Family graph model: persons, households, the registry and ingestion.

pub mod builder;
pub mod registry;
pub mod types;

pub use builder::{populate, IngestReport};
pub use registry::Family;
pub use types::{AttrValue, Household, HouseholdId, Person};
