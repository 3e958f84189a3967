pub mod area;
pub mod audit_entry;
pub mod city;
pub mod event;
pub mod normalized_location;
pub mod sport;
pub mod user_profile;

pub use area::Area;
pub use audit_entry::AuditEntry;
pub use city::City;
pub use event::Event;
pub use normalized_location::{NormalizedLocation, normalize, trim_location};
pub use sport::Sport;
pub use user_profile::UserProfile;

use serde::{Deserialize, Deserializer};

/// Stored documents are loosely typed; treat an explicit null like a
/// missing field.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
