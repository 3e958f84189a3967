pub mod areas;
pub mod cities;
pub mod events;
pub mod profile;
pub mod sports;
