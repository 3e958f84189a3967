pub mod common;
pub mod event;
pub mod profile;
pub mod reference;
