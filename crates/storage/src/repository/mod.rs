pub mod area;
pub mod audit_log;
pub mod city;
pub mod event;
pub mod sport;
pub mod user_profile;
