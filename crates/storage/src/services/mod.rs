pub mod event_matching;
