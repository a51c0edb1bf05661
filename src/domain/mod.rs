//! Records served by the language portal backend.

pub mod entity;
pub mod group;
pub mod search;
pub mod study_activity;
pub mod study_session;
pub mod types;
pub mod word;
