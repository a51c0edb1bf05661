//! DTO modules that bridge the fetch layer with services and templates.

pub mod list;
pub mod page;
