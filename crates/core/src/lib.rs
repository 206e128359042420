//! Mesajkart domain logic.
//!
//! This crate holds everything that does not touch the network or the
//! database: the template field-schema model, the built-in schema catalog,
//! the text-field store and edit session, display-value resolution, renderer
//! dispatch, and validation helpers shared by the API and repository layers.

pub mod catalog;
pub mod error;
pub mod render;
pub mod schema;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;
