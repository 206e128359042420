//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod order_repo;
pub mod template_repo;

pub use order_repo::OrderRepo;
pub use template_repo::TemplateRepo;
