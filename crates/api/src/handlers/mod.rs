pub mod orders;
pub mod schemas;
pub mod templates;
