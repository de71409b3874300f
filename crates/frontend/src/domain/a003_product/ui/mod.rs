pub mod create;
pub mod details;
pub mod form_fields;
pub mod list;
