//! Generic list / create / edit / details / delete table for account entities.
//!
//! An entity implements [`CrudEntity`] and wraps [`entity_crud_table`] in its
//! own list component.

mod details_dialog;
pub mod entity;
mod form_dialog;
pub mod state;
mod table;

pub use entity::CrudEntity;
pub use table::entity_crud_table;
