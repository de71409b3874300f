//! Product edit page
//!
//! - view_model.rs: form state, load and save commands
//! - view.rs: the component

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
