pub mod api;
mod adopt_dialog;
mod adopted_panel;
mod available_panel;
mod filter_bar;
mod manage_dialog;
pub mod view;
pub mod view_model;

pub use view::ProductAdoption;
