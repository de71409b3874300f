pub mod api;
mod manual_entry;
mod results_dialog;
pub mod view;
pub mod view_model;

pub use view::BulkProductUpload;
