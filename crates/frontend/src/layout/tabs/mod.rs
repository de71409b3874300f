//! Tab management
//!
//! - `page`: `TabPage`, the wrapper that shows or hides one tab's content
//! - `registry`: tab key to view, the only place tab keys are matched
//! - `tab_labels`: tab key to title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, product_detail_key, tab_label_for_key};
