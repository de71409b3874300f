mod view;
mod view_model;

pub use view::ProductCreate;
pub use view_model::ProductCreateViewModel;
