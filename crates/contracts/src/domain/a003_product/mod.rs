pub mod adoption;
pub mod aggregate;
pub mod category;
pub mod discount;
pub mod form;
pub mod lookup;
pub mod search;

pub use adoption::{AdoptedProduct, AdoptedProductUpdate, AdoptionRequest, StockStatus};
pub use aggregate::{
    format_price, AdminProduct, BulkDeleteRequest, CustomWeight, ProductImage, ProductResponse,
    ProductUpdateDto,
};
pub use category::{category_drift, CategoryDrift, ProductCategory};
pub use discount::{discounted_price, Discount, DiscountError, DiscountType};
pub use form::{ProductForm, ProductFormError};
pub use lookup::{label_for, LookupOption};
pub use search::{Pagination, ProductPage, ProductSearchOptions, SortOrder};
