pub mod aggregate;
pub mod metadata;

pub use aggregate::{
    normalize_business_owners, BusinessOwner, BusinessOwnerDto, BusinessOwnerResponse,
};
