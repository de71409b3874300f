pub mod a001_business_owner;
pub mod a002_delivery_person;
pub mod a003_product;
