pub mod aggregate;
pub mod metadata;

pub use aggregate::{
    normalize_delivery_persons, DeliveryPerson, DeliveryPersonDto, DeliveryPersonResponse,
};
