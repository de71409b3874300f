pub mod api_client;
pub mod components;
pub mod date_utils;
pub mod entity_crud;
pub mod export;
pub mod file_utils;
pub mod icons;
pub mod page_frame;
