pub mod u501_bulk_product_import;
pub mod u502_product_adoption;
