pub mod c001_product;
pub mod c002_brand;
pub mod common;
pub mod d100_inventory;
