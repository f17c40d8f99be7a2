pub mod c001_product;
pub mod c002_brand;
