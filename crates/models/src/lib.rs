pub mod attendant;
pub mod db;
pub mod product;
