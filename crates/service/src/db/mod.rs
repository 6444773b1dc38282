mod attendant_repository;
mod product_repository;

pub use attendant_repository::SeaOrmAttendantRepository;
pub use product_repository::SeaOrmProductRepository;
