//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Persistence goes through the repository traits in `repository`, with a
//!   SeaORM backend for production and an in-memory backend for tests.
//! - Provides clear error types and documented interfaces.

pub mod attendant_service;
pub mod db;
pub mod errors;
pub mod product_service;
pub mod repository;
pub mod storage;
