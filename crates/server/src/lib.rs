pub mod errors;
pub mod routes;
pub mod seed;
pub mod startup;
pub mod state;

pub use startup::run;
