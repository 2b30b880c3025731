pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;
pub mod students;

pub use startup::run;
