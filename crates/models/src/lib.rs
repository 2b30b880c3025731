//! Persistence models: SeaORM entities plus connection helpers.

pub mod db;
pub mod student;
