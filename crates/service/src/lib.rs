//! Service layer providing the student registry's business rules on top of models.
//! - Separates business logic from data access.
//! - Validates input and computes pagination before any storage call.
//! - Keeps storage error types behind `ServiceError`.

pub mod errors;
pub mod pagination;
pub mod student;
#[cfg(test)]
pub mod test_support;
