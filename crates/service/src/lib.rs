//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Enforces parent references and the sparse-merge update policy.
//! - Provides clear error types and documented interfaces.

pub mod attachment;
pub mod catalog;
pub mod content;
pub mod errors;
pub mod merge;
#[cfg(test)]
pub mod test_support;
