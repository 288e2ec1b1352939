//! Service layer providing the resource store on top of `models`.
//! - Owns record identity assignment and storage.
//! - Separates store semantics from the HTTP layer.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod resource;
pub mod runtime;
pub mod storage;
