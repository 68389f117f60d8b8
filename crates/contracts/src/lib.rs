//! Shared domain types for the registration app: user entries, validation,
//! form state and the key-value record store.

pub mod domain;
pub mod enums;
pub mod shared;
