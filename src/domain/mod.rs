//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (tenant/user IDs, session key, errors)
//! - `drafting` - Intent classification, field extraction, validation and slot filling

pub mod drafting;
pub mod foundation;
