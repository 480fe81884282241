//! Domain layer - core types and policies.
//!
//! Contains the value objects and pure validation rules the application
//! layer orchestrates. Nothing in here performs I/O.

pub mod conversation;
pub mod foundation;
pub mod review;
