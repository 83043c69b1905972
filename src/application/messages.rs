// src/application/messages.rs
//! Business-rule message keys, shared with the repositories through the
//! domain layer.
pub use crate::domain::messages::*;
