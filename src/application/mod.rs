pub mod commands;
pub mod dto;
pub mod error;
pub mod messages;
pub mod ports;
pub mod queries;
pub mod services;
pub mod validation;

pub use error::ApplicationResult;
