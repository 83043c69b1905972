// src/application/queries/mod.rs
pub mod articles;
pub mod companies;
pub mod members;
