// src/domain/mod.rs
pub mod article;
pub mod company;
pub mod enumeration;
pub mod errors;
pub mod member;
pub mod messages;
