// src/presentation/http/mod.rs
pub mod constants;
pub mod controllers;
pub mod error;
pub mod redirect;
pub mod routes;
pub mod state;
pub mod view;
