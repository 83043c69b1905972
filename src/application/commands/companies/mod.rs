// src/application/commands/companies/mod.rs
mod register;
mod remove;
mod service;

pub use service::CompanyCommandService;
