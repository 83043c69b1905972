// src/application/commands/members/mod.rs
mod join;
mod service;

pub use service::MemberCommandService;
