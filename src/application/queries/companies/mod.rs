mod find;
mod service;

pub use service::CompanyQueryService;
