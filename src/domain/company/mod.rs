pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Company, CompanyBuilder};
pub use repository::CompanyRepository;
pub use value_objects::{
    CompanyCode, CompanyName, Country, FirstCategory, Scale, SecondCategories, SecondCategory,
};
