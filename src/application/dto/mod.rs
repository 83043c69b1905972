pub mod articles;
pub mod companies;
pub mod members;

pub use articles::{ArticleBatchDto, CompanyArticleDto, CompanyArticleView};
pub use companies::{CompanyDto, CompanyView};
pub use members::{MemberDto, MemberView};
