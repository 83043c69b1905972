pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Member, NewMember};
pub use repository::MemberRepository;
pub use value_objects::{MemberId, MemberIdentifier, PasswordHash, PhoneNumber};
