pub use super::academic::Entity as Academic;
pub use super::petition::Entity as Petition;
pub use super::request::Entity as Request;
pub use super::subject::Entity as Subject;
