pub mod academic;
pub mod petition;
pub mod prelude;
pub mod request;
pub mod subject;
