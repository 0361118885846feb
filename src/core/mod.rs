pub mod extract;
pub mod fetcher;
pub mod lookup;
pub mod search;
pub mod validator;

pub use crate::domain::model::{Issn, IssnRecord};
pub use crate::domain::ports::RegistryClient;
pub use crate::utils::error::Result;
