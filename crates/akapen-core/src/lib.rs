pub mod dictionary;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod validator;

pub use dictionary::{Dictionaries, DictionaryLoader};
pub use error::{DictionaryError, LoadError};
pub use parser::{KeyValueMap, LineParser, WordList};
pub use resolver::{BundledResources, DefaultResolver, ResourceResolver};
pub use validator::{Finding, Validator, ValidatorAttributes};
