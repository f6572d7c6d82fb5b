pub mod doubled_joshi;
pub mod loader;

pub use doubled_joshi::DoubledJoshiValidator;
pub use loader::{DOUBLED_JOSHI_SKIP_LIST, JOSHI_KINDS, bundled_resources};

/// ISO 639-1 code handled by this crate
pub const LANGUAGE_CODE: &str = "ja";
