//! Core value types.

mod url;

pub use url::UrlPath;
