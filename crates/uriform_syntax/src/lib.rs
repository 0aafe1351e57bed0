//! # uriform_syntax
//!
//! Diagnostic value for malformed URIs.
//!
//! This crate provides:
//! - [`UriSyntaxError`], the immutable error value a URI parser produces
//!   when it rejects malformed input
//! - [`UriSyntaxErrorBuilder`] for assembling one field by field
//! - [`ArgumentError`], raised when construction arguments are invalid
//!
//! ## Example
//!
//! ```rust
//! use uriform_syntax::UriSyntaxError;
//!
//! let err = UriSyntaxError::with_index("http://bad uri", "illegal character", 9)?;
//! assert_eq!(err.to_string(), "http://bad uri:illegal character");
//! assert_eq!(err.index(), 9);
//! # Ok::<(), uriform_syntax::ArgumentError>(())
//! ```

mod builder;
mod error;

pub use builder::UriSyntaxErrorBuilder;
pub use error::{ArgumentError, INDEX_UNKNOWN, UriSyntaxError};
