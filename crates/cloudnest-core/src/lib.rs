//! CloudNest - Core Library
//!
//! View-side computations for the CloudNest client: the file browser's
//! filter/sort engine, share-link expiry math, display formatting and
//! session token inspection. Everything here is pure and synchronous,
//! the HTTP surface lives in the CLI crate.

pub mod error;
pub mod expiry;
pub mod filter;
pub mod format;
pub mod session;

pub use error::*;
pub use expiry::*;
pub use filter::*;
pub use format::*;
pub use session::*;
