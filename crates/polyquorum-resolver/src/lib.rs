//! Polyquorum Resolver
//!
//! Turns a raw share document into the resolved `(x, y)` points the core
//! engine consumes. Share values arrive encoded as small arithmetic
//! expressions (`"multiply(10, 20, 5)"`); this crate evaluates them and
//! loads the JSON document that carries them.
//!
//! Malformed records are a per-record concern: resolution logs a warning
//! and skips the record rather than failing the whole document. The core
//! engine then decides whether enough shares survived.
//!
//! # Example
//!
//! ```
//! use polyquorum_core::reconstruct_secret;
//! use polyquorum_resolver::ShareDocument;
//!
//! let doc = ShareDocument::from_json_str(
//!     r#"{
//!         "n": 3,
//!         "k": 2,
//!         "shares": {
//!             "10": "sum(20, 5)",
//!             "20": "sum(40, 5)",
//!             "30": "multiply(60, 2)"
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! let shares = doc.resolve();
//! let secret = reconstruct_secret(&shares, doc.k).unwrap();
//! assert_eq!(secret, 5.into());
//! ```

pub mod document;
pub mod expr;

// Re-exports
pub use document::{DocumentError, ShareDocument};
pub use expr::{resolve_expression, Operation, ResolveError};
