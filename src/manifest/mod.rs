//! Dependency manifest parsing and pinned-version lookup.
//!
//! The manifest is a `go.mod` file read in lax mode: only `module`, `go`
//! and `require` directives are interpreted.
//!
//! # Example
//!
//! ```
//! use toolpin::manifest::parse;
//!
//! let manifest = parse("go.mod", b"require example.com/tool v1.2.3\n").unwrap();
//! assert_eq!(manifest.version_of("example.com/tool"), Some("v1.2.3"));
//! assert_eq!(manifest.version_of("example.com/missing"), None);
//! ```

pub mod lexer;
pub mod lookup;
pub mod parser;
pub mod version;

pub use lookup::{module_version, module_version_in, DEFAULT_MANIFEST};
pub use parser::{parse, Manifest, Requirement};
pub use version::canonical_module_version;
