// License: MIT

//! A small, permissive section-based configuration format.
//!
//! A document is an ordered list of `[section]` headers, each holding
//! `name = value` assignments. Values are integers, floats, quoted strings,
//! booleans, or nestable `( ... )` lists. `#` starts a comment that runs to
//! the end of the line.
//!
//! ```text
//! [server]
//! host = "localhost"
//! port = 8080
//! debug = true
//! tags = ("web" "internal" (1 2))
//! ```
//!
//! Parsing is best-effort and never fails: malformed input yields a partial
//! or default-valued document instead of an error.
//!
//! ```
//! use plain_cfg::{parse, write_document, Value};
//!
//! let doc = parse("[server]\nport = 8080\n");
//! let port = doc.section("server")
//!     .and_then(|s| s.variable("port"))
//!     .and_then(|v| v.value.as_int());
//! assert_eq!(port, Some(8080));
//! assert_eq!(write_document(&doc), "[server]\nport = 8080\n\n");
//! # let _ = Value::Int(0);
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod utils;
pub mod writer;

pub use ast::{Document, List, Section, Value, Variable};
pub use config::PlainConfig;
pub use error::CfgError;
pub use parser::parse;
pub use writer::write_document;
