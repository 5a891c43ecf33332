//! Functional options for constructing a configured server value.
//!
//! A constructor takes one mandatory parameter (the bind address) plus an
//! ordered list of *options*: closures that each apply one configuration
//! change to the value being built. The pattern arrives in three steps:
//!
//! 1. A plain constructor. [`Server::new`] takes the address and every
//!    optional field keeps its documented default.
//! 2. Optional parameters as bare closures. [`ServerOption::custom`] wraps
//!    any `Fn(&mut Server)`, and [`Server::with_options`] applies the
//!    closures in order after the defaults are in place.
//! 3. A named option type. [`ServerOption`] makes the closure type
//!    nameable, and factories like [`option::timeout`] build options from
//!    plain values, keeping the captured parameter out of sight.
//!
//! Options apply in caller order, so the last one to touch a field wins:
//!
//! ```
//! use std::time::Duration;
//! use server_options::{option, Server};
//!
//! let server = Server::with_options(
//!     ":8080",
//!     [
//!         option::timeout(Duration::from_secs(5)),
//!         option::timeout(Duration::from_secs(10)),
//!     ],
//! );
//! assert_eq!(server.addr, ":8080");
//! assert_eq!(server.timeout, Duration::from_secs(10));
//! ```
//!
//! Two refinements ride along. [`ServerBuilder`] spells the same
//! construction as chained method calls for callers who prefer named
//! setters, and [`CheckedOption`] adds per-option validation: an option
//! rejects its own value, and [`Server::try_with_options`] stops at the
//! first rejection.

pub mod builder;
pub mod error;
pub mod option;
pub mod server;
pub mod validate;

pub use builder::ServerBuilder;
pub use error::ConfigError;
pub use option::ServerOption;
pub use server::Server;
pub use validate::CheckedOption;
