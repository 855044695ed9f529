//! # Selector Core - ABI Error Selector Resolution
//!
//! This crate maps the custom errors declared in a contract ABI to their
//! 4-byte selectors and supports prefix lookup of a selector seen on-chain.
//!
//! ## Modules
//!
//! - [`abi`] - ABI document model and loaders (JSON, Go bindings)
//! - [`config`] - Resolver and logging configuration
//! - [`error`] - Typed error handling with thiserror
//! - [`report`] - Human-readable output sink
//! - [`resolver`] - Selector computation, listing and search
//! - [`runner`] - Single invocation pipeline
//! - [`selector`] - Signatures, selectors and the Keccak-256 hasher
//! - [`traits`] - Core trait definitions

pub mod abi;
pub mod config;
pub mod error;
pub mod report;
pub mod resolver;
pub mod runner;
pub mod selector;
pub mod traits;
pub(crate) mod utils;

pub use abi::{load_abi, AbiDocument, AbiEntry, AbiError, AbiFormat, Param};
pub use config::{LogConfig, ResolverConfig};
pub use error::{CoreError, InputError, ReportError, UsageError};
pub use report::LineReporter;
pub use resolver::{ResolvedError, SearchOutcome, SelectorResolver};
pub use runner::{RunOutcome, SelectorRunner};
pub use selector::{ErrorSignature, Keccak256, Selector, SelectorPrefix};
pub use traits::{Reporter, SelectorHasher};

pub use utils::{setup_logger, WorkerGuard};
