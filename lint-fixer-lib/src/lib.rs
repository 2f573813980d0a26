//! The root module for the lint_fixer_lib package when compiled as a library.
//! This module mainly holds the declarations of this package's other modules.
//!
//! The binary executable lives in the `lint-fixer-cli` crate and simply forwards its
//! arguments to [`run::run_main()`].

// project specific modules/crates
pub mod cli;
pub mod common_fs;
pub mod demo;
pub mod error;
pub mod logger;
pub mod notify;
pub mod run;
pub mod tools;
