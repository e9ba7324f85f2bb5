//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.
//!
//! This layer owns every side effect the engine deliberately avoids:
//! prompts, spinners, styled output, and exit codes.

pub mod catalog;
pub mod generate;
pub mod output;
pub mod run;

pub use catalog::{execute_catalog, CatalogOptions};
pub use generate::{execute_generate, GenerateOptions};
pub use output::{print_artifact, print_upgrade_prompt};
pub use run::{execute_run, RunOptions};
