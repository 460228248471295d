//! Command-line interface module.

mod args;
pub mod common;
pub mod init;
pub mod palette;
pub mod patch;
pub mod plan;
pub mod section;
pub mod show;
pub mod status;

pub use args::{Cli, Commands, PlanAction, SectionAction};
