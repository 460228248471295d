//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SectionKey;

/// Sitewright website builder console
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitewright.toml)
    #[arg(short = 'C', long, default_value = "sitewright.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from the starter template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Show the resolved render order and per-section state
    #[command(visible_alias = "s")]
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Merge a JSON patch file into the site configuration and save
    #[command(visible_alias = "p")]
    Patch {
        /// Patch file (partial site configuration as JSON)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Toggle or reposition a section
    Section {
        #[command(subcommand)]
        action: SectionAction,
    },

    /// AI-editor plan session: generate, mutate and apply plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show integration availability (ga4, openai)
    Status,

    /// Extract theme color suggestions from a logo image
    Palette {
        /// Image file (png, jpeg or webp)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        image: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Section command actions.
#[derive(Subcommand, Debug, Clone)]
pub enum SectionAction {
    /// Enable a section
    Enable { key: SectionKey },

    /// Disable a section
    Disable { key: SectionKey },

    /// Set a section's position hint
    Move { key: SectionKey, position: u32 },
}

/// Plan command actions.
#[derive(Subcommand, Debug, Clone)]
pub enum PlanAction {
    /// Request a new plan from a natural-language prompt
    Generate {
        /// What the page should look like
        prompt: String,
    },

    /// Print the current plan
    Show,

    /// Move a plan section from one index to another
    Move { from: usize, to: usize },

    /// Add a component to the plan
    Add {
        /// Component key (e.g. Hero, FeatureGrid)
        component: String,

        /// Insertion index (clamped to the plan length; appends when absent)
        #[arg(long)]
        at: Option<usize>,

        /// Initial props as inline JSON (fetched from the components map
        /// when absent)
        #[arg(long)]
        props: Option<String>,
    },

    /// Shallow-merge JSON props into a plan section
    SetProps {
        /// Section index
        index: usize,

        /// Props patch as inline JSON
        props: String,
    },

    /// Validate the plan (dry-run) and submit it when accepted
    Apply,
}
