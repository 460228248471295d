//! Sitewright - a website builder console for section-based sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod palette;
mod plan;
mod remote;
mod secrets;
mod store;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AppConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let app = AppConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&app, name.is_some(), *dry),
        Commands::Show { json } => cli::show::show_site(&app, *json),
        Commands::Patch { file } => cli::patch::patch_site(&app, file),
        Commands::Section { action } => cli::section::run_section(&app, action),
        Commands::Plan { action } => cli::plan::run_plan(&app, action),
        Commands::Status => cli::status::show_status(&app),
        Commands::Palette { image, json } => cli::palette::extract(image, *json),
    }
}
