//! CLI command implementations.

pub mod config;
pub mod resolve;
pub mod routes;

use clap::{Args, Subcommand};

/// Arguments for the routes command.
#[derive(Args)]
pub struct RoutesArgs {
    /// Only list routes behind the guard.
    #[arg(long)]
    pub guarded: bool,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Path to resolve, e.g. `/products/42/edit`. Query and fragment are ignored.
    pub path: String,

    /// Resolve as a visitor who is not signed in.
    #[arg(long)]
    pub anonymous: bool,

    /// Role of the visitor (overrides the config).
    #[arg(long)]
    pub role: Option<String>,

    /// Role the route demands, as a role-restricted route would.
    #[arg(long)]
    pub require_role: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Create an inventory.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
