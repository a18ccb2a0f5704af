//! Configuration commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let app = &ctx.config.app;
    ctx.output.info("");
    ctx.output.kv("api_base_url", &app.api_base_url);
    ctx.output.kv("environment", app.environment.as_str());
    ctx.output.kv("products_url", &app.products_url());
    ctx.output.kv("categories_url", &app.categories_url());

    ctx.output.info("");
    ctx.output.info("[settings]");
    ctx.output
        .kv("default_page_size", &app.settings.default_page_size.to_string());
    ctx.output
        .kv("max_page_size", &app.settings.max_page_size.to_string());
    ctx.output
        .kv("debounce_delay_ms", &app.settings.debounce_delay_ms.to_string());
    ctx.output
        .kv("low_stock_threshold", &app.settings.low_stock_threshold.to_string());

    ctx.output.info("");
    ctx.output.info("[auth]");
    ctx.output
        .kv("authenticated", &ctx.config.auth.authenticated.to_string());
    ctx.output.kv("role", &ctx.config.auth.role);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("inventory.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
