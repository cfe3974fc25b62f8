//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use cardscan_core::models::config::CardscanConfig;

use super::Context;

/// Keys whose values are masked by `config show` and `config get`.
const SECRET_KEYS: [&str; 1] = ["api_key"];

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "analysis.max_polls")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, ctx: &Context) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init(init_args) => init_config(init_args, ctx),
        ConfigCommand::Get { key } => get_config(ctx, &key),
        ConfigCommand::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> anyhow::Result<()> {
    if !ctx.config_path().exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let mut json = serde_json::to_value(ctx.config()?)?;
    mask_secrets(&mut json);
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}

fn init_config(args: InitArgs, ctx: &Context) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(|| ctx.config_path());

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = CardscanConfig::default();
    config.save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(ctx: &Context, key: &str) -> anyhow::Result<()> {
    let mut json = serde_json::to_value(ctx.config()?)?;
    mask_secrets(&mut json);

    let mut current = &json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    println!("{}", serde_json::to_string_pretty(current)?);

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> anyhow::Result<()> {
    let config_path = ctx.config_path();
    let config = if config_path.exists() {
        CardscanConfig::from_file(&config_path)?
    } else {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        CardscanConfig::default()
    };

    let parsed_value: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let mut json = serde_json::to_value(&config)?;
    set_key(&mut json, key, parsed_value.clone())?;

    let config: CardscanConfig = serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
    config.save(&config_path)?;

    let shown = if is_secret(key) {
        "\"***\"".to_string()
    } else {
        serde_json::to_string(&parsed_value)?
    };
    println!("{} Set {} = {}", style("✓").green(), key, shown);

    Ok(())
}

fn show_path(ctx: &Context) -> anyhow::Result<()> {
    let config_path = ctx.config_path();

    println!("Configuration file: {}", config_path.display());
    println!("Data directory:     {}", ctx.data_dir().display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'cardscan config init' to create a configuration file.");
    }

    Ok(())
}

/// Set a dotted key inside a JSON object tree. Only existing sections can be
/// navigated; the last segment is inserted or replaced.
fn set_key(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = json;

    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path"))?;
            if !obj.contains_key(*part) {
                anyhow::bail!("Configuration key not found: {}", key);
            }
            obj.insert((*part).to_string(), value);
            return Ok(());
        }
        current = current
            .get_mut(*part)
            .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
    }

    Ok(())
}

fn is_secret(key: &str) -> bool {
    key.rsplit('.')
        .next()
        .is_some_and(|last| SECRET_KEYS.contains(&last))
}

fn mask_secrets(json: &mut Value) {
    if let Value::Object(map) = json {
        for (k, v) in map.iter_mut() {
            if SECRET_KEYS.contains(&k.as_str()) {
                if v.as_str().is_some_and(|s| !s.is_empty()) {
                    *v = Value::String("***".to_string());
                }
            } else {
                mask_secrets(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_key_nested() {
        let mut value = json!({ "analysis": { "max_polls": 10 } });
        set_key(&mut value, "analysis.max_polls", json!(5)).unwrap();
        assert_eq!(value, json!({ "analysis": { "max_polls": 5 } }));
    }

    #[test]
    fn test_set_key_unknown() {
        let mut value = json!({ "analysis": { "max_polls": 10 } });
        assert!(set_key(&mut value, "analysis.nope", json!(1)).is_err());
        assert!(set_key(&mut value, "missing.max_polls", json!(1)).is_err());
    }

    #[test]
    fn test_mask_secrets() {
        let mut value = json!({ "analysis": { "api_key": "secret", "endpoint": "https://x" } });
        mask_secrets(&mut value);
        assert_eq!(
            value,
            json!({ "analysis": { "api_key": "***", "endpoint": "https://x" } })
        );

        let mut unset = json!({ "analysis": { "api_key": "" } });
        mask_secrets(&mut unset);
        assert_eq!(unset, json!({ "analysis": { "api_key": "" } }));
    }

    #[test]
    fn test_is_secret() {
        assert!(is_secret("analysis.api_key"));
        assert!(!is_secret("analysis.endpoint"));
    }
}
