//! `aadinet config`: Configuration management commands.

use aadinet_config::{AppConfig, MemoryVisibility};

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let warnings = warnings(&config);
            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!(
                "   Gateway:   {}:{}",
                config.gateway.host, config.gateway.port
            );
            println!("   Memory:    {}", config.memory.backend);
            println!("   Delay:     {} ms", config.terminal.processing_delay_ms);
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

/// Settings that load fine but probably aren't what the visitor wants.
fn warnings(config: &AppConfig) -> Vec<&'static str> {
    let mut warnings = Vec::new();

    if config.memory.backend == "none" {
        warnings.push("Session memory disabled: follow-up questions will not use context");
    }

    if config.terminal.processing_delay_ms > 5_000 {
        warnings.push("Processing delay above 5 s makes the terminal feel unresponsive");
    }

    if config.terminal.view_switch_delay_ms >= config.terminal.chaos_duration_ms {
        warnings.push("View switch delay is not shorter than the chaos duration");
    }

    if config.terminal.memory_visibility == MemoryVisibility::IncludeCurrent {
        warnings.push("memory_visibility = include_current: follow-ups will echo the current input");
    }

    warnings
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
