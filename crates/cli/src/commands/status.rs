//! `aadinet status`: Show system status.

use aadinet_config::AppConfig;
use aadinet_resolver::CommandTable;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("🚀 AadiNet Status");
    println!("=================");
    println!("  Version:      {}", env!("CARGO_PKG_VERSION"));
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Commands:     {}", CommandTable::builtin().len());
    println!("  Projects:     {}", aadinet_catalog::projects().len());
    println!("  Skills:       {}", aadinet_catalog::skills().len());
    println!("  Memory:       {}", config.memory.backend);
    println!("  Visibility:   {:?}", config.terminal.memory_visibility);
    println!("  Delay:        {} ms", config.terminal.processing_delay_ms);
    println!("  View switch:  {} ms", config.terminal.view_switch_delay_ms);
    println!("  Chaos:        {} ms", config.terminal.chaos_duration_ms);
    println!("  Gateway:      {}:{}", config.gateway.host, config.gateway.port);

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file: run `aadinet onboard` first");
    }

    Ok(())
}
