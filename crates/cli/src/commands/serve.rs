//! `aadinet serve`: Start the HTTP API server.

use aadinet_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🚀 AadiNet Gateway");
    println!("   Listening:   {}:{}", config.gateway.host, config.gateway.port);
    println!("   Rate limit:  {} req/min", config.gateway.rate_limit_per_minute);
    println!("   Sessions:    up to {}", config.gateway.max_sessions);

    aadinet_gateway::start(config).await?;

    Ok(())
}
