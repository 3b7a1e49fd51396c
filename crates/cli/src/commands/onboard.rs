//! `aadinet onboard`: First-time setup.

use aadinet_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    println!("🚀 AadiNet: First-Time Setup");
    println!("=============================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Tune delays or the gateway port in {}", config_path.display());
        println!("   2. Run: aadinet terminal");
        println!("   3. Type 'help'\n");
    }

    println!("🎉 Setup complete! Run `aadinet terminal` to start exploring.\n");

    Ok(())
}
