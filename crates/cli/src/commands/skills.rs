//! `aadinet skills`: Print the skill diagnostics.

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        crate::render::skills(aadinet_catalog::skills(), &aadinet_catalog::summary())
    );
    Ok(())
}
