//! `aadinet projects`: Print the project archive.

use aadinet_catalog::CategoryFilter;

pub async fn run(category: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match category.as_deref() {
        Some(raw) => raw.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };

    println!("{}", crate::render::projects(aadinet_catalog::by_category(filter)));
    Ok(())
}
