use anyhow::Result;
use checkout_users_csv::{FixtureConfig, generate, setup_logging};

fn main() -> Result<()> {
    setup_logging()?;

    let summary = generate(&FixtureConfig::default())?;
    println!("{summary}");

    Ok(())
}
