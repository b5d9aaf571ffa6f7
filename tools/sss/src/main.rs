use anyhow::Result;
use sss::driver;

fn main() -> Result<()> {
    env_logger::init();
    driver()?;
    Ok(())
}
