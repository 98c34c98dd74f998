//! The migrate command: fold legacy per-directory logs into the store

use dotlog_core::config::Config;
use dotlog_core::error::Result;
use dotlog_core::legacy;

pub fn handle(config: &Config) -> Result<()> {
    let count = legacy::migrate(config)?;
    println!("Store rebuilt with {} notes", count);
    Ok(())
}
