//! Show or initialize the on-disk configuration.

use nearguard_common::config::AppConfig;

pub fn run(init: bool) -> anyhow::Result<()> {
    if init {
        let path = AppConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        println!();
    }

    let config = AppConfig::load();
    println!("Thresholds:");
    println!("  Reset acceleration: {} g", config.thresholds.reset_accel);
    println!("  Near warning: {} cm", config.thresholds.warn_near_cm);
    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  JSON: {}", config.logging.json);

    Ok(())
}
