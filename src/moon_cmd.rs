//! Moon command: phase, cycle position and age at an instant.

use anyhow::Result;
use chrono::Utc;
use tracing::info_span;

use crate::cli::MoonArgs;
use crate::config::LunariaConfig;
use crate::convert;

/// Print the moon phase at the given instant, or now.
pub fn run(args: MoonArgs, config: &LunariaConfig) -> Result<()> {
    let _cmd = info_span!("moon").entered();
    let model = convert::build_lunar_model(&config.moon)?;
    let instant = args.datetime.unwrap_or_else(|| Utc::now().naive_utc());
    let reading = model.reading(instant);

    println!("{instant} UTC");
    println!("Phase:      {}", reading.phase);
    println!("Position:   {:.3}", reading.cycle_position);
    println!("Age:        {:.2} days", reading.age_days);
    Ok(())
}
