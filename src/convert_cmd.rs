//! Convert and inverse commands.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use tracing::{info, info_span};

use lunaria_converter::RitualDate;

use crate::cli::{ConvertArgs, InverseArgs};
use crate::config::LunariaConfig;
use crate::convert;

/// Convert one Gregorian date and print the ritual record.
pub fn run_convert(args: ConvertArgs, config: &LunariaConfig) -> Result<()> {
    let _cmd = info_span!("convert", date = %args.date).entered();
    let converter = convert::build_converter(config)?;

    let instant = args.date.and_time(args.at.unwrap_or(NaiveTime::MIN));
    let rd = converter.convert_at(instant);
    info!(
        ritual_year = rd.ritual_year,
        month_index = rd.month_index,
        day_number = rd.day_number,
        "converted"
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rd).context("failed to encode ritual date")?
        );
    } else {
        print!("{}", render(&rd));
    }
    Ok(())
}

/// Convert a ritual (year, month index, day) back and print the Gregorian date.
pub fn run_inverse(args: InverseArgs, config: &LunariaConfig) -> Result<()> {
    let _cmd = info_span!("inverse").entered();
    let converter = convert::build_converter(config)?;
    let date = converter
        .convert_inverse(args.year, args.month_index, args.day)
        .with_context(|| {
            format!(
                "cannot convert ritual date ({}, {}, {})",
                args.year, args.month_index, args.day
            )
        })?;
    println!("{date}");
    Ok(())
}

/// Renders a ritual date as a human-readable block.
pub fn render(rd: &RitualDate) -> String {
    let mut out = format!(
        "{}  ->  ritual year {}, month {} ({}), day {} ({})\n",
        rd.gregorian_date,
        rd.ritual_year,
        rd.month_index,
        rd.month_name,
        rd.day_number,
        rd.day_name
    );
    out.push_str(&format!("Patron:     {} | {} | {}\n", rd.patron, rd.theme, rd.color));
    out.push_str(&format!("Moon:       {}\n", rd.moon_phase));
    out.push_str(&format!("Activity:   {}\n", rd.activity));
    out.push_str(&format!("Offerings:  {}\n", rd.offerings.join(", ")));
    if !rd.taboos.is_empty() {
        out.push_str(&format!("Taboos:     {}\n", rd.taboos.join(", ")));
    }
    out.push_str(&format!("Prayer:     {}\n", rd.prayer));
    out
}
