use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};

/// Lunaria ritual calendar.
#[derive(Parser)]
#[command(
    name = "lunaria",
    version,
    about = "13-month lunar ritual calendar: conversion, moon phases and festivals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: lunaria.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its ritual date.
    Convert(ConvertArgs),
    /// Convert a ritual (year, month index, day) back to a Gregorian date.
    Inverse(InverseArgs),
    /// Show the moon phase at an instant.
    Moon(MoonArgs),
    /// Summarize a range of dates: patrons, moon phases and festivals.
    Range(RangeArgs),
    /// Print or write the ritual year template as JSON.
    Template(TemplateArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (YYYY-MM-DD).
    pub date: NaiveDate,

    /// UTC time of day for the moon phase (HH:MM[:SS]); defaults to 00:00.
    #[arg(long)]
    pub at: Option<NaiveTime>,

    /// Print the full record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inverse` subcommand.
#[derive(clap::Args)]
pub struct InverseArgs {
    /// Ritual year.
    #[arg(allow_negative_numbers = true)]
    pub year: i64,

    /// Month index (0..=12).
    pub month_index: u8,

    /// Day number (1..=28).
    pub day: u8,
}

/// Arguments for the `moon` subcommand.
#[derive(clap::Args)]
pub struct MoonArgs {
    /// UTC instant (YYYY-MM-DDTHH:MM:SS); defaults to now.
    pub datetime: Option<NaiveDateTime>,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First Gregorian date (YYYY-MM-DD).
    pub start: NaiveDate,

    /// Last Gregorian date, inclusive (YYYY-MM-DD).
    pub end: NaiveDate,

    /// Print the full summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the summary as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `template` subcommand.
#[derive(clap::Args)]
pub struct TemplateArgs {
    /// Override the base year from config.
    #[arg(long, allow_negative_numbers = true)]
    pub base_year: Option<i32>,

    /// Write the template to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
