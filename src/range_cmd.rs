//! Range command: summarize a bounded interval of dates.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunaria_io::write_summary_json;
use lunaria_range::{RangeSummary, summarize_range};

use crate::cli::RangeArgs;
use crate::config::LunariaConfig;
use crate::convert;

/// Summarize `[start, end]` and print the result.
pub fn run(args: RangeArgs, config: &LunariaConfig) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let converter = convert::build_converter(config)?;
    let range_cfg = convert::build_range_config(&config.range)?;

    let summary = summarize_range(&converter, args.start, args.end, &range_cfg)
        .with_context(|| format!("cannot summarize {} .. {}", args.start, args.end))?;
    info!(
        n_days = summary.len(),
        n_festivals = summary.festivals.len(),
        "range summarized"
    );

    if let Some(ref path) = args.output {
        write_summary_json(path, &summary)
            .with_context(|| format!("failed to write summary: {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to encode summary")?
        );
    } else {
        print!("{}", render(&summary));
    }
    Ok(())
}

/// Renders a summary as a human-readable block.
pub fn render(summary: &RangeSummary) -> String {
    let mut out = format!(
        "{} .. {}  ({} days)\n",
        summary.start,
        summary.end,
        summary.len()
    );

    if let Some(ref patron) = summary.dominant_patron {
        out.push_str(&format!("Dominant patron:  {patron}\n"));
    }
    if let Some(phase) = summary.dominant_moon_phase {
        out.push_str(&format!("Dominant moon:    {phase}\n"));
    }

    out.push_str("Patrons:\n");
    for (patron, n) in &summary.patron_counts {
        out.push_str(&format!("  {patron:<12} {n}\n"));
    }
    out.push_str("Moon phases:\n");
    for (phase, n) in &summary.moon_phase_counts {
        out.push_str(&format!("  {:<16} {n}\n", phase.name()));
    }

    if summary.festivals.is_empty() {
        out.push_str("Festivals: none\n");
    } else {
        out.push_str("Festivals:\n");
        for f in &summary.festivals {
            out.push_str(&format!("  {}  {} ({})\n", f.date, f.name, f.patron));
        }
    }
    out
}
