//! Template command: emit the ritual year template as JSON.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunaria_io::write_template_json;

use crate::cli::TemplateArgs;
use crate::config::LunariaConfig;
use crate::convert;

/// Write the template for the requested base year to a file or stdout.
pub fn run(args: TemplateArgs, config: &LunariaConfig) -> Result<()> {
    let base_year = args.base_year.unwrap_or(config.calendar.base_year);
    let _cmd = info_span!("template", base_year).entered();
    let template = convert::load_template(&config.io, base_year)?;

    match args.output {
        Some(ref path) => {
            write_template_json(path, &template)
                .with_context(|| format!("failed to write template: {}", path.display()))?;
            info!(path = %path.display(), "template written");
        }
        None => println!(
            "{}",
            serde_json::to_string_pretty(&*template).context("failed to encode template")?
        ),
    }
    Ok(())
}
