//! Pure conversion functions: TOML config structs -> crate API config types.

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use crate::config::*;

use lunaria_calendar::{RitualYearTemplate, TemplateCache};
use lunaria_converter::{ConverterConfig, DateConverter, DayCount};
use lunaria_io::TemplateStore;
use lunaria_moon::LunarModel;
use lunaria_range::RangeConfig;

/// Parses a day-count rule name into the corresponding enum variant.
pub fn parse_day_count(s: &str) -> Result<DayCount> {
    match s.to_lowercase().as_str() {
        "ordinal" => Ok(DayCount::Ordinal),
        "legacy" => Ok(DayCount::Legacy),
        other => bail!("unknown day_count: {other:?} (expected \"ordinal\" or \"legacy\")"),
    }
}

/// Builds a [`LunarModel`] from the TOML moon configuration.
pub fn build_lunar_model(moon: &MoonToml) -> Result<LunarModel> {
    let mut model = LunarModel::default().with_synodic_month(moon.synodic_month);
    if let Some(reference) = moon.reference_new_moon {
        model = model.with_reference_new_moon(reference);
    }
    model.validate()?;
    Ok(model)
}

/// Builds a [`ConverterConfig`] from the TOML calendar and moon configuration.
pub fn build_converter_config(calendar: &CalendarToml, moon: &MoonToml) -> Result<ConverterConfig> {
    let mut cfg = ConverterConfig::for_base_year(calendar.base_year)?
        .with_day_count(parse_day_count(&calendar.day_count)?)
        .with_lunar_model(build_lunar_model(moon)?);
    if let Some(epoch) = calendar.epoch {
        cfg = cfg.with_epoch(epoch);
    }
    Ok(cfg)
}

/// Builds a [`RangeConfig`] from the TOML range configuration.
pub fn build_range_config(range: &RangeToml) -> Result<RangeConfig> {
    let cfg = RangeConfig::new(range.max_days);
    cfg.validate()?;
    Ok(cfg)
}

/// Returns the template for `base_year`, from the on-disk store when
/// `[io].template_dir` is set and from memory otherwise.
pub fn load_template(io: &IoToml, base_year: i32) -> Result<Arc<RitualYearTemplate>> {
    match &io.template_dir {
        Some(dir) => TemplateStore::new(dir)
            .load_or_generate(base_year)
            .with_context(|| format!("failed to load template from {}", dir.display())),
        None => Ok(TemplateCache::standard().get(base_year)?),
    }
}

/// Builds a [`DateConverter`] from the full configuration.
pub fn build_converter(config: &LunariaConfig) -> Result<DateConverter> {
    let converter_cfg = build_converter_config(&config.calendar, &config.moon)?;
    let template = load_template(&config.io, config.calendar.base_year)?;
    Ok(DateConverter::new(template, converter_cfg)?)
}
