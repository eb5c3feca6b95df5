//! Read-mostly in-memory cache of generated templates, keyed by base year.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::CalendarError;
use crate::generate::generate_template;
use crate::patron::{PatronSpec, standard_patrons};
use crate::template::RitualYearTemplate;

/// Thread-safe cache of ritual year templates.
///
/// Generation is deterministic, so two threads racing on the same base year
/// produce identical templates and whichever is inserted first wins.
#[derive(Debug)]
pub struct TemplateCache {
    patrons: Vec<PatronSpec>,
    templates: RwLock<BTreeMap<i32, Arc<RitualYearTemplate>>>,
}

impl TemplateCache {
    /// Creates an empty cache that generates templates from `patrons`.
    pub fn new(patrons: Vec<PatronSpec>) -> Self {
        Self {
            patrons,
            templates: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates an empty cache backed by the standard patron table.
    pub fn standard() -> Self {
        Self::new(standard_patrons())
    }

    /// Returns the patron table used for generation.
    pub fn patrons(&self) -> &[PatronSpec] {
        &self.patrons
    }

    /// Returns the template for `base_year`, generating it on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarError`] from [`generate_template`] when the patron
    /// table is malformed.
    pub fn get(&self, base_year: i32) -> Result<Arc<RitualYearTemplate>, CalendarError> {
        if let Some(t) = self
            .templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&base_year)
        {
            debug!(base_year, "template cache hit");
            return Ok(Arc::clone(t));
        }

        let generated = Arc::new(generate_template(base_year, &self.patrons)?);
        let mut guard = self
            .templates
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = guard.entry(base_year).or_insert(generated);
        Ok(Arc::clone(entry))
    }

    /// Inserts an externally loaded template, replacing any cached entry.
    ///
    /// # Errors
    ///
    /// Returns the [`RitualYearTemplate::validate`] error if the template is
    /// malformed; the cache is left unchanged.
    pub fn insert(
        &self,
        template: RitualYearTemplate,
    ) -> Result<Arc<RitualYearTemplate>, CalendarError> {
        template.validate()?;
        let template = Arc::new(template);
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(template.base_year(), Arc::clone(&template));
        Ok(template)
    }

    /// Returns the number of cached templates.
    pub fn len(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no template has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let cache = TemplateCache::standard();
        assert!(cache.is_empty());
        assert_eq!(cache.patrons().len(), 13);
    }

    #[test]
    fn get_generates_once() {
        let cache = TemplateCache::standard();
        let a = cache.get(2025).unwrap();
        let b = cache.get(2025).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn separate_years_are_separate_entries() {
        let cache = TemplateCache::standard();
        let a = cache.get(2025).unwrap();
        let b = cache.get(2026).unwrap();
        assert_eq!(a.base_year(), 2025);
        assert_eq!(b.base_year(), 2026);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn malformed_patrons_propagate() {
        let cache = TemplateCache::new(Vec::new());
        assert_eq!(
            cache.get(2025).unwrap_err(),
            CalendarError::MonthCount { got: 0 }
        );
        assert!(cache.is_empty());
    }
}
