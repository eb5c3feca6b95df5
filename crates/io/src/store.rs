//! Directory-backed template store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lunaria_calendar::{RitualYearTemplate, TemplateCache};
use tracing::{debug, info};

use crate::error::IoError;
use crate::json::{read_template_json, write_template_json};

/// Persists generated templates as `template-<base_year>.json` files in one
/// directory, fronted by an in-memory [`TemplateCache`].
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    cache: TemplateCache,
}

impl TemplateStore {
    /// Creates a store over `dir` backed by the standard patron table.
    ///
    /// The directory is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: TemplateCache::standard(),
        }
    }

    /// Replaces the in-memory cache, e.g. to use a custom patron table.
    pub fn with_cache(mut self, cache: TemplateCache) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the in-memory cache.
    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Returns the file path for `base_year`.
    pub fn path_for(&self, base_year: i32) -> PathBuf {
        self.dir.join(format!("template-{base_year}.json"))
    }

    /// Writes `template` to its file, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] or [`IoError::Json`] on write failure.
    pub fn save(&self, template: &RitualYearTemplate) -> Result<PathBuf, IoError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| IoError::io(&self.dir, e))?;
        let path = self.path_for(template.base_year());
        write_template_json(&path, template)?;
        Ok(path)
    }

    /// Loads the template for `base_year` from disk into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if no file exists and
    /// [`IoError::InvalidTemplate`] if the file is malformed or was written
    /// for a different base year.
    pub fn load(&self, base_year: i32) -> Result<Arc<RitualYearTemplate>, IoError> {
        let path = self.path_for(base_year);
        let template = read_template_json(&path)?;
        if template.base_year() != base_year {
            return Err(IoError::InvalidTemplate {
                reason: format!(
                    "{} holds base year {}, expected {base_year}",
                    path.display(),
                    template.base_year()
                ),
            });
        }
        Ok(self.cache.insert(template)?)
    }

    /// Returns the template for `base_year`, reading it from disk if a file
    /// exists and otherwise generating and saving it.
    ///
    /// # Errors
    ///
    /// Propagates load, generation and save failures.
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load_or_generate(&self, base_year: i32) -> Result<Arc<RitualYearTemplate>, IoError> {
        if self.path_for(base_year).exists() {
            debug!("loading stored template");
            return self.load(base_year);
        }
        let template = self.cache.get(base_year)?;
        let path = self.save(&template)?;
        info!(path = %path.display(), "generated and stored template");
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_naming() {
        let store = TemplateStore::new("/data/templates");
        assert_eq!(
            store.path_for(2025),
            PathBuf::from("/data/templates/template-2025.json")
        );
        assert_eq!(
            store.path_for(-40),
            PathBuf::from("/data/templates/template--40.json")
        );
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        assert!(matches!(
            store.load(2025).unwrap_err(),
            IoError::FileNotFound { .. }
        ));
    }
}
