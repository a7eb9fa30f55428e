//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! store, rather than read from the environment during operations. The
//! binaries own resolving the data directory (CLI argument with a
//! default); the core only derives backing-file paths from it.

use std::path::{Path, PathBuf};

use roster_types::Category;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The backing resource for one dataset category
    /// (`<data_dir>/samsa.csv` and siblings).
    pub fn resource_path(&self, category: Category) -> PathBuf {
        self.data_dir.join(format!("{}.csv", category.file_stem()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths_follow_category_stems() {
        let cfg = CoreConfig::new(PathBuf::from("/tmp/rosters"));
        assert_eq!(
            cfg.resource_path(Category::Samsa),
            PathBuf::from("/tmp/rosters/samsa.csv")
        );
        assert_eq!(
            cfg.resource_path(Category::Korttid),
            PathBuf::from("/tmp/rosters/korttid.csv")
        );
    }
}
