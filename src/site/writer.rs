use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::BriefError;

/// A rendered document and the path it belongs at, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub path: String,
    pub html: String,
}

impl RenderedPage {
    pub fn new(path: impl Into<String>, html: String) -> Self {
        Self {
            path: path.into(),
            html,
        }
    }
}

/// Writes pages below an output root.
///
/// Parent directories are created on demand and existing files are overwritten in place.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    root: PathBuf,
}

impl SiteWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `html` to `relative` under the root and return the full path.
    ///
    /// # Errors
    /// Returns [`BriefError::Io`] if the directory cannot be created or the file cannot be written.
    pub fn write(&self, relative: &str, html: &str) -> Result<PathBuf, BriefError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| BriefError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, html).map_err(|source| BriefError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = html.len(), "page written");
        Ok(path)
    }

    /// Convenience for [`SiteWriter::write`] on a [`RenderedPage`].
    ///
    /// # Errors
    /// See [`SiteWriter::write`].
    pub fn write_page(&self, page: &RenderedPage) -> Result<PathBuf, BriefError> {
        self.write(&page.path, &page.html)
    }
}
