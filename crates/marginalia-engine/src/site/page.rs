use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::io::{self, IoError};

use super::{front_matter, slug::slugify};

/// A source page after front matter has been split off.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub slug: String,
    /// Raw date string from front matter, not yet validated.
    pub date: Option<String>,
    /// Page body with front matter removed.
    pub content: String,
    pub source: PathBuf,
}

impl Page {
    /// Builds a page from its source text.
    ///
    /// Pages without a title use their file stem; pages whose title has no
    /// ASCII alphanumerics get a slug from the file stem instead.
    pub fn from_source(path: &Path, source: &str) -> Self {
        let fm = front_matter::split(source);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        let title = fm.title.map(str::to_string).unwrap_or_else(|| stem.clone());
        let mut slug = slugify(&title);
        if slug.is_empty() {
            slug = slugify(&stem);
        }
        if slug.is_empty() {
            slug = "untitled".to_string();
        }

        Self {
            title,
            slug,
            date: fm.date.map(str::to_string),
            content: fm.body.to_string(),
            source: path.to_path_buf(),
        }
    }

    /// Reads and parses the page at `path`.
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let source = io::read_file(path)?;
        Ok(Self::from_source(path, &source))
    }

    /// Output file name, e.g. `hello-world.html`.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }

    /// Link to the rendered page from the site root.
    pub fn href(&self, section: &str) -> RelativePathBuf {
        RelativePathBuf::from(section).join(self.file_name())
    }
}

/// Sorts pages by date, newest first. Undated pages go last; ties keep their
/// existing order.
pub fn sort_newest_first(pages: &mut [Page]) {
    pages.sort_by(|a, b| b.date.cmp(&a.date));
}
