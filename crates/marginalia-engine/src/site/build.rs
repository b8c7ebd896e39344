use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::html::{DEFAULT_STYLESHEET, IndexEntry, IndexRenderer, PageRenderer};
use crate::io::{self, IoError};

use super::{
    date::format_date_full,
    page::{Page, sort_newest_first},
};

/// Where a site's inputs live and how its output is shaped.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// Each subdirectory is a section of `*.txt` pages.
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Files copied verbatim into `public_dir`.
    pub asset_dir: PathBuf,
    /// Section whose pages are listed on `index.html`.
    pub index_section: String,
    pub index_title: String,
    pub site_name: Option<String>,
    /// Replaces the built-in stylesheet when set.
    pub stylesheet: Option<PathBuf>,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            public_dir: PathBuf::from("./public"),
            asset_dir: PathBuf::from("./assets"),
            index_section: "posts".to_string(),
            index_title: "Blog Posts".to_string(),
            site_name: None,
            stylesheet: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("No pages found in section {0}")]
    EmptySection(PathBuf),
}

/// What a successful build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub sections: usize,
    pub pages: usize,
    pub assets: usize,
    pub index_written: bool,
    pub elapsed: Duration,
}

/// Builds the whole site described by `layout`.
///
/// Stops at the first I/O failure or empty section; pages written before the
/// failure stay on disk.
pub fn build_site(layout: &SiteLayout) -> Result<BuildReport, BuildError> {
    let started = Instant::now();
    let mut report = BuildReport::default();

    io::ensure_dir(&layout.public_dir)?;

    if layout.asset_dir.is_dir() {
        report.assets = io::copy_files(&layout.asset_dir, &layout.public_dir)?;
    } else {
        log::warn!(
            "Asset directory {} not found, skipping assets",
            layout.asset_dir.display()
        );
    }

    let stylesheet = match &layout.stylesheet {
        Some(path) => io::read_file(path)?,
        None => DEFAULT_STYLESHEET.to_string(),
    };
    let site_name = layout.site_name.as_deref();
    let renderer = PageRenderer {
        stylesheet: &stylesheet,
        site_name,
    };

    for section_dir in io::scan_sections(&layout.content_dir)? {
        let section = section_name(&section_dir);
        let mut pages = import_section(&section_dir)?;
        let dst_dir = layout.public_dir.join(&section);
        io::ensure_dir(&dst_dir)?;

        for page in &pages {
            write_page(&renderer, page, &dst_dir)?;
        }
        report.sections += 1;
        report.pages += pages.len();

        if section == layout.index_section {
            sort_newest_first(&mut pages);
            let index = IndexRenderer {
                title: &layout.index_title,
                stylesheet: &stylesheet,
                site_name,
            };
            write_index(&index, &section, &pages, &layout.public_dir)?;
            report.index_written = true;
        }
    }

    report.elapsed = started.elapsed();
    Ok(report)
}

fn section_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Loads every page of one section. A section without pages is an error.
fn import_section(dir: &Path) -> Result<Vec<Page>, BuildError> {
    let files = io::scan_pages(dir)?;
    log::info!("Scanned {}: found {} pages", dir.display(), files.len());
    if files.is_empty() {
        return Err(BuildError::EmptySection(dir.to_path_buf()));
    }

    let mut seen = HashSet::new();
    let mut pages = Vec::with_capacity(files.len());
    for file in files {
        log::info!("Importing page: {}", file.display());
        let page = Page::load(&file)?;
        if !seen.insert(page.slug.clone()) {
            log::warn!(
                "Page {} has the same slug as an earlier page and will overwrite it: {}",
                file.display(),
                page.slug
            );
        }
        pages.push(page);
    }
    Ok(pages)
}

fn write_page(renderer: &PageRenderer<'_>, page: &Page, dst_dir: &Path) -> Result<(), IoError> {
    if let Some(date) = &page.date
        && format_date_full(date).is_none()
    {
        log::warn!("Invalid date format in page {}: {}", page.slug, date);
    }

    let path = dst_dir.join(page.file_name());
    let write_err = |source| IoError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut sink = BufWriter::new(file);
    renderer
        .write_to(&mut sink, &page.title, page.date.as_deref(), &page.content)
        .map_err(write_err)?;
    sink.flush().map_err(write_err)?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}

fn write_index(
    renderer: &IndexRenderer<'_>,
    section: &str,
    pages: &[Page],
    public_dir: &Path,
) -> Result<(), IoError> {
    let hrefs: Vec<_> = pages.iter().map(|p| p.href(section)).collect();
    let entries: Vec<IndexEntry<'_>> = pages
        .iter()
        .zip(&hrefs)
        .map(|(page, href)| IndexEntry {
            title: &page.title,
            href,
            date: page.date.as_deref(),
        })
        .collect();

    let path = public_dir.join("index.html");
    io::write_file(&path, renderer.render(&entries).as_bytes())?;
    log::info!("Wrote index of {} pages to {}", pages.len(), path.display());
    Ok(())
}
