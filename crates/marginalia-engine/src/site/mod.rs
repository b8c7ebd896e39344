//! # Site Building
//!
//! Everything between a content tree on disk and a public tree of HTML:
//!
//! - **`front_matter`**: splits `title:`/`date:` metadata off a page source
//! - **`slug`**: file stems for rendered pages
//! - **`date`**: display formatting of ISO dates
//! - **`page`**: the `Page` model and its ordering
//! - **`build`**: the `build_site` pipeline

pub mod build;
pub mod date;
pub mod front_matter;
pub mod page;
pub mod slug;

pub use build::{BuildError, BuildReport, SiteLayout, build_site};
pub use page::Page;
