//! Rendering views.
//!
//! A [`View`] decides which pages take part in navigation under a rendering
//! mode and how their canonical URLs are formed. Different views may therefore
//! produce different breadcrumbs for the same page.

use crate::page::{Page, PageRef};

/// Error resolving a canonical URL.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// Base URL is not an absolute `http://` or `https://` URL.
    #[error("Base URL must be absolute http:// or https://, got {0:?}")]
    NotAbsolute(String),
    /// The view cannot produce a URL for this page.
    #[error("Cannot resolve URL for {page}: {reason}")]
    Unresolvable {
        /// Page whose URL was requested.
        page: PageRef,
        /// Human-readable reason.
        reason: String,
    },
}

/// Rendering mode queried by the breadcrumb core.
pub trait View {
    /// View name, matched against [`Page::views`].
    fn name(&self) -> &str;

    /// Whether `page` takes part in navigation under this view.
    fn is_applicable(&self, page: &Page) -> bool;

    /// Absolute URL of `page` under this view.
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if no absolute URL can be formed.
    fn canonical_url(&self, page: &Page) -> Result<String, ViewError>;
}

/// View rooted at a single absolute base URL.
///
/// Pages with an empty `views` list are applicable in every view; otherwise
/// the list must name this view. URLs are `base_url` + book + path, with the
/// root book contributing nothing.
#[derive(Clone, Debug)]
pub struct SiteView {
    name: String,
    base_url: String,
}

impl SiteView {
    /// Create a view with the given name and base URL.
    #[must_use]
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }

    /// Base URL as configured.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl View for SiteView {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self, page: &Page) -> bool {
        page.views().is_empty() || page.views().iter().any(|v| *v == self.name)
    }

    fn canonical_url(&self, page: &Page) -> Result<String, ViewError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ViewError::NotAbsolute(self.base_url.clone()));
        }
        Ok(format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            page.page_ref().book_path()
        ))
    }
}
