//! Mock view implementation for testing.
//!
//! Provides [`MockView`] for exercising view-dependent behavior without
//! configuring page `views` lists.

use std::collections::HashSet;

use crate::page::{Page, PageRef};
use crate::view::{View, ViewError};

/// Mock view for testing.
///
/// Every page is applicable unless excluded, and URLs are
/// `https://example.com` + book + path unless marked as failing.
///
/// # Example
///
/// ```ignore
/// use crumbtrail_model::{MockView, PageRef};
///
/// let view = MockView::new()
///     .with_excluded(PageRef::new("/", "/drafts"))
///     .with_failing_url(PageRef::new("/", "/broken"));
/// ```
#[derive(Debug, Default)]
pub struct MockView {
    excluded: HashSet<PageRef>,
    failing: HashSet<PageRef>,
}

impl MockView {
    /// Create a mock view where every page is applicable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a page inapplicable under this view.
    #[must_use]
    pub fn with_excluded(mut self, page_ref: PageRef) -> Self {
        self.excluded.insert(page_ref);
        self
    }

    /// Make URL resolution fail for a page.
    #[must_use]
    pub fn with_failing_url(mut self, page_ref: PageRef) -> Self {
        self.failing.insert(page_ref);
        self
    }
}

impl View for MockView {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_applicable(&self, page: &Page) -> bool {
        !self.excluded.contains(page.page_ref())
    }

    fn canonical_url(&self, page: &Page) -> Result<String, ViewError> {
        if self.failing.contains(page.page_ref()) {
            return Err(ViewError::Unresolvable {
                page: page.page_ref().clone(),
                reason: "mock failure".to_owned(),
            });
        }
        Ok(format!("https://example.com{}", page.page_ref().book_path()))
    }
}
