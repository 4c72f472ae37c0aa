//! Page, parent reference, and book types.
//!
//! # Reference Convention
//!
//! A [`PageRef`] is a `(book, path)` pair. Book names and page paths both
//! start with `/`:
//! - `("/", "/index")` - a page in the root book, displayed as `/index`
//! - `("/api", "/reference")` - a page in another book, displayed as `/api/reference`

use std::fmt;

/// Name of the book that owns bare paths.
pub const ROOT_BOOK: &str = "/";

/// Unique reference to a page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageRef {
    book: String,
    path: String,
}

impl PageRef {
    /// Create a reference from a book name and a path within that book.
    #[must_use]
    pub fn new(book: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            path: path.into(),
        }
    }

    /// Book name (e.g., "/", "/api").
    #[must_use]
    pub fn book(&self) -> &str {
        &self.book
    }

    /// Path within the book (e.g., "/index", "/guide/install").
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path prefixed with its book, without the root book's `/`.
    ///
    /// This is the form used when building URLs.
    #[must_use]
    pub fn book_path(&self) -> String {
        if self.book == ROOT_BOOK {
            self.path.clone()
        } else {
            format!("{}{}", self.book, self.path)
        }
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.book != ROOT_BOOK {
            f.write_str(&self.book)?;
        }
        f.write_str(&self.path)
    }
}

/// Link from a page to one of its parents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentRef {
    page_ref: PageRef,
    short_title: Option<String>,
}

impl ParentRef {
    /// Create a parent link with an optional relationship-specific short title.
    #[must_use]
    pub fn new(page_ref: PageRef, short_title: Option<String>) -> Self {
        Self {
            page_ref,
            short_title,
        }
    }

    /// The parent page.
    #[must_use]
    pub fn page_ref(&self) -> &PageRef {
        &self.page_ref
    }

    /// Short title of the child when shown beneath this parent.
    #[must_use]
    pub fn short_title(&self) -> Option<&str> {
        self.short_title.as_deref()
    }
}

/// Content page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    page_ref: PageRef,
    title: String,
    short_title: Option<String>,
    views: Vec<String>,
    parents: Vec<ParentRef>,
}

impl Page {
    /// Create a page with no parents, visible in every view.
    #[must_use]
    pub fn new(page_ref: PageRef, title: impl Into<String>) -> Self {
        Self {
            page_ref,
            title: title.into(),
            short_title: None,
            views: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Set the page-level short title.
    #[must_use]
    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = Some(short_title.into());
        self
    }

    /// Restrict the page to the named views.
    #[must_use]
    pub fn with_views(mut self, views: Vec<String>) -> Self {
        self.views = views;
        self
    }

    /// Append a parent link. Declaration order is preserved.
    #[must_use]
    pub fn with_parent(mut self, parent: ParentRef) -> Self {
        self.parents.push(parent);
        self
    }

    /// Unique reference of this page.
    #[must_use]
    pub fn page_ref(&self) -> &PageRef {
        &self.page_ref
    }

    /// Full display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Page-level short title, falling back to the title.
    #[must_use]
    pub fn short_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(&self.title)
    }

    /// Views this page is restricted to. Empty means every view.
    #[must_use]
    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// Parent links in declaration order.
    #[must_use]
    pub fn parents(&self) -> &[ParentRef] {
        &self.parents
    }

    /// Resolve the short title of this page relative to a parent.
    ///
    /// When `parent` is one of this page's declared parents and that link
    /// carries a short title, the link's title wins. Otherwise the page-level
    /// [`short_title`](Self::short_title) is returned.
    #[must_use]
    pub fn short_title_for(&self, parent: Option<&PageRef>) -> &str {
        parent
            .and_then(|parent| {
                self.parents
                    .iter()
                    .find(|link| link.page_ref() == parent)
                    .and_then(ParentRef::short_title)
            })
            .unwrap_or_else(|| self.short_title())
    }
}

/// Named collection of pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    name: String,
    content_root: Option<PageRef>,
}

impl Book {
    /// Create a book, optionally with a designated content root.
    #[must_use]
    pub fn new(name: impl Into<String>, content_root: Option<PageRef>) -> Self {
        Self {
            name: name.into(),
            content_root,
        }
    }

    /// Book name (e.g., "/", "/api").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-level page of the book, if designated.
    #[must_use]
    pub fn content_root(&self) -> Option<&PageRef> {
        self.content_root.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> Page {
        Page::new(PageRef::new("/", "/guide"), "User Guide")
            .with_parent(ParentRef::new(
                PageRef::new("/", "/index"),
                Some("Guides".to_owned()),
            ))
            .with_parent(ParentRef::new(PageRef::new("/", "/manuals"), None))
    }

    #[test]
    fn test_page_ref_display_root_book() {
        let page_ref = PageRef::new("/", "/index");
        assert_eq!(page_ref.to_string(), "/index");
        assert_eq!(page_ref.book_path(), "/index");
    }

    #[test]
    fn test_page_ref_display_named_book() {
        let page_ref = PageRef::new("/api", "/reference");
        assert_eq!(page_ref.to_string(), "/api/reference");
        assert_eq!(page_ref.book_path(), "/api/reference");
    }

    #[test]
    fn test_short_title_defaults_to_title() {
        let page = Page::new(PageRef::new("/", "/a"), "Alpha");
        assert_eq!(page.short_title(), "Alpha");
        assert_eq!(page.short_title_for(None), "Alpha");
    }

    #[test]
    fn test_short_title_for_parent_override() {
        let page = guide();
        assert_eq!(
            page.short_title_for(Some(&PageRef::new("/", "/index"))),
            "Guides"
        );
    }

    #[test]
    fn test_short_title_for_parent_without_override() {
        let page = guide().with_short_title("Guide");
        assert_eq!(
            page.short_title_for(Some(&PageRef::new("/", "/manuals"))),
            "Guide"
        );
    }

    #[test]
    fn test_short_title_for_unrelated_parent() {
        let page = guide();
        assert_eq!(
            page.short_title_for(Some(&PageRef::new("/", "/elsewhere"))),
            "User Guide"
        );
    }

    #[test]
    fn test_parents_keep_declaration_order() {
        let page = guide();
        let paths: Vec<&str> = page.parents().iter().map(|p| p.page_ref().path()).collect();
        assert_eq!(paths, vec!["/index", "/manuals"]);
    }
}
