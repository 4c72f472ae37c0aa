//! YAML content file parsing.
//!
//! Raw serde structs mirror the file layout. Defaults (`book` inherited from
//! the declaring page, `root_book` of `/`) are resolved while converting into
//! [`Book`] and [`Page`] values.

use serde::Deserialize;

use crate::error::ModelError;
use crate::page::{Book, Page, PageRef, ParentRef, ROOT_BOOK};

/// Content file as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ContentFile {
    #[serde(default = "default_root_book")]
    pub root_book: String,
    #[serde(default)]
    pub books: Vec<RawBook>,
    #[serde(default)]
    pub pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawBook {
    name: String,
    content_root: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawPage {
    book: Option<String>,
    path: String,
    title: String,
    short_title: Option<String>,
    #[serde(default)]
    views: Vec<String>,
    #[serde(default)]
    parents: Vec<RawParent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawParent {
    book: Option<String>,
    path: String,
    short_title: Option<String>,
}

fn default_root_book() -> String {
    ROOT_BOOK.to_owned()
}

/// Parse a content file from YAML text.
pub(crate) fn parse(content: &str) -> Result<ContentFile, ModelError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Require a book name or path to start with `/`.
fn require_absolute(value: &str) -> Result<(), ModelError> {
    if value.starts_with('/') {
        Ok(())
    } else {
        Err(ModelError::InvalidRef(value.to_owned()))
    }
}

impl RawBook {
    pub(crate) fn into_book(self) -> Result<Book, ModelError> {
        require_absolute(&self.name)?;
        let content_root = match self.content_root {
            Some(path) => {
                require_absolute(&path)?;
                Some(PageRef::new(self.name.clone(), path))
            }
            None => None,
        };
        Ok(Book::new(self.name, content_root))
    }
}

impl RawPage {
    pub(crate) fn into_page(self, root_book: &str) -> Result<Page, ModelError> {
        let book = self.book.unwrap_or_else(|| root_book.to_owned());
        require_absolute(&book)?;
        require_absolute(&self.path)?;

        let mut page = Page::new(PageRef::new(book.clone(), self.path), self.title)
            .with_views(self.views);
        if let Some(short_title) = self.short_title {
            page = page.with_short_title(short_title);
        }
        for parent in self.parents {
            let parent_book = parent.book.unwrap_or_else(|| book.clone());
            require_absolute(&parent_book)?;
            require_absolute(&parent.path)?;
            page = page.with_parent(ParentRef::new(
                PageRef::new(parent_book, parent.path),
                parent.short_title,
            ));
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let file = parse("pages: []").unwrap();
        assert_eq!(file.root_book, "/");
        assert!(file.books.is_empty());
        assert!(file.pages.is_empty());
    }

    #[test]
    fn test_parent_inherits_page_book() {
        let yaml = r"
pages:
  - book: /api
    path: /reference
    title: Reference
    parents:
      - path: /index
      - book: /
        path: /guide
        short_title: API
";
        let file = parse(yaml).unwrap();
        let page = file
            .pages
            .into_iter()
            .next()
            .unwrap()
            .into_page("/")
            .unwrap();

        assert_eq!(page.page_ref(), &PageRef::new("/api", "/reference"));
        assert_eq!(page.parents()[0].page_ref(), &PageRef::new("/api", "/index"));
        assert_eq!(page.parents()[1].page_ref(), &PageRef::new("/", "/guide"));
        assert_eq!(page.parents()[1].short_title(), Some("API"));
    }

    #[test]
    fn test_page_defaults_to_root_book() {
        let file = parse("pages:\n  - path: /a\n    title: A\n").unwrap();
        let page = file
            .pages
            .into_iter()
            .next()
            .unwrap()
            .into_page("/docs")
            .unwrap();
        assert_eq!(page.page_ref().book(), "/docs");
    }

    #[test]
    fn test_relative_path_rejected() {
        let file = parse("pages:\n  - path: guide\n    title: Guide\n").unwrap();
        let err = file
            .pages
            .into_iter()
            .next()
            .unwrap()
            .into_page("/")
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidRef(ref v) if v == "guide"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = parse("pages:\n  - path: /a\n    title: A\n    tilte: typo\n");
        assert!(matches!(result, Err(ModelError::Parse(_))));
    }
}
