//! Content model error types.

use std::path::PathBuf;

use crate::page::PageRef;

/// Error loading or validating a content model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Content file could not be read.
    #[error("Failed to read content file {}: {source}", path.display())]
    Read {
        /// Content file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing error.
    #[error("Invalid content file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Book name or page path does not start with `/`.
    #[error("Invalid reference {0:?}: book names and paths must start with '/'")]
    InvalidRef(String),
    /// Two books share a name.
    #[error("Duplicate book: {0}")]
    DuplicateBook(String),
    /// Two pages share a reference.
    #[error("Duplicate page: {0}")]
    DuplicatePage(PageRef),
    /// Page declared in a book that is not listed under `books`.
    #[error("Page {page} belongs to undeclared book {book}")]
    UnknownBook {
        /// Offending page.
        page: PageRef,
        /// Undeclared book name.
        book: String,
    },
    /// The configured root book is not declared.
    #[error("Root book {0} is not declared")]
    MissingRootBook(String),
    /// The root book has no `content_root`.
    #[error("Root book {0} has no content_root")]
    NoContentRoot(String),
    /// A referenced page does not exist.
    #[error("Page not found: {0}")]
    PageNotFound(PageRef),
    /// A parent in a loaded book does not exist.
    #[error("Page {page} declares missing parent {parent}")]
    DanglingParent {
        /// Child page.
        page: PageRef,
        /// Missing parent.
        parent: PageRef,
    },
    /// Parent links loop back to a descendant.
    #[error("Parent cycle through {0}")]
    Cycle(PageRef),
}
