//! Content model with efficient reference lookups.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` with a `HashMap` index from
//! [`PageRef`] to position. Parent links stay as references on each page, so
//! the model can name parents in books that were never loaded. Those parents
//! are skipped by [`ContentModel::applicable_parents`].
//!
//! The model is validated on construction: every parent in a loaded book
//! exists and parent links never form a cycle. Traversals over the parent DAG
//! rely on both.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::content_file;
use crate::error::ModelError;
use crate::page::{Book, Page, PageRef};
use crate::view::View;

/// Read-only set of books and pages.
#[derive(Debug)]
pub struct ContentModel {
    books: Vec<Book>,
    pages: Vec<Page>,
    index: HashMap<PageRef, usize>,
    root_book: String,
    content_root: usize,
}

impl ContentModel {
    /// Build and validate a model.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if books or pages are duplicated, a page belongs
    /// to an undeclared book, the root book or its content root is missing, a
    /// parent in a loaded book does not exist, or parents form a cycle.
    pub fn new(
        root_book: impl Into<String>,
        books: Vec<Book>,
        pages: Vec<Page>,
    ) -> Result<Self, ModelError> {
        let root_book = root_book.into();

        let mut book_names = HashSet::with_capacity(books.len());
        for book in &books {
            if !book_names.insert(book.name()) {
                return Err(ModelError::DuplicateBook(book.name().to_owned()));
            }
        }

        let root_ref = books
            .iter()
            .find(|book| book.name() == root_book)
            .ok_or_else(|| ModelError::MissingRootBook(root_book.clone()))?
            .content_root()
            .ok_or_else(|| ModelError::NoContentRoot(root_book.clone()))?
            .clone();

        let mut index = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            let page_ref = page.page_ref();
            if !book_names.contains(page_ref.book()) {
                return Err(ModelError::UnknownBook {
                    page: page_ref.clone(),
                    book: page_ref.book().to_owned(),
                });
            }
            if index.insert(page_ref.clone(), i).is_some() {
                return Err(ModelError::DuplicatePage(page_ref.clone()));
            }
        }

        let content_root = *index
            .get(&root_ref)
            .ok_or(ModelError::PageNotFound(root_ref))?;

        for page in &pages {
            for parent in page.parents() {
                let parent_ref = parent.page_ref();
                if book_names.contains(parent_ref.book()) && !index.contains_key(parent_ref) {
                    return Err(ModelError::DanglingParent {
                        page: page.page_ref().clone(),
                        parent: parent_ref.clone(),
                    });
                }
            }
        }

        check_acyclic(&pages, &index)?;

        Ok(Self {
            books,
            pages,
            index,
            root_book,
            content_root,
        })
    }

    /// Parse and validate a model from YAML content.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the YAML is malformed or validation fails.
    pub fn from_yaml_str(content: &str) -> Result<Self, ModelError> {
        let file = content_file::parse(content)?;
        let books = file
            .books
            .into_iter()
            .map(content_file::RawBook::into_book)
            .collect::<Result<Vec<_>, _>>()?;
        let pages = file
            .pages
            .into_iter()
            .map(|page| page.into_page(&file.root_book))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(file.root_book, books, pages)
    }

    /// Load and validate a model from a YAML content file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Read` if the file cannot be read, or any error
    /// from [`from_yaml_str`](Self::from_yaml_str).
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            books = model.books.len(),
            pages = model.pages.len(),
            "Loaded content model"
        );
        Ok(model)
    }

    /// Get page by reference.
    #[must_use]
    pub fn page(&self, page_ref: &PageRef) -> Option<&Page> {
        self.index.get(page_ref).map(|&i| &self.pages[i])
    }

    /// Find a page by its textual reference.
    ///
    /// Accepts `book:path` (e.g., "/api:/reference") or a bare path, which is
    /// looked up in the root book. Text before the first `:` is a book only
    /// when that book is loaded, so root-book paths may contain `:`.
    #[must_use]
    pub fn find(&self, reference: &str) -> Option<&Page> {
        let page_ref = match reference.split_once(':') {
            Some((book, path)) if self.has_book(book) => PageRef::new(book, path),
            _ => PageRef::new(self.root_book.clone(), reference),
        };
        self.page(&page_ref)
    }

    /// Top-level page of the root book.
    #[must_use]
    pub fn content_root(&self) -> &Page {
        &self.pages[self.content_root]
    }

    /// Name of the root book.
    #[must_use]
    pub fn root_book(&self) -> &str {
        &self.root_book
    }

    /// All pages in declaration order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// All loaded books.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Whether a book with this name is loaded.
    #[must_use]
    pub fn has_book(&self, name: &str) -> bool {
        self.books.iter().any(|book| book.name() == name)
    }

    /// Parents of `page` that are loaded and applicable to `view`.
    ///
    /// Parents are returned in declaration order without duplicates. Parents
    /// in books that are not loaded are skipped.
    #[must_use]
    pub fn applicable_parents<V: View + ?Sized>(&self, view: &V, page: &Page) -> Vec<&Page> {
        let mut parents: Vec<&Page> = Vec::with_capacity(page.parents().len());
        for link in page.parents() {
            let parent_ref = link.page_ref();
            if !self.has_book(parent_ref.book()) {
                tracing::debug!(
                    page = %page.page_ref(),
                    parent = %parent_ref,
                    "Skipping parent in missing book"
                );
                continue;
            }
            let Some(parent) = self.page(parent_ref) else {
                continue;
            };
            if view.is_applicable(parent)
                && !parents.iter().any(|p| p.page_ref() == parent.page_ref())
            {
                parents.push(parent);
            }
        }
        parents
    }
}

/// Reject parent links that loop back to a descendant.
///
/// Uses a three-colour DFS over parent edges so every page is visited once.
fn check_acyclic(pages: &[Page], index: &HashMap<PageRef, usize>) -> Result<(), ModelError> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unvisited,
        InProgress,
        Done,
    }

    fn visit(
        idx: usize,
        pages: &[Page],
        index: &HashMap<PageRef, usize>,
        marks: &mut [Mark],
    ) -> Result<(), ModelError> {
        match marks[idx] {
            Mark::Done => return Ok(()),
            Mark::InProgress => return Err(ModelError::Cycle(pages[idx].page_ref().clone())),
            Mark::Unvisited => {}
        }
        marks[idx] = Mark::InProgress;
        for link in pages[idx].parents() {
            if let Some(&parent) = index.get(link.page_ref()) {
                visit(parent, pages, index, marks)?;
            }
        }
        marks[idx] = Mark::Done;
        Ok(())
    }

    let mut marks = vec![Mark::Unvisited; pages.len()];
    for idx in 0..pages.len() {
        visit(idx, pages, index, &mut marks)?;
    }
    Ok(())
}
