//! Distinct ancestry path search.
//!
//! Paths are found with a depth-first search through the parents DAG, starting
//! at the current page. Each page without applicable parents ends one path.
//! The search never descends past a parent that is not applicable to the view,
//! so that parent's own parents are not checked.
//!
//! A single current-path stack is pushed and popped during the search and only
//! copied when a completed path is captured.

use std::fmt;
use std::ops::ControlFlow;

use crumbtrail_model::{ContentModel, Page, PageRef, View};

use crate::component::BreadcrumbOptions;

/// Pages from the current page toward the content root, excluding the root.
///
/// Index 0 is the current page; the last page is the most distant ancestor
/// reached. Two paths are equal when they visit the same pages in the same
/// order.
#[derive(Clone, Debug)]
pub struct AncestryPath<'a> {
    pages: Vec<&'a Page>,
}

impl<'a> AncestryPath<'a> {
    /// Pages, current page first.
    #[must_use]
    pub fn pages(&self) -> &[&'a Page] {
        &self.pages
    }

    /// Number of pages in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the path is empty (only possible with a minimum length of 0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page references, current page first.
    pub fn refs(&self) -> impl Iterator<Item = &'a PageRef> + '_ {
        self.pages.iter().map(|page| page.page_ref())
    }

    /// Whether this path visits exactly `pages`, in order.
    fn matches(&self, pages: &[&Page]) -> bool {
        self.pages.len() == pages.len()
            && self
                .pages
                .iter()
                .zip(pages)
                .all(|(a, b)| a.page_ref() == b.page_ref())
    }
}

impl PartialEq for AncestryPath<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.pages)
    }
}

impl Eq for AncestryPath<'_> {}

/// Root-most page first, separated by ` > `.
impl fmt::Display for AncestryPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{}", page.page_ref())?;
        }
        Ok(())
    }
}

/// Find every distinct ancestry path from `page` under `view`.
///
/// Parents are followed in declaration order, so the returned paths are in
/// discovery order. Paths shorter than `options.min_length` are dropped and a
/// path equal to an earlier one is kept only once.
///
/// With `options.multiple_lists` disabled, the whole search stops as soon as
/// the first path is captured, so at most one path is returned and it is the
/// first path the unrestricted search would return.
///
/// Parent links must not form a cycle. [`ContentModel`] rejects cycles when
/// it is built.
#[must_use]
pub fn find_distinct_paths<'a, V: View + ?Sized>(
    model: &'a ContentModel,
    view: &V,
    page: &'a Page,
    options: &BreadcrumbOptions,
) -> Vec<AncestryPath<'a>> {
    let mut search = PathSearch {
        model,
        view,
        content_root: model.content_root().page_ref(),
        options,
        distinct: Vec::new(),
    };
    let mut current = Vec::new();
    let flow = search.visit(page, &mut current);

    tracing::debug!(
        page = %page.page_ref(),
        view = view.name(),
        paths = search.distinct.len(),
        stopped_early = flow.is_break(),
        "Found breadcrumb paths"
    );
    search.distinct
}

/// State shared by one path search.
struct PathSearch<'a, 'o, V: ?Sized> {
    model: &'a ContentModel,
    view: &'o V,
    content_root: &'a PageRef,
    options: &'o BreadcrumbOptions,
    distinct: Vec<AncestryPath<'a>>,
}

impl<'a, V: View + ?Sized> PathSearch<'a, '_, V> {
    /// Visit `page`, returning `Break` once a single-list search is satisfied.
    fn visit(&mut self, page: &'a Page, current: &mut Vec<&'a Page>) -> ControlFlow<()> {
        // The content root is never part of a path
        let is_content_root = page.page_ref() == self.content_root;
        if !is_content_root {
            current.push(page);
        }

        let parents = self.model.applicable_parents(self.view, page);
        let flow = if parents.is_empty() {
            self.capture(current);
            self.satisfied()
        } else {
            parents
                .into_iter()
                .try_for_each(|parent| self.visit(parent, current))
        };

        if !is_content_root {
            current.pop();
        }
        flow
    }

    /// Record a completed path unless it is too short or already known.
    fn capture(&mut self, current: &[&'a Page]) {
        if current.len() < self.options.min_length
            || self.distinct.iter().any(|path| path.matches(current))
        {
            return;
        }
        let path = AncestryPath {
            pages: current.to_vec(),
        };
        tracing::trace!(path = %path, "Captured breadcrumb path");
        self.distinct.push(path);
    }

    fn satisfied(&self) -> ControlFlow<()> {
        if !self.options.multiple_lists && !self.distinct.is_empty() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
