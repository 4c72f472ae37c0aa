//! schema.org `BreadcrumbList` serialization.
//!
//! Each ancestry path becomes one `BreadcrumbList`. Entries are listed from
//! the most distant ancestor (`position` 1) down to the current page.

use crumbtrail_model::{ContentModel, Page, PageRef, View};
use serde::Serialize;

use crate::encode::encode_uri;
use crate::error::BreadcrumbError;
use crate::paths::AncestryPath;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One breadcrumb list entry, derived from a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbEntry<'a> {
    /// 1-based position, root-most entry first.
    pub position: usize,
    /// Canonical URL, URI-encoded.
    pub url: String,
    /// Full page title.
    pub title: &'a str,
    /// Short title in the context of the previous entry, when it differs
    /// from `title`.
    pub short_title: Option<&'a str>,
}

#[derive(Serialize)]
struct BreadcrumbList<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<ListItem<'a>>,
}

#[derive(Serialize)]
struct ListItem<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    item: ItemRef<'a>,
}

#[derive(Serialize)]
struct ItemRef<'a> {
    #[serde(rename = "@id")]
    id: String,
    name: &'a str,
}

impl<'a> From<BreadcrumbEntry<'a>> for ListItem<'a> {
    fn from(entry: BreadcrumbEntry<'a>) -> Self {
        Self {
            kind: "ListItem",
            position: entry.position,
            name: entry.short_title,
            item: ItemRef {
                id: entry.url,
                name: entry.title,
            },
        }
    }
}

/// Build the entries of one path, root-most first.
///
/// The short-title context of each page is the next page toward the root in
/// the same path. The outermost page has no such neighbour; it uses its only
/// applicable parent when it has exactly one (usually the content root), and
/// no context otherwise.
///
/// # Errors
///
/// Returns `BreadcrumbError::View` if a canonical URL cannot be resolved.
pub fn breadcrumb_entries<'a, V: View + ?Sized>(
    model: &'a ContentModel,
    view: &V,
    path: &AncestryPath<'a>,
) -> Result<Vec<BreadcrumbEntry<'a>>, BreadcrumbError> {
    let pages = path.pages();
    let size = pages.len();

    pages
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &page)| -> Result<BreadcrumbEntry<'a>, BreadcrumbError> {
            let context = match pages.get(i + 1) {
                Some(parent) => Some(parent.page_ref()),
                None => sole_applicable_parent(model, view, page),
            };
            let short_title = page.short_title_for(context);
            Ok(BreadcrumbEntry {
                position: size - i,
                url: encode_uri(&view.canonical_url(page)?).into_owned(),
                title: page.title(),
                short_title: (short_title != page.title()).then_some(short_title),
            })
        })
        .collect()
}

/// The page's only applicable parent, if it has exactly one.
fn sole_applicable_parent<'a, V: View + ?Sized>(
    model: &'a ContentModel,
    view: &V,
    page: &Page,
) -> Option<&'a PageRef> {
    if let [parent] = model.applicable_parents(view, page)[..] {
        Some(parent.page_ref())
    } else {
        None
    }
}

fn breadcrumb_list<'a, V: View + ?Sized>(
    model: &'a ContentModel,
    view: &V,
    path: &AncestryPath<'a>,
) -> Result<BreadcrumbList<'a>, BreadcrumbError> {
    let entries = breadcrumb_entries(model, view, path)?;
    Ok(BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: entries.into_iter().map(ListItem::from).collect(),
    })
}

/// Serialize paths as pretty-printed JSON-LD.
///
/// One path yields a single `BreadcrumbList` document, several paths yield a
/// JSON array of documents, and no paths yield `None`.
///
/// # Errors
///
/// Returns `BreadcrumbError` if a canonical URL cannot be resolved or
/// serialization fails.
pub fn serialize_paths<'a, V: View + ?Sized>(
    model: &'a ContentModel,
    view: &V,
    paths: &[AncestryPath<'a>],
) -> Result<Option<String>, BreadcrumbError> {
    let lists = paths
        .iter()
        .map(|path| breadcrumb_list(model, view, path))
        .collect::<Result<Vec<_>, _>>()?;

    let json = match lists.as_slice() {
        [] => return Ok(None),
        [list] => serde_json::to_string_pretty(list)?,
        _ => serde_json::to_string_pretty(&lists)?,
    };
    Ok(Some(json))
}
