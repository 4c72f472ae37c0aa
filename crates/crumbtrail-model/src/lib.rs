//! Read-only content model for crumbtrail.
//!
//! This crate provides the collaborators the breadcrumb core queries:
//! - [`ContentModel`]: books and pages loaded from a YAML content file, with
//!   parent links forming a DAG
//! - [`View`]: the rendering mode deciding which parents are applicable and
//!   how canonical URLs are formed
//! - [`SiteView`]: a view over a single absolute base URL
//! - [`MockView`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use crumbtrail_model::{ContentModel, SiteView, View};
//!
//! let model = ContentModel::load(Path::new("content.yaml"))?;
//! let view = SiteView::new("content", "https://example.com");
//!
//! let page = model.find("/guide/install").expect("page exists");
//! for parent in model.applicable_parents(&view, page) {
//!     println!("{} <- {}", view.canonical_url(parent)?, page.title());
//! }
//! # Ok(())
//! # }
//! ```

mod content_file;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod page;
mod view;

pub use error::ModelError;
#[cfg(feature = "mock")]
pub use mock::MockView;
pub use model::ContentModel;
pub use page::{Book, Page, PageRef, ParentRef, ROOT_BOOK};
pub use view::{SiteView, View, ViewError};
