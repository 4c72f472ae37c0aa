//! BreadcrumbList in JSON-LD format for multi-parent content trees.
//!
//! Pages may have several parents, so a page can be reached from the content
//! root along more than one route. This crate provides:
//! - [`find_distinct_paths`]: depth-first search through the parents DAG,
//!   producing every distinct ancestry path applicable to a view
//! - [`serialize_paths`]: one schema.org `BreadcrumbList` per path, emitted as
//!   a single document or an array of documents
//! - [`BreadcrumbListJsonLd`]: the two steps bound to startup configuration
//!
//! The content root is never listed, but it still serves as short-title
//! context for its children. Parents are handled in declaration order, so the
//! order of the lists follows the order parents are declared in.
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use crumbtrail_jsonld::{BreadcrumbListJsonLd, BreadcrumbOptions};
//! use crumbtrail_model::{ContentModel, SiteView};
//!
//! let model = ContentModel::load(Path::new("content.yaml"))?;
//! let view = SiteView::new("content", "https://example.com");
//! let component = BreadcrumbListJsonLd::new(BreadcrumbOptions::default());
//!
//! if let Some(output) = component.render(&model, Some(&view), model.find("/guide"))? {
//!     println!("{}", output.script_tag());
//! }
//! # Ok(())
//! # }
//! ```

mod component;
mod encode;
mod error;
mod paths;
mod serializer;

pub use component::{BreadcrumbListJsonLd, BreadcrumbOptions, BreadcrumbOutput};
pub use encode::{encode_uri, script_tag};
pub use error::BreadcrumbError;
pub use paths::{AncestryPath, find_distinct_paths};
pub use serializer::{BreadcrumbEntry, breadcrumb_entries, serialize_paths};
