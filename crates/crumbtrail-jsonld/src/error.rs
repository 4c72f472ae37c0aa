//! Breadcrumb rendering error types.

use crumbtrail_model::ViewError;

/// Error rendering breadcrumbs.
///
/// Failures from collaborators are passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum BreadcrumbError {
    /// Canonical URL resolution failed.
    #[error("{0}")]
    View(#[from] ViewError),
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
