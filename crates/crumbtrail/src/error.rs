//! CLI error types.

use crumbtrail_config::ConfigError;
use crumbtrail_jsonld::BreadcrumbError;
use crumbtrail_model::ModelError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Breadcrumb(#[from] BreadcrumbError),

    #[error("Page not found: {0}")]
    PageNotFound(String),
}
