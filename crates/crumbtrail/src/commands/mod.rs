//! CLI command implementations.

pub(crate) mod paths;
pub(crate) mod render;

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use crumbtrail_config::{CliSettings, Config};
use crumbtrail_jsonld::BreadcrumbOptions;
use crumbtrail_model::{ContentModel, Page, SiteView};

use crate::error::CliError;

pub(crate) use paths::PathsArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by commands that look up a page.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Page reference: `book:path`, or a path in the root book.
    pub page: String,

    /// Path to configuration file (default: auto-discover crumbtrail.toml).
    #[arg(short, long, env = "CRUMBTRAIL_CONFIG")]
    config: Option<PathBuf>,

    /// YAML content file (overrides config).
    #[arg(long)]
    content: Option<PathBuf>,

    /// Absolute base URL for canonical page URLs (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// View to render for (overrides config).
    #[arg(long)]
    view: Option<String>,

    /// Emit only the first breadcrumb list found (overrides config).
    #[arg(long, overrides_with = "multiple")]
    single: bool,

    /// Emit one breadcrumb list per distinct path (overrides config).
    #[arg(long, overrides_with = "single")]
    multiple: bool,

    /// Minimum number of entries for a list to be emitted (overrides config).
    #[arg(long)]
    min_length: Option<usize>,

    /// Enable verbose output (show timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Build CLI settings from args.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            content_file: self.content.clone(),
            base_url: self.base_url.clone(),
            view: self.view.clone(),
            multiple_lists: self.resolve_multiple_lists(),
            min_length: self.min_length,
        }
    }

    /// Resolve `multiple_lists` from --single/--multiple flags.
    fn resolve_multiple_lists(&self) -> Option<bool> {
        self.single
            .then_some(false)
            .or(self.multiple.then_some(true))
    }

    /// Load configuration and content.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        Site::from_config(&config)
    }
}

/// Loaded content with the view and options commands render with.
pub(crate) struct Site {
    model: ContentModel,
    view: SiteView,
    options: BreadcrumbOptions,
}

impl Site {
    /// Load the content file named by `config`.
    pub(crate) fn from_config(config: &Config) -> Result<Self, CliError> {
        let start = Instant::now();
        let model = ContentModel::load(&config.content_resolved.file)?;
        tracing::info!(
            file = %config.content_resolved.file.display(),
            page_count = model.pages().len(),
            elapsed_ms = elapsed_ms(start),
            "Content loaded"
        );

        Ok(Self {
            model,
            view: SiteView::new(config.site.view.as_str(), config.site.base_url.as_str()),
            options: BreadcrumbOptions {
                multiple_lists: config.breadcrumbs.multiple_lists,
                min_length: config.breadcrumbs.min_length,
            },
        })
    }

    pub(crate) fn model(&self) -> &ContentModel {
        &self.model
    }

    pub(crate) fn view(&self) -> &SiteView {
        &self.view
    }

    pub(crate) fn options(&self) -> &BreadcrumbOptions {
        &self.options
    }

    /// Look up a page by reference.
    pub(crate) fn page(&self, reference: &str) -> Result<&Page, CliError> {
        self.model
            .find(reference)
            .ok_or_else(|| CliError::PageNotFound(reference.to_owned()))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
