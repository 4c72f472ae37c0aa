//! `crumbtrail render` command implementation.

use std::time::Instant;

use clap::Args;
use crumbtrail_jsonld::BreadcrumbListJsonLd;

use super::{Site, SiteArgs, elapsed_ms};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Wrap the JSON-LD in a `<script type="application/ld+json">` element.
    #[arg(long)]
    script: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// Prints nothing when no breadcrumb list qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the page is unknown, a canonical
    /// URL cannot be resolved, or stdout cannot be written.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load()?;
        if let Some(text) = render_page(&site, &self.site.page, self.script)? {
            output.result(&text)?;
        }
        Ok(())
    }
}

/// Render the JSON-LD for `reference`, optionally as a script element.
fn render_page(site: &Site, reference: &str, script: bool) -> Result<Option<String>, CliError> {
    let page = site.page(reference)?;
    let component = BreadcrumbListJsonLd::new(site.options().clone());

    let start = Instant::now();
    let rendered = component.render(site.model(), Some(site.view()), Some(page))?;
    let list_count = rendered.as_ref().map_or(0, |output| output.list_count());
    tracing::info!(
        page = %page.page_ref(),
        list_count,
        elapsed_ms = elapsed_ms(start),
        "Breadcrumbs rendered"
    );

    Ok(rendered.map(|output| {
        if script {
            output.script_tag()
        } else {
            output.json().to_owned()
        }
    }))
}
