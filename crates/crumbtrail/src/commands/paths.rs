//! `crumbtrail paths` command implementation.

use clap::Args;
use crumbtrail_jsonld::find_distinct_paths;

use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the paths command.
#[derive(Args)]
pub(crate) struct PathsArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl PathsArgs {
    /// Execute the paths command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the page is unknown, or stdout
    /// cannot be written.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = self.site.load()?;
        for line in path_lines(&site, &self.site.page)? {
            output.result(&line)?;
        }
        Ok(())
    }
}

/// One line per distinct ancestry path, root-most page first.
fn path_lines(site: &Site, reference: &str) -> Result<Vec<String>, CliError> {
    let page = site.page(reference)?;
    let paths = find_distinct_paths(site.model(), site.view(), page, site.options());
    Ok(paths.iter().map(ToString::to_string).collect())
}
