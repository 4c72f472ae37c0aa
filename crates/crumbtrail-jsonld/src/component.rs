//! Breadcrumb component bound to startup configuration.

use crumbtrail_model::{ContentModel, Page, View};

use crate::encode::script_tag;
use crate::error::BreadcrumbError;
use crate::paths::find_distinct_paths;
use crate::serializer::serialize_paths;

/// Breadcrumb rendering options, fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbOptions {
    /// Emit one list per distinct path. When false, only the first path found
    /// is emitted, so parent declaration order selects the list.
    pub multiple_lists: bool,
    /// Minimum number of entries for a list to be emitted.
    pub min_length: usize,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            multiple_lists: true,
            min_length: 1,
        }
    }
}

/// Rendered JSON-LD for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbOutput {
    json: String,
    list_count: usize,
}

impl BreadcrumbOutput {
    /// Pretty-printed JSON-LD document (or array of documents).
    #[must_use]
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Number of `BreadcrumbList` documents in the output.
    #[must_use]
    pub fn list_count(&self) -> usize {
        self.list_count
    }

    /// JSON-LD wrapped in a `<script>` element for the page head.
    #[must_use]
    pub fn script_tag(&self) -> String {
        script_tag(&self.json)
    }
}

/// BreadcrumbList JSON-LD component.
///
/// Applies to every view and page, including pages excluded from indexing.
/// Links stay within the view they are rendered for, so different views may
/// produce different lists for the same page.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbListJsonLd {
    options: BreadcrumbOptions,
}

impl BreadcrumbListJsonLd {
    /// Create the component with options read at startup.
    #[must_use]
    pub fn new(options: BreadcrumbOptions) -> Self {
        Self { options }
    }

    /// Options this component was created with.
    #[must_use]
    pub fn options(&self) -> &BreadcrumbOptions {
        &self.options
    }

    /// Render breadcrumbs for `page` under `view`.
    ///
    /// Returns `Ok(None)` when there is no view or page to render for, or
    /// when no path qualifies.
    ///
    /// # Errors
    ///
    /// Returns `BreadcrumbError` if a canonical URL cannot be resolved or
    /// serialization fails.
    pub fn render<'a, V: View + ?Sized>(
        &self,
        model: &'a ContentModel,
        view: Option<&V>,
        page: Option<&'a Page>,
    ) -> Result<Option<BreadcrumbOutput>, BreadcrumbError> {
        let (Some(view), Some(page)) = (view, page) else {
            return Ok(None);
        };

        let paths = find_distinct_paths(model, view, page, &self.options);
        let Some(json) = serialize_paths(model, view, &paths)? else {
            return Ok(None);
        };

        Ok(Some(BreadcrumbOutput {
            json,
            list_count: paths.len(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crumbtrail_model::{MockView, SiteView};
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(BreadcrumbListJsonLd: Send, Sync);

    const CONTENT: &str = r"
books:
  - name: /
    content_root: /
pages:
  - path: /
    title: Home
  - path: /e
    title: E
    parents:
      - path: /
  - path: /f
    title: F
    parents:
      - path: /
  - path: /d
    title: D
    parents:
      - path: /e
      - path: /f
";

    fn model() -> ContentModel {
        ContentModel::from_yaml_str(CONTENT).unwrap()
    }

    #[test]
    fn test_default_options() {
        let options = BreadcrumbOptions::default();
        assert!(options.multiple_lists);
        assert_eq!(options.min_length, 1);
    }

    #[test]
    fn test_render_without_view_skipped() {
        let model = model();
        let component = BreadcrumbListJsonLd::default();
        let result = component
            .render::<MockView>(&model, None, model.find("/d"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_render_without_page_skipped() {
        let model = model();
        let component = BreadcrumbListJsonLd::default();
        let result = component
            .render(&model, Some(&MockView::new()), None)
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_render_content_root_emits_nothing() {
        let model = model();
        let component = BreadcrumbListJsonLd::default();
        let result = component
            .render(&model, Some(&MockView::new()), Some(model.content_root()))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_render_multiple_lists() {
        let model = model();
        let component = BreadcrumbListJsonLd::default();
        let output = component
            .render(&model, Some(&MockView::new()), model.find("/d"))
            .unwrap()
            .unwrap();

        assert_eq!(output.list_count(), 2);
        assert!(output.json().trim_start().starts_with('['));
    }

    #[test]
    fn test_render_single_list() {
        let model = model();
        let component = BreadcrumbListJsonLd::new(BreadcrumbOptions {
            multiple_lists: false,
            ..BreadcrumbOptions::default()
        });
        let output = component
            .render(&model, Some(&MockView::new()), model.find("/d"))
            .unwrap()
            .unwrap();

        assert_eq!(output.list_count(), 1);
        let value: serde_json::Value = serde_json::from_str(output.json()).unwrap();
        assert_eq!(value["itemListElement"][0]["item"]["name"], "E");
    }

    #[test]
    fn test_render_through_dyn_view() {
        let model = model();
        let view: Box<dyn View> = Box::new(SiteView::new("content", "https://docs.example.org"));
        let component = BreadcrumbListJsonLd::default();
        let output = component
            .render(&model, Some(view.as_ref()), model.find("/e"))
            .unwrap()
            .unwrap();

        assert!(output.json().contains("https://docs.example.org/e"));
    }

    #[test]
    fn test_script_tag_wraps_json() {
        let model = model();
        let component = BreadcrumbListJsonLd::default();
        let output = component
            .render(&model, Some(&MockView::new()), model.find("/e"))
            .unwrap()
            .unwrap();

        let tag = output.script_tag();
        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.contains("\"BreadcrumbList\""));
    }
}
