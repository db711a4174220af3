// src/page/rewrite.rs
// =============================================================================
// Points local references at their mirrored copies.
//
// Only references that discovery classified as local are touched; their
// attribute becomes `<asset dir>/<file name>`. Everything else keeps its
// original value.
//
// Known limitation: the page is serialized back from the parsed tree, so
// markup outside the edited attributes comes out in html5ever's normalized
// form (implied <html>/<head>/<body>, double-quoted attributes, re-escaped
// text). Attribute order within an element is preserved.
// =============================================================================

use super::discover::Discovery;
use super::document::PageDocument;

/// Rewrites the local references of `document` in place and returns the
/// serialized page.
pub fn rewrite(document: &mut PageDocument, discovery: &Discovery) -> String {
    document.set_reference_values(
        discovery
            .local()
            .map(|entry| (entry.index, entry.asset.local_relative_path.as_str())),
    );

    document.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingOptions;
    use crate::page::find_local_assets;
    use url::Url;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="ru">
  <head>
    <meta charset="utf-8">
    <title>Courses</title>
    <link rel="stylesheet" media="all" href="https://cdn2.hexlet.io/assets/menu.css">
    <link rel="stylesheet" media="all" href="/assets/application.css">
    <link href="/courses" rel="canonical">
  </head>
  <body>
    <img src="/assets/professions/nodejs.png" alt="Node.js">
    <h3><a href="/professions/nodejs">Node.js</a></h3>
    <script src="https://js.stripe.com/v3/"></script>
    <script src="https://ru.hexlet.io/packs/js/runtime.js"></script>
  </body>
</html>"#;

    fn rewritten(html: &str) -> String {
        let page = Url::parse("https://ru.hexlet.io/courses").unwrap();
        let mut doc = PageDocument::parse(html);
        let discovery =
            find_local_assets(&doc, &page, "ru-hexlet-io-courses_files", NamingOptions::default()).unwrap();
        rewrite(&mut doc, &discovery)
    }

    #[test]
    fn test_local_references_point_at_asset_dir() {
        let out = rewritten(PAGE);

        assert!(out.contains(r#"href="ru-hexlet-io-courses_files/assets-application.css""#));
        assert!(out.contains(r#"href="ru-hexlet-io-courses_files/ru-hexlet-io-courses.html""#));
        assert!(out.contains(r#"src="ru-hexlet-io-courses_files/assets-professions-nodejs.png""#));
        assert!(out.contains(r#"src="ru-hexlet-io-courses_files/packs-js-runtime.js""#));
    }

    #[test]
    fn test_foreign_references_keep_original_value() {
        let out = rewritten(PAGE);

        assert!(out.contains(r#"href="https://cdn2.hexlet.io/assets/menu.css""#));
        assert!(out.contains(r#"src="https://js.stripe.com/v3/""#));
        // anchors are not asset references
        assert!(out.contains(r#"<a href="/professions/nodejs">"#));
    }

    #[test]
    fn test_other_attributes_and_order_survive() {
        let out = rewritten(PAGE);
        assert!(out.contains(
            r#"<link rel="stylesheet" media="all" href="ru-hexlet-io-courses_files/assets-application.css">"#
        ));
        assert!(out.contains(
            r#"<img src="ru-hexlet-io-courses_files/assets-professions-nodejs.png" alt="Node.js">"#
        ));
    }

    #[test]
    fn test_rewrite_is_deterministic() {
        assert_eq!(rewritten(PAGE), rewritten(PAGE));
    }

    #[test]
    fn test_page_without_local_assets_keeps_references() {
        let html = r#"<html><head></head><body><img src="https://other.example/x.png"></body></html>"#;
        let out = rewritten(html);
        assert!(out.contains(r#"<img src="https://other.example/x.png">"#));
    }
}
