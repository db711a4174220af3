// src/page/discover.rs
// =============================================================================
// Finds the assets of a page that should be mirrored.
//
// For every reference in the document:
// 1. Resolve it against the page origin (scheme://host:port/)
// 2. Compare origins: only same-origin references are "local"
// 3. Work out the local file name and the path written back into the HTML
//
// Non-local references (CDNs, other ports, data: URLs, ...) are counted but
// never downloaded or rewritten. A value that cannot be turned into a URL at
// all stops the whole mirror run.
// =============================================================================

use url::Url;

use crate::error::MirrorError;
use crate::naming::{self, NamingOptions};

use super::document::{PageDocument, PageReference};

/// Where a reference points and where its local copy lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub source_url: Url,
    pub origin_matches: bool,
    pub local_file_name: String,
    /// `<asset dir>/<file name>`, always '/'-separated
    pub local_relative_path: String,
}

/// A reference together with its position in the document and its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredReference {
    pub index: usize,
    pub reference: PageReference,
    pub asset: ResolvedAsset,
}

/// Everything discovery learned about one page.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    entries: Vec<DiscoveredReference>,
}

impl Discovery {
    pub fn entries(&self) -> &[DiscoveredReference] {
        &self.entries
    }

    /// References that will be mirrored and rewritten.
    pub fn local(&self) -> impl Iterator<Item = &DiscoveredReference> {
        self.entries.iter().filter(|e| e.asset.origin_matches)
    }

    pub fn local_count(&self) -> usize {
        self.local().count()
    }

    pub fn foreign_count(&self) -> usize {
        self.entries().len() - self.local_count()
    }

    /// Local assets to download, one per distinct URL, in discovery order.
    pub fn downloads(&self) -> Vec<ResolvedAsset> {
        let mut downloads: Vec<ResolvedAsset> = Vec::new();

        for entry in self.local() {
            if !downloads.iter().any(|a| a.source_url == entry.asset.source_url) {
                downloads.push(entry.asset.clone());
            }
        }

        downloads
    }
}

/// Resolves every reference of `document` and classifies it against the
/// origin of `page_url`.
pub fn find_local_assets(
    document: &PageDocument,
    page_url: &Url,
    asset_dir_name: &str,
    options: NamingOptions,
) -> Result<Discovery, MirrorError> {
    let base = origin_base(page_url);
    let page_origin = page_url.origin();

    let mut entries = Vec::new();

    for (index, reference) in document.references().into_iter().enumerate() {
        let source_url = base
            .join(&reference.value)
            .map_err(|source| MirrorError::InvalidReference {
                reference: reference.value.clone(),
                source,
            })?;

        let origin_matches = source_url.origin() == page_origin;
        let local_file_name = naming::name_for_asset(&source_url, options);
        let local_relative_path = naming::local_relative_path(asset_dir_name, &local_file_name);

        let entry = DiscoveredReference {
            index,
            reference,
            asset: ResolvedAsset {
                source_url,
                origin_matches,
                local_file_name,
                local_relative_path,
            },
        };

        tracing::debug!(
            kind = entry.reference.kind.tag(),
            reference = %entry.reference.value,
            resolved = %entry.asset.source_url,
            local = entry.asset.origin_matches,
            "reference discovered"
        );

        entries.push(entry);
    }

    Ok(Discovery { entries })
}

// The page URL reduced to its origin: "https://ru.hexlet.io/courses?x#y"
// becomes "https://ru.hexlet.io/".
fn origin_base(page_url: &Url) -> Url {
    let mut base = page_url.clone();
    base.set_path("/");
    base.set_query(None);
    base.set_fragment(None);
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIR: &str = "ru-hexlet-io-courses_files";

    fn discover(html: &str, page: &str) -> Result<Discovery, MirrorError> {
        let doc = PageDocument::parse(html);
        let page = Url::parse(page).unwrap();
        find_local_assets(&doc, &page, DIR, NamingOptions::default())
    }

    #[test]
    fn test_relative_reference_is_local() {
        let found = discover(r#"<img src="/images/logo.jpeg">"#, "https://ru.hexlet.io/courses").unwrap();
        let entry = &found.entries()[0];

        assert!(entry.asset.origin_matches);
        assert_eq!(entry.asset.source_url.as_str(), "https://ru.hexlet.io/images/logo.jpeg");
        assert_eq!(entry.asset.local_file_name, "images-logo.jpeg");
        assert_eq!(
            entry.asset.local_relative_path,
            "ru-hexlet-io-courses_files/images-logo.jpeg"
        );
    }

    #[test]
    fn test_absolute_same_origin_is_local() {
        let found = discover(
            r#"<script src="https://ru.hexlet.io/packs/js/runtime.js"></script>"#,
            "https://ru.hexlet.io/courses",
        )
        .unwrap();
        assert_eq!(found.local_count(), 1);
        assert_eq!(found.entries()[0].asset.local_file_name, "packs-js-runtime.js");
    }

    #[test]
    fn test_other_host_scheme_or_port_is_foreign() {
        let html = r#"
            <script src="https://js.stripe.com/v3/"></script>
            <link href="http://ru.hexlet.io/assets/app.css">
            <img src="https://ru.hexlet.io:8443/logo.png">
            <img src="data:image/png;base64,AAAA">
        "#;
        let found = discover(html, "https://ru.hexlet.io/courses").unwrap();
        assert_eq!(found.local_count(), 0);
        assert_eq!(found.foreign_count(), 4);
        assert!(found.downloads().is_empty());
    }

    #[test]
    fn test_relative_path_resolves_against_origin() {
        let found = discover(r#"<img src="img/a.png">"#, "https://example.com/blog/post").unwrap();
        assert_eq!(found.entries()[0].asset.source_url.as_str(), "https://example.com/img/a.png");
    }

    #[test]
    fn test_indices_follow_reference_order() {
        let html = r#"<img src="/i.png"><script src="/s.js"></script><link href="https://cdn.example.com/x.css">"#;
        let found = discover(html, "https://example.com/").unwrap();
        let indices: Vec<_> = found.entries().iter().map(|e| (e.index, e.reference.value.as_str())).collect();
        assert_eq!(
            indices,
            vec![(0, "/s.js"), (1, "https://cdn.example.com/x.css"), (2, "/i.png")]
        );
    }

    #[test]
    fn test_duplicate_urls_download_once() {
        let html = r#"<img src="/logo.png"><img src="https://example.com/logo.png">"#;
        let found = discover(html, "https://example.com/").unwrap();
        assert_eq!(found.local_count(), 2);
        assert_eq!(found.downloads().len(), 1);
    }

    #[test]
    fn test_unparsable_reference_fails() {
        let err = discover(r#"<img src="http://[::1">"#, "https://example.com/").unwrap_err();
        match err {
            MirrorError::InvalidReference { reference, .. } => assert_eq!(reference, "http://[::1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
