// src/mirror/pipeline.rs
// =============================================================================
// The mirror orchestrator.
//
// Stages, in order:
//   1. VALIDATE_DEST     destination exists, is a directory, is writable
//   2. FETCH_PAGE        one GET for the page (text)
//   3. DISCOVER          resolve and classify script/link/img references
//   4. REWRITE           point local references at the asset directory
//   5. WRITE_PAGE        <dest>/<page file>
//   6. CREATE_ASSET_DIR  <dest>/<basis>_files (skipped when nothing is local)
//   7. FETCH + WRITE     every local asset, all at once
//
// Each stage returns Result and the first failure ends the run. Nothing is
// retried and nothing already written is rolled back.
//
// Local checks (URL syntax, destination) come before any network call.
// =============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

use crate::config::MirrorConfig;
use crate::error::MirrorError;
use crate::fetch::{BodyMode, HttpClient};
use crate::page::{find_local_assets, rewrite, PageDocument, ResolvedAsset};
use crate::store::FileStore;

use super::target::{MirrorResult, MirrorTarget};

/// Parses the page URL given by the user. Only http and https are accepted.
pub fn parse_page_url(raw: &str) -> Result<Url, MirrorError> {
    let url = Url::parse(raw).map_err(|e| MirrorError::InvalidPageUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(MirrorError::InvalidPageUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Downloads pages with their same-origin assets.
///
/// Generic over its collaborators: the binary uses `ReqwestClient` and
/// `LocalFileStore`, tests use in-memory fakes.
pub struct Mirror<H, S> {
    http: H,
    store: S,
    config: MirrorConfig,
}

impl<H, S> Mirror<H, S>
where
    H: HttpClient,
    S: FileStore,
{
    pub fn new(http: H, store: S, config: MirrorConfig) -> Self {
        Self {
            http,
            store,
            config,
        }
    }

    /// Mirrors `page_url` into `destination_dir`.
    ///
    /// On success the page file and every local asset are on disk. On
    /// failure, files written by earlier stages stay where they are; in
    /// particular the page is written (with all local references rewritten)
    /// before any asset is fetched.
    #[tracing::instrument(
        name = "mirror",
        skip_all,
        fields(url = %page_url, dest = %destination_dir.display())
    )]
    pub async fn mirror(
        &self,
        page_url: &str,
        destination_dir: &Path,
    ) -> Result<MirrorResult, MirrorError> {
        let page_url = parse_page_url(page_url)?;
        let target = MirrorTarget::new(page_url, destination_dir, self.config.naming);

        self.validate_destination(&target).await?;

        let html = self.fetch_page(&target).await?;

        // Parse once; the document is dropped before the next await.
        let (rewritten, discovery) = {
            let mut document = PageDocument::parse(&html);
            let discovery = find_local_assets(
                &document,
                &target.page_url,
                &target.asset_dir_name,
                self.config.naming,
            )?;
            let rewritten = rewrite(&mut document, &discovery);
            (rewritten, discovery)
        };

        let page_path = target.page_path();
        self.write(&page_path, rewritten.as_bytes()).await?;
        info!(
            path = %page_path.display(),
            local = discovery.local_count(),
            foreign = discovery.foreign_count(),
            "page saved"
        );

        let mut result = MirrorResult {
            page_url: target.page_url.to_string(),
            page_path,
            asset_dir: None,
            asset_paths: Vec::new(),
            local_references: discovery.local_count(),
            foreign_references: discovery.foreign_count(),
        };

        let downloads = discovery.downloads();
        if downloads.is_empty() {
            return Ok(result);
        }

        let asset_dir = target.asset_dir_path();
        self.create_asset_dir(&asset_dir).await?;

        result.asset_paths = self.download_assets(&asset_dir, &downloads).await?;
        result.asset_dir = Some(asset_dir);

        info!(assets = result.asset_paths.len(), "assets saved");
        Ok(result)
    }

    async fn validate_destination(&self, target: &MirrorTarget) -> Result<(), MirrorError> {
        self.store
            .check_writable_dir(&target.destination_dir)
            .await
            .map_err(|source| MirrorError::DestinationInvalid {
                path: target.destination_dir.clone(),
                source,
            })
    }

    async fn fetch_page(&self, target: &MirrorTarget) -> Result<String, MirrorError> {
        let response = self
            .http
            .get(&target.page_url, BodyMode::Text)
            .await
            .map_err(|source| MirrorError::FetchFailed {
                url: target.page_url.to_string(),
                source,
            })?;

        debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or("unknown"),
            bytes = response.body.len(),
            "page fetched"
        );

        Ok(response.text())
    }

    async fn create_asset_dir(&self, asset_dir: &Path) -> Result<(), MirrorError> {
        self.store.create_dir(asset_dir).await.map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                MirrorError::AssetDirectoryConflict {
                    path: asset_dir.to_path_buf(),
                }
            } else {
                MirrorError::WriteFailed {
                    path: asset_dir.to_path_buf(),
                    source,
                }
            }
        })
    }

    // All downloads run concurrently; the first error wins and the remaining
    // in-flight downloads are dropped.
    async fn download_assets(
        &self,
        asset_dir: &Path,
        assets: &[ResolvedAsset],
    ) -> Result<Vec<PathBuf>, MirrorError> {
        let downloads = assets
            .iter()
            .map(|asset| self.download_asset(asset_dir, asset));

        let mut written: Vec<PathBuf> = stream::iter(downloads)
            .buffer_unordered(assets.len().max(1))
            .try_collect()
            .await?;

        written.sort();
        Ok(written)
    }

    async fn download_asset(
        &self,
        asset_dir: &Path,
        asset: &ResolvedAsset,
    ) -> Result<PathBuf, MirrorError> {
        let response = self
            .http
            .get(&asset.source_url, BodyMode::Binary)
            .await
            .map_err(|source| MirrorError::FetchFailed {
                url: asset.source_url.to_string(),
                source,
            })?;

        let path = asset_dir.join(&asset.local_file_name);
        self.write(&path, &response.body).await?;

        debug!(
            url = %asset.source_url,
            path = %path.display(),
            bytes = response.body.len(),
            "asset saved"
        );
        Ok(path)
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> Result<(), MirrorError> {
        self.store
            .write_file(path, contents)
            .await
            .map_err(|source| MirrorError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}
