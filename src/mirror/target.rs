// src/mirror/target.rs
// =============================================================================
// The fixed inputs and outputs of a mirror run.
//
// MirrorTarget is computed once from the page URL and the destination; every
// path the run writes to is derived from it.
// =============================================================================

use serde::Serialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::naming::{self, NamingOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTarget {
    pub page_url: Url,
    pub destination_dir: PathBuf,
    pub asset_dir_name: String,
    pub page_file_name: String,
}

impl MirrorTarget {
    pub fn new(page_url: Url, destination_dir: &Path, options: NamingOptions) -> Self {
        let asset_dir_name = naming::name_for_asset_dir(&page_url, options);
        let page_file_name = naming::name_for_page(&page_url, options);

        Self {
            page_url,
            destination_dir: destination_dir.to_path_buf(),
            asset_dir_name,
            page_file_name,
        }
    }

    pub fn page_path(&self) -> PathBuf {
        self.destination_dir.join(&self.page_file_name)
    }

    pub fn asset_dir_path(&self) -> PathBuf {
        self.destination_dir.join(&self.asset_dir_name)
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorResult {
    pub page_url: String,
    pub page_path: PathBuf,
    /// None when the page had no local assets
    pub asset_dir: Option<PathBuf>,
    /// Sorted, one per distinct local asset URL
    pub asset_paths: Vec<PathBuf>,
    pub local_references: usize,
    pub foreign_references: usize,
}
