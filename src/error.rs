// src/error.rs
// =============================================================================
// The single error type returned by a mirror operation.
//
// Every stage of the pipeline maps its failure into one of these variants and
// returns it with `?`. Variants that wrap an upstream failure (HTTP or
// filesystem) display ONLY the upstream message, so a caller printing the
// error sees e.g. "Request failed with status code 404" untouched. The extra
// fields (url, path) are there for logs and for callers that match on them.
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum MirrorError {
    /// The page URL could not be parsed or is not http(s)
    #[error("invalid page URL '{url}': {reason}")]
    InvalidPageUrl { url: String, reason: String },

    /// Destination directory is missing, not a directory, or not writable
    #[error("{source}")]
    DestinationInvalid {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// GET for the page or one of its assets failed
    #[error("{source}")]
    FetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    /// An asset attribute could not be resolved to a URL
    #[error("invalid asset reference '{reference}': {source}")]
    InvalidReference {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    /// The asset directory is already on disk
    #[error("{} already exists: page was already downloaded", .path.display())]
    AssetDirectoryConflict { path: PathBuf },

    /// Writing the page, an asset, or creating the asset directory failed
    #[error("{source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
