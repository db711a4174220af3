// src/page/mod.rs
// =============================================================================
// This module works on the downloaded HTML.
//
// Submodules:
// - document: parses the page once and gives access to its asset references
// - discover: resolves references and decides which ones get mirrored
// - rewrite:  points the mirrored references at their local copies
//
// The same parsed PageDocument is handed from discover to rewrite, so the
// HTML is only parsed once per mirror run.
// =============================================================================

mod discover;
mod document;
mod rewrite;

pub use discover::{find_local_assets, ResolvedAsset};
pub use document::PageDocument;
pub use rewrite::rewrite;
