// src/store/mod.rs
// =============================================================================
// Filesystem access for the mirror pipeline.
//
// The FileStore trait covers the three things a mirror run does on disk:
// check the destination, create the asset directory, and write files.
// LocalFileStore implements it with tokio::fs.
// =============================================================================

mod local;

pub use local::{FileStore, LocalFileStore};
