// src/naming/mod.rs
// =============================================================================
// This module turns URLs into local file and directory names.
//
// Every name the mirror writes to disk comes from here:
// - the page file        (e.g. ru-hexlet-io-courses.html)
// - the asset directory  (e.g. ru-hexlet-io-courses_files)
// - each asset file      (e.g. images-logo.jpeg)
//
// All functions are pure: the same URL (and options) always gives the same
// name, no matter which assets a page happens to reference.
// =============================================================================

mod codec;

pub use codec::{
    local_relative_path, name_for_asset, name_for_asset_dir, name_for_page, NamingOptions,
};
