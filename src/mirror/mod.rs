// src/mirror/mod.rs
// =============================================================================
// This module runs a complete mirror operation.
//
// Submodules:
// - target:   names and paths for one run, plus the result type
// - pipeline: the Mirror orchestrator (validate -> fetch page -> discover ->
//             rewrite -> write page -> create asset dir -> fetch/write assets)
// =============================================================================

mod pipeline;
mod target;

pub use pipeline::Mirror;
pub use target::MirrorResult;
