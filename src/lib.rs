//! geomerge-rs
//! ===========
//!
//! Workspace facade over [`geomerge-core`]. Exists so the demos under
//! `demos/` can be built from the workspace root; library users should
//! depend on `geomerge-core` directly.

pub use geomerge_core::*;
