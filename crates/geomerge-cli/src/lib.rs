//! geomerge-cli
//! ============
//!
//! Command-line interface for the `geomerge-core` GeoJSON property merger.
//!
//! This crate primarily provides a binary (`geomerge-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install geomerge-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! geomerge-cli --help
//! geomerge-cli merge -s source.geojson -t target.geojson -o merged.geojson
//! geomerge-cli table source.geojson
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`geomerge-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/geomerge/geomerge-rs>
//! - Core crate: <https://docs.rs/geomerge-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
