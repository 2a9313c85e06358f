//! Input loading for the Courier engine.
//!
//! Responsibilities:
//! - Parse the text street-map format into a [`StreetMap`] that implements
//!   [`StreetGraph`](courier_core::StreetGraph).
//! - Parse delivery manifests into a depot and a list of
//!   [`DeliveryRequest`](courier_core::DeliveryRequest)s.
//!
//! Boundaries:
//! - Do not encode routing rules (live in `courier-router` and
//!   `courier-planner`).
//! - Files are opened through `courier-fs`; parsers also accept any
//!   [`BufRead`](std::io::BufRead) so tests can feed strings.
//!
//! Invariants:
//! - Parse errors carry the 1-based line number of the offending line.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod manifest;
mod street_map;

pub use manifest::{DeliveryManifest, ManifestError};
pub use street_map::{StreetMap, StreetMapError};
