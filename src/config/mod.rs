//! Configuration and manifest loading

pub mod manifest;

pub use manifest::{PackageManifest, DEFAULT_MANIFEST};
