//! Package manifest parsing
//!
//! A manifest lists every package with its direct dependencies. JSON is the
//! default format:
//!
//! ```json
//! {
//!   "packages": [
//!     { "name": "A", "dependencies": ["B", "C"] },
//!     { "name": "B", "dependencies": ["D"] }
//!   ]
//! }
//! ```
//!
//! Files ending in `.toml` are read as TOML instead:
//!
//! ```toml
//! [[packages]]
//! name = "A"
//! dependencies = ["B", "C"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dependency::PackageRecord;

/// Default manifest file name when none is given
pub const DEFAULT_MANIFEST: &str = "packages.json";

/// Parsed package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package records in file order
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
}

impl PackageManifest {
    /// Load a manifest from disk, choosing the format by file extension
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest from {}", path.display()))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let manifest = if is_toml {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        }
        .with_context(|| format!("Invalid manifest {}", path.display()))?;

        debug!(
            path = %path.display(),
            packages = manifest.packages.len(),
            "manifest loaded"
        );

        for warning in manifest.warnings() {
            warn!("{}", warning);
        }

        Ok(manifest)
    }

    /// Parse a manifest from a JSON string
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON manifest")
    }

    /// Parse a manifest from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML manifest")
    }

    /// Problems that do not stop loading but probably indicate a mistake
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for (index, record) in self.packages.iter().enumerate() {
            if record.name.is_empty() {
                warnings.push(format!(
                    "Package entry #{} has an empty name and is ignored",
                    index + 1
                ));
                continue;
            }

            if !seen.insert(record.name.as_str()) {
                warnings.push(format!(
                    "Package '{}' is listed more than once; dependencies are merged",
                    record.name
                ));
            }

            let mut deps = HashSet::new();
            for dep in &record.dependencies {
                if dep.is_empty() {
                    warnings.push(format!(
                        "Package '{}' has an empty dependency name",
                        record.name
                    ));
                } else if dep == &record.name {
                    warnings.push(format!("Package '{}' depends on itself", record.name));
                } else if !deps.insert(dep.as_str()) {
                    warnings.push(format!(
                        "Package '{}' lists dependency '{}' more than once",
                        record.name, dep
                    ));
                }
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SHARED_JSON: &str = r#"
{
  "packages": [
    { "name": "A", "dependencies": ["B", "C"] },
    { "name": "B", "dependencies": ["D"] },
    { "name": "C", "dependencies": ["D"] },
    { "name": "D", "dependencies": [] }
  ]
}
"#;

    #[test]
    fn test_parse_json() {
        let manifest = PackageManifest::parse_json(SHARED_JSON).unwrap();
        assert_eq!(manifest.packages.len(), 4);
        assert_eq!(manifest.packages[0], PackageRecord::new("A", vec!["B", "C"]));
        assert!(manifest.warnings().is_empty());
    }

    #[test]
    fn test_parse_json_missing_dependencies_defaults_empty() {
        let manifest =
            PackageManifest::parse_json(r#"{"packages": [{"name": "solo"}]}"#).unwrap();
        assert!(manifest.packages[0].dependencies.is_empty());
    }

    #[test]
    fn test_parse_json_invalid() {
        let result = PackageManifest::parse_json(r#"{"packages": [{"dependencies": []}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_toml() {
        let manifest = PackageManifest::parse_toml(
            r#"
[[packages]]
name = "app"
dependencies = ["log"]

[[packages]]
name = "log"
"#,
        )
        .unwrap();

        assert_eq!(manifest.packages.len(), 2);
        assert_eq!(manifest.packages[0].dependencies, vec!["log".to_string()]);
        assert!(manifest.packages[1].dependencies.is_empty());
    }

    #[test]
    fn test_load_from_picks_format_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("packages.json");
        fs::write(&json_path, SHARED_JSON).unwrap();
        assert_eq!(PackageManifest::load_from(&json_path).unwrap().packages.len(), 4);

        let toml_path = temp_dir.path().join("packages.toml");
        fs::write(&toml_path, "[[packages]]\nname = \"only\"\n").unwrap();
        assert_eq!(PackageManifest::load_from(&toml_path).unwrap().packages.len(), 1);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = PackageManifest::load_from(temp_dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }

    #[test]
    fn test_warnings() {
        let manifest = PackageManifest {
            packages: vec![
                PackageRecord::new("", Vec::<String>::new()),
                PackageRecord::new("a", vec!["a", "b", "b", ""]),
                PackageRecord::new("a", Vec::<String>::new()),
            ],
        };

        let warnings = manifest.warnings();
        assert_eq!(warnings.len(), 5);
        assert!(warnings[0].contains("empty name"));
        assert!(warnings.iter().any(|w| w.contains("depends on itself")));
        assert!(warnings.iter().any(|w| w.contains("'b' more than once")));
        assert!(warnings.iter().any(|w| w.contains("empty dependency name")));
        assert!(warnings.iter().any(|w| w.contains("listed more than once")));
    }
}
