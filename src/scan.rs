//! Download directory scanning and manifest generation.
//!
//! Stage 1 of the apk-index pipeline. Lists the configured download
//! directory, parses every `.apk` filename through [`crate::naming`], and
//! partitions the matches by channel into date/build-sorted lists.
//!
//! ## Candidate Selection
//!
//! Only entries whose name ends in `.apk` are candidates. Candidates that
//! fail to parse are not errors — they are recorded in
//! [`Manifest::skipped`] so malformed artifact names stay visible in the
//! scan output without failing the build. Everything else in the directory
//! is ignored.
//!
//! ## Ordering
//!
//! Each channel list is sorted newest-first: descending by the 8-digit date
//! string (lexicographic order equals chronological order), ties broken by
//! build number descending. The sort is stable, so records with identical
//! date and build keep their directory-listing order.

use crate::config::{self, SiteConfig};
use crate::naming::{self, Channel, ReleaseRecord};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Manifest output from the scan stage.
///
/// Serialized as pretty JSON by the `scan` CLI command so the intermediate
/// state is human-inspectable.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Dev channel releases, newest first.
    pub dev: Vec<ReleaseRecord>,
    /// Stg channel releases, newest first.
    pub stg: Vec<ReleaseRecord>,
    /// `.apk` filenames that did not match the naming convention.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub config: SiteConfig,
}

impl Manifest {
    /// The release list for a channel.
    pub fn releases(&self, channel: Channel) -> &[ReleaseRecord] {
        match channel {
            Channel::Dev => &self.dev,
            Channel::Stg => &self.stg,
        }
    }
}

/// Scan a site root: load its config, list the download directory, and
/// build the per-channel manifest.
///
/// A missing or unreadable download directory is fatal; an empty one yields
/// empty channel lists.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut names: Vec<String> = fs::read_dir(root.join(&config.download_dir))?
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.ends_with(".apk"))
        .collect();
    // Directory order is platform-dependent; a sorted listing keeps the
    // manifest (and tie-broken sort order) deterministic.
    names.sort();

    let mut dev = Vec::new();
    let mut stg = Vec::new();
    let mut skipped = Vec::new();

    for name in names {
        match naming::parse_release_name(&name, &config.prefix) {
            Some(record) => match record.channel {
                Channel::Dev => dev.push(record),
                Channel::Stg => stg.push(record),
            },
            None => skipped.push(name),
        }
    }

    sort_releases(&mut dev);
    sort_releases(&mut stg);

    Ok(Manifest {
        dev,
        stg,
        skipped,
        config,
    })
}

/// Sort newest-first: date string descending, then build descending.
/// Stable, so equal (date, build) pairs keep input order.
fn sort_releases(releases: &mut [ReleaseRecord]) {
    releases.sort_by(|a, b| b.date.cmp(&a.date).then(b.build.cmp(&a.build)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn scan_partitions_by_channel() {
        let tmp = site_with_apks(&[
            "app_dev_20251010_c101_v1.1.70_release.apk",
            "app_stg_20251001_c90_v1.1.60_release.apk",
            "app_dev_20251009_c100_v1.1.69_release.apk",
        ]);
        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(filenames(&manifest.dev).len(), 2);
        assert_eq!(filenames(&manifest.stg).len(), 1);
        assert!(manifest.skipped.is_empty());
    }

    #[test]
    fn scan_sorts_date_desc_then_build_desc() {
        let tmp = site_with_apks(&[
            "app_dev_20251009_c500_v1.1.50_release.apk",
            "app_dev_20251010_c99_v1.1.68_release.apk",
            "app_dev_20251010_c101_v1.1.70_release.apk",
        ]);
        let manifest = scan(tmp.path()).unwrap();

        let builds: Vec<u64> = manifest.dev.iter().map(|r| r.build).collect();
        assert_eq!(builds, vec![101, 99, 500]);
    }

    #[test]
    fn scan_records_unparsable_apk_names_as_skipped() {
        let tmp = site_with_apks(&[
            "app_dev_20251010_c101_v1.1.70_release.apk",
            "app_dev_badname.apk",
            "other_dev_20251010_c1_v1.0.0_release.apk",
        ]);
        let manifest = scan(tmp.path()).unwrap();

        assert_eq!(manifest.dev.len(), 1);
        assert_eq!(
            manifest.skipped,
            vec!["app_dev_badname.apk", "other_dev_20251010_c1_v1.0.0_release.apk"]
        );
    }

    #[test]
    fn scan_ignores_non_apk_entries() {
        let tmp = site_with_apks(&["app_dev_20251010_c101_v1.1.70_release.apk"]);
        std::fs::write(tmp.path().join("download/README.md"), "docs").unwrap();
        std::fs::create_dir(tmp.path().join("download/nested")).unwrap();

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.dev.len(), 1);
        assert!(manifest.skipped.is_empty());
    }

    #[test]
    fn scan_empty_download_dir_yields_empty_lists() {
        let tmp = site_with_apks(&[]);
        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.dev.is_empty());
        assert!(manifest.stg.is_empty());
    }

    #[test]
    fn scan_missing_download_dir_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_template(tmp.path());
        assert!(matches!(scan(tmp.path()), Err(ScanError::Io(_))));
    }

    #[test]
    fn scan_honors_configured_prefix() {
        let tmp = site_with_apks(&[
            "myapp_dev_20251010_c1_v1.0.0_release.apk",
            "app_dev_20251010_c2_v1.0.0_release.apk",
        ]);
        std::fs::write(tmp.path().join("config.toml"), "prefix = \"myapp\"").unwrap();

        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(filenames(&manifest.dev), vec![
            "myapp_dev_20251010_c1_v1.0.0_release.apk"
        ]);
        assert_eq!(manifest.skipped, vec!["app_dev_20251010_c2_v1.0.0_release.apk"]);
    }

    #[test]
    fn manifest_serializes_to_readable_json() {
        let tmp = site_with_apks(&["app_dev_20251010_c101_v1.1.70_release.apk"]);
        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();

        assert!(json.contains("\"channel\": \"dev\""));
        assert!(json.contains("\"version\": \"1.1.70\""));
        assert!(json.contains("\"build\": 101"));
    }
}
