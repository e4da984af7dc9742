//! Shared test utilities for the apk-index test suite.
//!
//! Builds temp site fixtures (download directory, template page, optional
//! config) so module tests can exercise the pipeline against a real
//! filesystem layout without shared state.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::naming::ReleaseRecord;

/// A minimal but realistic template page: both generated-list marker pairs,
/// stale content between them, and both branding patterns.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
  <head>
    <title>구버전 이름 APK 다운로드</title>
  </head>
  <body>
    <header>
      <h1>구버전 이름 APK</h1>
    </header>
    <section id="dev">
      <!-- GENERATED DEV LIST START -->
      stale dev content
      <!-- GENERATED DEV LIST END -->
    </section>
    <section id="stg">
      <!-- GENERATED STG LIST START -->
      stale stg content
      <!-- GENERATED STG LIST END -->
    </section>
  </body>
</html>
"#;

/// Create a temp site root with a `download/` directory containing the given
/// artifact names (as empty files) and the stock template as `index.html`.
pub fn site_with_apks(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let download = tmp.path().join("download");
    fs::create_dir(&download).unwrap();
    for name in names {
        fs::write(download.join(name), []).unwrap();
    }
    write_template(tmp.path());
    tmp
}

/// Write the stock template page into a site root.
pub fn write_template(root: &Path) {
    fs::write(root.join("index.html"), TEMPLATE).unwrap();
}

/// All filenames of a release list, in order.
pub fn filenames(releases: &[ReleaseRecord]) -> Vec<&str> {
    releases.iter().map(|r| r.filename.as_str()).collect()
}
