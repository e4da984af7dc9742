//! Release artifact filename parsing.
//!
//! Every downloadable artifact follows one fixed naming convention:
//!
//! ```text
//! {prefix}_{channel}_{YYYYMMDD}_c{build}_v{major}.{minor}.{patch}_release.apk
//! app_dev_20251010_c101_v1.1.70_release.apk
//! ```
//!
//! This module is the single place that knows the convention. Parsing is
//! strict: every segment must be present with the exact literal separators,
//! and date/build/version segments must be plain ASCII digit runs. A name
//! that deviates in any way is simply not a release artifact — the parser
//! returns `None`, never an error. The rest of the pipeline only ever sees
//! records that round-trip to a valid filename.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Release channel, encoded as a fixed literal token in the filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Early/internal builds (`dev` token).
    Dev,
    /// Pre-production builds (`stg` token).
    Stg,
}

impl Channel {
    /// The literal token as it appears in filenames.
    pub fn token(self) -> &'static str {
        match self {
            Channel::Dev => "dev",
            Channel::Stg => "stg",
        }
    }

    /// Korean display label used in rendered subtitles.
    pub fn label_ko(self) -> &'static str {
        match self {
            Channel::Dev => "개발",
            Channel::Stg => "스테이징",
        }
    }
}

/// Semantic version embedded in the filename (`v1.1.70` → `1.1.70`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ();

    /// Accepts exactly `D+.D+.D+` with ASCII digits. `u32::from_str` alone
    /// would admit a leading `+`, so each part is digit-checked first.
    fn from_str(s: &str) -> Result<Self, ()> {
        let mut parts = s.split('.');
        let mut next = || -> Result<u32, ()> {
            let part = parts.next().ok_or(())?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(());
            }
            part.parse().map_err(|_| ())
        };
        let version = Version {
            major: next()?,
            minor: next()?,
            patch: next()?,
        };
        if parts.next().is_some() {
            return Err(());
        }
        Ok(version)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Metadata extracted from one release artifact filename.
///
/// Immutable once constructed; the original `filename` is carried verbatim
/// so the download link round-trips exactly.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseRecord {
    pub channel: Channel,
    /// Release date as the raw 8-digit `YYYYMMDD` string. Kept as a string:
    /// lexicographic order equals chronological order, which is all the
    /// sorter needs.
    pub date: String,
    pub build: u64,
    pub version: Version,
    pub filename: String,
}

/// Parse a release artifact filename against the configured prefix.
///
/// Returns `None` for anything that is not an exact match — wrong prefix,
/// unknown channel token, non-digit date/build/version, missing or extra
/// segments, wrong trailing literal. No partial-match fallback.
pub fn parse_release_name(name: &str, prefix: &str) -> Option<ReleaseRecord> {
    let rest = name.strip_prefix(prefix)?.strip_prefix('_')?;

    let (channel, rest) = if let Some(r) = rest.strip_prefix("dev_") {
        (Channel::Dev, r)
    } else if let Some(r) = rest.strip_prefix("stg_") {
        (Channel::Stg, r)
    } else {
        return None;
    };

    let (date, rest) = rest.split_at_checked(8)?;
    if !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let rest = rest.strip_prefix("_c")?;
    let (build_str, rest) = rest.split_once('_')?;
    if build_str.is_empty() || !build_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let build = build_str.parse().ok()?;

    let rest = rest.strip_prefix('v')?;
    let (version_str, rest) = rest.split_once('_')?;
    let version = version_str.parse().ok()?;

    if rest != "release.apk" {
        return None;
    }

    Some(ReleaseRecord {
        channel,
        date: date.to_string(),
        build,
        version,
        filename: name.to_string(),
    })
}

/// Convert an 8-digit `YYYYMMDD` date into hyphenated `YYYY-MM-DD` form.
///
/// Crate-internal: callers only ever pass dates from parsed
/// [`ReleaseRecord`]s, which are guaranteed to be exactly 8 ASCII digits,
/// so the slicing precondition holds by construction.
pub(crate) fn format_date(yyyymmdd: &str) -> String {
    format!(
        "{}-{}-{}",
        &yyyymmdd[0..4],
        &yyyymmdd[4..6],
        &yyyymmdd[6..8]
    )
}
