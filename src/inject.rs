//! Marker-delimited template injection.
//!
//! The template page carries named regions delimited by literal HTML
//! comment markers:
//!
//! ```text
//! <!-- GENERATED DEV LIST START -->
//!   ...replaced on every build...
//! <!-- GENERATED DEV LIST END -->
//! ```
//!
//! Each region is an explicit [`Region`] descriptor rather than a literal
//! buried in control flow. All regions are resolved by substring search
//! against the original document text, then the output is rebuilt in a
//! single left-to-right pass — so no replacement can corrupt the offsets of
//! a later region, even if a fragment happens to contain another region's
//! marker text.
//!
//! Injection is all-or-nothing: a missing or misordered marker fails the
//! whole operation with the offending region named, and no partial document
//! is ever produced.
//!
//! The module also hosts [`rebrand_first`], the first-occurrence tag
//! rewrite used for the page `<title>` and header `<h1>` branding.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InjectError {
    #[error("{region}: start marker not found: {marker}")]
    MissingStartMarker {
        region: &'static str,
        marker: &'static str,
    },
    #[error("{region}: end marker not found: {marker}")]
    MissingEndMarker {
        region: &'static str,
        marker: &'static str,
    },
    #[error("{region}: end marker appears before start marker")]
    MisorderedMarkers { region: &'static str },
    #[error("{region}: markers overlap another region")]
    OverlappingRegions { region: &'static str },
}

/// A named region of the template, delimited by two literal markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Human-readable name used in error messages and CLI output.
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

/// Dev channel generated-list region.
pub const DEV_LIST: Region = Region {
    name: "dev list",
    start: "<!-- GENERATED DEV LIST START -->",
    end: "<!-- GENERATED DEV LIST END -->",
};

/// Stg channel generated-list region.
pub const STG_LIST: Region = Region {
    name: "stg list",
    start: "<!-- GENERATED STG LIST START -->",
    end: "<!-- GENERATED STG LIST END -->",
};

/// A region span resolved against the original document.
struct ResolvedSpan<'a> {
    region: &'static str,
    /// Byte offset just past the start marker.
    content_start: usize,
    /// Byte offset of the end marker.
    content_end: usize,
    fragment: &'a str,
}

/// Replace the content of every region with its fragment, preserving the
/// markers and framing each fragment with newlines.
///
/// Fails without producing output if any region's start marker is absent,
/// end marker is absent, or end marker precedes its start marker.
pub fn inject(document: &str, fragments: &[(Region, &str)]) -> Result<String, InjectError> {
    // Resolve every span against the untouched input before building output.
    let mut spans = Vec::with_capacity(fragments.len());
    for (region, fragment) in fragments.iter().copied() {
        let start_idx =
            document
                .find(region.start)
                .ok_or(InjectError::MissingStartMarker {
                    region: region.name,
                    marker: region.start,
                })?;
        let end_idx = document
            .find(region.end)
            .ok_or(InjectError::MissingEndMarker {
                region: region.name,
                marker: region.end,
            })?;
        if end_idx < start_idx {
            return Err(InjectError::MisorderedMarkers {
                region: region.name,
            });
        }
        spans.push(ResolvedSpan {
            region: region.name,
            content_start: start_idx + region.start.len(),
            content_end: end_idx,
            fragment,
        });
    }

    spans.sort_by_key(|s| s.content_start);

    // Regions must be disjoint in document order. Nested or interleaved
    // marker pairs (each valid in isolation) would otherwise make the
    // rebuild cursor run backwards.
    for pair in spans.windows(2) {
        if pair[1].content_start < pair[0].content_end {
            return Err(InjectError::OverlappingRegions {
                region: pair[1].region,
            });
        }
    }

    let mut out = String::with_capacity(document.len());
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&document[cursor..span.content_start]);
        out.push('\n');
        out.push_str(span.fragment);
        out.push('\n');
        cursor = span.content_end;
    }
    out.push_str(&document[cursor..]);
    Ok(out)
}

/// Rewrite the first `{open}…{trailing}{close}` occurrence, replacing the
/// interior before `{trailing}` with `interior`.
///
/// The prior interior can be anything as long as it ends with `trailing`;
/// for `<title>Old Name APK 다운로드</title>` and `interior = "New "`, the
/// result is `<title>New APK 다운로드</title>`. Returns `None` when the
/// pattern does not occur, leaving it to the caller to keep the document
/// as-is.
pub fn rebrand_first(
    document: &str,
    open: &str,
    trailing: &str,
    close: &str,
    interior: &str,
) -> Option<String> {
    let open_idx = document.find(open)?;
    let search_from = open_idx + open.len();
    let needle = format!("{trailing}{close}");
    let needle_idx = search_from + document[search_from..].find(&needle)?;

    let mut out = String::with_capacity(document.len() + interior.len());
    out.push_str(&document[..search_from]);
    out.push_str(interior);
    out.push_str(&document[needle_idx..]);
    Some(out)
}
