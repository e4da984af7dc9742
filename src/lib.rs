//! # apk-index
//!
//! A one-shot static-site build step for APK release download pages. Your
//! filesystem is the data source: the download directory holds release
//! artifacts whose filenames carry all the metadata, and a template
//! `index.html` carries markers saying where the generated lists go.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan     download/  →  Manifest        (filenames → structured records)
//! 2. Render   Manifest   →  HTML fragments  (one block per channel)
//! 3. Update   fragments  →  index.html      (marker injection + branding)
//! ```
//!
//! Each stage is a pure function over its input (only scan and the final
//! write touch the filesystem), so unit tests exercise the whole pipeline
//! without a browser or a server. The `scan` CLI command prints the
//! manifest as human-readable JSON for debugging.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Release filename convention parser: `{prefix}_{dev\|stg}_{date}_c{build}_v{x}.{y}.{z}_release.apk` |
//! | [`scan`] | Stage 1 — lists the download directory, partitions releases per channel, sorts newest-first |
//! | [`render`] | Stage 2 — renders release cards and channel lists with Maud |
//! | [`inject`] | Marker-region protocol: all-or-nothing substitution between literal marker pairs, plus branding rewrites |
//! | [`update`] | Stage 3 — composes the final page and rewrites it in place |
//! | [`config`] | `config.toml` loading, validation, and stock config generation |
//! | [`output`] | CLI output formatting — per-channel release listings |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The generated fragments use [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system: malformed HTML is a build error,
//! interpolation is auto-escaped, and there is no template file to ship or
//! get out of sync.
//!
//! ## Explicit Marker Protocol
//!
//! The regions of the template that get rewritten are described by
//! [`inject::Region`] values with literal start/end markers. All markers
//! are located against the original document and validated before anything
//! is built, so a missing or misordered marker aborts the run with the
//! region named — the page on disk is never partially modified.
//!
//! ## Unparsable Names Are Data, Not Errors
//!
//! A `.apk` filename that doesn't match the convention is skipped, not
//! fatal — but it is recorded in the manifest and listed in scan output,
//! so a genuinely malformed release artifact doesn't disappear silently.

pub mod config;
pub mod inject;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod update;

#[cfg(test)]
pub(crate) mod test_helpers;
