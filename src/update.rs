//! One-shot page composition and in-place rewrite.
//!
//! Stage 3 of the apk-index pipeline. Takes the scan manifest and the
//! template page, renders both channel lists, splices them between the
//! generated-list markers, applies the `<title>`/`<h1>` branding rewrites,
//! and writes the page back in place.
//!
//! The write happens only after every region has resolved and every
//! fragment is composed — a marker failure aborts before any byte touches
//! disk, so the page is never left partially modified.

use crate::inject::{self, InjectError};
use crate::naming::Channel;
use crate::render;
use crate::scan::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Inject(#[from] InjectError),
}

/// The fully composed page plus what the branding pass managed to match.
#[derive(Debug)]
pub struct ComposedPage {
    pub html: String,
    /// Whether the `<title>…APK 다운로드</title>` pattern was found and rewritten.
    pub title_rebranded: bool,
    /// Whether the `<h1>…APK</h1>` pattern was found and rewritten.
    pub heading_rebranded: bool,
}

/// Summary of an in-place page update, consumed by CLI output.
#[derive(Debug)]
pub struct UpdateReport {
    pub page: PathBuf,
    pub dev_count: usize,
    pub stg_count: usize,
    pub title_rebranded: bool,
    pub heading_rebranded: bool,
}

/// Compose the output page from a template. Pure: no filesystem access.
///
/// Both generated-list regions must resolve; branding patterns are
/// best-effort and reported via the returned flags.
pub fn compose_page(template: &str, manifest: &Manifest) -> Result<ComposedPage, InjectError> {
    let config = &manifest.config;
    let dev_html = render::render_channel_list(&manifest.dev, Channel::Dev, config).into_string();
    let stg_html = render::render_channel_list(&manifest.stg, Channel::Stg, config).into_string();

    let html = inject::inject(
        template,
        &[
            (inject::DEV_LIST, dev_html.as_str()),
            (inject::STG_LIST, stg_html.as_str()),
        ],
    )?;

    let title_interior = format!("{} ", config.display_name_ko);
    let (html, title_rebranded) =
        match inject::rebrand_first(&html, "<title>", "APK 다운로드", "</title>", &title_interior)
        {
            Some(rebranded) => (rebranded, true),
            None => (html, false),
        };

    let heading_interior = if config.icon.is_empty() {
        format!("{} ", config.display_name_ko)
    } else {
        format!("{} {} ", config.icon, config.display_name_ko)
    };
    let (html, heading_rebranded) =
        match inject::rebrand_first(&html, "<h1>", "APK", "</h1>", &heading_interior) {
            Some(rebranded) => (rebranded, true),
            None => (html, false),
        };

    Ok(ComposedPage {
        html,
        title_rebranded,
        heading_rebranded,
    })
}

/// Rewrite the site's template page in place from a scan manifest.
///
/// Reads `{root}/{page}`, composes the full output, and only then writes it
/// back. Any resolution failure propagates before the write, leaving the
/// file untouched.
pub fn update(root: &Path, manifest: &Manifest) -> Result<UpdateReport, UpdateError> {
    let page = root.join(&manifest.config.page);
    let template = fs::read_to_string(&page)?;
    let composed = compose_page(&template, manifest)?;
    fs::write(&page, &composed.html)?;

    Ok(UpdateReport {
        page,
        dev_count: manifest.dev.len(),
        stg_count: manifest.stg.len(),
        title_rebranded: composed.title_rebranded,
        heading_rebranded: composed.heading_rebranded,
    })
}
