//! HTML fragment rendering for release lists.
//!
//! Stage 2 of the apk-index pipeline. Turns a channel's sorted release list
//! into the HTML block that [`crate::inject`] splices between the page's
//! generated-list markers.
//!
//! Rendering is pure and deterministic: the same records, channel, and
//! config always produce the same text. The first record of a non-empty
//! list is the latest release and gets distinct labels; an empty list
//! renders a fixed placeholder comment so the region is never blank.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating,
//! with automatic escaping of all interpolated values.

use crate::config::SiteConfig;
use crate::naming::{self, Channel, ReleaseRecord};
use maud::{Markup, PreEscaped, html};

/// Placeholder spliced in for a channel with no releases. A visible marker
/// beats an empty region when eyeballing the generated page source.
const EMPTY_LIST_PLACEHOLDER: &str = "<!-- 목록 없음 -->";

/// Render one channel's full list block.
///
/// The first record renders as the latest release, the rest as previous
/// releases. An empty list yields the fixed placeholder comment.
pub fn render_channel_list(
    releases: &[ReleaseRecord],
    channel: Channel,
    config: &SiteConfig,
) -> Markup {
    if releases.is_empty() {
        return PreEscaped(EMPTY_LIST_PLACEHOLDER.to_string());
    }
    html! {
        @for (idx, release) in releases.iter().enumerate() {
            (render_release_card(release, idx == 0, channel, config))
        }
    }
}

/// Render a single release card.
pub fn render_release_card(
    release: &ReleaseRecord,
    latest: bool,
    channel: Channel,
    config: &SiteConfig,
) -> Markup {
    let version_label = format!("v{}", release.version);
    let build_label = format!("c{}", release.build);
    let date_label = naming::format_date(&release.date);
    let href = format!("./{}/{}", config.download_dir, release.filename);
    let status = if latest { "🟢 최신" } else { "🔵 이전" };

    html! {
        div.app-item {
            div.app-header {
                div.app-icon { (config.icon) }
                div.app-info {
                    h3 { (config.display_name_ko) " " (version_label) }
                    p { (subtitle(channel, latest)) }
                }
            }
            div.app-details {
                (detail_row("버전", html! { span.version-badge { (version_label) } }))
                (detail_row("빌드", html! { (build_label) }))
                (detail_row("출시일", html! { (date_label) }))
                (detail_row("상태", html! { (status) }))
            }
            a.download-btn href=(href) download { "다운로드" }
        }
    }
}

/// One label/value row in the card's detail grid.
fn detail_row(label: &str, value: Markup) -> Markup {
    html! {
        div.detail-item {
            div.detail-label { (label) }
            div.detail-value { (value) }
        }
    }
}

/// Card subtitle. The latest release is recommended; previous dev releases
/// historically drop the channel label from their subtitle.
fn subtitle(channel: Channel, latest: bool) -> String {
    match (channel, latest) {
        (_, true) => format!("최신 {} 버전 (권장)", channel.label_ko()),
        (Channel::Dev, false) => "이전 버전".to_string(),
        (Channel::Stg, false) => format!("이전 {} 버전", channel.label_ko()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_release_name;

    fn record(name: &str) -> ReleaseRecord {
        parse_release_name(name, "app").unwrap()
    }

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let html = render_channel_list(&[], Channel::Dev, &config()).into_string();
        assert_eq!(html, "<!-- 목록 없음 -->");
    }

    #[test]
    fn card_embeds_version_build_date_and_link() {
        let r = record("app_dev_20251010_c101_v1.1.70_release.apk");
        let html = render_release_card(&r, true, Channel::Dev, &config()).into_string();

        assert!(html.contains("v1.1.70"));
        assert!(html.contains("c101"));
        assert!(html.contains("2025-10-10"));
        assert!(html.contains(r#"href="./download/app_dev_20251010_c101_v1.1.70_release.apk""#));
        assert!(html.contains("다운로드"));
    }

    #[test]
    fn card_embeds_display_name_and_icon() {
        let r = record("app_dev_20251010_c101_v1.1.70_release.apk");
        let html = render_release_card(&r, true, Channel::Dev, &config()).into_string();

        assert!(html.contains("데모 앱 v1.1.70"));
        assert!(html.contains("📱"));
    }

    #[test]
    fn only_first_card_is_latest() {
        let releases = vec![
            record("app_dev_20251010_c101_v1.1.70_release.apk"),
            record("app_dev_20251009_c100_v1.1.69_release.apk"),
            record("app_dev_20251008_c99_v1.1.68_release.apk"),
        ];
        let html = render_channel_list(&releases, Channel::Dev, &config()).into_string();

        assert_eq!(html.matches("🟢 최신").count(), 1);
        assert_eq!(html.matches("🔵 이전").count(), 2);
        // The latest card comes first
        assert!(html.find("🟢 최신").unwrap() < html.find("🔵 이전").unwrap());
    }

    #[test]
    fn subtitles_differ_per_channel_and_recency() {
        assert_eq!(subtitle(Channel::Dev, true), "최신 개발 버전 (권장)");
        assert_eq!(subtitle(Channel::Stg, true), "최신 스테이징 버전 (권장)");
        assert_eq!(subtitle(Channel::Dev, false), "이전 버전");
        assert_eq!(subtitle(Channel::Stg, false), "이전 스테이징 버전");
    }

    #[test]
    fn rendering_is_deterministic() {
        let releases = vec![
            record("app_stg_20251010_c101_v1.1.70_release.apk"),
            record("app_stg_20251009_c100_v1.1.69_release.apk"),
        ];
        let a = render_channel_list(&releases, Channel::Stg, &config()).into_string();
        let b = render_channel_list(&releases, Channel::Stg, &config()).into_string();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_config_flows_into_card() {
        let r = record("app_dev_20251010_c101_v1.1.70_release.apk");
        let cfg = SiteConfig {
            icon: "🚀".to_string(),
            display_name_ko: "마이앱".to_string(),
            download_dir: "files".to_string(),
            ..SiteConfig::default()
        };
        let html = render_release_card(&r, false, Channel::Dev, &cfg).into_string();

        assert!(html.contains("🚀"));
        assert!(html.contains("마이앱 v1.1.70"));
        assert!(html.contains(r#"href="./files/app_dev_20251010_c101_v1.1.70_release.apk""#));
    }
}
