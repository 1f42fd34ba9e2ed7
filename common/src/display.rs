//! Presentation helpers shared by the admin dashboard, the landing page and
//! the notification sink.
//!
//! Times are shown in Korea Standard Time (UTC+9, no daylight saving) in the
//! shapes the ko-KR locale produces.

use crate::model::application::Application;
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use url::Url;

const KST_OFFSET_SECS: i32 = 9 * 3600;
const DIRECT_ACCESS: &str = "직접 접근";

fn kst(dt: &DateTime<Utc>) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(KST_OFFSET_SECS).expect("+09:00 is a valid offset");
    dt.with_timezone(&offset)
}

fn meridiem(is_pm: bool) -> &'static str {
    if is_pm { "오후" } else { "오전" }
}

/// `2025. 01. 05. 오후 03:04` — the admin table's created-at column.
pub fn format_admin_timestamp(dt: &DateTime<Utc>) -> String {
    let local = kst(dt);
    let (is_pm, hour) = local.hour12();
    format!(
        "{}. {:02}. {:02}. {} {:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        meridiem(is_pm),
        hour,
        local.minute()
    )
}

/// `2025. 1. 5. 오후 3:04:05` — the registration time in notifications.
pub fn format_notification_timestamp(dt: &DateTime<Utc>) -> String {
    let local = kst(dt);
    let (is_pm, hour) = local.hour12();
    format!(
        "{}. {}. {}. {} {}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        meridiem(is_pm),
        hour,
        local.minute(),
        local.second()
    )
}

/// Host of an absolute URL without a leading `www.`, or `None` when the
/// string is not an absolute URL. Hosts come back lowercased; IPv6 hosts keep
/// their brackets.
fn referrer_host(referrer: &str) -> Option<String> {
    let url = Url::parse(referrer).ok()?;
    let host = url.host_str().filter(|h| !h.is_empty())?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// The channel label shown for a row: the classified source, then the raw
/// UTM source, then the referrer host, then "direct access".
pub fn source_display(app: &Application) -> String {
    if let Some(source) = app.source.as_deref().filter(|s| !s.is_empty()) {
        return source.to_string();
    }
    if let Some(utm) = app.utm_source.as_deref().filter(|s| !s.is_empty()) {
        return utm.to_string();
    }
    match app.referrer_url.as_deref() {
        Some(referrer) if !referrer.is_empty() && referrer != "direct" => {
            referrer_host(referrer).unwrap_or_else(|| referrer.to_string())
        }
        _ => DIRECT_ACCESS.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceBadge {
    Naver,
    Daangn,
    Instagram,
    Direct,
    Other,
}

impl SourceBadge {
    pub fn for_label(label: &str) -> Self {
        if label.contains("네이버") {
            SourceBadge::Naver
        } else if label.contains("당근") {
            SourceBadge::Daangn
        } else if label.contains("인스타") {
            SourceBadge::Instagram
        } else if label == DIRECT_ACCESS {
            SourceBadge::Direct
        } else {
            SourceBadge::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SourceBadge::Naver => "badge badge-blue",
            SourceBadge::Daangn => "badge badge-orange",
            SourceBadge::Instagram => "badge badge-pink",
            SourceBadge::Direct => "badge badge-gray",
            SourceBadge::Other => "badge badge-purple",
        }
    }
}

/// Plain-text summary of a lead, copied to the clipboard from the dashboard.
pub fn summary_text(app: &Application) -> String {
    let mut text = format!(
        "이름: {}\n연락처: {}\n지역: {}\n유입 경로: {}\n신청일시: {}\n",
        app.name,
        app.contact,
        app.region,
        app.source.as_deref().unwrap_or(DIRECT_ACCESS),
        format_admin_timestamp(&app.created_at),
    );
    if !app.checkbox_selection.is_empty() {
        text.push_str(&format!("선택 항목: {}\n", app.checkbox_selection.join(", ")));
    }
    text
}

/// Layout measurements sampled on every scroll event, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub main_top: f64,
    pub main_height: f64,
    pub form_top: f64,
    pub footer_top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaColor {
    Black,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaState {
    pub visible: bool,
    pub color: CtaColor,
}

/// How close (px) the viewport bottom may get to the form or footer before
/// the floating button hides.
const CTA_HIDE_MARGIN: f64 = 100.0;

/// Decides whether the floating call-to-action is shown and in which colour.
pub fn cta_visibility(m: &ScrollMetrics) -> CtaState {
    let viewport_bottom = m.scroll_y + m.viewport_height;
    let form_visible = viewport_bottom >= m.form_top - CTA_HIDE_MARGIN;
    let footer_visible = viewport_bottom >= m.footer_top - CTA_HIDE_MARGIN;
    let main_middle = m.main_top + m.main_height / 2.0;

    CtaState {
        visible: !form_visible && !footer_visible,
        color: if m.scroll_y < main_middle {
            CtaColor::Black
        } else {
            CtaColor::Blue
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::application::Region;
    use chrono::TimeZone;

    fn application() -> Application {
        let created = Utc.with_ymd_and_hms(2025, 1, 5, 6, 4, 5).unwrap();
        Application {
            id: "a1".into(),
            name: "홍길동".into(),
            contact: "010-1234-5678".into(),
            region: Region::GyeonggiIncheon,
            privacy_consent: true,
            checkbox_selection: vec![],
            referrer_url: Some("direct".into()),
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            source: None,
            delivered_at: None,
            delivered_to: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn timestamps_are_rendered_in_kst() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 5, 6, 4, 5).unwrap();
        assert_eq!(format_admin_timestamp(&dt), "2025. 01. 05. 오후 03:04");
        assert_eq!(format_notification_timestamp(&dt), "2025. 1. 5. 오후 3:04:05");

        let midnight = Utc.with_ymd_and_hms(2024, 12, 31, 15, 0, 0).unwrap();
        assert_eq!(format_notification_timestamp(&midnight), "2025. 1. 1. 오전 12:00:00");
    }

    #[test]
    fn source_display_fallbacks() {
        let mut app = application();
        assert_eq!(source_display(&app), "직접 접근");

        app.referrer_url = Some("https://www.google.com/search?q=x".into());
        assert_eq!(source_display(&app), "google.com");

        app.referrer_url = Some("android-app".into());
        assert_eq!(source_display(&app), "android-app");

        app.utm_source = Some("kakao".into());
        assert_eq!(source_display(&app), "kakao");

        app.source = Some("인스타".into());
        assert_eq!(source_display(&app), "인스타");
    }

    #[test]
    fn referrer_hosts_are_normalised() {
        assert_eq!(referrer_host("https://WWW.Google.COM/search").as_deref(), Some("google.com"));
        assert_eq!(referrer_host("http://[::1]:8080/x").as_deref(), Some("[::1]"));
        assert_eq!(
            referrer_host("https://user@www.example.com:443/").as_deref(),
            Some("example.com")
        );
        assert_eq!(referrer_host("https://m.www.example.com/").as_deref(), Some("m.www.example.com"));
        assert_eq!(referrer_host("android-app"), None);
        assert_eq!(referrer_host("mailto:someone@example.com"), None);

        let mut app = application();
        app.referrer_url = Some("https://WWW.Naver.COM/".into());
        assert_eq!(source_display(&app), "naver.com");
    }

    #[test]
    fn badge_colours() {
        assert_eq!(SourceBadge::for_label("네이버 검색"), SourceBadge::Naver);
        assert_eq!(SourceBadge::for_label("당근"), SourceBadge::Daangn);
        assert_eq!(SourceBadge::for_label("인스타"), SourceBadge::Instagram);
        assert_eq!(SourceBadge::for_label("직접 접근"), SourceBadge::Direct);
        assert_eq!(SourceBadge::for_label("direct"), SourceBadge::Other);
    }

    #[test]
    fn summary_lists_selection_only_when_present() {
        let mut app = application();
        let text = summary_text(&app);
        assert_eq!(
            text,
            "이름: 홍길동\n연락처: 010-1234-5678\n지역: 경기인천\n유입 경로: 직접 접근\n신청일시: 2025. 01. 05. 오후 03:04\n"
        );

        app.checkbox_selection = vec!["a".into(), "b".into()];
        assert!(summary_text(&app).ends_with("선택 항목: a, b\n"));
    }

    #[test]
    fn cta_hides_near_form_and_recolours_past_midpoint() {
        let mut m = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 800.0,
            main_top: 100.0,
            main_height: 2000.0,
            form_top: 2200.0,
            footer_top: 3000.0,
        };
        assert_eq!(
            cta_visibility(&m),
            CtaState { visible: true, color: CtaColor::Black }
        );

        m.scroll_y = 1200.0;
        assert_eq!(
            cta_visibility(&m),
            CtaState { visible: true, color: CtaColor::Blue }
        );

        m.scroll_y = 1300.0;
        assert!(!cta_visibility(&m).visible);
    }
}
