//! Traffic source attribution.
//!
//! Maps the page referrer and the `utm_source` query parameter to a small set
//! of named marketing channels. UTM tags are set deliberately by campaigns, so
//! a non-empty `utm_source` always takes priority over the referrer.
//!
//! Matching is a case-insensitive substring test against short keyword lists.

use serde::{Deserialize, Serialize};

const NAVER_POWERLINK: &str = "네이버 파워링크";
const NAVER_SEARCH: &str = "네이버 검색";
const DAANGN: &str = "당근";
const INSTAGRAM: &str = "인스타";
const OTHER: &str = "기타";
const DIRECT: &str = "direct";

/// The channel a visitor is inferred to have arrived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrafficSource {
    /// Paid Naver search ad, tagged through `utm_source`.
    NaverPowerLink,
    /// Organic Naver search, from the referrer.
    NaverSearch,
    /// Daangn classifieds.
    Daangn,
    Instagram,
    /// A UTM source that matches no known platform, kept verbatim.
    Campaign(String),
    /// A referrer that matches no known platform.
    Other,
    /// Neither a UTM source nor a referrer was present.
    Direct,
}

impl TrafficSource {
    pub fn label(&self) -> &str {
        match self {
            TrafficSource::NaverPowerLink => NAVER_POWERLINK,
            TrafficSource::NaverSearch => NAVER_SEARCH,
            TrafficSource::Daangn => DAANGN,
            TrafficSource::Instagram => INSTAGRAM,
            TrafficSource::Campaign(raw) => raw,
            TrafficSource::Other => OTHER,
            TrafficSource::Direct => DIRECT,
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Classifies a visit from its referrer and `utm_source` parameter.
///
/// Both inputs may be empty. The result is a pure function of the two.
pub fn classify(referrer: &str, utm_source: &str) -> TrafficSource {
    let utm = utm_source.trim();
    if !utm.is_empty() {
        let lower = utm.to_lowercase();
        return if contains_any(&lower, &["naver", "네이버"]) {
            TrafficSource::NaverPowerLink
        } else if contains_any(&lower, &["daangn", "당근"]) {
            TrafficSource::Daangn
        } else if contains_any(&lower, &["insta", "instagram", "인스타"]) {
            TrafficSource::Instagram
        } else {
            TrafficSource::Campaign(utm.to_string())
        };
    }

    let referrer = referrer.trim();
    if referrer.is_empty() {
        return TrafficSource::Direct;
    }

    let lower = referrer.to_lowercase();
    if contains_any(&lower, &["naver.com", "search.naver"]) {
        TrafficSource::NaverSearch
    } else if contains_any(&lower, &["daangn.com", "당근"]) {
        TrafficSource::Daangn
    } else if contains_any(&lower, &["instagram.com", "instagr.am"]) {
        TrafficSource::Instagram
    } else {
        TrafficSource::Other
    }
}

/// Attribution fields captured once per page load and stored with the lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    pub referrer_url: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub source: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl Attribution {
    /// Builds the stored attribution from the raw browser inputs.
    ///
    /// An empty referrer is recorded as `"direct"`, empty UTM values as absent.
    pub fn capture(referrer: &str, utm_source: &str, utm_medium: &str, utm_campaign: &str) -> Self {
        Self {
            referrer_url: Some(non_empty(referrer).unwrap_or_else(|| DIRECT.to_string())),
            utm_source: non_empty(utm_source),
            utm_medium: non_empty(utm_medium),
            utm_campaign: non_empty(utm_campaign),
            source: Some(classify(referrer, utm_source).label().to_string()),
        }
    }
}
