//! The consultation application row and its region enumeration.
//!
//! `Application` is the full row as stored in `consultation_applications`;
//! `NewApplication` is what the public form hands to the datastore, without
//! any of the fields the datastore assigns (id, delivery markers, timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three fixed geographic buckets offered by the form.
///
/// Serialized with the labels shown to visitors so rows stay readable in the
/// datastore and in exported notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "서울")]
    Seoul,
    #[serde(rename = "경기인천")]
    GyeonggiIncheon,
    #[serde(rename = "그 외지역")]
    Other,
}

impl Region {
    /// Display order of the region options in the form.
    pub const ALL: [Region; 3] = [Region::Seoul, Region::GyeonggiIncheon, Region::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Seoul => "서울",
            Region::GyeonggiIncheon => "경기인천",
            Region::Other => "그 외지역",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// A lead as inserted by the public form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub contact: String,
    pub region: Region,
    pub privacy_consent: bool,
    #[serde(default)]
    pub checkbox_selection: Vec<String>,
    #[serde(default)]
    pub referrer_url: Option<String>,
    #[serde(default)]
    pub utm_source: Option<String>,
    #[serde(default)]
    pub utm_medium: Option<String>,
    #[serde(default)]
    pub utm_campaign: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// A stored lead, including the datastore-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub region: Region,
    pub privacy_consent: bool,
    #[serde(default)]
    pub checkbox_selection: Vec<String>,
    pub referrer_url: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub source: Option<String>,
    pub delivered_at: Option<DateTime<Utc>>,
    /// Reserved for the staff member a lead was handed to. Never written.
    pub delivered_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }
}
