//! Browse criteria

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// What the file browser is currently asking to see.
///
/// The default value selects everything in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against file names.
    pub query: String,
    pub type_filter: TypeFilter,
    pub date_filter: DateFilter,
    pub sort: SortKey,
}

/// Mime-type family restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Image,
    Video,
    Audio,
    Text,
    Application,
}

impl TypeFilter {
    /// Mime prefix a file's type must start with, or `None` for all files.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Image => Some("image/"),
            TypeFilter::Video => Some("video/"),
            TypeFilter::Audio => Some("audio/"),
            TypeFilter::Text => Some("text/"),
            TypeFilter::Application => Some("application/"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Image => "image",
            TypeFilter::Video => "video",
            TypeFilter::Audio => "audio",
            TypeFilter::Text => "text",
            TypeFilter::Application => "application",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(TypeFilter::All),
            "image" => Some(TypeFilter::Image),
            "video" => Some(TypeFilter::Video),
            "audio" => Some(TypeFilter::Audio),
            "text" => Some(TypeFilter::Text),
            "application" => Some(TypeFilter::Application),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recency restriction against the last-modified timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    Any,
    /// Modified within the last 24 hours.
    Today,
    /// Modified within the last 7 days.
    Week,
    /// Modified within the last 30 days.
    Month,
}

impl DateFilter {
    /// How far back the window reaches, or `None` for no restriction.
    pub fn window(&self) -> Option<Duration> {
        match self {
            DateFilter::Any => None,
            DateFilter::Today => Some(Duration::hours(24)),
            DateFilter::Week => Some(Duration::days(7)),
            DateFilter::Month => Some(Duration::days(30)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::Any => "any",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "any" => Some(DateFilter::Any),
            "today" => Some(DateFilter::Today),
            "week" => Some(DateFilter::Week),
            "month" => Some(DateFilter::Month),
            _ => None,
        }
    }
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the order the backend returned.
    #[default]
    Unsorted,
    NameAsc,
    SizeDesc,
    ModifiedDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::NameAsc => "name-asc",
            SortKey::SizeDesc => "size-desc",
            SortKey::ModifiedDesc => "modified-desc",
        }
    }

    /// Unknown keys fall back to `Unsorted` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s {
            "name-asc" => SortKey::NameAsc,
            "size-desc" => SortKey::SizeDesc,
            "modified-desc" => SortKey::ModifiedDesc,
            _ => SortKey::Unsorted,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
