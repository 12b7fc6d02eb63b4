//! Business actions a tracking declaration can state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::http::HttpMethod;
use crate::errors::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackingAction {
    Show,
    Edit,
    Delete,
    Save,
    Search,
    Insert,
    Copy,
    Autosave,
    Ignore,
}

impl TrackingAction {
    pub const ALL: [TrackingAction; 9] = [
        Self::Show,
        Self::Edit,
        Self::Delete,
        Self::Save,
        Self::Search,
        Self::Insert,
        Self::Copy,
        Self::Autosave,
        Self::Ignore,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "SHOW",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
            Self::Save => "SAVE",
            Self::Search => "SEARCH",
            Self::Insert => "INSERT",
            Self::Copy => "COPY",
            Self::Autosave => "AUTOSAVE",
            Self::Ignore => "IGNORE",
        }
    }

    /// The single HTTP verb this action canonically implies.
    /// `IGNORE` implies nothing.
    pub fn implied_http_method(self) -> Option<HttpMethod> {
        match self {
            Self::Show | Self::Search => Some(HttpMethod::Get),
            Self::Edit => Some(HttpMethod::Put),
            Self::Delete => Some(HttpMethod::Delete),
            Self::Save | Self::Insert | Self::Copy | Self::Autosave => Some(HttpMethod::Post),
            Self::Ignore => None,
        }
    }

    pub fn is_ignore(self) -> bool {
        self == Self::Ignore
    }
}

impl fmt::Display for TrackingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownAction(s.to_string()))
    }
}
