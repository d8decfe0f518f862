use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Company, Ref, UserSummary};

/// Fixed status vocabulary of a job application.
///
/// The client does not check transition legality; the server owns that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Screening,
    Shortlisted,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Screening => "Screening",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown application status '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|s| s.as_str()).join(", ")
                )
            })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationJob {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: Option<Ref<Company>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,

    pub job: Ref<ApplicationJob>,

    #[serde(default)]
    pub user: Option<Ref<UserSummary>>,

    #[serde(rename = "resume_url", default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,

    /// Kept as text: statuses outside the known vocabulary are shown verbatim.
    pub status: String,

    #[serde(default)]
    pub applied_at: Option<String>,

    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Application {
    pub fn known_status(&self) -> Option<ApplicationStatus> {
        self.status.parse().ok()
    }
}

impl super::Identified for ApplicationJob {
    fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}
