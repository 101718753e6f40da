use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use strum::EnumString;

/// Missing or `null` fields decode to their empty value so one sparse event
/// never rejects the whole feed.
#[serde_as]
#[derive(Deserialize, Debug, Eq, PartialEq, Clone)]
pub struct Event {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub r#type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub repo: Repo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub payload: Payload,
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::from_str(&self.r#type)
            .unwrap_or_else(|_| EventKind::Other(self.r#type.clone()))
    }
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Repo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
}

/// Type-dependent detail. Only the fields a given event type carries are
/// present; the rest stay `None`.
#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Payload {
    #[serde_as(deserialize_as = "Option<Vec<DefaultOnNull>>")]
    pub commits: Option<Vec<Commit>>,
    pub action: Option<String>,
    pub issue: Option<Issue>,
}

impl Payload {
    pub fn commit_count(&self) -> usize {
        self.commits.as_ref().map_or(0, Vec::len)
    }

    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or_default()
    }

    pub fn issue_title(&self) -> &str {
        self.issue
            .as_ref()
            .map(|issue| issue.title.as_str())
            .unwrap_or_default()
    }
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Commit {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Issue {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Eq, PartialEq, Clone, EnumString)]
pub enum EventKind {
    #[strum(serialize = "PushEvent")]
    Push,
    #[strum(serialize = "IssuesEvent")]
    Issues,
    #[strum(serialize = "WatchEvent")]
    Watch,
    #[strum(serialize = "CreateEvent")]
    Create,
    #[strum(serialize = "PullRequestEvent")]
    PullRequest,
    #[strum(default)]
    Other(String),
}
