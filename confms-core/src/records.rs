use crate::error::PortalError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use time::OffsetDateTime;
use time::macros::format_description;

/// One-line rendering of a list row
pub trait RecordSummary {
    fn summary(&self) -> String;
}

/// Entry in a user's activity history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: u64,
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogRow {
    pub id: u64,
    pub actor: String,
    pub action: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Backup archive as listed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub filename: String,
    pub size_bytes: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Client-side grouping of activity types on the history screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityGroup {
    #[default]
    All,
    Paper,
    Review,
    System,
}

/// The list screens that paginate records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Activity,
    AuditLog,
    Backup,
}

fn format_timestamp(timestamp: &OffsetDateTime) -> String {
    timestamp
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| timestamp.to_string())
}

impl ActivityGroup {
    pub const ALL: [ActivityGroup; 4] = [
        ActivityGroup::All,
        ActivityGroup::Paper,
        ActivityGroup::Review,
        ActivityGroup::System,
    ];

    pub fn activity_types(&self) -> &'static [&'static str] {
        match self {
            ActivityGroup::All => &[],
            ActivityGroup::Paper => &[
                "SUBMIT_PAPER",
                "EDIT_PAPER",
                "WITHDRAW_PAPER",
                "UPLOAD_CAMERA_READY",
            ],
            ActivityGroup::Review => &["VIEW_REVIEW", "SUBMIT_REVIEW", "UPDATE_REVIEW"],
            ActivityGroup::System => &["LOGIN", "LOGOUT", "UPDATE_PROFILE", "CHANGE_PASSWORD"],
        }
    }

    pub fn matches(&self, activity_type: &str) -> bool {
        match self {
            ActivityGroup::All => true,
            _ => self.activity_types().contains(&activity_type),
        }
    }
}

impl fmt::Display for ActivityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityGroup::All => "All activity",
            ActivityGroup::Paper => "Papers",
            ActivityGroup::Review => "Reviews",
            ActivityGroup::System => "Account",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for ActivityGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ActivityGroup::All),
            "paper" => Ok(ActivityGroup::Paper),
            "review" => Ok(ActivityGroup::Review),
            "system" => Ok(ActivityGroup::System),
            other => Err(format!(
                "unknown activity group '{}' (expected all, paper, review or system)",
                other
            )),
        }
    }
}

pub fn filter_by_group(records: &[ActivityRecord], group: ActivityGroup) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|record| group.matches(&record.activity_type))
        .cloned()
        .collect()
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Activity, RecordKind::AuditLog, RecordKind::Backup];

    /// Label used in "Showing X-Y of Z ..." lines
    pub fn item_name(&self) -> &'static str {
        match self {
            RecordKind::Activity => "activities",
            RecordKind::AuditLog => "audit log entries",
            RecordKind::Backup => "backups",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            RecordKind::Activity => "activities.json",
            RecordKind::AuditLog => "audit_log.json",
            RecordKind::Backup => "backups.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Activity => "History",
            RecordKind::AuditLog => "Audit Log",
            RecordKind::Backup => "Backups",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activity" | "history" => Ok(RecordKind::Activity),
            "audit-log" | "audit" => Ok(RecordKind::AuditLog),
            "backup" | "backups" => Ok(RecordKind::Backup),
            other => Err(format!(
                "unknown record kind '{}' (expected activity, audit-log or backup)",
                other
            )),
        }
    }
}

impl RecordSummary for ActivityRecord {
    fn summary(&self) -> String {
        format!(
            "{}  {:<20} {}",
            format_timestamp(&self.timestamp),
            self.activity_type,
            self.description
        )
    }
}

impl RecordSummary for AuditLogRow {
    fn summary(&self) -> String {
        match &self.target {
            Some(target) => format!(
                "{}  {} {} {}",
                format_timestamp(&self.timestamp),
                self.actor,
                self.action,
                target
            ),
            None => format!(
                "{}  {} {}",
                format_timestamp(&self.timestamp),
                self.actor,
                self.action
            ),
        }
    }
}

impl RecordSummary for BackupFile {
    fn summary(&self) -> String {
        let size_mb = self.size_bytes as f64 / (1024.0 * 1024.0);
        format!(
            "{}  {} ({:.1} MB)",
            format_timestamp(&self.created_at),
            self.filename,
            size_mb
        )
    }
}

/// Parse a JSON array of records, the shape list endpoints return
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, PortalError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PortalError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<T> = parse_records(&contents)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
