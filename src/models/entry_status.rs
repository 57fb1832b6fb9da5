use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    InProgress,
    OnBreak,
    Completed,
}

impl EntryStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::InProgress => "in_progress",
            EntryStatus::OnBreak => "on_break",
            EntryStatus::Completed => "completed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(EntryStatus::InProgress),
            "on_break" => Some(EntryStatus::OnBreak),
            "completed" => Some(EntryStatus::Completed),
            _ => None,
        }
    }

    /// Helper: accept CLI input in any case, with '-' or '_'
    pub fn from_cli(s: &str) -> Option<Self> {
        Self::from_db_str(&s.to_lowercase().replace('-', "_"))
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, EntryStatus::Completed)
    }
}
