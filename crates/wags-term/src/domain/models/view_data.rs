use wags_types::Message;
use wags_types::MessageStatus;

/// Counters shown on the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub sent: usize,
    pub failed: usize,
}

impl DashboardStats {
    pub fn from_messages(messages: &[Message]) -> DashboardStats {
        let mut stats = DashboardStats {
            total: messages.len(),
            ..Default::default()
        };

        for message in messages {
            match message.status {
                MessageStatus::Sent => stats.sent += 1,
                MessageStatus::Failed => stats.failed += 1,
                _ => {}
            }
        }

        return stats;
    }
}

/// Years that have data, plus the entry the year filters start on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct YearsSelection {
    pub years: Vec<i32>,
    pub default: Option<i32>,
}

impl YearsSelection {
    /// Current year when the server lists it, otherwise the first listed year.
    pub fn new(years: Vec<i32>, current_year: i32) -> YearsSelection {
        let default = if years.contains(&current_year) {
            Some(current_year)
        } else {
            years.first().copied()
        };

        YearsSelection { years, default }
    }

    pub fn fallback(current_year: i32) -> YearsSelection {
        YearsSelection {
            years: vec![current_year],
            default: Some(current_year),
        }
    }
}

/// Which send form produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendKind {
    Message,
    Bulk,
}

/// Identifier handed back by one of the send endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Message(i64),
    Bulk(i64),
}
