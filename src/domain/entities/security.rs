use chrono::{DateTime, Utc};

use crate::domain::table::{FieldValue, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 4] = [
        AlertSeverity::Low,
        AlertSeverity::Medium,
        AlertSeverity::High,
        AlertSeverity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Fraud,
    SuspiciousActivity,
    MultipleAccounts,
    Chargeback,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Fraud,
        AlertKind::SuspiciousActivity,
        AlertKind::MultipleAccounts,
        AlertKind::Chargeback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Fraud => "fraud",
            AlertKind::SuspiciousActivity => "suspicious_activity",
            AlertKind::MultipleAccounts => "multiple_accounts",
            AlertKind::Chargeback => "chargeback",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Open,
    Investigating,
    Resolved,
    FalsePositive,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Open,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
        AlertStatus::FalsePositive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Open => "open",
            AlertStatus::Investigating => "investigating",
            AlertStatus::Resolved => "resolved",
            AlertStatus::FalsePositive => "false_positive",
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk event raised against an account, listed on the Security page.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityAlert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub user_id: String,
    pub description: String,
    pub at: DateTime<Utc>,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertField {
    Kind,
    Severity,
    UserId,
    Status,
    At,
}

impl Tabular for SecurityAlert {
    type Field = AlertField;

    fn field(&self, field: AlertField) -> FieldValue {
        match field {
            AlertField::Kind => FieldValue::Text(self.kind.as_str().to_string()),
            AlertField::Severity => FieldValue::Text(self.severity.as_str().to_string()),
            AlertField::UserId => FieldValue::Text(self.user_id.clone()),
            AlertField::Status => FieldValue::Text(self.status.as_str().to_string()),
            AlertField::At => FieldValue::Timestamp(self.at),
        }
    }
}
