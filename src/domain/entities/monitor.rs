use chrono::{DateTime, Utc};

use crate::domain::entities::security::AlertSeverity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Operational,
    Degraded,
    Down,
    Maintenance,
}

impl ServiceState {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceState::Operational => "operational",
            ServiceState::Degraded => "degraded",
            ServiceState::Down => "down",
            ServiceState::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health of one platform service on the System Status page.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
    pub uptime_percent: f64,
    pub response_time_ms: i64,
    pub last_checked: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentStatus {
    Investigating,
    Identified,
    Monitoring,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Identified => "identified",
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: AlertSeverity,
    pub status: IncidentStatus,
    pub started_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub affected_services: Vec<String>,
}

/// Headline numbers for the dashboard overview cards. Change figures are
/// percentages against the previous period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsSnapshot {
    pub total_revenue: f64,
    pub total_users: i64,
    pub active_users: i64,
    pub total_games: i64,
    pub total_transactions: i64,
    pub revenue_change: f64,
    pub user_change: f64,
    pub game_change: f64,
    pub transaction_change: f64,
}
