use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::finance::{Transaction, TransactionKind, TransactionStatus};
use crate::domain::entities::game::Game;
use crate::domain::entities::monitor::{ServiceState, ServiceStatus};
use crate::domain::entities::security::{AlertSeverity, AlertStatus, SecurityAlert};

/// Completed transaction volume per kind, in the fixed kind order used by
/// the Financial overview chart.
pub fn volume_by_kind(transactions: &[Transaction]) -> Vec<(TransactionKind, f64)> {
    TransactionKind::ALL
        .iter()
        .map(|kind| {
            let total = transactions
                .iter()
                .filter(|tx| tx.kind == *kind && tx.status == TransactionStatus::Completed)
                .map(|tx| tx.amount)
                .sum();
            (*kind, total)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFlow {
    /// First day of the month.
    pub month: NaiveDate,
    pub deposits: f64,
    pub withdrawals: f64,
}

impl MonthlyFlow {
    pub fn net(&self) -> f64 {
        self.deposits - self.withdrawals
    }

    pub fn label(&self) -> String {
        self.month.format("%b %Y").to_string()
    }
}

/// Completed deposit and withdrawal sums grouped per calendar month,
/// chronological.
pub fn monthly_flows(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut months: BTreeMap<NaiveDate, MonthlyFlow> = BTreeMap::new();

    for tx in transactions {
        if tx.status != TransactionStatus::Completed {
            continue;
        }
        let day = tx.at.date_naive();
        let Some(month) = NaiveDate::from_ymd_opt(day.year(), day.month(), 1) else {
            continue;
        };
        let entry = months.entry(month).or_insert(MonthlyFlow {
            month,
            deposits: 0.0,
            withdrawals: 0.0,
        });
        match tx.kind {
            TransactionKind::Deposit => entry.deposits += tx.amount,
            TransactionKind::Withdrawal => entry.withdrawals += tx.amount,
            _ => {}
        }
    }

    months.into_values().collect()
}

/// The `n` newest transactions, newest first. Ties keep input order.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.at.cmp(&a.at));
    sorted.truncate(n);
    sorted
}

/// The `n` highest-revenue games, descending.
pub fn top_games(games: &[Game], n: usize) -> Vec<Game> {
    let mut sorted = games.to_vec();
    sorted.sort_by(|a, b| {
        b.total_revenue
            .partial_cmp(&a.total_revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub resolved: usize,
}

pub fn alert_counts(alerts: &[SecurityAlert]) -> AlertCounts {
    let mut counts = AlertCounts::default();
    for alert in alerts {
        match alert.severity {
            AlertSeverity::Critical => counts.critical += 1,
            AlertSeverity::High => counts.high += 1,
            AlertSeverity::Medium => counts.medium += 1,
            AlertSeverity::Low => counts.low += 1,
        }
        if alert.status == AlertStatus::Resolved {
            counts.resolved += 1;
        }
    }
    counts
}

/// Operational only when every service is; any hard outage wins over
/// degradation.
pub fn overall_status(services: &[ServiceStatus]) -> ServiceState {
    if services
        .iter()
        .all(|s| s.state == ServiceState::Operational)
    {
        ServiceState::Operational
    } else if services.iter().any(|s| s.state == ServiceState::Down) {
        ServiceState::Down
    } else {
        ServiceState::Degraded
    }
}

/// Distinct values of a free-text column, sorted, for select-box options.
pub fn distinct_values<T, F>(rows: &[T], value: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut values: Vec<String> = rows.iter().map(|row| value(row).to_string()).collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(kind: TransactionKind, status: TransactionStatus, amount: f64, month: u32) -> Transaction {
        Transaction {
            id: format!("tx-{kind}-{month}"),
            user_id: "1".to_string(),
            kind,
            amount,
            status,
            method: "Credit Card".to_string(),
            at: Utc.with_ymd_and_hms(2024, month, 5, 10, 0, 0).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn volume_by_kind_counts_only_completed() {
        let transactions = vec![
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 100.0, 1),
            tx(TransactionKind::Deposit, TransactionStatus::Pending, 50.0, 1),
            tx(TransactionKind::Withdrawal, TransactionStatus::Completed, 30.0, 1),
        ];

        let volume = volume_by_kind(&transactions);

        assert_eq!(volume[0], (TransactionKind::Deposit, 100.0));
        assert_eq!(volume[1], (TransactionKind::Withdrawal, 30.0));
        assert_eq!(volume[2], (TransactionKind::Bet, 0.0));
    }

    #[test]
    fn monthly_flows_groups_by_month_in_order() {
        let transactions = vec![
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 200.0, 2),
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 100.0, 1),
            tx(TransactionKind::Withdrawal, TransactionStatus::Completed, 80.0, 2),
            tx(TransactionKind::Bet, TransactionStatus::Completed, 500.0, 2),
        ];

        let flows = monthly_flows(&transactions);

        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].month, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(flows[0].deposits, 100.0);
        assert_eq!(flows[1].deposits, 200.0);
        assert_eq!(flows[1].withdrawals, 80.0);
        assert_eq!(flows[1].net(), 120.0, "bets should not affect the net flow");
    }

    #[test]
    fn recent_transactions_returns_newest_first() {
        let transactions = vec![
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 1.0, 1),
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 2.0, 3),
            tx(TransactionKind::Deposit, TransactionStatus::Completed, 3.0, 2),
        ];

        let recent = recent_transactions(&transactions, 2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].amount, 2.0);
        assert_eq!(recent[1].amount, 3.0);
    }

    #[test]
    fn alert_counts_tally_severity_and_resolution() {
        let alert = |severity, status| SecurityAlert {
            id: format!("alert-{severity}-{status}"),
            kind: crate::domain::entities::security::AlertKind::SuspiciousActivity,
            severity,
            status,
            user_id: "1".to_string(),
            description: String::new(),
            at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let alerts = vec![
            alert(AlertSeverity::Critical, AlertStatus::Open),
            alert(AlertSeverity::High, AlertStatus::Resolved),
            alert(AlertSeverity::High, AlertStatus::Investigating),
            alert(AlertSeverity::Low, AlertStatus::Resolved),
        ];

        let counts = alert_counts(&alerts);

        assert_eq!(counts.critical, 1);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 0);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.resolved, 2, "resolution is counted across severities");
    }

    #[test]
    fn overall_status_derivation_matches_severity_order() {
        let service = |state| ServiceStatus {
            name: "api".to_string(),
            state,
            uptime_percent: 99.9,
            response_time_ms: 40,
            last_checked: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        assert_eq!(
            overall_status(&[service(ServiceState::Operational)]),
            ServiceState::Operational
        );
        assert_eq!(
            overall_status(&[service(ServiceState::Operational), service(ServiceState::Down)]),
            ServiceState::Down
        );
        assert_eq!(
            overall_status(&[service(ServiceState::Maintenance)]),
            ServiceState::Degraded
        );
    }

    #[test]
    fn distinct_values_sorts_and_dedupes() {
        let rows = vec!["NetEnt", "Evolution", "NetEnt", "Playtech"];
        let distinct = distinct_values(&rows, |row| row);

        assert_eq!(distinct, vec!["Evolution", "NetEnt", "Playtech"]);
    }
}
