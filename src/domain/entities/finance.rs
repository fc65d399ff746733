use chrono::{DateTime, Utc};

use crate::domain::table::{FieldValue, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Bet,
    Win,
    Bonus,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 5] = [
        TransactionKind::Deposit,
        TransactionKind::Withdrawal,
        TransactionKind::Bet,
        TransactionKind::Win,
        TransactionKind::Bonus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Bet => "bet",
            TransactionKind::Win => "win",
            TransactionKind::Bonus => "bonus",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Pending,
        TransactionStatus::Completed,
        TransactionStatus::Failed,
        TransactionStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger entry on the Financial Reports page.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub status: TransactionStatus,
    pub method: String,
    pub at: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionField {
    UserId,
    Kind,
    Amount,
    Status,
    Method,
    At,
    Description,
}

impl Tabular for Transaction {
    type Field = TransactionField;

    fn field(&self, field: TransactionField) -> FieldValue {
        match field {
            TransactionField::UserId => FieldValue::Text(self.user_id.clone()),
            TransactionField::Kind => FieldValue::Text(self.kind.as_str().to_string()),
            TransactionField::Amount => FieldValue::Amount(self.amount),
            TransactionField::Status => FieldValue::Text(self.status.as_str().to_string()),
            TransactionField::Method => FieldValue::Text(self.method.clone()),
            TransactionField::At => FieldValue::Timestamp(self.at),
            TransactionField::Description => FieldValue::Text(self.description.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawMethod {
    BankTransfer,
    PayPal,
    Bitcoin,
    Ethereum,
}

impl WithdrawMethod {
    pub const ALL: [WithdrawMethod; 4] = [
        WithdrawMethod::BankTransfer,
        WithdrawMethod::PayPal,
        WithdrawMethod::Bitcoin,
        WithdrawMethod::Ethereum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawMethod::BankTransfer => "Bank Transfer",
            WithdrawMethod::PayPal => "PayPal",
            WithdrawMethod::Bitcoin => "Bitcoin",
            WithdrawMethod::Ethereum => "Ethereum",
        }
    }
}

impl std::fmt::Display for WithdrawMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawStatus {
    Pending,
    Approved,
    Rejected,
}

impl WithdrawStatus {
    pub const ALL: [WithdrawStatus; 3] = [
        WithdrawStatus::Pending,
        WithdrawStatus::Approved,
        WithdrawStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawStatus::Pending => "pending",
            WithdrawStatus::Approved => "approved",
            WithdrawStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for WithdrawStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A withdrawal request on the Withdraw History page. Pending requests have
/// no `processed_at` yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRecord {
    pub id: String,
    pub username: String,
    pub amount: f64,
    pub method: WithdrawMethod,
    pub status: WithdrawStatus,
    pub requested_at: DateTime<Utc>,
    pub transaction_id: String,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawField {
    Username,
    Amount,
    Method,
    Status,
    RequestedAt,
    TransactionId,
    ProcessedAt,
}

impl Tabular for WithdrawRecord {
    type Field = WithdrawField;

    fn field(&self, field: WithdrawField) -> FieldValue {
        match field {
            WithdrawField::Username => FieldValue::Text(self.username.clone()),
            WithdrawField::Amount => FieldValue::Amount(self.amount),
            WithdrawField::Method => FieldValue::Text(self.method.as_str().to_string()),
            WithdrawField::Status => FieldValue::Text(self.status.as_str().to_string()),
            WithdrawField::RequestedAt => FieldValue::Timestamp(self.requested_at),
            WithdrawField::TransactionId => FieldValue::Text(self.transaction_id.clone()),
            WithdrawField::ProcessedAt => self
                .processed_at
                .map(FieldValue::Timestamp)
                .unwrap_or(FieldValue::Missing),
        }
    }
}
