use chrono::{DateTime, Utc};

use crate::domain::table::{FieldValue, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Suspended,
    Pending,
    Blocked,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Suspended,
        UserStatus::Pending,
        UserStatus::Blocked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
            UserStatus::Pending => "pending",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycStatus {
    Verified,
    Pending,
    Rejected,
    NotSubmitted,
}

impl KycStatus {
    pub const ALL: [KycStatus; 4] = [
        KycStatus::Verified,
        KycStatus::Pending,
        KycStatus::Rejected,
        KycStatus::NotSubmitted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KycStatus::Verified => "verified",
            KycStatus::Pending => "pending",
            KycStatus::Rejected => "rejected",
            KycStatus::NotSubmitted => "not_submitted",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform account as shown on the Users page.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub status: UserStatus,
    pub kyc_status: KycStatus,
    pub balance: f64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub registered_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub country: String,
    pub vip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
    FullName,
    Status,
    KycStatus,
    Balance,
    Country,
    RegisteredAt,
    LastLogin,
}

impl Tabular for User {
    type Field = UserField;

    fn field(&self, field: UserField) -> FieldValue {
        match field {
            UserField::Username => FieldValue::Text(self.username.clone()),
            UserField::Email => FieldValue::Text(self.email.clone()),
            UserField::FullName => FieldValue::Text(self.full_name.clone()),
            UserField::Status => FieldValue::Text(self.status.as_str().to_string()),
            UserField::KycStatus => FieldValue::Text(self.kyc_status.as_str().to_string()),
            UserField::Balance => FieldValue::Amount(self.balance),
            UserField::Country => FieldValue::Text(self.country.clone()),
            UserField::RegisteredAt => FieldValue::Timestamp(self.registered_at),
            UserField::LastLogin => FieldValue::Timestamp(self.last_login),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VipLevel {
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl VipLevel {
    pub const ALL: [VipLevel; 5] = [
        VipLevel::None,
        VipLevel::Bronze,
        VipLevel::Silver,
        VipLevel::Gold,
        VipLevel::Platinum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VipLevel::None => "none",
            VipLevel::Bronze => "bronze",
            VipLevel::Silver => "silver",
            VipLevel::Gold => "gold",
            VipLevel::Platinum => "platinum",
        }
    }
}

impl std::fmt::Display for VipLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated play statistics for one player, shown on Player Management.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub status: UserStatus,
    pub vip_level: VipLevel,
    pub total_bets: i64,
    pub total_wins: i64,
    pub total_losses: i64,
    pub win_rate: f64,
    pub average_bet: f64,
    pub last_activity: DateTime<Utc>,
    pub registered_at: DateTime<Utc>,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub balance: f64,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    Username,
    FullName,
    Email,
    Status,
    VipLevel,
    TotalBets,
    WinRate,
    AverageBet,
    LastActivity,
    Balance,
    RiskLevel,
}

impl Tabular for PlayerStats {
    type Field = PlayerField;

    fn field(&self, field: PlayerField) -> FieldValue {
        match field {
            PlayerField::Username => FieldValue::Text(self.username.clone()),
            PlayerField::FullName => FieldValue::Text(self.full_name.clone()),
            PlayerField::Email => FieldValue::Text(self.email.clone()),
            PlayerField::Status => FieldValue::Text(self.status.as_str().to_string()),
            PlayerField::VipLevel => FieldValue::Text(self.vip_level.as_str().to_string()),
            PlayerField::TotalBets => FieldValue::Count(self.total_bets),
            PlayerField::WinRate => FieldValue::Amount(self.win_rate),
            PlayerField::AverageBet => FieldValue::Amount(self.average_bet),
            PlayerField::LastActivity => FieldValue::Timestamp(self.last_activity),
            PlayerField::Balance => FieldValue::Amount(self.balance),
            PlayerField::RiskLevel => FieldValue::Text(self.risk_level.as_str().to_string()),
        }
    }
}
