use chrono::{DateTime, Utc};

use crate::domain::table::{FieldValue, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCategory {
    Slots,
    Table,
    Live,
    Sports,
    Lottery,
}

impl GameCategory {
    pub const ALL: [GameCategory; 5] = [
        GameCategory::Slots,
        GameCategory::Table,
        GameCategory::Live,
        GameCategory::Sports,
        GameCategory::Lottery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameCategory::Slots => "slots",
            GameCategory::Table => "table",
            GameCategory::Live => "live",
            GameCategory::Sports => "sports",
            GameCategory::Lottery => "lottery",
        }
    }
}

impl std::fmt::Display for GameCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Inactive,
    Maintenance,
}

impl GameStatus {
    pub const ALL: [GameStatus; 3] = [
        GameStatus::Active,
        GameStatus::Inactive,
        GameStatus::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Inactive => "inactive",
            GameStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    Low,
    Medium,
    High,
}

impl Volatility {
    pub fn as_str(self) -> &'static str {
        match self {
            Volatility::Low => "low",
            Volatility::Medium => "medium",
            Volatility::High => "high",
        }
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry on the Games page.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub category: GameCategory,
    pub provider: String,
    pub status: GameStatus,
    pub rtp: f64,
    pub volatility: Volatility,
    pub min_bet: f64,
    pub max_bet: f64,
    pub total_plays: i64,
    pub total_revenue: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameField {
    Name,
    Category,
    Provider,
    Status,
    Rtp,
    TotalPlays,
    TotalRevenue,
    LastUpdated,
}

impl Tabular for Game {
    type Field = GameField;

    fn field(&self, field: GameField) -> FieldValue {
        match field {
            GameField::Name => FieldValue::Text(self.name.clone()),
            GameField::Category => FieldValue::Text(self.category.as_str().to_string()),
            GameField::Provider => FieldValue::Text(self.provider.clone()),
            GameField::Status => FieldValue::Text(self.status.as_str().to_string()),
            GameField::Rtp => FieldValue::Amount(self.rtp),
            GameField::TotalPlays => FieldValue::Count(self.total_plays),
            GameField::TotalRevenue => FieldValue::Amount(self.total_revenue),
            GameField::LastUpdated => FieldValue::Timestamp(self.last_updated),
        }
    }
}
