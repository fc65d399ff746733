use chrono::{DateTime, Utc};

use crate::domain::table::{FieldValue, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    Slots,
    Table,
    Live,
}

impl GameType {
    pub const ALL: [GameType; 3] = [GameType::Slots, GameType::Table, GameType::Live];

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Slots => "Slots",
            GameType::Table => "Table",
            GameType::Live => "Live",
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    Win,
    Loss,
    Tie,
}

impl BetOutcome {
    pub const ALL: [BetOutcome; 3] = [BetOutcome::Win, BetOutcome::Loss, BetOutcome::Tie];

    pub fn as_str(self) -> &'static str {
        match self {
            BetOutcome::Win => "win",
            BetOutcome::Loss => "loss",
            BetOutcome::Tie => "tie",
        }
    }
}

impl std::fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single settled bet on the Betting History page.
#[derive(Debug, Clone, PartialEq)]
pub struct BetRecord {
    pub id: String,
    pub username: String,
    pub game_name: String,
    pub game_type: GameType,
    pub provider: String,
    pub bet_amount: f64,
    pub payout: f64,
    pub outcome: BetOutcome,
    pub placed_at: DateTime<Utc>,
    pub balance_before: f64,
    pub balance_after: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetField {
    Username,
    GameName,
    GameType,
    Provider,
    BetAmount,
    Payout,
    Outcome,
    PlacedAt,
    BalanceBefore,
    BalanceAfter,
}

impl Tabular for BetRecord {
    type Field = BetField;

    fn field(&self, field: BetField) -> FieldValue {
        match field {
            BetField::Username => FieldValue::Text(self.username.clone()),
            BetField::GameName => FieldValue::Text(self.game_name.clone()),
            BetField::GameType => FieldValue::Text(self.game_type.as_str().to_string()),
            BetField::Provider => FieldValue::Text(self.provider.clone()),
            BetField::BetAmount => FieldValue::Amount(self.bet_amount),
            BetField::Payout => FieldValue::Amount(self.payout),
            BetField::Outcome => FieldValue::Text(self.outcome.as_str().to_string()),
            BetField::PlacedAt => FieldValue::Timestamp(self.placed_at),
            BetField::BalanceBefore => FieldValue::Amount(self.balance_before),
            BetField::BalanceAfter => FieldValue::Amount(self.balance_after),
        }
    }
}
