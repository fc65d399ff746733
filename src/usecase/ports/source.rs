use crate::domain::entities::account::{PlayerStats, User};
use crate::domain::entities::betting::BetRecord;
use crate::domain::entities::finance::{Transaction, WithdrawRecord};
use crate::domain::entities::game::Game;
use crate::domain::entities::monitor::{AnalyticsSnapshot, Incident, ServiceStatus};
use crate::domain::entities::security::SecurityAlert;

/// Read-only access to the loaded datasets. Every view borrows rows from
/// here and keeps its own transient filter/sort/page state; nothing ever
/// writes back.
pub trait DataSource {
    fn users(&self) -> &[User];
    fn games(&self) -> &[Game];
    fn players(&self) -> &[PlayerStats];
    fn transactions(&self) -> &[Transaction];
    fn security_alerts(&self) -> &[SecurityAlert];
    fn bets(&self) -> &[BetRecord];
    fn withdrawals(&self) -> &[WithdrawRecord];
    fn services(&self) -> &[ServiceStatus];
    fn incidents(&self) -> &[Incident];
    fn analytics(&self) -> AnalyticsSnapshot;
}
