use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::entities::account::{
    KycStatus, PlayerStats, RiskLevel, User, UserStatus, VipLevel,
};
use crate::domain::entities::betting::{BetOutcome, BetRecord, GameType};
use crate::domain::entities::finance::{
    Transaction, TransactionKind, TransactionStatus, WithdrawMethod, WithdrawRecord,
    WithdrawStatus,
};
use crate::domain::entities::game::{Game, GameCategory, GameStatus, Volatility};
use crate::domain::entities::monitor::{
    AnalyticsSnapshot, Incident, IncidentStatus, ServiceState, ServiceStatus,
};
use crate::domain::entities::security::{
    AlertKind, AlertSeverity, AlertStatus, SecurityAlert,
};
use crate::usecase::ports::source::DataSource;

const BET_COUNT: usize = 100;
const WITHDRAW_COUNT: usize = 75;
const GENERATED_TX_COUNT: usize = 40;

const USERNAMES: [&str; 10] = [
    "player001",
    "lucky_gambler",
    "high_roller",
    "casual_carl",
    "slot_queen",
    "card_shark",
    "spin_master",
    "neon_tiger",
    "river_rat",
    "ace_hunter",
];

const PROVIDERS: [&str; 5] = [
    "NetEnt",
    "Evolution Gaming",
    "Playtech",
    "Microgaming",
    "Pragmatic Play",
];

const GAME_NAMES: [&str; 8] = [
    "Mega Fortune",
    "Lightning Roulette",
    "Starburst",
    "Blackjack Classic",
    "Book of Dead",
    "Crazy Time",
    "Gonzo's Quest",
    "Dream Catcher",
];

/// All datasets served to the views, built once at startup. Generated rows
/// come from a fixed-seed RNG, so the data is stable apart from timestamps,
/// which are anchored to the launch instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MockData {
    users: Vec<User>,
    games: Vec<Game>,
    players: Vec<PlayerStats>,
    transactions: Vec<Transaction>,
    security_alerts: Vec<SecurityAlert>,
    bets: Vec<BetRecord>,
    withdrawals: Vec<WithdrawRecord>,
    services: Vec<ServiceStatus>,
    incidents: Vec<Incident>,
    analytics: AnalyticsSnapshot,
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn amount_between(rng: &mut StdRng, min_cents: i64, max_cents: i64) -> f64 {
    rng.gen_range(min_cents..=max_cents) as f64 / 100.0
}

fn recent_instant(rng: &mut StdRng, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    now - Duration::minutes(rng.gen_range(30..max_days * 24 * 60))
}

impl MockData {
    pub fn sample() -> Self {
        let now = Utc::now();
        Self {
            users: sample_users(),
            games: sample_games(),
            players: sample_players(),
            transactions: sample_transactions(now),
            security_alerts: sample_alerts(),
            bets: generate_bets(now),
            withdrawals: generate_withdrawals(now),
            services: sample_services(now),
            incidents: sample_incidents(now),
            analytics: AnalyticsSnapshot {
                total_revenue: 515_000.5,
                total_users: 15_420,
                active_users: 8_920,
                total_games: 156,
                total_transactions: 45_670,
                revenue_change: 12.5,
                user_change: 8.3,
                game_change: 2.1,
                transaction_change: 15.7,
            },
        }
    }
}

impl DataSource for MockData {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn games(&self) -> &[Game] {
        &self.games
    }

    fn players(&self) -> &[PlayerStats] {
        &self.players
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn security_alerts(&self) -> &[SecurityAlert] {
        &self.security_alerts
    }

    fn bets(&self) -> &[BetRecord] {
        &self.bets
    }

    fn withdrawals(&self) -> &[WithdrawRecord] {
        &self.withdrawals
    }

    fn services(&self) -> &[ServiceStatus] {
        &self.services
    }

    fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    fn analytics(&self) -> AnalyticsSnapshot {
        self.analytics
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            username: "player001".to_string(),
            email: "john.doe@email.com".to_string(),
            full_name: "John Doe".to_string(),
            status: UserStatus::Active,
            kyc_status: KycStatus::Verified,
            balance: 1250.50,
            total_deposits: 5000.0,
            total_withdrawals: 3750.0,
            registered_at: at(2023, 1, 15, 0, 0),
            last_login: at(2024, 1, 20, 10, 30),
            country: "United States".to_string(),
            vip: true,
        },
        User {
            id: "2".to_string(),
            username: "lucky_gambler".to_string(),
            email: "sarah.smith@email.com".to_string(),
            full_name: "Sarah Smith".to_string(),
            status: UserStatus::Active,
            kyc_status: KycStatus::Verified,
            balance: 850.25,
            total_deposits: 3000.0,
            total_withdrawals: 2150.0,
            registered_at: at(2023, 3, 22, 0, 0),
            last_login: at(2024, 1, 20, 14, 15),
            country: "Canada".to_string(),
            vip: false,
        },
        User {
            id: "3".to_string(),
            username: "high_roller".to_string(),
            email: "mike.wilson@email.com".to_string(),
            full_name: "Mike Wilson".to_string(),
            status: UserStatus::Suspended,
            kyc_status: KycStatus::Pending,
            balance: 0.0,
            total_deposits: 15_000.0,
            total_withdrawals: 14_500.0,
            registered_at: at(2023, 6, 10, 0, 0),
            last_login: at(2024, 1, 18, 9, 45),
            country: "United Kingdom".to_string(),
            vip: true,
        },
        User {
            id: "4".to_string(),
            username: "casual_carl".to_string(),
            email: "carl.brown@email.com".to_string(),
            full_name: "Carl Brown".to_string(),
            status: UserStatus::Pending,
            kyc_status: KycStatus::NotSubmitted,
            balance: 100.0,
            total_deposits: 100.0,
            total_withdrawals: 0.0,
            registered_at: at(2024, 1, 19, 0, 0),
            last_login: at(2024, 1, 19, 20, 5),
            country: "Australia".to_string(),
            vip: false,
        },
        User {
            id: "5".to_string(),
            username: "slot_queen".to_string(),
            email: "emma.davis@email.com".to_string(),
            full_name: "Emma Davis".to_string(),
            status: UserStatus::Blocked,
            kyc_status: KycStatus::Rejected,
            balance: 420.10,
            total_deposits: 2000.0,
            total_withdrawals: 1400.0,
            registered_at: at(2023, 9, 2, 0, 0),
            last_login: at(2024, 1, 10, 23, 55),
            country: "Germany".to_string(),
            vip: false,
        },
    ]
}

fn sample_games() -> Vec<Game> {
    vec![
        Game {
            id: "g1".to_string(),
            name: "Mega Fortune".to_string(),
            category: GameCategory::Slots,
            provider: "NetEnt".to_string(),
            status: GameStatus::Active,
            rtp: 96.6,
            volatility: Volatility::High,
            min_bet: 0.25,
            max_bet: 50.0,
            total_plays: 125_420,
            total_revenue: 89_500.0,
            last_updated: at(2024, 1, 15, 0, 0),
        },
        Game {
            id: "g2".to_string(),
            name: "Lightning Roulette".to_string(),
            category: GameCategory::Live,
            provider: "Evolution Gaming".to_string(),
            status: GameStatus::Active,
            rtp: 97.3,
            volatility: Volatility::Medium,
            min_bet: 0.20,
            max_bet: 5000.0,
            total_plays: 98_340,
            total_revenue: 156_200.0,
            last_updated: at(2024, 1, 18, 0, 0),
        },
        Game {
            id: "g3".to_string(),
            name: "Blackjack Classic".to_string(),
            category: GameCategory::Table,
            provider: "Playtech".to_string(),
            status: GameStatus::Active,
            rtp: 99.5,
            volatility: Volatility::Low,
            min_bet: 1.0,
            max_bet: 1000.0,
            total_plays: 67_890,
            total_revenue: 45_600.0,
            last_updated: at(2024, 1, 12, 0, 0),
        },
        Game {
            id: "g4".to_string(),
            name: "Starburst".to_string(),
            category: GameCategory::Slots,
            provider: "NetEnt".to_string(),
            status: GameStatus::Maintenance,
            rtp: 96.1,
            volatility: Volatility::Low,
            min_bet: 0.10,
            max_bet: 100.0,
            total_plays: 203_150,
            total_revenue: 78_900.0,
            last_updated: at(2024, 1, 20, 0, 0),
        },
        Game {
            id: "g5".to_string(),
            name: "Premier League Betting".to_string(),
            category: GameCategory::Sports,
            provider: "Kambi".to_string(),
            status: GameStatus::Active,
            rtp: 94.8,
            volatility: Volatility::Medium,
            min_bet: 0.50,
            max_bet: 10_000.0,
            total_plays: 45_230,
            total_revenue: 234_500.0,
            last_updated: at(2024, 1, 19, 0, 0),
        },
        Game {
            id: "g6".to_string(),
            name: "Daily Lottery".to_string(),
            category: GameCategory::Lottery,
            provider: "IGT".to_string(),
            status: GameStatus::Inactive,
            rtp: 85.0,
            volatility: Volatility::High,
            min_bet: 1.0,
            max_bet: 20.0,
            total_plays: 12_450,
            total_revenue: 18_700.0,
            last_updated: at(2023, 12, 30, 0, 0),
        },
    ]
}

fn sample_players() -> Vec<PlayerStats> {
    vec![
        PlayerStats {
            id: "1".to_string(),
            username: "john_doe".to_string(),
            full_name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            status: UserStatus::Active,
            vip_level: VipLevel::Gold,
            total_bets: 1250,
            total_wins: 680,
            total_losses: 570,
            win_rate: 54.4,
            average_bet: 45.20,
            last_activity: at(2024, 1, 20, 15, 30),
            registered_at: at(2023, 1, 15, 0, 0),
            total_deposits: 5000.0,
            total_withdrawals: 2750.0,
            balance: 1250.50,
            risk_level: RiskLevel::Low,
        },
        PlayerStats {
            id: "2".to_string(),
            username: "sarah_jones".to_string(),
            full_name: "Sarah Jones".to_string(),
            email: "sarah.jones@email.com".to_string(),
            status: UserStatus::Active,
            vip_level: VipLevel::Platinum,
            total_bets: 2340,
            total_wins: 1420,
            total_losses: 920,
            win_rate: 60.7,
            average_bet: 78.50,
            last_activity: at(2024, 1, 20, 16, 20),
            registered_at: at(2023, 2, 8, 0, 0),
            total_deposits: 8000.0,
            total_withdrawals: 5200.0,
            balance: 2100.75,
            risk_level: RiskLevel::Medium,
        },
        PlayerStats {
            id: "3".to_string(),
            username: "mike_wilson".to_string(),
            full_name: "Mike Wilson".to_string(),
            email: "mike.wilson@email.com".to_string(),
            status: UserStatus::Suspended,
            vip_level: VipLevel::None,
            total_bets: 450,
            total_wins: 180,
            total_losses: 270,
            win_rate: 40.0,
            average_bet: 120.30,
            last_activity: at(2024, 1, 18, 9, 45),
            registered_at: at(2023, 6, 10, 0, 0),
            total_deposits: 1500.0,
            total_withdrawals: 1200.0,
            balance: 0.0,
            risk_level: RiskLevel::High,
        },
        PlayerStats {
            id: "4".to_string(),
            username: "anna_kim".to_string(),
            full_name: "Anna Kim".to_string(),
            email: "anna.kim@email.com".to_string(),
            status: UserStatus::Active,
            vip_level: VipLevel::Platinum,
            total_bets: 3120,
            total_wins: 1890,
            total_losses: 1230,
            win_rate: 60.6,
            average_bet: 95.10,
            last_activity: at(2024, 1, 20, 18, 2),
            registered_at: at(2022, 11, 30, 0, 0),
            total_deposits: 12_000.0,
            total_withdrawals: 8900.0,
            balance: 3400.00,
            risk_level: RiskLevel::Low,
        },
        PlayerStats {
            id: "5".to_string(),
            username: "leo_novak".to_string(),
            full_name: "Leo Novak".to_string(),
            email: "leo.novak@email.com".to_string(),
            status: UserStatus::Blocked,
            vip_level: VipLevel::Bronze,
            total_bets: 780,
            total_wins: 310,
            total_losses: 470,
            win_rate: 39.7,
            average_bet: 22.40,
            last_activity: at(2024, 1, 5, 11, 10),
            registered_at: at(2023, 8, 14, 0, 0),
            total_deposits: 900.0,
            total_withdrawals: 450.0,
            balance: 12.35,
            risk_level: RiskLevel::High,
        },
        PlayerStats {
            id: "6".to_string(),
            username: "grace_liu".to_string(),
            full_name: "Grace Liu".to_string(),
            email: "grace.liu@email.com".to_string(),
            status: UserStatus::Pending,
            vip_level: VipLevel::Silver,
            total_bets: 150,
            total_wins: 80,
            total_losses: 70,
            win_rate: 53.3,
            average_bet: 15.00,
            last_activity: at(2024, 1, 19, 21, 40),
            registered_at: at(2024, 1, 2, 0, 0),
            total_deposits: 300.0,
            total_withdrawals: 0.0,
            balance: 310.80,
            risk_level: RiskLevel::Medium,
        },
    ]
}

fn sample_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let mut transactions = vec![
        Transaction {
            id: "t1".to_string(),
            user_id: "1".to_string(),
            kind: TransactionKind::Deposit,
            amount: 500.0,
            status: TransactionStatus::Completed,
            method: "Credit Card".to_string(),
            at: at(2024, 1, 20, 10, 30),
            description: "Deposit via Visa".to_string(),
        },
        Transaction {
            id: "t2".to_string(),
            user_id: "2".to_string(),
            kind: TransactionKind::Withdrawal,
            amount: 250.0,
            status: TransactionStatus::Pending,
            method: "Bank Transfer".to_string(),
            at: at(2024, 1, 20, 11, 15),
            description: "Withdrawal to checking account".to_string(),
        },
        Transaction {
            id: "t3".to_string(),
            user_id: "1".to_string(),
            kind: TransactionKind::Bet,
            amount: 25.0,
            status: TransactionStatus::Completed,
            method: "Balance".to_string(),
            at: at(2024, 1, 20, 12, 0),
            description: "Bet on Lightning Roulette".to_string(),
        },
        Transaction {
            id: "t4".to_string(),
            user_id: "3".to_string(),
            kind: TransactionKind::Win,
            amount: 150.0,
            status: TransactionStatus::Completed,
            method: "Balance".to_string(),
            at: at(2024, 1, 20, 12, 5),
            description: "Win on Mega Fortune".to_string(),
        },
        Transaction {
            id: "t5".to_string(),
            user_id: "4".to_string(),
            kind: TransactionKind::Bonus,
            amount: 50.0,
            status: TransactionStatus::Completed,
            method: "Promotion".to_string(),
            at: at(2024, 1, 19, 9, 0),
            description: "Welcome bonus".to_string(),
        },
        Transaction {
            id: "t6".to_string(),
            user_id: "5".to_string(),
            kind: TransactionKind::Deposit,
            amount: 75.0,
            status: TransactionStatus::Failed,
            method: "Credit Card".to_string(),
            at: at(2024, 1, 18, 22, 40),
            description: "Deposit declined by issuer".to_string(),
        },
    ];

    // Filler ledger spread over the last six months so the monthly report
    // has something to aggregate.
    let mut rng = StdRng::seed_from_u64(7);
    for idx in 0..GENERATED_TX_COUNT {
        let kind = if idx % 2 == 0 {
            TransactionKind::Deposit
        } else {
            TransactionKind::Withdrawal
        };
        transactions.push(Transaction {
            id: format!("t{}", idx + 7),
            user_id: rng.gen_range(1..=5).to_string(),
            kind,
            amount: amount_between(&mut rng, 2_000, 200_000),
            status: TransactionStatus::Completed,
            method: "Bank Transfer".to_string(),
            at: recent_instant(&mut rng, now, 180),
            description: format!("{kind} batch entry"),
        });
    }

    transactions
}

fn sample_alerts() -> Vec<SecurityAlert> {
    vec![
        SecurityAlert {
            id: "a1".to_string(),
            kind: AlertKind::Fraud,
            severity: AlertSeverity::Critical,
            user_id: "3".to_string(),
            description: "Multiple failed deposit attempts with different cards".to_string(),
            at: at(2024, 1, 20, 16, 45),
            status: AlertStatus::Open,
        },
        SecurityAlert {
            id: "a2".to_string(),
            kind: AlertKind::SuspiciousActivity,
            severity: AlertSeverity::High,
            user_id: "5".to_string(),
            description: "Login from unusual location".to_string(),
            at: at(2024, 1, 20, 14, 20),
            status: AlertStatus::Investigating,
        },
        SecurityAlert {
            id: "a3".to_string(),
            kind: AlertKind::MultipleAccounts,
            severity: AlertSeverity::Medium,
            user_id: "4".to_string(),
            description: "Shared device fingerprint across three accounts".to_string(),
            at: at(2024, 1, 19, 18, 10),
            status: AlertStatus::Resolved,
        },
        SecurityAlert {
            id: "a4".to_string(),
            kind: AlertKind::Chargeback,
            severity: AlertSeverity::Medium,
            user_id: "2".to_string(),
            description: "Chargeback request received".to_string(),
            at: at(2024, 1, 20, 17, 0),
            status: AlertStatus::Open,
        },
        SecurityAlert {
            id: "a5".to_string(),
            kind: AlertKind::SuspiciousActivity,
            severity: AlertSeverity::Low,
            user_id: "1".to_string(),
            description: "Betting pattern change".to_string(),
            at: at(2024, 1, 17, 8, 30),
            status: AlertStatus::FalsePositive,
        },
    ]
}

fn generate_bets(now: DateTime<Utc>) -> Vec<BetRecord> {
    let mut rng = StdRng::seed_from_u64(11);
    let mut bets = Vec::with_capacity(BET_COUNT);

    for idx in 0..BET_COUNT {
        let bet_amount = amount_between(&mut rng, 100, 100_000);
        let outcome = *BetOutcome::ALL
            .choose(&mut rng)
            .unwrap_or(&BetOutcome::Loss);
        let payout = match outcome {
            BetOutcome::Win => bet_amount * rng.gen_range(2..=10) as f64,
            BetOutcome::Tie => bet_amount,
            BetOutcome::Loss => 0.0,
        };
        let balance_before = bet_amount + amount_between(&mut rng, 0, 1_000_000);
        let game_idx = rng.gen_range(0..GAME_NAMES.len());

        bets.push(BetRecord {
            id: format!("bet-{idx:04}"),
            username: (*USERNAMES.choose(&mut rng).unwrap_or(&"player001")).to_string(),
            game_name: GAME_NAMES[game_idx].to_string(),
            game_type: *GameType::ALL.choose(&mut rng).unwrap_or(&GameType::Slots),
            provider: (*PROVIDERS.choose(&mut rng).unwrap_or(&"NetEnt")).to_string(),
            bet_amount,
            payout,
            outcome,
            placed_at: recent_instant(&mut rng, now, 30),
            balance_before,
            balance_after: balance_before - bet_amount + payout,
        });
    }

    bets
}

fn transaction_code(rng: &mut StdRng) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..12)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

fn generate_withdrawals(now: DateTime<Utc>) -> Vec<WithdrawRecord> {
    let mut rng = StdRng::seed_from_u64(13);
    let mut withdrawals = Vec::with_capacity(WITHDRAW_COUNT);

    for idx in 0..WITHDRAW_COUNT {
        let status = *WithdrawStatus::ALL
            .choose(&mut rng)
            .unwrap_or(&WithdrawStatus::Pending);
        let requested_at = recent_instant(&mut rng, now, 30);
        let processed_at = match status {
            WithdrawStatus::Pending => None,
            _ => Some(requested_at + Duration::minutes(rng.gen_range(10..48 * 60))),
        };

        withdrawals.push(WithdrawRecord {
            id: format!("wd-{idx:04}"),
            username: (*USERNAMES.choose(&mut rng).unwrap_or(&"player001")).to_string(),
            amount: amount_between(&mut rng, 5_000, 500_000),
            method: *WithdrawMethod::ALL
                .choose(&mut rng)
                .unwrap_or(&WithdrawMethod::BankTransfer),
            status,
            requested_at,
            transaction_id: transaction_code(&mut rng),
            processed_at,
        });
    }

    withdrawals
}

fn sample_services(now: DateTime<Utc>) -> Vec<ServiceStatus> {
    let service = |name: &str, state, uptime, response| ServiceStatus {
        name: name.to_string(),
        state,
        uptime_percent: uptime,
        response_time_ms: response,
        last_checked: now,
    };

    vec![
        service("Main Website", ServiceState::Operational, 99.98, 120),
        service("Game Servers", ServiceState::Operational, 99.95, 45),
        service("Payment Gateway", ServiceState::Degraded, 98.20, 890),
        service("User Authentication", ServiceState::Operational, 99.99, 65),
        service("Live Casino", ServiceState::Operational, 99.90, 210),
        service("Sports Betting", ServiceState::Maintenance, 97.50, 0),
        service("Mobile App API", ServiceState::Operational, 99.93, 95),
        service("Customer Support", ServiceState::Operational, 99.80, 300),
    ]
}

fn sample_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    vec![
        Incident {
            id: "i1".to_string(),
            title: "Elevated payment gateway latency".to_string(),
            severity: AlertSeverity::Medium,
            status: IncidentStatus::Investigating,
            started_at: now - Duration::hours(3),
            resolved_at: None,
            affected_services: vec!["Payment Gateway".to_string()],
        },
        Incident {
            id: "i2".to_string(),
            title: "Intermittent mobile push delays".to_string(),
            severity: AlertSeverity::Low,
            status: IncidentStatus::Monitoring,
            started_at: now - Duration::hours(9),
            resolved_at: None,
            affected_services: vec!["Mobile App API".to_string()],
        },
        Incident {
            id: "i3".to_string(),
            title: "Live casino stream outage".to_string(),
            severity: AlertSeverity::High,
            status: IncidentStatus::Resolved,
            started_at: now - Duration::days(2),
            resolved_at: Some(now - Duration::days(2) + Duration::hours(1)),
            affected_services: vec!["Live Casino".to_string(), "Game Servers".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_deterministic_across_builds() {
        let first = MockData::sample();
        let second = MockData::sample();

        assert_eq!(first.bets.len(), second.bets.len());
        for (a, b) in first.bets.iter().zip(&second.bets) {
            assert_eq!(a.username, b.username, "seeded bets should be identical");
            assert_eq!(a.bet_amount, b.bet_amount);
            assert_eq!(a.outcome, b.outcome);
        }
    }

    #[test]
    fn generated_dataset_sizes_match_expectations() {
        let data = MockData::sample();

        assert_eq!(data.bets().len(), BET_COUNT);
        assert_eq!(data.withdrawals().len(), WITHDRAW_COUNT);
        assert!(!data.users().is_empty());
        assert!(!data.games().is_empty());
        assert!(!data.security_alerts().is_empty());
    }

    #[test]
    fn bet_balances_are_consistent() {
        let data = MockData::sample();

        for bet in data.bets() {
            let expected = bet.balance_before - bet.bet_amount + bet.payout;
            assert!(
                (bet.balance_after - expected).abs() < 1e-9,
                "balance after should equal before - bet + payout for {}",
                bet.id
            );
            match bet.outcome {
                BetOutcome::Loss => assert_eq!(bet.payout, 0.0),
                BetOutcome::Tie => assert_eq!(bet.payout, bet.bet_amount),
                BetOutcome::Win => assert!(bet.payout >= bet.bet_amount * 2.0),
            }
        }
    }

    #[test]
    fn only_pending_withdrawals_lack_processing_time() {
        let data = MockData::sample();

        for record in data.withdrawals() {
            match record.status {
                WithdrawStatus::Pending => {
                    assert!(record.processed_at.is_none(), "{} should be unprocessed", record.id)
                }
                _ => {
                    let processed = record
                        .processed_at
                        .expect("settled withdrawals should carry a processing time");
                    assert!(processed > record.requested_at);
                }
            }
        }
    }
}
