pub mod betting;
pub mod dashboard;
pub mod financial;
pub mod games;
pub mod players;
pub mod security;
pub mod status;
pub mod users;
pub mod withdrawals;
