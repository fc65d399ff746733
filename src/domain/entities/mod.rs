pub mod account;
pub mod betting;
pub mod finance;
pub mod game;
pub mod monitor;
pub mod security;
