pub mod amount;
pub mod balance_info;
pub mod connect_wallet;
pub mod empty_state;
pub mod modals;
pub mod pico;
pub mod staking_analytics;
pub mod token_chooser;
