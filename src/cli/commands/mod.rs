pub mod config;
pub mod day;
pub mod export;
pub mod month;
pub mod recent;
pub mod stats;
pub mod status;
pub mod watch;
pub mod week;
