pub mod calculator;
pub mod clock;
pub mod live;
pub mod logic;
pub mod navigate;
pub mod reconcile;
