pub mod activity;
pub mod classify;
pub mod normalize;
pub mod period;
pub mod sessions;
pub mod stats;
