#![deny(warnings)]

pub mod config;
pub mod emotion;
pub mod engine;
pub mod profile;
pub mod respond;
pub mod trend;
pub mod util;

pub use engine::{EmotionEngine, SessionSummary, Snapshot, SnapshotError};
