//! Test helpers shared across notes-rs crates.

pub mod clock;
pub mod fixtures;

pub use clock::ManualClock;
pub use fixtures::{create_payload, seeded_repository, update_payload};
