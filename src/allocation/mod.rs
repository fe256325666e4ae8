//! Population-relative scoring and greedy budget allocation

mod allocator;
mod engine;
mod scoring;

pub use allocator::{allocate, AllocationResult, AllocationRow, Decision};
pub use engine::{allocate_capital, AllocationConfig, AllocationEngine};
pub use scoring::{score_projects, ScoredProject};
