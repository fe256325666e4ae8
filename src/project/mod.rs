//! Candidate project definitions and loading

mod data;
mod loader;

pub use data::{sample_projects, Forecast, Priority, Project};
pub use loader::{load_projects, load_projects_from_reader};
