//! Load candidate projects from a CSV file
//!
//! Column names follow the original candidate export format
//! (`Project_ID`, `Initial_Investment`, `Project_Life`, ...).

use super::{Priority, Project};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the candidate export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Project_ID")]
    project_id: String,
    #[serde(rename = "Industry")]
    industry: Option<String>,
    #[serde(rename = "Initial_Investment")]
    initial_investment: f64,
    #[serde(rename = "Project_Life")]
    project_life: u32,
    #[serde(rename = "Strategic_Priority")]
    strategic_priority: Option<String>,
}

impl CsvRow {
    fn to_project(self) -> Result<Project, Box<dyn Error>> {
        let priority = match self.strategic_priority.as_deref() {
            None | Some("") => None,
            Some("High") => Some(Priority::High),
            Some("Medium") => Some(Priority::Medium),
            Some("Low") => Some(Priority::Low),
            Some(other) => return Err(format!("Unknown Strategic_Priority: {}", other).into()),
        };

        Ok(Project {
            id: self.project_id,
            investment: self.initial_investment,
            lifetime: self.project_life,
            industry: self.industry.filter(|s| !s.is_empty()),
            priority,
        })
    }
}

/// Load all candidate projects from a CSV file
pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<Project>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut projects = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        projects.push(row.to_project()?);
    }

    Ok(projects)
}

/// Load candidate projects from any reader (e.g., string buffer, network stream)
pub fn load_projects_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Project>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut projects = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        projects.push(row.to_project()?);
    }

    Ok(projects)
}
