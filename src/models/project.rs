use serde::{Deserialize, Serialize};

use crate::utils::validation::validate_project_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
}

impl Project {
    /// Creates a project with a validated name. The id stays `None` until
    /// storage assigns one.
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let name = validate_project_name(name)?;
        Ok(Self { id: None, name })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
