use anyhow::Result;

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Project name is invalid: {reason}")]
    InvalidProjectName { reason: String },
}

/// Project name validation: trimmed and non-blank.
pub fn validate_project_name(name: &str) -> Result<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::InvalidProjectName {
            reason: "Project name cannot be empty or whitespace only".to_string(),
        }
        .into());
    }

    // Check for null bytes
    if trimmed.contains('\0') {
        return Err(ValidationError::InvalidProjectName {
            reason: "Project name contains null bytes".to_string(),
        }
        .into());
    }

    Ok(trimmed.to_string())
}
