use crate::model::{Category, DEFAULT_LEVEL, Portfolio, Project, RecordId, Skill, SkillIcon};

/// Error type for record operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),
}

/// Field values entered in the add-project dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub tech_stack: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn new(name: &str, tech_stack: &str, description: &str) -> Self {
        ProjectDraft {
            name: name.to_string(),
            tech_stack: tech_stack.to_string(),
            description: description.to_string(),
        }
    }

    /// Check every required field, reporting the first blank one
    pub fn validate(&self) -> Result<(), RecordError> {
        require("name", &self.name)?;
        require("tech stack", &self.tech_stack)?;
        require("description", &self.description)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::BlankField(field))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

/// Append a project built from `draft`. It is marked completed iff the
/// dialog was opened from the Completed tab. Duplicates are allowed.
pub fn add_project(
    portfolio: &mut Portfolio,
    draft: &ProjectDraft,
    category: Category,
) -> Result<RecordId, RecordError> {
    draft.validate()?;
    let id = portfolio.allocate_id();
    portfolio.projects.push(Project {
        id,
        name: draft.name.clone(),
        tech_stack: draft.tech_stack.clone(),
        description: draft.description.clone(),
        completed: category == Category::Completed,
    });
    tracing::info!(%id, name = %draft.name, "project added");
    Ok(id)
}

/// Append a skill with the default icon and level
pub fn add_skill(portfolio: &mut Portfolio, name: &str) -> Result<RecordId, RecordError> {
    require("skill name", name)?;
    let id = portfolio.allocate_id();
    portfolio.skills.push(Skill {
        id,
        icon: SkillIcon::default(),
        name: name.to_string(),
        level: DEFAULT_LEVEL,
    });
    tracing::info!(%id, name, "skill added");
    Ok(id)
}
