use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique identifier assigned to a record when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A portfolio project entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub tech_stack: String,
    pub description: String,
    pub completed: bool,
}

impl Project {
    pub fn category(&self) -> Category {
        if self.completed {
            Category::Completed
        } else {
            Category::InProgress
        }
    }
}

/// The two tabs of the Projects section
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Completed,
    InProgress,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Completed => "Completed",
            Category::InProgress => "In Progress",
        }
    }

    /// Whether a project belongs under this tab
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Category::Completed => project.completed,
            Category::InProgress => !project.completed,
        }
    }

    pub fn other(self) -> Category {
        match self {
            Category::Completed => Category::InProgress,
            Category::InProgress => Category::Completed,
        }
    }

    /// Placeholder shown when the filtered list is empty
    pub fn empty_message(self) -> String {
        format!("No {} projects yet", self.label().to_lowercase())
    }
}

/// Projects under `category`, in list order. Lazy; re-run on every change.
pub fn filter_projects(
    projects: &[Project],
    category: Category,
) -> impl Iterator<Item = &Project> + '_ {
    projects.iter().filter(move |p| category.matches(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: u64, name: &str, completed: bool) -> Project {
        Project {
            id: RecordId(id),
            name: name.into(),
            tech_stack: "Rust".into(),
            description: "desc".into(),
            completed,
        }
    }

    fn names<'a>(it: impl Iterator<Item = &'a Project>) -> Vec<&'a str> {
        it.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let list = vec![
            project(1, "a", true),
            project(2, "b", false),
            project(3, "c", true),
            project(4, "d", false),
            project(5, "e", true),
        ];
        assert_eq!(
            names(filter_projects(&list, Category::Completed)),
            vec!["a", "c", "e"]
        );
        assert_eq!(
            names(filter_projects(&list, Category::InProgress)),
            vec!["b", "d"]
        );
    }

    #[test]
    fn test_filter_partitions_list() {
        let list = vec![
            project(1, "a", false),
            project(2, "b", true),
            project(3, "b", true),
            project(4, "c", false),
        ];
        let done: Vec<RecordId> = filter_projects(&list, Category::Completed)
            .map(|p| p.id)
            .collect();
        let open: Vec<RecordId> = filter_projects(&list, Category::InProgress)
            .map(|p| p.id)
            .collect();
        assert_eq!(done.len() + open.len(), list.len());
        assert!(done.iter().all(|id| !open.contains(id)));
    }

    #[test]
    fn test_filter_empty() {
        let list = vec![project(1, "a", true)];
        assert_eq!(filter_projects(&list, Category::InProgress).count(), 0);
        assert_eq!(filter_projects(&[], Category::Completed).count(), 0);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(Category::Completed.empty_message(), "No completed projects yet");
        assert_eq!(
            Category::InProgress.empty_message(),
            "No in progress projects yet"
        );
    }

    #[test]
    fn test_category_of_project() {
        assert_eq!(project(1, "a", true).category(), Category::Completed);
        assert_eq!(project(1, "a", false).category(), Category::InProgress);
        assert_eq!(Category::Completed.other(), Category::InProgress);
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId(7).to_string(), "#7");
    }
}
