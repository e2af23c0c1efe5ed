use serde::Serialize;

use crate::model::{
    Category, ContactEntry, Education, Portfolio, Profile, Project, Skill, filter_projects,
};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HomeJson<'a> {
    pub profile: &'a Profile,
    pub education: &'a [Education],
    pub achievements: &'a [String],
}

#[derive(Serialize)]
pub struct ProjectJson<'a> {
    #[serde(flatten)]
    pub project: &'a Project,
    pub category: Category,
}

#[derive(Serialize)]
pub struct ProjectListJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub projects: Vec<ProjectJson<'a>>,
}

#[derive(Serialize)]
pub struct SkillJson<'a> {
    #[serde(flatten)]
    pub skill: &'a Skill,
    pub percent: u8,
}

#[derive(Serialize)]
pub struct SkillListJson<'a> {
    pub profile: &'a Profile,
    pub skills: Vec<SkillJson<'a>>,
}

#[derive(Serialize)]
pub struct ContactListJson<'a> {
    pub contacts: &'a [ContactEntry],
}

pub fn home_to_json(portfolio: &Portfolio) -> HomeJson<'_> {
    HomeJson {
        profile: &portfolio.profile,
        education: &portfolio.education,
        achievements: &portfolio.achievements,
    }
}

pub fn projects_to_json(portfolio: &Portfolio, category: Option<Category>) -> ProjectListJson<'_> {
    let projects = portfolio
        .projects
        .iter()
        .filter(|p| category.is_none_or(|c| c.matches(p)))
        .map(|project| ProjectJson {
            project,
            category: project.category(),
        })
        .collect();
    ProjectListJson { category, projects }
}

pub fn skills_to_json(portfolio: &Portfolio) -> SkillListJson<'_> {
    SkillListJson {
        profile: &portfolio.profile,
        skills: portfolio
            .skills
            .iter()
            .map(|skill| SkillJson {
                skill,
                percent: skill.percent(),
            })
            .collect(),
    }
}

pub fn contacts_to_json(portfolio: &Portfolio) -> ContactListJson<'_> {
    ContactListJson {
        contacts: &portfolio.contacts,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

fn format_profile(profile: &Profile) -> Vec<String> {
    vec![profile.name.clone(), profile.title.clone()]
}

pub fn format_home(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = format_profile(&portfolio.profile);
    lines.push(String::new());
    lines.push("Bio".into());
    lines.push(format!("  {}", portfolio.profile.bio));
    lines.push(String::new());
    lines.push("Education".into());
    for edu in &portfolio.education {
        lines.push(format!("  {}", edu.degree));
        lines.push(format!("    {}, {}", edu.institution, edu.year));
    }
    lines.push(String::new());
    lines.push("Achievements".into());
    for achievement in &portfolio.achievements {
        lines.push(format!("  \u{2022} {}", achievement));
    }
    lines
}

fn format_project(project: &Project) -> Vec<String> {
    vec![
        format!("  {} {}", project.id, project.name),
        format!("    Tech Stack:   {}", project.tech_stack),
        format!("    Description:  {}", project.description),
    ]
}

/// One category block: heading, then its projects or the empty message
pub fn format_project_group(portfolio: &Portfolio, category: Category) -> Vec<String> {
    let mut lines = vec![category.label().to_string()];
    let mut any = false;
    for project in filter_projects(&portfolio.projects, category) {
        lines.extend(format_project(project));
        any = true;
    }
    if !any {
        lines.push(format!("  {}", category.empty_message()));
    }
    lines
}

pub fn format_projects(portfolio: &Portfolio, category: Option<Category>) -> Vec<String> {
    match category {
        Some(c) => format_project_group(portfolio, c),
        None => {
            let mut lines = format_project_group(portfolio, Category::Completed);
            lines.push(String::new());
            lines.extend(format_project_group(portfolio, Category::InProgress));
            lines
        }
    }
}

pub fn format_skills(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = format_profile(&portfolio.profile);
    lines.push(String::new());
    lines.push("My Skills".into());
    let name_w = portfolio
        .skills
        .iter()
        .map(|s| crate::util::unicode::display_width(&s.name))
        .max()
        .unwrap_or(0);
    for skill in &portfolio.skills {
        lines.push(format!(
            "  {} {:>3}%",
            crate::util::unicode::pad_to_width(&skill.name, name_w),
            skill.percent()
        ));
    }
    lines
}

pub fn format_contacts(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = vec!["Contact Me".to_string()];
    let label_w = portfolio
        .contacts
        .iter()
        .map(|c| crate::util::unicode::display_width(&c.label))
        .max()
        .unwrap_or(0);
    for contact in &portfolio.contacts {
        lines.push(format!(
            "  {}  {}",
            crate::util::unicode::pad_to_width(&contact.label, label_w),
            contact.value
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_grouped_by_category() {
        let lines = format_projects(&Portfolio::seeded(), None);
        let completed = lines.iter().position(|l| l == "Completed").unwrap();
        let in_progress = lines.iter().position(|l| l == "In Progress").unwrap();
        let cgpa = lines.iter().position(|l| l.contains("CGPA Calculator")).unwrap();
        let shop = lines.iter().position(|l| l.contains("E-commerce App")).unwrap();
        assert!(completed < cgpa && cgpa < in_progress && in_progress < shop);
    }

    #[test]
    fn empty_category_prints_message() {
        let lines = format_projects(&Portfolio::empty(), Some(Category::InProgress));
        assert_eq!(
            lines,
            vec![
                "In Progress".to_string(),
                "  No in progress projects yet".to_string()
            ]
        );
    }

    #[test]
    fn skills_show_percent() {
        let lines = format_skills(&Portfolio::seeded());
        let kotlin = lines.iter().find(|l| l.contains("Kotlin")).unwrap();
        assert!(kotlin.ends_with(" 90%"));
    }

    #[test]
    fn contacts_list_values() {
        let lines = format_contacts(&Portfolio::seeded());
        assert!(lines.iter().any(|l| l.contains("Email") && l.contains("johndoe@gmail.com")));
    }

    #[test]
    fn projects_json_filters_and_tags_category() {
        let portfolio = Portfolio::seeded();
        let json = projects_to_json(&portfolio, Some(Category::Completed));
        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["category"], "completed");
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["name"], "CGPA Calculator");
        assert_eq!(projects[0]["id"], 1);
        assert_eq!(projects[0]["category"], "completed");
    }

    #[test]
    fn skills_json_has_percent() {
        let portfolio = Portfolio::seeded();
        let value = serde_json::to_value(skills_to_json(&portfolio)).unwrap();
        assert_eq!(value["skills"][1]["name"], "Jetpack Compose");
        assert_eq!(value["skills"][1]["percent"], 85);
    }
}
