use super::profile::{
    ContactEntry, Education, Profile, seed_achievements, seed_contacts, seed_education,
    seed_profile,
};
use super::project::{Project, RecordId};
use super::skill::{Skill, SkillIcon};

/// All portfolio data for one session. Rebuilt from seed data on every launch.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub achievements: Vec<String>,
    /// Fixed list; never mutated after construction
    pub contacts: Vec<ContactEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    next_id: u64,
}

impl Portfolio {
    /// A portfolio with no projects or skills (static sections still seeded)
    pub fn empty() -> Self {
        Portfolio {
            profile: seed_profile(),
            education: seed_education(),
            achievements: seed_achievements(),
            contacts: seed_contacts(),
            projects: Vec::new(),
            skills: Vec::new(),
            next_id: 1,
        }
    }

    /// The launch-time portfolio
    pub fn seeded() -> Self {
        let mut portfolio = Self::empty();

        let projects = [
            (
                "CGPA Calculator",
                "Kotlin, Jetpack Compose",
                "An app to calculate CGPA based on course credits and grades.",
                true,
            ),
            (
                "WishList App",
                "Kotlin, Firebase, Material Design",
                "An app to create and manage your wishlist with cloud synchronization.",
                true,
            ),
            (
                "Portfolio App",
                "Jetpack Compose, Room Database",
                "A portfolio management app to showcase your projects and skills.",
                false,
            ),
            (
                "E-commerce App",
                "Kotlin, Retrofit, MVVM",
                "An online shopping app with product catalog and cart functionality.",
                false,
            ),
        ];
        for (name, tech_stack, description, completed) in projects {
            let id = portfolio.allocate_id();
            portfolio.projects.push(Project {
                id,
                name: name.into(),
                tech_stack: tech_stack.into(),
                description: description.into(),
                completed,
            });
        }

        let skills = [
            ("Kotlin", 0.9),
            ("Jetpack Compose", 0.85),
            ("Android", 0.8),
            ("UI/UX", 0.7),
            ("Java", 0.75),
            ("Git", 0.8),
        ];
        for (name, level) in skills {
            let id = portfolio.allocate_id();
            portfolio.skills.push(Skill {
                id,
                icon: SkillIcon::Custom,
                name: name.into(),
                level,
            });
        }

        portfolio
    }

    /// Hand out the next record id. Ids are never reused within a session.
    pub fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn find_project(&self, id: RecordId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        let p = Portfolio::seeded();
        assert_eq!(p.projects.len(), 4);
        assert_eq!(p.skills.len(), 6);
        assert_eq!(p.contacts.len(), 4);
        assert_eq!(p.education.len(), 3);
        assert_eq!(p.achievements.len(), 4);
    }

    #[test]
    fn test_seed_ids_unique() {
        let p = Portfolio::seeded();
        let ids: HashSet<RecordId> = p
            .projects
            .iter()
            .map(|r| r.id)
            .chain(p.skills.iter().map(|s| s.id))
            .collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_seed_completion_split() {
        let p = Portfolio::seeded();
        let done: Vec<&str> = p
            .projects
            .iter()
            .filter(|r| r.completed)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(done, vec!["CGPA Calculator", "WishList App"]);
    }

    #[test]
    fn test_allocate_id_monotonic() {
        let mut p = Portfolio::empty();
        let a = p.allocate_id();
        let b = p.allocate_id();
        assert!(b > a);
    }

    #[test]
    fn test_find_project() {
        let p = Portfolio::seeded();
        let first = p.projects[0].id;
        assert_eq!(
            p.find_project(first).map(|r| r.name.as_str()),
            Some("CGPA Calculator")
        );
        assert!(p.find_project(RecordId(9999)).is_none());
    }
}
