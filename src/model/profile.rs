use serde::Serialize;

/// Header shown on Home and Skills
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Email,
    Phone,
    Share,
    List,
}

impl ContactIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ContactIcon::Email => "\u{2709}",
            ContactIcon::Phone => "\u{260E}",
            ContactIcon::Share => "\u{21AA}",
            ContactIcon::List => "\u{2630}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactEntry {
    pub icon: ContactIcon,
    pub label: String,
    pub value: String,
}

impl ContactEntry {
    fn new(icon: ContactIcon, label: &str, value: &str) -> Self {
        ContactEntry {
            icon,
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

pub(super) fn seed_profile() -> Profile {
    Profile {
        name: "John Doe".into(),
        title: "Android Developer".into(),
        bio: "Hi, I'm John Doe, a passionate Android Developer. \
              I love building sleek, user-friendly apps using Kotlin and Jetpack Compose."
            .into(),
    }
}

pub(super) fn seed_education() -> Vec<Education> {
    [
        ("Bachelor of Computer Science", "Tech University", "2018-2022"),
        ("Android Development Certification", "Google Developers", "2022"),
        ("Kotlin Masterclass", "Online Course Platform", "2023"),
    ]
    .into_iter()
    .map(|(degree, institution, year)| Education {
        degree: degree.into(),
        institution: institution.into(),
        year: year.into(),
    })
    .collect()
}

pub(super) fn seed_achievements() -> Vec<String> {
    vec![
        "Completed 200+ Leetcode Problems".into(),
        "Published 3 apps on Google Play Store".into(),
        "Winner of Regional Hackathon 2023".into(),
        "Open Source Contributor".into(),
    ]
}

pub(super) fn seed_contacts() -> Vec<ContactEntry> {
    vec![
        ContactEntry::new(ContactIcon::Email, "Email", "johndoe@gmail.com"),
        ContactEntry::new(ContactIcon::Phone, "Phone", "+1 123 456 7890"),
        ContactEntry::new(ContactIcon::Share, "LinkedIn", "linkedin.com/in/johndoe"),
        ContactEntry::new(ContactIcon::List, "GitHub", "github.com/johndoe"),
    ]
}
