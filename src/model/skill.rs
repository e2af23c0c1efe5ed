use serde::Serialize;

use super::project::RecordId;

/// Level given to skills added at runtime
pub const DEFAULT_LEVEL: f32 = 0.75;

/// Icon resource shown on a skill card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    #[default]
    Custom,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Custom => "\u{25C6}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub id: RecordId,
    pub icon: SkillIcon,
    pub name: String,
    /// Proficiency in 0.0..=1.0
    pub level: f32,
}

impl Skill {
    /// Level as a whole percentage, truncated: 0.855 -> 85
    pub fn percent(&self) -> u8 {
        (self.level.clamp(0.0, 1.0) * 100.0) as u8
    }
}
