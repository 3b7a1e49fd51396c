//! Skill levels for the radar view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
    /// Hex colour used by graphical renderers
    pub color: &'static str,
    pub category: &'static str,
}

impl Skill {
    pub fn tier(&self) -> PowerTier {
        PowerTier::for_level(self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PowerTier {
    Learning,
    Advanced,
    Expert,
    Master,
}

impl PowerTier {
    pub fn for_level(level: u8) -> Self {
        match level {
            90.. => PowerTier::Master,
            80..=89 => PowerTier::Expert,
            70..=79 => PowerTier::Advanced,
            _ => PowerTier::Learning,
        }
    }
}

impl std::fmt::Display for PowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PowerTier::Learning => "Learning",
            PowerTier::Advanced => "Advanced",
            PowerTier::Expert => "Expert",
            PowerTier::Master => "Master",
        };
        f.write_str(label)
    }
}

static SKILLS: [Skill; 8] = [
    Skill { name: "Machine Learning", level: 87, color: "#00ff88", category: "AI/ML" },
    Skill { name: "Backend Dev", level: 92, color: "#0088ff", category: "Development" },
    Skill { name: "MLOps", level: 85, color: "#ff0088", category: "DevOps" },
    Skill { name: "Data Engineering", level: 81, color: "#ffaa00", category: "Data" },
    Skill { name: "FastAPI", level: 89, color: "#aa00ff", category: "Framework" },
    Skill { name: "SQL", level: 94, color: "#ff4400", category: "Database" },
    Skill { name: "Cloud Infra", level: 78, color: "#00aaff", category: "Infrastructure" },
    Skill { name: "Creativity", level: 100, color: "#ff6600", category: "Soft Skills" },
];

/// Level at or above which a skill counts as a "high performer".
pub const HIGH_LEVEL: u8 = 85;

pub fn skills() -> &'static [Skill] {
    &SKILLS
}

/// Aggregate figures shown under the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillSummary {
    /// Mean level, rounded half up
    pub average: u8,
    pub peak: u8,
    /// Skills at or above [`HIGH_LEVEL`]
    pub high_performers: usize,
}

impl SkillSummary {
    pub fn of(skills: &[Skill]) -> Self {
        if skills.is_empty() {
            return Self { average: 0, peak: 0, high_performers: 0 };
        }
        let total: u32 = skills.iter().map(|s| u32::from(s.level)).sum();
        let count = skills.len() as u32;
        let average = ((total * 2 + count) / (count * 2)) as u8;
        Self {
            average,
            peak: skills.iter().map(|s| s.level).max().unwrap_or(0),
            high_performers: skills.iter().filter(|s| s.level >= HIGH_LEVEL).count(),
        }
    }
}

pub fn summary() -> SkillSummary {
    SkillSummary::of(&SKILLS)
}
