//! Plain-text rendering of the terminal, panels and chaos effects.

use aadinet_catalog::{Project, Skill, SkillSummary};
use aadinet_core::memory::MemoryPanel;
use aadinet_core::message::{Message, Role};
use rand::Rng;

pub const CHAOS_BANNER: &str = "SIMULATION: CHAOS MODE";

const GLITCH_CHARS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// Chance that any one character is scrambled.
const GLITCH_RATE: f64 = 0.3;

/// Scramble `text` the way chaos mode does. Spaces and colons survive.
pub fn glitch(text: &str) -> String {
    glitch_with(text, &mut rand::rng(), GLITCH_RATE)
}

pub fn glitch_with<R: Rng + ?Sized>(text: &str, rng: &mut R, rate: f64) -> String {
    text.chars()
        .map(|c| {
            if c == ' ' || c == ':' || !rng.random_bool(rate) {
                c
            } else {
                char::from(GLITCH_CHARS[rng.random_range(0..GLITCH_CHARS.len())])
            }
        })
        .collect()
}

/// One transcript entry, prefixed per line with its role label.
pub fn message(message: &Message) -> String {
    let label = match message.role {
        Role::User => format!("  {} $", message.role.label()),
        Role::Ai => format!("  {} >", message.role.label()),
        Role::System => format!("  [{}]", message.role.label()),
    };
    message
        .content
        .lines()
        .map(|line| format!("{label} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The "Memory Active" footer. Empty until something has been typed.
pub fn memory_panel(panel: &MemoryPanel) -> String {
    if panel.total == 0 {
        return String::new();
    }
    let mut out = format!("  🧠 Memory Active · Session queries: {}", panel.total);
    for query in &panel.recent {
        out.push_str(&format!("\n     → {query}"));
    }
    if panel.hidden > 0 {
        out.push_str(&format!("\n     +{} more...", panel.hidden));
    }
    out
}

pub fn projects<'a>(projects: impl IntoIterator<Item = &'a Project>) -> String {
    let mut out = String::from("  📂 PROJECT MODULES\n  ==================\n");
    for project in projects {
        out.push_str(&format!(
            "\n  {} [{}] · {} · complexity {}%\n",
            project.name, project.status, project.category, project.complexity
        ));
        out.push_str(&format!("    {}\n", project.description));
        out.push_str(&format!("    tech: {}\n", project.tech.join(", ")));
        let links = [
            ("demo", project.links.demo),
            ("github", project.links.github),
            ("live", project.links.live),
        ];
        for (kind, url) in links {
            if let Some(url) = url {
                out.push_str(&format!("    {kind}: {url}\n"));
            }
        }
    }
    out
}

pub fn skills(skills: &[Skill], summary: &SkillSummary) -> String {
    let mut out = String::from("  🎯 SKILL DIAGNOSTICS\n  ===================\n\n");
    let width = skills.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for skill in skills {
        out.push_str(&format!(
            "  {:<width$}  {} {:>3}  {}{}\n",
            skill.name,
            bar(skill.level),
            skill.level,
            skill.tier(),
            if skill.level == 100 { " 💯" } else { "" },
        ));
    }
    out.push_str(&format!(
        "\n  Average {} · Peak {} · High performers {}\n",
        summary.average, summary.peak, summary.high_performers
    ));
    out
}

/// A 20-cell level bar.
fn bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) / 5;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadinet_core::action::ActionKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn glitch_keeps_spaces_and_colons() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let out = glitch_with(CHAOS_BANNER, &mut rng, 0.9);
            assert_eq!(out.chars().count(), CHAOS_BANNER.chars().count());
            for (a, b) in CHAOS_BANNER.chars().zip(out.chars()) {
                if a == ' ' || a == ':' {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn glitch_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(glitch_with(CHAOS_BANNER, &mut rng, 0.0), CHAOS_BANNER);
    }

    #[test]
    fn glitch_rate_one_scrambles_every_letter() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = glitch_with("ABC", &mut rng, 1.0);
        assert!(out.bytes().all(|b| GLITCH_CHARS.contains(&b)));
    }

    #[test]
    fn message_lines_are_labelled() {
        let msg = Message::ai("one\ntwo", ActionKind::None);
        assert_eq!(message(&msg), "  aadinet > one\n  aadinet > two");
        assert_eq!(message(&Message::user("help")), "  user@terminal $ help");
    }

    #[test]
    fn memory_panel_hidden_until_used() {
        assert!(memory_panel(&MemoryPanel::default()).is_empty());

        let entries: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let out = memory_panel(&MemoryPanel::from_entries(&entries));
        assert!(out.contains("Session queries: 4"));
        assert!(out.contains("→ d"));
        assert!(!out.contains("→ a"));
        assert!(out.ends_with("+1 more..."));
    }

    #[test]
    fn projects_panel_skips_absent_links() {
        let project = aadinet_catalog::find("khutruke-ai").unwrap();
        let out = projects([project]);
        assert!(out.contains("Khutruke AI [Completed] · Full-Stack"));
        assert!(out.contains("github: https://github.com/ak-pydev/khutruke-ai"));
        assert!(!out.contains("demo:"));
    }

    #[test]
    fn skills_panel_shows_tiers_and_summary() {
        let out = skills(aadinet_catalog::skills(), &aadinet_catalog::summary());
        assert!(out.contains("Master"));
        assert!(out.contains("💯"));
        assert!(out.contains("Average 88 · Peak 100 · High performers 6"));
    }

    #[test]
    fn bar_scales_to_twenty_cells() {
        assert_eq!(bar(100).chars().count(), 20);
        assert_eq!(bar(0), "░".repeat(20));
        assert_eq!(bar(50).chars().filter(|c| *c == '█').count(), 10);
    }
}
