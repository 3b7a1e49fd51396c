//! The static trigger table and quick-access commands.

use aadinet_core::action::{ActionKind, CommandEntry};
use serde::Serialize;

pub const SHOW_PROJECTS: &str = "show --projects";
pub const SHOW_BARGAINRADAR: &str = "show --project bargainradar";
pub const SHOW_CAMPUSGPT: &str = "show --project campusgpt";
pub const CAT_RESUME: &str = "cat resume.pdf";
pub const ANALYZE_SKILLS: &str = "analyze --skills";
pub const WHOAMI_CONTACT: &str = "whoami --contact";
pub const UNLOCK_SECRET: &str = "unlock secret";
pub const CHAOS: &str = "chaos";
pub const HELP: &str = "help";

static BUILTIN: [CommandEntry; 9] = [
    CommandEntry {
        trigger: SHOW_PROJECTS,
        message: "🚀 Initializing project visualization modules...\n\n📊 Loading neural network interfaces...\n⚡ Spinning up development environments...\n\n✅ Project modules ready for inspection.",
        action: ActionKind::ShowProjects,
    },
    CommandEntry {
        trigger: SHOW_BARGAINRADAR,
        message: "📊 Loading BargainRadar module...\n\n🤖 AI-powered price prediction agent\n📈 Uses OpenAI Frontier API & Chroma vector database\n🎯 94% accuracy in market trend analysis\n⚡ Real-time price optimization\n\n🔧 Module status: ACTIVE | Performance: Optimal",
        action: ActionKind::None,
    },
    CommandEntry {
        trigger: SHOW_CAMPUSGPT,
        message: "🏫 Loading Campus GPT module...\n\n🧠 Multimodal RAG QA system for universities\n🔍 FireCrawler + LangChain + Gemini 2.5 Pro\n📚 Intelligent campus assistance platform\n🎓 Student query resolution: 96% success rate\n\n🔧 Module status: COMPLETED | Performance: Excellent",
        action: ActionKind::None,
    },
    CommandEntry {
        trigger: CAT_RESUME,
        message: "📄 Accessing neural profile data...\n\n👨‍💻 AADITYA KHANAL\n🎓 Data Science Student @ Northern Kentucky University\n📊 GPA: 3.74/4.0 | Expected Graduation: May 2026\n\n💼 EXPERIENCE:\n• Consumer Insights Data Analyst @ Beats By Dre (Sept-Oct 2024)\n• Student Researcher @ NKU HCI Lab (Dec 2023-Jul 2024)\n• Vice President @ Data Science Club (May 2024-Present)\n\n🏆 CERTIFICATIONS:\n• NVIDIA Deep Learning Fundamentals (March 2025)\n• Oracle Cloud AI Professional (July 2024)\n• Microsoft Azure AI Fundamentals (June 2024)\n\n📧 Contact: khanal.aditya1122@gmail.com\n📱 Phone: 859-628-1641",
        action: ActionKind::ShowResume,
    },
    CommandEntry {
        trigger: ANALYZE_SKILLS,
        message: "🧠 Initiating comprehensive skill diagnostics...\n\n🔍 Scanning neural pathways... ✅\n📊 Analyzing code repositories... ✅\n⚡ Evaluating project complexity... ✅\n🎮 Generating RPG-style power levels... ✅\n\n📈 Skill matrix compilation complete!\n🎯 Radar visualization activated.",
        action: ActionKind::ShowSkills,
    },
    CommandEntry {
        trigger: WHOAMI_CONTACT,
        message: "📧 CONTACT INFORMATION:\n\n✉️ Email: khanal.aditya1122@gmail.com\n📱 Phone: 859-628-1641\n🔗 LinkedIn: linkedin.com/in/-khanalaaditya/\n🐙 GitHub: github.com/ak-pydev\n🏆 Kaggle: kaggle.com/aadityaiscoding\n📍 Location: Northern Kentucky, USA\n\n🤝 Always open to collaboration and new opportunities!",
        action: ActionKind::None,
    },
    CommandEntry {
        trigger: UNLOCK_SECRET,
        message: "🔓 ACCESSING CLASSIFIED DEVELOPER FILES...\n\n🎭 SECRET UNLOCKED!\n\n😅 Confession #1: I once spent 8 hours debugging a machine learning model, only to discover I was training it on the test set. The model was 'learning' the answers! 🤦‍♂️\n\n🚀 Confession #2: My first 'AI chatbot' was actually 200 if-else statements pretending to be intelligent. It fooled everyone for months! 😂\n\n☕ Confession #3: I've written more code after midnight than during normal hours. Coffee consumption: 4.7 cups/day average.\n\n🦆 Confession #4: I still explain my code to a rubber duck. Success rate: 73%",
        action: ActionKind::None,
    },
    CommandEntry {
        trigger: CHAOS,
        message: "⚠️ WARNING: Initiating chaos protocol...\n\n🌀 Reality matrix destabilizing...\n⚡ Glitch subroutines activated...\n🔥 Dimensional barriers weakening...\n\n💀 PREPARE FOR NEURAL STORM 💀",
        action: ActionKind::ChaosMode,
    },
    CommandEntry {
        trigger: HELP,
        message: "🤖 AADINET COMMAND REFERENCE:\n\n📂 PROJECT COMMANDS:\n• show --projects - View all project modules\n• show --project [name] - Load specific project\n\n👤 PROFILE COMMANDS:\n• cat resume.pdf - Display resume data\n• analyze --skills - Run skill diagnostics\n• whoami --contact - Show contact info\n\n🎮 SPECIAL COMMANDS:\n• unlock secret - Access easter eggs\n• chaos - Activate glitch mode\n• help - Show this menu\n\n💡 TIP: I have memory! Ask follow-up questions.",
        action: ActionKind::None,
    },
];

/// Immutable, ordered mapping from trigger to canned response.
///
/// Lookups take an already-normalized key (trimmed, lower-case).
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    entries: &'static [CommandEntry],
}

impl CommandTable {
    /// The built-in AadiNet vocabulary.
    pub const fn builtin() -> Self {
        Self { entries: &BUILTIN }
    }

    /// Exact lookup on a normalized key.
    pub fn get(&self, normalized: &str) -> Option<&'static CommandEntry> {
        self.entries
            .iter()
            .find(|entry| entry.trigger.eq_ignore_ascii_case(normalized))
    }

    /// All triggers, in table order.
    pub fn triggers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.trigger)
    }

    pub fn entries(&self) -> &'static [CommandEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A quick-access button bound to one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickCommand {
    pub label: &'static str,
    pub command: &'static str,
}

static QUICK_COMMANDS: [QuickCommand; 4] = [
    QuickCommand { label: "View Projects", command: SHOW_PROJECTS },
    QuickCommand { label: "Access Resume", command: CAT_RESUME },
    QuickCommand { label: "Run Skill Diagnostics", command: ANALYZE_SKILLS },
    QuickCommand { label: "Contact Info", command: WHOAMI_CONTACT },
];

/// The quick-access commands shown under the terminal.
pub fn quick_commands() -> &'static [QuickCommand] {
    &QUICK_COMMANDS
}
