//! Project cards.

use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => f.write_str("Active"),
            ProjectStatus::Completed => f.write_str("Completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectCategory {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "MLOps")]
    MlOps,
    #[serde(rename = "Full-Stack")]
    FullStack,
    #[serde(rename = "Data Engineering")]
    DataEngineering,
    #[serde(rename = "NLP")]
    Nlp,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::AiMl,
        ProjectCategory::MlOps,
        ProjectCategory::FullStack,
        ProjectCategory::DataEngineering,
        ProjectCategory::Nlp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::MlOps => "MLOps",
            ProjectCategory::FullStack => "Full-Stack",
            ProjectCategory::DataEngineering => "Data Engineering",
            ProjectCategory::Nlp => "NLP",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    /// Accepts the display label in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The category selector on the projects view. "All" disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// External links for a project. Placeholder links are stored as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
    /// 0..=100
    pub complexity: u8,
    pub category: ProjectCategory,
    pub links: ProjectLinks,
    /// Shown on the main projects panel, not only the archive
    pub featured: bool,
}

static PROJECTS: [Project; 8] = [
    Project {
        id: "bargain-radar",
        name: "BargainRadar",
        description: "AI-powered price prediction agent using OpenAI Frontier API, Hugging Face, and Chroma vector database for intelligent market analysis and price optimization.",
        tech: &["OpenAI", "Hugging Face", "LangChain", "Vector DB", "Python", "FastAPI"],
        status: ProjectStatus::Active,
        complexity: 87,
        category: ProjectCategory::AiMl,
        links: ProjectLinks {
            demo: Some("https://bargainradar-demo.vercel.app"),
            github: Some("https://github.com/ak-pydev/bargainradar"),
            live: Some("https://bargainradar.com"),
        },
        featured: true,
    },
    Project {
        id: "campus-gpt",
        name: "Campus GPT",
        description: "Multimodal RAG QA agent for university using FireCrawler, LangChain, and Google Gemini 2.5 Pro for intelligent campus assistance and student support.",
        tech: &["Gemini 2.5", "RAG", "Streamlit", "LangChain", "Python", "Firebase"],
        status: ProjectStatus::Completed,
        complexity: 92,
        category: ProjectCategory::AiMl,
        links: ProjectLinks {
            demo: Some("https://campusgpt-demo.streamlit.app"),
            github: Some("https://github.com/ak-pydev/campus-gpt"),
            live: Some("https://campusgpt.streamlit.app"),
        },
        featured: true,
    },
    Project {
        id: "tube2text",
        name: "Tube2Text Agent",
        description: "AI agent using CrewAI and Gemini 2.5 Flash to transcribe YouTube videos and generate SEO-optimized blog posts automatically with content analysis.",
        tech: &["CrewAI", "Gemini 2.5", "SEO", "Content Gen", "Python", "YouTube API"],
        status: ProjectStatus::Active,
        complexity: 85,
        category: ProjectCategory::AiMl,
        links: ProjectLinks {
            demo: Some("https://tube2text-demo.vercel.app"),
            github: Some("https://github.com/ak-pydev/tube2text"),
            live: Some("https://tube2text.vercel.app"),
        },
        featured: true,
    },
    Project {
        id: "colorectal-cancer",
        name: "Colorectal Cancer Prediction",
        description: "End-to-end MLOps pipeline for cancer risk prediction using Docker, PyTorch, MLflow, and Kubeflow with comprehensive model monitoring.",
        tech: &["PyTorch", "MLflow", "Docker", "Kubeflow", "Python", "Scikit-learn"],
        status: ProjectStatus::Completed,
        complexity: 95,
        category: ProjectCategory::MlOps,
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/ak-pydev/colorectal-cancer-prediction"),
            live: None,
        },
        featured: false,
    },
    Project {
        id: "khutruke-ai",
        name: "Khutruke AI",
        description: "MERN-stack chatbot web application using OpenAI's GPT-4 API for personalized financial planning and investment advice. Hackathon winner.",
        tech: &["MERN", "GPT-4", "FinTech", "Chatbot", "MongoDB", "Express"],
        status: ProjectStatus::Completed,
        complexity: 88,
        category: ProjectCategory::FullStack,
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/ak-pydev/khutruke-ai"),
            live: None,
        },
        featured: false,
    },
    Project {
        id: "data-pipeline",
        name: "Real-time Data Pipeline",
        description: "Scalable data processing pipeline using Apache Kafka, Spark, and Delta Lake for real-time analytics and machine learning feature engineering.",
        tech: &["Kafka", "Spark", "Delta Lake", "Python", "AWS", "Airflow"],
        status: ProjectStatus::Active,
        complexity: 90,
        category: ProjectCategory::DataEngineering,
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/ak-pydev/realtime-data-pipeline"),
            live: None,
        },
        featured: false,
    },
    Project {
        id: "sentiment-analyzer",
        name: "Multi-language Sentiment Analyzer",
        description: "Advanced sentiment analysis system supporting 15+ languages using transformer models and custom training on domain-specific datasets.",
        tech: &["Transformers", "BERT", "Python", "FastAPI", "Docker", "PostgreSQL"],
        status: ProjectStatus::Completed,
        complexity: 83,
        category: ProjectCategory::Nlp,
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/ak-pydev/multilang-sentiment-analyzer"),
            live: None,
        },
        featured: false,
    },
    Project {
        id: "recommendation-engine",
        name: "Hybrid Recommendation Engine",
        description: "Sophisticated recommendation system combining collaborative filtering, content-based filtering, and deep learning for personalized user experiences.",
        tech: &["TensorFlow", "Python", "Redis", "MongoDB", "FastAPI", "Docker"],
        status: ProjectStatus::Active,
        complexity: 91,
        category: ProjectCategory::AiMl,
        links: ProjectLinks {
            demo: None,
            github: Some("https://github.com/ak-pydev/hybrid-recommendation-engine"),
            live: None,
        },
        featured: false,
    },
];

/// Every project, in archive order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// The projects shown on the main projects panel.
pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn by_category(filter: CategoryFilter) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}

/// Look a project up by its id (exact, case-sensitive).
pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
