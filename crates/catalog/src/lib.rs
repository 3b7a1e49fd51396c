//! # AadiNet Catalogue
//!
//! The static data behind the projects and skills views. Everything here is
//! built at compile time and never changes at runtime.

pub mod projects;
pub mod skills;

pub use projects::{
    CategoryFilter, Project, ProjectCategory, ProjectLinks, ProjectStatus, UnknownCategory,
    by_category, featured, find, projects,
};
pub use skills::{PowerTier, Skill, SkillSummary, skills, summary};
