//! Static recommendation catalog.
//!
//! A curated video catalog plus templated course and project entries.
//! Stands in for the content services the recommender fans out to.

use super::RecommendationSource;
use crate::stages::models::{Difficulty, Recommendation, ResourceType};

/// The built-in recommendation source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSource;

impl CatalogSource {
    /// Creates the catalog source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn base(
    id: String,
    resource_type: ResourceType,
    title: String,
    description: String,
    skill: &str,
    difficulty: Difficulty,
) -> Recommendation {
    Recommendation {
        id,
        resource_type,
        title,
        description,
        skill: skill.to_string(),
        difficulty,
        url: None,
        duration: None,
        platform: None,
        price: None,
        estimated_time: None,
        github_url: None,
    }
}

impl RecommendationSource for CatalogSource {
    fn videos(&self, skill: &str) -> Vec<Recommendation> {
        let entry = match skill {
            "JavaScript" => Some((
                "js-1",
                "JavaScript Fundamentals",
                "Learn the basics of JavaScript",
                "https://www.youtube.com/watch?v=W6NZfCO5SIk",
                "3:12:00",
            )),
            "Python" => Some((
                "py-1",
                "Python for Beginners",
                "Complete Python tutorial",
                "https://www.youtube.com/watch?v=_uQrJ0TkZlc",
                "4:26:00",
            )),
            _ => None,
        };
        entry
            .map(|(id, title, description, url, duration)| {
                let mut rec = base(
                    id.to_string(),
                    ResourceType::Video,
                    title.to_string(),
                    description.to_string(),
                    skill,
                    Difficulty::Beginner,
                );
                rec.url = Some(url.to_string());
                rec.duration = Some(duration.to_string());
                rec
            })
            .into_iter()
            .collect()
    }

    fn courses(&self, skill: &str) -> Vec<Recommendation> {
        let mut rec = base(
            format!("course-{}-1", skill.to_lowercase()),
            ResourceType::Course,
            format!("{skill} Complete Course"),
            format!("Comprehensive {skill} course for all levels"),
            skill,
            Difficulty::Intermediate,
        );
        rec.platform = Some("Udemy".to_string());
        rec.duration = Some("10 hours".to_string());
        rec.price = Some("$19.99".to_string());
        vec![rec]
    }

    fn projects(&self, skill: &str) -> Vec<Recommendation> {
        let mut rec = base(
            format!("project-{}-1", skill.to_lowercase()),
            ResourceType::Project,
            format!("Build a {skill} Application"),
            format!("Create a real-world project using {skill}"),
            skill,
            Difficulty::Intermediate,
        );
        rec.estimated_time = Some("2-3 weeks".to_string());
        rec.github_url = Some(format!(
            "https://github.com/example/{}-project",
            skill.to_lowercase()
        ));
        vec![rec]
    }
}
