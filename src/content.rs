// Page content - everything the showcase displays
//
// Built-in defaults describe a designer/marketer portfolio. A TOML content
// file can replace any top-level list; omitted lists keep their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One testimonial slide
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// One service card
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    pub blurb: String,
}

/// One portfolio entry (opens a modal when chosen)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Project {
    /// Modal body text, falling back to a generic description
    pub fn description(&self) -> String {
        self.description.clone().unwrap_or_else(|| {
            format!(
                "This is a detailed view of the {} project. Here you would typically \
                 show more images, project details, client testimonials, etc.",
                self.title
            )
        })
    }
}

/// One animated statistic
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    pub target: u32,
}

/// Everything shown on the page
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub name: String,
    pub tagline: String,
    pub phrases: Vec<String>,
    pub stats: Vec<Stat>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

/// Content file as written by users (every field optional)
#[derive(Debug, Deserialize, Default)]
struct FileContent {
    name: Option<String>,
    tagline: Option<String>,
    phrases: Option<Vec<String>>,
    stats: Option<Vec<Stat>>,
    services: Option<Vec<Service>>,
    projects: Option<Vec<Project>>,
    testimonials: Option<Vec<Testimonial>>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            tagline: "Designing brands that people remember.".to_string(),
            phrases: vec![
                "Graphic Designer".to_string(),
                "Digital Marketer".to_string(),
            ],
            stats: vec![
                stat("Projects Completed", 150),
                stat("Happy Clients", 80),
                stat("Years Experience", 8),
                stat("Client Satisfaction", 100),
            ],
            services: vec![
                service("Brand Identity", "Logos, palettes and guidelines that hold together."),
                service("Social Media", "Campaigns planned, designed and measured."),
                service("Web Design", "Landing pages that turn visitors into clients."),
                service("Print Design", "Brochures, posters and packaging."),
            ],
            projects: vec![
                project("Coffee House Rebrand", "Branding"),
                project("Fitness App Launch", "Marketing"),
                project("Eco Store Website", "Web Design"),
                project("Music Festival Posters", "Print"),
            ],
            testimonials: vec![
                testimonial(
                    "Working with Alex transformed our brand. Sales went up 40% in the first quarter after launch.",
                    "Sarah Johnson",
                    "CEO, Bean There Coffee",
                ),
                testimonial(
                    "Creative, fast and always on brief. Our social engagement has never been higher.",
                    "Michael Chen",
                    "Marketing Director, FitLife",
                ),
                testimonial(
                    "The new website paid for itself within two months. I recommend Alex to everyone.",
                    "Emma Williams",
                    "Founder, Green Goods",
                ),
            ],
        }
    }
}

fn stat(label: &str, target: u32) -> Stat {
    Stat {
        label: label.to_string(),
        target,
    }
}

fn service(title: &str, blurb: &str) -> Service {
    Service {
        title: title.to_string(),
        blurb: blurb.to_string(),
    }
}

fn project(title: &str, category: &str) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        description: None,
    }
}

fn testimonial(quote: &str, author: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
    }
}

impl Content {
    /// Parse content from TOML, filling gaps with defaults
    pub fn from_toml(source: &str) -> Result<Self> {
        let file: FileContent = toml::from_str(source).context("Invalid content TOML")?;
        let defaults = Self::default();

        Ok(Self {
            name: file.name.unwrap_or(defaults.name),
            tagline: file.tagline.unwrap_or(defaults.tagline),
            phrases: file.phrases.unwrap_or(defaults.phrases),
            stats: file.stats.unwrap_or(defaults.stats),
            services: file.services.unwrap_or(defaults.services),
            projects: file.projects.unwrap_or(defaults.projects),
            testimonials: file.testimonials.unwrap_or(defaults.testimonials),
        })
    }

    /// Load content from `path`, or the built-in defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        Self::from_toml(&source)
            .with_context(|| format!("Failed to parse content file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_matching_testimonials() {
        let content = Content::default();
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.phrases, vec!["Graphic Designer", "Digital Marketer"]);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let content = Content::from_toml(
            r#"
name = "Jo"

[[testimonials]]
quote = "Great"
author = "Sam"
role = "Client"
"#,
        )
        .unwrap();

        assert_eq!(content.name, "Jo");
        assert_eq!(content.testimonials.len(), 1);
        assert_eq!(content.services, Content::default().services);
    }

    #[test]
    fn empty_testimonials_are_allowed() {
        let content = Content::from_toml("testimonials = []").unwrap();
        assert!(content.testimonials.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Content::from_toml("stats = 3").is_err());
    }

    #[test]
    fn project_description_fallback() {
        let p = project("Atlas", "Web");
        assert!(p.description().contains("Atlas project"));
    }
}
