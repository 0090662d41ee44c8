// Static portfolio content: the records behind every section of the site and
// the source for the chat system prompt.
//
// Everything here is `'static` data; there is no loading or mutation.

pub mod data;

use serde::Serialize;

pub use data::PORTFOLIO;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub experience: &'static [ExperienceItem],
    pub skills: &'static [SkillCategory],
    pub proficiency: &'static [TechnicalProficiency],
    pub projects: &'static [Project],
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: Name,
    pub title: &'static str,
    pub bio: Bio,
    pub contact: Contact,
    pub education: Education,
    pub avatar: Avatar,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Name {
    pub first: &'static str,
    pub last: &'static str,
}

impl Name {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bio {
    pub short: &'static str,
    pub long: &'static [&'static str],
}

/// Optional fields are omitted from both the JSON output and the system prompt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub email: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
    pub location: &'static str,
    pub github: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Avatar {
    pub image: &'static str,
    pub fallback: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceItem {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    /// Icon name understood by the front-end icon set.
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechnicalProficiency {
    pub name: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    /// Headline line used in summaries. Empty when the project has no description.
    pub fn summary(&self) -> &'static str {
        self.description.first().copied().unwrap_or("")
    }
}
