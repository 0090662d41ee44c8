//! Read-only endpoints serving the site's section data.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::{
    ExperienceItem, PersonalInfo, Portfolio, Project, SkillCategory, TechnicalProficiency,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub categories: &'static [SkillCategory],
    pub proficiency: &'static [TechnicalProficiency],
}

/// GET /api/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<Portfolio> {
    Json(*state.portfolio)
}

/// GET /api/portfolio/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<PersonalInfo> {
    Json(state.portfolio.personal)
}

/// GET /api/portfolio/experience
pub async fn handle_get_experience(
    State(state): State<AppState>,
) -> Json<&'static [ExperienceItem]> {
    Json(state.portfolio.experience)
}

/// GET /api/portfolio/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        categories: state.portfolio.skills,
        proficiency: state.portfolio.proficiency,
    })
}

/// GET /api/portfolio/projects?featured=true
///
/// Without `featured`, every project is returned in display order.
pub async fn handle_get_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Json<Vec<Project>> {
    Json(filter_projects(state.portfolio.projects, params.featured))
}

fn filter_projects(projects: &[Project], featured: Option<bool>) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| featured.map_or(true, |f| p.featured == f))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::content::PORTFOLIO;
    use crate::llm_client::GeminiClient;
    use crate::routes::build_router;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let state = AppState::new(
            Config::new(None, "http://unused"),
            Arc::new(GeminiClient::new("http://unused")),
        );
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample(id: u32, featured: bool) -> Project {
        Project {
            id,
            title: "Sample",
            description: &["line"],
            tags: &[],
            image: "",
            github_url: None,
            live_url: None,
            featured,
        }
    }

    #[test]
    fn test_filter_projects_by_featured_flag() {
        let projects = [sample(1, true), sample(2, false), sample(3, true)];

        let ids = |v: Vec<Project>| v.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_projects(&projects, None)), vec![1, 2, 3]);
        assert_eq!(ids(filter_projects(&projects, Some(true))), vec![1, 3]);
        assert_eq!(ids(filter_projects(&projects, Some(false))), vec![2]);
    }

    #[tokio::test]
    async fn test_get_portfolio_returns_every_section() {
        let (status, body) = get("/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personal"]["name"]["first"], "Haruka");
        assert_eq!(
            body["experience"].as_array().unwrap().len(),
            PORTFOLIO.experience.len()
        );
        assert_eq!(
            body["projects"].as_array().unwrap().len(),
            PORTFOLIO.projects.len()
        );
        assert_eq!(
            body["proficiency"].as_array().unwrap().len(),
            PORTFOLIO.proficiency.len()
        );
    }

    #[tokio::test]
    async fn test_get_profile() {
        let (status, body) = get("/api/portfolio/profile").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact"]["location"], "Tokyo, Japan");
        assert!(body["contact"].get("linkedin").is_none());
    }

    #[tokio::test]
    async fn test_get_skills() {
        let (status, body) = get("/api/portfolio/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][0]["title"], "Frontend / Web");
        assert_eq!(body["proficiency"][0]["percentage"], 97);
    }

    #[tokio::test]
    async fn test_get_experience() {
        let (status, body) = get("/api/portfolio/experience").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["company"], "TechnoBridge Inc.");
    }

    #[tokio::test]
    async fn test_get_projects_with_filter() {
        let (status, body) = get("/api/portfolio/projects?featured=false").await;
        assert_eq!(status, StatusCode::OK);
        let expected = PORTFOLIO.projects.iter().filter(|p| !p.featured).count();
        assert_eq!(body.as_array().unwrap().len(), expected);

        let (_, all) = get("/api/portfolio/projects").await;
        assert_eq!(all.as_array().unwrap().len(), PORTFOLIO.projects.len());
        assert_eq!(all[0]["id"], 1);
    }
}
