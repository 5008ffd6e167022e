//! Axum route handlers for the matching API.
//!
//! Every endpoint is stateless: the request carries all text, the response is
//! computed from it and the shared lexicon, nothing is stored.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::ranking::rank_resumes;
use crate::matching::{
    detect_role, extract_skill_frequency, local_match, split_sections, LocalMatchResult,
    MatchBand, RankingBreakdown, RoleDetection, SectionSplit, SkillFrequencyMap,
};
use crate::state::AppState;

/// Job cards show this many keyword tags.
const DEFAULT_KEYWORD_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LocalMatchRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct LocalMatchResponse {
    #[serde(flatten)]
    pub result: LocalMatchResult,
    pub band: MatchBand,
    pub suggest_tailoring: bool,
}

#[derive(Debug, Deserialize)]
pub struct CandidateResume {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub resumes: Vec<CandidateResume>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResume {
    pub id: String,
    pub score: f64,
    pub breakdown: RankingBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestCandidate {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub best: Option<BestCandidate>,
    /// Request order.
    pub scores: Vec<RankedResume>,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub text: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub skills: SkillFrequencyMap,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SectionsRequest {
    #[serde(default)]
    pub jd_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/local
///
/// Weighted required/preferred skill match shown on the job detail screen.
pub async fn handle_local_match(
    State(state): State<AppState>,
    Json(request): Json<LocalMatchRequest>,
) -> Result<Json<LocalMatchResponse>, AppError> {
    let result = local_match(&state.lexicon, &request.resume_text, &request.jd_text);
    debug!(
        score = result.score,
        present = result.present.len(),
        missing = result.missing.len(),
        no_skills_found = result.no_skills_found,
        "local match computed"
    );

    Ok(Json(LocalMatchResponse {
        band: result.band(),
        suggest_tailoring: result.suggests_tailoring(),
        result,
    }))
}

/// POST /api/v1/match/rank
///
/// Scores every candidate resume against one JD and reports the best one.
/// Ties keep the earliest candidate.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let max = state.config.max_rank_candidates;
    if request.resumes.len() > max {
        return Err(AppError::Validation(format!(
            "at most {max} resumes can be ranked per request, got {}",
            request.resumes.len()
        )));
    }

    // Ranking is CPU-bound: keep it off the async executor.
    let lexicon = state.lexicon.clone();
    let (ids, ranking) = tokio::task::spawn_blocking(move || {
        let (ids, texts): (Vec<String>, Vec<String>) = request
            .resumes
            .into_iter()
            .map(|resume| (resume.id, resume.text))
            .unzip();
        let ranking = rank_resumes(&lexicon, &texts, &request.jd_text, &request.job_title);
        (ids, ranking)
    })
    .await
    .map_err(|e| anyhow::anyhow!("ranking task failed: {e}"))?;

    let best = ranking.best.map(|b| BestCandidate {
        id: ids[b.index].clone(),
        score: b.score,
    });
    let scores: Vec<RankedResume> = ids
        .into_iter()
        .zip(ranking.scored)
        .map(|(id, scored)| RankedResume {
            id,
            score: scored.score,
            breakdown: scored.breakdown,
        })
        .collect();

    match &best {
        Some(b) => info!(id = %b.id, score = b.score, candidates = scores.len(), "best resume selected"),
        None => debug!("no resumes to rank"),
    }

    Ok(Json(RankResponse { best, scores }))
}

/// POST /api/v1/analyze/role
pub async fn handle_detect_role(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<RoleDetection>, AppError> {
    let detection = detect_role(&state.lexicon, &request.text);
    debug!(
        resolved = detection.is_resolved(),
        role = ?detection.role,
        confidence = detection.confidence,
        "role detected"
    );
    Ok(Json(detection))
}

/// POST /api/v1/analyze/keywords
///
/// Skill frequencies plus the first `limit` skill names as display tags.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let limit = request.limit.unwrap_or(DEFAULT_KEYWORD_LIMIT);
    let skills = extract_skill_frequency(&state.lexicon, &request.text);
    let keywords = skills.keywords(limit);
    debug!(skills = skills.len(), keywords = keywords.len(), "keywords extracted");
    Ok(Json(KeywordsResponse { skills, keywords }))
}

/// POST /api/v1/analyze/sections
pub async fn handle_sections(Json(request): Json<SectionsRequest>) -> Json<SectionSplit> {
    Json(split_sections(&request.jd_text))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::lexicon::Lexicon;
    use crate::routes::build_router;

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            config,
            lexicon: Arc::new(Lexicon::builtin().clone()),
        })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobfit-api");
    }

    #[tokio::test]
    async fn test_local_match_endpoint() {
        let (status, body) = post_json(
            app(),
            "/api/v1/match/local",
            json!({
                "resume_text": "Shipped services on k8s",
                "jd_text": "Requirements: Kubernetes"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["present"], json!(["kubernetes"]));
        assert_eq!(body["band"], "strong");
        assert_eq!(body["suggest_tailoring"], false);
        assert_eq!(body["no_skills_found"], false);
    }

    #[tokio::test]
    async fn test_local_match_missing_fields_default_empty() {
        let (status, body) = post_json(app(), "/api/v1/match/local", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50);
        assert_eq!(body["no_skills_found"], true);
        assert_eq!(body["suggest_tailoring"], true);
    }

    #[tokio::test]
    async fn test_rank_endpoint_picks_best() {
        let (status, body) = post_json(
            app(),
            "/api/v1/match/rank",
            json!({
                "jd_text": "We are hiring a Product Manager to own the product roadmap and product strategy.",
                "job_title": "Product Manager",
                "resumes": [
                    {"id": "swe", "text": "Software Engineer. Distributed systems and system design."},
                    {"id": "pm", "text": "Product Manager. Owned the product roadmap and product strategy."}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["best"]["id"], "pm");
        let scores = body["scores"].as_array().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0]["id"], "swe");
        assert_eq!(scores[0]["breakdown"]["role_match"], 0.0);
        assert_eq!(scores[1]["breakdown"]["role_match"], 100.0);
    }

    #[tokio::test]
    async fn test_rank_without_resumes() {
        let (status, body) = post_json(app(), "/api/v1/match/rank", json!({"jd_text": "x"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["best"], Value::Null);
        assert_eq!(body["scores"], json!([]));
    }

    #[tokio::test]
    async fn test_rank_rejects_too_many_candidates() {
        let config = Config {
            max_rank_candidates: 1,
            ..Config::default()
        };
        let (status, body) = post_json(
            app_with(config),
            "/api/v1/match/rank",
            json!({
                "jd_text": "Python",
                "resumes": [{"id": "a", "text": ""}, {"id": "b", "text": ""}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_detect_role_endpoint() {
        let (status, body) = post_json(
            app(),
            "/api/v1/analyze/role",
            json!({"text": "Senior Software Engineer working on distributed systems"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "software_engineer");

        let (_, body) = post_json(app(), "/api/v1/analyze/role", json!({"text": "bake bread"})).await;
        assert_eq!(body["role"], Value::Null);
        assert_eq!(body["confidence"], 0);
    }

    #[tokio::test]
    async fn test_keywords_endpoint_limit() {
        let (status, body) = post_json(
            app(),
            "/api/v1/analyze/keywords",
            json!({"text": "Python, Rust and SQL. More Python.", "limit": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"]["python"], 2);
        assert_eq!(body["skills"]["rust"], 1);
        assert_eq!(body["keywords"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sections_endpoint() {
        let (status, body) = post_json(
            app(),
            "/api/v1/analyze/sections",
            json!({"jd_text": "Python\nNice to have:\nGo"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["required"], "Python");
        assert_eq!(body["preferred"], "Nice to have:\nGo");
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/match/local")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
