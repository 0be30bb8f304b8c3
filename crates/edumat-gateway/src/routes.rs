//! API route handlers for the gateway.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "edumat-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "activities": state.service.activity_count(),
    }))
}

/// Landing page.
pub async fn index_page() -> Html<&'static str> {
    Html(super::pages::index_html())
}

/// Activity configuration page.
pub async fn config_page() -> Html<&'static str> {
    Html(super::pages::config_html())
}

/// Configurable activity parameters and their types.
pub async fn json_params() -> Json<serde_json::Value> {
    Json(serde_json::json!([
        {"name": "summary", "type": "text/plain"},
        {"name": "instructions", "type": "text/plain"},
    ]))
}

/// Available analytics fields and their types. Static descriptor; no
/// interaction with the store.
pub async fn analytics_list() -> Json<serde_json::Value> {
    Json(edumat_analytics::descriptor::field_descriptor())
}

/// Analytics snapshot for display. Fixed sample data, not a live
/// aggregation of the sink logs.
pub async fn analytics_data() -> Json<serde_json::Value> {
    Json(edumat_analytics::descriptor::sample_data())
}

#[derive(Debug, Deserialize)]
pub struct UserUrlQuery {
    #[serde(rename = "activityID")]
    pub activity_id: String,
}

/// Provisioning step one: register the activity (idempotent) and hand back
/// the URL it will be served under.
pub async fn user_url(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserUrlQuery>,
) -> Json<serde_json::Value> {
    state.service.create_activity(&query.activity_id);
    let url = format!(
        "{}/activity?activityID={}",
        state.config.activity.base_url, query.activity_id
    );
    Json(serde_json::json!({"url": url}))
}

/// Provisioning step two: save the configured parameters and hand back the
/// student-facing URL. Fails with 404 when the activity was never
/// registered.
pub async fn deploy(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let Some(activity_id) = body["activityID"].as_str().filter(|s| !s.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"ok": false, "error": "Missing activityID"})),
        );
    };
    let student_id = body["studentID"].as_str().unwrap_or("");
    let params = &body["params"];
    let summary = params["summary"].as_str();
    let instructions = params["instructions"].as_str();

    match state
        .service
        .update_activity(activity_id, summary, instructions)
    {
        Ok(_) => {
            let url = format!(
                "{}/activity?activityID={}&studentID={}",
                state.config.activity.base_url, activity_id, student_id
            );
            (StatusCode::OK, Json(serde_json::json!({"url": url})))
        }
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"ok": false, "error": e.to_string()})),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"ok": false, "error": e.to_string()})),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    #[serde(rename = "activityID")]
    pub activity_id: String,
    #[serde(rename = "studentID")]
    pub student_id: Option<String>,
}

/// Student-facing activity page. Records access analytics as a side effect
/// when a student id is supplied; unregistered activities render the
/// configured fallback content.
pub async fn activity_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivityQuery>,
) -> Html<String> {
    let record = state
        .service
        .get_activity(&query.activity_id, query.student_id.as_deref());
    let (summary, instructions) = match record {
        Some(rec) => (rec.summary, rec.instructions),
        None => (
            state.config.activity.default_summary.clone(),
            state.config.activity.default_instructions.clone(),
        ),
    };
    Html(super::pages::activity_html(&summary, &instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edumat_analytics::SinkKind;
    use edumat_core::EdumatConfig;

    fn scratch_state(name: &str) -> (std::path::PathBuf, Arc<AppState>) {
        let dir = std::env::temp_dir().join(name);
        std::fs::remove_dir_all(&dir).ok();
        let mut config = EdumatConfig::default();
        config.analytics.data_dir = dir.to_string_lossy().into_owned();
        (dir, Arc::new(AppState::new(config)))
    }

    #[tokio::test]
    async fn test_json_params_lists_both_fields() {
        let Json(params) = json_params().await;
        let names: Vec<&str> = params
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["summary", "instructions"]);
    }

    #[tokio::test]
    async fn test_user_url_registers_activity() {
        let (dir, state) = scratch_state("edumat-test-route-userurl");
        let Json(resp) = user_url(
            State(state.clone()),
            Query(UserUrlQuery { activity_id: "a1".into() }),
        )
        .await;
        assert!(resp["url"].as_str().unwrap().contains("activityID=a1"));
        assert_eq!(state.service.activity_count(), 1);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_deploy_unregistered_is_not_found() {
        let (dir, state) = scratch_state("edumat-test-route-deploy404");
        let resp = deploy(
            State(state),
            Json(serde_json::json!({
                "activityID": "ghost",
                "studentID": "stu1",
                "params": {"summary": "S"},
            })),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_deploy_updates_registered_activity() {
        let (dir, state) = scratch_state("edumat-test-route-deploy");
        state.service.create_activity("a1");
        let resp = deploy(
            State(state.clone()),
            Json(serde_json::json!({
                "activityID": "a1",
                "studentID": "stu1",
                "params": {"summary": "deployed summary"},
            })),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let rec = state.service.get_activity("a1", None).unwrap();
        assert_eq!(rec.summary, "deployed summary");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_deploy_missing_activity_id_is_bad_request() {
        let (dir, state) = scratch_state("edumat-test-route-deploy400");
        let resp = deploy(State(state), Json(serde_json::json!({"params": {}})))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_activity_page_falls_back_for_unknown_activity() {
        let (dir, state) = scratch_state("edumat-test-route-fallback");
        let Html(html) = activity_page(
            State(state.clone()),
            Query(ActivityQuery { activity_id: "ghost".into(), student_id: None }),
        )
        .await;
        assert!(html.contains(&state.config.activity.default_summary));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_activity_page_records_student_access() {
        let (dir, state) = scratch_state("edumat-test-route-access");
        state.service.create_activity("a1");
        activity_page(
            State(state.clone()),
            Query(ActivityQuery {
                activity_id: "a1".into(),
                student_id: Some("stu1".into()),
            }),
        )
        .await;

        let entries = state.service.analytics_log().read("a1", SinkKind::Quantitative);
        // creation event (system) + student access
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.last().unwrap().student_id, "stu1");
        std::fs::remove_dir_all(&dir).ok();
    }
}
