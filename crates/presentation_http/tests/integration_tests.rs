//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    DietAnalysisService, HealthPredictionService, MealImageService,
    error::ApplicationError,
    ports::{InferencePort, InferenceResult, RiskScoringPort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::RiskScores;
use infrastructure::{AppConfig, FileNutritionCache};
use presentation_http::{routes::create_router, state::AppState};
use serde_json::{Value, json};

/// Scripted generation backend; routes replies by the response contract
/// the prompt asks for.
struct FakeInference {
    extraction_reply: String,
    nutrition_reply: Result<String, ()>,
    suggestion_reply: String,
    image_reply: String,
    healthy: bool,
}

impl Default for FakeInference {
    fn default() -> Self {
        Self {
            extraction_reply: "김밥, 라면".to_string(),
            nutrition_reply: Ok(json!({
                "nutrition_per_food": [
                    {"food": "김밥", "nutrition": {"protein": 10.0, "sodium": 500.0}},
                    {"food": "라면", "nutrition": {"protein": 8.0, "sodium": 900.0}}
                ]
            })
            .to_string()),
            suggestion_reply: json!({
                "deficient_nutrients": ["fiber", "water"],
                "next_meal_suggestion": ["두부조림"]
            })
            .to_string(),
            image_reply: json!([
                {"food_name": "비빔밥", "calories": 560, "nutrients": {"protein": 18.0}}
            ])
            .to_string(),
            healthy: true,
        }
    }
}

#[async_trait]
impl InferencePort for FakeInference {
    async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError> {
        let content = if prompt.contains("nutrition_per_food") {
            self.nutrition_reply
                .clone()
                .map_err(|()| ApplicationError::ExternalService("generation down".to_string()))?
        } else if prompt.contains("deficient_nutrients") {
            self.suggestion_reply.clone()
        } else {
            self.extraction_reply.clone()
        };
        Ok(InferenceResult {
            content,
            model: "fake-model".to_string(),
            latency_ms: 1,
        })
    }

    async fn generate_with_image(
        &self,
        _prompt: &str,
        _mime_type: &str,
        _image_base64: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        Ok(InferenceResult {
            content: self.image_reply.clone(),
            model: "fake-model".to_string(),
            latency_ms: 1,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }

    fn current_model(&self) -> String {
        "fake-model".to_string()
    }
}

/// Fixed scoring backend
struct FakeScoring {
    healthy: bool,
}

#[async_trait]
impl RiskScoringPort for FakeScoring {
    async fn score(&self, _features: &[f64]) -> Result<RiskScores, ApplicationError> {
        Ok(RiskScores {
            diabetes: 0.12,
            hypertension: 0.55,
            cardiovascular: 0.08,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }
}

fn test_server_with(inference: FakeInference, scoring: FakeScoring) -> (TestServer, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache: Arc<dyn application::ports::NutritionCachePort> =
        Arc::new(FileNutritionCache::load(dir.path().join("cache.json")));
    let inference: Arc<dyn InferencePort> = Arc::new(inference);
    let scoring: Arc<dyn RiskScoringPort> = Arc::new(scoring);

    let state = AppState {
        diet_service: Arc::new(DietAnalysisService::new(
            Arc::clone(&inference),
            Arc::clone(&cache),
        )),
        prediction_service: Arc::new(HealthPredictionService::new(Arc::clone(&scoring))),
        meal_image_service: Arc::new(MealImageService::new(Arc::clone(&inference))),
        inference,
        scoring,
        config: Arc::new(AppConfig::default()),
    };

    let server = TestServer::new(create_router(state)).expect("test server");
    (server, dir)
}

fn test_server() -> (TestServer, tempfile::TempDir) {
    test_server_with(FakeInference::default(), FakeScoring { healthy: true })
}

fn sample_profile() -> Value {
    json!({
        "age": 34, "gender": "male", "height": 178, "weight": 72,
        "historyDiabetes": 1, "historyHypertension": 0,
        "historyCardiovascular": 0, "smokeDaily": 0, "drinkWeekly": 1,
        "exerciseWeekly": 2, "dailyCarbohydrate": 250, "dailySugar": 30,
        "dailyFat": 50, "dailySodium": 2000, "dailyFiber": 15,
        "dailyWater": 1500
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (server, _dir) = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn ready_endpoint_reports_backends() {
    let (server, _dir) = test_server();
    let response = server.get("/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["generation"]["model"], "fake-model");
}

#[tokio::test]
async fn ready_endpoint_degrades_when_scoring_is_down() {
    let (server, _dir) =
        test_server_with(FakeInference::default(), FakeScoring { healthy: false });
    let response = server.get("/ready").await;
    response.assert_status_service_unavailable();
    let body: Value = response.json();
    assert_eq!(body["ready"], false);
    assert_eq!(body["scoring"]["healthy"], false);
}

#[tokio::test]
async fn diet_analysis_returns_full_breakdown() {
    let (server, _dir) = test_server();
    let response = server
        .post("/analysis/diet")
        .json(&json!({"message": "아침에 김밥이랑 라면 먹었어"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["food_list"], json!(["김밥", "라면"]));
    assert_eq!(body["nutrition_per_food"][0]["food"], "김밥");
    assert_eq!(body["total_nutrition"]["protein"], 18.0);
    assert_eq!(body["total_nutrition"]["sodium"], 1400.0);
    assert_eq!(body["deficient_nutrients"], json!(["fiber", "water"]));
    assert_eq!(body["next_meal_suggestion"], json!(["두부조림"]));
}

#[tokio::test]
async fn diet_analysis_rejects_empty_message() {
    let (server, _dir) = test_server();
    let response = server
        .post("/analysis/diet")
        .json(&json!({"message": "   "}))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn diet_analysis_degrades_to_foods_only_when_resolution_fails() {
    let inference = FakeInference {
        nutrition_reply: Err(()),
        ..FakeInference::default()
    };
    let (server, _dir) = test_server_with(inference, FakeScoring { healthy: true });

    let response = server
        .post("/analysis/diet")
        .json(&json!({"message": "김밥이랑 라면"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["food_list"], json!(["김밥", "라면"]));
    assert_eq!(body["nutrition_per_food"], json!([]));
    assert_eq!(body["total_nutrition"]["protein"], 0.0);
    assert_eq!(body["next_meal_suggestion"], json!([]));
}

#[tokio::test]
async fn diet_analysis_returns_empty_result_for_foodless_message() {
    let inference = FakeInference {
        extraction_reply: String::new(),
        ..FakeInference::default()
    };
    let (server, _dir) = test_server_with(inference, FakeScoring { healthy: true });

    let response = server
        .post("/analysis/diet")
        .json(&json!({"message": "오늘 날씨 어때?"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["food_list"], json!([]));
    assert_eq!(body["nutrition_per_food"], json!([]));
}

#[tokio::test]
async fn predict_health_returns_three_probabilities() {
    let (server, _dir) = test_server();
    let response = server.post("/predict/health").json(&sample_profile()).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["diabetes"], 0.12);
    assert_eq!(body["hypertension"], 0.55);
    assert_eq!(body["cardiovascular"], 0.08);
}

#[tokio::test]
async fn predict_health_rejects_zero_height() {
    let (server, _dir) = test_server();
    let mut profile = sample_profile();
    profile["height"] = json!(0);

    let response = server.post("/predict/health").json(&profile).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn meal_image_analysis_returns_recognized_foods() {
    let (server, _dir) = test_server();
    let response = server
        .post("/analysis/meal-image")
        .json(&json!({"mime_type": "image/png", "image_base64": "bWVhbA=="}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["foods"][0]["food_name"], "비빔밥");
    assert_eq!(body["foods"][0]["calories"], 560.0);
}

#[tokio::test]
async fn meal_image_analysis_rejects_unsupported_mime() {
    let (server, _dir) = test_server();
    let response = server
        .post("/analysis/meal-image")
        .json(&json!({"mime_type": "image/gif", "image_base64": "bWVhbA=="}))
        .await;
    response.assert_status_bad_request();
}
