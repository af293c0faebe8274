//! Food extractor - free text to an ordered food-name list

use std::{fmt, sync::Arc};

use tracing::{debug, instrument, warn};

use crate::{ports::InferencePort, prompts};

/// Extracts coarse food-category names from a user message with one
/// generation call.
///
/// The returned list keeps the model's order and is NOT deduplicated:
/// duplicates are the caller's data (two servings count twice in the
/// totals); the resolver's cache-hit path already collapses lookups.
pub struct FoodExtractor {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for FoodExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoodExtractor").finish_non_exhaustive()
    }
}

impl FoodExtractor {
    /// Create a new extractor
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Extract food names from a message.
    ///
    /// An empty message returns an empty list with no external call. Any
    /// generation failure also degrades to an empty list: extraction
    /// failure means "no food found", never a request failure.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn extract(&self, message: &str) -> Vec<String> {
        if message.trim().is_empty() {
            debug!("Empty message, skipping extraction call");
            return Vec::new();
        }

        let prompt = prompts::food_extraction(message);
        let response = match self.inference.generate(&prompt).await {
            Ok(result) => result.content,
            Err(e) => {
                warn!(error = %e, "Food extraction call failed, returning empty list");
                return Vec::new();
            },
        };

        let foods = Self::parse_food_list(&response);
        debug!(count = foods.len(), "Extracted food names");
        foods
    }

    /// Split a comma-separated model reply into trimmed, non-empty names
    fn parse_food_list(response: &str) -> Vec<String> {
        response
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::{error::ApplicationError, ports::InferenceResult};

    mock! {
        pub Inference {}

        #[async_trait::async_trait]
        impl InferencePort for Inference {
            async fn generate(&self, prompt: &str) -> Result<InferenceResult, ApplicationError>;
            async fn generate_with_image(&self, prompt: &str, mime_type: &str, image_base64: &str) -> Result<InferenceResult, ApplicationError>;
            async fn is_healthy(&self) -> bool;
            fn current_model(&self) -> String;
        }
    }

    fn text_result(content: &str) -> InferenceResult {
        InferenceResult {
            content: content.to_string(),
            model: "test-model".to_string(),
            latency_ms: 5,
        }
    }

    #[tokio::test]
    async fn empty_message_makes_no_call() {
        let mut mock = MockInference::new();
        mock.expect_generate().times(0);

        let extractor = FoodExtractor::new(Arc::new(mock));
        assert!(extractor.extract("").await.is_empty());
        assert!(extractor.extract("   ").await.is_empty());
    }

    #[tokio::test]
    async fn extracts_comma_separated_names_in_order() {
        let mut mock = MockInference::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok(text_result("김밥, 라면 , 떡볶이")));

        let extractor = FoodExtractor::new(Arc::new(mock));
        let foods = extractor.extract("점심에 김밥이랑 라면이랑 떡볶이 먹었어").await;
        assert_eq!(foods, vec!["김밥", "라면", "떡볶이"]);
    }

    #[tokio::test]
    async fn duplicates_are_preserved() {
        let mut mock = MockInference::new();
        mock.expect_generate()
            .returning(|_| Ok(text_result("김밥, 김밥")));

        let extractor = FoodExtractor::new(Arc::new(mock));
        let foods = extractor.extract("김밥 두 줄").await;
        assert_eq!(foods, vec!["김밥", "김밥"]);
    }

    #[tokio::test]
    async fn empty_model_reply_yields_empty_list() {
        let mut mock = MockInference::new();
        mock.expect_generate().returning(|_| Ok(text_result("")));

        let extractor = FoodExtractor::new(Arc::new(mock));
        assert!(extractor.extract("오늘 날씨 어때?").await.is_empty());
    }

    #[tokio::test]
    async fn stray_commas_are_dropped() {
        let mut mock = MockInference::new();
        mock.expect_generate()
            .returning(|_| Ok(text_result(", 김밥,, ,라면,")));

        let extractor = FoodExtractor::new(Arc::new(mock));
        let foods = extractor.extract("김밥 라면").await;
        assert_eq!(foods, vec!["김밥", "라면"]);
    }

    #[tokio::test]
    async fn call_failure_degrades_to_empty_list() {
        let mut mock = MockInference::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::ExternalService("timeout".to_string())));

        let extractor = FoodExtractor::new(Arc::new(mock));
        assert!(extractor.extract("김밥 먹었어").await.is_empty());
    }
}
