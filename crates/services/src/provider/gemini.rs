use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use quiz_core::model::{ImageRef, Question, QuestionDraft};

use super::ContentProvider;
use super::prompts::{image_prompt, questions_prompt, questions_schema};
use crate::config::ProviderSettings;
use crate::error::{ConfigError, ProviderError};

const API_KEY_HEADER: &str = "x-goog-api-key";
const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// `ContentProvider` backed by the Gemini REST API: `generateContent` for the
/// question batch and Imagen `predict` for illustrations.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    settings: ProviderSettings,
}

impl GeminiProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ProviderSettings::from_env())
    }

    #[must_use]
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.settings.base_url.trim_end_matches('/'),
            model,
            method
        )
    }

    async fn post<B, R>(&self, url: String, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let api_key = self.settings.credential.resolve()?;
        debug!(%url, "calling content provider");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    fn check_configuration(&self) -> Result<(), ConfigError> {
        self.settings.credential.resolve().map(|_| ())
    }

    async fn generate_questions(&self, count: usize) -> Result<Vec<Question>, ProviderError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: questions_prompt(count),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: questions_schema(count),
            },
        };
        let url = self.endpoint(&self.settings.text_model, "generateContent");
        let body: GenerateContentResponse = self.post(url, &payload).await?;
        let text = body.first_text().ok_or_else(|| {
            ProviderError::ContentGenerationFailed("response contained no text".into())
        })?;
        parse_questions(text)
    }

    async fn generate_image(&self, question_text: &str) -> Result<ImageRef, ProviderError> {
        let payload = PredictRequest {
            instances: vec![PredictInstance {
                prompt: image_prompt(question_text),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                output_options: OutputOptions {
                    mime_type: IMAGE_MIME_TYPE,
                },
                aspect_ratio: "1:1",
            },
        };
        let url = self.endpoint(&self.settings.image_model, "predict");
        let body: PredictResponse = self.post(url, &payload).await?;
        image_from_predictions(body)
    }
}

/// Parse the model's JSON text into validated questions.
///
/// Any invalid question rejects the whole batch.
fn parse_questions(text: &str) -> Result<Vec<Question>, ProviderError> {
    let data: QuizData = serde_json::from_str(text.trim())?;
    if data.questions.is_empty() {
        return Err(ProviderError::ContentGenerationFailed(
            "AI did not generate any questions.".into(),
        ));
    }
    data.questions
        .into_iter()
        .map(|draft| {
            draft.validate().map_err(|err| {
                warn!(error = %err, "provider returned an invalid question");
                ProviderError::from(err)
            })
        })
        .collect()
}

fn image_from_predictions(body: PredictResponse) -> Result<ImageRef, ProviderError> {
    let prediction = body
        .predictions
        .into_iter()
        .find(|prediction| prediction.bytes_base64_encoded.is_some())
        .ok_or_else(|| ProviderError::ImageGenerationFailed("No image was generated.".into()))?;
    let mime_type = prediction
        .mime_type
        .unwrap_or_else(|| IMAGE_MIME_TYPE.to_string());
    let bytes = prediction.bytes_base64_encoded.unwrap_or_default();
    Ok(ImageRef::from_base64(mime_type, bytes)?)
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct QuizData {
    questions: Vec<QuestionDraft>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.as_str())
            .find(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    output_options: OutputOptions,
    aspect_ratio: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;

    #[test]
    fn parses_questions_from_candidate_text() {
        let body: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": r#"
                    {"questions": [{
                        "questionText": "Who built the ark?",
                        "options": ["Noah", "Moses", "Peter"],
                        "correctAnswer": "Noah",
                        "funFact": "Noah took two of every animal."
                    }]}
                "# }] }
            }]
        }))
        .unwrap();

        let questions = parse_questions(body.first_text().unwrap()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer(), "Noah");
    }

    #[test]
    fn empty_question_list_is_a_content_failure() {
        let err = parse_questions(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, ProviderError::ContentGenerationFailed(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let err = parse_questions("not json").unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[test]
    fn one_invalid_question_rejects_the_batch() {
        let text = r#"{"questions": [{
            "questionText": "Who built the ark?",
            "options": ["Noah", "Moses", "Peter"],
            "correctAnswer": "Jonah",
            "funFact": "fact"
        }]}"#;
        let err = parse_questions(text).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidQuestion(_)));
    }

    #[test]
    fn prediction_becomes_a_data_uri() {
        let body: PredictResponse = serde_json::from_value(serde_json::json!({
            "predictions": [{ "bytesBase64Encoded": "AAAA", "mimeType": "image/jpeg" }]
        }))
        .unwrap();
        let image = image_from_predictions(body).unwrap();
        assert_eq!(image.to_src(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn missing_prediction_is_an_image_failure() {
        let body: PredictResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        let err = image_from_predictions(body).unwrap_err();
        assert!(matches!(err, ProviderError::ImageGenerationFailed(_)));
    }

    #[test]
    fn request_bodies_use_provider_field_names() {
        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: "p".into(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                output_options: OutputOptions {
                    mime_type: IMAGE_MIME_TYPE,
                },
                aspect_ratio: "1:1",
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parameters"]["sampleCount"], 1);
        assert_eq!(
            value["parameters"]["outputOptions"]["mimeType"],
            "image/jpeg"
        );
        assert!(value["parameters"].get("outputMimeType").is_none());
        assert_eq!(value["parameters"]["aspectRatio"], "1:1");
    }

    #[test]
    fn endpoint_joins_base_model_and_method() {
        let settings = ProviderSettings {
            base_url: "https://example.test/v1beta/".into(),
            ..ProviderSettings::default()
        };
        let provider = GeminiProvider::new(settings);
        assert_eq!(
            provider.endpoint("gemini-2.5-flash", "generateContent"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let settings = ProviderSettings::default().with_credential(Credential::Static(String::new()));
        let provider = GeminiProvider::new(settings);

        assert!(provider.check_configuration().is_err());
        let err = provider.generate_questions(3).await.unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));
    }
}
