use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use yeschef_shared::{Error, Result, recipe::Recipe};

use crate::{
    AUTOFILL_SYSTEM_PROMPT, MEAL_SYSTEM_PROMPT, RecipeGenerator, UserPreferences,
    autofill_prompt, meal_user_prompt, parse_autofill, parse_recipes, parse_steps, steps_prompt,
};

const CONNECT_TIMEOUT_SECS: u64 = 10;

const TEMPERATURE_WITH_PREFERENCES: f32 = 0.8;
const TEMPERATURE_WITHOUT_PREFERENCES: f32 = 0.95;
const DETAIL_TEMPERATURE: f32 = 0.7;
const DETAIL_MAX_TOKENS: u32 = 1500;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Overrides the per-request temperature when set.
    pub temperature: Option<f32>,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_owned(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_owned(),
            temperature: None,
            max_tokens: 4000,
            timeout_secs: 60,
        }
    }
}

#[derive(Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Recipe generation through an OpenAI-compatible chat completions endpoint.
pub struct OpenAiGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = match Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
        {
            Ok(client) => client,
            Err(e) => yeschef_shared::bail!("Failed to create HTTP client: {e}"),
        };

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> Error {
        let Ok(response) = serde_json::from_str::<OpenAiErrorResponse>(body) else {
            return Error::Generation(format!(
                "API error ({status}): {}",
                body.chars().take(200).collect::<String>()
            ));
        };

        match status.as_u16() {
            401 => Error::Generation(format!(
                "API authentication failed: {}",
                response.error.message
            )),
            429 => Error::Generation(format!("Rate limited: {}", response.error.message)),
            _ => Error::Generation(format!(
                "{} - {}",
                response.error.error_type.as_deref().unwrap_or("unknown"),
                response.error.message
            )),
        }
    }

    /// Sends one chat completion and returns the first choice's content.
    #[tracing::instrument(skip_all, fields(model = %self.config.model))]
    async fn complete(
        &self,
        system: Option<&str>,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(OpenAiMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(OpenAiMessage {
            role: "user",
            content: user,
        });

        let request = OpenAiRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature.unwrap_or(temperature),
            max_tokens,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                Error::Generation(format!("Failed to reach generation service: {e}"))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Generation(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let err = Self::parse_error_response(status, &body);
            tracing::error!(%status, error = %err, "completion rejected");
            return Err(err);
        }

        let response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "unexpected completion payload");
            Error::Generation(format!("Failed to parse response: {e}"))
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| Error::Generation("No response from generation service".to_owned()))?;

        tracing::debug!(chars = content.len(), "completion received");

        Ok(content)
    }
}

#[async_trait]
impl RecipeGenerator for OpenAiGenerator {
    async fn generate_recipes(
        &self,
        preferences: Option<&UserPreferences>,
        count: u32,
    ) -> Result<Vec<Recipe>> {
        let temperature = if preferences.is_some() {
            TEMPERATURE_WITH_PREFERENCES
        } else {
            TEMPERATURE_WITHOUT_PREFERENCES
        };

        let content = self
            .complete(
                Some(MEAL_SYSTEM_PROMPT),
                &meal_user_prompt(preferences, count),
                temperature,
                self.config.max_tokens,
            )
            .await?;

        let recipes = parse_recipes(&content)?;
        tracing::info!(requested = count, received = recipes.len(), "recipes generated");

        Ok(recipes)
    }

    async fn autofill_recipe(&self, title: &str) -> Result<Recipe> {
        if title.trim().is_empty() {
            return Err(Error::Validate("Recipe title is required".to_owned()));
        }

        let content = self
            .complete(
                Some(AUTOFILL_SYSTEM_PROMPT),
                &autofill_prompt(title.trim()),
                DETAIL_TEMPERATURE,
                DETAIL_MAX_TOKENS,
            )
            .await?;

        parse_autofill(title, &content)
    }

    async fn generate_steps(&self, recipe: &Recipe) -> Result<Vec<String>> {
        if recipe.name.trim().is_empty() {
            return Err(Error::Validate("Recipe is required".to_owned()));
        }

        let content = self
            .complete(
                None,
                &steps_prompt(recipe),
                DETAIL_TEMPERATURE,
                DETAIL_MAX_TOKENS,
            )
            .await?;

        parse_steps(&content)
    }
}
