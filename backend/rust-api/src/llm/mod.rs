//! LLM gateway: the single entry point for all chat-completion calls.
//!
//! Wraps the Groq OpenAI-compatible API with category prompt templates,
//! JSON-span extraction over free-form replies, and unconditional static
//! fallbacks. Upstream unavailability never propagates to callers; a missing
//! API key simply routes every call to the fallback content.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Evaluation, Question};

pub mod fallback;
pub mod prompts;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

// The upstream model wraps JSON in prose or markdown at will; grab the
// widest bracket/brace span and let serde judge it.
static JSON_ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[.*\]").unwrap());
static JSON_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Performance digest handed to the insight generator.
#[derive(Debug, Serialize)]
pub struct PerformanceSummary {
    #[serde(rename = "totalInterviews")]
    pub total_interviews: u32,
    #[serde(rename = "avgScore")]
    pub avg_score: u32,
    #[serde(rename = "recentScores")]
    pub recent_scores: Vec<CategoryScore>,
}

#[derive(Debug, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

/// Personalized coaching block for the dashboard.
#[derive(Debug, Serialize, Deserialize)]
pub struct Insights {
    #[serde(rename = "overallSummary", default)]
    pub overall_summary: String,
    #[serde(rename = "topStrength", default)]
    pub top_strength: String,
    #[serde(rename = "focusArea", default)]
    pub focus_area: String,
    #[serde(rename = "nextSteps", default)]
    pub next_steps: Vec<String>,
    #[serde(rename = "motivationalTip", default)]
    pub motivational_tip: String,
}

pub struct LlmClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        if api_key.is_some() {
            tracing::info!("LLM gateway initialized (model: {})", model);
        } else {
            tracing::warn!("Groq API key not found. Using mock responses.");
        }

        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            api_url,
            model,
        }
    }

    /// Raw chat-completion call. Returns `None` on any failure (no key, HTTP
    /// error, non-2xx, empty reply); callers fall back to static content.
    async fn chat(&self, system: &str, user: &str) -> Option<String> {
        let api_key = self.api_key.as_ref()?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = match self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("LLM API request failed: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!("LLM API error {}: {}", status, error_text);
            return None;
        }

        match response.json::<ChatResponse>().await {
            Ok(reply) => reply.choices.into_iter().next().and_then(|c| c.message.content),
            Err(e) => {
                tracing::warn!("Failed to decode LLM API response: {}", e);
                None
            }
        }
    }

    /// Generate 5 questions for a category (topic applies to technical only).
    /// Falls back to the static set on any upstream or parse failure.
    pub async fn generate_questions(
        &self,
        category: Category,
        topic: Option<&str>,
    ) -> Vec<Question> {
        tracing::info!(
            "Generating {} questions{}",
            category.as_str(),
            topic.map(|t| format!(" for topic: {t}")).unwrap_or_default()
        );

        let seed = Utc::now().timestamp_millis();
        let prompt = prompts::question_prompt(category, topic, seed);

        if let Some(reply) = self.chat(prompts::QUESTIONS_SYSTEM, &prompt).await {
            match extract_json_array(&reply).map(|s| serde_json::from_str::<Vec<Question>>(s)) {
                Some(Ok(questions)) if !questions.is_empty() => {
                    tracing::info!("Generated {} questions via LLM", questions.len());
                    return questions;
                }
                Some(Err(e)) => tracing::warn!("Failed to parse LLM question reply: {}", e),
                _ => tracing::warn!("LLM question reply contained no JSON array"),
            }
        }

        tracing::info!("Using mock questions - LLM unavailable or parse error");
        fallback::questions(category, topic)
    }

    /// Score a single answer. Answers under 10 characters short-circuit to
    /// the canned rejection without touching the upstream API.
    pub async fn evaluate_answer(
        &self,
        category: Category,
        question: &str,
        answer: &str,
    ) -> Evaluation {
        if answer.trim().len() < 10 {
            return fallback::short_answer_evaluation();
        }

        let prompt = prompts::evaluation_prompt(category, question, answer);

        if let Some(reply) = self.chat(prompts::EVALUATION_SYSTEM, &prompt).await {
            match extract_json_object(&reply).map(|s| serde_json::from_str::<Evaluation>(s)) {
                Some(Ok(evaluation)) => {
                    tracing::info!("LLM evaluated answer with score: {}", evaluation.score);
                    return evaluation;
                }
                Some(Err(e)) => tracing::warn!("Failed to parse LLM evaluation: {}", e),
                None => tracing::warn!("LLM evaluation reply contained no JSON object"),
            }
        }

        fallback::mock_evaluation()
    }

    /// Generate dashboard insights from a performance digest.
    pub async fn generate_insights(&self, summary: &PerformanceSummary) -> Insights {
        let performance_json =
            serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string());
        let prompt = prompts::insights_prompt(&performance_json);

        if let Some(reply) = self.chat(prompts::INSIGHTS_SYSTEM, &prompt).await {
            match extract_json_object(&reply).map(|s| serde_json::from_str::<Insights>(s)) {
                Some(Ok(insights)) => return insights,
                Some(Err(e)) => tracing::warn!("Failed to parse LLM insights: {}", e),
                None => tracing::warn!("LLM insights reply contained no JSON object"),
            }
        }

        fallback::mock_insights()
    }
}

fn extract_json_array(text: &str) -> Option<&str> {
    JSON_ARRAY_RE.find(text).map(|m| m.as_str())
}

fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}
