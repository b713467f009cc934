use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interview category. Fixed set; `topic` only applies to `Technical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hr,
    Technical,
    Aptitude,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hr, Category::Technical, Category::Aptitude];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hr" => Some(Category::Hr),
            "technical" => Some(Category::Technical),
            "aptitude" => Some(Category::Aptitude),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hr => "hr",
            Category::Technical => "technical",
            Category::Aptitude => "aptitude",
        }
    }
}

/// One generated interview question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    #[serde(default)]
    pub tips: String,
}

/// LLM scoring of a single answer. Produced once, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// 1-10.
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(rename = "betterAnswer", default)]
    pub better_answer: String,
    #[serde(default)]
    pub feedback: String,
}

/// A submitted answer with its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub question: String,
    pub answer: String,
    pub evaluation: Evaluation,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    Completed,
}

/// One practice session, stored under `interviews/{id}`.
///
/// `responses` is append-only while in progress; `total_score` and
/// `completed_at` are written exactly once, at completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub category: Category,
    pub topic: Option<String>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
    pub status: InterviewStatus,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    /// 0-100, round(10 x mean per-response score).
    #[serde(rename = "totalScore")]
    pub total_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    /// Validated against the fixed category set in the service.
    pub category: String,
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    #[serde(rename = "interviewId")]
    pub interview_id: String,
    pub category: Category,
    pub topic: Option<String>,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(rename = "interviewId")]
    pub interview_id: String,
    #[serde(rename = "questionId")]
    pub question_id: u32,
    #[serde(default)]
    pub answer: Option<String>,
    /// Speech-to-text transcript; preferred over `answer` when non-empty.
    #[serde(rename = "speechText", default)]
    pub speech_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub success: bool,
    pub evaluation: Evaluation,
    #[serde(rename = "questionsRemaining")]
    pub questions_remaining: usize,
}

#[derive(Debug, Deserialize)]
pub struct CompleteInterviewRequest {
    #[serde(rename = "interviewId")]
    pub interview_id: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewResults {
    pub category: Category,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "answeredQuestions")]
    pub answered_questions: usize,
    #[serde(rename = "averageScore")]
    pub average_score: u32,
    pub responses: Vec<QuestionResponse>,
    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,
}

/// Session summary for history listings; response detail omitted.
#[derive(Debug, Serialize)]
pub struct InterviewSummary {
    pub id: String,
    pub category: Category,
    pub status: InterviewStatus,
    #[serde(rename = "totalScore")]
    pub total_score: u32,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub interviews: Vec<InterviewSummary>,
}

impl From<&InterviewSession> for InterviewSummary {
    fn from(session: &InterviewSession) -> Self {
        InterviewSummary {
            id: session.id.clone(),
            category: session.category,
            status: session.status,
            total_score: session.total_score,
            started_at: session.started_at,
            completed_at: session.completed_at,
        }
    }
}
