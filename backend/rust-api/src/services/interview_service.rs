use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::llm::LlmClient;
use crate::models::interview::{
    CompleteInterviewRequest, HistoryResponse, InterviewResults, InterviewSession,
    InterviewStatus, InterviewSummary, QuestionResponse, StartInterviewRequest,
    StartInterviewResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
use crate::models::Category;
use crate::store::Store;

const HISTORY_LIMIT: usize = 10;

/// Orchestrates the session lifecycle: start, per-question answer
/// submission, completion with score rollup into the user record, history.
pub struct InterviewService {
    store: Arc<dyn Store>,
    llm: Arc<LlmClient>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn Store>, llm: Arc<LlmClient>) -> Self {
        Self { store, llm }
    }

    pub async fn start(
        &self,
        user_id: &str,
        req: StartInterviewRequest,
    ) -> Result<StartInterviewResponse, ApiError> {
        let category = Category::parse(&req.category).ok_or_else(|| {
            ApiError::Validation("Invalid category. Use: hr, technical, or aptitude".to_string())
        })?;

        let questions = self
            .llm
            .generate_questions(category, req.topic.as_deref())
            .await;

        let session = InterviewSession {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category,
            topic: req.topic,
            questions,
            responses: vec![],
            status: InterviewStatus::InProgress,
            started_at: Utc::now(),
            completed_at: None,
            total_score: 0,
        };

        self.store
            .put_interview(&session)
            .await
            .context("Failed to save interview")?;

        tracing::info!(
            interview_id = %session.id,
            user_id = %user_id,
            category = %category.as_str(),
            "Interview started"
        );

        // Questions carry only id/text/tips; nothing answer-shaped leaves here.
        Ok(StartInterviewResponse {
            interview_id: session.id,
            category,
            topic: session.topic,
            total_questions: session.questions.len(),
            questions: session.questions,
        })
    }

    pub async fn submit_answer(
        &self,
        user_id: &str,
        req: SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ApiError> {
        let mut session = self.owned_session(user_id, &req.interview_id).await?;

        if session.status == InterviewStatus::Completed {
            return Err(ApiError::Validation(
                "Interview already completed".to_string(),
            ));
        }

        let question = session
            .questions
            .iter()
            .find(|q| q.id == req.question_id)
            .cloned()
            .ok_or_else(|| ApiError::Validation("Question not found".to_string()))?;

        if session
            .responses
            .iter()
            .any(|r| r.question_id == req.question_id)
        {
            return Err(ApiError::Validation(
                "Question already answered".to_string(),
            ));
        }

        // Prefer the speech transcript over the typed answer.
        let answer = req
            .speech_text
            .filter(|s| !s.is_empty())
            .or(req.answer)
            .unwrap_or_default();

        let evaluation = self
            .llm
            .evaluate_answer(session.category, &question.question, &answer)
            .await;

        session.responses.push(QuestionResponse {
            question_id: question.id,
            question: question.question,
            answer,
            evaluation: evaluation.clone(),
            submitted_at: Utc::now(),
        });

        let questions_remaining = session.questions.len() - session.responses.len();

        self.store
            .put_interview(&session)
            .await
            .context("Failed to save response")?;

        tracing::info!(
            interview_id = %session.id,
            question_id = req.question_id,
            score = evaluation.score,
            "Answer submitted"
        );

        Ok(SubmitAnswerResponse {
            success: true,
            evaluation,
            questions_remaining,
        })
    }

    /// Complete the session and fold its score into the user record.
    /// Completing an already-completed session returns the stored results
    /// without touching user stats again.
    pub async fn complete(
        &self,
        user_id: &str,
        req: CompleteInterviewRequest,
    ) -> Result<InterviewResults, ApiError> {
        let mut session = self.owned_session(user_id, &req.interview_id).await?;

        if session.status == InterviewStatus::Completed {
            tracing::info!(interview_id = %session.id, "Interview already completed");
            return Ok(Self::results(&session));
        }

        let mean_score = if session.responses.is_empty() {
            0.0
        } else {
            session
                .responses
                .iter()
                .map(|r| r.evaluation.score)
                .sum::<f64>()
                / session.responses.len() as f64
        };
        let final_score = (mean_score * 10.0).round() as u32;

        session.status = InterviewStatus::Completed;
        session.completed_at = Some(Utc::now());
        session.total_score = final_score;

        self.store
            .put_interview(&session)
            .await
            .context("Failed to save completed interview")?;

        if let Some(mut user) = self
            .store
            .get_user(user_id)
            .await
            .context("Failed to query user")?
        {
            let old_count = user.total_interviews;
            user.total_interviews = old_count + 1;
            user.avg_score = ((f64::from(user.avg_score) * f64::from(old_count)
                + mean_score * 10.0)
                / f64::from(user.total_interviews))
            .round() as u32;
            user.credits -= 1;

            self.store
                .put_user(&user)
                .await
                .context("Failed to update user stats")?;
        }

        tracing::info!(
            interview_id = %session.id,
            score = final_score,
            "Interview completed"
        );

        Ok(Self::results(&session))
    }

    /// The caller's sessions, newest-first by start time, at most 10.
    pub async fn history(&self, user_id: &str) -> Result<HistoryResponse, ApiError> {
        let mut sessions = self
            .store
            .interviews_for_user(user_id)
            .await
            .context("Failed to query interviews")?;

        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));

        Ok(HistoryResponse {
            interviews: sessions
                .iter()
                .take(HISTORY_LIMIT)
                .map(InterviewSummary::from)
                .collect(),
        })
    }

    async fn owned_session(
        &self,
        user_id: &str,
        interview_id: &str,
    ) -> Result<InterviewSession, ApiError> {
        self.store
            .get_interview(interview_id)
            .await
            .context("Failed to query interview")?
            .filter(|session| session.user_id == user_id)
            .ok_or_else(|| ApiError::NotFound("Interview not found".to_string()))
    }

    fn results(session: &InterviewSession) -> InterviewResults {
        InterviewResults {
            category: session.category,
            total_questions: session.questions.len(),
            answered_questions: session.responses.len(),
            average_score: session.total_score,
            responses: session.responses.clone(),
            // Set: the session is completed on every path that builds results.
            completed_at: session.completed_at.unwrap_or(session.started_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{User, STARTING_CREDITS};
    use crate::store::MemoryStore;

    const LONG_ANSWER: &str =
        "I would compare both options carefully and pick the one with better tradeoffs.";

    fn service_with_store() -> (InterviewService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let llm = Arc::new(LlmClient::new(
            None,
            "https://api.groq.com/openai/v1/chat/completions".to_string(),
            "llama-3.3-70b-versatile".to_string(),
        ));
        (
            InterviewService::new(store.clone() as Arc<dyn Store>, llm),
            store,
        )
    }

    async fn seed_user(store: &MemoryStore, id: &str) {
        store
            .put_user(&User {
                id: id.to_string(),
                email: format!("{id}@example.com"),
                name: "Student".to_string(),
                password_hash: "hash".to_string(),
                credits: STARTING_CREDITS,
                total_interviews: 0,
                avg_score: 0,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    fn start_req(category: &str) -> StartInterviewRequest {
        StartInterviewRequest {
            category: category.to_string(),
            topic: None,
        }
    }

    #[tokio::test]
    async fn start_rejects_unknown_category() {
        let (service, _store) = service_with_store();
        let err = service.start("u1", start_req("coding")).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn start_returns_five_questions() {
        let (service, _store) = service_with_store();
        let response = service.start("u1", start_req("hr")).await.unwrap();
        assert_eq!(response.total_questions, 5);
        assert_eq!(response.questions.len(), 5);
    }

    #[tokio::test]
    async fn submit_rejects_foreign_session() {
        let (service, _store) = service_with_store();
        let started = service.start("owner", start_req("hr")).await.unwrap();

        let err = service
            .submit_answer(
                "intruder",
                SubmitAnswerRequest {
                    interview_id: started.interview_id,
                    question_id: 1,
                    answer: Some(LONG_ANSWER.to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn submit_rejects_unknown_question() {
        let (service, _store) = service_with_store();
        let started = service.start("u1", start_req("hr")).await.unwrap();

        let err = service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: started.interview_id,
                    question_id: 99,
                    answer: Some(LONG_ANSWER.to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn submit_prefers_speech_text() {
        let (service, store) = service_with_store();
        let started = service.start("u1", start_req("hr")).await.unwrap();

        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: started.interview_id.clone(),
                    question_id: 1,
                    answer: Some("typed answer that is long enough".to_string()),
                    speech_text: Some("spoken answer that is long enough".to_string()),
                },
            )
            .await
            .unwrap();

        let session = store
            .get_interview(&started.interview_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.responses[0].answer, "spoken answer that is long enough");
    }

    #[tokio::test]
    async fn total_score_is_round_ten_times_mean() {
        let (service, store) = service_with_store();
        seed_user(&store, "u1").await;
        let started = service.start("u1", start_req("technical")).await.unwrap();

        // One short answer (score 2) and one long answer (mock score 7)
        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: started.interview_id.clone(),
                    question_id: 1,
                    answer: Some("idk".to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap();
        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: started.interview_id.clone(),
                    question_id: 2,
                    answer: Some(LONG_ANSWER.to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap();

        let results = service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: started.interview_id,
                },
            )
            .await
            .unwrap();

        // mean(2, 7) = 4.5 => round(45.0) = 45
        assert_eq!(results.average_score, 45);
        assert_eq!(results.answered_questions, 2);
    }

    #[tokio::test]
    async fn empty_session_completes_with_zero() {
        let (service, store) = service_with_store();
        seed_user(&store, "u1").await;
        let started = service.start("u1", start_req("aptitude")).await.unwrap();

        let results = service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: started.interview_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(results.average_score, 0);
    }

    #[tokio::test]
    async fn completion_folds_into_user_stats() {
        let (service, store) = service_with_store();
        seed_user(&store, "u1").await;

        // First session: one long answer => score 70
        let first = service.start("u1", start_req("hr")).await.unwrap();
        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: first.interview_id.clone(),
                    question_id: 1,
                    answer: Some(LONG_ANSWER.to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap();
        service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: first.interview_id,
                },
            )
            .await
            .unwrap();

        let user = store.get_user("u1").await.unwrap().unwrap();
        assert_eq!(user.total_interviews, 1);
        assert_eq!(user.avg_score, 70);
        assert_eq!(user.credits, STARTING_CREDITS - 1);

        // Second session: short answer only => score 20
        let second = service.start("u1", start_req("hr")).await.unwrap();
        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: second.interview_id.clone(),
                    question_id: 1,
                    answer: Some("idk".to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap();
        service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: second.interview_id,
                },
            )
            .await
            .unwrap();

        // round((70*1 + 20) / 2) = 45
        let user = store.get_user("u1").await.unwrap().unwrap();
        assert_eq!(user.total_interviews, 2);
        assert_eq!(user.avg_score, 45);
        assert_eq!(user.credits, STARTING_CREDITS - 2);
    }

    #[tokio::test]
    async fn double_completion_does_not_double_count() {
        let (service, store) = service_with_store();
        seed_user(&store, "u1").await;
        let started = service.start("u1", start_req("hr")).await.unwrap();
        service
            .submit_answer(
                "u1",
                SubmitAnswerRequest {
                    interview_id: started.interview_id.clone(),
                    question_id: 1,
                    answer: Some(LONG_ANSWER.to_string()),
                    speech_text: None,
                },
            )
            .await
            .unwrap();

        let first = service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: started.interview_id.clone(),
                },
            )
            .await
            .unwrap();
        let second = service
            .complete(
                "u1",
                CompleteInterviewRequest {
                    interview_id: started.interview_id,
                },
            )
            .await
            .unwrap();

        assert_eq!(first.average_score, second.average_score);

        let user = store.get_user("u1").await.unwrap().unwrap();
        assert_eq!(user.total_interviews, 1);
        assert_eq!(user.credits, STARTING_CREDITS - 1);
    }

    #[tokio::test]
    async fn history_caps_at_ten_newest_first() {
        let (service, _store) = service_with_store();

        for _ in 0..12 {
            service.start("u1", start_req("hr")).await.unwrap();
        }

        let history = service.history("u1").await.unwrap();
        assert_eq!(history.interviews.len(), 10);
        for pair in history.interviews.windows(2) {
            assert!(pair[0].started_at >= pair[1].started_at);
        }
    }
}
