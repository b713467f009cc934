pub mod dashboard;
pub mod interview;
pub mod user;

pub use interview::{
    Category, CompleteInterviewRequest, Evaluation, HistoryResponse, InterviewResults,
    InterviewSession, InterviewStatus, InterviewSummary, Question, QuestionResponse,
    StartInterviewRequest, StartInterviewResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserProfile};
