use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::llm::Insights;
use crate::models::Category;

/// Per-category rollup over recent completed sessions.
#[derive(Debug, Default, Serialize)]
pub struct CategoryStat {
    pub total: u32,
    #[serde(rename = "avgScore")]
    pub avg_score: u32,
}

#[derive(Debug, Serialize)]
pub struct CategoryStats {
    pub hr: CategoryStat,
    pub technical: CategoryStat,
    pub aptitude: CategoryStat,
}

/// One 7-day window of the 4-week trend.
#[derive(Debug, Serialize)]
pub struct WeeklyBucket {
    pub label: String,
    #[serde(rename = "averageScore")]
    pub average_score: u32,
    #[serde(rename = "sessionCount")]
    pub session_count: usize,
}

#[derive(Debug, Serialize)]
pub struct RecentInterview {
    pub id: String,
    pub category: Category,
    pub score: u32,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DashboardUser {
    pub name: String,
    pub email: String,
    pub credits: i64,
    #[serde(rename = "totalInterviews")]
    pub total_interviews: u32,
    #[serde(rename = "avgScore")]
    pub avg_score: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsBlock {
    #[serde(rename = "readinessScore")]
    pub readiness_score: u32,
    #[serde(rename = "totalInterviews")]
    pub total_interviews: u32,
    #[serde(rename = "categoryStats")]
    pub category_stats: CategoryStats,
    #[serde(rename = "weeklyProgress")]
    pub weekly_progress: Vec<WeeklyBucket>,
    #[serde(rename = "recentInterviews")]
    pub recent_interviews: Vec<RecentInterview>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub user: DashboardUser,
    pub stats: StatsBlock,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Insights,
}

#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    /// YYYY-MM-DD.
    pub date: String,
    pub category: Category,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    #[serde(rename = "scheduledInterviews")]
    pub scheduled_interviews: Vec<ScheduleEntry>,
}
