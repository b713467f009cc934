use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use rand::Rng;

use crate::errors::ApiError;
use crate::llm::{CategoryScore, LlmClient, PerformanceSummary};
use crate::models::dashboard::{
    CategoryStat, CategoryStats, DashboardStatsResponse, DashboardUser, InsightsResponse,
    RecentInterview, ScheduleEntry, ScheduleResponse, StatsBlock, WeeklyBucket,
};
use crate::models::interview::{InterviewSession, InterviewStatus};
use crate::models::Category;
use crate::store::Store;

const STATS_SESSION_LIMIT: usize = 20;
const INSIGHTS_SESSION_LIMIT: usize = 10;
const RECENT_LIMIT: usize = 5;
const TREND_WEEKS: i64 = 4;

/// Derives readiness score, per-category averages, and the 4-week trend from
/// a user's completed sessions.
pub struct DashboardService {
    store: Arc<dyn Store>,
    llm: Arc<LlmClient>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn Store>, llm: Arc<LlmClient>) -> Self {
        Self { store, llm }
    }

    pub async fn stats(&self, user_id: &str) -> Result<DashboardStatsResponse, ApiError> {
        let user = self
            .store
            .get_user(user_id)
            .await
            .context("Failed to query user")?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let completed = self
            .completed_sessions(user_id, STATS_SESSION_LIMIT)
            .await?;

        let category_stats = CategoryStats {
            hr: category_stat(&completed, Category::Hr),
            technical: category_stat(&completed, Category::Technical),
            aptitude: category_stat(&completed, Category::Aptitude),
        };

        let weekly_progress = weekly_progress(Utc::now(), &completed);

        let recent_interviews = completed
            .iter()
            .take(RECENT_LIMIT)
            .map(|session| RecentInterview {
                id: session.id.clone(),
                category: session.category,
                score: session.total_score,
                date: session.completed_at,
            })
            .collect();

        Ok(DashboardStatsResponse {
            user: DashboardUser {
                name: user.name.clone(),
                email: user.email.clone(),
                credits: user.credits,
                total_interviews: user.total_interviews,
                avg_score: user.avg_score,
            },
            stats: StatsBlock {
                readiness_score: user.avg_score,
                total_interviews: user.total_interviews,
                category_stats,
                weekly_progress,
                recent_interviews,
            },
        })
    }

    pub async fn insights(&self, user_id: &str) -> Result<InsightsResponse, ApiError> {
        let user = self
            .store
            .get_user(user_id)
            .await
            .context("Failed to query user")?;

        let completed = self
            .completed_sessions(user_id, INSIGHTS_SESSION_LIMIT)
            .await?;

        let summary = PerformanceSummary {
            total_interviews: user.as_ref().map(|u| u.total_interviews).unwrap_or(0),
            avg_score: user.as_ref().map(|u| u.avg_score).unwrap_or(0),
            recent_scores: completed
                .iter()
                .map(|session| CategoryScore {
                    category: session.category,
                    score: session.total_score,
                })
                .collect(),
        };

        let insights = self.llm.generate_insights(&summary).await;

        Ok(InsightsResponse { insights })
    }

    /// Mock schedule for the calendar widget: fixed days of the current
    /// month, one slot each.
    pub fn schedule(&self) -> ScheduleResponse {
        let today = Utc::now().date_naive();
        let mut rng = rand::rng();

        let scheduled_interviews = [8, 11, 23, 24]
            .iter()
            .map(|&day| ScheduleEntry {
                date: today
                    .with_day(day)
                    .unwrap_or(today)
                    .format("%Y-%m-%d")
                    .to_string(),
                category: Category::ALL[rng.random_range(0..Category::ALL.len())],
                time: "10:00 AM".to_string(),
            })
            .collect();

        ScheduleResponse {
            scheduled_interviews,
        }
    }

    /// The user's completed sessions, newest-first by completion time.
    async fn completed_sessions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<InterviewSession>, ApiError> {
        let mut sessions = self
            .store
            .interviews_for_user(user_id)
            .await
            .context("Failed to query interviews")?;

        sessions.retain(|s| s.status == InterviewStatus::Completed);
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sessions.truncate(limit);

        Ok(sessions)
    }
}

fn category_stat(sessions: &[InterviewSession], category: Category) -> CategoryStat {
    let scores: Vec<u32> = sessions
        .iter()
        .filter(|s| s.category == category)
        .map(|s| s.total_score)
        .collect();

    if scores.is_empty() {
        return CategoryStat::default();
    }

    CategoryStat {
        total: scores.len() as u32,
        avg_score: (scores.iter().sum::<u32>() as f64 / scores.len() as f64).round() as u32,
    }
}

/// The 4 most recent 7-day windows ending today, oldest first.
/// Window i (3..0) spans [today-(7i+6) @ 00:00:00, today-7i @ 23:59:59].
fn weekly_progress(now: DateTime<Utc>, sessions: &[InterviewSession]) -> Vec<WeeklyBucket> {
    let mut buckets = Vec::with_capacity(TREND_WEEKS as usize);
    let day_end = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

    for i in (0..TREND_WEEKS).rev() {
        let window_start = (now - Duration::days(i * 7 + 6))
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let window_end = (now - Duration::days(i * 7))
            .date_naive()
            .and_time(day_end)
            .and_utc();

        let scores: Vec<u32> = sessions
            .iter()
            .filter_map(|s| s.completed_at.map(|at| (at, s.total_score)))
            .filter(|(at, _)| *at >= window_start && *at <= window_end)
            .map(|(_, score)| score)
            .collect();

        let average_score = if scores.is_empty() {
            0
        } else {
            (scores.iter().sum::<u32>() as f64 / scores.len() as f64).round() as u32
        };

        let label = match i {
            0 => "This Week".to_string(),
            1 => "Last Week".to_string(),
            weeks => format!("{weeks}w ago"),
        };

        buckets.push(WeeklyBucket {
            label,
            average_score,
            session_count: scores.len(),
        });
    }

    buckets
}
