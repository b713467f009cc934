//! Prompt templates for question generation, answer evaluation, and
//! dashboard insights. Each template demands raw JSON so the reply can be
//! span-extracted and parsed without trusting upstream formatting.

use crate::models::Category;

pub const QUESTIONS_SYSTEM: &str = "You are an interview preparation assistant. Always respond with valid JSON only, no markdown formatting.";
pub const EVALUATION_SYSTEM: &str = "You are an interview evaluation assistant. Always respond with valid JSON only, no markdown formatting.";
pub const INSIGHTS_SYSTEM: &str =
    "You are a career coach. Always respond with valid JSON only, no markdown.";

/// Human-readable descriptions for technical interview topics.
/// Unknown topics fall back to the generic description.
pub fn topic_description(topic: Option<&str>) -> &'static str {
    match topic {
        Some("dsa") => {
            "Data Structures and Algorithms (arrays, linked lists, trees, graphs, sorting, searching)"
        }
        Some("webdev") => "Web Development (HTML, CSS, JavaScript, React, Node.js, APIs)",
        Some("python") => "Python Programming (syntax, data types, OOP, libraries, best practices)",
        Some("java") => "Java Programming (OOP concepts, collections, multithreading, JVM)",
        Some("database") => {
            "Database and SQL (queries, joins, normalization, indexing, transactions)"
        }
        Some("os") => "Operating Systems (processes, threads, memory management, scheduling)",
        Some("networking") => "Computer Networks (TCP/IP, HTTP, DNS, security, protocols)",
        _ => "general programming and computer science concepts",
    }
}

/// Question-generation prompt for a category. `seed` is a freshness token
/// (current epoch millis) included to bias the upstream model toward varied
/// output across calls; best-effort only.
pub fn question_prompt(category: Category, topic: Option<&str>, seed: i64) -> String {
    match category {
        Category::Hr => format!(
            r#"You are an expert HR interview coach. Generate exactly 5 UNIQUE and VARIED HR/behavioral interview questions for a student preparing for job interviews.

IMPORTANT: Generate DIFFERENT questions each time. Be creative and varied. Session ID: {seed}

Choose from these HR interview themes (pick different combinations):
- Self-introduction and background
- Strengths, weaknesses, skills
- Career goals and motivation
- Teamwork and collaboration
- Leadership and initiative
- Conflict resolution
- Problem-solving scenarios
- Work ethic and values
- Adaptability and learning
- Handling pressure and deadlines

Return ONLY a JSON array in this exact format, nothing else:
[{{"id": 1, "question": "...", "tips": "..."}}]

Make each question distinct and practical for real interviews."#
        ),
        Category::Technical => {
            let topic_desc = topic_description(topic);
            format!(
                r#"You are an expert technical interviewer. Generate exactly 5 UNIQUE technical interview questions about {topic_desc} for a student/fresher level candidate.

IMPORTANT: Generate DIFFERENT questions each time. Be creative and varied. Session ID: {seed}

Questions should:
- Be appropriate for fresher/entry-level candidates
- Test understanding, not just memorization
- Include a mix of conceptual and practical questions
- Be answerable verbally (not coding problems requiring IDE)

Return ONLY a JSON array in this exact format, nothing else:
[{{"id": 1, "question": "...", "tips": "..."}}]"#
            )
        }
        Category::Aptitude => format!(
            r#"You are an aptitude test expert. Generate exactly 5 UNIQUE aptitude/reasoning questions for a student preparing for placement tests.

IMPORTANT: Generate DIFFERENT questions each time with different numbers, scenarios, and patterns. Session ID: {seed}

Include a mix of:
- Mathematical reasoning (percentages, ratios, speed/time/distance, work problems)
- Logical reasoning (sequences, patterns, puzzles)
- Verbal reasoning (analogies, statements, syllogisms)
- Critical thinking and data interpretation

Return ONLY a JSON array in this exact format, nothing else:
[{{"id": 1, "question": "...", "tips": "..."}}]

Make questions challenging but solvable verbally without paper."#
        ),
    }
}

pub fn evaluation_prompt(category: Category, question: &str, answer: &str) -> String {
    format!(
        r#"You are an interview coach. Evaluate this {} interview response.

Question: {question}
Candidate's Answer: {answer}

Provide a fair and constructive evaluation. Return ONLY JSON in this exact format, no markdown:
{{
  "score": (number 1-10),
  "strengths": ["point1", "point2"],
  "improvements": ["point1", "point2"],
  "betterAnswer": "A brief sample of how to improve the answer",
  "feedback": "2-3 sentence overall feedback"
}}"#,
        category.as_str()
    )
}

pub fn insights_prompt(performance_json: &str) -> String {
    format!(
        r#"Based on this interview performance data, generate personalized insights:
{performance_json}

Provide insights in JSON format only, no markdown:
{{
  "overallSummary": "Brief 2-sentence summary of performance",
  "topStrength": "Main strength identified",
  "focusArea": "Area needing most improvement",
  "nextSteps": ["action1", "action2", "action3"],
  "motivationalTip": "A brief motivating statement"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technical_prompt_interpolates_topic() {
        let prompt = question_prompt(Category::Technical, Some("dsa"), 42);
        assert!(prompt.contains("Data Structures and Algorithms"));
        assert!(prompt.contains("Session ID: 42"));
    }

    #[test]
    fn unknown_topic_uses_generic_description() {
        assert_eq!(
            topic_description(Some("quantum-basket-weaving")),
            "general programming and computer science concepts"
        );
        assert_eq!(
            topic_description(None),
            "general programming and computer science concepts"
        );
    }

    #[test]
    fn evaluation_prompt_embeds_question_and_answer() {
        let prompt = evaluation_prompt(Category::Hr, "Why us?", "Because reasons.");
        assert!(prompt.contains("Why us?"));
        assert!(prompt.contains("Because reasons."));
        assert!(prompt.contains("hr interview response"));
    }
}
