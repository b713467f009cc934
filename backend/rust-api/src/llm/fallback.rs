//! Static fallback content served whenever the upstream LLM is unavailable
//! or returns something unparseable. The practice flow must never fail on
//! upstream trouble, so every gateway path ends here on error.

use crate::models::{Category, Evaluation, Question};

use super::Insights;

fn question(id: u32, question: &str, tips: &str) -> Question {
    Question {
        id,
        question: question.to_string(),
        tips: tips.to_string(),
    }
}

/// Fixed question set for a category (topic-specific for technical).
pub fn questions(category: Category, topic: Option<&str>) -> Vec<Question> {
    match category {
        Category::Hr => vec![
            question(
                1,
                "Tell me about yourself and your educational background.",
                "Keep it professional, focus on relevant experiences.",
            ),
            question(
                2,
                "What are your greatest strengths and how do they help you?",
                "Use specific examples to back up your claims.",
            ),
            question(
                3,
                "Where do you see yourself in 5 years?",
                "Show ambition while being realistic about growth.",
            ),
            question(
                4,
                "Why should we hire you over other candidates?",
                "Focus on unique value you can add to the company.",
            ),
            question(
                5,
                "Describe a challenging situation and how you handled it.",
                "Use the STAR method: Situation, Task, Action, Result.",
            ),
        ],
        Category::Technical => match topic {
            Some("dsa") => vec![
                question(
                    1,
                    "Explain the difference between an array and a linked list. When would you use each?",
                    "Compare access time, insertion, deletion operations.",
                ),
                question(
                    2,
                    "What is the time complexity of binary search and why is it efficient?",
                    "Explain the divide and conquer approach.",
                ),
                question(
                    3,
                    "Describe how a stack data structure works and give a real-world example.",
                    "LIFO principle, mention function call stack.",
                ),
                question(
                    4,
                    "What is a hash table and how does it handle collisions?",
                    "Discuss chaining and open addressing methods.",
                ),
                question(
                    5,
                    "Explain the difference between BFS and DFS graph traversal algorithms.",
                    "Queue vs Stack, use cases for each.",
                ),
            ],
            _ => vec![
                question(
                    1,
                    "Explain the difference between stack and queue data structures.",
                    "LIFO vs FIFO, real-world examples.",
                ),
                question(
                    2,
                    "What is object-oriented programming and its four pillars?",
                    "Encapsulation, Inheritance, Polymorphism, Abstraction.",
                ),
                question(
                    3,
                    "How would you optimize a slow database query?",
                    "Indexing, query analysis, caching strategies.",
                ),
                question(
                    4,
                    "Explain RESTful API principles.",
                    "HTTP methods, statelessness, resource-based URLs.",
                ),
                question(
                    5,
                    "Describe a project you worked on and challenges you faced.",
                    "Be specific about your role and contributions.",
                ),
            ],
        },
        Category::Aptitude => vec![
            question(
                1,
                "If 6 workers can complete a task in 12 days, how many days would 9 workers take?",
                "Use inverse proportionality: more workers = fewer days.",
            ),
            question(
                2,
                "Find the next number in the sequence: 2, 6, 12, 20, 30, ?",
                "Look at the differences between consecutive numbers.",
            ),
            question(
                3,
                "A train travels 360 km in 4 hours. What is its speed in meters per second?",
                "Convert km/h to m/s by multiplying by 5/18.",
            ),
            question(
                4,
                "If all Roses are Flowers, and some Flowers fade quickly, can we say some Roses fade quickly?",
                "Be careful with logical deduction in syllogisms.",
            ),
            question(
                5,
                "Complete the analogy: Book is to Reading as Fork is to ?",
                "Identify the functional relationship between pairs.",
            ),
        ],
    }
}

/// Canned rejection for empty or sub-10-character answers. Served without an
/// upstream call.
pub fn short_answer_evaluation() -> Evaluation {
    Evaluation {
        score: 2.0,
        strengths: vec![],
        improvements: vec!["Answer was too short or empty".to_string()],
        better_answer: "Please provide a more detailed response.".to_string(),
        feedback: "Your answer needs more content. Try to elaborate on your thoughts.".to_string(),
    }
}

/// Neutral evaluation used when the upstream call fails or parses badly.
pub fn mock_evaluation() -> Evaluation {
    Evaluation {
        score: 7.0,
        strengths: vec![
            "Clear communication".to_string(),
            "Good structure".to_string(),
        ],
        improvements: vec![
            "Add more specific examples".to_string(),
            "Be more concise".to_string(),
        ],
        better_answer: "A more detailed answer with specific examples would strengthen your response."
            .to_string(),
        feedback: "Good attempt! Focus on adding concrete examples from your experience."
            .to_string(),
    }
}

pub fn mock_insights() -> Insights {
    Insights {
        overall_summary: "You're making steady progress in your interview preparation. Your HR skills are strongest, while technical areas need more focus.".to_string(),
        top_strength: "Communication and confidence in HR interviews".to_string(),
        focus_area: "Technical problem-solving explanations".to_string(),
        next_steps: vec![
            "Practice explaining code solutions aloud".to_string(),
            "Review data structures fundamentals".to_string(),
            "Do mock interviews with a timer".to_string(),
        ],
        motivational_tip: "Every interview is a learning opportunity. Keep practicing!".to_string(),
    }
}
