//! Lesson model
//!
//! The lesson record served by the lessons API, matching the shape of
//! the lesson data file.

use serde::{Deserialize, Serialize};

/// One lesson in the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub summary: String,
    pub description: String,
    pub learning_objectives: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_round_trips_with_wire_names() {
        let json = r#"{
            "id": "html-intro",
            "title": "Introduction to HTML",
            "category": "HTML",
            "difficulty": "Beginner",
            "duration": "15 minutes",
            "summary": "Learn the basics.",
            "description": "HTML is the foundation of web development.",
            "learningObjectives": ["Understand what HTML is"]
        }"#;

        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.id, "html-intro");
        assert_eq!(lesson.learning_objectives.len(), 1);

        let out = serde_json::to_value(&lesson).unwrap();
        assert!(out.get("learningObjectives").is_some());
        assert!(out.get("learning_objectives").is_none());
    }
}
