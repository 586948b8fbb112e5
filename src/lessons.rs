//! Lesson Library
//!
//! Loads the lesson catalogue from a JSON file, trying a configured
//! path first and a conventional location second, and falling back to
//! a built-in lesson when nothing loads. Loading happens once at
//! startup; the response cache handles request-level caching on top.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::models::Lesson;

// == Lesson Library ==
/// Immutable, in-memory lesson catalogue.
#[derive(Debug, Clone)]
pub struct LessonLibrary {
    lessons: Vec<Lesson>,
}

impl LessonLibrary {
    // == Loading ==
    /// Loads lessons from the first readable candidate path.
    ///
    /// Candidates, in order: the configured override (if any), then
    /// `data/lessons.json` relative to the working directory. A file
    /// that is missing, unparsable, or empty falls through to the next
    /// candidate; when every candidate fails, the built-in fallback
    /// lesson is served so the API never comes up empty.
    pub fn load(configured: Option<&Path>) -> Self {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(path) = configured {
            candidates.push(path.to_path_buf());
        }
        candidates.push(PathBuf::from("data/lessons.json"));

        for path in &candidates {
            match fs::read(path) {
                Ok(bytes) => match serde_json::from_slice::<Vec<Lesson>>(&bytes) {
                    Ok(lessons) if !lessons.is_empty() => {
                        info!("loaded {} lessons from {}", lessons.len(), path.display());
                        return Self { lessons };
                    }
                    Ok(_) => warn!("lesson file {} is empty", path.display()),
                    Err(err) => {
                        warn!("could not parse lesson file {}: {}", path.display(), err)
                    }
                },
                Err(err) => debug!("could not read lesson file {}: {}", path.display(), err),
            }
        }

        warn!("no lesson file found, serving the built-in fallback lesson");
        Self {
            lessons: Self::fallback_lessons(),
        }
    }

    /// Builds a library directly from lesson records.
    pub fn from_lessons(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    // == Accessors ==
    /// All lessons in catalogue order.
    pub fn all(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Finds one lesson by id.
    pub fn find(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Number of lessons in the catalogue.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Returns true if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    // == Fallback ==
    /// Minimal catalogue used when no lesson file can be loaded.
    fn fallback_lessons() -> Vec<Lesson> {
        vec![Lesson {
            id: "html-intro".to_string(),
            title: "Introduction to HTML".to_string(),
            category: "HTML".to_string(),
            difficulty: "Beginner".to_string(),
            duration: "15 minutes".to_string(),
            summary: "Learn the basics of HTML structure and tags.".to_string(),
            description: "HTML (HyperText Markup Language) is the foundation of web \
                          development. In this lesson, you'll learn about HTML structure, \
                          basic tags, and how to create your first webpage."
                .to_string(),
            learning_objectives: vec![
                "Understand what HTML is and its purpose".to_string(),
                "Learn basic HTML structure".to_string(),
                "Create your first HTML page".to_string(),
                "Use common HTML tags".to_string(),
            ],
        }]
    }
}
