//! services/api/src/seed/curriculum.rs
//!
//! Derives the curriculum and display rows of a course detail from the
//! course's modules and lessons. The result is a snapshot: later changes to
//! the course content are not reflected in an existing course detail.

use kotoba_core::domain::{CourseDetail, CourseValue, CurriculumModule, Id, JlptLevel};
use kotoba_core::ports::PortResult;
use serde::Deserialize;

use crate::adapters::MemoryCourseContent;

/// Hand-authored part of a course detail, before derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSeed {
    pub course_id: Id,
    pub title: String,
    pub description: String,
    pub jlpt_level: JlptLevel,
}

pub fn course_detail(seed: CourseSeed, content: &MemoryCourseContent) -> PortResult<CourseDetail> {
    let mut curriculum = Vec::new();
    let mut lesson_count = 0;
    let mut minutes = 0;

    for module in content.modules_of(seed.course_id) {
        let lessons = content.lessons_of(module.id)?;
        lesson_count += lessons.len();
        minutes += lessons.iter().map(|l| l.duration_minutes).sum::<u32>();
        curriculum.push(CurriculumModule {
            module_id: module.id,
            title: module.title,
            lessons: lessons.into_iter().map(|l| l.title).collect(),
        });
    }

    let course_values = vec![
        value("Level", format!("JLPT {:?}", seed.jlpt_level)),
        value("Modules", curriculum.len().to_string()),
        value("Lessons", lesson_count.to_string()),
        value("Estimated time", format_duration(minutes)),
    ];

    Ok(CourseDetail {
        course_id: seed.course_id,
        title: seed.title,
        description: seed.description,
        jlpt_level: seed.jlpt_level,
        curriculum,
        course_values,
    })
}

fn value(label: &str, value: String) -> CourseValue {
    CourseValue {
        label: label.to_string(),
        value,
    }
}

fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
