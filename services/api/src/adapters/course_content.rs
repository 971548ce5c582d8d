//! services/api/src/adapters/course_content.rs
//!
//! An in-memory implementation of the `CourseContentService` port. The course
//! structure is read-only: modules and lessons are fixed at construction.

use async_trait::async_trait;
use kotoba_core::domain::{Id, Lesson, Module};
use kotoba_core::ports::{CourseContentService, EntityKind, PortError, PortResult};

use super::latency::Latency;

#[derive(Debug, Clone)]
pub struct MemoryCourseContent {
    modules: Vec<Module>,
    lessons: Vec<Lesson>,
    latency: Latency,
}

impl MemoryCourseContent {
    pub fn new(modules: Vec<Module>, lessons: Vec<Lesson>, latency: Latency) -> Self {
        Self {
            modules,
            lessons,
            latency,
        }
    }

    /// Modules of the course in display order. Unknown courses have no modules.
    pub fn modules_of(&self, course_id: Id) -> Vec<Module> {
        let mut modules: Vec<Module> = self
            .modules
            .iter()
            .filter(|m| m.course_id == course_id)
            .cloned()
            .collect();
        modules.sort_by_key(|m| m.order);
        modules
    }

    /// Lessons of the module in display order.
    pub fn lessons_of(&self, module_id: Id) -> PortResult<Vec<Lesson>> {
        if !self.modules.iter().any(|m| m.id == module_id) {
            return Err(PortError::not_found(EntityKind::Module, module_id));
        }
        let mut lessons: Vec<Lesson> = self
            .lessons
            .iter()
            .filter(|l| l.module_id == module_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| l.order);
        Ok(lessons)
    }

    pub fn course_lessons(&self, course_id: Id) -> PortResult<Vec<Lesson>> {
        let mut lessons = Vec::new();
        for module in self.modules_of(course_id) {
            lessons.extend(self.lessons_of(module.id)?);
        }
        Ok(lessons)
    }
}

#[async_trait]
impl CourseContentService for MemoryCourseContent {
    async fn get_course_modules(&self, course_id: Id) -> PortResult<Vec<Module>> {
        self.latency.simulate(Ok(self.modules_of(course_id))).await
    }

    async fn get_module_lessons(&self, module_id: Id) -> PortResult<Vec<Lesson>> {
        self.latency.simulate(self.lessons_of(module_id)).await
    }

    async fn get_course_lessons(&self, course_id: Id) -> PortResult<Vec<Lesson>> {
        self.latency.simulate(self.course_lessons(course_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: Id, course_id: Id, order: u32) -> Module {
        Module {
            id,
            course_id,
            title: format!("Module {id}"),
            order,
        }
    }

    fn lesson(id: Id, module_id: Id, order: u32) -> Lesson {
        Lesson {
            id,
            module_id,
            title: format!("Lesson {id}"),
            order,
            duration_minutes: 10,
        }
    }

    fn content() -> MemoryCourseContent {
        MemoryCourseContent::new(
            vec![module(0, 0, 1), module(1, 0, 0), module(2, 1, 0)],
            vec![
                lesson(0, 0, 0),
                lesson(1, 1, 1),
                lesson(2, 1, 0),
                lesson(3, 2, 0),
            ],
            Latency::none(),
        )
    }

    #[tokio::test]
    async fn course_lessons_follow_module_then_lesson_order() {
        let lessons = content().get_course_lessons(0).await.unwrap();
        let ids: Vec<Id> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[tokio::test]
    async fn unknown_course_has_no_modules_or_lessons() {
        let content = content();
        assert!(content.get_course_modules(7).await.unwrap().is_empty());
        assert!(content.get_course_lessons(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lessons_of_unknown_module_is_not_found() {
        let err = content().get_module_lessons(9).await.unwrap_err();
        assert_eq!(err, PortError::not_found(EntityKind::Module, 9));
    }
}
