//! services/api/src/adapters/user_courses.rs
//!
//! The enrollment store. Creating an enrollment is the one store operation
//! with a side effect outside its own table: it appends a starting
//! `CourseProgress` to the enrolled user.

use async_trait::async_trait;
use kotoba_core::domain::{CourseDetail, CourseProgress, Id, Record, UserCourse};
use kotoba_core::patch::UserCoursePatch;
use kotoba_core::ports::{
    CourseContentService, CourseDetailService, EntityStore, PortError, PortResult,
    UserCourseService, UserService,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use super::latency::Latency;
use super::memory::MemoryStore;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

pub struct UserCourseStore {
    rows: MemoryStore<UserCourse>,
    users: Arc<dyn UserService>,
    course_details: Arc<dyn CourseDetailService>,
    content: Arc<dyn CourseContentService>,
}

impl UserCourseStore {
    pub fn new(
        records: Vec<Record<UserCourse>>,
        users: Arc<dyn UserService>,
        course_details: Arc<dyn CourseDetailService>,
        content: Arc<dyn CourseContentService>,
        latency: Latency,
    ) -> Self {
        Self {
            rows: MemoryStore::with_records(records, latency),
            users,
            course_details,
            content,
        }
    }
}

//=========================================================================================
// `EntityStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl EntityStore<UserCourse> for UserCourseStore {
    async fn get_all(&self) -> PortResult<Vec<Record<UserCourse>>> {
        self.rows.get_all().await
    }

    async fn get_by_id(&self, id: Id) -> PortResult<Record<UserCourse>> {
        self.rows.get_by_id(id).await
    }

    /// Enrolls the user: appends the course's first lesson as a new checkpoint
    /// on the user, then inserts the join row.
    ///
    /// The checkpoint is appended inside one write on the user store, so
    /// concurrent enrollments of the same user each keep their entry. The
    /// insert that follows cannot fail.
    async fn create(&self, data: UserCourse) -> PortResult<Record<UserCourse>> {
        self.users.get_progress(data.user_id).await?;

        let lessons = self.content.get_course_lessons(data.course_id).await?;
        let first = lessons.first().ok_or_else(|| {
            PortError::InvariantViolation(format!(
                "course {} has no lessons to start from",
                data.course_id
            ))
        })?;

        self.users
            .start_course(
                data.user_id,
                CourseProgress {
                    course_id: data.course_id,
                    checkpoint: first.checkpoint(),
                    current_hours: 0.0,
                    current_progress: 0,
                },
            )
            .await?;

        let record = self.rows.create(data).await?;
        info!(
            "User {} enrolled in course {} (enrollment {})",
            data.user_id, data.course_id, record.id
        );
        Ok(record)
    }

    /// Changes the join row only; the user's progress entries are left as they are.
    async fn update(&self, id: Id, patch: UserCoursePatch) -> PortResult<Record<UserCourse>> {
        self.rows.update(id, patch).await
    }

    async fn delete(&self, id: Id) -> PortResult<bool> {
        self.rows.delete(id).await
    }
}

//=========================================================================================
// `UserCourseService` Trait Implementation
//=========================================================================================

#[async_trait]
impl UserCourseService for UserCourseStore {
    async fn get_user_courses(&self, user_id: Id) -> PortResult<Vec<Record<CourseDetail>>> {
        let enrolled: HashSet<Id> = self
            .rows
            .read(move |table| {
                Ok(table
                    .rows()
                    .iter()
                    .filter(|row| row.user_id == user_id)
                    .map(|row| row.course_id)
                    .collect())
            })
            .await?;

        if enrolled.is_empty() {
            return Ok(Vec::new());
        }

        let details = self.course_details.get_all().await?;
        Ok(details
            .into_iter()
            .filter(|detail| enrolled.contains(&detail.course_id))
            .collect())
    }
}
