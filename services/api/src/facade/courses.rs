//! services/api/src/facade/courses.rs
//!
//! Course details, course structure and enrollments.

use kotoba_core::domain::{CourseDetail, Id, Lesson, Module, Record, UserCourse};
use kotoba_core::patch::{CourseDetailPatch, UserCoursePatch};
use kotoba_core::ports::{CourseContentService, EntityStore, UserCourseService};
use tracing::info;

use super::{Facade, FacadeResult, Invalidate, QueryKey, Scope};

/// Joined enrollment views embed course details, so they go stale with them.
fn course_detail_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::CourseDetails),
        Invalidate::Scope(Scope::EnrolledCourses),
    ]
}

fn enrollment_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::UserCourses),
        Invalidate::Scope(Scope::EnrolledCourses),
    ]
}

impl Facade {
    pub async fn course_details(&self) -> FacadeResult<Vec<Record<CourseDetail>>> {
        self.query(
            QueryKey::all(Scope::CourseDetails),
            self.state.course_details.get_all(),
        )
        .await
    }

    pub async fn course_detail(&self, id: Id) -> FacadeResult<Record<CourseDetail>> {
        self.query(
            QueryKey::item(Scope::CourseDetails, id),
            self.state.course_details.get_by_id(id),
        )
        .await
    }

    /// Stores `detail` as given; its curriculum snapshot is not derived here.
    /// Existing enrollments may point at its `course_id`, so every joined
    /// enrollment view is dropped too.
    pub async fn create_course_detail(
        &self,
        detail: CourseDetail,
    ) -> FacadeResult<Record<CourseDetail>> {
        self.mutate(
            "create_course_detail",
            vec![
                Invalidate::Key(QueryKey::all(Scope::CourseDetails)),
                Invalidate::Scope(Scope::EnrolledCourses),
            ],
            self.state.course_details.create(detail),
        )
        .await
    }

    pub async fn update_course_detail(
        &self,
        id: Id,
        patch: CourseDetailPatch,
    ) -> FacadeResult<Record<CourseDetail>> {
        self.mutate(
            "update_course_detail",
            course_detail_changed(),
            self.state.course_details.update(id, patch),
        )
        .await
    }

    pub async fn delete_course_detail(&self, id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_course_detail",
            course_detail_changed(),
            self.state.course_details.delete(id),
        )
        .await
    }

    pub async fn course_modules(&self, course_id: Id) -> FacadeResult<Vec<Module>> {
        self.query(
            QueryKey::item(Scope::CourseModules, course_id),
            self.state.content.get_course_modules(course_id),
        )
        .await
    }

    pub async fn module_lessons(&self, module_id: Id) -> FacadeResult<Vec<Lesson>> {
        self.query(
            QueryKey::item(Scope::ModuleLessons, module_id),
            self.state.content.get_module_lessons(module_id),
        )
        .await
    }

    /// Course details of every course the user is enrolled in.
    pub async fn enrolled_courses(&self, user_id: Id) -> FacadeResult<Vec<Record<CourseDetail>>> {
        self.query(
            QueryKey::item(Scope::EnrolledCourses, user_id),
            self.state.user_courses.get_user_courses(user_id),
        )
        .await
    }

    pub async fn user_course_rows(&self) -> FacadeResult<Vec<Record<UserCourse>>> {
        self.query(
            QueryKey::all(Scope::UserCourses),
            self.state.user_courses.get_all(),
        )
        .await
    }

    pub async fn user_course_row(&self, id: Id) -> FacadeResult<Record<UserCourse>> {
        self.query(
            QueryKey::item(Scope::UserCourses, id),
            self.state.user_courses.get_by_id(id),
        )
        .await
    }

    /// Enrolls the user in the course. The user's progress gains a starting
    /// checkpoint, so the user's own keys are invalidated as well.
    pub async fn enroll(&self, user_id: Id, course_id: Id) -> FacadeResult<Record<UserCourse>> {
        let record = self
            .mutate(
                "enroll",
                vec![
                    Invalidate::Key(QueryKey::all(Scope::UserCourses)),
                    Invalidate::Key(QueryKey::item(Scope::EnrolledCourses, user_id)),
                    Invalidate::Scope(Scope::Users),
                    Invalidate::Key(QueryKey::item(Scope::UserProgress, user_id)),
                ],
                self.state.user_courses.create(UserCourse { user_id, course_id }),
            )
            .await?;
        info!("Enrollment {} created through the facade", record.id);
        Ok(record)
    }

    pub async fn update_user_course(
        &self,
        id: Id,
        patch: UserCoursePatch,
    ) -> FacadeResult<Record<UserCourse>> {
        self.mutate(
            "update_user_course",
            enrollment_changed(),
            self.state.user_courses.update(id, patch),
        )
        .await
    }

    /// Removes the enrollment row. The user's course progress entry is kept.
    pub async fn delete_user_course(&self, id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_user_course",
            enrollment_changed(),
            self.state.user_courses.delete(id),
        )
        .await
    }
}
