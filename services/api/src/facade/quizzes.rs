//! services/api/src/facade/quizzes.rs
//!
//! Course tests and the scoring/XP pipeline.

use kotoba_core::domain::{Id, Progress, Record, Test};
use kotoba_core::patch::TestPatch;
use kotoba_core::ports::{EntityStore, TestService, UserService};
use kotoba_core::scoring::{score_test, TestScore};
use tracing::info;

use super::{Facade, FacadeResult, Invalidate, QueryKey, Scope};

/// The graded attempt and the user's progress after the XP award.
#[derive(Debug, Clone)]
pub struct TestSubmission {
    pub score: TestScore,
    pub progress: Progress,
}

/// A test may be, or stop being, the first test of its course.
fn test_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::Tests),
        Invalidate::Scope(Scope::CourseTest),
    ]
}

impl Facade {
    pub async fn tests(&self) -> FacadeResult<Vec<Record<Test>>> {
        self.query(QueryKey::all(Scope::Tests), self.state.tests.get_all())
            .await
    }

    pub async fn test(&self, test_id: Id) -> FacadeResult<Record<Test>> {
        self.query(
            QueryKey::item(Scope::Tests, test_id),
            self.state.tests.get_by_id(test_id),
        )
        .await
    }

    pub async fn course_test(&self, course_id: Id) -> FacadeResult<Record<Test>> {
        self.query(
            QueryKey::item(Scope::CourseTest, course_id),
            self.state.tests.get_course_test(course_id),
        )
        .await
    }

    pub async fn create_test(&self, test: Test) -> FacadeResult<Record<Test>> {
        self.mutate(
            "create_test",
            vec![
                Invalidate::Key(QueryKey::all(Scope::Tests)),
                Invalidate::Scope(Scope::CourseTest),
            ],
            self.state.tests.create(test),
        )
        .await
    }

    pub async fn update_test(&self, test_id: Id, patch: TestPatch) -> FacadeResult<Record<Test>> {
        self.mutate(
            "update_test",
            test_changed(),
            self.state.tests.update(test_id, patch),
        )
        .await
    }

    pub async fn delete_test(&self, test_id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_test",
            test_changed(),
            self.state.tests.delete(test_id),
        )
        .await
    }

    /// Grades `answers` (option index per question) and credits the earned XP to the user.
    pub async fn submit_test(
        &self,
        user_id: Id,
        test_id: Id,
        answers: &[Option<usize>],
    ) -> FacadeResult<TestSubmission> {
        let test = self.test(test_id).await?;
        let score = score_test(&test, answers);

        let progress = self
            .mutate(
                "award_xp",
                vec![
                    Invalidate::Scope(Scope::Users),
                    Invalidate::Key(QueryKey::item(Scope::UserProgress, user_id)),
                ],
                self.state.users.award_xp(user_id, score.xp_earned),
            )
            .await?;

        info!(
            "User {} scored {}/{} on test {} (+{} XP)",
            user_id, score.correct, score.total, test_id, score.xp_earned
        );
        Ok(TestSubmission { score, progress })
    }
}
