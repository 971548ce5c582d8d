//! services/api/src/adapters/course_tests.rs

use async_trait::async_trait;
use kotoba_core::domain::{Id, Record, Test};
use kotoba_core::ports::{EntityKind, PortError, PortResult, TestService};

use super::memory::MemoryStore;

pub type TestStore = MemoryStore<Test>;

#[async_trait]
impl TestService for MemoryStore<Test> {
    async fn get_course_test(&self, course_id: Id) -> PortResult<Record<Test>> {
        self.read(move |table| {
            table
                .rows()
                .iter()
                .find(|test| test.course_id == course_id)
                .cloned()
                .ok_or(PortError::not_found(EntityKind::CourseTest, course_id))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::latency::Latency;
    use crate::seed::fixtures;

    fn store() -> TestStore {
        MemoryStore::with_records(fixtures::course_tests().unwrap(), Latency::none())
    }

    #[tokio::test]
    async fn seeded_course_zero_has_a_test() {
        let test = store().get_course_test(0).await.unwrap();
        assert_eq!(test.course_id, 0);
        assert!(!test.questions.is_empty());
    }

    #[tokio::test]
    async fn course_without_test_is_not_found() {
        let err = store().get_course_test(404).await.unwrap_err();
        assert_eq!(err, PortError::not_found(EntityKind::CourseTest, 404));
    }
}
