//! Enrollment creates the join row and the user's starting checkpoint.

mod support;

use kotoba_api::adapters::Latency;
use kotoba_core::domain::{Checkpoint, CourseDetail, Id, JlptLevel, UserCourse};
use kotoba_core::ports::{
    CourseContentService, EntityKind, EntityStore, PortError, UserCourseService, UserService,
};
use std::collections::HashSet;
use support::{empty_state, seeded_state, slow_seeded_state};

#[tokio::test]
async fn enrollment_appends_exactly_one_course_progress() {
    let state = seeded_state();
    let before = state.users.get_progress(2).await.unwrap();

    let record = state
        .user_courses
        .create(UserCourse {
            user_id: 2,
            course_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(
        state.user_courses.get_by_id(record.id).await.unwrap().data,
        UserCourse {
            user_id: 2,
            course_id: 1
        }
    );

    let after = state.users.get_progress(2).await.unwrap();
    assert_eq!(after.course_progress.len(), before.course_progress.len() + 1);

    let first_lesson = state.content.get_course_lessons(1).await.unwrap()[0].clone();
    let entry = after.course(1).unwrap();
    assert_eq!(entry.checkpoint, first_lesson.checkpoint());
    assert_eq!(
        entry.checkpoint,
        Checkpoint {
            module_id: 2,
            lesson_id: 6
        }
    );
    assert_eq!(entry.current_hours, 0.0);
    assert_eq!(entry.current_progress, 0);
    assert_eq!(after.current_xp, before.current_xp);
}

#[tokio::test]
async fn enrollment_keeps_existing_progress_entries() {
    let state = seeded_state();
    let before = state.users.get_progress(1).await.unwrap();

    state
        .user_courses
        .create(UserCourse {
            user_id: 1,
            course_id: 2,
        })
        .await
        .unwrap();

    let after = state.users.get_progress(1).await.unwrap();
    assert_eq!(after.course_progress[..before.course_progress.len()], before.course_progress[..]);
    assert_eq!(after.course_progress.last().unwrap().course_id, 2);
}

#[tokio::test]
async fn duplicate_enrollments_are_allowed() {
    let state = seeded_state();
    let enroll = UserCourse {
        user_id: 1,
        course_id: 0,
    };
    let again = state.user_courses.create(enroll).await.unwrap();

    let rows: Vec<Id> = state
        .user_courses
        .get_all()
        .await
        .unwrap()
        .iter()
        .filter(|row| row.data == enroll)
        .map(|row| row.id)
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.contains(&again.id));

    let courses = state.user_courses.get_user_courses(1).await.unwrap();
    assert_eq!(courses.len(), 1);
}

#[tokio::test]
async fn enrolling_unknown_user_fails_without_side_effects() {
    let state = seeded_state();
    let rows_before = state.user_courses.get_all().await.unwrap().len();

    let err = state
        .user_courses
        .create(UserCourse {
            user_id: 404,
            course_id: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(err, PortError::not_found(EntityKind::User, 404));
    assert_eq!(state.user_courses.get_all().await.unwrap().len(), rows_before);
}

#[tokio::test]
async fn enrolling_in_a_course_without_lessons_is_an_invariant_violation() {
    let state = seeded_state();
    let before = state.users.get_progress(2).await.unwrap();

    let err = state
        .user_courses
        .create(UserCourse {
            user_id: 2,
            course_id: 77,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::InvariantViolation(_)));
    assert_eq!(state.users.get_progress(2).await.unwrap(), before);
}

#[tokio::test]
async fn user_courses_join_against_course_details() {
    let state = seeded_state();
    let courses = state.user_courses.get_user_courses(1).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_id, 0);

    assert!(state.user_courses.get_user_courses(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn join_uses_course_id_not_record_id() {
    let state = empty_state();
    let detail = |course_id: Id| CourseDetail {
        course_id,
        title: format!("Course {course_id}"),
        description: String::new(),
        jlpt_level: JlptLevel::N5,
        curriculum: vec![],
        course_values: vec![],
    };
    state.course_details.create(detail(10)).await.unwrap();
    state.course_details.create(detail(0)).await.unwrap();

    // Detail records get ids 0 and 1; only the one with course_id 0 joins.
    let rows = kotoba_api::adapters::UserCourseStore::new(
        vec![kotoba_core::domain::Record::new(
            0,
            UserCourse {
                user_id: 1,
                course_id: 0,
            },
        )],
        state.users.clone(),
        state.course_details.clone(),
        state.content.clone(),
        kotoba_api::adapters::Latency::none(),
    );

    let courses = rows.get_user_courses(1).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_id, 0);
    assert_eq!(courses[0].id, 1);
}

#[tokio::test(start_paused = true)]
async fn overlapping_enrollments_of_one_user_keep_both_checkpoints() {
    let state = slow_seeded_state(Latency::from_millis(10, 0));
    let before = state.users.get_progress(2).await.unwrap();

    let (first, second) = tokio::join!(
        state.user_courses.create(UserCourse {
            user_id: 2,
            course_id: 1,
        }),
        state.user_courses.create(UserCourse {
            user_id: 2,
            course_id: 2,
        }),
    );
    first.unwrap();
    second.unwrap();

    let after = state.users.get_progress(2).await.unwrap();
    assert_eq!(after.course_progress.len(), before.course_progress.len() + 2);
    assert!(after.course(1).is_some());
    assert!(after.course(2).is_some());

    let rows = state
        .user_courses
        .get_all()
        .await
        .unwrap()
        .iter()
        .filter(|row| row.user_id == 2)
        .count();
    assert_eq!(rows, after.course_progress.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn enrollments_across_threads_each_add_one_progress_entry() {
    let state = slow_seeded_state(Latency::from_millis(0, 5));
    let before = state.users.get_progress(1).await.unwrap().course_progress.len();

    let tasks: Vec<_> = (0..12)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .user_courses
                    .create(UserCourse {
                        user_id: 1,
                        course_id: i % 3,
                    })
                    .await
            })
        })
        .collect();
    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap().unwrap().id);
    }
    assert_eq!(ids.len(), 12);

    let after = state.users.get_progress(1).await.unwrap().course_progress.len();
    assert_eq!(after, before + 12);
}
