//! services/api/src/adapters/course_details.rs
//!
//! Course details are plain CRUD; the snapshot fields are built by
//! `seed::curriculum` before a record is handed to the store.

use kotoba_core::domain::CourseDetail;
use kotoba_core::ports::CourseDetailService;

use super::memory::MemoryStore;

pub type CourseDetailStore = MemoryStore<CourseDetail>;

impl CourseDetailService for MemoryStore<CourseDetail> {}
