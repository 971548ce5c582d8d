//! services/api/src/adapters/users.rs
//!
//! Implements the `UserService` port on top of the user `MemoryStore`.
//! Account, profile and progress updates all merge one level deep through
//! their patch types, the same way a whole-user `UserPatch` does.

use async_trait::async_trait;
use kotoba_core::domain::{CourseProgress, Id, Progress, Record, User};
use kotoba_core::patch::{AccountPatch, Patch, ProfilePatch, ProgressPatch};
use kotoba_core::ports::{PortResult, UserService};
use tracing::info;

use super::memory::MemoryStore;

pub type UserStore = MemoryStore<User>;

#[async_trait]
impl UserService for MemoryStore<User> {
    async fn get_progress(&self, user_id: Id) -> PortResult<Progress> {
        self.read(move |table| Ok(table.get(user_id)?.progress.clone()))
            .await
    }

    async fn update_progress(&self, user_id: Id, patch: ProgressPatch) -> PortResult<Progress> {
        let user = self
            .write(move |table| table.modify(user_id, |user| patch.apply(&mut user.progress)))
            .await?;
        Ok(user.into_inner().progress)
    }

    async fn update_account(&self, user_id: Id, patch: AccountPatch) -> PortResult<Record<User>> {
        self.write(move |table| table.modify(user_id, |user| patch.apply(&mut user.account)))
            .await
    }

    async fn update_profile(&self, user_id: Id, patch: ProfilePatch) -> PortResult<Record<User>> {
        self.write(move |table| table.modify(user_id, |user| patch.apply(&mut user.profile)))
            .await
    }

    async fn award_xp(&self, user_id: Id, xp: u32) -> PortResult<Progress> {
        let user = self
            .write(move |table| {
                table.modify(user_id, |user| {
                    user.progress.current_xp = user.progress.current_xp.saturating_add(xp)
                })
            })
            .await?;
        info!(
            "Awarded {} XP to user {} (now {})",
            xp, user_id, user.progress.current_xp
        );
        Ok(user.into_inner().progress)
    }

    async fn start_course(&self, user_id: Id, entry: CourseProgress) -> PortResult<Progress> {
        let course_id = entry.course_id;
        let user = self
            .write(move |table| {
                table.modify(user_id, |user| user.progress.course_progress.push(entry))
            })
            .await?;
        info!("User {} started course {}", user_id, course_id);
        Ok(user.into_inner().progress)
    }
}
