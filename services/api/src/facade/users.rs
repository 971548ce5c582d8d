//! services/api/src/facade/users.rs

use kotoba_core::domain::{Id, Progress, Record, User};
use kotoba_core::patch::{AccountPatch, ProfilePatch, ProgressPatch, UserPatch};
use kotoba_core::ports::{EntityStore, UserService};

use super::{Facade, FacadeResult, Invalidate, QueryKey, Scope};

/// Everything that reads a user, for mutations that may touch any part of one.
fn user_changed(user_id: Id) -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::Users),
        Invalidate::Key(QueryKey::item(Scope::UserProgress, user_id)),
    ]
}

impl Facade {
    pub async fn users(&self) -> FacadeResult<Vec<Record<User>>> {
        self.query(QueryKey::all(Scope::Users), self.state.users.get_all())
            .await
    }

    pub async fn user(&self, user_id: Id) -> FacadeResult<Record<User>> {
        self.query(
            QueryKey::item(Scope::Users, user_id),
            self.state.users.get_by_id(user_id),
        )
        .await
    }

    pub async fn user_progress(&self, user_id: Id) -> FacadeResult<Progress> {
        self.query(
            QueryKey::item(Scope::UserProgress, user_id),
            self.state.users.get_progress(user_id),
        )
        .await
    }

    pub async fn create_user(&self, user: User) -> FacadeResult<Record<User>> {
        self.mutate(
            "create_user",
            vec![Invalidate::Key(QueryKey::all(Scope::Users))],
            self.state.users.create(user),
        )
        .await
    }

    pub async fn update_user(&self, user_id: Id, patch: UserPatch) -> FacadeResult<Record<User>> {
        self.mutate(
            "update_user",
            user_changed(user_id),
            self.state.users.update(user_id, patch),
        )
        .await
    }

    pub async fn update_account(
        &self,
        user_id: Id,
        patch: AccountPatch,
    ) -> FacadeResult<Record<User>> {
        self.mutate(
            "update_account",
            user_changed(user_id),
            self.state.users.update_account(user_id, patch),
        )
        .await
    }

    pub async fn update_profile(
        &self,
        user_id: Id,
        patch: ProfilePatch,
    ) -> FacadeResult<Record<User>> {
        self.mutate(
            "update_profile",
            user_changed(user_id),
            self.state.users.update_profile(user_id, patch),
        )
        .await
    }

    pub async fn update_progress(
        &self,
        user_id: Id,
        patch: ProgressPatch,
    ) -> FacadeResult<Progress> {
        self.mutate(
            "update_progress",
            user_changed(user_id),
            self.state.users.update_progress(user_id, patch),
        )
        .await
    }

    pub async fn delete_user(&self, user_id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_user",
            user_changed(user_id),
            self.state.users.delete(user_id),
        )
        .await
    }
}
