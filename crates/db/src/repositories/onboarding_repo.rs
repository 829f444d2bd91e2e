//! Transactional creation of a user and its client profile.

use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};
use crate::models::user::{CreateUser, User};
use crate::repositories::{ClientRepo, UserRepo};

pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Create the user and client rows atomically.
    ///
    /// Either both rows exist afterwards or neither does. A duplicate email
    /// surfaces as a unique violation on `uq_users_email`; a unique client
    /// identifier collision as one on `uq_clients_unique_client_id`.
    pub async fn register(
        pool: &PgPool,
        user: &CreateUser,
        client: &CreateClient,
    ) -> Result<(User, Client), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = UserRepo::create(&mut *tx, user).await?;
        let client = ClientRepo::create(&mut *tx, user.id, client).await?;

        tx.commit().await?;
        Ok((user, client))
    }
}
