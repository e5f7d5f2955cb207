//! Startup seeding of the protected `admin` account.

use anyhow::Context;
use showrunner_core::users::{BOOTSTRAP_ADMIN_USERNAME, LANGUAGE_EN};
use showrunner_db::models::user::CreateUser;
use showrunner_db::repositories::UserRepo;
use showrunner_db::DbPool;

use crate::auth::password::{hash_password_blocking, validate_password_strength};

/// Create the `admin` account if it does not exist yet.
///
/// Does nothing when `password` is `None` or the account already exists;
/// an existing admin's password is never overwritten. Returns whether an
/// account was created.
pub async fn ensure_admin(pool: &DbPool, password: Option<&str>) -> anyhow::Result<bool> {
    let Some(password) = password else {
        return Ok(false);
    };

    if UserRepo::find_by_username(pool, BOOTSTRAP_ADMIN_USERNAME)
        .await
        .context("looking up bootstrap admin")?
        .is_some()
    {
        return Ok(false);
    }

    validate_password_strength(password).map_err(anyhow::Error::msg)?;
    let password_hash = hash_password_blocking(password.to_string())
        .await
        .context("hashing bootstrap admin password")?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: BOOTSTRAP_ADMIN_USERNAME.to_string(),
            password_hash,
            display_name: "Administrator".to_string(),
            is_admin: true,
            language_preference: LANGUAGE_EN.to_string(),
        },
    )
    .await
    .context("creating bootstrap admin")?;

    tracing::info!(user_id = user.id, "Bootstrap admin account created");
    Ok(true)
}
