use pawstay_core::config::{AuthMethod, Settings};
use pawstay_db::{
    db::{connection::DbConnection, query::user},
    model::user::{NewUser, User},
};

use crate::error::{ServiceError, ServiceResult};

/// Get the user configured in settings for single user authentication.
///
/// If it doesn't exist, insert it into the database.
///
/// ## Errors
///
/// Returns an error if the user cannot be created or retrieved from the database.
#[tracing::instrument(skip(conn, config))]
async fn authenticate_single_user(
    conn: &mut DbConnection<'_>,
    config: &Settings,
) -> ServiceResult<User> {
    tracing::debug!("Authenticating single user");

    let single_user_config =
        config
            .auth
            .single_user
            .as_ref()
            .ok_or(ServiceError::InvalidConfiguration(
                "Single user config is missing".to_string(),
            ))?;

    if let Some(existing) = user::by_email(conn, &single_user_config.email).await? {
        tracing::trace!(user_id = existing.id, "Single user already exists");
        return Ok(existing);
    }

    let created = user::get_or_create(
        conn,
        &NewUser {
            email: &single_user_config.email,
            name: &single_user_config.name,
        },
    )
    .await?;

    tracing::info!(user_id = created.id, user_email = %created.email, "Single user created");

    Ok(created)
}

/// ## Summary
/// Trusts an upstream proxy to have authenticated the caller and to pass their
/// email in the configured header. Unknown emails get a user row on first sight.
///
/// ## Errors
/// Returns `NotAuthenticated` when the header is missing or empty, and
/// `InvalidConfiguration` when proxy settings are absent.
#[tracing::instrument(skip(req, conn, config))]
async fn authenticate_proxy(
    req: &salvo::Request,
    conn: &mut DbConnection<'_>,
    config: &Settings,
) -> ServiceResult<User> {
    let proxy_config = config
        .auth
        .proxy
        .as_ref()
        .ok_or(ServiceError::InvalidConfiguration(
            "Proxy auth config is missing".to_string(),
        ))?;

    let email = req
        .header::<String>(proxy_config.header.as_str())
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .ok_or(ServiceError::NotAuthenticated)?;

    let owner = user::get_or_create(
        conn,
        &NewUser {
            email: &email,
            name: &email,
        },
    )
    .await?;

    tracing::debug!(user_id = owner.id, "Proxy user resolved");

    Ok(owner)
}

/// ## Summary
/// Authenticate a user based on the configured authentication method.
///
/// ## Errors
/// Returns an error if authentication fails.
#[tracing::instrument(skip(req, conn, config))]
pub async fn authenticate(
    req: &salvo::Request,
    conn: &mut DbConnection<'_>,
    config: &Settings,
) -> ServiceResult<User> {
    tracing::trace!(auth_method = ?config.auth.method, "Authenticating request");

    match config.auth.method {
        AuthMethod::SingleUser => authenticate_single_user(conn, config).await,
        AuthMethod::Proxy => authenticate_proxy(req, conn, config).await,
    }
}
