//! Database connection and email tracking.

use chrono::Utc;
use sqlx::{Connection, PgConnection};

use crate::{Config, Result, UserDetails};

/// Open one short-lived database connection.
///
/// The password comes from Secrets Manager; everything else from config.
/// The connection is scoped to a single invocation and closes on drop, so a
/// failure partway through never leaks it.
pub async fn connect(config: &Config, password: &str) -> Result<PgConnection> {
    let database_url = format!(
        "postgres://{}:{}@{}:5432/{}",
        config.db_user, password, config.db_host, config.db_name
    );

    let conn = PgConnection::connect(&database_url).await?;

    Ok(conn)
}

/// Close the connection gracefully once the invocation is done with it.
pub async fn close(conn: PgConnection) -> Result<()> {
    conn.close().await?;

    Ok(())
}

/// Insert one audit row for a sent verification email.
pub async fn track_email(conn: &mut PgConnection, user: &UserDetails, link: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO email_tracking (email, verification_link, user_id, token, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&user.email)
    .bind(link)
    .bind(&user.id)
    .bind(&user.token)
    .bind(Utc::now())
    .execute(conn)
    .await?;

    Ok(())
}
