use crate::error::{Error, Result};
use crate::models::user::User;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. `email` must already be normalised.
    pub async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        let exists = sqlx::query_scalar::<_, Uuid>(r#"SELECT id FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict("Email already registered.".to_string()));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("Email already registered.".to_string())
            }
            other => Error::from(other),
        })?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }
}
