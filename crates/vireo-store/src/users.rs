// User repository

use sqlx::MySqlPool;
use vireo_commons::models::{User, UserDraft};

/// Internal credential projection used only by the login and
/// password-change flows. Never serialized.
#[derive(Debug, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: u64,
    pub password_hash: String,
}

/// Repository for user rows and the follow relation.
#[derive(Clone)]
pub struct UserRepo {
    pool: MySqlPool,
}

impl UserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new user; the password hash is produced by the caller.
    pub async fn create(&self, draft: &UserDraft, password_hash: &str) -> sqlx::Result<u64> {
        let result =
            sqlx::query("INSERT INTO users (name, nick, email, password_hash) VALUES (?, ?, ?, ?)")
                .bind(&draft.name)
                .bind(&draft.nick)
                .bind(&draft.email)
                .bind(password_hash)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_id())
    }

    /// Substring match against name or nick. An empty term matches everyone.
    pub async fn search(&self, term: &str) -> sqlx::Result<Vec<User>> {
        let pattern = like_pattern(term);

        sqlx::query_as::<_, User>(
            "SELECT id, name, nick, email, created_at FROM users \
             WHERE name LIKE ? OR nick LIKE ?",
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: u64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, nick, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Overwrite name, nick, and email. The password column is untouched.
    pub async fn update(&self, id: u64, draft: &UserDraft) -> sqlx::Result<()> {
        sqlx::query("UPDATE users SET name = ?, nick = ?, email = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(&draft.nick)
            .bind(&draft.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete by id; deleting an absent row is not an error.
    pub async fn delete(&self, id: u64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Credential lookup for the login flow.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> sqlx::Result<Option<UserCredentials>> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// Record that `follower_id` follows `user_id`. A duplicate pair is
    /// silently ignored, so the operation is idempotent.
    pub async fn follow(&self, user_id: u64, follower_id: u64) -> sqlx::Result<()> {
        sqlx::query("INSERT IGNORE INTO followers (user_id, follower_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(follower_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove the follow edge; removing an absent pair is not an error.
    pub async fn unfollow(&self, user_id: u64, follower_id: u64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM followers WHERE user_id = ? AND follower_id = ?")
            .bind(user_id)
            .bind(follower_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Everyone following the given user.
    pub async fn list_followers(&self, user_id: u64) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name, u.nick, u.email, u.created_at FROM users u \
             INNER JOIN followers f ON u.id = f.follower_id WHERE f.user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Everyone the given user follows.
    pub async fn list_following(&self, user_id: u64) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.name, u.nick, u.email, u.created_at FROM users u \
             INNER JOIN followers f ON u.id = f.user_id WHERE f.follower_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Current password hash for the password-change flow.
    pub async fn find_password_hash(&self, id: u64) -> sqlx::Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn update_password(&self, id: u64, password_hash: &str) -> sqlx::Result<()> {
        sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Wrap a search term for a LIKE match. The term is passed through verbatim;
/// `%` and `_` keep their wildcard meaning.
fn like_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("ann"), "%ann%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_like_pattern_keeps_wildcards() {
        assert_eq!(like_pattern("a%b"), "%a%b%");
    }
}
