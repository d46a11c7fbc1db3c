// Publication repository

use sqlx::MySqlPool;
use vireo_commons::models::{Publication, PublicationDraft};

/// The caller's own publications plus everything by authors they follow.
/// The LEFT JOIN keeps authors with no follower rows in the result, so own
/// posts survive even when nobody follows the caller; DISTINCT collapses
/// the duplicates the join produces when several follower edges match.
const FEED_SQL: &str =
    "SELECT DISTINCT p.id, p.title, p.content, p.author_id, u.nick AS author_nick, \
            p.likes, p.created_at \
     FROM publications p \
     INNER JOIN users u ON u.id = p.author_id \
     LEFT JOIN followers f ON p.author_id = f.user_id \
     WHERE p.author_id = ? OR f.follower_id = ? \
     ORDER BY p.id DESC";

/// Saturating decrement; the engine evaluates the guard, so concurrent
/// unlikes cannot drive the count negative.
const DECREMENT_LIKES_SQL: &str =
    "UPDATE publications SET likes = CASE WHEN likes > 0 THEN likes - 1 ELSE 0 END WHERE id = ?";

/// Repository for publication rows and their like counters.
#[derive(Clone)]
pub struct PublicationRepo {
    pool: MySqlPool,
}

impl PublicationRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new publication; likes start at 0 at the storage layer.
    pub async fn create(&self, draft: &PublicationDraft, author_id: u64) -> sqlx::Result<u64> {
        let result =
            sqlx::query("INSERT INTO publications (title, content, author_id) VALUES (?, ?, ?)")
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(author_id)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_id())
    }

    pub async fn find_by_id(&self, id: u64) -> sqlx::Result<Option<Publication>> {
        sqlx::query_as::<_, Publication>(
            "SELECT p.id, p.title, p.content, p.author_id, u.nick AS author_nick, \
                    p.likes, p.created_at \
             FROM publications p \
             INNER JOIN users u ON u.id = p.author_id \
             WHERE p.id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// The caller's feed, newest first.
    pub async fn list_feed(&self, user_id: u64) -> sqlx::Result<Vec<Publication>> {
        sqlx::query_as::<_, Publication>(FEED_SQL)
            .bind(user_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// All publications by one author, newest first.
    pub async fn list_by_author(&self, author_id: u64) -> sqlx::Result<Vec<Publication>> {
        sqlx::query_as::<_, Publication>(
            "SELECT p.id, p.title, p.content, p.author_id, u.nick AS author_nick, \
                    p.likes, p.created_at \
             FROM publications p \
             INNER JOIN users u ON u.id = p.author_id \
             WHERE p.author_id = ? \
             ORDER BY p.id DESC",
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Overwrite title and content only.
    pub async fn update(&self, id: u64, draft: &PublicationDraft) -> sqlx::Result<()> {
        sqlx::query("UPDATE publications SET title = ?, content = ? WHERE id = ?")
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: u64) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM publications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Single atomic increment; no read-modify-write in the application.
    pub async fn increment_likes(&self, id: u64) -> sqlx::Result<()> {
        sqlx::query("UPDATE publications SET likes = likes + 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Single atomic decrement that never takes the count below zero.
    pub async fn decrement_likes(&self, id: u64) -> sqlx::Result<()> {
        sqlx::query(DECREMENT_LIKES_SQL)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_spans_own_and_followed_authors() {
        assert!(FEED_SQL.contains("LEFT JOIN followers f ON p.author_id = f.user_id"));
        assert!(FEED_SQL.contains("p.author_id = ? OR f.follower_id = ?"));
    }

    #[test]
    fn test_feed_selects_distinct_rows() {
        assert!(FEED_SQL.starts_with("SELECT DISTINCT"));
    }

    #[test]
    fn test_decrement_saturates_at_zero() {
        assert!(DECREMENT_LIKES_SQL.contains("CASE WHEN likes > 0 THEN likes - 1 ELSE 0 END"));
    }
}
