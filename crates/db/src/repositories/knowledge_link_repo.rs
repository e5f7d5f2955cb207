//! Repository for the `knowledge_links` table.
//!
//! Links are global: a section key maps to an ordered set of knowledge items
//! shared by every production.

use std::collections::BTreeMap;

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::knowledge_link::KnowledgeLink;

const COLUMNS: &str = "id, section, knowledge_item_id, created_by, created_at";

pub struct KnowledgeLinkRepo;

impl KnowledgeLinkRepo {
    /// Link an item to a section.
    ///
    /// Returns `None` when the pair is already linked; the existing link is
    /// left untouched.
    pub async fn add(
        pool: &PgPool,
        section: &str,
        knowledge_item_id: DbId,
        created_by: Option<DbId>,
    ) -> Result<Option<KnowledgeLink>, sqlx::Error> {
        let query = format!(
            "INSERT INTO knowledge_links (section, knowledge_item_id, created_by) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_knowledge_links_section_item DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeLink>(&query)
            .bind(section)
            .bind(knowledge_item_id)
            .bind(created_by)
            .fetch_optional(pool)
            .await
    }

    /// Remove a link. Removing a link that does not exist is a no-op.
    pub async fn remove(
        pool: &PgPool,
        section: &str,
        knowledge_item_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM knowledge_links WHERE section = $1 AND knowledge_item_id = $2",
        )
        .bind(section)
        .bind(knowledge_item_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every link row in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<KnowledgeLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_links ORDER BY id");
        sqlx::query_as::<_, KnowledgeLink>(&query)
            .fetch_all(pool)
            .await
    }

    /// Links grouped by section, item ids in insertion order.
    pub async fn list_grouped(pool: &PgPool) -> Result<BTreeMap<String, Vec<DbId>>, sqlx::Error> {
        let mut grouped: BTreeMap<String, Vec<DbId>> = BTreeMap::new();
        for link in Self::list(pool).await? {
            grouped
                .entry(link.section)
                .or_default()
                .push(link.knowledge_item_id);
        }
        Ok(grouped)
    }
}
