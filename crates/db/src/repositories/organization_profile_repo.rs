//! Repository for the `organization_profile` singleton.

use sqlx::PgPool;
use showrunner_core::types::DbId;

use crate::models::organization_profile::{OrganizationProfile, UpdateOrganizationProfile};

const COLUMNS: &str = "name, description, logo_url, website, email, phone, address, \
                       updated_by, updated_at";

pub struct OrganizationProfileRepo;

impl OrganizationProfileRepo {
    /// Fetch the profile, or `None` if it has never been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<OrganizationProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organization_profile WHERE id = 1");
        sqlx::query_as::<_, OrganizationProfile>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert or partially update the profile row.
    ///
    /// On first save absent fields become empty strings; afterwards absent
    /// fields keep their stored value.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpdateOrganizationProfile,
        updated_by: Option<DbId>,
    ) -> Result<OrganizationProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO organization_profile \
                (id, name, description, logo_url, website, email, phone, address, updated_by) \
             VALUES (1, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), \
                     COALESCE($5, ''), COALESCE($6, ''), COALESCE($7, ''), $8) \
             ON CONFLICT (id) DO UPDATE \
             SET name = COALESCE($1, organization_profile.name), \
                 description = COALESCE($2, organization_profile.description), \
                 logo_url = COALESCE($3, organization_profile.logo_url), \
                 website = COALESCE($4, organization_profile.website), \
                 email = COALESCE($5, organization_profile.email), \
                 phone = COALESCE($6, organization_profile.phone), \
                 address = COALESCE($7, organization_profile.address), \
                 updated_by = EXCLUDED.updated_by \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OrganizationProfile>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.logo_url)
            .bind(&input.website)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }
}
