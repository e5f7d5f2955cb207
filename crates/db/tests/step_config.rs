//! Integration tests for the step configuration singleton.

use sqlx::types::Json;
use sqlx::PgPool;
use showrunner_core::steps::{default_config, find_definition, StepConfigEntry, STEP_DEFINITIONS};
use showrunner_db::repositories::StepConfigRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_read_creates_default(pool: PgPool) {
    let config = StepConfigRepo::get_or_create(&pool).await.unwrap();
    assert_eq!(config.steps.0, default_config());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM step_configs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    // A second read must not insert another row.
    StepConfigRepo::get_or_create(&pool).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM step_configs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_definition_merged_on_read(pool: PgPool) {
    let stored: Vec<StepConfigEntry> = default_config()
        .into_iter()
        .filter(|e| e.step_key != "step16")
        .collect();
    sqlx::query("INSERT INTO step_configs (id, steps) VALUES (1, $1)")
        .bind(Json(&stored))
        .execute(&pool)
        .await
        .unwrap();

    let config = StepConfigRepo::get_reconciled(&pool).await.unwrap();
    let steps = &config.steps.0;
    assert_eq!(steps.len(), STEP_DEFINITIONS.len());

    let step16 = steps.iter().find(|e| e.step_key == "step16").unwrap();
    assert!(step16.enabled);
    assert_eq!(step16.order, find_definition("step16").unwrap().default_order);

    assert!(steps.windows(2).all(|w| w[0].order <= w[1].order));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_is_wholesale(pool: PgPool) {
    StepConfigRepo::get_or_create(&pool).await.unwrap();

    let replacement = vec![StepConfigEntry {
        step_key: "step3".to_string(),
        order: 0.5,
        enabled: false,
        requires_venue: true,
    }];
    let saved = StepConfigRepo::replace(&pool, &replacement, None)
        .await
        .unwrap();
    assert_eq!(saved.steps.0, replacement);

    // The merged view still shows every definition, with step3 first.
    let merged = StepConfigRepo::get_reconciled(&pool).await.unwrap();
    assert_eq!(merged.steps.0.len(), STEP_DEFINITIONS.len());
    assert_eq!(merged.steps.0[0].step_key, "step3");
    assert!(!merged.steps.0[0].enabled);
}
