//! Integration tests for soft-delete behaviour across reference entities.
//!
//! Verifies that:
//! - Soft-deleted rows are hidden from `find_by_id` and `list`
//! - Rows stay retrievable through `find_by_id_including_deleted`
//! - Soft-delete is idempotent (second call returns `false`)
//! - Updates never touch a soft-deleted row

use sqlx::PgPool;
use showrunner_core::staff::StaffMember;
use showrunner_db::models::city::{CreateCity, UpdateCity};
use showrunner_db::models::company::CreateCompany;
use showrunner_db::models::qr_code::CreateQrCode;
use showrunner_db::repositories::{CityRepo, CompanyRepo, QrCodeRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_city(name: &str) -> CreateCity {
    CreateCity {
        name: name.to_string(),
        region: None,
    }
}

fn new_company(name: &str) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        city: Some("Taipei".to_string()),
        description: None,
        file_links: vec![],
        image_urls: vec!["https://cdn.example.com/a.png".to_string()],
        staff: vec![StaffMember {
            name: "Lin".to_string(),
            role: vec!["Producer".to_string()],
            ..Default::default()
        }],
    }
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides entity from find_by_id and list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_city(pool: PgPool) {
    let city = CityRepo::create(&pool, &new_city("Kaohsiung"), None)
        .await
        .unwrap();
    assert_eq!(city.region, "", "absent optional text defaults to empty");

    let before = CityRepo::list(&pool).await.unwrap();
    assert!(before.iter().any(|c| c.id == city.id));

    assert!(CityRepo::soft_delete(&pool, city.id).await.unwrap());

    assert!(CityRepo::find_by_id(&pool, city.id).await.unwrap().is_none());
    let after = CityRepo::list(&pool).await.unwrap();
    assert!(!after.iter().any(|c| c.id == city.id));
}

// ---------------------------------------------------------------------------
// Test: soft_delete is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_twice_returns_false(pool: PgPool) {
    let city = CityRepo::create(&pool, &new_city("Tainan"), None)
        .await
        .unwrap();

    assert!(CityRepo::soft_delete(&pool, city.id).await.unwrap());
    assert!(
        !CityRepo::soft_delete(&pool, city.id).await.unwrap(),
        "second soft_delete should report no change"
    );
}

// ---------------------------------------------------------------------------
// Test: update skips soft-deleted rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_ignores_deleted_row(pool: PgPool) {
    let city = CityRepo::create(&pool, &new_city("Hsinchu"), None)
        .await
        .unwrap();
    CityRepo::soft_delete(&pool, city.id).await.unwrap();

    let update = UpdateCity {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = CityRepo::update(&pool, city.id, &update).await.unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Test: deleted rows remain retrievable for audit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_retrievable_after_soft_delete(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Blue Note"), None)
        .await
        .unwrap();
    assert_eq!(company.staff.0.len(), 1);
    assert_eq!(company.staff.0[0].role, vec!["Producer"]);

    CompanyRepo::soft_delete(&pool, company.id).await.unwrap();

    let found = CompanyRepo::find_by_id_including_deleted(&pool, company.id)
        .await
        .unwrap()
        .expect("deleted company should still be retrievable");
    assert!(found.is_deleted);
    assert_eq!(found.name, "Blue Note");

    let listed = CompanyRepo::list(&pool).await.unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_qr_code_retrievable_after_soft_delete(pool: PgPool) {
    let input = CreateQrCode {
        name: "Lobby poster".to_string(),
        image_url: None,
        target_url: Some("https://example.com/tickets".to_string()),
        notes: None,
    };
    let qr = QrCodeRepo::create(&pool, &input, None).await.unwrap();
    QrCodeRepo::soft_delete(&pool, qr.id).await.unwrap();

    let found = QrCodeRepo::find_by_id_including_deleted(&pool, qr.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.is_deleted);
    assert_eq!(found.target_url, "https://example.com/tickets");
}

// ---------------------------------------------------------------------------
// Test: list sorts case-insensitively by name
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_sorted_by_name(pool: PgPool) {
    for name in ["taichung", "Chiayi", "Keelung"] {
        CityRepo::create(&pool, &new_city(name), None).await.unwrap();
    }
    let names: Vec<String> = CityRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Chiayi", "Keelung", "taichung"]);
}
