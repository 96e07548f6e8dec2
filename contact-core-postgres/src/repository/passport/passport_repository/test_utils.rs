use contact_core_api::PassportRequest;
use contact_core_db::models::passport::PassportFields;
use heapless::String as HeaplessString;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Duration;
use uuid::Uuid;

pub fn create_test_passport_fields() -> PassportFields {
    PassportFields {
        passport_number: Some(HeaplessString::try_from("C01X00T47").unwrap()),
        surname: Some(HeaplessString::try_from("Mustermann").unwrap()),
        given_names: Some(HeaplessString::try_from("Erika").unwrap()),
        sex: Some(HeaplessString::try_from("F").unwrap()),
        date_of_birth: Some(HeaplessString::try_from("12.08.1964").unwrap()),
        place_of_birth: Some(HeaplessString::try_from("Berlin").unwrap()),
        nationality: Some(HeaplessString::try_from("Deutsch").unwrap()),
        date_of_issue: Some(HeaplessString::try_from("01.11.2017").unwrap()),
        date_of_expiration: Some(HeaplessString::try_from("31.10.2027").unwrap()),
        passport_type: Some(HeaplessString::try_from("P").unwrap()),
        issuing_country: Some(HeaplessString::try_from("D").unwrap()),
        authority: Some(HeaplessString::try_from("Stadt Köln").unwrap()),
        photo: Some(vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]),
    }
}

/// Same contact, a renewed passport
pub fn create_renewed_passport_fields() -> PassportFields {
    let mut fields = create_test_passport_fields();
    fields.passport_number = Some(HeaplessString::try_from("C02Y11U58").unwrap());
    fields.date_of_issue = Some(HeaplessString::try_from("01.11.2027").unwrap());
    fields.date_of_expiration = Some(HeaplessString::try_from("31.10.2037").unwrap());
    fields.photo = None;
    fields
}

/// Every text field filled to its character bound with multibyte text.
pub fn create_multibyte_passport_fields() -> PassportFields {
    fn text<const N: usize>(unit: &str, chars: usize) -> Option<HeaplessString<N>> {
        Some(HeaplessString::try_from(unit.repeat(chars).as_str()).unwrap())
    }

    PassportFields {
        passport_number: text("Ж", 50),
        surname: text("Ж", 100),
        given_names: text("Ω", 200),
        sex: text("女", 20),
        date_of_birth: text("٣", 50),
        place_of_birth: text("東", 100),
        nationality: text("ü", 100),
        date_of_issue: text("٣", 50),
        date_of_expiration: text("٣", 50),
        passport_type: text("𝔓", 20),
        issuing_country: text("Ελ", 50),
        authority: text("東京都公安委員会", 25),
        photo: None,
    }
}

pub fn create_test_passport_request(contact_id: Uuid) -> PassportRequest {
    PassportRequest {
        contact_id,
        passport_number: Some("X1234567".to_string()),
        surname: Some("Doe".to_string()),
        given_names: Some("Jane".to_string()),
        passport_type: Some("P".to_string()),
        ..Default::default()
    }
}

/// Rows stored for a contact, bypassing the repository
pub async fn count_passports(pool: &PgPool, contact_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM passports WHERE contact_id = $1")
        .bind(contact_id)
        .fetch_one(pool)
        .await
}

/// Opens a SERIALIZABLE transaction that rewrites the passport number of
/// `contact_id` and keeps the row lock until committed. Returns the
/// transaction and its backend pid.
pub async fn begin_competing_update(
    pool: &PgPool,
    contact_id: Uuid,
    passport_number: &str,
) -> Result<(Transaction<'static, Postgres>, i32), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(&mut *tx)
        .await?;
    let pid: i32 = sqlx::query_scalar("SELECT pg_backend_pid()")
        .fetch_one(&mut *tx)
        .await?;
    sqlx::query("SELECT passport_number FROM passports WHERE contact_id = $1")
        .bind(contact_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE passports SET passport_number = $2 WHERE contact_id = $1")
        .bind(contact_id)
        .bind(passport_number)
        .execute(&mut *tx)
        .await?;
    Ok((tx, pid))
}

/// Waits until some backend is blocked on a lock held by `pid`.
pub async fn wait_until_blocked_by(pool: &PgPool, pid: i32) -> Result<(), sqlx::Error> {
    for _ in 0..500 {
        let waiting: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pg_stat_activity WHERE $1 = ANY(pg_blocking_pids(pid))",
        )
        .bind(pid)
        .fetch_one(pool)
        .await?;
        if waiting > 0 {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no backend blocked on pid {pid}");
}
