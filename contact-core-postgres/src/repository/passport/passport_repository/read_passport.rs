use contact_core_api::ApiResult;
use contact_core_db::models::passport::PassportWithContact;
use crate::utils::decode_row;
use uuid::Uuid;

use super::repo_impl::{PassportRepositoryImpl, SELECT_PASSPORT_WITH_CONTACT};

impl PassportRepositoryImpl {
    pub(super) async fn read_passport_impl(
        repo: &PassportRepositoryImpl,
        contact_id: Uuid,
    ) -> ApiResult<Option<PassportWithContact>> {
        let query = format!("{SELECT_PASSPORT_WITH_CONTACT} WHERE p.contact_id = $1 LIMIT 1");
        let row = sqlx::query(&query)
            .bind(contact_id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(decode_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::contact::contact_repository::test_utils::create_test_contact;
    use crate::repository::passport::passport_repository::test_utils::create_test_passport_fields;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use contact_core_db::repository::passport_repository::PassportRepository;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_read_passport_carries_contact() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let contact_repo = &ctx.passport_repos().contact_repository;
        let passport_repo = &ctx.passport_repos().passport_repository;

        let contact = contact_repo.create(&create_test_contact()).await?;
        let fields = create_test_passport_fields();
        passport_repo.create_passport(contact.id, fields.clone()).await?;

        let loaded = passport_repo.read_passport(contact.id).await?.expect("exists");

        assert_eq!(loaded.passport.contact_id, contact.id);
        assert_eq!(loaded.passport.fields, fields);
        assert_eq!(loaded.contact, contact);

        Ok(())
    }

    #[tokio::test]
    async fn test_read_passport_missing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let contact_repo = &ctx.passport_repos().contact_repository;
        let passport_repo = &ctx.passport_repos().passport_repository;

        // Neither an unknown contact nor a contact without passport has one
        assert!(passport_repo.read_passport(Uuid::new_v4()).await?.is_none());

        let contact = contact_repo.create(&create_test_contact()).await?;
        assert!(passport_repo.read_passport(contact.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_read_passport_written_outside_the_repository() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let contact_repo = &ctx.passport_repos().contact_repository;
        let passport_repo = &ctx.passport_repos().passport_repository;

        let contact = contact_repo.create(&create_test_contact()).await?;
        let surname = "Ж".repeat(100);
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO passports (contact_id, surname, created_at, updated_at) VALUES ($1, $2, $3, $3)",
        )
        .bind(contact.id)
        .bind(&surname)
        .bind(now)
        .execute(ctx.pool())
        .await?;

        let loaded = passport_repo.read_passport(contact.id).await?.expect("inserted");
        assert_eq!(loaded.passport.fields.surname.as_deref(), Some(surname.as_str()));

        // one past the column bound never reaches the table
        let result = sqlx::query("UPDATE passports SET surname = $2 WHERE contact_id = $1")
            .bind(contact.id)
            .bind("Ж".repeat(101))
            .execute(ctx.pool())
            .await;
        assert!(result.is_err());

        Ok(())
    }
}
