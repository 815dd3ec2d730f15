//! MySQL implementation of the CompanyRepository trait.

use async_trait::async_trait;
use chrono::Utc;

use pb_core::domain::entities::{Company, NewCompany};
use pb_core::repositories::CompanyRepository;
use pb_core::DomainError;
use pb_shared::generate_id;

use super::map_sqlx_error;
use super::rows::CompanyRow;
use crate::database::MySqlTx;

/// MySQL implementation of CompanyRepository
pub struct MySqlCompanyRepository;

impl MySqlCompanyRepository {
    /// Create a new MySQL company repository
    pub fn new() -> Self {
        Self
    }
}

impl Default for MySqlCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MySqlCompanyRepository {
    type Tx = MySqlTx;

    async fn create(&self, tx: &mut MySqlTx, company: NewCompany) -> Result<Company, DomainError> {
        let id = generate_id();
        let now = Utc::now();

        let query = r#"
            INSERT INTO companies
                (id, corporate_name, representative_name, phone_number, postal_code, address,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&company.corporate_name)
            .bind(&company.representative_name)
            .bind(&company.phone_number)
            .bind(&company.postal_code)
            .bind(&company.address)
            .bind(now)
            .bind(now)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Company {
            id,
            corporate_name: company.corporate_name,
            representative_name: company.representative_name,
            phone_number: company.phone_number,
            postal_code: company.postal_code,
            address: company.address,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, tx: &mut MySqlTx, id: &str) -> Result<Option<Company>, DomainError> {
        let query = r#"
            SELECT id, corporate_name, representative_name, phone_number, postal_code, address,
                   created_at, updated_at
            FROM companies
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query_as::<_, CompanyRow>(query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Company::from))
    }
}
