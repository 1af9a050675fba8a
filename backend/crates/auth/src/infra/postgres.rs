//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::{Account, PendingOtp};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email, otp_code::OtpCode,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

const SELECT_ACCOUNT: &str = r#"
    SELECT
        account_id,
        username,
        email,
        password_hash,
        is_verified,
        is_oauth,
        otp_code,
        otp_expires_at,
        avatar_url,
        created_at,
        updated_at
    FROM accounts
"#;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                username,
                email,
                password_hash,
                is_verified,
                is_oauth,
                otp_code,
                otp_expires_at,
                avatar_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.is_verified)
        .bind(account.is_oauth)
        .bind(account.pending_otp.as_ref().map(|p| p.code.as_str()))
        .bind(account.pending_otp.as_ref().map(|p| p.expires_at))
        .bind(account.avatar_url.as_deref())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE email = $1"))
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE accounts SET
                username = $2,
                email = $3,
                password_hash = $4,
                is_verified = $5,
                otp_code = $6,
                otp_expires_at = $7,
                avatar_url = $8,
                updated_at = $9
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.is_verified)
        .bind(account.pending_otp.as_ref().map(|p| p.code.as_str()))
        .bind(account.pending_otp.as_ref().map(|p| p.expires_at))
        .bind(account.avatar_url.as_deref())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(AuthError::AccountNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    is_verified: bool,
    is_oauth: bool,
    otp_code: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        // A CHECK constraint keeps these two columns in lockstep
        let pending_otp = match (self.otp_code, self.otp_expires_at) {
            (Some(code), Some(expires_at)) => Some(PendingOtp {
                code: OtpCode::from_db(code),
                expires_at,
            }),
            (None, None) => None,
            _ => {
                return Err(AuthError::Internal(
                    "OTP columns out of sync".to_string(),
                ));
            }
        };

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            username: Username::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash,
            is_verified: self.is_verified,
            is_oauth: self.is_oauth,
            pending_otp,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
