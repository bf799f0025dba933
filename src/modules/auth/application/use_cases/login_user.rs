use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};

use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::user::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::user::domain::entities::UserInfo;

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, LoginRequestError> {
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password)
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// One answer for both unknown email and wrong password: a caller must
    /// not be able to probe which accounts exist.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserRepositoryError> for LoginError {
    fn from(e: UserRepositoryError) -> Self {
        LoginError::QueryError(e.to_string())
    }
}

// ====================== Login Response ==========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
}

// ====================== Use case ================================

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    user_repo: R,
    hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        user_repo: R,
        hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            token_provider,
        }
    }

    /// Returns the matched user without credential fields, or `None` when
    /// either the email is unknown or the password does not match. Never
    /// errors on a mismatch - only `execute` turns absence into a rejection.
    async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserInfo>, LoginError> {
        let Some(credentials) = self.user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let matched = self
            .hasher
            .verify_password(password, &credentials.password)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if matched {
            Ok(Some(credentials.into_info()))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl<R> ILoginUseCase for LoginUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let user = self
            .validate_user(request.email(), request.password())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        let access_token = self
            .token_provider
            .issue_token(user.id, &user.username, &user.role)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            access_token,
            username: user.username,
        })
    }
}
