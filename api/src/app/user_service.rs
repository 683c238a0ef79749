//! User service
//!
//! Registration (email uniqueness) and login (credential verification).

use std::sync::Arc;

use crate::auth::{hash_password, verify_password};
use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Input for user registration
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Input for user login
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Register a new user.
    ///
    /// Uniqueness is an existence query, not a race-safe constraint. The
    /// role is stored as given; there is no whitelist at this layer.
    pub async fn register(&self, input: RegisterInput) -> Result<User, AppError> {
        if self.users.exists_by_email(&input.email).await? {
            return Err(DomainError::EmailExists.into());
        }

        let user = self
            .users
            .save(&NewUser {
                name: input.name,
                email: input.email,
                password_hash: hash_password(&input.password),
                role: input.role,
            })
            .await?;

        Ok(user)
    }

    /// Authenticate a user.
    ///
    /// Unknown email and wrong password both come back as
    /// `InvalidCredential`; the caller cannot tell them apart. Storage
    /// errors propagate unchanged.
    pub async fn login(&self, input: LoginInput) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(DomainError::InvalidCredential)?;

        if !verify_password(&input.password, &user.password_hash) {
            return Err(DomainError::InvalidCredential.into());
        }

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: &UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound.into())
    }

    /// List all users
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryUserRepository;

    fn create_service(users: InMemoryUserRepository) -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(users))
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            role: "customer".to_string(),
        }
    }

    #[tokio::test]
    async fn register_persists_user_with_hashed_password() {
        let service = create_service(InMemoryUserRepository::new());

        let user = service.register(register_input("alice@example.com")).await.unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, "customer");
        assert_ne!(user.password_hash, "secret123");
        assert!(!user.password_hash.contains("secret123"));
    }

    #[tokio::test]
    async fn register_keeps_arbitrary_roles() {
        let service = create_service(InMemoryUserRepository::new());

        let mut input = register_input("bob@example.com");
        input.role = "librarian".to_string();
        let user = service.register(input).await.unwrap();

        assert_eq!(user.role, "librarian");
        assert!(!user.is_admin());
        assert!(!user.is_customer());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let service = create_service(InMemoryUserRepository::new());

        service.register(register_input("alice@example.com")).await.unwrap();
        let err = service
            .register(register_input("alice@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::EmailExists)));
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_credentials() {
        let service = create_service(InMemoryUserRepository::new());
        let registered = service.register(register_input("alice@example.com")).await.unwrap();

        let user = service
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, registered.id);
    }

    #[tokio::test]
    async fn login_fails_with_wrong_password() {
        let service = create_service(InMemoryUserRepository::new());
        service.register(register_input("alice@example.com")).await.unwrap();

        let err = service
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::InvalidCredential)));
    }

    #[tokio::test]
    async fn login_fails_with_unknown_email() {
        let service = create_service(InMemoryUserRepository::new());

        let err = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::InvalidCredential)));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let service = create_service(InMemoryUserRepository::new());
        service.register(register_input("alice@example.com")).await.unwrap();

        let wrong_password = service
            .login(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn find_by_id_fails_for_unknown_user() {
        let service = create_service(InMemoryUserRepository::new());

        let err = service.find_by_id(&UserId::new()).await.unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::UserNotFound)));
    }

    #[tokio::test]
    async fn find_all_returns_registered_users() {
        let service = create_service(InMemoryUserRepository::new());
        service.register(register_input("alice@example.com")).await.unwrap();
        service.register(register_input("bob@example.com")).await.unwrap();

        let users = service.find_all().await.unwrap();

        assert_eq!(users.len(), 2);
    }
}
