//! Mock authentication. Accepts any non-empty credentials, waits a fixed
//! delay and fabricates a session-only user record. Stand-in for a real
//! backend; nothing here verifies anything.

use crate::types::{User, UserRole};
use std::time::Duration;

pub const AUTH_DELAY: Duration = Duration::from_millis(1500);

const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}

pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::MissingFields);
    }
    validate_login(email, password)
}

pub async fn login(email: &str, password: &str) -> Result<User, AuthError> {
    validate_login(email, password)?;
    tokio::time::sleep(AUTH_DELAY).await;
    Ok(User {
        id: "1".to_string(),
        name: "Estudante STP".to_string(),
        email: email.trim().to_string(),
        avatar: Some(DEFAULT_AVATAR.to_string()),
        role: UserRole::Student,
    })
}

pub async fn signup(name: &str, email: &str, password: &str) -> Result<User, AuthError> {
    validate_signup(name, email, password)?;
    tokio::time::sleep(AUTH_DELAY).await;
    Ok(User {
        id: fabricated_user_id(),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        avatar: None,
        role: UserRole::Student,
    })
}

fn fabricated_user_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_with_password_is_rejected() {
        assert_eq!(
            validate_login("", "segredo"),
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            validate_login("   ", "segredo"),
            Err(AuthError::MissingFields)
        );
    }

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(
            validate_login("aluno@escola.st", ""),
            Err(AuthError::MissingFields)
        );
    }

    #[test]
    fn signup_requires_all_three_fields() {
        assert_eq!(
            validate_signup("", "aluno@escola.st", "segredo"),
            Err(AuthError::MissingFields)
        );
        assert!(validate_signup("Ana", "aluno@escola.st", "segredo").is_ok());
    }

    #[tokio::test]
    async fn login_with_missing_fields_creates_no_user() {
        let result = login("", "segredo").await;
        assert_eq!(result, Err(AuthError::MissingFields));
    }

    #[tokio::test(start_paused = true)]
    async fn login_fabricates_student_after_delay() {
        let user = login("aluno@escola.st", "segredo").await.expect("login");
        assert_eq!(user.email, "aluno@escola.st");
        assert_eq!(user.role, UserRole::Student);
        assert!(user.avatar.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn signup_uses_provided_name() {
        let user = signup("Ana Sousa", "ana@escola.st", "segredo")
            .await
            .expect("signup");
        assert_eq!(user.name, "Ana Sousa");
        assert!(user.avatar.is_none());
    }
}
