use tracing::info;

use super::domain::{RegistrationRequest, SecurityAnswers, SessionIdentity, UserRecord};
use super::hashing;
use super::store::CredentialStore;

/// Recoverable, user-facing credential failures. Every variant is terminal for
/// the call that produced it and clears on retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email not found")]
    UnknownEmail,
    #[error("security answers do not match")]
    SecurityAnswerMismatch,
}

fn required(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.is_empty() {
        Err(AuthError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Create an account. Duplicate emails win over every other validation, then
/// the required-field sweep, then the confirmation check. Name and date of
/// birth are accepted as given and never validated.
pub fn register(store: &mut CredentialStore, request: RegistrationRequest) -> Result<(), AuthError> {
    if store.contains(&request.email) {
        return Err(AuthError::DuplicateEmail);
    }
    required(&request.email, "email")?;
    required(&request.password, "password")?;
    required(&request.confirm_password, "confirm password")?;
    required(&request.favorite_food, "favorite food")?;
    required(&request.pet_name, "pet name")?;
    if request.password != request.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }

    let record = UserRecord {
        email: request.email,
        name: request.name,
        password: hashing::hash_secret(&request.password),
        role: request.role,
        security: SecurityAnswers {
            food: hashing::hash_secret(&request.favorite_food),
            pet: hashing::hash_secret(&request.pet_name),
        },
        date_of_birth: request.date_of_birth,
    };
    info!(email = %record.email, role = record.role.label(), "account registered");
    store.insert(record);
    Ok(())
}

/// Exact-match password check: no trimming, no case folding. Unknown emails
/// and wrong passwords are indistinguishable to the caller.
pub fn login(
    store: &CredentialStore,
    email: &str,
    password: &str,
) -> Result<SessionIdentity, AuthError> {
    let record = store.get(email).ok_or(AuthError::InvalidCredentials)?;
    if !hashing::matches_exact(password, &record.password) {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(SessionIdentity {
        email: record.email.clone(),
        name: record.name.clone(),
        role: record.role,
    })
}

/// Replace the password digest after both security answers pass the
/// normalized check.
pub fn reset_password(
    store: &mut CredentialStore,
    email: &str,
    food_answer: &str,
    pet_answer: &str,
    new_password: &str,
) -> Result<(), AuthError> {
    let record = store.get_mut(email).ok_or(AuthError::UnknownEmail)?;
    if !hashing::matches_normalized(food_answer, &record.security.food)
        || !hashing::matches_normalized(pet_answer, &record.security.pet)
    {
        return Err(AuthError::SecurityAnswerMismatch);
    }
    record.password = hashing::hash_secret(new_password);
    info!(%email, "password reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::Role;

    fn request(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            name: "Casey Buyer".to_string(),
            email: email.to_string(),
            password: "hunter2!".to_string(),
            confirm_password: "hunter2!".to_string(),
            role: Role::Buyer,
            date_of_birth: None,
            favorite_food: "pizza".to_string(),
            pet_name: "rex".to_string(),
        }
    }

    #[test]
    fn duplicate_email_wins_over_other_validation() {
        let mut store = CredentialStore::seeded();
        let mut bad = request("admin@broker.com");
        bad.password.clear();
        assert_eq!(register(&mut store, bad), Err(AuthError::DuplicateEmail));
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let mut store = CredentialStore::empty();
        let mut missing = request("new@example.com");
        missing.favorite_food.clear();
        assert_eq!(
            register(&mut store, missing),
            Err(AuthError::MissingField("favorite food"))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut store = CredentialStore::empty();
        let mut mismatch = request("new@example.com");
        mismatch.confirm_password = "hunter3!".to_string();
        assert_eq!(
            register(&mut store, mismatch),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn login_is_exact_match_only() {
        let mut store = CredentialStore::empty();
        register(&mut store, request("casey@example.com")).expect("registers");

        let identity = login(&store, "casey@example.com", "hunter2!").expect("logs in");
        assert_eq!(identity.role, Role::Buyer);
        assert_eq!(
            login(&store, "casey@example.com", "HUNTER2!"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            login(&store, "nobody@example.com", "hunter2!"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn reset_requires_both_answers_and_swaps_the_password() {
        let mut store = CredentialStore::empty();
        register(&mut store, request("casey@example.com")).expect("registers");

        assert_eq!(
            reset_password(&mut store, "casey@example.com", "pizza", "fido", "newpass"),
            Err(AuthError::SecurityAnswerMismatch)
        );
        reset_password(&mut store, "casey@example.com", "  PIZZA ", "Rex", "newpass")
            .expect("normalized answers match");

        assert_eq!(
            login(&store, "casey@example.com", "hunter2!"),
            Err(AuthError::InvalidCredentials)
        );
        login(&store, "casey@example.com", "newpass").expect("new password works");
    }

    #[test]
    fn reset_for_unknown_email_is_distinct_from_bad_answers() {
        let mut store = CredentialStore::seeded();
        assert_eq!(
            reset_password(&mut store, "ghost@example.com", "none", "none", "x"),
            Err(AuthError::UnknownEmail)
        );
    }
}
