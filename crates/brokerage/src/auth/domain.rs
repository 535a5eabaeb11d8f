use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::hashing::SecretDigest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Agent,
    Buyer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Agent => "Agent",
            Self::Buyer => "Buyer",
        }
    }
}

/// Hashed answers to the two password-recovery questions.
#[derive(Debug, Clone)]
pub struct SecurityAnswers {
    pub food: SecretDigest,
    pub pet: SecretDigest,
}

/// One account in the credential store. Never deleted; only the password
/// digest is replaced on reset.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub password: SecretDigest,
    pub role: Role,
    pub security: SecurityAnswers,
    pub date_of_birth: Option<NaiveDate>,
}

/// The currently authenticated identity. Zero or one per process run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Which auth form the caller is on. Pure UI pointer, no behavior hangs off
/// it beyond echoing it back to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    ResetPassword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub favorite_food: String,
    pub pet_name: String,
}
