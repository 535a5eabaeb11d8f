use std::collections::BTreeMap;

use super::domain::{Role, SecurityAnswers, UserRecord};
use super::hashing;

/// In-memory account registry keyed by email. Email uniqueness is enforced by
/// [`super::service::register`], not here.
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: BTreeMap<String, UserRecord>,
}

impl CredentialStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store with the two demo accounts installed.
    pub fn seeded() -> Self {
        let mut store = Self::default();
        store.insert(UserRecord {
            email: "admin@broker.com".to_string(),
            name: "Admin".to_string(),
            password: hashing::hash_secret("admin123"),
            role: Role::Admin,
            security: SecurityAnswers {
                food: hashing::hash_secret("none"),
                pet: hashing::hash_secret("none"),
            },
            date_of_birth: None,
        });
        store.insert(UserRecord {
            email: "agent@broker.com".to_string(),
            name: "Agent".to_string(),
            password: hashing::hash_secret("password"),
            role: Role::Agent,
            security: SecurityAnswers {
                food: hashing::hash_secret("none"),
                pet: hashing::hash_secret("none"),
            },
            date_of_birth: None,
        });
        store
    }

    pub fn contains(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    pub fn get(&self, email: &str) -> Option<&UserRecord> {
        self.users.get(email)
    }

    pub(crate) fn get_mut(&mut self, email: &str) -> Option<&mut UserRecord> {
        self.users.get_mut(email)
    }

    pub(crate) fn insert(&mut self, record: UserRecord) {
        self.users.insert(record.email.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_the_two_demo_accounts() {
        let store = CredentialStore::seeded();
        assert_eq!(store.len(), 2);

        let admin = store.get("admin@broker.com").expect("admin seeded");
        assert_eq!(admin.role, Role::Admin);
        assert!(hashing::matches_exact("admin123", &admin.password));

        let agent = store.get("agent@broker.com").expect("agent seeded");
        assert_eq!(agent.role, Role::Agent);
        assert!(hashing::matches_exact("password", &agent.password));
        assert!(hashing::matches_normalized("None", &agent.security.pet));
    }
}
