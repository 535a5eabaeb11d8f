use sha2::{Digest, Sha256};

/// SHA-256 digest of a stored secret. Unsalted: this mirrors the demo's
/// illustrative credential handling, not production practice.
pub type SecretDigest = [u8; 32];

pub fn hash_secret(secret: &str) -> SecretDigest {
    Sha256::digest(secret.as_bytes()).into()
}

/// Exact comparison, used for login passwords.
pub fn matches_exact(candidate: &str, digest: &SecretDigest) -> bool {
    hash_secret(candidate) == *digest
}

/// Trimmed, lower-cased comparison, used for security answers. Note the
/// asymmetry with [`matches_exact`]: the stored digest is of the raw answer,
/// only the candidate is normalized.
pub fn matches_normalized(candidate: &str, digest: &SecretDigest) -> bool {
    hash_secret(&candidate.trim().to_lowercase()) == *digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_secret("admin123"), hash_secret("admin123"));
        assert_ne!(hash_secret("admin123"), hash_secret("admin124"));
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let digest = hash_secret("Secret");
        assert!(matches_exact("Secret", &digest));
        assert!(!matches_exact("secret", &digest));
        assert!(!matches_exact(" Secret ", &digest));
    }

    #[test]
    fn normalized_match_trims_and_lowercases_the_candidate() {
        let digest = hash_secret("pizza");
        assert!(matches_normalized("pizza", &digest));
        assert!(matches_normalized("  PIZZA  ", &digest));
        assert!(!matches_normalized("pasta", &digest));
    }

    #[test]
    fn normalized_match_leaves_the_stored_digest_alone() {
        // Answers stored with capitals can never match; known sharp edge.
        let digest = hash_secret("Pizza");
        assert!(!matches_normalized("Pizza", &digest));
    }
}
