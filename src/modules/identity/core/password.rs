// Salted SHA-256 password hashes, stored as `salt$hex(sha256(salt || password))`.

use rand::{Rng, distributions::Alphanumeric, thread_rng};
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

pub fn hash_password(password: &str) -> String {
    let salt: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect();
    format!("{salt}${}", digest(&salt, password))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    let actual = digest(salt, password);
    // Constant time.
    actual.len() == expected.len()
        && actual
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod password_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_verify_the_password_it_hashed() {
        let stored = hash_password("aufzug-2026");
        assert!(verify_password("aufzug-2026", &stored));
        assert!(!verify_password("aufzug-2027", &stored));
    }

    #[rstest]
    fn it_should_salt_every_hash() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[rstest]
    #[case("")]
    #[case("no-separator")]
    #[case("salt$deadbeef")]
    fn it_should_refuse_malformed_or_foreign_hashes(#[case] stored: &str) {
        assert!(!verify_password("secret", stored));
    }
}
