use crate::config::Config;
use crate::modules::identity::core::password::hash_password;
use crate::modules::identity::core::ports::UserRepository;
use crate::modules::identity::core::user::{User, normalize_email, validate_registration};
use crate::shared::core::access::Role;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Creates the bootstrap admin from `ADMIN_EMAIL` / `ADMIN_PASSWORD` unless
/// that email is already registered. Returns the created user.
pub async fn seed_admin(
    users: &dyn UserRepository,
    config: &Config,
    now: DateTime<Utc>,
) -> anyhow::Result<Option<User>> {
    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        return Ok(None);
    };
    let email = normalize_email(email)?;
    let name = config
        .admin_name
        .clone()
        .unwrap_or_else(|| "Administrator".to_string());
    validate_registration(&name, password)?;

    if users.find_by_email(&email).await?.is_some() {
        tracing::debug!(%email, "admin already present");
        return Ok(None);
    }
    let admin = User {
        id: Uuid::now_v7().to_string(),
        email,
        name,
        role: Role::Admin,
        active: true,
        password_hash: hash_password(password),
        created_at: now,
    };
    users.insert(admin.clone()).await?;
    tracing::info!(email = %admin.email, "bootstrap admin created");
    Ok(Some(admin))
}

#[cfg(test)]
mod seed_admin_tests {
    use super::*;
    use crate::modules::identity::adapters::outbound::users_in_memory::InMemoryUserRepository;
    use crate::modules::identity::core::password::verify_password;
    use crate::tests::fixtures::time::utc;
    use rstest::rstest;

    fn config(email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            admin_email: email.map(str::to_string),
            admin_password: password.map(str::to_string),
            ..Config::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_seed_the_admin_once() {
        let users = InMemoryUserRepository::new();
        let config = config(Some("Chef@Aufzug.de"), Some("sehr-geheim"));
        let now = utc("2026-10-14 06:00");

        let admin = seed_admin(&users, &config, now).await.unwrap().unwrap();
        assert_eq!(admin.email, "chef@aufzug.de");
        assert_eq!(admin.role, Role::Admin);
        assert!(verify_password("sehr-geheim", &admin.password_hash));

        assert_eq!(seed_admin(&users, &config, now).await.unwrap(), None);
        assert_eq!(users.list().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_do_nothing_without_credentials() {
        let users = InMemoryUserRepository::new();
        let seeded = seed_admin(
            &users,
            &config(Some("chef@aufzug.de"), None),
            utc("2026-10-14 06:00"),
        )
        .await
        .unwrap();
        assert_eq!(seeded, None);
    }
}
