use crate::modules::identity::core::password::hash_password;
use crate::modules::identity::core::user::User;
use crate::shared::core::access::Role;
use crate::tests::fixtures::time::utc;

pub const PASSWORD: &str = "aufzug-2026";

/// An active Monteur whose password is [`PASSWORD`].
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            user: User {
                id: "user-0001".into(),
                email: "monteur@lift-service.de".into(),
                name: "Max Monteur".into(),
                role: Role::Monteur,
                active: true,
                password_hash: hash_password(PASSWORD),
                created_at: utc("2026-10-01 08:00"),
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.user.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = name.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.user.role = role;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.user.active = false;
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}
