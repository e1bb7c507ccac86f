use crate::shared::core::access::Role;
use chrono::{DateTime, Duration, Utc};

pub const SESSION_COOKIE: &str = "session";
const ATTRIBUTES: &str = "HttpOnly; Path=/; SameSite=Lax";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user_id: &str, role: Role, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            role,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn set_cookie(&self) -> String {
        let max_age = (self.expires_at - self.created_at).num_seconds().max(0);
        let id = &self.id;
        format!("{SESSION_COOKIE}={id}; {ATTRIBUTES}; Max-Age={max_age}")
    }
}

pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; {ATTRIBUTES}; Max-Age=0")
}

/// Session id from a `Cookie` header value.
pub fn session_id_from_cookies(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_expire_after_its_ttl() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 8, 0, 0).unwrap();
        let session = Session::start("user-0001", Role::Monteur, now, Duration::hours(12));
        assert!(!session.is_expired(now + Duration::hours(11)));
        assert!(session.is_expired(now + Duration::hours(12)));
        assert!(session.set_cookie().ends_with("Max-Age=43200"));
    }

    #[rstest]
    #[case("session=abc", Some("abc"))]
    #[case("theme=dark; session=abc; lang=de", Some("abc"))]
    #[case("session=", None)]
    #[case("sessionid=abc", None)]
    #[case("", None)]
    fn it_should_find_the_session_cookie(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(session_id_from_cookies(header), expected);
    }
}
