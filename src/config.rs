use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Server
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default)]
    pub cors_allowed_origin: Option<String>,

    // Sessions
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,

    // Work-time rules
    #[serde(default = "default_overtime_threshold_minutes")]
    pub overtime_threshold_minutes: i64,
    #[serde(default = "default_correction_window_days")]
    pub correction_window_days: i64,

    // Premium pay, EUR per hour
    #[serde(default = "default_base_rate", with = "rust_decimal::serde::str")]
    pub pay_base_rate: Decimal,
    #[serde(default = "default_overtime_rate", with = "rust_decimal::serde::str")]
    pub pay_overtime_rate: Decimal,
    #[serde(default = "default_emergency_rate", with = "rust_decimal::serde::str")]
    pub pay_emergency_rate: Decimal,

    // Bootstrap admin, seeded at startup when both are set
    #[serde(default)]
    pub admin_email: Option<String>,
    #[serde(default)]
    pub admin_password: Option<String>,
    #[serde(default)]
    pub admin_name: Option<String>,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_session_ttl_hours() -> i64 {
    12
}

fn default_overtime_threshold_minutes() -> i64 {
    510
}

fn default_correction_window_days() -> i64 {
    3
}

fn default_base_rate() -> Decimal {
    dec!(18.00)
}

fn default_overtime_rate() -> Decimal {
    dec!(25.00)
}

fn default_emergency_rate() -> Decimal {
    dec!(35.00)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_server_host(),
            server_port: default_server_port(),
            cors_allowed_origin: None,
            session_ttl_hours: default_session_ttl_hours(),
            overtime_threshold_minutes: default_overtime_threshold_minutes(),
            correction_window_days: default_correction_window_days(),
            pay_base_rate: default_base_rate(),
            pay_overtime_rate: default_overtime_rate(),
            pay_emergency_rate: default_emergency_rate(),
            admin_email: None,
            admin_password: None,
            admin_name: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        // A missing .env file is fine; real environment variables still apply.
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_fill_every_field_with_its_default() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.overtime_threshold_minutes, 510);
        assert_eq!(config.correction_window_days, 3);
        assert_eq!(config.pay_base_rate, dec!(18.00));
        assert_eq!(config.admin_email, None);
    }

    #[rstest]
    fn it_should_read_overrides_from_variables() {
        let vars = vec![
            ("SERVER_PORT".to_string(), "9000".to_string()),
            ("OVERTIME_THRESHOLD_MINUTES".to_string(), "480".to_string()),
            ("PAY_EMERGENCY_RATE".to_string(), "40.50".to_string()),
            ("ADMIN_EMAIL".to_string(), "chef@aufzug.de".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.overtime_threshold_minutes, 480);
        assert_eq!(config.pay_emergency_rate, dec!(40.50));
        assert_eq!(config.admin_email.as_deref(), Some("chef@aufzug.de"));
    }
}
