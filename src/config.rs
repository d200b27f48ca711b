use anyhow::Context;
use chrono::Duration;
use std::{env, str::FromStr};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub stripe_api_url: String,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parsed("PORT", 3002)?,
            frontend_url: optional("FRONTEND_URL", "http://localhost:3000"),
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl: Duration::hours(parsed("JWT_TTL_HOURS", 24)?),
            stripe_api_url: optional("STRIPE_API_URL", "https://api.stripe.com"),
            stripe_secret_key: required("STRIPE_SECRET_KEY")?,
            stripe_webhook_secret: required("STRIPE_WEBHOOK_SECRET")?,
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn parsed<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} is not valid: {value:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_are_applied() {
        env::remove_var("PORT");
        env::remove_var("JWT_TTL_HOURS");

        assert_eq!(parsed("PORT", 3002u16).unwrap(), 3002);
        assert_eq!(parsed("JWT_TTL_HOURS", 24i64).unwrap(), 24);
    }

    #[test]
    #[serial]
    fn unparsable_number_names_the_variable() {
        env::set_var("PORT", "not-a-port");

        let error = parsed::<u16>("PORT", 3002).unwrap_err();
        env::remove_var("PORT");

        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn missing_required_value_is_reported() {
        env::remove_var("STRIPE_WEBHOOK_SECRET");

        let error = required("STRIPE_WEBHOOK_SECRET").unwrap_err();

        assert_eq!(error.to_string(), "STRIPE_WEBHOOK_SECRET is not set");
    }
}
