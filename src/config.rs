use crate::error::{config::ConfigError, AppError};

const DEFAULT_PRODUCT_KEYS_PATH: &str = "keys.json";
const DEFAULT_RESOLVED_GIVEAWAY_RETENTION: usize = 50;
const DEFAULT_RESOLVED_GIVEAWAY_TTL_HOURS: i64 = 24;

pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,

    /// Channel giveaway announcements are posted in. Giveaways cannot be started
    /// while this is unset.
    pub giveaway_channel_id: Option<u64>,
    pub log_channel_id: Option<u64>,

    pub product_keys_path: String,

    /// How many resolved giveaways are kept around for rerolls.
    pub resolved_giveaway_retention: usize,
    pub resolved_giveaway_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            guild_id: parse_discord_id("GUILD_ID", required("GUILD_ID")?)?,
            giveaway_channel_id: optional("GIVEAWAY_CHANNEL_ID")
                .map(|value| parse_discord_id("GIVEAWAY_CHANNEL_ID", value))
                .transpose()?,
            log_channel_id: optional("LOG_CHANNEL_ID")
                .map(|value| parse_discord_id("LOG_CHANNEL_ID", value))
                .transpose()?,
            product_keys_path: optional("PRODUCT_KEYS_PATH")
                .unwrap_or_else(|| DEFAULT_PRODUCT_KEYS_PATH.to_string()),
            resolved_giveaway_retention: optional("RESOLVED_GIVEAWAY_RETENTION")
                .map(|value| parse_positive("RESOLVED_GIVEAWAY_RETENTION", value))
                .transpose()?
                .unwrap_or(DEFAULT_RESOLVED_GIVEAWAY_RETENTION),
            resolved_giveaway_ttl_hours: optional("RESOLVED_GIVEAWAY_TTL_HOURS")
                .map(|value| parse_positive("RESOLVED_GIVEAWAY_TTL_HOURS", value))
                .transpose()?
                .map(|hours: usize| hours as i64)
                .unwrap_or(DEFAULT_RESOLVED_GIVEAWAY_TTL_HOURS),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating empty values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses a Discord snowflake, rejecting zero since serenity IDs are non-zero.
fn parse_discord_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse_positive(name: &str, value: String) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests parsing a valid Discord ID.
    ///
    /// Expected: Ok with the parsed snowflake
    #[test]
    fn parses_discord_id() {
        let id = parse_discord_id("GUILD_ID", "123456789012345678".to_string()).unwrap();
        assert_eq!(id, 123456789012345678);
    }

    /// Tests that zero and non-numeric IDs are rejected.
    ///
    /// Expected: Err(InvalidEnvVar) carrying the variable name and raw value
    #[test]
    fn rejects_invalid_discord_id() {
        let result = parse_discord_id("GUILD_ID", "0".to_string());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, ref value })
                if name == "GUILD_ID" && value == "0"
        ));

        let result = parse_discord_id("LOG_CHANNEL_ID", "not-a-channel".to_string());
        assert!(result.is_err());
    }

    /// Tests parsing positive numeric settings.
    ///
    /// Expected: Ok for positive values, Err for zero and negatives
    #[test]
    fn parses_positive_settings() {
        assert_eq!(
            parse_positive("RESOLVED_GIVEAWAY_RETENTION", "10".to_string()).unwrap(),
            10
        );
        assert!(parse_positive("RESOLVED_GIVEAWAY_RETENTION", "0".to_string()).is_err());
        assert!(parse_positive("RESOLVED_GIVEAWAY_TTL_HOURS", "-3".to_string()).is_err());
    }
}
