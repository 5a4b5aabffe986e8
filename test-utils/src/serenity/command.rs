//! Test factories for creating Serenity slash command options.
//!
//! Options are built by deserializing the JSON Discord sends in an interaction payload,
//! so the resulting values go through the same code path as real interactions.

use serenity::all::CommandDataOption;
use serde_json::json;

/// Creates a string command option.
///
/// # Arguments
/// - `name` - Option name as registered with the command
/// - `value` - String value supplied by the user
///
/// # Returns
/// - `CommandDataOption` - Option carrying a `CommandDataOptionValue::String`
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandDataOption (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::command::create_string_option;
///
/// let prize = create_string_option("prize", "Gift Card");
/// assert_eq!(prize.value.as_str(), Some("Gift Card"));
/// ```
pub fn create_string_option(name: &str, value: &str) -> CommandDataOption {
    serde_json::from_value(json!({
        "name": name,
        "type": 3,
        "value": value,
    }))
    .expect("Failed to create test string option")
}

/// Creates an integer command option.
///
/// # Arguments
/// - `name` - Option name as registered with the command
/// - `value` - Integer value supplied by the user
///
/// # Returns
/// - `CommandDataOption` - Option carrying a `CommandDataOptionValue::Integer`
///
/// # Panics
/// - If the JSON cannot be deserialized into a CommandDataOption (indicates invalid test data)
pub fn create_integer_option(name: &str, value: i64) -> CommandDataOption {
    serde_json::from_value(json!({
        "name": name,
        "type": 4,
        "value": value,
    }))
    .expect("Failed to create test integer option")
}
