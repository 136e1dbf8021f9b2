//! Counter actions
//!
//! Action types are namespaced by slice (`counter/...`), and each has a
//! creator function so call sites never spell the strings out.

use redux_chain::AnyAction;

pub const INCREMENT: &str = "counter/increment";
pub const DECREMENT: &str = "counter/decrement";
pub const INCREMENT_BY_AMOUNT: &str = "counter/incrementByAmount";

pub fn increment() -> AnyAction {
    AnyAction::new(INCREMENT)
}

pub fn decrement() -> AnyAction {
    AnyAction::new(DECREMENT)
}

pub fn increment_by_amount(amount: i64) -> AnyAction {
    AnyAction::with_payload(INCREMENT_BY_AMOUNT, amount)
}

/// Translate a command-line word into an action
///
/// - `inc` / `dec`: increment / decrement
/// - `add=N`: increment by N (a non-numeric N is passed on as a string payload)
/// - anything else: dispatched as a raw action type
pub fn parse_command(word: &str) -> AnyAction {
    match word {
        "inc" => increment(),
        "dec" => decrement(),
        _ => match word.strip_prefix("add=") {
            Some(amount) => match amount.parse::<i64>() {
                Ok(amount) => increment_by_amount(amount),
                Err(_) => AnyAction::with_payload(INCREMENT_BY_AMOUNT, amount),
            },
            None => AnyAction::new(word),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("inc"), increment());
        assert_eq!(parse_command("dec"), decrement());
        assert_eq!(parse_command("add=5"), increment_by_amount(5));
        assert_eq!(parse_command("add=-2"), increment_by_amount(-2));
    }

    #[test]
    fn test_parse_command_passes_unknown_words_through() {
        assert_eq!(parse_command("counter/reset"), AnyAction::new("counter/reset"));
        assert_eq!(
            parse_command("add=lots"),
            AnyAction {
                kind: INCREMENT_BY_AMOUNT.to_string(),
                payload: Some(json!("lots")),
            }
        );
    }
}
