//! Viewing-mode filter for a rider's map.
//!
//! A filter is set from a raw string and is never rejected: malformed input
//! degrades to a name-substring search, and an `event:` token that does not
//! parse as a number is treated as an event name.

/// The visibility mode currently active for a rider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Default mode: the rider plus their followees who are currently riding.
    #[default]
    None,
    /// Riders whose name contains the given text (case-insensitive).
    NameSubstring(String),
    /// Riders in the official event with this numeric code.
    EventCode(i64),
    /// Riders in the event with this name, official or unofficial.
    EventName(String),
    /// Every rider that has recently requested resolution.
    AllUsers,
}

impl Filter {
    /// Parse a raw filter string.
    ///
    /// Trimmed-empty input restores the default mode. `all:users` selects
    /// every active rider. `event:<token>` selects an event, by code when
    /// the token parses as an integer and by name otherwise. Anything else
    /// is a name substring.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Filter::None;
        }
        if trimmed.eq_ignore_ascii_case("all:users") {
            return Filter::AllUsers;
        }
        if let Some(token) = trimmed.strip_prefix("event:") {
            let token = token.trim();
            return match token.parse::<i64>() {
                Ok(code) => Filter::EventCode(code),
                Err(_) => Filter::EventName(token.to_string()),
            };
        }
        Filter::NameSubstring(trimmed.to_string())
    }

    /// Stable cache-key component for this filter.
    ///
    /// Signatures embed the variant tag so that, for example, the event code
    /// `123` and the name search `"123"` cache separately.
    pub fn signature(&self) -> String {
        match self {
            Filter::None => String::new(),
            Filter::NameSubstring(text) => format!("name:{}", text.to_lowercase()),
            Filter::EventCode(code) => format!("event-code:{code}"),
            Filter::EventName(name) => format!("event-name:{name}"),
            Filter::AllUsers => "all".to_string(),
        }
    }
}
