use serde::Serialize;
use std::fmt;

use super::RequestError;

const MAX_CALLSIGN_LEN: usize = 12;

/// Upper-cased station callsign, safe to interpolate into query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Callsign(String);

impl Callsign {
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        let normalized = raw.trim().to_ascii_uppercase();
        let valid = !normalized.is_empty()
            && normalized.len() <= MAX_CALLSIGN_LEN
            && normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '/');

        if valid {
            Ok(Callsign(normalized))
        } else {
            Err(RequestError::InvalidCallsign(raw.to_string()))
        }
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callsign_is_trimmed_and_upper_cased() {
        let cs = Callsign::parse(" k1abc/p ").unwrap();
        assert_eq!(cs.to_string(), "K1ABC/P");
    }

    #[test]
    fn callsign_rejects_query_metacharacters() {
        assert!(Callsign::parse("K1ABC' OR 1=1").is_err());
        assert!(Callsign::parse("").is_err());
        assert!(Callsign::parse("ABCDEFGHIJKLM").is_err());
    }
}
