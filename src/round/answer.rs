//! Coercion of free-text answers into a claimed sum.
//!
//! Input is read leniently, the way a numeric text field is usually parsed:
//! leading whitespace is skipped, one optional sign is accepted, then the
//! longest run of ASCII digits is taken and anything after it is ignored.
//! Input with no leading digits is `Malformed`, which never matches any
//! target and therefore always scores as incorrect.

use serde::{Deserialize, Serialize};

/// A user's claimed sum after coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimedSum {
    Value(i64),
    /// Unparseable input. Treated as a wrong answer, never as an error.
    Malformed,
}

impl ClaimedSum {
    /// Coerce raw text input.
    ///
    /// ```
    /// use sum_recall::round::ClaimedSum;
    ///
    /// assert_eq!(ClaimedSum::parse(" 44"), ClaimedSum::Value(44));
    /// assert_eq!(ClaimedSum::parse("44abc"), ClaimedSum::Value(44));
    /// assert_eq!(ClaimedSum::parse("abc"), ClaimedSum::Malformed);
    /// ```
    pub fn parse(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return ClaimedSum::Malformed;
        }

        match rest[..len].parse::<i64>() {
            Ok(value) if negative => ClaimedSum::Value(-value),
            Ok(value) => ClaimedSum::Value(value),
            Err(_) => ClaimedSum::Malformed,
        }
    }

    /// Check if this claim equals `target`. `Malformed` never matches.
    #[must_use]
    pub fn matches(self, target: i64) -> bool {
        match self {
            ClaimedSum::Value(v) => v == target,
            ClaimedSum::Malformed => false,
        }
    }
}

impl From<i64> for ClaimedSum {
    fn from(value: i64) -> Self {
        ClaimedSum::Value(value)
    }
}

impl std::str::FromStr for ClaimedSum {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClaimedSum::parse(s))
    }
}
