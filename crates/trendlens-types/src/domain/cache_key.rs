use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timeframe;

/// Identity of one trends fetch: a keyword looked up over a timeframe.
///
/// Rendered as `keyword|timeframe`. The keyword is kept verbatim; two
/// spellings of the same term are two keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub keyword: String,
    pub timeframe: Timeframe,
}

impl CacheKey {
    pub fn new(keyword: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            keyword: keyword.into(),
            timeframe,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.keyword, self.timeframe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_pipe() {
        let key = CacheKey::new("Starlink", Timeframe::ThreeMonths);
        assert_eq!(key.to_string(), "Starlink|today 3-m");
    }

    #[test]
    fn test_timeframe_distinguishes_keys() {
        let a = CacheKey::new("Roku", Timeframe::OneMonth);
        let b = CacheKey::new("Roku", Timeframe::FiveYears);
        assert_ne!(a, b);
    }
}
