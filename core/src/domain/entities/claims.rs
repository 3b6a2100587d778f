//! Claim set carried by a signed credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default credential lifetime (30 minutes)
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the credential vouches for
    pub username: String,

    /// Expiration, seconds since the Unix epoch
    pub expire: i64,
}

impl Claims {
    /// Creates claims expiring at `expire` (sub-second precision is truncated)
    pub fn new(username: impl Into<String>, expire: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            expire: expire.timestamp(),
        }
    }

    /// Whether the claims have expired at the given instant.
    ///
    /// Still valid at exactly `expire`; invalid at any later instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        (now.timestamp(), now.timestamp_subsec_nanos()) > (self.expire, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_expiry_is_strict() {
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("alice", issued + Duration::minutes(30));

        assert!(!claims.is_expired_at(issued));
        assert!(!claims.is_expired_at(issued + Duration::minutes(30)));
        assert!(claims.is_expired_at(issued + Duration::minutes(30) + Duration::seconds(1)));
    }

    #[test]
    fn test_expired_within_the_second_after_expire() {
        let expire = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let claims = Claims::new("alice", expire);

        assert!(claims.is_expired_at(expire + Duration::nanoseconds(1)));
        assert!(claims.is_expired_at(expire + Duration::milliseconds(900)));
        assert!(!claims.is_expired_at(expire - Duration::milliseconds(1)));
    }

    #[test]
    fn test_expire_truncates_subseconds() {
        let at = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(Claims::new("bob", at).expire, 1_700_000_000);
    }
}
