//! Process-wide HMAC signing secret

use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

/// Length of a generated secret in bytes
const GENERATED_SECRET_LEN: usize = 32;

/// Symmetric key shared by issuance and verification.
///
/// Created once at startup and never mutated. A generated secret lives only
/// in memory, so credentials signed with it do not survive a restart.
#[derive(Clone)]
pub struct SigningSecret {
    bytes: Arc<[u8]>,
    generated: bool,
}

impl SigningSecret {
    /// Wrap a configured secret
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: Arc::from(bytes.as_ref()),
            generated: false,
        }
    }

    /// Generate a random secret from the OS CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; GENERATED_SECRET_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self {
            bytes: Arc::from(&bytes[..]),
            generated: true,
        }
    }

    /// Use the configured secret, or generate one and warn that issued
    /// credentials will not outlive the process.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(secret) if !secret.is_empty() => Self::from_bytes(secret),
            _ => {
                tracing::warn!(
                    "JWT_SECRET is not set; using a randomly generated signing secret. \
                     Restarting the server will invalidate every issued token."
                );
                Self::generate()
            }
        }
    }

    /// Whether this secret was generated rather than configured
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("bytes", &"<redacted>")
            .field("generated", &self.generated)
            .finish()
    }
}
