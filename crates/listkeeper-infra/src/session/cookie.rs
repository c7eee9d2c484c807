//! HMAC-SHA256 signed session cookies.
//!
//! Cookie value format: `<session uuid>.<hex hmac-sha256(uuid)>`. Only the
//! id travels to the browser; the session contents stay on the server.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use listkeeper_types::error::SessionError;
use listkeeper_types::session::SessionId;

type HmacSha256 = Hmac<Sha256>;

/// Length of a generated signing key, in bytes.
const GENERATED_KEY_LEN: usize = 32;

/// Signs and verifies session ids carried in cookies.
#[derive(Clone)]
pub struct CookieSigner {
    keyed: HmacSha256,
}

impl CookieSigner {
    /// Build a signer from a configured secret.
    pub fn new(secret: &[u8]) -> Result<Self, SessionError> {
        if secret.is_empty() {
            return Err(SessionError::InvalidKey("secret must not be empty".to_string()));
        }
        let keyed = <HmacSha256 as Mac>::new_from_slice(secret)
            .map_err(|e| SessionError::InvalidKey(e.to_string()))?;
        Ok(Self { keyed })
    }

    /// Build a signer with a random key from the OS RNG.
    pub fn random() -> Result<Self, SessionError> {
        let mut key = [0u8; GENERATED_KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self::new(&key)
    }

    /// Produce the cookie value for `id`.
    pub fn sign(&self, id: &SessionId) -> String {
        let payload = id.to_string();
        let tag = self.mac(payload.as_bytes()).finalize().into_bytes();
        format!("{payload}.{}", hex_encode(&tag))
    }

    /// Recover the session id from a cookie value, rejecting anything not
    /// signed with this key.
    pub fn verify(&self, cookie_value: &str) -> Result<SessionId, SessionError> {
        let (payload, signature_hex) = cookie_value
            .rsplit_once('.')
            .ok_or(SessionError::MalformedCookie)?;
        let signature = hex_decode(signature_hex).map_err(|_| SessionError::MalformedCookie)?;

        // Constant-time comparison via `verify_slice`
        self.mac(payload.as_bytes())
            .verify_slice(&signature)
            .map_err(|_| SessionError::BadSignature)?;

        payload
            .parse::<SessionId>()
            .map_err(|_| SessionError::MalformedCookie)
    }

    fn mac(&self, payload: &[u8]) -> HmacSha256 {
        let mut mac = self.keyed.clone();
        mac.update(payload);
        mac
    }
}

impl std::fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieSigner").finish_non_exhaustive()
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(hex: &str) -> Result<Vec<u8>, ()> {
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return Err(());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ()))
        .collect()
}
