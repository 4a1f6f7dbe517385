//! Random string generation for bootstrap credentials.

use crate::error::KubeadmError;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random alphanumeric string of the given length from the
/// operating system entropy source.
///
/// Bootstrap tokens grant provisioning trust, so an unavailable entropy
/// source is a hard error rather than a reason to fall back to a
/// predictable generator.
pub fn random_string(length: usize) -> Result<String, KubeadmError> {
    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while out.len() < length {
        getrandom::getrandom(&mut buf).map_err(|err| KubeadmError::Entropy(err.to_string()))?;
        for byte in buf {
            if out.len() == length {
                break;
            }
            // Rejection sampling keeps the 62-character alphabet unbiased:
            // 248 is the largest multiple of 62 that fits in a byte.
            if byte < 248 {
                out.push(char::from(ALPHANUMERIC[usize::from(byte) % ALPHANUMERIC.len()]));
            }
        }
    }

    Ok(out)
}
