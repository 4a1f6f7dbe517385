//! Bootstrap token enrichment.
//!
//! Fills in missing fields of the to-be-issued credential with generated
//! defaults. Returns a new token list instead of mutating the caller's
//! configuration, so a configuration reused across retries never aliases
//! half-enriched state.

use kubeadm::utils::random_string;
use kubeadm::{BootstrapToken, BootstrapTokenString, KubeadmError};

/// Length of the public token identifier segment.
const TOKEN_ID_LEN: usize = 6;

/// Length of the private token secret segment.
const TOKEN_SECRET_LEN: usize = 16;

/// Enriches slot zero of the candidate token list.
///
/// Starts from the first candidate (or an empty record when the list is
/// empty), generates the missing `id` and `secret` segments independently,
/// and returns the list with the enriched token at slot zero. Non-empty
/// caller-supplied segments are never regenerated, so enriching an already
/// populated list is a no-op.
pub fn enrich_bootstrap_tokens(
    tokens: &[BootstrapToken],
) -> Result<Vec<BootstrapToken>, KubeadmError> {
    let mut token = tokens.first().cloned().unwrap_or_default();
    token.token = Some(enrich_token_string(token.token.take().unwrap_or_default())?);

    let mut enriched = tokens.to_vec();
    match enriched.first_mut() {
        Some(slot) => *slot = token,
        None => enriched.push(token),
    }

    Ok(enriched)
}

fn enrich_token_string(
    mut token: BootstrapTokenString,
) -> Result<BootstrapTokenString, KubeadmError> {
    if token.id.is_empty() {
        token.id = random_string(TOKEN_ID_LEN)?;
    }
    if token.secret.is_empty() {
        token.secret = random_string(TOKEN_SECRET_LEN)?;
    }

    Ok(token)
}
