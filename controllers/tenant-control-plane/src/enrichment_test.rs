//! Unit tests for the bootstrap token enrichment module

#[cfg(test)]
mod tests {
    use crate::enrichment::enrich_bootstrap_tokens;
    use kubeadm::{BootstrapToken, BootstrapTokenString};

    fn populated_token(id: &str, secret: &str) -> BootstrapToken {
        BootstrapToken {
            token: Some(BootstrapTokenString {
                id: id.to_string(),
                secret: secret.to_string(),
            }),
            description: Some("caller supplied".to_string()),
            ttl_seconds: Some(3600),
            usages: vec!["authentication".to_string()],
            groups: Vec::new(),
        }
    }

    #[test]
    fn test_empty_list_produces_one_token() {
        let enriched = enrich_bootstrap_tokens(&[]).unwrap();

        assert_eq!(enriched.len(), 1);
        let token = enriched[0].token.as_ref().unwrap();
        assert_eq!(token.id.len(), 6);
        assert_eq!(token.secret.len(), 16);
        assert!(token.id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(token.secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_rendered_identifier_matches_bootstrap_pattern() {
        let enriched = enrich_bootstrap_tokens(&[]).unwrap();
        let rendered = enriched[0].token.as_ref().unwrap().to_string();

        // [A-Za-z0-9]{6}\.[A-Za-z0-9]{16}
        let (id, secret) = rendered.split_once('.').unwrap();
        assert_eq!(id.len(), 6);
        assert_eq!(secret.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_populated_list_is_untouched() {
        let tokens = vec![populated_token("abcdef", "0123456789abcdef")];

        let enriched = enrich_bootstrap_tokens(&tokens).unwrap();

        assert_eq!(enriched, tokens);
    }

    #[test]
    fn test_enrichment_is_idempotent() {
        let once = enrich_bootstrap_tokens(&[]).unwrap();
        let twice = enrich_bootstrap_tokens(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_caller_supplied_id_is_preserved() {
        let tokens = vec![BootstrapToken {
            token: Some(BootstrapTokenString {
                id: "caller".to_string(),
                secret: String::new(),
            }),
            ..Default::default()
        }];

        let enriched = enrich_bootstrap_tokens(&tokens).unwrap();

        let token = enriched[0].token.as_ref().unwrap();
        assert_eq!(token.id, "caller");
        assert_eq!(token.secret.len(), 16);
    }

    #[test]
    fn test_caller_supplied_secret_is_preserved() {
        let tokens = vec![BootstrapToken {
            token: Some(BootstrapTokenString {
                id: String::new(),
                secret: "0123456789abcdef".to_string(),
            }),
            ..Default::default()
        }];

        let enriched = enrich_bootstrap_tokens(&tokens).unwrap();

        let token = enriched[0].token.as_ref().unwrap();
        assert_eq!(token.id.len(), 6);
        assert_eq!(token.secret, "0123456789abcdef");
    }

    #[test]
    fn test_only_slot_zero_is_enriched() {
        let tokens = vec![
            BootstrapToken::default(),
            populated_token("extra1", "extra-secret"),
        ];

        let enriched = enrich_bootstrap_tokens(&tokens).unwrap();

        assert_eq!(enriched.len(), 2);
        assert!(enriched[0].token.is_some());
        assert_eq!(enriched[1], tokens[1]);
    }

    #[test]
    fn test_input_list_is_not_mutated() {
        let tokens = vec![BootstrapToken::default()];

        let enriched = enrich_bootstrap_tokens(&tokens).unwrap();

        assert!(tokens[0].token.is_none(), "input must stay untouched");
        assert!(enriched[0].token.is_some());
    }
}
