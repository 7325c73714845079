//! Property-based tests for session tokens

use chrono::Duration;
use proptest::prelude::*;
use uuid::Uuid;

use taskboard::backend::auth::TokenService;
use taskboard::shared::{peek_claims, Identity};

proptest! {
    #[test]
    fn test_issued_tokens_verify_and_peek(
        name in "\\PC{0,40}",
        local in "[a-z0-9.]{1,20}",
        days in 1i64..30,
    ) {
        let service = TokenService::new("proptest-secret", Duration::days(days));
        let identity = Identity {
            id: Uuid::new_v4(),
            email: format!("{local}@example.com"),
            name,
        };

        let token = service.issue(&identity).unwrap();
        let verified = service.verify(&token).unwrap();
        prop_assert_eq!(verified.identity(), identity);
        prop_assert_eq!(verified.exp - verified.iat, (days * 24 * 60 * 60) as u64);

        let peeked = peek_claims(&token).unwrap();
        prop_assert_eq!(peeked, verified);
    }

    #[test]
    fn test_other_secrets_are_rejected(secret in "[a-zA-Z0-9]{8,32}") {
        prop_assume!(secret != "proptest-secret");
        let identity = Identity {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            name: "A".to_string(),
        };
        let token = TokenService::new(&secret, Duration::days(7)).issue(&identity).unwrap();
        let verifier = TokenService::new("proptest-secret", Duration::days(7));
        prop_assert!(verifier.verify(&token).is_err());
    }
}
