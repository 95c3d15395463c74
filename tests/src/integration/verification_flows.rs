//! # End-to-End Verification Flows
//!
//! Exercises the full public surface of `bip137-verify`: the known-good
//! mainnet vector, tamper detection, the consistency of the two verification
//! strategies, and the deadline-bounded service entry point.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use base64::{engine::general_purpose, Engine as _};
    use k256::ecdsa::SigningKey;

    use bip137_verify::{
        derive_address, signed_message_digest, verify_bip137_signature, verify_by_address,
        verify_by_public_key, verify_by_public_key_with_fallback, InputField,
        MessageVerificationApi, MessageVerificationService, Network, SignedMessageRequest,
        VerifyError, VerifyingKey,
    };

    // =========================================================================
    // KNOWN-GOOD MAINNET VECTOR
    // =========================================================================

    const KNOWN_ADDRESS: &str = "1C9YVXK12TBeDMJEFFMuTZMHMQgcRAuR1E";
    const KNOWN_MESSAGE: &str = "Hello, Bitcoin testing!";
    const KNOWN_SIGNATURE: &str =
        "IJNFSGvr6aaXsWFHQNJmWL9Jq6t/4IRdIzst8X4Af90JY7C0rStfn1NLgnQt8xWGSxouz5y/G7KWL8dKmt+FpME=";

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Fresh keypair for flow tests.
    fn generate_keypair() -> (SigningKey, VerifyingKey) {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        let verifying_key = *signing_key.verifying_key();
        (signing_key, verifying_key)
    }

    /// Produce a base64 BIP-137 envelope over `message` (compressed header).
    fn sign_message(private_key: &SigningKey, message: &str) -> String {
        let digest = signed_message_digest(message);
        let (signature, recovery_id) = private_key
            .sign_prehash_recoverable(&digest)
            .expect("signing failed");

        let mut envelope = [0u8; 65];
        envelope[0] = 31 + recovery_id.to_byte();
        envelope[1..].copy_from_slice(&signature.to_bytes());
        general_purpose::STANDARD.encode(envelope)
    }

    // =========================================================================
    // FIXED-VECTOR FLOWS
    // =========================================================================

    #[test]
    fn known_good_vector_verifies() {
        let result = verify_bip137_signature(KNOWN_ADDRESS, KNOWN_MESSAGE, KNOWN_SIGNATURE);
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn known_good_vector_verifies_with_explicit_network() {
        let result = verify_by_address(
            KNOWN_ADDRESS,
            KNOWN_MESSAGE,
            KNOWN_SIGNATURE,
            &Network::MAINNET,
        );
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn tampered_message_is_conclusively_false() {
        let result = verify_bip137_signature(
            KNOWN_ADDRESS,
            "Hello, Bitcoin testing! (modified)",
            KNOWN_SIGNATURE,
        );
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn wrong_address_is_conclusively_false() {
        // Valid mainnet address, but not the signer's.
        let (_, other_key) = generate_keypair();
        let other_address = derive_address(&other_key, &Network::MAINNET);

        let result = verify_bip137_signature(&other_address, KNOWN_MESSAGE, KNOWN_SIGNATURE);
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn known_vector_rejected_on_testnet() {
        // A mainnet address cannot be decoded under testnet parameters.
        let result = verify_by_address(
            KNOWN_ADDRESS,
            KNOWN_MESSAGE,
            KNOWN_SIGNATURE,
            &Network::TESTNET,
        );
        assert!(matches!(result, Err(VerifyError::InvalidAddress(_))));
    }

    // =========================================================================
    // STRATEGY CONSISTENCY FLOWS
    // =========================================================================

    #[test]
    fn pubkey_and_address_strategies_agree() {
        let (private_key, public_key) = generate_keypair();
        let address = derive_address(&public_key, &Network::MAINNET);

        for (message, signed_message) in [
            ("agreement test", "agreement test"),
            ("agreement test", "a different message"),
        ] {
            let signature = sign_message(&private_key, signed_message);

            let by_key = verify_by_public_key(&public_key, message, &signature).unwrap();
            let by_addr =
                verify_by_address(&address, message, &signature, &Network::MAINNET).unwrap();

            assert_eq!(by_key, by_addr);
            assert_eq!(by_key, message == signed_message);
        }
    }

    #[test]
    fn fallback_agrees_with_direct_path() {
        let (private_key, public_key) = generate_keypair();
        let signature = sign_message(&private_key, "fallback flow");

        let direct = verify_by_public_key(&public_key, "fallback flow", &signature);
        let with_fallback = verify_by_public_key_with_fallback(
            &public_key,
            "fallback flow",
            &signature,
            &Network::MAINNET,
        );
        assert_eq!(direct, with_fallback);
        assert_eq!(direct, Ok(true));
    }

    // =========================================================================
    // INPUT VALIDATION FLOWS
    // =========================================================================

    #[test]
    fn empty_fields_rejected_before_any_parsing() {
        assert_eq!(
            verify_bip137_signature("", KNOWN_MESSAGE, KNOWN_SIGNATURE),
            Err(VerifyError::EmptyInput(InputField::Address))
        );
        assert_eq!(
            verify_bip137_signature(KNOWN_ADDRESS, "", KNOWN_SIGNATURE),
            Err(VerifyError::EmptyInput(InputField::Message))
        );
        assert_eq!(
            verify_bip137_signature(KNOWN_ADDRESS, KNOWN_MESSAGE, ""),
            Err(VerifyError::EmptyInput(InputField::Signature))
        );
    }

    #[test]
    fn malformed_signatures_are_errors_not_false() {
        let result = verify_bip137_signature(KNOWN_ADDRESS, KNOWN_MESSAGE, "%%%");
        assert!(matches!(result, Err(VerifyError::InvalidBase64(_))));

        // Valid base64, but too short for an envelope.
        let short = general_purpose::STANDARD.encode([0u8; 10]);
        let result = verify_bip137_signature(KNOWN_ADDRESS, KNOWN_MESSAGE, &short);
        assert_eq!(result, Err(VerifyError::MalformedSignature { len: 10 }));

        // Correct length, unacceptable header byte.
        let mut bytes = vec![0x01u8];
        bytes.extend_from_slice(&[0x55; 64]);
        let bad_header = general_purpose::STANDARD.encode(&bytes);
        let result = verify_bip137_signature(KNOWN_ADDRESS, KNOWN_MESSAGE, &bad_header);
        assert_eq!(result, Err(VerifyError::InvalidHeaderByte(0x01)));
    }

    // =========================================================================
    // SERVICE AND DEADLINE FLOWS
    // =========================================================================

    #[test]
    fn service_handles_known_vector() {
        let service = MessageVerificationService::default();
        let result = service.verify_by_address(KNOWN_ADDRESS, KNOWN_MESSAGE, KNOWN_SIGNATURE);
        assert_eq!(result, Ok(true));
    }

    #[tokio::test]
    async fn deadline_bounded_verification_by_address() {
        let service = MessageVerificationService::default();

        let request =
            SignedMessageRequest::by_address(KNOWN_ADDRESS, KNOWN_MESSAGE, KNOWN_SIGNATURE);
        let result = service
            .verify_with_timeout(request, Duration::from_secs(5))
            .await;
        assert_eq!(result, Ok(true));
    }

    #[tokio::test]
    async fn deadline_bounded_verification_by_public_key() {
        let service = MessageVerificationService::default();

        let (private_key, public_key) = generate_keypair();
        let signature = sign_message(&private_key, "bounded flow");

        let request = SignedMessageRequest::by_public_key(public_key, "bounded flow", signature);
        let result = service
            .verify_with_timeout(request, Duration::from_secs(5))
            .await;
        assert_eq!(result, Ok(true));
    }

    #[tokio::test]
    async fn deadline_bounded_tamper_detection() {
        let service = MessageVerificationService::default();

        let request = SignedMessageRequest::by_address(
            KNOWN_ADDRESS,
            "Hello, Bitcoin testing! (modified)",
            KNOWN_SIGNATURE,
        );
        let result = service
            .verify_with_timeout(request, Duration::from_secs(5))
            .await;
        assert_eq!(result, Ok(false));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_is_a_distinct_error() {
        let service = MessageVerificationService::default();

        let request =
            SignedMessageRequest::by_address(KNOWN_ADDRESS, KNOWN_MESSAGE, KNOWN_SIGNATURE);
        let result = service.verify_with_timeout(request, Duration::ZERO).await;

        // Inconclusive, not "proven invalid".
        assert_eq!(result, Err(VerifyError::Timeout));
    }

    // =========================================================================
    // CONCURRENT CALLERS
    // =========================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn service_is_safe_under_concurrent_callers() {
        let service = std::sync::Arc::new(MessageVerificationService::default());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move {
                    let request = SignedMessageRequest::by_address(
                        KNOWN_ADDRESS,
                        KNOWN_MESSAGE,
                        KNOWN_SIGNATURE,
                    );
                    service
                        .verify_with_timeout(request, Duration::from_secs(5))
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(true));
        }
    }
}
