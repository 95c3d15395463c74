//! # Message Verification Service
//!
//! Application service layer that implements the `MessageVerificationApi`
//! trait for a fixed network, and adds the deadline-bounded entry point.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`MessageVerificationApi`)
//! - Delegates protocol and cryptographic work to the domain layer
//! - Races verification against a deadline for callers with a time budget

use crate::domain::address;
use crate::domain::entities::{Network, SignedMessageRequest};
use crate::domain::errors::{InputField, VerifyError};
use crate::domain::verify;
use crate::ports::inbound::MessageVerificationApi;
use k256::ecdsa::VerifyingKey;
use std::time::Duration;
use tracing::debug;

/// Signed-message verification service.
///
/// Holds only the network parameters; every verification call is otherwise
/// stateless, so a single service can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct MessageVerificationService {
    network: Network,
}

impl MessageVerificationService {
    /// Create a service for the given network.
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    /// The network this service verifies against.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Run verification under a caller-supplied deadline.
    ///
    /// The request is dispatched by whichever identity is present, preferring
    /// the public-key path (with address fallback) when a key is supplied.
    /// The synchronous verification runs on the blocking thread pool and is
    /// raced against the deadline; verification itself is fast and never
    /// observes cancellation, so an elapsed deadline simply abandons the
    /// in-flight computation and returns `Timeout`. The underlying result or
    /// error is otherwise returned unchanged.
    pub async fn verify_with_timeout(
        &self,
        request: SignedMessageRequest,
        timeout: Duration,
    ) -> Result<bool, VerifyError> {
        debug!(?timeout, "starting deadline-bounded verification");

        let network = self.network;
        let task = tokio::task::spawn_blocking(move || run_request(&request, &network));

        match tokio::time::timeout(timeout, task).await {
            Err(_elapsed) => {
                debug!("deadline elapsed before verification completed");
                Err(VerifyError::Timeout)
            }
            Ok(Err(join_error)) => Err(VerifyError::TaskFailed(join_error.to_string())),
            Ok(Ok(result)) => result,
        }
    }
}

impl Default for MessageVerificationService {
    /// Mainnet service.
    fn default() -> Self {
        Self::new(Network::MAINNET)
    }
}

impl MessageVerificationApi for MessageVerificationService {
    fn verify_by_address(
        &self,
        address: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError> {
        verify::verify_by_address(address, message, signature, &self.network)
    }

    fn verify_by_public_key(
        &self,
        public_key: &VerifyingKey,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError> {
        verify::verify_by_public_key(public_key, message, signature)
    }

    fn verify_by_public_key_with_fallback(
        &self,
        public_key: &VerifyingKey,
        message: &str,
        signature: &str,
    ) -> Result<bool, VerifyError> {
        verify::verify_by_public_key_with_fallback(public_key, message, signature, &self.network)
    }

    fn derive_address(&self, public_key: &VerifyingKey) -> String {
        address::derive_address(public_key, &self.network)
    }
}

/// Dispatch a request by whichever identity it carries.
fn run_request(request: &SignedMessageRequest, network: &Network) -> Result<bool, VerifyError> {
    if request.message.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Message));
    }
    if request.signature.is_empty() {
        return Err(VerifyError::EmptyInput(InputField::Signature));
    }

    match (&request.public_key, &request.address) {
        (Some(key), _) => verify::verify_by_public_key_with_fallback(
            key,
            &request.message,
            &request.signature,
            network,
        ),
        (None, Some(addr)) => {
            verify::verify_by_address(addr, &request.message, &request.signature, network)
        }
        (None, None) => Err(VerifyError::MissingIdentity),
    }
}

// =============================================================================
// TESTS
// =============================================================================
