// Property-based tests for /lipa input validation
//
// Falsy amounts and phones must be rejected with the right message before any
// call to Daraja; positive integers in any accepted shape must get through.

use async_trait::async_trait;
use lipa_gateway::config::DarajaConfig;
use lipa_gateway::core::AppError;
use lipa_gateway::mpesa::models::{
    AccessToken, LipaRequest, StkPushPayload, INVALID_AMOUNT_MESSAGE, INVALID_PHONE_MESSAGE,
};
use lipa_gateway::mpesa::{DarajaApi, LipaService, SubmissionError, TokenError};
use proptest::prelude::*;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts outbound calls and always succeeds
#[derive(Default)]
struct CountingApi {
    calls: AtomicUsize,
}

#[async_trait]
impl DarajaApi for CountingApi {
    async fn generate_token(&self) -> Result<AccessToken, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AccessToken::new("abc"))
    }

    async fn stk_push(
        &self,
        _access_token: &SecretString,
        payload: &StkPushPayload,
    ) -> Result<Value, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "Amount": payload.amount, "PhoneNumber": payload.phone_number }))
    }
}

fn config() -> DarajaConfig {
    DarajaConfig::new(
        "key",
        "secret",
        "174379",
        "passkey",
        "https://example.com/callback",
    )
}

fn run(request: LipaRequest) -> (Result<Value, AppError>, usize) {
    let api = Arc::new(CountingApi::default());
    let service = LipaService::new(api.clone(), config());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let outcome = runtime.block_on(service.initiate(&request));
    (outcome, api.calls.load(Ordering::SeqCst))
}

/// Values whose leading-integer parse is missing or zero
fn falsy_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(0)),
        Just(json!(false)),
        Just(json!(true)),
        Just(json!("")),
        Just(json!({})),
        Just(json!([])),
        (0u32..1000).prop_map(|n| json!(f64::from(n) / 1000.0)),
        "[g-zG-Z][a-zA-Z]{0,8}".prop_map(Value::String),
        "0{1,4}[g-z ]{0,4}".prop_map(Value::String),
        "\\s{0,3}-?0".prop_map(Value::String),
    ]
}

/// Positive integers as numbers, numeric strings, or strings with trailing junk
fn positive_value() -> impl Strategy<Value = (i64, Value)> {
    (1i64..=999_999_999_999i64).prop_flat_map(|n| {
        prop_oneof![
            Just((n, json!(n))),
            Just((n, json!(n.to_string()))),
            Just((n, json!(format!("  {}", n)))),
            "[a-z]{1,4}".prop_map(move |junk| (n, json!(format!("{}{}", n, junk)))),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn falsy_amount_is_rejected_without_network(amount in falsy_value(), (_, phone) in positive_value()) {
        let (outcome, calls) = run(LipaRequest::new(amount, phone));
        let err = outcome.unwrap_err();
        prop_assert!(matches!(err, AppError::Validation(_)));
        prop_assert_eq!(err.client_message(), INVALID_AMOUNT_MESSAGE);
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn falsy_phone_is_rejected_without_network((_, amount) in positive_value(), phone in falsy_value()) {
        let (outcome, calls) = run(LipaRequest::new(amount, phone));
        let err = outcome.unwrap_err();
        prop_assert_eq!(err.client_message(), INVALID_PHONE_MESSAGE);
        prop_assert_eq!(calls, 0);
    }

    #[test]
    fn positive_inputs_are_submitted_as_integers(
        (amount, raw_amount) in positive_value(),
        (phone, raw_phone) in positive_value(),
    ) {
        let (outcome, calls) = run(LipaRequest::new(raw_amount, raw_phone));
        let data = outcome.unwrap();
        prop_assert_eq!(&data["Amount"], &json!(amount));
        prop_assert_eq!(&data["PhoneNumber"], &json!(phone.to_string()));
        prop_assert_eq!(calls, 2);
    }

    #[test]
    fn negative_amounts_are_rejected(n in 1i64..1_000_000) {
        let request = LipaRequest::new(json!(-n), json!(254712345678_i64));
        let err = request.validate().unwrap_err();
        prop_assert_eq!(err.client_message(), INVALID_AMOUNT_MESSAGE);
    }
}
