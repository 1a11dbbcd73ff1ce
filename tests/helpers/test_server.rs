// Test Server Helpers
//
// Spawns the real gateway HTTP stack with actix-test, pointed at whatever
// Daraja base URL the test provides.

use actix_web::{web, App};
use lipa_gateway::config::DarajaConfig;
use lipa_gateway::middleware::{cors, RequestId};
use lipa_gateway::modules;
use lipa_gateway::mpesa::LipaService;
use std::net::TcpListener;

pub use actix_test::TestServer;

use super::fake_daraja::{
    TEST_CALLBACK_URL, TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET, TEST_PASSKEY, TEST_SHORTCODE,
};

pub const TEST_ALLOWED_ORIGIN: &str = "https://sandbox.safaricom.co.ke";

/// Daraja configuration using the test credentials against `base_url`
pub fn test_daraja_config(base_url: &str) -> DarajaConfig {
    let mut config = DarajaConfig::new(
        TEST_CONSUMER_KEY,
        TEST_CONSUMER_SECRET,
        TEST_SHORTCODE,
        TEST_PASSKEY,
        TEST_CALLBACK_URL,
    )
    .with_base_url(base_url);
    config.timeout_secs = 2;
    config
}

/// Spawn the gateway with the same middleware and routes as `main`
///
/// # Example
/// ```no_run
/// #[actix_web::test]
/// async fn test_health_endpoint() {
///     let fake = FakeDaraja::start(TokenBehaviour::Issue, PushBehaviour::Accept);
///     let srv = spawn_gateway(test_daraja_config(&fake.base_url()));
///     let response = srv.get("/health").send().await.unwrap();
///     assert_eq!(response.status(), 200);
/// }
/// ```
pub fn spawn_gateway(config: DarajaConfig) -> TestServer {
    let service = web::Data::new(
        LipaService::from_config(config).expect("Failed to build LipaService"),
    );

    actix_test::start(move || {
        App::new()
            .app_data(service.clone())
            .wrap(cors(TEST_ALLOWED_ORIGIN))
            .wrap(RequestId)
            .configure(modules::configure)
    })
}

/// A local URL nothing listens on
pub fn unreachable_base_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to any available port")
        .local_addr()
        .expect("Failed to get local address")
        .port();
    format!("http://127.0.0.1:{}", port)
}
