use mockserver_client::{telemetry, MockServerClient};
use once_cell::sync::Lazy;
use reqwest::Url;
use wiremock::MockServer;

pub static TELEMETRY: Lazy<Result<(), String>> = Lazy::new(|| {
    let (name, filter) = ("test", "debug");
    if std::env::var("TEST_LOG")
        .unwrap_or_default()
        .parse::<bool>()
        .unwrap_or_default()
    {
        telemetry::init(name, filter, std::io::stdout)
    } else {
        telemetry::init(name, filter, std::io::sink)
    }
});

/// A wiremock server standing in for the MockServer configuration API,
/// paired with a client pointed at it.
pub struct TestMockServer {
    pub server: MockServer,
    pub client: MockServerClient,
}

impl TestMockServer {
    pub async fn start() -> Self {
        Lazy::force(&TELEMETRY)
            .as_ref()
            .expect("Failed to initialize telemetry");

        let server = MockServer::start().await;
        let client = MockServerClient::new(Url::parse(&server.uri()).unwrap());
        Self { server, client }
    }
}
