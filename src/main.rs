use mockserver_client::{
    telemetry, ConnectionSettings, Expectation, HttpRequest, HttpResponse, MockServerClient,
};

#[tokio::main]
async fn main() {
    telemetry::init("mockserver-client", "info", std::io::stdout)
        .expect("Failed to initialize telemetry");

    let settings = ConnectionSettings::default();
    let client = MockServerClient::new(settings.base_url());
    let expectation = Expectation::new(
        HttpRequest::new().method("GET").path("/status"),
        HttpResponse::new().body("Hello World!"),
    );

    // Either outcome goes to stdout and the process exits 0.
    match client.mock_any_response(&expectation).await {
        Ok(()) => println!("expectation created"),
        Err(e) => println!("{}", e),
    }
}
