pub mod client;
pub mod configuration;
pub mod expectation;
pub mod telemetry;

pub use client::{Error, MockServerClient};
pub use configuration::ConnectionSettings;
pub use expectation::{Expectation, HttpRequest, HttpResponse, Times};
