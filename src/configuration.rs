use reqwest::Url;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Where the mock server's configuration API listens.
#[derive(Clone, Debug, Deserialize)]
pub struct ConnectionSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ConnectionSettings {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}:{}", self.host, self.port))
            .expect("Failed to build the mock server base URL")
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 1080,
        }
    }
}
