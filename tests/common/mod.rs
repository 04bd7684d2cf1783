#![allow(dead_code)]

use httpmock::MockServer;
use intrinio_rs::{BlockingClient, IntrinioClient};
use std::{fs, path::PathBuf};
use url::Url;

pub const TEST_KEY: &str = "test-key";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> String {
    let path = fixtures_dir().join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> IntrinioClient {
    IntrinioClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_key(TEST_KEY)
        .build()
        .unwrap()
}

pub fn blocking_client_for(server: &MockServer) -> BlockingClient {
    IntrinioClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .api_key(TEST_KEY)
        .build_blocking()
        .unwrap()
}
