#![allow(dead_code)]

use paypal_confirm::application::confirmer::Confirmer;
use paypal_confirm::config::ClientConfig;
use wiremock::MockServer;

pub const LIVE_PATH: &str = "/cgi-bin/webscr";
pub const SANDBOX_PATH: &str = "/sandbox/cgi-bin/webscr";

/// Points both endpoints at the mock server, on distinct paths.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_live_url(format!("{}{LIVE_PATH}", server.uri()))
        .with_sandbox_url(format!("{}{SANDBOX_PATH}", server.uri()))
        .with_timeout_secs(5)
}

pub fn confirmer_for(server: &MockServer) -> Confirmer {
    Confirmer::from_config(config_for(server)).expect("failed to build confirmer")
}

/// A localhost URL nothing is listening on.
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}{LIVE_PATH}")
}
