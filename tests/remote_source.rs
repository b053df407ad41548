// tests/remote_source.rs
//
// ApiSource against a local stub: success, empty, and every failure mode.
//
mod common;

use std::time::Duration;

use animal_page::config::options::SourceOptions;
use animal_page::source::{AnimalSource, ApiSource, Fetched};
use common::{Reply, Stub};

fn opts(url: &str, key: Option<&str>) -> SourceOptions {
    let mut o = SourceOptions::default();
    o.api_url = url.to_string();
    o.timeout = Duration::from_secs(1);
    o.set_api_key(key.map(str::to_string));
    o
}

#[test]
fn ok_response_yields_records_and_sends_key_and_name() {
    let stub = Stub::start(Reply::Status(
        200,
        r#"[{"name": "Cheetah", "locations": ["Africa"], "characteristics": {"diet": "Carnivore"}}]"#,
    ));
    let src = ApiSource::new(&opts(&stub.url, Some("secret")), "big cat").unwrap();

    let got = src.fetch().unwrap();
    let records = got.into_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name().unwrap().to_string(), "Cheetah");

    let head = stub.request();
    let first = head.lines().next().unwrap();
    assert!(first.starts_with("GET /v1/animals?name=big"), "{first}");
    assert!(head.to_ascii_lowercase().contains("x-api-key: secret"));
}

#[test]
fn empty_list_is_not_no_data() {
    let stub = Stub::start(Reply::Status(200, "[]"));
    let src = ApiSource::new(&opts(&stub.url, Some("k")), "Yeti").unwrap();
    assert_eq!(src.fetch().unwrap(), Fetched::Records(Vec::new()));
    stub.request();
}

#[test]
fn non_success_status_is_no_data() {
    let stub = Stub::start(Reply::Status(401, r#"{"error": "Invalid API Key."}"#));
    let src = ApiSource::new(&opts(&stub.url, Some("bad")), "Fox").unwrap();
    assert_eq!(src.fetch().unwrap(), Fetched::NoData);
    stub.request();
}

#[test]
fn invalid_json_is_no_data() {
    let stub = Stub::start(Reply::Status(200, "<html>oops</html>"));
    let src = ApiSource::new(&opts(&stub.url, Some("k")), "Fox").unwrap();
    assert_eq!(src.fetch().unwrap(), Fetched::NoData);
    stub.request();
}

#[test]
fn timeout_is_no_data() {
    let stub = Stub::start(Reply::Hang(Duration::from_secs(3)));
    let src = ApiSource::new(&opts(&stub.url, Some("k")), "Fox").unwrap();
    assert_eq!(src.fetch().unwrap(), Fetched::NoData);
    stub.request();
}

#[test]
fn unreachable_host_is_no_data() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{port}/v1/animals");
    let src = ApiSource::new(&opts(&url, None), "Fox").unwrap();
    assert_eq!(src.fetch().unwrap(), Fetched::NoData);
}
