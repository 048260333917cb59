// src/tests/search_tests/fetch_tests.rs

use crate::errors::SearchError;
use crate::search::{check_status, ClientConfig};
use reqwest::StatusCode;
use url::Url;

#[test]
fn base_url_needs_trailing_slash() {
    let config = ClientConfig::default().with_base_url("https://example.com/cars-for-sale");
    assert!(matches!(config.base(), Err(SearchError::Configuration(_))));

    let config = ClientConfig::default().with_base_url("not a url/");
    assert!(matches!(config.base(), Err(SearchError::Configuration(_))));

    assert!(ClientConfig::default().base().is_ok());
}

#[test]
fn non_success_status_is_a_network_error() {
    let url = Url::parse("https://www.autotrader.com/cars-for-sale/ford/").unwrap();

    assert!(check_status(StatusCode::OK, &url).is_ok());
    for status in [StatusCode::FORBIDDEN, StatusCode::INTERNAL_SERVER_ERROR] {
        let err = check_status(status, &url).unwrap_err();
        assert!(
            matches!(&err, SearchError::Network(msg) if msg.contains(status.as_str())),
            "got {err:?}"
        );
    }
}
