//! Generic HTTP fetching with error classification

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` once and parses the JSON body into `T`.
///
/// There is no retry: any failure is returned to the caller as the
/// matching [`AppError`] variant.
/// - request never answered: `NetworkTimeout`, `NetworkConnection` or `ApiFetch`
/// - non-success status: see [`AppError::from_status`]
/// - unusable body: `ApiNoData`, `ApiMalformedJson` or `ApiUnexpectedStructure`
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::from_status(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_body(&response_text, url)
}

/// Parses a response body, telling an empty body, non-JSON and JSON of
/// the wrong shape apart.
fn parse_body<T: DeserializeOwned>(response_text: &str, url: &str) -> Result<T, AppError> {
    match serde_json::from_str::<T>(response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                response_text.chars().take(200).collect::<String>()
            );

            let trimmed = response_text.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else if e.is_syntax() || e.is_eof() {
                Err(AppError::api_malformed_json(e.to_string(), url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::http_client::create_test_http_client;
    use super::*;
    use crate::data_fetcher::models::{CalendarResponse, GameDetail};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const URL: &str = "https://api.example.com/games/1";

    #[test]
    fn test_parse_body_empty() {
        let result = parse_body::<GameDetail>("   ", URL);
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[test]
    fn test_parse_body_not_json() {
        let result = parse_body::<GameDetail>("<html>Service down</html>", URL);
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[test]
    fn test_parse_body_truncated_json() {
        let result = parse_body::<GameDetail>(r#"{"races": [{"number": 1"#, URL);
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[test]
    fn test_parse_body_wrong_shape() {
        let result = parse_body::<GameDetail>(r#"{"races": "none"}"#, URL);
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/day/2025-05-10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"games": {"V75": [{"id": "123"}]}}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/calendar/day/2025-05-10", mock_server.uri());
        let calendar: CalendarResponse = fetch(&client, &url).await.unwrap();
        assert_eq!(calendar.games.labels(), vec!["V75"]);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/games/missing", mock_server.uri());
        let error = fetch::<GameDetail>(&client, &url).await.unwrap_err();
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(error.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/games/1", mock_server.uri());
        let error = fetch::<GameDetail>(&client, &url).await.unwrap_err();
        assert!(matches!(error, AppError::ApiServerError { status: 500, .. }));
        assert!(error.is_http_status_error());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop a listener so the port is very likely closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = create_test_http_client();
        let url = format!("http://127.0.0.1:{port}/games/1");
        let error = fetch::<GameDetail>(&client, &url).await.unwrap_err();
        assert!(error.is_network_error(), "unexpected error: {error:?}");
        assert!(!error.is_http_status_error());
    }
}
