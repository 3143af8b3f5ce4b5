//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod compare_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let error = CompareError::from(reqwest_error);

        match error {
            CompareError::Transport(_) => (),
            _ => panic!("Expected Transport error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = CompareError::from(json_error);

        match error {
            CompareError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
        assert!(CompareError::from(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err()
        )
        .is_invalid_source());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = CompareError::from(io_error);

        match error {
            CompareError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_api_status_is_transport() {
        let error = CompareError::ApiStatus {
            status: 503,
            body: "Service Unavailable".to_string(),
        };

        assert!(error.is_transport());
        assert!(!error.is_invalid_source());
        assert_eq!(error.to_string(), "MLB API returned status 503");
    }

    #[test]
    fn test_invalid_source_data_error() {
        let error = CompareError::invalid_source("people is not an array");

        assert!(error.is_invalid_source());
        assert!(!error.is_transport());
        let error_string = error.to_string();
        assert!(error_string.contains("Invalid source data"));
        assert!(error_string.contains("people is not an array"));
    }

    #[test]
    fn test_invalid_player_id_error() {
        let error = CompareError::InvalidPlayerId {
            value: "abc".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid player ID: abc");
        assert!(!error.is_transport());
    }

    #[test]
    fn test_invalid_season_error() {
        let error = CompareError::InvalidSeason {
            value: "20x5".to_string(),
        };

        assert!(error.to_string().contains("20x5"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = CompareError::invalid_source("stat is not an object");
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidSourceData"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<i32> {
            Err(CompareError::invalid_source("bad"))
        }

        let result = test_function();
        assert!(result.is_err());
        match result.unwrap_err() {
            CompareError::InvalidSourceData { message } => assert_eq!(message, "bad"),
            _ => panic!("Expected InvalidSourceData error"),
        }
    }
}
