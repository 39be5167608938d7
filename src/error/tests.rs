//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod opfl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = OpflError::from(json_error);

        match error {
            OpflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = OpflError::from(io_error);

        match error {
            OpflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "week_twelve".parse::<u16>().unwrap_err();
        let error = OpflError::from(parse_error);

        match error {
            OpflError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_malformed_entry_error() {
        let error = OpflError::MalformedEntry {
            reason: "empty player name".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Malformed roster entry"));
        assert!(error_string.contains("empty player name"));
    }

    #[test]
    fn test_invalid_position_error() {
        let error = OpflError::InvalidPosition {
            position: "LB".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid position: LB");
    }

    #[test]
    fn test_invalid_threshold_error() {
        let error = OpflError::InvalidThreshold { value: 1.5 };
        let error_string = error.to_string();
        assert!(error_string.contains("[0, 1]"));
        assert!(error_string.contains("1.5"));
    }

    #[test]
    fn test_invalid_team_code_error() {
        let error = OpflError::InvalidTeamCode {
            code: "K C".to_string(),
        };
        assert!(error.to_string().contains("\"K C\""));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = OpflError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(OpflError::MissingInput {
                what: "roster file".to_string(),
            })
        }

        match test_function().unwrap_err() {
            OpflError::MissingInput { what } => assert_eq!(what, "roster file"),
            _ => panic!("Expected MissingInput error"),
        }
    }
}
