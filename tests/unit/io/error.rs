//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use truchetize::TruchetError;
    use truchetize::io::error::{file_system_error, invalid_parameter, render_error};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/test.png", "read", io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests ImageTooSmall reports both dimensions and the cell length
    // Verified by omitting the height from the message
    #[test]
    fn test_image_too_small_error() {
        let error = TruchetError::ImageTooSmall {
            width: 3,
            height: 1,
            length: 4,
        };

        let message = error.to_string();
        assert!(message.contains("3x1"));
        assert!(message.contains("4x4"));
        assert!(error.source().is_none());
    }

    // Tests InvalidPattern names the rejected tag
    // Verified by dropping the tag from the message
    #[test]
    fn test_invalid_pattern_error() {
        let error = TruchetError::InvalidPattern {
            tag: "Q".to_string(),
        };
        assert!(error.to_string().contains("'Q'"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("length", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("length"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = TruchetError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests Render error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_render_error() {
        let error = render_error("pixmap allocation", &"too large");

        let message = error.to_string();
        assert!(message.contains("pixmap allocation"));
        assert!(message.contains("too large"));
    }
}
