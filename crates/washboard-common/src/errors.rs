#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("color parse error: {0}")]
    ColorParse(String),

    #[error("page lookup error: {0}")]
    PageLookup(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_error_display() {
        let err = SanitizeError::ColorParse("unrecognized color format: teal-ish".into());
        assert_eq!(
            err.to_string(),
            "color parse error: unrecognized color format: teal-ish"
        );

        let err = SanitizeError::PageLookup("store unavailable".into());
        assert_eq!(err.to_string(), "page lookup error: store unavailable");
    }
}
