pub type ScrubResult<T> = Result<T, ScrubError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrubError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ScrubError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(ScrubError::script("x").to_string().contains("script error:"));
        assert!(
            ScrubError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn json_errors_map_to_serde() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ScrubError::from(err), ScrubError::Serde(_)));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = ScrubError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
