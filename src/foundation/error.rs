pub type TabmlResult<T> = Result<T, TabmlError>;

#[derive(thiserror::Error, Debug)]
pub enum TabmlError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("frame count {0} exceeds the 255-frame container limit")]
    FrameCountOverflow(usize),

    #[error("malformed container: {0}")]
    MalformedContainer(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TabmlError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedContainer(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            TabmlError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            TabmlError::invalid_color("x")
                .to_string()
                .contains("invalid color:")
        );
        assert!(
            TabmlError::malformed("x")
                .to_string()
                .contains("malformed container:")
        );
        assert!(
            TabmlError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
        assert!(
            TabmlError::FrameCountOverflow(300)
                .to_string()
                .contains("300")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = TabmlError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
