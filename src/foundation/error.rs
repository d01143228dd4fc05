pub type StepsceneResult<T> = Result<T, StepsceneError>;

#[derive(thiserror::Error, Debug)]
pub enum StepsceneError {
    /// A caller broke a documented contract (unknown element id, unregistered
    /// binder key, missing anchor). Not recoverable; drivers stop here.
    #[error("precondition violation: {0}")]
    Precondition(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StepsceneError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            StepsceneError::precondition("x")
                .to_string()
                .contains("precondition violation:")
        );
        assert!(
            StepsceneError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = StepsceneError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
