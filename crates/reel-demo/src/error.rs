use reel_core::{CarouselError, ConfigError, RosterError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster: {0}")]
    Roster(#[from] RosterError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("carousel: {0}")]
    Carousel(#[from] CarouselError),

    #[error("program thread panicked")]
    ProgramPanicked,
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Roster(_) | Self::Config(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_exit_with_usage_code() {
        assert_eq!(DemoError::from(RosterError::Empty).exit_code(), 2);
        assert_eq!(
            DemoError::from(ConfigError::Validation(vec!["x".into()])).exit_code(),
            2
        );
        assert_eq!(DemoError::ProgramPanicked.exit_code(), 1);
    }

    #[test]
    fn display_wraps_source() {
        let err = DemoError::from(CarouselError::EmptyItems);
        assert_eq!(err.to_string(), "carousel: invalid argument: empty item list");
    }
}
