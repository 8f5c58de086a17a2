#![forbid(unsafe_code)]

//! Construction errors for the carousel controller.

/// Errors returned when a [`CarouselController`](crate::CarouselController)
/// cannot be constructed.
///
/// Every runtime operation on a constructed controller is infallible; these
/// are the only rejected inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The item list was empty. A carousel needs at least one item.
    EmptyItems,
    /// The supplied [`CarouselConfig`](crate::CarouselConfig) failed validation.
    InvalidConfig(Vec<String>),
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyItems => write!(f, "invalid argument: empty item list"),
            Self::InvalidConfig(errors) => {
                write!(f, "invalid carousel config: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for CarouselError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_message() {
        assert_eq!(
            CarouselError::EmptyItems.to_string(),
            "invalid argument: empty item list"
        );
    }

    #[test]
    fn invalid_config_joins_messages() {
        let err = CarouselError::InvalidConfig(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid carousel config: a; b");
    }
}
