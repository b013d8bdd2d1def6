use thiserror::Error;

/// Failures raised by the resource services.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Holds the kind of record that was looked up.
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid request: {0}")]
    Invalid(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }

    pub fn invalid(msg: impl Into<String>) -> Self { Self::Invalid(msg.into()) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_kind_once() {
        assert_eq!(ServiceError::not_found("product").to_string(), "product not found");
        assert!(!ServiceError::invalid("negative amount").is_not_found());
    }
}
