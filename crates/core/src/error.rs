//! Structured error model.
//!
//! [`Error`] is the payload: a machine-stable code plus an optional
//! human-readable description. [`Exception`] is the carrier that propagates a
//! failure through `Result`, tagged with the architectural [`Layer`] that
//! raised it so an outer boundary can pick a layer-specific translation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, Exception>;

/// Result type used by application services / use cases.
pub type AppResult<T> = Result<T, Exception>;

/// Malformed input to a constructor or resolver.
///
/// Always a caller programming error; never retried.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("invalid argument: {parameter}")]
pub struct InvalidArgument {
    parameter: String,
}

impl InvalidArgument {
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Raise this condition as an exception of the caller's `layer`.
    ///
    /// There is no blanket `From` impl: domain and application code share one
    /// result type, so the layer has to be named at the conversion site.
    pub fn into_exception(self, layer: Layer) -> Exception {
        let error = Error {
            code: "invalid_argument".to_string(),
            description: Some(self.to_string()),
        };
        Exception::new(layer, error).with_cause(self)
    }
}

/// Structured error payload.
///
/// ## Invariants
/// - `code` is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: String,
    description: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ErrorDto {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TryFrom<ErrorDto> for Error {
    type Error = InvalidArgument;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        Self::new(value.code, value.description)
    }
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            description: value.description,
        }
    }
}

impl Error {
    /// Build an error payload; fails with `InvalidArgument("code")` on a blank code.
    pub fn new(code: impl Into<String>, description: Option<String>) -> Result<Self, InvalidArgument> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(InvalidArgument::new("code"));
        }
        Ok(Self { code, description })
    }

    pub fn with_code(code: impl Into<String>) -> Result<Self, InvalidArgument> {
        Self::new(code, None)
    }

    pub fn with_description(
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        Self::new(code, Some(description.into()))
    }

    /// Machine-stable code.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Architectural layer a failure was raised in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Business-rule violation inside the domain model.
    Domain,
    /// Orchestration / use-case failure.
    Application,
}

impl core::fmt::Display for Layer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Layer::Domain => f.write_str("domain"),
            Layer::Application => f.write_str("application"),
        }
    }
}

type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// A failure carrying an [`Error`] payload, tagged with the raising [`Layer`].
///
/// Domain and application exceptions share this shape; only the layer tag
/// differs. Build one with [`Exception::domain`] or [`Exception::application`]
/// and refine it with [`Exception::with_message`] / [`Exception::with_cause`]:
///
/// ```
/// use bedrock_core::{Error, Exception};
///
/// let err = Error::with_description("stock.negative", "stock cannot go below zero").unwrap();
/// let ex = Exception::domain(err);
/// assert_eq!(ex.to_string(), "stock cannot go below zero");
/// ```
#[derive(Debug, Clone)]
pub struct Exception {
    layer: Layer,
    message: Option<String>,
    error: Error,
    cause: Option<Cause>,
}

impl Exception {
    pub fn new(layer: Layer, error: Error) -> Self {
        Self {
            layer,
            message: None,
            error,
            cause: None,
        }
    }

    /// Business-rule violation raised by the domain layer.
    pub fn domain(error: Error) -> Self {
        Self::new(Layer::Domain, error)
    }

    /// Use-case failure raised by the application layer.
    pub fn application(error: Error) -> Self {
        Self::new(Layer::Application, error)
    }

    /// Attach an explicit message; it takes precedence over the payload.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the underlying cause, exposed through `source()`.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn is_domain(&self) -> bool {
        self.layer == Layer::Domain
    }

    pub fn is_application(&self) -> bool {
        self.layer == Layer::Application
    }

    /// The structured payload for boundary translation.
    pub fn error_details(&self) -> &Error {
        &self.error
    }

    pub fn code(&self) -> &str {
        self.error.code()
    }

    /// Displayed message: explicit message, else description, else code.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .or_else(|| self.error.description().filter(|d| !d.is_empty()))
            .unwrap_or_else(|| self.error.code())
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl core::fmt::Display for Exception {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Exception {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn empty_code_is_rejected() {
        let err = Error::new("", Some("x".to_string())).unwrap_err();
        assert_eq!(err, InvalidArgument::new("code"));
        assert_eq!(err.to_string(), "invalid argument: code");
    }

    #[test]
    fn blank_code_is_rejected() {
        assert!(Error::with_code("   ").is_err());
    }

    #[test]
    fn message_falls_back_to_code() {
        let ex = Exception::domain(Error::with_code("E1").unwrap());
        assert_eq!(ex.message(), "E1");
        assert_eq!(ex.to_string(), "E1");
    }

    #[test]
    fn message_prefers_description_over_code() {
        let ex = Exception::application(Error::with_description("E1", "boom").unwrap());
        assert_eq!(ex.to_string(), "boom");
    }

    #[test]
    fn explicit_message_wins() {
        let ex = Exception::domain(Error::with_description("E1", "boom").unwrap())
            .with_message("order already shipped");
        assert_eq!(ex.to_string(), "order already shipped");
        assert_eq!(ex.code(), "E1");
    }

    #[test]
    fn empty_description_is_skipped() {
        let ex = Exception::domain(Error::with_description("E1", "").unwrap());
        assert_eq!(ex.message(), "E1");
    }

    #[test]
    fn cause_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let ex = Exception::application(Error::with_code("storage").unwrap()).with_cause(io);

        let source = ex.source().unwrap();
        assert_eq!(source.to_string(), "disk on fire");
        assert!(ex.cause().is_some());
    }

    #[test]
    fn all_four_construction_shapes() {
        let error = Error::with_description("E1", "boom").unwrap();
        let cause = InvalidArgument::new("qty");

        let plain = Exception::domain(error.clone());
        let caused = Exception::domain(error.clone()).with_cause(cause.clone());
        let messaged = Exception::domain(error.clone()).with_message("msg");
        let full = Exception::domain(error.clone())
            .with_message("msg")
            .with_cause(cause);

        assert!(plain.source().is_none());
        assert!(caused.source().is_some());
        assert_eq!(messaged.to_string(), "msg");
        assert_eq!(full.to_string(), "msg");
        assert!(full.source().is_some());
        for ex in [plain, caused, messaged, full] {
            assert_eq!(ex.error_details(), &error);
        }
    }

    #[test]
    fn layers_are_disjoint() {
        let error = Error::with_code("E1").unwrap();
        let domain = Exception::domain(error.clone());
        let app = Exception::application(error);

        assert!(domain.is_domain() && !domain.is_application());
        assert!(app.is_application() && !app.is_domain());
        assert_ne!(domain.layer(), app.layer());
        assert_eq!(Layer::Domain.to_string(), "domain");
    }

    #[test]
    fn exception_propagates_with_question_mark() {
        fn reserve(qty: i64) -> DomainResult<i64> {
            if qty < 0 {
                let error = Error::with_code("qty.negative")
                    .map_err(|e| e.into_exception(Layer::Domain))?;
                return Err(Exception::domain(error));
            }
            Ok(qty)
        }

        fn use_case(qty: i64) -> AppResult<i64> {
            let reserved = reserve(qty)?;
            Ok(reserved * 2)
        }

        assert_eq!(use_case(2).unwrap(), 4);
        let err = use_case(-1).unwrap_err();
        assert!(err.is_domain());
        assert_eq!(err.code(), "qty.negative");
    }

    #[test]
    fn invalid_argument_converts_to_application_exception() {
        let ex = InvalidArgument::new("code").into_exception(Layer::Application);
        assert!(ex.is_application());
        assert_eq!(ex.code(), "invalid_argument");
        assert_eq!(ex.to_string(), "invalid argument: code");
        assert!(ex.source().is_some());
    }

    #[test]
    fn invalid_argument_in_domain_code_stays_domain() {
        fn reserve(code: &str) -> DomainResult<()> {
            let error = Error::with_code(code).map_err(|e| e.into_exception(Layer::Domain))?;
            Err(Exception::domain(error))
        }

        let err = reserve("").unwrap_err();
        assert_eq!(err.layer(), Layer::Domain);
        assert!(err.is_domain());
        assert_eq!(err.code(), "invalid_argument");

        let err = reserve("qty.negative").unwrap_err();
        assert_eq!(err.layer(), Layer::Domain);
        assert_eq!(err.code(), "qty.negative");
    }

    #[test]
    fn error_serde_round_trip() {
        let error = Error::with_description("E1", "boom").unwrap();
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "E1", "description": "boom" }));

        let back: Error = serde_json::from_value(json).unwrap();
        assert_eq!(back, error);

        let bare = serde_json::to_string(&Error::with_code("E2").unwrap()).unwrap();
        assert_eq!(bare, r#"{"code":"E2"}"#);
    }

    #[test]
    fn deserializing_blank_code_fails() {
        let result: Result<Error, _> = serde_json::from_str(r#"{"code":""}"#);
        assert!(result.is_err());
    }
}
