use thiserror::Error;

/// Result type alias using LandingError
pub type Result<T> = std::result::Result<T, LandingError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error that crosses the record-store boundary is classified by one of
/// these kinds. Each kind maps to a stable code for programmatic handling and
/// test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// A creation or update payload failed required-field, length or shape checks
    InvalidInput,
    /// A write targeted a record that does not exist
    NotFound,
    /// The store rejected a write: duplicate slug/name or a dangling page reference
    ConstraintViolation,
    /// The sample content sequence failed after its page was created
    PartialSeed,

    // Integration/IO
    Persistence,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::PartialSeed => "ERR_PARTIAL_SEED",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, entity id,
/// message, wrapped cause) to explain a failure without string matching.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (page id, slug, theme name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the wrapped cause, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for content operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandingError {
    // ===== Validation Errors =====
    /// A required field was empty or whitespace-only
    #[error("{entity}.{field} is required")]
    MissingField { entity: String, field: String },

    /// A field exceeded its maximum length (in characters)
    #[error("{entity}.{field} exceeds {max} characters (got {actual})")]
    FieldTooLong {
        entity: String,
        field: String,
        max: usize,
        actual: usize,
    },

    /// Slug is not a URL-safe identifier
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// A layout/style column held a value outside its enumeration
    #[error("Invalid value '{value}' for {field}")]
    InvalidChoice { field: String, value: String },

    // ===== Constraint Errors =====
    /// Another page already uses this slug
    #[error("Slug already in use: {slug}")]
    SlugTaken { slug: String },

    /// Another theme already uses this name
    #[error("Theme name already in use: {name}")]
    ThemeNameTaken { name: String },

    /// A component referenced a page that does not exist
    #[error("Component references missing page: {page_id}")]
    MissingPage { page_id: i64 },

    // ===== Lookup Errors =====
    /// Page not found for a write that needs it
    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: i64 },

    // ===== Generic Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<LandingError> for ExError {
    fn from(err: LandingError) -> Self {
        let message = err.to_string();
        match err {
            LandingError::MissingField { entity, .. }
            | LandingError::FieldTooLong { entity, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("validate")
                    .with_entity_id(entity)
                    .with_message(message)
            }

            LandingError::InvalidSlug { slug, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_entity_id(slug)
                .with_message(message),

            LandingError::InvalidChoice { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(field)
                .with_message(message),

            LandingError::SlugTaken { slug } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity_id(slug)
                .with_message(message),

            LandingError::ThemeNameTaken { name } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(name)
                    .with_message(message)
            }

            LandingError::MissingPage { page_id } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(page_id.to_string())
                    .with_message(message)
            }

            LandingError::PageNotFound { page_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(page_id.to_string())
                .with_message(message),

            LandingError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            LandingError::Internal { .. } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("update_page")
            .with_entity_id("42")
            .with_message("Page not found");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("update_page"));
        assert!(rendered.contains("(entity_id: 42)"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let cause = ExError::new(ExErrorKind::Persistence).with_message("disk full");
        let err = ExError::new(ExErrorKind::PartialSeed).with_source(cause);

        assert_eq!(
            err.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Persistence)
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
