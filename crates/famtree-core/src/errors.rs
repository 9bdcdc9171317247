use thiserror::Error;

/// Result type alias using FamilyTreeError
pub type Result<T> = std::result::Result<T, FamilyTreeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    CycleDetected,

    // Relationship
    /// A spouse or children relationship was requested but never established
    NoRelationship,
    /// A one-shot relationship (spouse) was already set
    AlreadySet,

    // Integration/IO
    Io,
    Serialization,
    ExternalService,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::NoRelationship => "ERR_NO_RELATIONSHIP",
            ExErrorKind::AlreadySet => "ERR_ALREADY_SET",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Produced from `FamilyTreeError` via `From`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    related_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            related_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (the person the operation was called on)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the ID of the other party (spouse, child)
    pub fn with_related_id(mut self, id: impl Into<String>) -> Self {
        self.related_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the related ID context, if any
    pub fn related_id(&self) -> Option<&str> {
        self.related_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(related_id) = &self.related_id {
            write!(f, " (related_id: {})", related_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for family tree operations
///
/// All variants are local, synchronous and recoverable by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FamilyTreeError {
    // ===== Lookup Errors =====
    /// Person not found in store
    #[error("Person not found: {person_id}")]
    PersonNotFound { person_id: String },

    /// A record with this identity is already in the store
    #[error("Person already exists: {person_id}")]
    DuplicatePerson { person_id: String },

    // ===== Relationship Errors =====
    /// `get_spouse` on a person without a spouse
    #[error("'{name}' has no spouse. Use `set_spouse` first.")]
    NoSpouse { person_id: String, name: String },

    /// `get_children` on a person without a children set
    #[error("'{name}' has no children. Use `add_children` first.")]
    NoChildren { person_id: String, name: String },

    /// One of the parties is already married
    #[error("Spouse of '{name}' is '{spouse_name}'.")]
    AlreadyMarried {
        person_id: String,
        name: String,
        spouse_id: String,
        spouse_name: String,
    },

    /// A person cannot be their own spouse
    #[error("Person cannot marry themselves: {person_id}")]
    SelfMarriage { person_id: String },

    // ===== Validation Errors =====
    /// `add_children` called with an empty list
    #[error("At least one child is required: {person_id}")]
    EmptyChildren { person_id: String },

    /// Person name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Gender string outside the closed `male|female` set
    #[error("Invalid gender `{value}`; expected male|female")]
    InvalidGender { value: String },

    // ===== Traversal Errors =====
    /// Guarded traversal reached a person that is already on the current path
    #[error("Cycle detected: person {person_id} is their own ancestor")]
    CycleDetected { person_id: String },

    // ===== Output Errors =====
    /// Filesystem failure while writing a document or diagram
    #[error("I/O error in {op}: {message}")]
    Io { op: String, message: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// External diagram engine failed or is unavailable
    #[error("Render engine error: {message}")]
    RenderEngine { message: String },

}

/// Conversion from FamilyTreeError to ExError
impl From<FamilyTreeError> for ExError {
    fn from(err: FamilyTreeError) -> Self {
        match err {
            FamilyTreeError::PersonNotFound { person_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(person_id)
                .with_message("Person not found"),

            FamilyTreeError::DuplicatePerson { person_id } => {
                ExError::new(ExErrorKind::AlreadySet)
                    .with_op("insert_person")
                    .with_entity_id(person_id)
                    .with_message("Person already exists")
            }

            FamilyTreeError::NoSpouse { person_id, name } => {
                ExError::new(ExErrorKind::NoRelationship)
                    .with_op("get_spouse")
                    .with_entity_id(person_id)
                    .with_message(format!("{} has no spouse", name))
            }

            FamilyTreeError::NoChildren { person_id, name } => {
                ExError::new(ExErrorKind::NoRelationship)
                    .with_op("get_children")
                    .with_entity_id(person_id)
                    .with_message(format!("{} has no children", name))
            }

            FamilyTreeError::AlreadyMarried {
                person_id,
                name,
                spouse_id,
                spouse_name,
            } => ExError::new(ExErrorKind::AlreadySet)
                .with_op("set_spouse")
                .with_entity_id(person_id)
                .with_related_id(spouse_id)
                .with_message(format!("{} is already married to {}", name, spouse_name)),

            FamilyTreeError::SelfMarriage { person_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("set_spouse")
                    .with_entity_id(person_id)
                    .with_message("Person cannot marry themselves")
            }

            FamilyTreeError::EmptyChildren { person_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("add_children")
                    .with_entity_id(person_id)
                    .with_message("At least one child is required")
            }

            FamilyTreeError::InvalidName { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("create_person")
                .with_message(format!("Invalid name: {}", reason)),

            FamilyTreeError::InvalidGender { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid gender: {}", value)),

            FamilyTreeError::CycleDetected { person_id } => {
                ExError::new(ExErrorKind::CycleDetected)
                    .with_entity_id(person_id)
                    .with_message("Person is their own ancestor")
            }

            FamilyTreeError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),

            FamilyTreeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            FamilyTreeError::RenderEngine { message } => {
                ExError::new(ExErrorKind::ExternalService)
                    .with_op("render_graphviz")
                    .with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for FamilyTreeError {
    fn from(err: serde_json::Error) -> Self {
        FamilyTreeError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Create an IO error tagged with the failing operation
pub fn io_error(op: &str, err: std::io::Error) -> FamilyTreeError {
    FamilyTreeError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}
