//! Build errors.
//!
//! Every statement the build issues either succeeds or aborts the step it
//! belongs to. Database failures are classified by what the engine rejected
//! so callers can tell a bad row from a bad schema.
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::ConnectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// CHECK or NOT NULL rejection, or a domain value outside its set.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Reference to a parent row that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    /// Primary key already taken.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// Evolution step that cannot back-fill rows already in the table.
    #[error(
        "cannot apply `{migration}`: table `{table}` holds {rows} row(s) and the new columns have no default"
    )]
    PopulatedEvolution {
        migration: String,
        table: String,
        rows: i64,
    },

    /// Foreign key pointing at a table that has not been created.
    #[error("table `{child}` references missing table `{parent}`")]
    DanglingReference { child: String, parent: String },

    #[error("migration `{name}` failed: {message}")]
    Migration { name: String, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{entity} `{key}` not found")]
    NotFound { entity: &'static str, key: String },

    #[error(transparent)]
    Database(DieselError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl BuildError {
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    pub fn migration(name: impl Into<String>, message: impl ToString) -> Self {
        Self::Migration {
            name: name.into(),
            message: message.to_string(),
        }
    }

    /// Statement-level rejections: bad values and bad references.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Self::Constraint(_) | Self::ForeignKey(_) | Self::Duplicate(_)
        )
    }
}

impl From<DieselError> for BuildError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                        Self::Constraint(message)
                    }
                    DatabaseErrorKind::ForeignKeyViolation => Self::ForeignKey(message),
                    DatabaseErrorKind::UniqueViolation => Self::Duplicate(message),
                    _ => Self::Database(DieselError::DatabaseError(kind, info)),
                }
            }
            other => Self::Database(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
