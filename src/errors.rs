use crate::db::errors::DbError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested resource not found
    #[error("{resource} with key {id} not found")]
    NotFound { resource: String, id: String },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(db_err) => match db_err {
                DbError::NotFound => StatusCode::NOT_FOUND,
                DbError::UniqueViolation { .. } => StatusCode::CONFLICT,
                DbError::ForeignKeyViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::CheckViolation { .. } => StatusCode::BAD_REQUEST,
                DbError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { resource, id } => format!("{resource} {id} no encontrado"),
            Error::Internal { .. } => "Error interno del servidor".to_string(),
            Error::Database(db_err) => match db_err {
                DbError::NotFound => "Registro no encontrado".to_string(),
                DbError::UniqueViolation { table, .. } => match table.as_deref() {
                    Some("citas") => "Ya existe una cita con esa fecha, doctor y paciente".to_string(),
                    Some("doctores") => "Ya existe un doctor con ese id_profesional".to_string(),
                    Some("pacientes") => "Ya existe un paciente con ese numero de cedula".to_string(),
                    _ => "El registro ya existe".to_string(),
                },
                DbError::ForeignKeyViolation { .. } => "El doctor o paciente referenciado no existe".to_string(),
                DbError::CheckViolation { .. } => "Datos invalidos".to_string(),
                DbError::Other(_) => "Error en la base de datos".to_string(),
            },
            Error::Other(_) => "Error interno del servidor".to_string(),
        }
    }

    /// Underlying error description attached to constraint and internal
    /// failures. Not-found responses carry no detail.
    fn error_detail(&self) -> Option<String> {
        match self {
            Error::NotFound { .. } | Error::Database(DbError::NotFound) => None,
            Error::Internal { operation } => Some(format!("Failed to {operation}")),
            Error::Database(
                DbError::UniqueViolation { message, .. }
                | DbError::ForeignKeyViolation { message, .. }
                | DbError::CheckViolation { message, .. },
            ) => Some(message.clone()),
            Error::Database(DbError::Other(err)) => Some(format!("{err:#}")),
            Error::Other(err) => Some(format!("{err:#}")),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Database(DbError::Other(_)) | Error::Internal { .. } | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Database(DbError::NotFound) | Error::NotFound { .. } => {
                tracing::debug!("Client error: {}", self);
            }
            Error::Database(_) => {
                tracing::warn!("Database constraint error: {}", self);
            }
        }

        let status = self.status_code();
        let body = match self.error_detail() {
            Some(detail) => json!({ "message": self.user_message(), "error": detail }),
            None => json!({ "message": self.user_message() }),
        };

        (status, axum::response::Json(body)).into_response()
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = Error::NotFound {
            resource: "Doctor".to_string(),
            id: "1".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let unique = Error::Database(DbError::UniqueViolation {
            constraint: Some("citas_pkey".to_string()),
            table: Some("citas".to_string()),
            message: "duplicate key value".to_string(),
        });
        assert_eq!(unique.status_code(), StatusCode::CONFLICT);

        let fk = Error::Database(DbError::ForeignKeyViolation {
            constraint: None,
            table: Some("citas".to_string()),
            message: "violates foreign key".to_string(),
        });
        assert_eq!(fk.status_code(), StatusCode::BAD_REQUEST);

        let internal = Error::Database(DbError::Other(anyhow::anyhow!("connection refused")));
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_carries_no_detail() {
        let err = Error::NotFound {
            resource: "Paciente".to_string(),
            id: "10".to_string(),
        };
        assert!(err.error_detail().is_none());
        assert_eq!(err.user_message(), "Paciente 10 no encontrado");
    }

    #[test]
    fn test_constraint_detail_is_attached() {
        let err = Error::Database(DbError::UniqueViolation {
            constraint: Some("citas_pkey".to_string()),
            table: Some("citas".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
        });
        assert_eq!(err.error_detail().as_deref(), Some("duplicate key value violates unique constraint"));
        assert_eq!(err.user_message(), "Ya existe una cita con esa fecha, doctor y paciente");
    }
}
