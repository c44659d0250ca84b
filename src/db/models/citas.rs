//! Database models for citas.

use crate::api::models::citas::{CitaCreate, CitaUpdate};
use crate::types::{DoctorId, PacienteId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a cita. The three fields are the entire row;
/// the database enforces the doctor/patient references and triple uniqueness.
#[derive(Debug, Clone)]
pub struct CitaCreateDBRequest {
    pub fecha_hora: DateTime<Utc>,
    pub id_profesional: DoctorId,
    pub id_numero_cedula: PacienteId,
}

impl From<CitaCreate> for CitaCreateDBRequest {
    fn from(api: CitaCreate) -> Self {
        Self {
            fecha_hora: api.fecha_hora,
            id_profesional: api.id_profesional,
            id_numero_cedula: api.id_numero_cedula,
        }
    }
}

/// Database request for a partial cita update (any subset of the key triple)
#[derive(Debug, Clone, Default)]
pub struct CitaUpdateDBRequest {
    pub fecha_hora: Option<DateTime<Utc>>,
    pub id_profesional: Option<DoctorId>,
    pub id_numero_cedula: Option<PacienteId>,
}

impl From<CitaUpdate> for CitaUpdateDBRequest {
    fn from(api: CitaUpdate) -> Self {
        Self {
            fecha_hora: api.fecha_hora,
            id_profesional: api.id_profesional,
            id_numero_cedula: api.id_numero_cedula,
        }
    }
}

/// Database response for a cita row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CitaDBResponse {
    pub fecha_hora: DateTime<Utc>,
    pub id_profesional: DoctorId,
    pub id_numero_cedula: PacienteId,
}
