//! Database models for pacientes.

use crate::api::models::pacientes::{PacienteCreate, PacienteUpdate};
use crate::types::PacienteId;
use chrono::NaiveDate;
use sqlx::FromRow;

/// Database request for creating a patient, keyed by the national ID number.
#[derive(Debug, Clone)]
pub struct PacienteCreateDBRequest {
    pub id_numero_cedula: PacienteId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}

impl From<PacienteCreate> for PacienteCreateDBRequest {
    fn from(api: PacienteCreate) -> Self {
        Self {
            id_numero_cedula: api.id_numero_cedula,
            nombre: api.nombre,
            apellido: api.apellido,
            telefono: api.telefono,
            fecha_nacimiento: api.fecha_nacimiento,
        }
    }
}

/// Database request for a partial patient update
#[derive(Debug, Clone, Default)]
pub struct PacienteUpdateDBRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl From<PacienteUpdate> for PacienteUpdateDBRequest {
    fn from(api: PacienteUpdate) -> Self {
        Self {
            nombre: api.nombre,
            apellido: api.apellido,
            telefono: api.telefono,
            fecha_nacimiento: api.fecha_nacimiento,
        }
    }
}

/// Database response for a patient row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PacienteDBResponse {
    pub id_numero_cedula: PacienteId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}
