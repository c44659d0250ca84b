//! Database models for doctores.

use crate::api::models::doctores::{DoctorCreate, DoctorUpdate, Especialidad};
use crate::types::DoctorId;
use sqlx::FromRow;

/// Database request for creating a doctor. The primary key is caller-supplied
/// (professional registry number), never generated.
#[derive(Debug, Clone)]
pub struct DoctorCreateDBRequest {
    pub id_profesional: DoctorId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub especialidad: Especialidad,
}

impl From<DoctorCreate> for DoctorCreateDBRequest {
    fn from(api: DoctorCreate) -> Self {
        Self {
            id_profesional: api.id_profesional,
            nombre: api.nombre,
            apellido: api.apellido,
            correo: api.correo,
            telefono: api.telefono,
            especialidad: api.especialidad,
        }
    }
}

/// Database request for a partial doctor update
#[derive(Debug, Clone, Default)]
pub struct DoctorUpdateDBRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<Especialidad>,
}

impl From<DoctorUpdate> for DoctorUpdateDBRequest {
    fn from(api: DoctorUpdate) -> Self {
        Self {
            nombre: api.nombre,
            apellido: api.apellido,
            correo: api.correo,
            telefono: api.telefono,
            especialidad: api.especialidad,
        }
    }
}

/// Database response for a doctor row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DoctorDBResponse {
    pub id_profesional: DoctorId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub especialidad: Especialidad,
}
