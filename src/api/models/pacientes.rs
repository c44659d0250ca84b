//! API request/response models for pacientes.

use crate::db::models::pacientes::PacienteDBResponse;
use crate::types::PacienteId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PacienteCreate {
    /// National ID number, used as the primary key.
    #[serde(rename = "id_numeroCedula")]
    pub id_numero_cedula: PacienteId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PacienteUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PacienteResponse {
    #[serde(rename = "id_numeroCedula")]
    pub id_numero_cedula: PacienteId,
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub fecha_nacimiento: NaiveDate,
}

impl From<PacienteDBResponse> for PacienteResponse {
    fn from(db: PacienteDBResponse) -> Self {
        Self {
            id_numero_cedula: db.id_numero_cedula,
            nombre: db.nombre,
            apellido: db.apellido,
            telefono: db.telefono,
            fecha_nacimiento: db.fecha_nacimiento,
        }
    }
}
