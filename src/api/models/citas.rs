//! API request/response models for citas.

use crate::db::models::citas::CitaDBResponse;
use crate::types::{CitaKey, DoctorId, PacienteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CitaCreate {
    pub fecha_hora: DateTime<Utc>,
    pub id_profesional: DoctorId,
    #[serde(rename = "id_numeroCedula")]
    pub id_numero_cedula: PacienteId,
}

/// Partial update. All three columns form the primary key, so an update may
/// move a cita to a new triple; landing on an occupied one is a conflict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CitaUpdate {
    pub fecha_hora: Option<DateTime<Utc>>,
    pub id_profesional: Option<DoctorId>,
    #[serde(rename = "id_numeroCedula")]
    pub id_numero_cedula: Option<PacienteId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CitaResponse {
    pub fecha_hora: DateTime<Utc>,
    pub id_profesional: DoctorId,
    #[serde(rename = "id_numeroCedula")]
    pub id_numero_cedula: PacienteId,
}

impl From<CitaDBResponse> for CitaResponse {
    fn from(db: CitaDBResponse) -> Self {
        Self {
            fecha_hora: db.fecha_hora,
            id_profesional: db.id_profesional,
            id_numero_cedula: db.id_numero_cedula,
        }
    }
}

/// Query parameters addressing one cita by its composite key.
/// All three are required.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CitaKeyQuery {
    /// Doctor id (`id_profesional`)
    pub profesional: DoctorId,
    /// Patient national ID (`id_numeroCedula`)
    pub paciente: PacienteId,
    /// Appointment timestamp, RFC 3339
    pub fecha: DateTime<Utc>,
}

impl From<CitaKeyQuery> for CitaKey {
    fn from(query: CitaKeyQuery) -> Self {
        Self {
            fecha_hora: query.fecha,
            id_profesional: query.profesional,
            id_numero_cedula: query.paciente,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cita_round_trips_spec_payload() {
        let cita: CitaCreate = serde_json::from_str(
            r#"{
                "fecha_hora": "2024-01-01T10:00:00Z",
                "id_profesional": 1,
                "id_numeroCedula": 10
            }"#,
        )
        .unwrap();
        assert_eq!(cita.id_profesional, 1);
        assert_eq!(cita.id_numero_cedula, 10);
        assert_eq!(cita.fecha_hora.to_rfc3339(), "2024-01-01T10:00:00+00:00");
    }

    #[test]
    fn test_key_query_maps_onto_composite_key() {
        let query = CitaKeyQuery {
            profesional: 1,
            paciente: 10,
            fecha: "2024-01-01T10:00:00Z".parse().unwrap(),
        };
        let key = CitaKey::from(query);
        assert_eq!(key.id_profesional, 1);
        assert_eq!(key.id_numero_cedula, 10);
        assert_eq!(key.fecha_hora.to_rfc3339(), "2024-01-01T10:00:00+00:00");
    }
}
