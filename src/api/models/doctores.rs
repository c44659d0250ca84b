//! API request/response models for doctores.

use crate::db::models::doctores::DoctorDBResponse;
use crate::types::DoctorId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Medical specialty. Only two values exist in this practice; anything else
/// is rejected at deserialization and again by the Postgres enum type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "especialidad", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Especialidad {
    MedicinaInterna,
    MedicinaGeneral,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorCreate {
    pub id_profesional: DoctorId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub especialidad: Especialidad,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DoctorUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<Especialidad>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorResponse {
    pub id_profesional: DoctorId,
    pub nombre: String,
    pub apellido: String,
    pub correo: String,
    pub telefono: String,
    pub especialidad: Especialidad,
}

impl From<DoctorDBResponse> for DoctorResponse {
    fn from(db: DoctorDBResponse) -> Self {
        Self {
            id_profesional: db.id_profesional,
            nombre: db.nombre,
            apellido: db.apellido,
            correo: db.correo,
            telefono: db.telefono,
            especialidad: db.especialidad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_especialidad_snake_case_wire_format() {
        assert_eq!(
            serde_json::to_string(&Especialidad::MedicinaInterna).unwrap(),
            "\"medicina_interna\""
        );
        assert_eq!(
            serde_json::to_string(&Especialidad::MedicinaGeneral).unwrap(),
            "\"medicina_general\""
        );
    }

    #[test]
    fn test_especialidad_rejects_unknown_value() {
        let result: Result<Especialidad, _> = serde_json::from_str("\"cardiologia\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_doctor_create_deserializes_spec_payload() {
        let doctor: DoctorCreate = serde_json::from_str(
            r#"{
                "id_profesional": 1,
                "nombre": "Ana",
                "apellido": "Ruiz",
                "correo": "a@x.com",
                "telefono": "555",
                "especialidad": "medicina_general"
            }"#,
        )
        .unwrap();

        assert_eq!(doctor.id_profesional, 1);
        assert_eq!(doctor.especialidad, Especialidad::MedicinaGeneral);
    }
}
