//! Shared identifier types.

use chrono::{DateTime, Utc};

/// Doctor primary key (`id_profesional`).
pub type DoctorId = i32;

/// Patient primary key, the national ID number (`id_numero_cedula`).
pub type PacienteId = i32;

/// Composite primary key of a cita.
///
/// Uniqueness spans the full triple. Two citas may share a timestamp and a
/// doctor (or a patient) as long as the third field differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CitaKey {
    pub fecha_hora: DateTime<Utc>,
    pub id_profesional: DoctorId,
    pub id_numero_cedula: PacienteId,
}

impl std::fmt::Display for CitaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, profesional {}, cedula {})",
            self.fecha_hora.to_rfc3339(),
            self.id_profesional,
            self.id_numero_cedula
        )
    }
}
