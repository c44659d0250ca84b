//! Shared helpers for integration tests.

use crate::api::models::doctores::Especialidad;
use crate::config::Config;
use crate::db::handlers::{Doctores, Pacientes, Repository};
use crate::db::models::{
    citas::CitaCreateDBRequest,
    doctores::DoctorCreateDBRequest,
    pacientes::PacienteCreateDBRequest,
};
use crate::types::{DoctorId, PacienteId};
use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

/// Build a test server over an existing pool (migrations are handled by the
/// `#[sqlx::test]` harness).
pub async fn create_test_app(pool: PgPool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    }
}

pub fn doctor_create_request(id: DoctorId) -> DoctorCreateDBRequest {
    DoctorCreateDBRequest {
        id_profesional: id,
        nombre: "Ana".to_string(),
        apellido: "Ruiz".to_string(),
        correo: format!("doctor{id}@citasalud.test"),
        telefono: "555-0100".to_string(),
        especialidad: Especialidad::MedicinaGeneral,
    }
}

pub fn paciente_create_request(id: PacienteId) -> PacienteCreateDBRequest {
    PacienteCreateDBRequest {
        id_numero_cedula: id,
        nombre: "Luis".to_string(),
        apellido: "Mora".to_string(),
        telefono: "555-0200".to_string(),
        fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
    }
}

pub fn cita_create_request(fecha_hora: DateTime<Utc>, doctor: DoctorId, paciente: PacienteId) -> CitaCreateDBRequest {
    CitaCreateDBRequest {
        fecha_hora,
        id_profesional: doctor,
        id_numero_cedula: paciente,
    }
}

pub async fn seed_doctor(pool: &PgPool, id: DoctorId) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Doctores::new(&mut conn)
        .create(&doctor_create_request(id))
        .await
        .expect("Failed to seed doctor");
}

pub async fn seed_paciente(pool: &PgPool, id: PacienteId) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Pacientes::new(&mut conn)
        .create(&paciente_create_request(id))
        .await
        .expect("Failed to seed paciente");
}
