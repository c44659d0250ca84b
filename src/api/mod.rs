//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! The API is divided into three functional areas:
//!
//! - **Doctores** (`/doctores/*`): Medical professional management
//! - **Pacientes** (`/pacientes/*`): Patient management
//! - **Citas** (`/citas/*`): Appointment scheduling, addressed by composite key
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! Interactive documentation is served at `/docs` when the server is running.

pub mod handlers;
pub mod models;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CitaSalud API",
        description = "Backend for scheduling medical appointments between doctores and pacientes"
    ),
    paths(
        handlers::doctores::list_doctores,
        handlers::doctores::get_doctor,
        handlers::doctores::create_doctor,
        handlers::doctores::update_doctor,
        handlers::doctores::delete_doctor,
        handlers::doctores::get_doctor_citas,
        handlers::pacientes::list_pacientes,
        handlers::pacientes::get_paciente,
        handlers::pacientes::create_paciente,
        handlers::pacientes::update_paciente,
        handlers::pacientes::delete_paciente,
        handlers::pacientes::get_paciente_citas,
        handlers::citas::list_citas,
        handlers::citas::get_cita,
        handlers::citas::create_cita,
        handlers::citas::update_cita,
        handlers::citas::delete_cita,
    ),
    components(schemas(
        models::doctores::Especialidad,
        models::doctores::DoctorCreate,
        models::doctores::DoctorUpdate,
        models::doctores::DoctorResponse,
        models::pacientes::PacienteCreate,
        models::pacientes::PacienteUpdate,
        models::pacientes::PacienteResponse,
        models::citas::CitaCreate,
        models::citas::CitaUpdate,
        models::citas::CitaResponse,
    )),
    tags(
        (name = "doctores", description = "Medical professional management"),
        (name = "pacientes", description = "Patient management"),
        (name = "citas", description = "Appointment scheduling")
    )
)]
pub struct ApiDoc;
