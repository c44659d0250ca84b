//! Handlers for citas. A cita has no surrogate id; every keyed route
//! addresses one through the (fecha, profesional, paciente) query triple.

use crate::api::models::citas::{CitaCreate, CitaKeyQuery, CitaResponse, CitaUpdate};
use crate::api::models::ApiResponse;
use crate::db::handlers::{Citas, Repository};
use crate::db::models::citas::{CitaCreateDBRequest, CitaUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::CitaKey;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/citas",
    tag = "citas",
    summary = "List citas",
    responses(
        (status = 200, description = "All scheduled citas", body = ApiResponse<Vec<CitaResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_citas(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<CitaResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Citas::new(&mut conn);

    let citas = repo.list().await?;
    Ok(Json(ApiResponse::with_data(
        "Citas obtenidas correctamente",
        citas.into_iter().map(CitaResponse::from).collect::<Vec<_>>(),
    )))
}

#[utoipa::path(
    get,
    path = "/citas/uno",
    tag = "citas",
    summary = "Get one cita by its composite key",
    responses(
        (status = 200, description = "Cita details", body = ApiResponse<CitaResponse>),
        (status = 404, description = "Cita not found"),
        (status = 500, description = "Internal server error")
    ),
    params(CitaKeyQuery)
)]
#[tracing::instrument(skip_all)]
pub async fn get_cita(
    State(state): State<AppState>,
    Query(query): Query<CitaKeyQuery>,
) -> Result<Json<ApiResponse<CitaResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Citas::new(&mut conn);
    let key = CitaKey::from(query);

    match repo.get(key).await? {
        Some(cita) => Ok(Json(ApiResponse::with_data(
            "Cita obtenida correctamente",
            CitaResponse::from(cita),
        ))),
        None => Err(Error::NotFound {
            resource: "Cita".to_string(),
            id: key.to_string(),
        }),
    }
}

#[utoipa::path(
    post,
    path = "/citas",
    tag = "citas",
    summary = "Schedule cita",
    request_body = CitaCreate,
    responses(
        (status = 201, description = "Cita scheduled successfully", body = ApiResponse<CitaResponse>),
        (status = 400, description = "Referenced doctor or paciente does not exist"),
        (status = 409, description = "The (fecha, doctor, paciente) triple is already taken"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_cita(
    State(state): State<AppState>,
    Json(create): Json<CitaCreate>,
) -> Result<(StatusCode, Json<ApiResponse<CitaResponse>>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Citas::new(&mut conn);
    let request = CitaCreateDBRequest::from(create);

    let cita = repo.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Cita creada correctamente", CitaResponse::from(cita))),
    ))
}

#[utoipa::path(
    put,
    path = "/citas",
    tag = "citas",
    summary = "Reschedule cita",
    request_body = CitaUpdate,
    responses(
        (status = 200, description = "Cita updated successfully", body = ApiResponse<CitaResponse>),
        (status = 404, description = "Cita not found"),
        (status = 409, description = "The target triple is already taken"),
        (status = 500, description = "Internal server error")
    ),
    params(CitaKeyQuery)
)]
#[tracing::instrument(skip_all)]
pub async fn update_cita(
    State(state): State<AppState>,
    Query(query): Query<CitaKeyQuery>,
    Json(update): Json<CitaUpdate>,
) -> Result<Json<ApiResponse<CitaResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Citas::new(&mut conn);
    let key = CitaKey::from(query);
    let request = CitaUpdateDBRequest::from(update);

    let cita = repo.update(key, &request).await?;
    Ok(Json(ApiResponse::with_data(
        "Cita actualizada correctamente",
        CitaResponse::from(cita),
    )))
}

#[utoipa::path(
    delete,
    path = "/citas",
    tag = "citas",
    summary = "Cancel cita",
    responses(
        (status = 200, description = "Cita deleted successfully"),
        (status = 404, description = "Cita not found"),
        (status = 500, description = "Internal server error")
    ),
    params(CitaKeyQuery)
)]
#[tracing::instrument(skip_all)]
pub async fn delete_cita(
    State(state): State<AppState>,
    Query(query): Query<CitaKeyQuery>,
) -> Result<Json<ApiResponse<()>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Citas::new(&mut conn);
    let key = CitaKey::from(query);

    if repo.delete(key).await? {
        Ok(Json(ApiResponse::message("Cita eliminada correctamente")))
    } else {
        Err(Error::NotFound {
            resource: "Cita".to_string(),
            id: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{create_test_app, seed_doctor, seed_paciente};
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_cita_schedule_and_cancel_scenario(pool: PgPool) {
        let app = create_test_app(pool).await;

        app.post("/pacientes")
            .json(&json!({
                "id_numeroCedula": 10,
                "nombre": "Luis",
                "apellido": "Mora",
                "telefono": "8888",
                "fecha_nacimiento": "1990-05-20"
            }))
            .await
            .assert_status(StatusCode::CREATED);
        app.post("/doctores")
            .json(&json!({
                "id_profesional": 1,
                "nombre": "Ana",
                "apellido": "Ruiz",
                "correo": "a@x.com",
                "telefono": "555",
                "especialidad": "medicina_general"
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app
            .post("/citas")
            .json(&json!({
                "fecha_hora": "2024-01-01T10:00:00Z",
                "id_profesional": 1,
                "id_numeroCedula": 10
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["id_numeroCedula"], 10);

        let key = "profesional=1&paciente=10&fecha=2024-01-01T10:00:00Z";
        let response = app.get(&format!("/citas/uno?{key}")).await;
        response.assert_status_ok();

        let response = app.delete(&format!("/citas?{key}")).await;
        response.assert_status_ok();

        // Second cancel of the same triple misses.
        let response = app.delete(&format!("/citas?{key}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_dangling_cita_is_bad_request(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/citas")
            .json(&json!({
                "fecha_hora": "2024-01-01T10:00:00Z",
                "id_profesional": 99,
                "id_numeroCedula": 99
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "El doctor o paciente referenciado no existe");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_double_booking_same_triple_is_conflict(pool: PgPool) {
        seed_doctor(&pool, 1).await;
        seed_paciente(&pool, 10).await;
        let app = create_test_app(pool).await;

        let payload = json!({
            "fecha_hora": "2024-01-01T10:00:00Z",
            "id_profesional": 1,
            "id_numeroCedula": 10
        });
        app.post("/citas").json(&payload).await.assert_status(StatusCode::CREATED);

        let response = app.post("/citas").json(&payload).await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["message"], "Ya existe una cita con esa fecha, doctor y paciente");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_reschedule_moves_the_key(pool: PgPool) {
        seed_doctor(&pool, 1).await;
        seed_paciente(&pool, 10).await;
        let app = create_test_app(pool).await;

        app.post("/citas")
            .json(&json!({
                "fecha_hora": "2024-01-01T10:00:00Z",
                "id_profesional": 1,
                "id_numeroCedula": 10
            }))
            .await
            .assert_status(StatusCode::CREATED);

        let old_key = "profesional=1&paciente=10&fecha=2024-01-01T10:00:00Z";
        let response = app
            .put(&format!("/citas?{old_key}"))
            .json(&json!({"fecha_hora": "2024-01-02T09:30:00Z"}))
            .await;
        response.assert_status_ok();

        // The old triple no longer resolves, the new one does.
        app.get(&format!("/citas/uno?{old_key}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        app.get("/citas/uno?profesional=1&paciente=10&fecha=2024-01-02T09:30:00Z")
            .await
            .assert_status_ok();
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_missing_key_parameter_is_client_error(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.get("/citas/uno?profesional=1&paciente=10").await;
        assert!(response.status_code().is_client_error());
    }
}
