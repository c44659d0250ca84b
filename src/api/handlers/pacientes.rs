use crate::api::models::citas::CitaResponse;
use crate::api::models::pacientes::{PacienteCreate, PacienteResponse, PacienteUpdate};
use crate::api::models::ApiResponse;
use crate::db::handlers::{Citas, Pacientes, Repository};
use crate::db::models::pacientes::{PacienteCreateDBRequest, PacienteUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::PacienteId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/pacientes",
    tag = "pacientes",
    summary = "List pacientes",
    responses(
        (status = 200, description = "All registered pacientes", body = ApiResponse<Vec<PacienteResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_pacientes(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<PacienteResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Pacientes::new(&mut conn);

    let pacientes = repo.list().await?;
    Ok(Json(ApiResponse::with_data(
        "Pacientes obtenidos correctamente",
        pacientes.into_iter().map(PacienteResponse::from).collect::<Vec<_>>(),
    )))
}

#[utoipa::path(
    get,
    path = "/pacientes/{id}",
    tag = "pacientes",
    summary = "Get paciente",
    responses(
        (status = 200, description = "Paciente details", body = ApiResponse<PacienteResponse>),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "National ID number")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_paciente(
    State(state): State<AppState>,
    Path(id): Path<PacienteId>,
) -> Result<Json<ApiResponse<PacienteResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Pacientes::new(&mut conn);

    match repo.get(id).await? {
        Some(paciente) => Ok(Json(ApiResponse::with_data(
            "Paciente obtenido correctamente",
            PacienteResponse::from(paciente),
        ))),
        None => Err(Error::NotFound {
            resource: "Paciente".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    post,
    path = "/pacientes",
    tag = "pacientes",
    summary = "Create paciente",
    request_body = PacienteCreate,
    responses(
        (status = 201, description = "Paciente created successfully", body = ApiResponse<PacienteResponse>),
        (status = 409, description = "National ID number already registered"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_paciente(
    State(state): State<AppState>,
    Json(create): Json<PacienteCreate>,
) -> Result<(StatusCode, Json<ApiResponse<PacienteResponse>>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Pacientes::new(&mut conn);
    let request = PacienteCreateDBRequest::from(create);

    let paciente = repo.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Paciente creado correctamente",
            PacienteResponse::from(paciente),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/pacientes/{id}",
    tag = "pacientes",
    summary = "Update paciente",
    request_body = PacienteUpdate,
    responses(
        (status = 200, description = "Paciente updated successfully", body = ApiResponse<PacienteResponse>),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "National ID number")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_paciente(
    State(state): State<AppState>,
    Path(id): Path<PacienteId>,
    Json(update): Json<PacienteUpdate>,
) -> Result<Json<ApiResponse<PacienteResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Pacientes::new(&mut conn);
    let request = PacienteUpdateDBRequest::from(update);

    let paciente = repo.update(id, &request).await?;
    Ok(Json(ApiResponse::with_data(
        "Paciente actualizado correctamente",
        PacienteResponse::from(paciente),
    )))
}

#[utoipa::path(
    delete,
    path = "/pacientes/{id}",
    tag = "pacientes",
    summary = "Delete paciente",
    responses(
        (status = 200, description = "Paciente deleted successfully"),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "National ID number")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_paciente(
    State(state): State<AppState>,
    Path(id): Path<PacienteId>,
) -> Result<Json<ApiResponse<()>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Pacientes::new(&mut conn);

    if repo.delete(id).await? {
        Ok(Json(ApiResponse::message("Paciente eliminado correctamente")))
    } else {
        Err(Error::NotFound {
            resource: "Paciente".to_string(),
            id: id.to_string(),
        })
    }
}

#[utoipa::path(
    get,
    path = "/pacientes/{id}/citas",
    tag = "pacientes",
    summary = "List citas of a paciente",
    responses(
        (status = 200, description = "Citas referencing the paciente", body = ApiResponse<Vec<CitaResponse>>),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "National ID number")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_paciente_citas(
    State(state): State<AppState>,
    Path(id): Path<PacienteId>,
) -> Result<Json<ApiResponse<Vec<CitaResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    {
        let mut repo = Pacientes::new(&mut conn);
        if repo.get(id).await?.is_none() {
            return Err(Error::NotFound {
                resource: "Paciente".to_string(),
                id: id.to_string(),
            });
        }
    }

    let mut repo = Citas::new(&mut conn);
    let citas = repo.list_for_paciente(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Citas del paciente obtenidas correctamente",
        citas.into_iter().map(CitaResponse::from).collect::<Vec<_>>(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_paciente_crud_scenario(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/pacientes")
            .json(&json!({
                "id_numeroCedula": 10,
                "nombre": "Luis",
                "apellido": "Mora",
                "telefono": "8888",
                "fecha_nacimiento": "1990-05-20"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        // The list surfaces the wire-format field name.
        let response = app.get("/pacientes").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["id_numeroCedula"], 10);
        assert_eq!(body["data"][0]["fecha_nacimiento"], "1990-05-20");

        // Partial update keeps unnamed fields.
        let response = app.put("/pacientes/10").json(&json!({"telefono": "7777"})).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["telefono"], "7777");
        assert_eq!(body["data"]["nombre"], "Luis");

        let response = app.delete("/pacientes/10").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Paciente eliminado correctamente");
        assert!(body.get("data").is_none());

        app.get("/pacientes/10").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_missing_paciente_is_not_found(pool: PgPool) {
        let app = create_test_app(pool).await;

        let response = app.delete("/pacientes/404").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Paciente 404 no encontrado");
    }
}
