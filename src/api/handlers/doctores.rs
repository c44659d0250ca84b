use crate::api::models::citas::CitaResponse;
use crate::api::models::doctores::{DoctorCreate, DoctorResponse, DoctorUpdate};
use crate::api::models::ApiResponse;
use crate::db::handlers::{Citas, Doctores, Repository};
use crate::db::models::doctores::{DoctorCreateDBRequest, DoctorUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::DoctorId;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/doctores",
    tag = "doctores",
    summary = "List doctores",
    responses(
        (status = 200, description = "All registered doctores", body = ApiResponse<Vec<DoctorResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_doctores(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<DoctorResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Doctores::new(&mut conn);

    let doctores = repo.list().await?;
    Ok(Json(ApiResponse::with_data(
        "Doctores obtenidos correctamente",
        doctores.into_iter().map(DoctorResponse::from).collect::<Vec<_>>(),
    )))
}

#[utoipa::path(
    get,
    path = "/doctores/{id}",
    tag = "doctores",
    summary = "Get doctor",
    responses(
        (status = 200, description = "Doctor details", body = ApiResponse<DoctorResponse>),
        (status = 404, description = "Doctor not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Professional id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<DoctorId>,
) -> Result<Json<ApiResponse<DoctorResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Doctores::new(&mut conn);

    match repo.get(id).await? {
        Some(doctor) => Ok(Json(ApiResponse::with_data(
            "Doctor obtenido correctamente",
            DoctorResponse::from(doctor),
        ))),
        None => Err(Error::NotFound {
            resource: "Doctor".to_string(),
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    post,
    path = "/doctores",
    tag = "doctores",
    summary = "Create doctor",
    request_body = DoctorCreate,
    responses(
        (status = 201, description = "Doctor created successfully", body = ApiResponse<DoctorResponse>),
        (status = 409, description = "Professional id already registered"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(create): Json<DoctorCreate>,
) -> Result<(StatusCode, Json<ApiResponse<DoctorResponse>>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Doctores::new(&mut conn);
    let request = DoctorCreateDBRequest::from(create);

    let doctor = repo.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Doctor creado correctamente", DoctorResponse::from(doctor))),
    ))
}

#[utoipa::path(
    put,
    path = "/doctores/{id}",
    tag = "doctores",
    summary = "Update doctor",
    request_body = DoctorUpdate,
    responses(
        (status = 200, description = "Doctor updated successfully", body = ApiResponse<DoctorResponse>),
        (status = 404, description = "Doctor not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Professional id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<DoctorId>,
    Json(update): Json<DoctorUpdate>,
) -> Result<Json<ApiResponse<DoctorResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Doctores::new(&mut conn);
    let request = DoctorUpdateDBRequest::from(update);

    let doctor = repo.update(id, &request).await?;
    Ok(Json(ApiResponse::with_data(
        "Doctor actualizado correctamente",
        DoctorResponse::from(doctor),
    )))
}

#[utoipa::path(
    delete,
    path = "/doctores/{id}",
    tag = "doctores",
    summary = "Delete doctor",
    responses(
        (status = 200, description = "Doctor deleted successfully"),
        (status = 404, description = "Doctor not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Professional id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_doctor(State(state): State<AppState>, Path(id): Path<DoctorId>) -> Result<Json<ApiResponse<()>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Doctores::new(&mut conn);

    if repo.delete(id).await? {
        Ok(Json(ApiResponse::message("Doctor eliminado correctamente")))
    } else {
        Err(Error::NotFound {
            resource: "Doctor".to_string(),
            id: id.to_string(),
        })
    }
}

#[utoipa::path(
    get,
    path = "/doctores/{id}/citas",
    tag = "doctores",
    summary = "List citas of a doctor",
    responses(
        (status = 200, description = "Citas referencing the doctor", body = ApiResponse<Vec<CitaResponse>>),
        (status = 404, description = "Doctor not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i32, Path, description = "Professional id")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_doctor_citas(
    State(state): State<AppState>,
    Path(id): Path<DoctorId>,
) -> Result<Json<ApiResponse<Vec<CitaResponse>>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    {
        let mut repo = Doctores::new(&mut conn);
        if repo.get(id).await?.is_none() {
            return Err(Error::NotFound {
                resource: "Doctor".to_string(),
                id: id.to_string(),
            });
        }
    }

    let mut repo = Citas::new(&mut conn);
    let citas = repo.list_for_doctor(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Citas del doctor obtenidas correctamente",
        citas.into_iter().map(CitaResponse::from).collect::<Vec<_>>(),
    )))
}
