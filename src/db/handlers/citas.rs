//! Database repository for citas, keyed by the composite
//! (fecha_hora, id_profesional, id_numero_cedula) triple.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::citas::{CitaCreateDBRequest, CitaDBResponse, CitaUpdateDBRequest},
};
use crate::types::{CitaKey, DoctorId, PacienteId};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Citas<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Citas<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// All citas referencing the given doctor. Explicit relationship lookup;
    /// the entities themselves hold only foreign-key values.
    #[instrument(skip(self), err)]
    pub async fn list_for_doctor(&mut self, id_profesional: DoctorId) -> Result<Vec<CitaDBResponse>> {
        let citas = sqlx::query_as::<_, CitaDBResponse>("SELECT * FROM citas WHERE id_profesional = $1")
            .bind(id_profesional)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(citas)
    }

    /// All citas referencing the given patient.
    #[instrument(skip(self), err)]
    pub async fn list_for_paciente(&mut self, id_numero_cedula: PacienteId) -> Result<Vec<CitaDBResponse>> {
        let citas = sqlx::query_as::<_, CitaDBResponse>("SELECT * FROM citas WHERE id_numero_cedula = $1")
            .bind(id_numero_cedula)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(citas)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Citas<'c> {
    type CreateRequest = CitaCreateDBRequest;
    type UpdateRequest = CitaUpdateDBRequest;
    type Response = CitaDBResponse;
    type Key = CitaKey;

    #[instrument(skip(self, request), fields(id_profesional = request.id_profesional, id_numero_cedula = request.id_numero_cedula), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        // Foreign keys and the composite primary key do the validation; a
        // dangling reference or occupied triple surfaces as a DbError.
        let cita = sqlx::query_as::<_, CitaDBResponse>(
            r#"
            INSERT INTO citas (fecha_hora, id_profesional, id_numero_cedula)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(request.fecha_hora)
        .bind(request.id_profesional)
        .bind(request.id_numero_cedula)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(cita)
    }

    #[instrument(skip(self), fields(key = %key), err)]
    async fn get(&mut self, key: Self::Key) -> Result<Option<Self::Response>> {
        let cita = sqlx::query_as::<_, CitaDBResponse>(
            "SELECT * FROM citas WHERE fecha_hora = $1 AND id_profesional = $2 AND id_numero_cedula = $3",
        )
        .bind(key.fecha_hora)
        .bind(key.id_profesional)
        .bind(key.id_numero_cedula)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(cita)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let citas = sqlx::query_as::<_, CitaDBResponse>("SELECT * FROM citas")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(citas)
    }

    #[instrument(skip(self, request), fields(key = %key), err)]
    async fn update(&mut self, key: Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // The update may move the row to a new triple; landing on an occupied
        // one raises the composite-key unique violation.
        let cita = sqlx::query_as::<_, CitaDBResponse>(
            r#"
            UPDATE citas SET
                fecha_hora = COALESCE($4, fecha_hora),
                id_profesional = COALESCE($5, id_profesional),
                id_numero_cedula = COALESCE($6, id_numero_cedula)
            WHERE fecha_hora = $1 AND id_profesional = $2 AND id_numero_cedula = $3
            RETURNING *
            "#,
        )
        .bind(key.fecha_hora)
        .bind(key.id_profesional)
        .bind(key.id_numero_cedula)
        .bind(request.fecha_hora)
        .bind(request.id_profesional)
        .bind(request.id_numero_cedula)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(cita)
    }

    #[instrument(skip(self), fields(key = %key), err)]
    async fn delete(&mut self, key: Self::Key) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM citas WHERE fecha_hora = $1 AND id_profesional = $2 AND id_numero_cedula = $3")
                .bind(key.fecha_hora)
                .bind(key.id_profesional)
                .bind(key.id_numero_cedula)
                .execute(&mut *self.db)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
