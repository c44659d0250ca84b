//! Database repository for pacientes.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::pacientes::{PacienteCreateDBRequest, PacienteDBResponse, PacienteUpdateDBRequest},
};
use crate::types::PacienteId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Pacientes<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Pacientes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Pacientes<'c> {
    type CreateRequest = PacienteCreateDBRequest;
    type UpdateRequest = PacienteUpdateDBRequest;
    type Response = PacienteDBResponse;
    type Key = PacienteId;

    #[instrument(skip(self, request), fields(id_numero_cedula = request.id_numero_cedula), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let paciente = sqlx::query_as::<_, PacienteDBResponse>(
            r#"
            INSERT INTO pacientes (id_numero_cedula, nombre, apellido, telefono, fecha_nacimiento)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.id_numero_cedula)
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.telefono)
        .bind(request.fecha_nacimiento)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(paciente)
    }

    #[instrument(skip(self), err)]
    async fn get(&mut self, id: Self::Key) -> Result<Option<Self::Response>> {
        let paciente = sqlx::query_as::<_, PacienteDBResponse>("SELECT * FROM pacientes WHERE id_numero_cedula = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(paciente)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let pacientes = sqlx::query_as::<_, PacienteDBResponse>("SELECT * FROM pacientes")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(pacientes)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let paciente = sqlx::query_as::<_, PacienteDBResponse>(
            r#"
            UPDATE pacientes SET
                nombre = COALESCE($2, nombre),
                apellido = COALESCE($3, apellido),
                telefono = COALESCE($4, telefono),
                fecha_nacimiento = COALESCE($5, fecha_nacimiento)
            WHERE id_numero_cedula = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.telefono)
        .bind(request.fecha_nacimiento)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(paciente)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pacientes WHERE id_numero_cedula = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
