//! Database repository for doctores.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::doctores::{DoctorCreateDBRequest, DoctorDBResponse, DoctorUpdateDBRequest},
};
use crate::types::DoctorId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Doctores<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Doctores<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Doctores<'c> {
    type CreateRequest = DoctorCreateDBRequest;
    type UpdateRequest = DoctorUpdateDBRequest;
    type Response = DoctorDBResponse;
    type Key = DoctorId;

    #[instrument(skip(self, request), fields(id_profesional = request.id_profesional), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let doctor = sqlx::query_as::<_, DoctorDBResponse>(
            r#"
            INSERT INTO doctores (id_profesional, nombre, apellido, correo, telefono, especialidad)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.id_profesional)
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.correo)
        .bind(&request.telefono)
        .bind(request.especialidad)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(doctor)
    }

    #[instrument(skip(self), err)]
    async fn get(&mut self, id: Self::Key) -> Result<Option<Self::Response>> {
        let doctor = sqlx::query_as::<_, DoctorDBResponse>("SELECT * FROM doctores WHERE id_profesional = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(doctor)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let doctores = sqlx::query_as::<_, DoctorDBResponse>("SELECT * FROM doctores")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(doctores)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Single conditional statement: no row means not found, no separate
        // existence check to race against.
        let doctor = sqlx::query_as::<_, DoctorDBResponse>(
            r#"
            UPDATE doctores SET
                nombre = COALESCE($2, nombre),
                apellido = COALESCE($3, apellido),
                correo = COALESCE($4, correo),
                telefono = COALESCE($5, telefono),
                especialidad = COALESCE($6, especialidad)
            WHERE id_profesional = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.nombre)
        .bind(&request.apellido)
        .bind(&request.correo)
        .bind(&request.telefono)
        .bind(request.especialidad)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(doctor)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Key) -> Result<bool> {
        let result = sqlx::query("DELETE FROM doctores WHERE id_profesional = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::doctores::Especialidad;
    use crate::test_utils::doctor_create_request;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_and_get_doctor(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Doctores::new(&mut conn);

        let created = repo.create(&doctor_create_request(1)).await.unwrap();
        assert_eq!(created.id_profesional, 1);
        assert_eq!(created.especialidad, Especialidad::MedicinaGeneral);

        let fetched = repo.get(1).await.unwrap().expect("doctor should exist");
        assert_eq!(fetched, created);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_duplicate_id_is_unique_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Doctores::new(&mut conn);

        repo.create(&doctor_create_request(1)).await.unwrap();
        let err = repo.create(&doctor_create_request(1)).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_partial_update_keeps_other_fields(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Doctores::new(&mut conn);

        let created = repo.create(&doctor_create_request(7)).await.unwrap();

        let update = DoctorUpdateDBRequest {
            telefono: Some("2222".to_string()),
            especialidad: Some(Especialidad::MedicinaInterna),
            ..Default::default()
        };
        let updated = repo.update(7, &update).await.unwrap();

        assert_eq!(updated.telefono, "2222");
        assert_eq!(updated.especialidad, Especialidad::MedicinaInterna);
        assert_eq!(updated.nombre, created.nombre);
        assert_eq!(updated.correo, created.correo);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_missing_doctor_is_not_found(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Doctores::new(&mut conn);

        let err = repo.update(99, &DoctorUpdateDBRequest::default()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_is_conditional(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Doctores::new(&mut conn);

        repo.create(&doctor_create_request(3)).await.unwrap();
        assert!(repo.delete(3).await.unwrap());
        // Second delete finds nothing and reports so, without erroring.
        assert!(!repo.delete(3).await.unwrap());
        assert!(repo.get(3).await.unwrap().is_none());
    }
}
