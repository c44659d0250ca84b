//! Axum route handlers, one module per entity.

pub mod citas;
pub mod doctores;
pub mod pacientes;
