//! Database record structures matching the table schemas.

pub mod citas;
pub mod doctores;
pub mod pacientes;
