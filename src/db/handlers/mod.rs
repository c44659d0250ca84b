//! Repository implementations for CRUD operations.

pub mod citas;
pub mod doctores;
pub mod pacientes;
pub mod repository;

pub use citas::Citas;
pub use doctores::Doctores;
pub use pacientes::Pacientes;
pub use repository::Repository;
