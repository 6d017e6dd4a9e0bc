pub mod config;
pub mod error;
pub mod examen;
pub mod pregunta;
pub mod respuesta;
pub mod router;
pub mod state;
pub mod tema;
pub mod tracing;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
