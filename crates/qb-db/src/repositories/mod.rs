pub mod pregunta;
pub mod respuesta;
pub mod tema;
