use std::sync::OnceLock;

use regex::Regex;

use crate::error::ApiError;

/// 3-20 letters or digits, any alphabet.
fn tema_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}0-9]{3,20}$").expect("hardcoded pattern compiles"))
}

/// Validate a topic name for creation.
///
/// This rule applies only when a tema is created. Update and delete identify
/// the row by its numeric id, which the path extractor already enforces, and
/// do not re-check the name.
pub fn validate_tema_name(nombre: &str) -> Result<(), ApiError> {
    if nombre.is_empty() {
        return Err(ApiError::Validation("El tema es obligatorio".to_string()));
    }

    if !tema_name_pattern().is_match(nombre) {
        return Err(ApiError::Validation(
            "El tema debe tener entre 3 y 20 caracteres, solo letras o dígitos".to_string(),
        ));
    }

    Ok(())
}

/// Validate the topic-name list of an exam request.
pub fn validate_nombres_temas(nombres: &[String]) -> Result<(), ApiError> {
    if nombres.is_empty() {
        return Err(ApiError::Validation(
            "nombresTemas no puede estar vacío".to_string(),
        ));
    }

    Ok(())
}

/// Validate the question cap of an exam request.
pub fn validate_limite(limite: i64) -> Result<(), ApiError> {
    if limite < 1 {
        return Err(ApiError::Validation(
            "limite debe ser un entero positivo".to_string(),
        ));
    }

    Ok(())
}
