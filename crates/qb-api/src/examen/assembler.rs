//! Builds an exam out of stored questions and answers.
//!
//! Three dependent fetches: topic names to ids, questions by topic and
//! difficulty, answers by question. Rows come back in primary-key order and
//! all randomization happens here with the caller's generator, so tests can
//! seed it while the handler draws from entropy.

use std::collections::HashMap;

use rand::{Rng, seq::SliceRandom};
use sqlx::PgPool;

use crate::error::ApiError;

use qb_db::{
    models::{Pregunta, Respuesta},
    repositories::{pregunta, respuesta, tema},
};

use super::model::{Examen, ExamenPregunta, ExamenRequest};

/// Assemble an exam for the given request.
///
/// Unmatched topic names are dropped silently; if nothing matches, the
/// question fetch returns zero rows and the exam is legitimately empty. Any
/// store failure aborts the whole assembly; partial exams are never returned.
pub async fn assemble<R: Rng>(
    pool: &PgPool,
    request: &ExamenRequest,
    rng: &mut R,
) -> Result<Examen, ApiError> {
    let tema_ids = tema::find_ids_by_names(pool, &request.nombres_temas).await?;

    let candidatas =
        pregunta::list_by_temas_and_dificultad(pool, &tema_ids, &request.dificultad).await?;
    let preguntas = pick_preguntas(candidatas, request.limite as usize, rng);

    let pregunta_ids: Vec<i64> = preguntas.iter().map(|p| p.id_pregunta).collect();
    let mut respuestas = respuesta::list_by_pregunta_ids(pool, &pregunta_ids).await?;
    // One flat shuffle randomizes the order within every group
    respuestas.shuffle(rng);

    Ok(build_examen(preguntas, respuestas))
}

/// Uniformly pick up to `limite` questions: shuffle, then cut.
fn pick_preguntas<R: Rng>(
    mut candidatas: Vec<Pregunta>,
    limite: usize,
    rng: &mut R,
) -> Vec<Pregunta> {
    candidatas.shuffle(rng);
    candidatas.truncate(limite);
    candidatas
}

/// Group answers by question in one pass, then emit the questions in their
/// given order. A question with no stored answers keeps an empty list rather
/// than dropping out.
fn build_examen(preguntas: Vec<Pregunta>, respuestas: Vec<Respuesta>) -> Examen {
    let mut por_pregunta: HashMap<i64, Vec<Respuesta>> = HashMap::new();
    for respuesta in respuestas {
        por_pregunta
            .entry(respuesta.id_pregunta)
            .or_default()
            .push(respuesta);
    }

    let preguntas = preguntas
        .into_iter()
        .map(|p| ExamenPregunta {
            id_pregunta: p.id_pregunta,
            pregunta: p.pregunta,
            respuestas: por_pregunta.remove(&p.id_pregunta).unwrap_or_default(),
        })
        .collect();

    Examen { preguntas }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn pregunta(id: i64, texto: &str) -> Pregunta {
        Pregunta {
            id_pregunta: id,
            id_tema: 1,
            pregunta: texto.to_string(),
            dificultad: "facil".to_string(),
        }
    }

    fn respuesta(id: i64, id_pregunta: i64, texto: &str) -> Respuesta {
        Respuesta {
            id_respuesta: id,
            id_pregunta,
            respuesta: texto.to_string(),
            es_correcta: false,
        }
    }

    #[test]
    fn test_build_examen_groups_answers_by_question() {
        let preguntas = vec![pregunta(1, "uno"), pregunta(2, "dos")];
        let respuestas = vec![
            respuesta(10, 2, "b1"),
            respuesta(11, 1, "a1"),
            respuesta(12, 1, "a2"),
        ];

        let examen = build_examen(preguntas, respuestas);

        assert_eq!(examen.preguntas.len(), 2);
        assert_eq!(examen.preguntas[0].id_pregunta, 1);
        assert_eq!(examen.preguntas[0].respuestas.len(), 2);
        assert_eq!(examen.preguntas[1].id_pregunta, 2);
        assert_eq!(examen.preguntas[1].respuestas.len(), 1);
        assert_eq!(examen.preguntas[1].respuestas[0].respuesta, "b1");
    }

    #[test]
    fn test_build_examen_keeps_question_order() {
        let preguntas = vec![pregunta(3, "tres"), pregunta(1, "uno"), pregunta(2, "dos")];

        let examen = build_examen(preguntas, vec![]);

        let ids: Vec<i64> = examen.preguntas.iter().map(|p| p.id_pregunta).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_build_examen_question_without_answers_gets_empty_list() {
        let preguntas = vec![pregunta(1, "uno"), pregunta(2, "dos")];
        let respuestas = vec![respuesta(10, 1, "a1")];

        let examen = build_examen(preguntas, respuestas);

        assert_eq!(examen.preguntas[0].respuestas.len(), 1);
        assert!(examen.preguntas[1].respuestas.is_empty());
    }

    #[test]
    fn test_build_examen_answer_order_within_group_is_input_order() {
        let preguntas = vec![pregunta(1, "uno")];
        let respuestas = vec![
            respuesta(12, 1, "tercera"),
            respuesta(10, 1, "primera"),
            respuesta(11, 1, "segunda"),
        ];

        let examen = build_examen(preguntas, respuestas);

        let textos: Vec<&str> = examen.preguntas[0]
            .respuestas
            .iter()
            .map(|r| r.respuesta.as_str())
            .collect();
        assert_eq!(textos, vec!["tercera", "primera", "segunda"]);
    }

    #[test]
    fn test_pick_preguntas_caps_at_limite() {
        let candidatas: Vec<Pregunta> = (1..=5).map(|id| pregunta(id, "p")).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let elegidas = pick_preguntas(candidatas, 3, &mut rng);

        assert_eq!(elegidas.len(), 3);
    }

    #[test]
    fn test_pick_preguntas_returns_everything_under_limite() {
        let candidatas: Vec<Pregunta> = (1..=2).map(|id| pregunta(id, "p")).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let elegidas = pick_preguntas(candidatas, 10, &mut rng);

        assert_eq!(elegidas.len(), 2);
    }

    #[test]
    fn test_pick_preguntas_is_a_permutation_of_the_input() {
        let candidatas: Vec<Pregunta> = (1..=8).map(|id| pregunta(id, "p")).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut ids: Vec<i64> = pick_preguntas(candidatas, 8, &mut rng)
            .iter()
            .map(|p| p.id_pregunta)
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
    }

    #[test]
    fn test_pick_preguntas_same_seed_same_order() {
        let hacer = |seed: u64| {
            let candidatas: Vec<Pregunta> = (1..=6).map(|id| pregunta(id, "p")).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            pick_preguntas(candidatas, 6, &mut rng)
                .iter()
                .map(|p| p.id_pregunta)
                .collect::<Vec<i64>>()
        };

        assert_eq!(hacer(99), hacer(99));
    }

    #[test]
    fn test_build_examen_empty_input_yields_empty_exam() {
        let examen = build_examen(vec![], vec![]);
        assert!(examen.preguntas.is_empty());
    }
}
