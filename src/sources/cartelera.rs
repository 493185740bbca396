// src/sources/cartelera.rs
//
// Announcements API. The endpoint answers
// `{"mensajes": [{materia, titulo, cuerpo, fecha, autor, adjuntos}, ...]}`
// where `cuerpo` is an HTML fragment.

use serde::Deserialize;

use crate::core::html::strip_tags;
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::WatchError;
use crate::records::Announcement;

#[derive(Deserialize)]
struct Feed {
    // An absent list means "no messages", not a broken payload.
    #[serde(default)]
    mensajes: Vec<Announcement>,
}

/// Decode the API payload and strip the message bodies to plain text.
/// A missing or ill-typed field fails the run: the upstream schema is
/// assumed stable, so a short payload means something is actually wrong.
pub fn normalize(body: &str) -> Result<Vec<Announcement>, WatchError> {
    let mut feed: Feed = serde_json::from_str(body).map_err(WatchError::Payload)?;
    for mensaje in &mut feed.mensajes {
        mensaje.cuerpo = clean_body(&mensaje.cuerpo);
    }
    Ok(feed.mensajes)
}

/// Tag removal is total, so broken markup degrades to best-effort text
/// instead of aborting the normalization.
fn clean_body(raw: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"{
        "mensajes": [
            {
                "materia": "Algebra",
                "titulo": "Parcial",
                "cuerpo": "<p>Se toma el <b>parcial</b>&nbsp;el lunes</p>",
                "fecha": "2024-05-01",
                "autor": "Cátedra",
                "adjuntos": [
                    { "nombre": "temario.pdf", "public_path": "/files/temario.pdf" }
                ]
            },
            {
                "materia": "Algebra",
                "titulo": "Aula",
                "cuerpo": "<div>sin cerrar",
                "fecha": "2024-05-02",
                "autor": "Cátedra",
                "adjuntos": []
            }
        ]
    }"#;

    #[test]
    fn bodies_are_stripped_to_plain_text() {
        let mensajes = normalize(FEED).unwrap();
        assert_eq!(mensajes.len(), 2);
        assert_eq!(mensajes[0].cuerpo, "Se toma el parcial el lunes");
        assert_eq!(mensajes[0].adjuntos[0].nombre, "temario.pdf");
    }

    #[test]
    fn malformed_markup_does_not_abort() {
        let mensajes = normalize(FEED).unwrap();
        assert_eq!(mensajes[1].cuerpo, "");
    }

    #[test]
    fn missing_field_is_a_payload_error() {
        let short = r#"{"mensajes": [{"materia": "Algebra", "titulo": "x"}]}"#;
        assert!(matches!(normalize(short), Err(WatchError::Payload(_))));
    }

    #[test]
    fn payload_without_mensajes_is_empty_not_an_error() {
        assert!(normalize("{}").unwrap().is_empty());
    }

    #[test]
    fn order_follows_the_feed() {
        let mensajes = normalize(FEED).unwrap();
        assert_eq!(mensajes[0].titulo, "Parcial");
        assert_eq!(mensajes[1].titulo, "Aula");
    }
}
