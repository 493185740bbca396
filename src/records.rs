// src/records.rs
//
// Normalized record shapes, one per source. Serialized field names follow
// the portal's own vocabulary so snapshot files stay recognizable next to
// what the site shows.

use serde::{Deserialize, Serialize};

/// Separator inside composite keys. Chosen for readability in reports;
/// a collision through it would just fall under the last-wins rule anyway.
const KEY_SEP: &str = " | ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub nombre: String,
    pub public_path: String,
}

/// One cartelera message, body already stripped to plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub materia: String,
    pub titulo: String,
    pub cuerpo: String,
    pub fecha: String,
    pub autor: String,
    pub adjuntos: Vec<Attachment>,
}

/// One row of the cursadas schedule tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "Materia")]
    pub materia: String,
    #[serde(rename = "Carreras")]
    pub carreras: String,
    #[serde(rename = "Inicio Cursada")]
    pub inicio: String,
    #[serde(rename = "Horarios Cursada")]
    pub horarios: String,
    #[serde(rename = "Última modificación")]
    pub modificado: String,
}

/// Seam between the typed records and the generic change detector/reporter.
pub trait Watched {
    /// Human name of the record kind, for report lines.
    fn kind() -> &'static str
    where
        Self: Sized;

    /// Composite identity used to match records across snapshots.
    /// Unique within a snapshot by convention; duplicates are last-wins.
    fn key(&self) -> String;

    /// Scalar fields in render order.
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Attachment descriptors; empty for kinds without attachments.
    fn attachments(&self) -> &[Attachment] {
        &[]
    }

    /// Fields as seen by the change detector. Kinds with attachments append
    /// a flattened listing so attachment changes surface as `Modified`.
    fn compare_fields(&self) -> Vec<(&'static str, String)> {
        self.fields()
    }
}

impl Watched for Announcement {
    fn kind() -> &'static str {
        "announcement"
    }

    fn key(&self) -> String {
        [&self.materia, &self.titulo, &self.fecha]
            .map(String::as_str)
            .join(KEY_SEP)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Materia", self.materia.clone()),
            ("Título", self.titulo.clone()),
            ("Cuerpo", self.cuerpo.clone()),
            ("Fecha", self.fecha.clone()),
            ("Autor", self.autor.clone()),
        ]
    }

    fn attachments(&self) -> &[Attachment] {
        &self.adjuntos
    }

    fn compare_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.fields();
        fields.push(("Adjuntos", flatten_attachments(&self.adjuntos)));
        fields
    }
}

impl Watched for Schedule {
    fn kind() -> &'static str {
        "course"
    }

    // The schedule tables list each subject once; the subject alone is
    // identity enough.
    fn key(&self) -> String {
        self.materia.clone()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Materia", self.materia.clone()),
            ("Carreras", self.carreras.clone()),
            ("Inicio Cursada", self.inicio.clone()),
            ("Horarios Cursada", self.horarios.clone()),
            ("Última modificación", self.modificado.clone()),
        ]
    }
}

fn flatten_attachments(adjuntos: &[Attachment]) -> String {
    adjuntos
        .iter()
        .map(|a| format!("{} ({})", a.nombre, a.public_path))
        .collect::<Vec<_>>()
        .join(", ")
}
