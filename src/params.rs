// src/params.rs

use std::path::PathBuf;

pub const BASE_URL: &str = "https://gestiondocente.info.unlp.edu.ar";
pub const CARTELERA_DATA: &str = "/cartelera/data/0/10";
pub const CURSADAS_PATH: &str = "/cursadas/";

pub const DEFAULT_MATERIA_ID: u32 = 61;
pub const CARTELERA_SNAPSHOT: &str = "mensajes.json";
pub const CURSADAS_SNAPSHOT: &str = "materias.json";

pub const DEFAULT_BANNER: &str = "Inicio de Clases - Segundo Semestre 2024:";
pub const USER_AGENT: &str = concat!("gdwatch/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Cartelera,
    Cursadas,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub data_dir: PathBuf,           // where snapshot files live
    pub only: Option<SourceKind>,    // None = watch both sources
    pub materia_id: u32,             // cartelera API subject filter
    pub clear_screen: bool,          // cosmetic, opt-in
    pub banner: Option<String>,      // None = no banner line
}

impl Params {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            only: None,
            materia_id: DEFAULT_MATERIA_ID,
            clear_screen: false,
            banner: Some(DEFAULT_BANNER.to_string()),
        }
    }

    pub fn wants(&self, kind: SourceKind) -> bool {
        self.only.is_none() || self.only == Some(kind)
    }

    pub fn cartelera_url(&self) -> String {
        format!("{BASE_URL}{CARTELERA_DATA}?idMateria={}", self.materia_id)
    }

    pub fn cursadas_url(&self) -> String {
        format!("{BASE_URL}{CURSADAS_PATH}")
    }

    pub fn cartelera_snapshot(&self) -> PathBuf {
        self.data_dir.join(CARTELERA_SNAPSHOT)
    }

    pub fn cursadas_snapshot(&self) -> PathBuf {
        self.data_dir.join(CURSADAS_SNAPSHOT)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
