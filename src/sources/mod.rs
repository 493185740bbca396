// src/sources/mod.rs
//
// One module per portal source, each a pure normalizer from fetched text to
// the uniform record shape for that source.

pub mod cartelera;
pub mod cursadas;
