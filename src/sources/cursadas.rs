// src/sources/cursadas.rs
//
// Schedule page. Only tables carrying the portal's style-class signature
// are scanned; each data row has five columns:
// subject, programs, start date, schedule, last-modified.

use crate::core::html::{blocks_ci, inner, strip_tags, tables_with_class};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::records::Schedule;

/// Style-class signature of the schedule tables.
pub const TABLE_CLASS: &str = "table table-condensed table-striped table-bordered";

/// Extract schedule records from the page, in document order.
/// The first row of each table is the header; rows with fewer than five
/// cells carry no schedule data and are skipped silently.
pub fn normalize(doc: &str) -> Vec<Schedule> {
    let mut out = Vec::new();
    for table in tables_with_class(doc, TABLE_CLASS) {
        for row in blocks_ci(table, "<tr", "</tr>").skip(1) {
            let mut cells: Vec<String> =
                blocks_ci(row, "<td", "</td>").map(cell_text).collect();
            if cells.len() < 5 {
                continue;
            }
            cells.truncate(5);
            let Ok([materia, carreras, inicio, horarios, modificado]) =
                <[String; 5]>::try_from(cells)
            else {
                continue;
            };
            out.push(Schedule {
                materia,
                carreras,
                inicio,
                horarios,
                modificado,
            });
        }
    }
    out
}

fn cell_text(td: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner(td))))
}
