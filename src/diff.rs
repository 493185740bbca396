// src/diff.rs
//
// The change detector. Pure: builds key lookups for both snapshots, walks
// the new set in encounter order, and classifies every record as added,
// modified (one entry per differing field), or removed.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::records::Watched;

/// One detected difference between two snapshots. Produced here, consumed
/// by the reporter, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change<R> {
    Added(R),
    Modified {
        key: String,
        field: &'static str,
        old: String,
        new: String,
    },
    Removed {
        key: String,
    },
}

/// Compare `new` against `old`.
///
/// Output order is deterministic: additions and modifications follow the new
/// sequence's encounter order, removals follow the old sequence's. Inputs
/// are never mutated. `diff(r, r)` is empty for any `r`.
pub fn diff<R: Watched + Clone>(new: &[R], old: &[R]) -> Vec<Change<R>> {
    let old_by_key = index(old);
    let new_by_key = index(new);

    let mut changes = Vec::new();

    let mut seen = HashSet::new();
    for record in new {
        let key = record.key();
        if !seen.insert(key.clone()) {
            continue;
        }
        // Take the lookup entry, not `record`: with duplicate keys the
        // later record is the one that counts.
        let Some(current) = new_by_key.get(key.as_str()) else {
            continue;
        };
        match old_by_key.get(key.as_str()) {
            None => changes.push(Change::Added((*current).clone())),
            Some(previous) => compare(&key, *current, *previous, &mut changes),
        }
    }

    let mut seen_old = HashSet::new();
    for record in old {
        let key = record.key();
        if !seen_old.insert(key.clone()) {
            continue;
        }
        if !new_by_key.contains_key(key.as_str()) {
            changes.push(Change::Removed { key });
        }
    }

    changes
}

/// One `Modified` per differing field. A field present on one side only
/// compares as different from any value on the other side, empty included.
fn compare<R: Watched>(key: &str, new: &R, old: &R, changes: &mut Vec<Change<R>>) {
    let old_fields: HashMap<&'static str, String> = old.compare_fields().into_iter().collect();
    for (field, new_value) in new.compare_fields() {
        let old_value = old_fields.get(field);
        if old_value != Some(&new_value) {
            changes.push(Change::Modified {
                key: key.to_string(),
                field,
                old: old_value.cloned().unwrap_or_default(),
                new: new_value,
            });
        }
    }
}

/// Key → record lookup. Duplicate keys: the later record wins.
fn index<R: Watched>(records: &[R]) -> HashMap<String, &R> {
    let mut by_key = HashMap::with_capacity(records.len());
    for record in records {
        if by_key.insert(record.key(), record).is_some() {
            warn!(key = %record.key(), "duplicate composite key; keeping the later record");
        }
    }
    by_key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Announcement, Attachment, Schedule};

    fn sched(materia: &str, inicio: &str) -> Schedule {
        Schedule {
            materia: materia.into(),
            carreras: "Todas".into(),
            inicio: inicio.into(),
            horarios: "Lu 8-12".into(),
            modificado: "2024-05-01".into(),
        }
    }

    fn msg(titulo: &str, fecha: &str) -> Announcement {
        Announcement {
            materia: "Algebra".into(),
            titulo: titulo.into(),
            cuerpo: "cuerpo".into(),
            fecha: fecha.into(),
            autor: "Cátedra".into(),
            adjuntos: vec![],
        }
    }

    #[test]
    fn identical_snapshots_yield_no_changes() {
        let r = vec![sched("Algebra", "2024-08-12"), sched("Lógica", "2024-08-13")];
        assert!(diff(&r, &r).is_empty());
    }

    #[test]
    fn appended_record_is_added() {
        let old = vec![sched("Algebra", "2024-08-12")];
        let mut new = old.clone();
        new.push(sched("Lógica", "2024-08-13"));

        let changes = diff(&new, &old);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0], Change::Added(sched("Lógica", "2024-08-13")));
    }

    #[test]
    fn one_mutated_field_yields_one_modified() {
        let old = vec![sched("Algebra", "2024-08-12")];
        let new = vec![sched("Algebra", "2024-08-19")];

        let changes = diff(&new, &old);
        assert_eq!(
            changes,
            vec![Change::Modified {
                key: "Algebra".into(),
                field: "Inicio Cursada",
                old: "2024-08-12".into(),
                new: "2024-08-19".into(),
            }]
        );
    }

    #[test]
    fn per_field_policy_reports_every_differing_field() {
        let old = vec![sched("Algebra", "2024-08-12")];
        let mut changed = sched("Algebra", "2024-08-19");
        changed.horarios = "Ma 14-18".into();

        let changes = diff(&[changed], &old);
        assert_eq!(changes.len(), 2);
        let fields: Vec<_> = changes
            .iter()
            .map(|c| match c {
                Change::Modified { field, .. } => *field,
                other => panic!("unexpected change: {other:?}"),
            })
            .collect();
        assert_eq!(fields, vec!["Inicio Cursada", "Horarios Cursada"]);
    }

    #[test]
    fn missing_record_is_removed() {
        let old = vec![sched("Algebra", "2024-08-12"), sched("Lógica", "2024-08-13")];
        let new = vec![sched("Algebra", "2024-08-12")];

        let changes = diff(&new, &old);
        assert_eq!(changes, vec![Change::Removed { key: "Lógica".into() }]);
    }

    #[test]
    fn announcements_detect_removals_too() {
        let old = vec![msg("Parcial", "2024-05-01"), msg("Recuperatorio", "2024-06-01")];
        let new = vec![msg("Parcial", "2024-05-01")];

        let changes = diff(&new, &old);
        assert_eq!(
            changes,
            vec![Change::Removed {
                key: "Algebra | Recuperatorio | 2024-06-01".into()
            }]
        );
    }

    #[test]
    fn attachment_change_surfaces_as_modified() {
        let old = vec![msg("Parcial", "2024-05-01")];
        let mut new = old.clone();
        new[0].adjuntos.push(Attachment {
            nombre: "temario.pdf".into(),
            public_path: "/files/temario.pdf".into(),
        });

        let changes = diff(&new, &old);
        assert_eq!(changes.len(), 1);
        match &changes[0] {
            Change::Modified { field, old, new, .. } => {
                assert_eq!(*field, "Adjuntos");
                assert_eq!(old, "");
                assert_eq!(new, "temario.pdf (/files/temario.pdf)");
            }
            other => panic!("unexpected change: {other:?}"),
        }
    }

    #[test]
    fn duplicate_keys_last_record_wins() {
        let old: Vec<Schedule> = vec![];
        let new = vec![sched("Algebra", "2024-08-12"), sched("Algebra", "2024-08-19")];

        let changes = diff(&new, &old);
        assert_eq!(changes, vec![Change::Added(sched("Algebra", "2024-08-19"))]);
    }

    #[test]
    fn output_follows_new_sequence_order() {
        let old: Vec<Schedule> = vec![];
        let new = vec![
            sched("Zoología", "2024-08-12"),
            sched("Algebra", "2024-08-12"),
            sched("Lógica", "2024-08-12"),
        ];

        let keys: Vec<_> = diff(&new, &old)
            .into_iter()
            .map(|c| match c {
                Change::Added(r) => r.materia,
                other => panic!("unexpected change: {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec!["Zoología", "Algebra", "Lógica"]);
    }
}
