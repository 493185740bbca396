// src/runner.rs
//
// One watch cycle: fetch → normalize → load snapshot → diff → report →
// persist, strictly sequential. A fetch failure on one source is reported
// and the other source still runs; the process exits 0 either way.

use std::io::{self, Write};
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{
    diff, net, report, store,
    error::WatchError,
    params::{Params, SourceKind},
    records::Watched,
    sources::{cartelera, cursadas},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    FirstRun { saved: usize },
    Unchanged,
    Updated { changes: usize },
    FetchFailed,
}

/// What one run did, per source.
pub struct RunSummary {
    pub outcomes: Vec<(SourceKind, Outcome)>,
}

pub fn run(params: &Params) -> Result<RunSummary, WatchError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(params, &mut out)
}

pub fn run_with<W: Write>(params: &Params, out: &mut W) -> Result<RunSummary, WatchError> {
    if params.clear_screen {
        report::clear_screen(out)?;
    }
    if let Some(text) = &params.banner {
        report::banner(out, text)?;
    }

    let mut outcomes = Vec::new();

    if params.wants(SourceKind::Cartelera) {
        let outcome = match net::get(&params.cartelera_url()) {
            Ok(body) => {
                let records = cartelera::normalize(&body)?;
                sync(&records, &params.cartelera_snapshot(), out)?
            }
            Err(WatchError::Network(e)) => {
                warn!(error = %e, "cartelera fetch failed");
                writeln!(out, "Could not reach the cartelera API: {e}")?;
                Outcome::FetchFailed
            }
            Err(e) => return Err(e),
        };
        outcomes.push((SourceKind::Cartelera, outcome));
    }

    if params.wants(SourceKind::Cursadas) {
        let outcome = match net::get(&params.cursadas_url()) {
            Ok(body) => {
                let records = cursadas::normalize(&body);
                sync(&records, &params.cursadas_snapshot(), out)?
            }
            Err(WatchError::Network(e)) => {
                warn!(error = %e, "cursadas fetch failed");
                writeln!(out, "Could not reach the cursadas page: {e}")?;
                Outcome::FetchFailed
            }
            Err(e) => return Err(e),
        };
        outcomes.push((SourceKind::Cursadas, outcome));
    }

    out.flush()?;
    Ok(RunSummary { outcomes })
}

/// Compare-report-save for one source. The snapshot file is rewritten only
/// on first run or when the detector found changes.
pub fn sync<R, W>(records: &[R], snapshot: &Path, out: &mut W) -> Result<Outcome, WatchError>
where
    R: Watched + Clone + Serialize + DeserializeOwned,
    W: Write,
{
    match store::load::<R>(snapshot)? {
        None => {
            report::first_run(out, records)?;
            store::save(snapshot, records)?;
            info!(path = %snapshot.display(), records = records.len(), "first snapshot saved");
            Ok(Outcome::FirstRun { saved: records.len() })
        }
        Some(old) => {
            let changes = diff::diff(records, &old);
            if changes.is_empty() {
                report::no_changes(out)?;
                Ok(Outcome::Unchanged)
            } else {
                report::changes(out, &changes)?;
                store::save(snapshot, records)?;
                info!(path = %snapshot.display(), changes = changes.len(), "snapshot updated");
                Ok(Outcome::Updated { changes: changes.len() })
            }
        }
    }
}
