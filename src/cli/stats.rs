//! studyplan stats command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::projection::stats;

pub struct StatsOptions {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: StatsOptions) -> Result<()> {
    let (_config, store) = super::open_store(opts.store, opts.config.as_deref())?;

    let totals = stats(store.all());

    let mut human = HumanOutput::new("studyplan stats");
    human.push_summary("total", totals.total.to_string());
    human.push_summary("done", totals.done.to_string());
    human.push_summary("pending", totals.pending.to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "stats",
        &totals,
        Some(&human),
    )?;

    Ok(())
}
