//! studyplan done command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct ToggleOptions {
    pub id: String,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: ToggleOptions) -> Result<()> {
    let (_config, mut store) = super::open_store(opts.store, opts.config.as_deref())?;

    let id = store.resolve_id(&opts.id)?;
    let task = store.toggle_completed(&id)?;

    let verb = if task.completed { "done" } else { "reopened" };
    let mut human = HumanOutput::new(format!("studyplan done: \"{}\" is {verb}", task.title));
    human.push_summary("id", task.id.clone());
    human.push_summary("completed", task.completed.to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "done",
        &task,
        Some(&human),
    )?;

    Ok(())
}
