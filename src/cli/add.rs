//! studyplan add command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::TaskDraft;

pub struct AddOptions {
    pub title: String,
    pub subject: String,
    pub date: String,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let (_config, mut store) = super::open_store(opts.store, opts.config.as_deref())?;

    let draft = TaskDraft::new(opts.title, opts.subject, opts.date);
    let task = store.create(&draft)?;

    let mut human = HumanOutput::new(format!("studyplan add: created \"{}\"", task.title));
    human.push_summary("id", task.id.clone());
    human.push_summary("subject", task.subject.clone());
    human.push_summary("due", task.due_date.to_string());
    human.push_next_step("studyplan list".to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &task,
        Some(&human),
    )?;

    Ok(())
}
