//! studyplan edit command implementation
//!
//! Partial edits: unset fields keep their current value. The store's editing
//! cursor brackets the read-modify-write.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{TaskDraft, DATE_FORMAT};

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: EditOptions) -> Result<()> {
    if opts.title.is_none() && opts.subject.is_none() && opts.date.is_none() {
        return Err(Error::InvalidArgument(
            "nothing to change: pass --title, --subject, or --date".to_string(),
        ));
    }

    let (_config, mut store) = super::open_store(opts.store, opts.config.as_deref())?;
    let id = store.resolve_id(&opts.id)?;

    let current = store.begin_edit(&id)?;
    let draft = TaskDraft::new(
        opts.title.unwrap_or_else(|| current.title.clone()),
        opts.subject.unwrap_or_else(|| current.subject.clone()),
        opts.date
            .unwrap_or_else(|| current.due_date.format(DATE_FORMAT).to_string()),
    );

    let task = store.update(&id, &draft)?;

    let mut human = HumanOutput::new(format!("studyplan edit: updated \"{}\"", task.title));
    human.push_summary("id", task.id.clone());
    human.push_summary("subject", task.subject.clone());
    human.push_summary("due", task.due_date.to_string());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "edit",
        &task,
        Some(&human),
    )?;

    Ok(())
}
