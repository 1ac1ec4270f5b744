//! studyplan rm command implementation
//!
//! The store deletes unconditionally; the confirmation prompt lives here.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct RmOptions {
    pub id: String,
    pub yes: bool,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct RmReport {
    deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<Task>,
}

pub fn run(opts: RmOptions) -> Result<()> {
    let (_config, mut store) = super::open_store(opts.store, opts.config.as_deref())?;

    let id = store.resolve_id(&opts.id)?;
    let title = store
        .get(&id)
        .map(|task| task.title.clone())
        .unwrap_or_default();

    if !opts.yes && !confirm(&title)? {
        let human = HumanOutput::new("studyplan rm: aborted");
        emit_success(
            OutputOptions {
                json: opts.json,
                quiet: opts.quiet,
            },
            "rm",
            &RmReport {
                deleted: false,
                task: None,
            },
            Some(&human),
        )?;
        return Ok(());
    }

    let removed = store.delete(&id)?;

    let mut human = HumanOutput::new(format!("studyplan rm: deleted \"{}\"", removed.title));
    human.push_summary("id", removed.id.clone());

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "rm",
        &RmReport {
            deleted: true,
            task: Some(removed),
        },
        Some(&human),
    )?;

    Ok(())
}

fn confirm(title: &str) -> Result<bool> {
    eprint!("Delete task \"{title}\"? [y/N] ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
