//! studyplan subjects command implementation
//!
//! Lists the distinct subjects present in the store, so users can discover
//! what `list --subject` can filter on. Configured-but-unused subjects from
//! `subjects.allowed` are included too.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

pub struct SubjectsOptions {
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct SubjectsReport {
    subjects: Vec<String>,
}

pub fn run(opts: SubjectsOptions) -> Result<()> {
    let (config, store) = super::open_store(opts.store, opts.config.as_deref())?;

    let mut subjects: BTreeSet<String> = store
        .all()
        .iter()
        .map(|task| task.subject.clone())
        .collect();
    subjects.extend(config.subjects.allowed.iter().cloned());

    let subjects: Vec<String> = subjects.into_iter().collect();

    let header = if subjects.is_empty() {
        "studyplan subjects: none yet".to_string()
    } else {
        format!("studyplan subjects: {}", subjects.len())
    };
    let mut human = HumanOutput::new(header);
    for subject in &subjects {
        human.push_detail(subject.clone());
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "subjects",
        &SubjectsReport { subjects },
        Some(&human),
    )?;

    Ok(())
}
