//! studyplan list and show command implementations

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::projection::{filtered_sorted, is_overdue, relative_label, stats};
use crate::task::Task;

pub struct ListOptions {
    pub subject: Option<String>,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ShowOptions {
    pub id: String,
    pub store: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Presentation-ready view of one task
#[derive(Debug, Serialize)]
pub(crate) struct TaskRow {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub date: String,
    pub done: bool,
    pub overdue: bool,
    pub due_label: String,
}

impl TaskRow {
    pub(crate) fn project(task: &Task, today: NaiveDate, date_format: &str) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            subject: task.subject.clone(),
            date: task.due_date.to_string(),
            done: task.completed,
            overdue: is_overdue(task, today),
            due_label: relative_label(task, today, date_format),
        }
    }

    fn human_line(&self) -> String {
        let mark = if self.done { "x" } else { " " };
        let short_id: String = self.id.chars().take(8).collect();
        let overdue = if self.overdue { " (overdue)" } else { "" };
        format!(
            "[{mark}] {short_id}  {} | {} | {}{overdue}",
            self.title, self.subject, self.due_label
        )
    }
}

#[derive(Serialize)]
struct ListReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    count: usize,
    tasks: Vec<TaskRow>,
}

pub fn run_list(opts: ListOptions) -> Result<()> {
    let (config, store) = super::open_store(opts.store, opts.config.as_deref())?;

    let today = Local::now().date_naive();
    let filter = opts
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let visible = filtered_sorted(store.all(), filter.as_deref());
    let rows: Vec<TaskRow> = visible
        .iter()
        .map(|task| TaskRow::project(task, today, &config.display.date_format))
        .collect();

    let totals = stats(store.all());
    let header = match (&filter, rows.len()) {
        (Some(subject), 0) => format!("studyplan list: no tasks for subject \"{subject}\""),
        (None, 0) => "studyplan list: no tasks yet".to_string(),
        (Some(subject), n) => format!("studyplan list: {n} task(s) for subject \"{subject}\""),
        (None, n) => format!("studyplan list: {n} task(s)"),
    };

    let mut human = HumanOutput::new(header);
    for row in &rows {
        human.push_detail(row.human_line());
    }
    human.push_summary(
        "progress",
        format!("{} done / {} total", totals.done, totals.total),
    );
    if rows.is_empty() && filter.is_none() {
        human.push_next_step("studyplan add <title> --subject <subject> --date YYYY-MM-DD");
    }

    let report = ListReport {
        filter,
        count: rows.len(),
        tasks: rows,
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "list",
        &report,
        Some(&human),
    )?;

    Ok(())
}

pub fn run_show(opts: ShowOptions) -> Result<()> {
    let (config, store) = super::open_store(opts.store, opts.config.as_deref())?;

    let id = store.resolve_id(&opts.id)?;
    let task = store.get(&id).cloned().ok_or_else(|| {
        // resolve_id just matched, so this only races an external writer
        crate::error::Error::TaskNotFound(id.clone())
    })?;

    let today = Local::now().date_naive();
    let row = TaskRow::project(&task, today, &config.display.date_format);

    let mut human = HumanOutput::new(format!("studyplan show: \"{}\"", row.title));
    human.push_summary("id", row.id.clone());
    human.push_summary("subject", row.subject.clone());
    human.push_summary("due", format!("{} ({})", row.date, row.due_label));
    human.push_summary("done", row.done.to_string());
    if row.overdue {
        human.push_warning("task is overdue");
    }

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "show",
        &row,
        Some(&human),
    )?;

    Ok(())
}
