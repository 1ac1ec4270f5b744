//! Command-line interface for studyplan
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::store::TaskStore;

mod add;
mod edit;
mod list;
mod rm;
mod stats;
mod subjects;
mod toggle;

/// studyplan - local study-task planner
///
/// Track study tasks (title, subject, due date), mark them done, filter by
/// subject, and see aggregate progress. State lives in a single local JSON
/// file.
#[derive(Parser, Debug)]
#[command(name = "studyplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task store file (defaults to the per-user data dir)
    #[arg(long, global = true, env = "STUDYPLAN_STORE")]
    pub store: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, env = "STUDYPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Subject the task belongs to
        #[arg(long)]
        subject: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Edit a task's title, subject, or due date
    Edit {
        /// Task id (or unique prefix)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New subject
        #[arg(long)]
        subject: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Toggle a task between pending and done
    Done {
        /// Task id (or unique prefix)
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task id (or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List tasks, incomplete first, soonest due date on top
    List {
        /// Only show tasks with this exact subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Show one task in detail
    Show {
        /// Task id (or unique prefix)
        id: String,
    },

    /// Show total / done / pending counts
    Stats,

    /// List the distinct subjects currently in the store
    Subjects,
}

/// Load config and open the task store the command will operate on
pub(crate) fn open_store(
    store_override: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(Config, TaskStore)> {
    let config = Config::resolve(config_path)?;
    let path = store_override.unwrap_or_else(|| config.store_path());
    let store = TaskStore::open(Storage::new(path), config.store_policy());
    Ok((config, store))
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add {
                title,
                subject,
                date,
            } => add::run(add::AddOptions {
                title,
                subject,
                date,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Edit {
                id,
                title,
                subject,
                date,
            } => edit::run(edit::EditOptions {
                id,
                title,
                subject,
                date,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { id } => toggle::run(toggle::ToggleOptions {
                id,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id, yes } => rm::run(rm::RmOptions {
                id,
                yes,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List { subject } => list::run_list(list::ListOptions {
                subject,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Show { id } => list::run_show(list::ShowOptions {
                id,
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Stats => stats::run(stats::StatsOptions {
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Subjects => subjects::run(subjects::SubjectsOptions {
                store: self.store,
                config: self.config,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
