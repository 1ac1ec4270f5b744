//! Read-only projections over a task snapshot.
//!
//! Pure functions only: nothing here mutates a task or touches storage.
//! Every call recomputes from the full snapshot, which is fine at the
//! collection sizes this tool handles.

use chrono::NaiveDate;
use serde::Serialize;

use crate::task::Task;

/// Aggregate counts over a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

/// Count total, done, and pending tasks
pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let done = tasks.iter().filter(|task| task.completed).count();
    Stats {
        total,
        done,
        pending: total - done,
    }
}

/// Filter by exact subject (when non-empty) and sort for display.
///
/// Sort policy: incomplete before complete, then ascending due date, with
/// creation time and id as tiebreaks so the order is total.
pub fn filtered_sorted(tasks: &[Task], subject_filter: Option<&str>) -> Vec<Task> {
    let filter = subject_filter.map(str::trim).filter(|s| !s.is_empty());
    let mut out: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.map_or(true, |subject| task.subject == subject))
        .cloned()
        .collect();

    out.sort_by(|left, right| {
        completion_rank(left)
            .cmp(&completion_rank(right))
            .then_with(|| left.due_date.cmp(&right.due_date))
            .then_with(|| left.created_at.cmp(&right.created_at))
            .then_with(|| left.id.cmp(&right.id))
    });
    out
}

fn completion_rank(task: &Task) -> usize {
    if task.completed {
        1
    } else {
        0
    }
}

/// A task is overdue when its due date has passed and it is not completed
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    task.due_date < today && !task.completed
}

/// Human label for a due date relative to `today`.
///
/// Near dates get a relative phrase, everything else the configured short
/// date format.
pub fn relative_label(task: &Task, today: NaiveDate, date_format: &str) -> String {
    let days = (task.due_date - today).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        2..=6 => format!("In {days} days"),
        -6..=-2 => format!("{} days ago", -days),
        _ => task.due_date.format(date_format).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::parse_due_date;

    fn task(id: &str, subject: &str, date: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            subject: subject.to_string(),
            due_date: parse_due_date(date).unwrap(),
            completed,
            created_at: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_due_date(s).unwrap()
    }

    #[test]
    fn stats_counts_always_balance() {
        let tasks = vec![
            task("a", "Math", "2025-01-10", true),
            task("b", "Math", "2025-01-11", false),
            task("c", "History", "2025-01-12", false),
        ];
        let stats = stats(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.done + stats.pending, stats.total);
    }

    #[test]
    fn empty_snapshot_has_zero_stats() {
        assert_eq!(
            stats(&[]),
            Stats {
                total: 0,
                done: 0,
                pending: 0
            }
        );
    }

    #[test]
    fn sort_puts_incomplete_first_then_due_date() {
        let tasks = vec![
            task("done-early", "Math", "2025-01-01", true),
            task("late", "Math", "2025-03-01", false),
            task("early", "Math", "2025-01-05", false),
        ];
        let sorted = filtered_sorted(&tasks, None);
        let ids: Vec<_> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "done-early"]);
    }

    #[test]
    fn filter_matches_subject_exactly() {
        let tasks = vec![
            task("a", "Math", "2025-01-10", false),
            task("b", "History", "2025-01-11", false),
        ];
        let only_math = filtered_sorted(&tasks, Some("Math"));
        assert_eq!(only_math.len(), 1);
        assert_eq!(only_math[0].id, "a");

        assert!(filtered_sorted(&tasks, Some("Chemistry")).is_empty());

        // Empty filter passes everything through
        assert_eq!(filtered_sorted(&tasks, Some("")).len(), 2);
        assert_eq!(filtered_sorted(&tasks, None).len(), 2);
    }

    #[test]
    fn overdue_requires_past_due_and_incomplete() {
        let today = day("2025-01-15");
        let pending = task("a", "Math", "2025-01-10", false);
        let completed = task("b", "Math", "2025-01-10", true);
        let due_today = task("c", "Math", "2025-01-15", false);

        assert!(is_overdue(&pending, today));
        assert!(!is_overdue(&completed, today));
        assert!(!is_overdue(&due_today, today));
    }

    #[test]
    fn relative_labels_cover_near_and_far_dates() {
        let today = day("2025-01-15");
        let label = |date: &str| relative_label(&task("x", "Math", date, false), today, "%d %b %Y");

        assert_eq!(label("2025-01-15"), "Today");
        assert_eq!(label("2025-01-16"), "Tomorrow");
        assert_eq!(label("2025-01-14"), "Yesterday");
        assert_eq!(label("2025-01-18"), "In 3 days");
        assert_eq!(label("2025-01-12"), "3 days ago");
        assert_eq!(label("2025-03-01"), "01 Mar 2025");
    }
}
