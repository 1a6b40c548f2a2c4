// SPDX-FileCopyrightText: 2026 Gabay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Progress statistics derived from a milestone tree.
//!
//! Progress is always recomputed from the full tree rather than maintained
//! incrementally. At this scale (tens of tasks) the O(n) pass is cheaper
//! than reconciling drift.

use crate::types::{Milestone, Progress};

/// Compute progress statistics for a milestone tree.
///
/// `current_milestone_index` is the first milestone containing an
/// incomplete task; when every task is complete it is the last index.
/// An empty tree yields index 0.
pub fn compute_progress(milestones: &[Milestone]) -> Progress {
    let total_tasks: usize = milestones.iter().map(|m| m.tasks.len()).sum();
    let completed_tasks: usize = milestones
        .iter()
        .map(|m| m.tasks.iter().filter(|t| t.completed).count())
        .sum();

    let progress_pct = if total_tasks == 0 {
        0
    } else {
        (100.0 * completed_tasks as f64 / total_tasks as f64).round() as u32
    };

    let current_milestone_index = milestones
        .iter()
        .position(|m| m.tasks.iter().any(|t| !t.completed))
        .unwrap_or(milestones.len().saturating_sub(1));

    Progress {
        total_tasks,
        completed_tasks,
        progress_pct,
        current_milestone_index,
    }
}

/// True iff the tree has tasks and all of them are complete.
pub fn is_completed(progress: &Progress) -> bool {
    progress.total_tasks > 0 && progress.completed_tasks == progress.total_tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    fn milestone(id: &str, completed_flags: &[bool]) -> Milestone {
        Milestone {
            id: id.to_string(),
            title: format!("Milestone {id}"),
            overview: String::new(),
            skills: vec![],
            timeframe: "Month 1".to_string(),
            resources: vec![],
            tasks: completed_flags
                .iter()
                .enumerate()
                .map(|(i, &completed)| Task {
                    id: format!("{id}-t{i}"),
                    title: format!("Task {i}"),
                    description: String::new(),
                    duration: "1 hour".to_string(),
                    completed,
                })
                .collect(),
        }
    }

    #[test]
    fn twelve_tasks_five_complete_rounds_to_42() {
        let ms = vec![
            milestone("m1", &[true, true, true]),
            milestone("m2", &[true, true, false]),
            milestone("m3", &[false, false, false]),
            milestone("m4", &[false, false, false]),
        ];
        let p = compute_progress(&ms);
        assert_eq!(p.total_tasks, 12);
        assert_eq!(p.completed_tasks, 5);
        assert_eq!(p.progress_pct, 42);
        assert_eq!(p.current_milestone_index, 1);
        assert!(!is_completed(&p));
    }

    #[test]
    fn zero_tasks_yields_zero_pct_and_not_completed() {
        let ms = vec![milestone("m1", &[]), milestone("m2", &[])];
        let p = compute_progress(&ms);
        assert_eq!(p.total_tasks, 0);
        assert_eq!(p.progress_pct, 0);
        assert!(!is_completed(&p));
    }

    #[test]
    fn all_complete_points_at_last_milestone() {
        let ms = vec![
            milestone("m1", &[true, true]),
            milestone("m2", &[true]),
        ];
        let p = compute_progress(&ms);
        assert_eq!(p.completed_tasks, 3);
        assert_eq!(p.progress_pct, 100);
        assert_eq!(p.current_milestone_index, 1);
        assert!(is_completed(&p));
    }

    #[test]
    fn empty_tree_yields_index_zero() {
        // Preserved source behavior for the degenerate tree.
        let p = compute_progress(&[]);
        assert_eq!(p.current_milestone_index, 0);
        assert_eq!(p.total_tasks, 0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let ms = vec![milestone("m1", &[true, false])];
        let first = compute_progress(&ms);
        let second = compute_progress(&ms);
        assert_eq!(first, second);
    }

    #[test]
    fn completed_never_exceeds_total() {
        let ms = vec![
            milestone("m1", &[true, true, true]),
            milestone("m2", &[false]),
        ];
        let p = compute_progress(&ms);
        assert!(p.completed_tasks <= p.total_tasks);
    }
}
