//! Display order for task lists
//!
//! Incomplete tasks come first, oldest created first. Completed tasks
//! follow, earliest completed first. Ties keep their input order.

use std::cmp::Ordering;

use super::model::Task;

/// Compare two tasks by display order
pub fn compare(a: &Task, b: &Task) -> Ordering {
    match (a.is_complete(), b.is_complete()) {
        (false, false) => a.created_date().cmp(&b.created_date()),
        // An absent completion date sorts first; decoding never yields one.
        (true, true) => a.completed_date().cmp(&b.completed_date()),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
    }
}

/// Sort tasks in place for display
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(compare);
}

/// Return a sorted copy, leaving the input untouched
pub fn sorted_for_display(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sort_for_display(&mut sorted);
    sorted
}
