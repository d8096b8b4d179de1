use super::*;
use crate::util::contributions::{DAYS_PER_WEEK, WEEKS};

#[test]
fn day_labels_show_odd_rows_only() {
    let labels: Vec<_> = (0..DAYS.len()).map(day_label).collect();
    assert_eq!(labels, ["", "Mon", "", "Wed", "", "Fri", ""]);
}

#[test]
fn day_label_out_of_range_is_blank() {
    assert_eq!(day_label(9), "");
}

#[test]
fn summary_counts_every_level() {
    let weeks = vec![[1; DAYS_PER_WEEK]; WEEKS];
    assert_eq!(contribution_summary(&weeks), "364 contributions in the last year");
}

#[test]
fn summary_of_empty_graph() {
    assert_eq!(contribution_summary(&[]), "0 contributions in the last year");
}
