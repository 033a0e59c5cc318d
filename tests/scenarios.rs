//! Lane assignment scenarios
//!
//! Day numbers are days of January 2021; every task is `(id, first day, last day)`.

use chrono::NaiveDate;
use rstest::rstest;
use u_timeline::config::BoundaryRule;
use u_timeline::lanes::{max_overlap_depth, LaneAssigner};
use u_timeline::models::Task;

fn tasks(rows: &[(&str, u32, u32)]) -> Vec<Task> {
    rows.iter()
        .map(|&(id, start, end)| {
            Task::new(
                id,
                NaiveDate::from_ymd_opt(2021, 1, start).unwrap(),
                NaiveDate::from_ymd_opt(2021, 1, end).unwrap(),
            )
        })
        .collect()
}

#[rstest]
#[case::empty(&[], vec![])]
#[case::single_day(&[("A", 1, 1)], vec![vec!["A"]])]
#[case::nested(&[("A", 1, 5), ("B", 2, 3)], vec![vec!["A"], vec!["B"]])]
#[case::sequential(&[("A", 1, 2), ("B", 3, 4)], vec![vec!["A", "B"]])]
#[case::chain_shares_day_three(
    &[("A", 1, 3), ("B", 2, 4), ("C", 3, 5)],
    vec![vec!["A"], vec!["B"], vec!["C"]]
)]
#[case::touching_ends(&[("A", 1, 3), ("B", 3, 5)], vec![vec!["A"], vec!["B"]])]
#[case::unsorted_input(
    &[("D", 8, 9), ("C", 4, 6), ("B", 2, 5), ("A", 1, 3)],
    vec![vec!["A", "C", "D"], vec!["B"]]
)]
fn inclusive_scenarios(#[case] input: &[(&str, u32, u32)], #[case] expected: Vec<Vec<&str>>) {
    let tasks = tasks(input);
    let lanes = LaneAssigner::new().assign(&tasks).unwrap();
    assert_eq!(lanes.ids(), expected);
}

#[rstest]
#[case::chain(&[("A", 1, 3), ("B", 2, 4), ("C", 3, 5)], vec![vec!["A", "C"], vec!["B"]])]
#[case::back_to_back(&[("A", 1, 3), ("B", 3, 5), ("C", 5, 7)], vec![vec!["A", "B", "C"]])]
#[case::nested(&[("A", 1, 5), ("B", 2, 3)], vec![vec!["A"], vec!["B"]])]
fn exclusive_scenarios(#[case] input: &[(&str, u32, u32)], #[case] expected: Vec<Vec<&str>>) {
    let tasks = tasks(input);
    let lanes = LaneAssigner::new()
        .with_boundary(BoundaryRule::Exclusive)
        .assign(&tasks)
        .unwrap();
    assert_eq!(lanes.ids(), expected);
}

#[rstest]
fn chain_lane_count_matches_depth(
    #[values(BoundaryRule::Inclusive, BoundaryRule::Exclusive)] boundary: BoundaryRule,
) {
    let tasks = tasks(&[("A", 1, 3), ("B", 2, 4), ("C", 3, 5)]);
    let lanes = LaneAssigner::new().with_boundary(boundary).assign(&tasks).unwrap();

    assert_eq!(lanes.task_count(), 3);
    assert_eq!(lanes.len(), max_overlap_depth(&tasks, boundary).unwrap());
    for lane in &lanes {
        for (i, a) in lane.tasks.iter().enumerate() {
            for b in &lane.tasks[i + 1..] {
                assert!(!boundary.overlaps((a.start, a.end), (b.start, b.end)));
            }
        }
    }
}
