use tracing::{debug, trace};

use crate::model::Span;

/// One interval's slot in the currently open group.
struct Member {
    span: Span,
    column: usize,
}

/// Assign a column and a column span to each interval of a sorted scan.
///
/// `spans` must already be in canonical scan order (ascending start, ties by
/// descending duration); each interval is only compared against the group
/// that is open when it arrives, so the order decides correctness.
///
/// Returns `(column, column_span)` per interval, index-aligned with `spans`,
/// plus the global column count (the widest group wins — every group is
/// rendered across the same full-width track).
pub(super) fn assign_columns(spans: &[Span]) -> (Vec<(usize, usize)>, usize) {
    let mut placements = Vec::with_capacity(spans.len());
    let mut group: Vec<Member> = Vec::new();
    let mut groups = 0usize;
    let mut total_columns = 0usize;

    for &span in spans {
        let column = if group.is_empty() {
            groups += 1;
            0
        } else {
            let colliding: Vec<usize> = group
                .iter()
                .filter(|m| m.span.overlaps(&span))
                .map(|m| m.column)
                .collect();
            if colliding.is_empty() {
                // No overlap with the active cluster: close it and open a
                // fresh one.
                group.clear();
                groups += 1;
                0
            } else if colliding.len() == group.len() {
                // Collides with every member so far: the group grows by one
                // column.
                group.len()
            } else {
                first_free_column(&colliding)
            }
        };

        group.push(Member { span, column });
        // Span is the group's size at placement time, the placed interval
        // included. It is never recomputed when the group keeps growing.
        let column_span = group.len();
        total_columns = total_columns.max(column + 1);
        trace!(start = span.start, end = span.end, column, column_span, "placed");
        placements.push((column, column_span));
    }

    debug!(intervals = spans.len(), groups, total_columns, "columns assigned");
    (placements, total_columns)
}

/// Smallest column index not used by any colliding member (first-fit).
fn first_free_column(used: &[usize]) -> usize {
    let mut column = 0;
    while used.contains(&column) {
        column += 1;
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: i64, end: i64) -> Span {
        Span::new(start, end)
    }

    #[test]
    fn single_interval() {
        let (placements, total) = assign_columns(&[span(540, 600)]);
        assert_eq!(placements, vec![(0, 1)]);
        assert_eq!(total, 1);
    }

    #[test]
    fn disjoint_intervals_restart_at_column_zero() {
        let (placements, total) = assign_columns(&[span(0, 60), span(120, 180)]);
        assert_eq!(placements, vec![(0, 1), (0, 1)]);
        assert_eq!(total, 1);
    }

    #[test]
    fn touching_endpoints_do_not_collide() {
        let (placements, total) = assign_columns(&[span(0, 60), span(60, 120)]);
        assert_eq!(placements, vec![(0, 1), (0, 1)]);
        assert_eq!(total, 1);
    }

    #[test]
    fn mutual_overlap_grows_group() {
        let (placements, total) = assign_columns(&[span(0, 90), span(30, 120)]);
        assert_eq!(placements, vec![(0, 1), (1, 2)]);
        assert_eq!(total, 2);
    }

    #[test]
    fn partial_collision_takes_first_free_column() {
        // A spans the cluster; B and C overlap A but not each other, so C
        // reuses B's side of the track via first-fit.
        let (placements, total) =
            assign_columns(&[span(0, 240), span(30, 90), span(120, 180)]);
        assert_eq!(placements, vec![(0, 1), (1, 2), (1, 3)]);
        assert_eq!(total, 2);
    }

    #[test]
    fn freed_column_is_reused_in_chain() {
        // [60,120) overlaps [30,90) but not [0,60): column 0 is free again.
        let (placements, total) =
            assign_columns(&[span(0, 60), span(30, 90), span(60, 120)]);
        assert_eq!(placements, vec![(0, 1), (1, 2), (0, 3)]);
        assert_eq!(total, 2);
    }

    #[test]
    fn three_way_pileup_uses_three_columns() {
        let (placements, total) =
            assign_columns(&[span(0, 120), span(30, 150), span(60, 180)]);
        assert_eq!(placements, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(total, 3);
    }

    #[test]
    fn widest_group_sets_global_columns() {
        // First cluster needs two columns; the later lone interval still
        // reports against the same two-column track.
        let (placements, total) =
            assign_columns(&[span(0, 90), span(30, 120), span(300, 360)]);
        assert_eq!(placements, vec![(0, 1), (1, 2), (0, 1)]);
        assert_eq!(total, 2);
    }

    #[test]
    fn column_span_is_frozen_at_placement() {
        // The cluster ends up three wide, but the first interval keeps the
        // width it saw when it was placed.
        let (placements, _) =
            assign_columns(&[span(0, 300), span(30, 150), span(60, 180)]);
        assert_eq!(placements[0], (0, 1));
    }

    #[test]
    fn dense_chain_spans_overrun_track() {
        // Late arrivals in a growing cluster record spans wider than the
        // track ever gets (4 columns here): historical widths, kept as-is.
        let (placements, total) = assign_columns(&[
            span(0, 400),
            span(10, 100),
            span(120, 200),
            span(130, 210),
            span(140, 390),
        ]);
        assert_eq!(
            placements,
            vec![(0, 1), (1, 2), (1, 3), (2, 4), (3, 5)]
        );
        assert_eq!(total, 4);
    }

    #[test]
    fn empty_scan() {
        let (placements, total) = assign_columns(&[]);
        assert!(placements.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn first_free_column_probes_gaps() {
        assert_eq!(first_free_column(&[]), 0);
        assert_eq!(first_free_column(&[0]), 1);
        assert_eq!(first_free_column(&[1]), 0);
        assert_eq!(first_free_column(&[0, 1, 3]), 2);
        assert_eq!(first_free_column(&[1, 0, 1]), 2);
    }
}
