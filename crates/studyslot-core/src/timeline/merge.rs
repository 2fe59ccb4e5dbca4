//! Collapsing busy intervals into a disjoint, sorted set.

use super::TimeInterval;

/// Merge possibly-overlapping intervals.
///
/// Output is sorted by start and pairwise disjoint; intervals that overlap
/// or merely touch (`next.start <= current.end`) are joined.
pub fn merge_intervals<I>(intervals: I) -> Vec<TimeInterval>
where
    I: IntoIterator<Item = TimeInterval>,
{
    let mut sorted: Vec<TimeInterval> = intervals.into_iter().collect();
    sorted.sort_by_key(|iv| iv.start());

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start() <= last.end() {
                last.extend_end(iv.end());
                continue;
            }
        }
        merged.push(iv);
    }
    merged
}
