// Sort engines - selection sort and Hoare-partition quicksort over bid title

use crate::model::Bid;

/// In-place selection sort over `title`.
///
/// Θ(n²) comparisons regardless of input order, at most n-1 swaps. The
/// leftmost of equal minimum titles wins, so runs of equal keys keep their
/// relative order in practice, though no stability guarantee is made.
/// Lengths 0 and 1 are no-ops.
pub fn selection_sort(bids: &mut [Bid]) {
    let size = bids.len();
    if size < 2 {
        return;
    }

    for pos in 0..size - 1 {
        let mut min_index = pos;

        for j in pos + 1..size {
            if bids[j].title < bids[min_index].title {
                min_index = j;
            }
        }

        if min_index != pos {
            bids.swap(pos, min_index);
        }
    }
}

/// Partition the inclusive range `[begin, end]` around the title of the
/// lower-middle element and return the last index of the low partition.
///
/// Hoare scheme: `low` advances over titles below the pivot, `high` retreats
/// over titles above it, out-of-place pairs are swapped. The pivot is
/// captured by value before scanning starts, so a swap that relocates the
/// original pivot element cannot change the comparison target. Because the
/// pivot is drawn from inside the range, each scan stops at the pivot's
/// value at the latest and neither cursor can leave `[begin, end]`.
///
/// Callers must guarantee `begin < end`; `quick_sort_range` enforces that
/// with its base case.
///
/// Postcondition: every title in `[begin, high]` <= pivot and every title in
/// `[high+1, end]` >= pivot, with `high < end`.
pub fn partition(bids: &mut [Bid], begin: usize, end: usize) -> usize {
    let mut low = begin;
    let mut high = end;

    let middle_point = begin + (end - begin) / 2;
    let pivot = bids[middle_point].title.clone();

    loop {
        while bids[low].title < pivot {
            low += 1;
        }
        while pivot < bids[high].title {
            high -= 1;
        }

        // zero or one elements remain between the cursors: done
        if low >= high {
            return high;
        }

        bids.swap(low, high);
        low += 1;
        high -= 1;
    }
}

/// Quicksort the inclusive range `[begin, end]` by title.
///
/// Average O(n log n), worst O(n²) when pivot choices keep landing at a
/// boundary. The left recursion deliberately includes the returned boundary
/// index (`[begin, p]`, not `[begin, p-1]`): `partition` returns the last
/// index of the low half, which may still be out of place relative to the
/// rest of that half. Termination holds because `p < end` always, so both
/// sub-ranges are strictly smaller than `[begin, end]`.
pub fn quick_sort_range(bids: &mut [Bid], begin: usize, end: usize) {
    // empty or singleton range: already sorted
    if begin >= end {
        return;
    }

    let partition_index = partition(bids, begin, end);

    quick_sort_range(bids, begin, partition_index);
    quick_sort_range(bids, partition_index + 1, end);
}

/// Quicksort the whole sequence by title. Lengths 0 and 1 are no-ops.
pub fn quick_sort(bids: &mut [Bid]) {
    if bids.len() > 1 {
        quick_sort_range(bids, 0, bids.len() - 1);
    }
}
