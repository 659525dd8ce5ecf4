/*!
# Merge Sort

Classic stable top-down merge sort over anything with a total order, in two
flavors: [`merge_sort`] reorders a mutable slice in place, while
[`index_sort`] leaves the input untouched and returns the sorting
permutation instead.

Both use a single auxiliary buffer allocated up front; the recursion depth
is logarithmic in the input length.
*/

/// Sorts the slice in ascending order. The sort is stable: equal elements
/// keep their relative order.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mut aux = items.to_vec();
    sort(items, &mut aux, 0, items.len());
    debug_assert!(items.is_sorted());
}

// sorts items[lo..hi]
fn sort<T: Ord + Clone>(items: &mut [T], aux: &mut [T], lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(items, aux, lo, mid);
    sort(items, aux, mid, hi);
    merge(items, aux, lo, mid, hi);
}

// stably merges the sorted runs items[lo..mid] and items[mid..hi]
fn merge<T: Ord + Clone>(items: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize) {
    aux[lo..hi].clone_from_slice(&items[lo..hi]);

    let (mut i, mut j) = (lo, mid);
    for k in lo..hi {
        if i >= mid {
            items[k] = aux[j].clone();
            j += 1;
        } else if j >= hi || aux[i] <= aux[j] {
            // taking from the left run on ties keeps the sort stable
            items[k] = aux[i].clone();
            i += 1;
        } else {
            items[k] = aux[j].clone();
            j += 1;
        }
    }
}

/// Returns the permutation that lists the indices of `items` in ascending
/// element order, i.e. `items[p[0]] <= items[p[1]] <= ...`, without mutating
/// the input. Stable like [`merge_sort`].
pub fn index_sort<T: Ord>(items: &[T]) -> Vec<usize> {
    let mut index: Vec<usize> = (0..items.len()).collect();
    let mut aux = index.clone();
    sort_index(items, &mut index, &mut aux, 0, items.len());
    index
}

// sorts index[lo..hi] by comparing the referenced elements
fn sort_index<T: Ord>(items: &[T], index: &mut [usize], aux: &mut [usize], lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_index(items, index, aux, lo, mid);
    sort_index(items, index, aux, mid, hi);

    aux[lo..hi].copy_from_slice(&index[lo..hi]);
    let (mut i, mut j) = (lo, mid);
    for k in lo..hi {
        if i >= mid {
            index[k] = aux[j];
            j += 1;
        } else if j >= hi || items[aux[i]] <= items[aux[j]] {
            index[k] = aux[i];
            i += 1;
        } else {
            index[k] = aux[j];
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sorts_like_the_standard_library() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for len in [0usize, 1, 2, 3, 10, 100, 1000] {
            let mut items: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
            let mut expected = items.clone();

            merge_sort(&mut items);
            expected.sort();
            assert_eq!(items, expected);
        }
    }

    #[test]
    fn sort_is_stable() {
        // equal keys carry distinct payloads that must keep their order
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        merge_sort_by_key(&mut items);

        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    // Ord on the pair would compare payloads too, so sort a key-only wrapper
    fn merge_sort_by_key(items: &mut [(u32, char)]) {
        let perm = index_sort(&items.iter().map(|&(k, _)| k).collect_vec());
        let sorted = perm.iter().map(|&i| items[i]).collect_vec();
        items.copy_from_slice(&sorted);
    }

    #[test]
    fn index_sort_leaves_input_untouched() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let before = items.clone();
        let perm = index_sort(&items);

        assert_eq!(items, before);
        assert!(perm.iter().map(|&i| items[i]).collect_vec().is_sorted());

        // a permutation visits every index exactly once
        assert_eq!(perm.iter().copied().sorted().collect_vec(), (0..items.len()).collect_vec());
    }

    #[test]
    fn index_sort_matches_merge_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for len in [0usize, 1, 7, 64, 500] {
            let items: Vec<u32> = (0..len).map(|_| rng.random_range(0..20)).collect();

            let via_index = index_sort(&items).into_iter().map(|i| items[i]).collect_vec();
            let mut direct = items.clone();
            merge_sort(&mut direct);

            assert_eq!(via_index, direct);
        }
    }

    #[test]
    fn sorts_strings() {
        let mut words: Vec<&str> = "bed bug dad yes zoo all bad yet".split(' ').collect();
        merge_sort(&mut words);
        assert_eq!(words.join(" "), "all bad bed bug dad yes yet zoo");
    }
}
