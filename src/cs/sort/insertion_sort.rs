/// Sorts a short slice in place using insertion sort.
///
/// Used to order the groups of the median-of-medians selector and to finish
/// off its base case, where inputs never exceed a handful of elements and the
/// simplicity of insertion sort beats asymptotically faster sorts.
///
/// The sort is stable and allocation-free. Elements that cannot be compared
/// (such as `NaN`) are left where the scan stops; the resulting order is
/// unspecified but the call never panics.
///
/// # Examples
///
/// ```
/// use momselect::cs::sort::insertion_sort;
///
/// let mut group = [9, 4, 7, 1, 4];
/// insertion_sort(&mut group);
/// assert_eq!(group, [1, 4, 4, 7, 9]);
/// ```
///
/// # Complexity
/// * Time: O(m²) for a slice of length m
/// * Space: O(1)
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        // Shift the new element left past every strictly greater neighbour
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
