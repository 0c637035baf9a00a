/// Finds the length of the common prefix between a key and a symbol fragment.
///
/// Returns the number of symbols that match starting from the given offset.
pub fn prefix_match<S: PartialEq>(key: &[S], start_idx: usize, fragment: &[S]) -> usize {
    let key = key.get(start_idx..).unwrap_or(&[]);

    key.iter()
        .zip(fragment.iter())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Returns `true` if `key` begins with every symbol of `prefix`.
pub fn starts_with<S: PartialEq>(key: &[S], prefix: &[S]) -> bool {
    prefix_match(key, 0, prefix) == prefix.len()
}
