use std::collections::HashMap;
use std::hash::Hash;

/// Frequency table sorted by count descending; ties keep first-seen
/// order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut table: Vec<(T, usize)> = Vec::with_capacity(order.len());
    for value in order {
        if let Some(count) = counts.remove(&value) {
            table.push((value, count));
        }
    }

    // Stable sort, so equal counts stay in first-seen order.
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// The most frequent value; ties broken by first occurrence. Returns
/// `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_empty_input() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode(vec![1, 2, 2, 3, 2]), Some(2));
    }

    #[test]
    fn test_mode_tie_breaks_by_first_seen() {
        assert_eq!(mode(vec![5, 5, 9, 9]), Some(5));
        assert_eq!(mode(vec![9, 5, 5, 9]), Some(9));
    }

    #[test]
    fn test_value_counts_orders_desc_then_first_seen() {
        let table = value_counts(vec!["b", "a", "a", "c", "b", "a"]);
        assert_eq!(table, vec![("a", 3), ("b", 2), ("c", 1)]);

        let tied = value_counts(vec!["x", "y", "x", "y"]);
        assert_eq!(tied, vec![("x", 2), ("y", 2)]);
    }
}
