//! Set-style partitioning and multi-sequence zipping.

use crate::sequence::Sequence;
use crate::{Error, Result};

/// Splits `items` into the elements satisfying `predicate` and the rest.
///
/// Both halves keep the input order.
///
/// ```
/// use sequence_immutable::partition;
///
/// let (even, odd) = partition(&[0, 1, 2, 3, 4], |v| v % 2 == 0);
/// assert_eq!(even.as_slice(), &[0, 2, 4]);
/// assert_eq!(odd.as_slice(), &[1, 3]);
/// ```
pub fn partition<T, P>(items: &[T], mut predicate: P) -> (Sequence<T>, Sequence<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let (accepted, rejected): (Vec<T>, Vec<T>) =
        items.iter().cloned().partition(|item| predicate(item));
    (Sequence::from(accepted), Sequence::from(rejected))
}

/// Keeps the elements satisfying `predicate`.
pub fn filter<T, P>(items: &[T], mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Drops the elements satisfying `predicate`.
pub fn reject<T, P>(items: &[T], mut predicate: P) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Transposes equally sized sequences: output `i` holds element `i` of every input.
///
/// ```
/// use sequence_immutable::{zip, Sequence};
///
/// let a = Sequence::from(vec![10, 11, 12]);
/// let b = Sequence::from(vec![20, 21, 22]);
/// let zipped = zip(&[a, b]).unwrap();
///
/// assert_eq!(zipped[1].as_slice(), &[11, 21]);
/// ```
pub fn zip<T: Clone>(sequences: &[Sequence<T>]) -> Result<Sequence<Sequence<T>>> {
    let expected = match sequences.first() {
        Some(first) => first.len(),
        None => return Ok(Sequence::new()),
    };

    for (index, sequence) in sequences.iter().enumerate() {
        if sequence.len() != expected {
            return Err(Error::LengthMismatch {
                index,
                expected,
                found: sequence.len(),
            });
        }
    }

    Ok((0..expected)
        .map(|position| {
            sequences
                .iter()
                .map(|sequence| sequence[position].clone())
                .collect()
        })
        .collect())
}

/// Pairs up two equally sized sequences of possibly different element types.
pub fn zip_pairs<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Result<Sequence<(A, B)>> {
    if left.len() != right.len() {
        return Err(Error::LengthMismatch {
            index: 1,
            expected: left.len(),
            found: right.len(),
        });
    }

    Ok(left.iter().cloned().zip(right.iter().cloned()).collect())
}
