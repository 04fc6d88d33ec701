//! Selection-based priority queue.

/// A queue whose removal order is decided by a "comes before" predicate.
///
/// `precedes(a, b)` must return `true` when `a` should be removed before
/// `b`. Items are stored unordered; [`remove`](Self::remove) scans them
/// and returns the first item no other item precedes. Among items the
/// predicate treats as equal, the earliest added is removed first.
///
/// # Examples
///
/// ```
/// use u_parcel::queue::PriorityQueue;
///
/// let mut pq = PriorityQueue::new(|a: &u32, b: &u32| a < b);
/// pq.add(5);
/// pq.add(1);
/// pq.add(3);
/// assert_eq!(pq.remove(), Some(1));
/// assert_eq!(pq.remove(), Some(3));
/// assert_eq!(pq.remove(), Some(5));
/// assert_eq!(pq.remove(), None);
/// ```
pub struct PriorityQueue<T, F> {
    items: Vec<T>,
    precedes: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty queue ordered by `precedes`.
    pub fn new(precedes: F) -> Self {
        Self {
            items: Vec::new(),
            precedes,
        }
    }

    /// Adds an item to the queue.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the highest-priority item.
    ///
    /// Returns `None` if the queue is empty.
    pub fn remove(&mut self) -> Option<T> {
        let first = self.items.first()?;
        let (best, _) = self
            .items
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, first), |(bi, b), (i, item)| {
                if (self.precedes)(item, b) {
                    (i, item)
                } else {
                    (bi, b)
                }
            });
        Some(self.items.remove(best))
    }

    /// Returns `true` if no items remain.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T, F> Extend<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
