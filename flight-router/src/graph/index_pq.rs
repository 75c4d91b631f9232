//! Indexed min-priority queue.
//!
//! A binary min-heap over a fixed universe of integer indices, with the heap
//! position of every index tracked so an entry's key can be updated or the
//! entry deleted in O(log n). This is the queue that drives the shortest-path
//! search, where the index is a graph vertex and the key its tentative
//! distance.

/// A binary min-heap keyed by `K`, addressing entries by integer index.
///
/// Capacity is fixed at construction; all operations address entries by an
/// index in `0..capacity`. Internally the heap is 1-based: `pq` maps heap
/// position to index and `qp` maps index back to heap position (`None` when
/// absent), and the two stay mutual inverses for every present index.
///
/// Comparisons are strict, so equal keys keep whatever order the heap
/// structure already has; for a fixed operation sequence the result is
/// deterministic.
///
/// Misuse (out-of-range index, inserting a present index, updating an absent
/// one, updating in the wrong direction) is a caller bug and panics with a
/// message.
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    /// Number of entries currently on the heap.
    n: usize,
    /// Heap position -> index, 1-based (`pq[0]` unused).
    pq: Vec<usize>,
    /// Index -> heap position.
    qp: Vec<Option<usize>>,
    /// Index -> key, for present indices.
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd> IndexMinPq<K> {
    /// Create an empty queue over indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            n: 0,
            pq: vec![0; capacity + 1],
            qp: vec![None; capacity],
            keys: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.qp.len()
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Whether `index` is currently on the queue.
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.capacity(), "index {index} out of range");
        self.qp[index].is_some()
    }

    /// Add `index` with the given key.
    ///
    /// Panics if `index` is out of range or already present.
    pub fn insert(&mut self, index: usize, key: K) {
        assert!(!self.contains(index), "index {index} is already present");
        self.n += 1;
        self.pq[self.n] = index;
        self.qp[index] = Some(self.n);
        self.keys[index] = Some(key);
        self.swim(self.n);
    }

    /// Index holding the smallest key, if any.
    pub fn min_index(&self) -> Option<usize> {
        (self.n > 0).then(|| self.pq[1])
    }

    /// Smallest key on the queue, if any.
    pub fn min_key(&self) -> Option<&K> {
        self.min_index().and_then(|i| self.keys[i].as_ref())
    }

    /// Remove the entry with the smallest key and return its index.
    pub fn del_min(&mut self) -> Option<usize> {
        if self.n == 0 {
            return None;
        }
        let min = self.pq[1];
        self.exchange(1, self.n);
        self.n -= 1;
        self.sink(1);
        self.qp[min] = None;
        self.keys[min] = None;
        Some(min)
    }

    /// Lower `index`'s key to a strictly smaller value.
    ///
    /// Panics if `index` is absent or `key` is not strictly smaller than the
    /// current key. The entry only ever moves toward the root here; lowering
    /// a key with [`increase_key`](Self::increase_key) instead would leave
    /// the heap order silently violated, which is why the direction is
    /// asserted.
    pub fn decrease_key(&mut self, index: usize, key: K) {
        let Some(position) = self.qp.get(index).copied().flatten() else {
            panic!("index {index} is not present");
        };
        assert!(
            Some(&key) < self.keys[index].as_ref(),
            "decrease_key requires a strictly smaller key"
        );
        self.keys[index] = Some(key);
        self.swim(position);
    }

    /// Raise `index`'s key to a strictly larger value.
    ///
    /// Panics if `index` is absent or `key` is not strictly larger than the
    /// current key.
    pub fn increase_key(&mut self, index: usize, key: K) {
        let Some(position) = self.qp.get(index).copied().flatten() else {
            panic!("index {index} is not present");
        };
        assert!(
            Some(&key) > self.keys[index].as_ref(),
            "increase_key requires a strictly larger key"
        );
        self.keys[index] = Some(key);
        self.sink(position);
    }

    /// Remove an arbitrary present entry.
    ///
    /// Panics if `index` is absent.
    pub fn delete(&mut self, index: usize) {
        let Some(position) = self.qp.get(index).copied().flatten() else {
            panic!("index {index} is not present");
        };
        self.exchange(position, self.n);
        self.n -= 1;
        self.swim(position);
        self.sink(position);
        self.qp[index] = None;
        self.keys[index] = None;
    }

    /// Strict greater-than between the keys at two heap positions.
    fn greater(&self, i: usize, j: usize) -> bool {
        self.keys[self.pq[i]].as_ref() > self.keys[self.pq[j]].as_ref()
    }

    /// Swap two heap positions, keeping `qp` the inverse of `pq`.
    fn exchange(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = Some(i);
        self.qp[self.pq[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exchange(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.n {
            let mut j = 2 * k;
            if j < self.n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.exchange(k, j);
            k = j;
        }
    }
}
