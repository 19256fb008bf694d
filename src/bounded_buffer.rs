use std::fmt;
use std::sync::{Condvar, Mutex};

/// Returned by `insert`/`remove` when the buffer was closed while the
/// caller was blocked (or before it could queue anything).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed;

impl fmt::Display for Closed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bounded buffer is closed")
    }
}

impl std::error::Error for Closed {}

#[derive(Debug)]
struct Ring<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
    closed: bool,
}

impl<T> Ring<T> {
    fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
            closed: false,
        }
    }

    fn push(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
    }

    fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            let value = self.slots[self.head].take();
            self.head = (self.head + 1) % self.slots.len();
            self.count -= 1;
            value
        }
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }
}

/// Fixed-capacity FIFO handoff between one producer thread and one
/// consumer thread. All buffer state lives behind one mutex; the two
/// condvars carry the "no longer full" / "no longer empty" wakeups.
pub struct BoundedBuffer<T> {
    inner: Mutex<Ring<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            inner: Mutex::new(Ring::new(capacity)),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Blocks while the buffer is full. Fails only if `close` fires
    /// before a slot opens up.
    pub fn insert(&self, item: T) -> Result<(), Closed> {
        let mut ring = self.inner.lock().unwrap();

        // Re-check the guard after every wakeup.
        while ring.is_full() && !ring.closed {
            ring = self.not_full.wait(ring).unwrap();
        }
        if ring.closed {
            return Err(Closed);
        }

        ring.push(item);

        // Leaving the empty state is the only insert that can have a
        // consumer waiting (single producer, single consumer).
        if ring.count == 1 {
            self.not_empty.notify_one();
        }

        Ok(())
    }

    /// Blocks while the buffer is empty. After `close`, keeps returning
    /// buffered items until the backlog is drained, then fails.
    pub fn remove(&self) -> Result<T, Closed> {
        let mut ring = self.inner.lock().unwrap();

        while ring.is_empty() && !ring.closed {
            ring = self.not_empty.wait(ring).unwrap();
        }

        match ring.pop() {
            Some(item) => {
                // Symmetric to insert: only leaving the full state can
                // have a producer waiting.
                if ring.count == self.capacity - 1 {
                    self.not_full.notify_one();
                }
                Ok(item)
            }
            None => Err(Closed),
        }
    }

    /// Shuts the buffer down: blocked callers wake up and observe the
    /// latch, later inserts fail immediately, removes drain whatever is
    /// still queued. Idempotent.
    pub fn close(&self) {
        let mut ring = self.inner.lock().unwrap();
        ring.closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
