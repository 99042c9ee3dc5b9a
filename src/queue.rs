//! Bounded intent queue for `no_std` environments.
//!
//! Built on `critical-section` and `heapless::Deque` so presentation-layer
//! tasks and interrupt handlers can hand work to the render loop without a
//! heap or an async runtime.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A bounded, thread-safe FIFO queue.
pub struct Queue<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Queue<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Producer handle; multiple producers may share the queue.
    pub const fn producer(&self) -> Producer<'_, T, SIZE> {
        Producer { queue: self }
    }

    /// Consumer handle; typically a single consumer drains the queue.
    pub const fn consumer(&self) -> Consumer<'_, T, SIZE> {
        Consumer { queue: self }
    }

    /// Push a value; hands it back when the queue is full.
    pub fn push(&self, value: T) -> Result<(), T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().push_back(value))
    }

    /// Pop the oldest value, if any.
    pub fn pop(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<T, const SIZE: usize> Default for Queue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight producer handle for a [`Queue`].
#[derive(Clone, Copy)]
pub struct Producer<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> Producer<'_, T, SIZE> {
    /// Push a value; hands it back when the queue is full.
    pub fn push(&self, value: T) -> Result<(), T> {
        self.queue.push(value)
    }
}

/// Lightweight consumer handle for a [`Queue`].
#[derive(Clone, Copy)]
pub struct Consumer<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> Consumer<'_, T, SIZE> {
    /// Pop the oldest value, if any.
    pub fn pop(&self) -> Option<T> {
        self.queue.pop()
    }
}
