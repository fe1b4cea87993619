//! Scratch pool
//!
//! Lock-free pool of reusable decode scratch objects (cursors, tables).
//!
//! An acquired object is owned by its `Scratch` guard until the guard drops.
//! Dropping the guard resets the object and hands it back, so a decode that
//! bails out with `?` still returns its scratch objects clean.

use std::ops::{Deref, DerefMut};

use crossbeam::queue::ArrayQueue;

/// An object that can be wiped and reused across decode calls
pub trait Reusable: Default {
    /// Clear every field, releasing any borrowed or overflow storage
    fn reset(&mut self);
}

/// Bounded pool of idle scratch objects
pub struct ScratchPool<T: Reusable> {
    idle: ArrayQueue<T>,
}

impl<T: Reusable> ScratchPool<T> {
    /// Create a pool keeping at most `capacity` idle objects
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: ArrayQueue::new(capacity.max(1)),
        }
    }

    /// Take an idle object, or build a fresh one if none is idle
    pub fn acquire(&self) -> Scratch<'_, T> {
        let item = self.idle.pop().unwrap_or_default();
        Scratch { pool: self, item }
    }

    /// Number of idle objects
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    pub fn capacity(&self) -> usize {
        self.idle.capacity()
    }

    fn release(&self, mut item: T) {
        item.reset();
        // Pool full: let the object drop.
        let _ = self.idle.push(item);
    }
}

/// Exclusive handle on a pooled object; returns it on drop
pub struct Scratch<'p, T: Reusable> {
    pool: &'p ScratchPool<T>,
    item: T,
}

impl<T: Reusable> Deref for Scratch<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T: Reusable> DerefMut for Scratch<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

impl<T: Reusable> Drop for Scratch<'_, T> {
    fn drop(&mut self) {
        let item = std::mem::take(&mut self.item);
        self.pool.release(item);
    }
}
