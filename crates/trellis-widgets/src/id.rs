//! Auto-generated widget ids
//!
//! Widgets without an explicit id receive `prefix + counter`, where the
//! counter is shared by every widget rendered through the same allocator.
//! The process-wide allocator is reachable through [`IdAllocator::global`];
//! tests reset it (or use a private allocator) to get deterministic ids.

use crate::error::{Result, WidgetError};
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix used when none is configured
pub const DEFAULT_ID_PREFIX: &str = "w";

static GLOBAL_ALLOCATOR: Lazy<Arc<IdAllocator>> = Lazy::new(|| Arc::new(IdAllocator::new()));

/// Atomically incrementing id source
#[derive(Debug)]
pub struct IdAllocator {
	prefix: String,
	counter: AtomicU64,
}

impl IdAllocator {
	/// Creates an allocator with the default `w` prefix starting at 0.
	pub fn new() -> Self {
		Self::with_prefix(DEFAULT_ID_PREFIX)
	}

	/// Creates an allocator with a custom prefix starting at 0.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			counter: AtomicU64::new(0),
		}
	}

	/// Sets the first counter value handed out.
	pub fn starting_at(self, start: u64) -> Self {
		self.counter.store(start, Ordering::SeqCst);
		self
	}

	/// Returns the process-wide allocator.
	pub fn global() -> Arc<IdAllocator> {
		Arc::clone(&GLOBAL_ALLOCATOR)
	}

	/// Returns the id prefix.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Returns the counter value the next id will use.
	pub fn peek(&self) -> u64 {
		self.counter.load(Ordering::SeqCst)
	}

	/// Hands out the next id.
	///
	/// # Errors
	///
	/// Returns [`WidgetError::IdSpaceExhausted`] instead of wrapping the counter.
	pub fn next_id(&self) -> Result<String> {
		let value = self
			.counter
			.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
			.map_err(|_| WidgetError::IdSpaceExhausted {
				prefix: self.prefix.clone(),
			})?;
		let id = format!("{}{}", self.prefix, value);
		tracing::debug!(id = %id, "allocated widget id");
		Ok(id)
	}

	/// Resets the counter to 0.
	pub fn reset(&self) {
		self.reset_to(0);
	}

	/// Resets the counter to `value`.
	pub fn reset_to(&self, value: u64) {
		self.counter.store(value, Ordering::SeqCst);
	}
}

impl Default for IdAllocator {
	fn default() -> Self {
		Self::new()
	}
}
