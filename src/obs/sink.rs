// std
use std::collections::VecDeque;
// self
use crate::{_prelude::*, resolver::InvalidOverrideFormat};

/// Host-provided channel for advisory diagnostics raised while resolving overrides.
///
/// Diagnostics are never protocol-visible; the token requester only sees the default validity.
pub trait DiagnosticSink: Send + Sync {
	/// Receives one rejected override.
	fn invalid_override(&self, diagnostic: &InvalidOverrideFormat);
}

/// Sink that emits a `warn!` event per rejected override (no-op without the `tracing` feature).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;
impl DiagnosticSink for TracingSink {
	fn invalid_override(&self, diagnostic: &InvalidOverrideFormat) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(
				raw = diagnostic.raw.as_str(),
				reason = diagnostic.reason.as_str(),
				"{diagnostic}"
			);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = diagnostic;
		}
	}
}

/// Sink that keeps diagnostics in memory until the host drains them.
///
/// Holds at most `capacity` entries; once full, the oldest entry is discarded for every new one
/// and counted in [`BufferedSink::dropped`]. Hosts are expected to call [`BufferedSink::drain`]
/// periodically.
#[derive(Debug)]
pub struct BufferedSink {
	capacity: usize,
	state: Mutex<BufferState>,
}
#[derive(Debug, Default)]
struct BufferState {
	entries: VecDeque<InvalidOverrideFormat>,
	dropped: u64,
}
impl BufferedSink {
	/// Capacity used by [`BufferedSink::default`].
	pub const DEFAULT_CAPACITY: usize = 1_024;

	/// Creates a sink holding at most `capacity` diagnostics (minimum one).
	pub fn with_capacity(capacity: usize) -> Self {
		Self { capacity: capacity.max(1), state: Default::default() }
	}

	/// Maximum number of buffered diagnostics.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Number of buffered diagnostics.
	pub fn len(&self) -> usize {
		self.state.lock().entries.len()
	}

	/// Returns `true` when nothing is buffered.
	pub fn is_empty(&self) -> bool {
		self.state.lock().entries.is_empty()
	}

	/// Diagnostics discarded because the buffer was full, since creation.
	pub fn dropped(&self) -> u64 {
		self.state.lock().dropped
	}

	/// Removes and returns every buffered diagnostic, oldest first.
	pub fn drain(&self) -> Vec<InvalidOverrideFormat> {
		self.state.lock().entries.drain(..).collect()
	}
}
impl Default for BufferedSink {
	fn default() -> Self {
		Self::with_capacity(Self::DEFAULT_CAPACITY)
	}
}
impl DiagnosticSink for BufferedSink {
	fn invalid_override(&self, diagnostic: &InvalidOverrideFormat) {
		let mut state = self.state.lock();

		if state.entries.len() >= self.capacity {
			state.entries.pop_front();
			state.dropped += 1;
		}

		state.entries.push_back(diagnostic.clone());
	}
}
