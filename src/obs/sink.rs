// self
use crate::_prelude::*;

/// Category of a log line emitted by the built-in interceptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogKind {
	/// Identity token could not be attached; the request continued without it.
	AuthTokenFailure,
	/// Any failed request.
	ApiError,
	/// Failed request that never received a response.
	NetworkError,
}
impl LogKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LogKind::AuthTokenFailure => "auth_token_failure",
			LogKind::ApiError => "api_error",
			LogKind::NetworkError => "network_error",
		}
	}
}
impl Display for LogKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One human-readable log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
	/// Category of the entry.
	pub kind: LogKind,
	/// Rendered message.
	pub message: String,
}
impl LogLine {
	/// Creates a new line.
	pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
		Self { kind, message: message.into() }
	}
}

/// Destination for interceptor log lines.
pub trait LogSink
where
	Self: Send + Sync,
{
	/// Receives one line.
	fn log(&self, line: LogLine);
}

/// Forwards lines to `tracing` at `ERROR` level under the `shopease_api_client` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;
impl LogSink for TracingSink {
	fn log(&self, line: LogLine) {
		tracing::error!(target: "shopease_api_client", kind = line.kind.as_str(), "{}", line.message);
	}
}

/// Keeps every line in memory; clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemoryLogSink {
	lines: Arc<Mutex<Vec<LogLine>>>,
}
impl MemoryLogSink {
	/// Returns a snapshot of the captured lines in arrival order.
	pub fn lines(&self) -> Vec<LogLine> {
		self.lines.lock().clone()
	}

	/// Returns only the kinds of the captured lines.
	pub fn kinds(&self) -> Vec<LogKind> {
		self.lines.lock().iter().map(|line| line.kind).collect()
	}

	/// Drops every captured line.
	pub fn clear(&self) {
		self.lines.lock().clear();
	}
}
impl LogSink for MemoryLogSink {
	fn log(&self, line: LogLine) {
		self.lines.lock().push(line);
	}
}

/// Renders an error followed by each of its sources, separated by `: `.
pub(crate) fn error_chain(err: &(dyn StdError + 'static)) -> String {
	let mut rendered = err.to_string();
	let mut source = err.source();

	while let Some(inner) = source {
		rendered.truncate(rendered.trim_end_matches('.').len());
		rendered.push_str(": ");
		rendered.push_str(&inner.to_string());

		source = inner.source();
	}

	rendered
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn memory_sink_shares_buffer_across_clones() {
		let sink = MemoryLogSink::default();
		let handle = sink.clone();

		handle.log(LogLine::new(LogKind::ApiError, "API Error: boom"));
		handle.log(LogLine::new(LogKind::NetworkError, "offline"));

		assert_eq!(sink.kinds(), vec![LogKind::ApiError, LogKind::NetworkError]);
		assert_eq!(sink.lines()[0].message, "API Error: boom");

		sink.clear();

		assert!(handle.lines().is_empty());
	}

	#[test]
	fn error_chain_walks_sources() {
		let err = crate::error::TransportError::connect(std::io::Error::other("connection refused"));

		assert_eq!(error_chain(&err), "Unable to connect to the API server: connection refused");
	}

	#[test]
	fn tracing_sink_accepts_lines_without_subscriber() {
		TracingSink.log(LogLine::new(LogKind::AuthTokenFailure, "Error setting auth token"));
	}
}
