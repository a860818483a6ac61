//! Test subscriber that records emitted events.

// std
use std::collections::BTreeMap;
// crates.io
use tracing::{
	Event, Level, Subscriber,
	field::{Field, Visit},
};
use tracing_subscriber::{
	Layer, Registry,
	layer::{Context, SubscriberExt},
};
// self
use crate::_prelude::*;

/// Event recorded by [`events`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CapturedEvent {
	pub(crate) level: Level,
	pub(crate) message: String,
	pub(crate) fields: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
struct CaptureLayer(Arc<Mutex<Vec<CapturedEvent>>>);
impl<S> Layer<S> for CaptureLayer
where
	S: Subscriber,
{
	fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
		let mut visitor = FieldVisitor::default();

		event.record(&mut visitor);

		self.0.lock().push(CapturedEvent {
			level: *event.metadata().level(),
			message: visitor.message,
			fields: visitor.fields,
		});
	}
}

#[derive(Default)]
struct FieldVisitor {
	message: String,
	fields: BTreeMap<String, String>,
}
impl Visit for FieldVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		self.fields.insert(field.name().into(), value.into());
	}

	fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			self.fields.insert(field.name().into(), format!("{value:?}"));
		}
	}
}

/// Runs `f` under a thread-local subscriber and returns every event it emitted.
pub(crate) fn events(f: impl FnOnce()) -> Vec<CapturedEvent> {
	let layer = CaptureLayer::default();
	let subscriber = Registry::default().with(layer.clone());

	tracing::subscriber::with_default(subscriber, f);

	std::mem::take(&mut *layer.0.lock())
}
