// std
use std::sync::Arc;
// self
use oauth2_validity_override::{
	config::ResolverConfig,
	obs::BufferedSink,
	request::RequestParameter,
	resolver::{InvalidOverrideFormat, OverrideRejection, Resolution, ValidityOverrideResolver},
};

fn resolver() -> (ValidityOverrideResolver, Arc<BufferedSink>) {
	let sink = Arc::new(BufferedSink::default());
	let resolver = ValidityOverrideResolver::new(ResolverConfig::default()).with_sink(sink.clone());

	(resolver, sink)
}

fn expiry(value: &str) -> RequestParameter {
	RequestParameter::single("expiry_time", value)
}

#[test]
fn absent_override_keeps_the_current_validity() {
	let (resolver, sink) = resolver();
	let unrelated =
		[RequestParameter::single("client_id", "abc"), RequestParameter::single("scope", "openid")];

	for current in [0, 1, 3_600_000, i64::MAX] {
		assert_eq!(resolver.resolve(&[], current), current);
		assert_eq!(resolver.resolve(&unrelated, current), current);
	}

	assert!(sink.is_empty());
}

#[test]
fn numeric_override_is_converted_to_milliseconds() {
	let (resolver, _) = resolver();

	for current in [0, 7_200_000, i64::MAX] {
		assert_eq!(resolver.resolve(&[expiry("3600")], current), 3_600_000);
	}
}

#[test]
fn negative_override_is_accepted_without_bounds() {
	let (resolver, sink) = resolver();

	assert_eq!(resolver.resolve(&[expiry("-10")], 7_200_000), -10_000);
	assert_eq!(resolver.resolve(&[expiry("0")], 7_200_000), 0);
	assert!(sink.is_empty());
}

#[test]
fn malformed_override_falls_back_with_one_diagnostic() {
	let (resolver, sink) = resolver();

	assert_eq!(resolver.resolve(&[expiry("abc")], 7_200_000), 7_200_000);
	assert_eq!(
		sink.drain(),
		vec![InvalidOverrideFormat::new("abc", OverrideRejection::NotAnInteger)]
	);

	for raw in ["12.5", " 60", "60s", "٣٦٠٠", "9223372036854775808"] {
		assert_eq!(resolver.resolve(&[expiry(raw)], 1_000), 1_000);
	}

	let drained = sink.drain();

	assert_eq!(drained.len(), 5);
	assert_eq!(drained[3], InvalidOverrideFormat::new("٣٦٠٠", OverrideRejection::NotAnInteger));
	assert_eq!(drained[4].reason, OverrideRejection::Overflow);
	assert!(drained[0].to_string().contains("12.5"));
}

#[test]
fn first_qualifying_override_wins() {
	let (resolver, sink) = resolver();
	let params = [
		RequestParameter::single("grant_type", "client_credentials"),
		expiry("120"),
		expiry("abc"),
		expiry("999"),
	];

	assert_eq!(resolver.resolve(&params, 7_200_000), 120_000);
	assert!(sink.is_empty(), "Later candidates must not be parsed.");

	let params = [expiry("abc"), expiry("120")];

	assert_eq!(resolver.resolve(&params, 7_200_000), 7_200_000);
	assert_eq!(sink.len(), 1);
}

#[test]
fn empty_or_missing_first_values_do_not_qualify() {
	let (resolver, sink) = resolver();
	let params = [
		RequestParameter::new("expiry_time", Vec::<String>::new()),
		RequestParameter::from_raw("expiry_time", vec![None, Some("5".into())]),
		expiry(""),
		expiry("45"),
	];

	assert_eq!(resolver.resolve(&params, 7_200_000), 45_000);

	let only_empty = [RequestParameter::new("expiry_time", Vec::<String>::new()), expiry("")];

	assert_eq!(resolver.resolve(&only_empty, 7_200_000), 7_200_000);
	assert!(sink.is_empty());
}

#[test]
fn detailed_resolution_matches_the_plain_result() {
	let (resolver, _) = resolver();

	assert_eq!(resolver.resolve_detailed(&[]), Resolution::Default);
	assert!(matches!(
		resolver.resolve_detailed(&[expiry("-1")]),
		Resolution::Overridden { seconds: -1, .. }
	));
	assert_eq!(
		resolver.resolve_detailed(&[expiry("x")]).diagnostic().map(|d| d.raw.as_str()),
		Some("x")
	);
}
