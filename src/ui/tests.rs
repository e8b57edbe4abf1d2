use std::time::{Duration, Instant};

use minisel_engine::{CatalogOption, Fields, OptionsLimit, Selection, SelectionEntry};
use serde_json::{Value, json};

use super::*;

fn people() -> Value {
	json!([
		{"id": 1, "name": "Harry"},
		{"id": 2, "name": "Sjaak"},
		{"id": 3, "name": "Kees"},
	])
}

fn widget(value: Value) -> Multiselect {
	Multiselect::from_json(MultiselectConfig::default(), people(), value).expect("valid props")
}

fn ids(values: &[i64]) -> Selection {
	values.iter().map(|value| SelectionEntry::id(*value)).collect()
}

#[test]
fn filters_selected_and_searched_options() {
	let mut multiselect = widget(json!([1]));
	multiselect.input("a");

	let fields = Fields::default();
	let names: Vec<_> = multiselect
		.filtered_options()
		.into_iter()
		.map(|option| option.text(&fields).into_owned())
		.collect();
	assert_eq!(names, ["Sjaak"]);
}

#[test]
fn pick_emits_appended_value_without_touching_props() {
	let mut multiselect = widget(json!([1, 2]));
	multiselect.click_tags();
	multiselect.input("k");

	let option = CatalogOption::keyed(&Fields::default(), 4, "Harry");
	multiselect.pick(&option);

	assert_eq!(
		multiselect.take_events(),
		[MultiselectEvent::Input(ids(&[1, 2, 4]))]
	);
	assert_eq!(multiselect.value(), &ids(&[1, 2]));
	assert!(!multiselect.is_open());
	assert_eq!(multiselect.query(), "");
}

#[test]
fn pick_filtered_uses_the_visible_list() {
	let mut multiselect = widget(json!([1]));
	assert!(multiselect.pick_filtered(1));
	assert_eq!(multiselect.take_events(), [MultiselectEvent::Input(ids(&[1, 3]))]);
	assert!(!multiselect.pick_filtered(5));
	assert!(multiselect.take_events().is_empty());
}

#[test]
fn add_emits_free_text_tag() {
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("Piet");
	multiselect.add_option();

	let events = multiselect.take_events();
	assert_eq!(
		events,
		[MultiselectEvent::Input(vec![SelectionEntry::free_text("Piet")].into())]
	);
	assert_eq!(events[0].to_json(&Fields::default())["value"], json!([{"name": "Piet"}]));
	assert!(!multiselect.is_open());
}

#[test]
fn add_skips_duplicates_and_keeps_the_dropdown() {
	let mut multiselect = widget(json!([{"name": "Harry"}]));
	multiselect.click_tags();
	multiselect.input("Harry");
	multiselect.add_option();

	assert!(multiselect.take_events().is_empty());
	assert!(multiselect.is_open());
	assert_eq!(multiselect.query(), "Harry");
}

#[test]
fn add_with_listener_emits_create_and_clears() {
	let config = MultiselectConfig::default().with_create_listener(true);
	let mut multiselect = Multiselect::from_json(config, people(), json!([])).expect("props");
	multiselect.click_tags();
	multiselect.input("Piet");
	multiselect.add_option();

	assert_eq!(multiselect.take_events(), [MultiselectEvent::Create("Piet".into())]);
	assert!(!multiselect.is_open());
	assert_eq!(multiselect.query(), "");
}

#[test]
fn remove_tag_emits_value_without_entry() {
	let mut multiselect = widget(json!([1, 2, 3]));
	assert!(multiselect.remove_tag(1));
	assert_eq!(multiselect.take_events(), [MultiselectEvent::Input(ids(&[1, 3]))]);
	assert!(!multiselect.remove_tag(3));
}

#[test]
fn enter_adds_when_nothing_matches() {
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("zzz");
	multiselect.press_enter();

	assert_eq!(
		multiselect.take_events(),
		[MultiselectEvent::Input(vec![SelectionEntry::free_text("zzz")].into())]
	);
}

#[test]
fn enter_picks_a_single_match() {
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("sj");
	multiselect.press_enter();

	assert_eq!(multiselect.take_events(), [MultiselectEvent::Input(ids(&[2]))]);
	assert!(!multiselect.is_open());
}

#[test]
fn enter_with_several_matches_does_nothing() {
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("a");
	multiselect.press_enter();

	assert!(multiselect.take_events().is_empty());
	assert!(multiselect.is_open());
	assert_eq!(multiselect.query(), "a");
}

#[test]
fn select_click_toggles_and_clears() {
	let mut multiselect = widget(json!([]));
	multiselect.click_select();
	assert!(multiselect.is_open());

	multiselect.input("ha");
	multiselect.click_select();
	assert!(!multiselect.is_open());
	assert_eq!(multiselect.query(), "");
}

#[test]
fn clear_dropdown_twice_gives_the_same_state() {
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("x");

	multiselect.clear_dropdown();
	let first = multiselect.dropdown().clone();
	multiselect.clear_dropdown();
	assert_eq!(multiselect.dropdown(), &first);
	assert!(!first.is_open());
	assert_eq!(first.query(), "");
}

#[test]
fn focus_loss_closes_after_delay() {
	let start = Instant::now();
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.input("ha");
	multiselect.focus_lost(start);

	assert!(!multiselect.tick(start + Duration::from_millis(100)));
	assert!(multiselect.is_open());
	assert!(multiselect.tick(start + Duration::from_millis(200)));
	assert!(!multiselect.is_open());
	assert_eq!(multiselect.query(), "");
}

#[test]
fn interaction_supersedes_pending_blur_close() {
	let start = Instant::now();
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.focus_lost(start);
	multiselect.click_tags();

	assert!(!multiselect.blur_pending());
	assert!(!multiselect.tick(start + Duration::from_secs(1)));
	assert!(multiselect.is_open());
}

#[test]
fn clear_dropdown_cancels_pending_blur_close() {
	let start = Instant::now();
	let mut multiselect = widget(json!([]));
	multiselect.click_tags();
	multiselect.focus_lost(start);
	multiselect.clear_dropdown();

	assert!(!multiselect.blur_pending());
	multiselect.click_tags();
	assert!(!multiselect.tick(start + Duration::from_secs(1)));
	assert!(multiselect.is_open());
}

#[test]
fn float_identifiers_resolve_to_catalog_tags() {
	let multiselect = widget(json!([1.0]));
	let tags = multiselect.tags();
	assert_eq!(tags[0].text, "Harry");
	assert!(tags[0].option.is_some());
	let names: Vec<_> = multiselect
		.filtered_options()
		.into_iter()
		.map(|option| option.text(&Fields::default()).into_owned())
		.collect();
	assert_eq!(names, ["Sjaak", "Kees"]);
}

#[test]
fn tags_resolve_catalog_text_and_free_text() {
	let multiselect = widget(json!([2, {"name": "Piet"}, 99]));
	let texts: Vec<_> = multiselect
		.tags()
		.into_iter()
		.map(|tag| tag.text.into_owned())
		.collect();
	assert_eq!(texts, ["Sjaak", "Piet", "99"]);

	let tags = multiselect.tags();
	assert!(tags[0].option.is_some());
	assert!(tags[1].option.is_none());
	assert_eq!(tags[1].entry, &SelectionEntry::free_text("Piet"));
}

#[test]
fn placeholder_only_when_closed_and_empty() {
	let mut multiselect = Multiselect::from_json(
		MultiselectConfig::default().with_placeholder("Pick people"),
		people(),
		json!([]),
	)
	.expect("props");
	assert!(multiselect.show_placeholder());
	assert_eq!(multiselect.placeholder(), Some("Pick people"));

	multiselect.click_tags();
	assert!(!multiselect.show_placeholder());

	multiselect.clear_dropdown();
	multiselect.set_value(ids(&[1]));
	assert!(!multiselect.show_placeholder());
}

#[test]
fn no_results_label_requires_a_query_without_matches() {
	let mut multiselect = widget(json!([]));
	assert_eq!(multiselect.no_results_label(), None);

	multiselect.input("ha");
	assert_eq!(multiselect.no_results_label(), None);

	multiselect.input("zzz");
	assert_eq!(multiselect.no_results_label(), Some(DEFAULT_NO_RESULTS));
}

#[test]
fn options_limit_caps_the_dropdown() {
	let config = MultiselectConfig::default()
		.with_options_limit(OptionsLimit::new(2).expect("non-zero"));
	let multiselect = Multiselect::from_json(config, people(), json!([])).expect("props");
	assert_eq!(multiselect.filtered_options().len(), 2);
}

#[test]
fn custom_fields_drive_resolution() {
	let config = MultiselectConfig::default().with_fields(Fields::new("key", "label"));
	let mut multiselect = Multiselect::from_json(
		config,
		json!([{"key": "a", "label": "Alpha"}, {"key": "b", "label": "Beta"}]),
		json!(["b"]),
	)
	.expect("props");

	assert_eq!(multiselect.tags()[0].text, "Beta");
	multiselect.input("al");
	multiselect.press_enter();
	assert_eq!(
		multiselect.take_events(),
		[MultiselectEvent::Input(vec![SelectionEntry::id("b"), SelectionEntry::id("a")].into())]
	);
}

#[test]
fn non_array_props_are_rejected() {
	let err = Multiselect::from_json(MultiselectConfig::default(), json!({}), json!([]))
		.expect_err("object options");
	assert!(err.to_string().contains("options must be a JSON array"));
}
