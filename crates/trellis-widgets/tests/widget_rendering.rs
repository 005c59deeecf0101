//! Rendering behaviour shared by all widgets

use rstest::rstest;
use serial_test::serial;
use std::sync::Arc;
use trellis_markup::AttributeSet;
use trellis_widgets::{
	Button, ButtonGroup, ButtonToolbar, Card, CardImage, IdAllocator, Offcanvas, RenderContext,
	ToggleButton, Widget, WidgetSettings,
};

fn widgets() -> Vec<Box<dyn Widget>> {
	vec![
		Box::new(Button::new().label("Save")),
		Box::new(ButtonGroup::new().buttons([Button::new(), Button::new()])),
		Box::new(
			ButtonToolbar::new().groups([ButtonGroup::new().buttons([Button::new().label("1")])]),
		),
		Box::new(Card::new().header("H").body("B").list(["a"]).footer("F")),
		Box::new(Offcanvas::new().title("T").toggle_button(ToggleButton::new())),
	]
}

#[rstest]
#[serial(global_ids)]
fn test_render_is_idempotent_after_reset() {
	for widget in widgets() {
		IdAllocator::global().reset();
		let first = widget.render().unwrap();
		IdAllocator::global().reset();
		let second = widget.render().unwrap();
		assert_eq!(first, second, "{} output changed between renders", widget.name());
	}
	IdAllocator::global().reset();
}

#[rstest]
#[serial(global_ids)]
fn test_global_counter_advances_across_widgets() {
	IdAllocator::global().reset();
	assert_eq!(
		Button::new().render().unwrap(),
		r#"<button id="w0-button" class="btn">Button</button>"#
	);
	assert_eq!(
		Button::new().render().unwrap(),
		r#"<button id="w1-button" class="btn">Button</button>"#
	);
	IdAllocator::global().reset();
}

#[rstest]
fn test_isolated_contexts_do_not_share_ids() {
	let a = RenderContext::isolated();
	let b = RenderContext::isolated();
	assert_eq!(Card::new().render_in(&a).unwrap(), Card::new().render_in(&b).unwrap());
}

#[rstest]
fn test_shared_allocator_across_contexts() {
	let ids = Arc::new(IdAllocator::with_prefix("p"));
	let a = RenderContext::new(Arc::clone(&ids));
	let b = RenderContext::new(Arc::clone(&ids));
	assert!(Card::new().render_in(&a).unwrap().starts_with(r#"<div id="p0""#));
	assert!(Card::new().render_in(&b).unwrap().starts_with(r#"<div id="p1""#));
}

#[rstest]
fn test_context_from_settings() {
	let settings = WidgetSettings {
		id_prefix: "nav".to_string(),
		id_start: 4,
		register_plugins: false,
	};
	let ctx = RenderContext::from_settings(&settings);
	assert_eq!(
		Button::new().render_in(&ctx).unwrap(),
		r#"<button id="nav4-button" class="btn">Button</button>"#
	);
}

#[rstest]
fn test_card_omits_unconfigured_regions() {
	let ctx = RenderContext::isolated();
	let html = Card::new().render_in(&ctx).unwrap();
	for marker in ["card-header", "card-body", "card-footer", "list-group", "<img"] {
		assert!(!html.contains(marker), "unexpected {} in {}", marker, html);
	}

	let html = Card::new().image(CardImage::new()).render_in(&ctx).unwrap();
	assert!(!html.contains("card-img-overlay"));
}

#[rstest]
fn test_offcanvas_omits_toggle_by_default() {
	let ctx = RenderContext::isolated();
	let html = Offcanvas::new().render_in(&ctx).unwrap();
	assert!(html.starts_with("<div id=\"w0\""));
	assert!(!html.contains("data-bs-toggle"));
	assert!(!html.contains("offcanvas-title"));
}

#[rstest]
fn test_toolbar_allocation_order() {
	let ctx = RenderContext::isolated();
	let html = ButtonToolbar::new()
		.groups([
			ButtonGroup::new().buttons([Button::new().label("1"), Button::new().label("2")]),
			ButtonGroup::new()
				.buttons([Button::new().label("3")])
				.options(AttributeSet::new().with_class("ms-2")),
		])
		.render_in(&ctx)
		.unwrap();

	let order: Vec<_> = ["w0-button-toolbar", "w1-button-group", "w2-button", "w3-button", "w4-button-group", "w5-button"]
		.iter()
		.map(|id| html.find(&format!("id=\"{}\"", id)).unwrap())
		.collect();
	assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
fn test_widgets_from_toml() {
	let card: Card = toml::from_str(
		r#"
		header = "Featured"
		body = "Text"
		list = ["one", "two"]

		[options]
		class = ["text-center", "mb-3"]
		"#,
	)
	.unwrap();
	let ctx = RenderContext::isolated();
	let html = card.render_in(&ctx).unwrap();
	assert!(html.starts_with(r#"<div id="w0" class="card text-center mb-3">"#));
	assert!(html.contains(r#"<li class="list-group-item">two</li>"#));
}
