//! Widgets pulling in their client-side assets

use rstest::rstest;
use std::sync::Arc;
use trellis_assets::{AssetRegistry, AssetSettings, BOOTSTRAP5_ASSET, BOOTSTRAP5_PLUGIN_ASSET};
use trellis_widgets::{Button, Card, Offcanvas, RenderContext, Widget, WidgetSettings};

#[rstest]
fn test_plain_widgets_register_nothing() {
	let assets = Arc::new(AssetRegistry::default());
	let ctx = RenderContext::isolated().with_plugins(assets.clone());
	Button::new().render_in(&ctx).unwrap();
	assert!(assets.registered().is_empty());
	assert_eq!(assets.render_tags().unwrap(), "");
}

#[rstest]
fn test_card_and_offcanvas_register_plugins() {
	let assets = Arc::new(AssetRegistry::default());
	let ctx = RenderContext::isolated().with_plugins(assets.clone());
	Card::new().body("B").render_in(&ctx).unwrap();
	Offcanvas::new().title("T").render_in(&ctx).unwrap();

	let requests = assets.plugin_requests();
	let names: Vec<_> = requests.iter().map(|r| (r.name, r.id.as_str())).collect();
	assert_eq!(names, vec![("card", "w0"), ("offcanvas", "w1")]);

	let resolved: Vec<_> = assets.resolved().unwrap().into_iter().map(|b| b.name).collect();
	assert_eq!(resolved, vec![BOOTSTRAP5_ASSET, BOOTSTRAP5_PLUGIN_ASSET]);
}

#[rstest]
fn test_css_renders_before_js() {
	let assets = Arc::new(AssetRegistry::with_bootstrap(AssetSettings::new("https://cdn.example.com/")));
	let ctx = RenderContext::isolated().with_plugins(assets.clone());
	Offcanvas::new().render_in(&ctx).unwrap();

	let tags = assets.render_tags().unwrap();
	let css = tags.find("bootstrap.min.css").unwrap();
	let js = tags.find("bootstrap.bundle.min.js").unwrap();
	assert!(css < js);
	assert!(tags.starts_with(r#"<link href="https://cdn.example.com/bootstrap/dist/css/"#));
}

#[rstest]
fn test_plugin_registration_disabled_by_settings() {
	let assets = Arc::new(AssetRegistry::default());
	let settings = WidgetSettings {
		register_plugins: false,
		..Default::default()
	};
	let ctx = RenderContext::from_settings(&settings).with_plugins(assets.clone());
	Card::new().render_in(&ctx).unwrap();
	assert!(assets.plugin_requests().is_empty());
	assert!(assets.registered().is_empty());
}
