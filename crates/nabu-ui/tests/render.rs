//! End-to-end rendering tests against the headless toolkit.

use nabu_markup::{Backend, ParseError};
use nabu_ui::headless::{HeadlessKind, HeadlessToolkit, HeadlessWidget};
use nabu_ui::prelude::*;

fn surface(backend: Backend) -> Surface<HeadlessToolkit> {
    Surface::new(HeadlessToolkit::new())
        .backend(backend)
        .commands(CommandTable::with_demo_commands())
}

fn headless(handle: &WidgetHandle) -> &HeadlessWidget {
    handle
        .as_any()
        .downcast_ref::<HeadlessWidget>()
        .expect("surface renders headless widgets")
}

#[test]
fn entry_id_round_trip() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><entry id="name_entry" width="10"/></window>"#)
        .unwrap();

    let w = headless(s.bindings().widget("name_entry").unwrap());
    assert_eq!(w.kind(), HeadlessKind::TextInput);
    assert_eq!(w.width(), Some(10));
}

#[test]
fn radios_share_one_cell() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(
        r#"<window>
            <radio id="m" text="Male" variable="gender" value="male"/>
            <radio id="f" text="Female" variable="gender" value="female"/>
        </window>"#,
    )
    .unwrap();

    let m = headless(s.bindings().widget("m").unwrap());
    let f = headless(s.bindings().widget("f").unwrap());
    assert!(m.cell().unwrap().shares(f.cell().unwrap()));

    m.select();
    let cell = s.bindings().variable("gender").unwrap();
    assert_eq!(cell.get_text().as_deref(), Some("male"));

    f.select();
    assert_eq!(cell.get_text().as_deref(), Some("female"));
}

#[test]
fn malformed_xml_renders_nothing() {
    let mut s = surface(Backend::Xml);
    let err = s
        .render_markup(r#"<window><label text="x"></window>"#)
        .unwrap_err();

    assert!(matches!(err, SurfaceError::Parse(ParseError::MalformedMarkup { .. })));
    assert!(s.root().is_none());
    assert_eq!(s.toolkit().live_count(), 0);
    assert_eq!(s.bindings().widget_ids().count(), 0);
}

#[test]
fn tag_scan_tolerates_unbalanced_input() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><label text="x"></window>"#).unwrap();
    assert!(s.root().is_some());
}

#[test]
fn wrong_root_is_rejected_by_xml() {
    let mut s = surface(Backend::Xml);
    let err = s.render_markup(r#"<frame><label text="x"/></frame>"#).unwrap_err();
    assert!(matches!(err, SurfaceError::Parse(ParseError::InvalidRoot { .. })));
    assert_eq!(s.toolkit().live_count(), 0);
}

#[test]
fn unknown_tag_contributes_no_widget() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><gadget/><label text="x"/></window>"#).unwrap();

    // Only the window container and the label exist.
    assert_eq!(s.toolkit().created_count(), 2);
    assert_eq!(headless(s.root().unwrap()).child_count(), 1);
}

#[test]
fn re_render_does_not_leak_widgets() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><entry id="first" width="10"/></window>"#)
        .unwrap();
    s.render_markup(r#"<window><button id="second" text="Go"/></window>"#)
        .unwrap();

    let ids: Vec<&str> = s.bindings().widget_ids().collect();
    assert_eq!(ids, ["second"]);

    // Two widgets per pass; everything from the first pass is destroyed.
    assert_eq!(s.toolkit().created_count(), 4);
    assert_eq!(s.toolkit().live_count(), 2);
    assert!(!headless(s.root().unwrap()).is_destroyed());
}

#[test]
fn combobox_options_in_order() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><combobox id="job" values="a,b,c"/></window>"#)
        .unwrap();

    let w = headless(s.bindings().widget("job").unwrap());
    assert_eq!(w.options(), ["a", "b", "c"]);
}

#[test]
fn combobox_values_keep_embedded_spaces() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><combobox id="job" values="a, b"/></window>"#)
        .unwrap();

    let w = headless(s.bindings().widget("job").unwrap());
    assert_eq!(w.options(), ["a", " b"]);
}

#[test]
fn button_click_queues_its_command() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><button id="go" text="Go" command="show_message"/></window>"#)
        .unwrap();

    headless(s.bindings().widget("go").unwrap()).click();
    assert_eq!(s.take_events(), [Command::ShowMessage]);
    assert!(s.take_events().is_empty());
}

#[test]
fn unknown_command_is_a_noop() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><button id="go" text="Go" command="explode"/></window>"#)
        .unwrap();

    headless(s.bindings().widget("go").unwrap()).click();
    assert!(s.take_events().is_empty());
}

#[test]
fn host_commands_dispatch_by_name() {
    let mut table = CommandTable::new();
    table.register_host("refresh");
    let mut s = Surface::new(HeadlessToolkit::new()).commands(table);
    s.render_markup(r#"<window><button id="go" command="refresh"/></window>"#)
        .unwrap();

    headless(s.bindings().widget("go").unwrap()).click();
    assert_eq!(s.take_events(), [Command::Host("refresh".to_string())]);
}

#[test]
fn strict_numeric_error_recovers_to_cleared_state() {
    let mut s = surface(Backend::TagScan);
    let err = s
        .render_markup(r#"<window><label text="ok"/><entry id="e" width="wide"/></window>"#)
        .unwrap_err();

    assert!(matches!(
        err,
        SurfaceError::Render(RenderError::BadNumericAttribute { .. })
    ));
    assert!(s.root().is_none());
    assert_eq!(s.toolkit().live_count(), 0);
    assert_eq!(s.bindings().widget_ids().count(), 0);
}

#[test]
fn defaulting_policy_fills_per_kind_constants() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><entry id="e"/><text id="t" height="oops"/></window>"#)
        .unwrap();

    assert_eq!(headless(s.bindings().widget("e").unwrap()).width(), Some(20));
    let t = headless(s.bindings().widget("t").unwrap());
    assert_eq!(t.width(), Some(50));
    assert_eq!(t.height(), Some(5));
}

#[test]
fn window_title_becomes_a_heading() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window title="Demo"/>"#).unwrap();

    let root = headless(s.root().unwrap());
    assert_eq!(root.kind(), HeadlessKind::Container);
    assert_eq!(root.child_count(), 1);
    assert!(root.format_tree().contains("Demo"));
}

#[test]
fn duplicate_id_last_write_wins() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><entry id="e" width="1"/><entry id="e" width="2"/></window>"#)
        .unwrap();

    assert_eq!(headless(s.bindings().widget("e").unwrap()).width(), Some(2));
}

#[test]
fn horizontal_frame_places_children_left_to_right() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(
        r#"<window><frame layout="horizontal" padx="3" pady="3">
            <entry id="e" width="5"/>
        </frame></window>"#,
    )
    .unwrap();

    let e = headless(s.bindings().widget("e").unwrap());
    assert_eq!(e.placement(), Some((Orientation::Horizontal, Spacing::new(3, 3))));
}

#[test]
fn leaf_padding_overrides_the_container() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(
        r#"<window><frame padx="3" pady="3">
            <label id="l" text="Name:" padx="7"/>
        </frame></window>"#,
    )
    .unwrap();

    let l = headless(s.bindings().widget("l").unwrap());
    assert_eq!(l.placement(), Some((Orientation::Vertical, Spacing::new(7, 3))));
}

#[test]
fn strict_rejects_non_numeric_leaf_padding() {
    let mut s = surface(Backend::TagScan);
    let err = s
        .render_markup(r#"<window><label text="x" padx="oops"/></window>"#)
        .unwrap_err();

    assert!(matches!(
        err,
        SurfaceError::Render(RenderError::BadNumericAttribute { .. })
    ));
    assert!(s.root().is_none());
    assert_eq!(s.toolkit().live_count(), 0);
}

#[test]
fn defaulting_shrugs_at_non_numeric_leaf_padding() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><label id="l" text="x" padx="oops"/></window>"#)
        .unwrap();

    // The garbage value falls through to the per-tag constant.
    let l = headless(s.bindings().widget("l").unwrap());
    assert_eq!(l.placement(), Some((Orientation::Vertical, Spacing::new(0, 5))));
}

#[test]
fn uniform_spacing_default_is_five() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><frame><entry id="e" width="5"/></frame></window>"#)
        .unwrap();

    let e = headless(s.bindings().widget("e").unwrap());
    assert_eq!(e.placement(), Some((Orientation::Vertical, Spacing::uniform(5))));
}

#[test]
fn caption_less_button_gets_a_default_under_defaulting() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><button id="b" command="show_message"/></window>"#)
        .unwrap();
    assert_eq!(headless(s.bindings().widget("b").unwrap()).label_text(), "Button");

    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><button id="b" command="show_message"/></window>"#)
        .unwrap();
    assert_eq!(headless(s.bindings().widget("b").unwrap()).label_text(), "");
}

#[test]
fn checkbox_owns_a_boolean_cell() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><checkbox id="c" text="Read" variable="hobby"/></window>"#)
        .unwrap();

    let cell = s.bindings().variable("hobby").unwrap();
    assert_eq!(cell.kind(), StateKind::Flag);
    assert!(!cell.get_flag());

    headless(s.bindings().widget("c").unwrap()).toggle();
    assert!(cell.get_flag());
}

#[test]
fn variable_kind_conflict_reuses_the_cell() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(
        r#"<window>
            <checkbox id="c" variable="mixed"/>
            <radio id="r" variable="mixed" value="x"/>
        </window>"#,
    )
    .unwrap();

    let c = headless(s.bindings().widget("c").unwrap());
    let r = headless(s.bindings().widget("r").unwrap());
    assert!(c.cell().unwrap().shares(r.cell().unwrap()));
}

#[test]
fn text_content_is_inserted_into_text_areas() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><text id="t">hello</text></window>"#).unwrap();

    let t = s.bindings().widget("t").unwrap();
    assert_eq!(t.content().as_deref(), Some("hello"));
}

#[test]
fn text_content_sets_labels_elsewhere() {
    let mut s = surface(Backend::Xml);
    s.render_markup(r#"<window><label id="l">greetings</label></window>"#)
        .unwrap();

    let l = headless(s.bindings().widget("l").unwrap());
    assert_eq!(l.label_text(), "greetings");
}

#[test]
fn tag_free_input_renders_nothing() {
    let mut s = surface(Backend::TagScan);
    s.render_markup("nothing to see here").unwrap();
    assert!(s.root().is_none());
    assert_eq!(s.toolkit().created_count(), 0);
}

#[test]
fn cell_value_survives_widget_destruction() {
    let mut s = surface(Backend::TagScan);
    s.render_markup(r#"<window><radio id="r" variable="g" value="male"/></window>"#)
        .unwrap();

    headless(s.bindings().widget("r").unwrap()).select();
    let cell = s.bindings().variable("g").unwrap().clone();
    s.root().unwrap().destroy();
    assert_eq!(cell.get_text().as_deref(), Some("male"));
}
