//! Nabu studio — a headless walkthrough of the markup renderer.
//!
//! Renders the bundled example form with both parser backends, simulates a
//! user filling it in, and dispatches the demo commands that read the
//! binding registry. Everything here is host-side wiring; the core contract
//! it exercises lives in `nabu-ui`.

use anyhow::Result;

use nabu_markup::Backend;
use nabu_ui::headless::{HeadlessToolkit, HeadlessWidget};
use nabu_ui::prelude::*;

const FORM: &str = include_str!("../ui/form.xml");

fn main() -> Result<()> {
    init_logging();

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║           NABU STUDIO v0.1             ║");
    println!("  ║   markup parser  ·  widget renderer    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut surface = Surface::new(HeadlessToolkit::new())
        .backend(Backend::Xml)
        .commands(CommandTable::with_demo_commands());

    surface.render_markup(FORM)?;
    println!("── Rendered form (XML backend) ──────────────────────");
    print_tree(&surface);

    // Simulate the user filling the form in.
    set_content(surface.bindings(), "name_entry", "Ada Lovelace");
    set_content(surface.bindings(), "job", "Engineer");
    if let Some(cell) = surface.bindings().variable("gender") {
        cell.set_text("female");
    }
    for hobby in ["hobby_read", "hobby_code"] {
        if let Some(cell) = surface.bindings().variable(hobby) {
            cell.set_flag(true);
        }
    }

    // Click "Show summary", then run whatever the click queued.
    click(surface.bindings(), "show_btn");
    dispatch(&surface);
    println!("── Summary written into info_text ───────────────────");
    println!("{}", content_of(surface.bindings(), "info_text").unwrap_or_default());
    println!();

    // Click "Clear" and confirm the registry state resets.
    click(surface.bindings(), "clear_btn");
    dispatch(&surface);
    println!("── After clear ──────────────────────────────────────");
    println!(
        "name entry: {:?}   gender: {:?}",
        content_of(surface.bindings(), "name_entry").unwrap_or_default(),
        surface
            .bindings()
            .variable("gender")
            .and_then(|c| c.get_text())
            .unwrap_or_default(),
    );
    println!();

    // The loose backend renders the same form and shrugs at sloppy input.
    let mut loose = Surface::new(HeadlessToolkit::new())
        .backend(Backend::TagScan)
        .commands(CommandTable::with_demo_commands());
    loose.render_markup(
        r#"<window title="Sloppy form">
            <label text="unclosed frames are fine here" />
            <frame layout="horizontal">
                <entry id="e" width="12" />
        </window>"#,
    )?;
    println!("── Rendered form (tag-scan backend, sloppy input) ───");
    print_tree(&loose);

    Ok(())
}

// ── Demo command handlers ─────────────────────────────────────────────────
//
// Example wiring only: they read and write the binding registry through its
// public contract and can be replaced by any host.

fn dispatch(surface: &Surface<HeadlessToolkit>) {
    for cmd in surface.take_events() {
        match cmd {
            Command::ShowMessage => show_message(surface.bindings()),
            Command::ClearText => clear_text(surface.bindings()),
            Command::Host(name) => log::debug!("unhandled host command {name:?}"),
        }
    }
}

/// Collect the form fields into a multi-line summary and write it into the
/// `info_text` widget.
fn show_message(bindings: &Bindings) {
    let name = content_of(bindings, "name_entry")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let job = content_of(bindings, "job")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let gender = match bindings.variable("gender").and_then(|c| c.get_text()).as_deref() {
        Some("male") => "Male",
        Some("female") => "Female",
        _ => "unselected",
    };

    let hobbies: Vec<&str> = [
        ("hobby_read", "Reading"),
        ("hobby_sport", "Sports"),
        ("hobby_code", "Coding"),
    ]
    .iter()
    .filter(|(var, _)| bindings.variable(var).is_some_and(|c| c.get_flag()))
    .map(|(_, label)| *label)
    .collect();
    let hobbies = if hobbies.is_empty() { "none".to_string() } else { hobbies.join(", ") };

    let summary =
        format!("Name: {name}\nOccupation: {job}\nGender: {gender}\nHobbies: {hobbies}");
    if let Some(w) = bindings.widget("info_text") {
        w.clear_content();
        w.set_content(&summary);
    }
}

/// Clear the text widgets and reset every variable cell.
fn clear_text(bindings: &Bindings) {
    for id in ["info_text", "name_entry"] {
        if let Some(w) = bindings.widget(id) {
            w.clear_content();
        }
    }
    for (_, cell) in bindings.variables() {
        cell.reset();
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────

fn content_of(bindings: &Bindings, id: &str) -> Option<String> {
    bindings.widget(id).and_then(|w| w.content())
}

fn set_content(bindings: &Bindings, id: &str, text: &str) {
    if let Some(w) = bindings.widget(id) {
        w.set_content(text);
    }
}

fn click(bindings: &Bindings, id: &str) {
    if let Some(w) = bindings.widget(id) {
        if let Some(w) = w.as_any().downcast_ref::<HeadlessWidget>() {
            w.click();
        }
    }
}

fn print_tree(surface: &Surface<HeadlessToolkit>) {
    if let Some(root) = surface.root() {
        if let Some(root) = root.as_any().downcast_ref::<HeadlessWidget>() {
            print!("{}", root.format_tree());
        }
    }
    println!();
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}
