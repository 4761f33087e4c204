//! The widget-factory capability the host environment provides.
//!
//! The renderer never talks to a concrete windowing toolkit. It drives this
//! trait, and the host supplies an implementation — a real toolkit binding
//! in an application, or [`crate::headless`] in tests and the demo shell.

use std::any::Any;
use std::rc::Rc;

use crate::attrs::{
    ButtonAttrs, CheckboxAttrs, ContainerAttrs, DropdownAttrs, InputAttrs, LabelAttrs,
    RadioAttrs, TextAreaAttrs,
};
use crate::state::SharedState;

// ── Placement ─────────────────────────────────────────────────────────────

/// Direction children are packed inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Parse a `layout` / `orient` attribute value. Anything that is not
    /// `"horizontal"` means vertical, matching the markup's loose defaults.
    pub fn from_attr(v: &str) -> Self {
        if v == "horizontal" { Orientation::Horizontal } else { Orientation::Vertical }
    }
}

/// Spacing around a placed widget, in toolkit units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub padx: i32,
    pub pady: i32,
}

impl Spacing {
    pub fn new(padx: i32, pady: i32) -> Self {
        Self { padx, pady }
    }

    pub fn uniform(v: i32) -> Self {
        Self { padx: v, pady: v }
    }
}

// ── ToolkitWidget ─────────────────────────────────────────────────────────

/// An opaque handle to a realized widget. Cloning the handle does not clone
/// the widget.
pub type WidgetHandle = Rc<dyn ToolkitWidget>;

/// Operations every realized widget supports.
///
/// Content methods have no-op defaults so leaf implementations only
/// override what their kind supports; the renderer relies on that when it
/// pushes text content at a widget that cannot take it.
pub trait ToolkitWidget: 'static {
    /// Pack this widget into `parent`. `orientation` is the parent's layout
    /// direction; `spacing` the gap reserved around this widget.
    fn place(&self, parent: &WidgetHandle, orientation: Orientation, spacing: Spacing);

    /// Tear down this widget and its whole subtree. Must be idempotent —
    /// destroying an already-destroyed widget is a no-op.
    fn destroy(&self);

    /// Current textual content, for input-like widgets.
    fn content(&self) -> Option<String> {
        None
    }

    /// Replace the textual content, for input-like widgets.
    fn set_content(&self, _text: &str) {}

    /// Remove all textual content.
    fn clear_content(&self) {}

    /// Set the label text, for widgets with a textual label property.
    fn set_label(&self, _text: &str) {}

    /// Downcast support for hosts that know their own widget type.
    fn as_any(&self) -> &dyn Any;
}

// ── Toolkit ───────────────────────────────────────────────────────────────

/// One constructor per widget kind. Each returns a live, unplaced handle;
/// the renderer places it into its parent afterwards.
pub trait Toolkit {
    fn create_container(&mut self, attrs: &ContainerAttrs) -> WidgetHandle;

    fn create_label(&mut self, attrs: &LabelAttrs) -> WidgetHandle;

    /// `on_click` is invoked on every activation; the renderer wires it to
    /// the command event queue (or to a no-op for unknown commands).
    fn create_button(&mut self, attrs: &ButtonAttrs, on_click: Box<dyn Fn()>) -> WidgetHandle;

    fn create_text_input(&mut self, attrs: &InputAttrs) -> WidgetHandle;

    fn create_multiline_text(&mut self, attrs: &TextAreaAttrs) -> WidgetHandle;

    /// `cell` is the boolean state the checkbox reads and writes.
    fn create_checkbox(&mut self, attrs: &CheckboxAttrs, cell: SharedState) -> WidgetHandle;

    /// `cell` is the string state shared by the radio group; selecting this
    /// radio writes `value` into it.
    fn create_radio(&mut self, attrs: &RadioAttrs, cell: SharedState, value: &str)
    -> WidgetHandle;

    fn create_dropdown(&mut self, attrs: &DropdownAttrs, options: &[String]) -> WidgetHandle;

    fn create_separator(&mut self, orientation: Orientation) -> WidgetHandle;
}
