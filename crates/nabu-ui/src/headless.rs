//! A headless, in-memory toolkit implementation.
//!
//! Widgets remember the attributes they were created with, their placement,
//! their textual content, and whether they have been destroyed. The demo
//! shell renders against it, and the test suite uses it to observe what the
//! renderer actually did. Interaction helpers ([`HeadlessWidget::click`],
//! [`toggle`](HeadlessWidget::toggle), [`select`](HeadlessWidget::select))
//! stand in for user input.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use crate::attrs::{
    ButtonAttrs, CheckboxAttrs, ContainerAttrs, DropdownAttrs, FontSpec, InputAttrs,
    LabelAttrs, RadioAttrs, TextAreaAttrs,
};
use crate::state::SharedState;
use crate::toolkit::{Orientation, Spacing, Toolkit, ToolkitWidget, WidgetHandle};

// ── HeadlessKind ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessKind {
    Container,
    Label,
    Button,
    TextInput,
    MultilineText,
    Checkbox,
    Radio,
    Dropdown,
    Separator,
}

impl HeadlessKind {
    fn name(self) -> &'static str {
        match self {
            HeadlessKind::Container => "container",
            HeadlessKind::Label => "label",
            HeadlessKind::Button => "button",
            HeadlessKind::TextInput => "text-input",
            HeadlessKind::MultilineText => "multiline-text",
            HeadlessKind::Checkbox => "checkbox",
            HeadlessKind::Radio => "radio",
            HeadlessKind::Dropdown => "dropdown",
            HeadlessKind::Separator => "separator",
        }
    }

    fn has_content(self) -> bool {
        matches!(
            self,
            HeadlessKind::TextInput | HeadlessKind::MultilineText | HeadlessKind::Dropdown
        )
    }

    fn has_label(self) -> bool {
        matches!(
            self,
            HeadlessKind::Label | HeadlessKind::Button | HeadlessKind::Checkbox
                | HeadlessKind::Radio
        )
    }
}

// ── WidgetCore ────────────────────────────────────────────────────────────

/// The shared record behind a headless widget. Parents keep their children
/// alive through it, so destroy can cascade the way a real toolkit's would.
struct WidgetCore {
    kind: HeadlessKind,
    label: RefCell<String>,
    content: RefCell<String>,
    width: Option<i32>,
    height: Option<i32>,
    font: Option<FontSpec>,
    options: Vec<String>,
    radio_value: String,
    cell: Option<SharedState>,
    orientation: Option<Orientation>,
    on_click: Option<Box<dyn Fn()>>,
    placement: RefCell<Option<(Orientation, Spacing)>>,
    children: RefCell<Vec<Rc<WidgetCore>>>,
    destroyed: Cell<bool>,
}

impl WidgetCore {
    fn new(kind: HeadlessKind) -> Self {
        Self {
            kind,
            label: RefCell::new(String::new()),
            content: RefCell::new(String::new()),
            width: None,
            height: None,
            font: None,
            options: Vec::new(),
            radio_value: String::new(),
            cell: None,
            orientation: None,
            on_click: None,
            placement: RefCell::new(None),
            children: RefCell::new(Vec::new()),
            destroyed: Cell::new(false),
        }
    }

    fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        for child in self.children.borrow().iter() {
            child.destroy();
        }
    }

    fn describe(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}{}", "", self.kind.name(), indent = depth * 2);
        let label = self.label.borrow();
        if !label.is_empty() {
            let _ = write!(out, " {label:?}");
        }
        let content = self.content.borrow();
        if self.kind.has_content() && !content.is_empty() {
            let _ = write!(out, " = {content:?}");
        }
        if let (Some(w), Some(h)) = (self.width, self.height) {
            let _ = write!(out, " [{w}x{h}]");
        } else if let Some(w) = self.width {
            let _ = write!(out, " [w={w}]");
        }
        if !self.options.is_empty() {
            let _ = write!(out, " ({})", self.options.join("|"));
        }
        out.push('\n');
        for child in self.children.borrow().iter() {
            child.describe(out, depth + 1);
        }
    }
}

// ── HeadlessWidget ────────────────────────────────────────────────────────

/// Handle type produced by [`HeadlessToolkit`]. Obtainable from a
/// [`WidgetHandle`] via `as_any().downcast_ref::<HeadlessWidget>()`.
pub struct HeadlessWidget {
    core: Rc<WidgetCore>,
}

impl HeadlessWidget {
    pub fn kind(&self) -> HeadlessKind {
        self.core.kind
    }

    pub fn width(&self) -> Option<i32> {
        self.core.width
    }

    pub fn height(&self) -> Option<i32> {
        self.core.height
    }

    pub fn font(&self) -> Option<&FontSpec> {
        self.core.font.as_ref()
    }

    pub fn options(&self) -> &[String] {
        &self.core.options
    }

    pub fn label_text(&self) -> String {
        self.core.label.borrow().clone()
    }

    pub fn cell(&self) -> Option<&SharedState> {
        self.core.cell.as_ref()
    }

    pub fn placement(&self) -> Option<(Orientation, Spacing)> {
        *self.core.placement.borrow()
    }

    pub fn is_destroyed(&self) -> bool {
        self.core.destroyed.get()
    }

    pub fn child_count(&self) -> usize {
        self.core.children.borrow().len()
    }

    /// Multi-line description of this widget and its subtree.
    pub fn format_tree(&self) -> String {
        let mut out = String::new();
        self.core.describe(&mut out, 0);
        out
    }

    // ── simulated interaction ─────────────────────────────────────────────

    /// Activate a button.
    pub fn click(&self) {
        if self.core.destroyed.get() {
            return;
        }
        if let Some(action) = &self.core.on_click {
            action();
        }
    }

    /// Flip a checkbox's boolean cell.
    pub fn toggle(&self) {
        if let Some(cell) = &self.core.cell {
            cell.set_flag(!cell.get_flag());
        }
    }

    /// Select a radio button: writes its value into the shared cell.
    pub fn select(&self) {
        if let Some(cell) = &self.core.cell {
            cell.set_text(self.core.radio_value.clone());
        }
    }
}

impl ToolkitWidget for HeadlessWidget {
    fn place(&self, parent: &WidgetHandle, orientation: Orientation, spacing: Spacing) {
        *self.core.placement.borrow_mut() = Some((orientation, spacing));
        if let Some(parent) = parent.as_any().downcast_ref::<HeadlessWidget>() {
            parent.core.children.borrow_mut().push(Rc::clone(&self.core));
        }
    }

    fn destroy(&self) {
        self.core.destroy();
    }

    fn content(&self) -> Option<String> {
        if self.core.kind.has_content() {
            Some(self.core.content.borrow().clone())
        } else {
            None
        }
    }

    fn set_content(&self, text: &str) {
        if self.core.kind.has_content() {
            *self.core.content.borrow_mut() = text.to_string();
        }
    }

    fn clear_content(&self) {
        if self.core.kind.has_content() {
            self.core.content.borrow_mut().clear();
        }
    }

    fn set_label(&self, text: &str) {
        if self.core.kind.has_label() {
            *self.core.label.borrow_mut() = text.to_string();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ── HeadlessToolkit ───────────────────────────────────────────────────────

/// Records every widget it creates, so tests can assert that nothing leaks
/// across re-renders.
#[derive(Default)]
pub struct HeadlessToolkit {
    created: Vec<Rc<WidgetCore>>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many widgets were ever created.
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// How many created widgets have not been destroyed.
    pub fn live_count(&self) -> usize {
        self.created.iter().filter(|c| !c.destroyed.get()).count()
    }

    fn register(&mut self, core: WidgetCore) -> WidgetHandle {
        let core = Rc::new(core);
        self.created.push(Rc::clone(&core));
        Rc::new(HeadlessWidget { core })
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_container(&mut self, attrs: &ContainerAttrs) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Container);
        core.width = attrs.width;
        core.height = attrs.height;
        self.register(core)
    }

    fn create_label(&mut self, attrs: &LabelAttrs) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Label);
        core.label = RefCell::new(attrs.text.clone());
        core.font = attrs.font.clone();
        self.register(core)
    }

    fn create_button(&mut self, attrs: &ButtonAttrs, on_click: Box<dyn Fn()>) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Button);
        core.label = RefCell::new(attrs.text.clone());
        core.on_click = Some(on_click);
        self.register(core)
    }

    fn create_text_input(&mut self, attrs: &InputAttrs) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::TextInput);
        core.width = attrs.width;
        self.register(core)
    }

    fn create_multiline_text(&mut self, attrs: &TextAreaAttrs) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::MultilineText);
        core.width = attrs.width;
        core.height = attrs.height;
        self.register(core)
    }

    fn create_checkbox(&mut self, attrs: &CheckboxAttrs, cell: SharedState) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Checkbox);
        core.label = RefCell::new(attrs.text.clone());
        core.cell = Some(cell);
        self.register(core)
    }

    fn create_radio(
        &mut self,
        attrs: &RadioAttrs,
        cell: SharedState,
        value: &str,
    ) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Radio);
        core.label = RefCell::new(attrs.text.clone());
        core.cell = Some(cell);
        core.radio_value = value.to_string();
        self.register(core)
    }

    fn create_dropdown(&mut self, attrs: &DropdownAttrs, options: &[String]) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Dropdown);
        core.width = attrs.width;
        core.options = options.to_vec();
        self.register(core)
    }

    fn create_separator(&mut self, orientation: Orientation) -> WidgetHandle {
        let mut core = WidgetCore::new(HeadlessKind::Separator);
        core.orientation = Some(orientation);
        self.register(core)
    }
}
