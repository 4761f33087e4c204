//! The recursive element-to-widget rendering pass.

use nabu_markup::Element;

use crate::attrs::{
    AttrResolver, ButtonAttrs, CheckboxAttrs, ContainerAttrs, DropdownAttrs, FontSpec,
    InputAttrs, LabelAttrs, NumericPolicy, RadioAttrs, RenderPolicy, TextAreaAttrs,
    split_values,
};
use crate::bindings::Bindings;
use crate::command::CommandTable;
use crate::error::RenderError;
use crate::state::StateKind;
use crate::toolkit::{Orientation, Spacing, Toolkit, WidgetHandle};

// ── WidgetKind ────────────────────────────────────────────────────────────

/// The closed set of widget kinds a tag can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Window,
    Frame,
    Label,
    Button,
    Entry,
    TextArea,
    Checkbox,
    Radio,
    Combobox,
    Separator,
}

impl WidgetKind {
    /// Tag → kind. `None` for tags outside the vocabulary; those elements
    /// contribute nothing to the rendered tree.
    pub fn from_tag(tag: &str) -> Option<WidgetKind> {
        Some(match tag {
            "window" => WidgetKind::Window,
            "frame" => WidgetKind::Frame,
            "label" => WidgetKind::Label,
            "button" => WidgetKind::Button,
            "entry" => WidgetKind::Entry,
            "text" => WidgetKind::TextArea,
            "checkbox" => WidgetKind::Checkbox,
            "radio" => WidgetKind::Radio,
            "combobox" => WidgetKind::Combobox,
            "separator" => WidgetKind::Separator,
            _ => return None,
        })
    }

    /// Kinds that take inline text as editable content.
    fn supports_content(self) -> bool {
        matches!(self, WidgetKind::TextArea)
    }

    /// Kinds with a textual label property.
    fn supports_label(self) -> bool {
        matches!(
            self,
            WidgetKind::Label | WidgetKind::Button | WidgetKind::Checkbox | WidgetKind::Radio
        )
    }
}

// ── Renderer ──────────────────────────────────────────────────────────────

/// Walks an [`Element`] tree depth-first, pre-order, realizing widgets
/// through the toolkit capability and recording bindings as it goes.
///
/// Not a pure function: every successful creation mutates the [`Bindings`]
/// passed in. Re-rendering requires clearing those bindings (and destroying
/// the previous subtree) first — [`crate::surface::Surface`] does both.
pub struct Renderer<'a> {
    toolkit: &'a mut dyn Toolkit,
    commands: &'a CommandTable,
    policy: RenderPolicy,
    resolver: AttrResolver,
    /// Every handle created this pass, root first. Fuel for [`teardown`]
    /// when a strict numeric error aborts the render midway.
    created: Vec<WidgetHandle>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        toolkit: &'a mut dyn Toolkit,
        commands: &'a CommandTable,
        policy: RenderPolicy,
    ) -> Self {
        Self {
            toolkit,
            commands,
            policy,
            resolver: AttrResolver { numeric: policy.numeric },
            created: Vec::new(),
        }
    }

    /// Render `el` and its subtree. The created widget is placed into
    /// `parent` when one is given; the root of a surface passes `None` and
    /// keeps the returned handle.
    ///
    /// `Ok(None)` means the element's tag is not in the vocabulary and the
    /// node contributed nothing.
    pub fn render(
        &mut self,
        el: &Element,
        bindings: &mut Bindings,
        parent: Option<&WidgetHandle>,
    ) -> Result<Option<WidgetHandle>, RenderError> {
        let handle = self.render_node(el, bindings)?;
        if let Some(handle) = &handle {
            if let Some(parent) = parent {
                handle.place(parent, Orientation::Vertical, Spacing::uniform(10));
            }
        }
        Ok(handle)
    }

    /// Destroy everything created so far, newest first. Called when a
    /// render aborts so no partial subtree survives.
    pub(crate) fn teardown(&mut self) {
        for handle in self.created.drain(..).rev() {
            handle.destroy();
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn render_node(
        &mut self,
        el: &Element,
        bindings: &mut Bindings,
    ) -> Result<Option<WidgetHandle>, RenderError> {
        let Some(kind) = WidgetKind::from_tag(&el.tag) else {
            log::debug!("skipping unsupported tag <{}>", el.tag);
            return Ok(None);
        };

        let handle = self.create_widget(kind, el, bindings)?;
        self.created.push(handle.clone());

        // A window's title becomes a bold heading placed before any child.
        if kind == WidgetKind::Window {
            if let Some(title) = el.attr("title") {
                let heading = self.toolkit.create_label(&LabelAttrs {
                    text: title.to_string(),
                    font: Some(heading_font()),
                });
                self.created.push(heading.clone());
                heading.place(&handle, Orientation::Vertical, Spacing::new(0, 5));
            }
        }

        if let Some(text) = el.text.as_deref() {
            if kind.supports_content() {
                handle.set_content(text);
            } else if kind.supports_label() {
                handle.set_label(text);
            }
            // Other kinds silently ignore text content.
        }

        if let Some(id) = el.attr("id") {
            bindings.insert_widget(id, handle.clone());
        }

        self.render_children(el, bindings, &handle)?;

        Ok(Some(handle))
    }

    fn render_children(
        &mut self,
        el: &Element,
        bindings: &mut Bindings,
        parent: &WidgetHandle,
    ) -> Result<(), RenderError> {
        if el.children.is_empty() {
            return Ok(());
        }

        let orientation = Orientation::from_attr(el.attr_or("layout", "vertical"));
        let padx = self.resolver.int(el, "padx", None)?;
        let pady = self.resolver.int(el, "pady", None)?;

        for child in &el.children {
            if let Some(child_handle) = self.render_node(child, bindings)? {
                // A child's own padding wins over the container's, which
                // wins over the policy fallback. Resolved through the same
                // policy, so a garbage leaf value is fatal under strict.
                let child_padx = self.resolver.int(child, "padx", None)?;
                let child_pady = self.resolver.int(child, "pady", None)?;
                let fallback = self.policy.spacing.for_tag(&child.tag);
                let spacing = Spacing {
                    padx: child_padx.or(padx).unwrap_or(fallback.padx),
                    pady: child_pady.or(pady).unwrap_or(fallback.pady),
                };
                child_handle.place(parent, orientation, spacing);
            }
        }
        Ok(())
    }

    fn create_widget(
        &mut self,
        kind: WidgetKind,
        el: &Element,
        bindings: &mut Bindings,
    ) -> Result<WidgetHandle, RenderError> {
        let handle = match kind {
            WidgetKind::Window => self.toolkit.create_container(&ContainerAttrs {
                width: self.resolver.int(el, "width", Some(400))?,
                height: self.resolver.int(el, "height", Some(300))?,
            }),

            WidgetKind::Frame => self.toolkit.create_container(&ContainerAttrs {
                width: self.resolver.int(el, "width", None)?,
                height: self.resolver.int(el, "height", None)?,
            }),

            WidgetKind::Label => self.toolkit.create_label(&LabelAttrs {
                text: el.attr_or("text", "").to_string(),
                font: el.attr("font").and_then(FontSpec::parse),
            }),

            WidgetKind::Button => {
                // The defaulting lineage gives caption-less buttons a
                // visible label; the strict lineage leaves them blank.
                let caption = match self.policy.numeric {
                    NumericPolicy::Strict => "",
                    NumericPolicy::Defaulting => "Button",
                };
                let attrs = ButtonAttrs { text: el.attr_or("text", caption).to_string() };
                let action = self.resolve_action(el, bindings);
                self.toolkit.create_button(&attrs, action)
            }

            WidgetKind::Entry => self.toolkit.create_text_input(&InputAttrs {
                width: self.resolver.int(el, "width", Some(20))?,
            }),

            WidgetKind::TextArea => self.toolkit.create_multiline_text(&TextAreaAttrs {
                width: self.resolver.int(el, "width", Some(50))?,
                height: self.resolver.int(el, "height", Some(5))?,
            }),

            WidgetKind::Checkbox => {
                let attrs = CheckboxAttrs { text: el.attr_or("text", "").to_string() };
                let cell = match el.attr("variable") {
                    Some(name) => bindings.variable_or_create(name, StateKind::Flag),
                    None => crate::state::SharedState::flag(),
                };
                self.toolkit.create_checkbox(&attrs, cell)
            }

            WidgetKind::Radio => {
                let attrs = RadioAttrs { text: el.attr_or("text", "").to_string() };
                let cell = match el.attr("variable") {
                    Some(name) => bindings.variable_or_create(name, StateKind::Text),
                    None => crate::state::SharedState::text(),
                };
                self.toolkit.create_radio(&attrs, cell, el.attr_or("value", ""))
            }

            WidgetKind::Combobox => {
                let options = el.attr("values").map(split_values).unwrap_or_default();
                let attrs = DropdownAttrs {
                    width: self.resolver.int(el, "width", Some(20))?,
                };
                self.toolkit.create_dropdown(&attrs, &options)
            }

            WidgetKind::Separator => self
                .toolkit
                .create_separator(Orientation::from_attr(el.attr_or("orient", "horizontal"))),
        };
        Ok(handle)
    }

    /// Resolve a button's `command` attribute. A known name yields a closure
    /// pushing the resolved command onto the event queue; an unknown or
    /// absent name yields a no-op — never an error.
    fn resolve_action(&self, el: &Element, bindings: &Bindings) -> Box<dyn Fn()> {
        let Some(name) = el.attr("command") else {
            return Box::new(|| {});
        };
        match self.commands.resolve(name) {
            Some(cmd) => {
                let sink = bindings.event_sink();
                Box::new(move || sink.borrow_mut().push(cmd.clone()))
            }
            None => {
                log::debug!("unknown command {name:?}; button wired to a no-op");
                Box::new(|| {})
            }
        }
    }
}

fn heading_font() -> FontSpec {
    FontSpec { family: "Arial".to_string(), size: 12, bold: true, italic: false }
}
