//! Widget renderer for the Nabu markup language.
//!
//! Takes the element tree produced by [`nabu_markup`] and realizes it as
//! live widgets through an abstract toolkit capability — the windowing
//! toolkit itself is the host's business, not this crate's.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`toolkit`] | `Toolkit` factory trait, `ToolkitWidget` handle trait |
//! | [`attrs`] | attribute resolver, render policies, `FontSpec` |
//! | [`state`] | `SharedState` cells for checkbox/radio variables |
//! | [`command`] | closed `Command` enum and name lookup table |
//! | [`bindings`] | the per-render binding registry |
//! | [`render`] | the recursive element-to-widget pass |
//! | [`surface`] | `Surface`: clear → parse → render with error recovery |
//! | [`headless`] | in-memory toolkit for tests and headless hosts |
//!
//! # Quick start
//!
//! ```rust
//! use nabu_markup::Backend;
//! use nabu_ui::command::CommandTable;
//! use nabu_ui::headless::HeadlessToolkit;
//! use nabu_ui::surface::Surface;
//!
//! let mut surface = Surface::new(HeadlessToolkit::new())
//!     .backend(Backend::Xml)
//!     .commands(CommandTable::with_demo_commands());
//!
//! surface
//!     .render_markup(r#"<window title="Hi"><entry id="name" width="10"/></window>"#)
//!     .unwrap();
//!
//! assert!(surface.bindings().widget("name").is_some());
//! ```

pub mod attrs;
pub mod bindings;
pub mod command;
pub mod error;
pub mod headless;
pub mod render;
pub mod state;
pub mod surface;
pub mod toolkit;

pub use attrs::RenderPolicy;
pub use bindings::Bindings;
pub use command::{Command, CommandTable};
pub use error::{RenderError, SurfaceError};
pub use render::{Renderer, WidgetKind};
pub use state::SharedState;
pub use surface::Surface;
pub use toolkit::{Orientation, Spacing, Toolkit, ToolkitWidget, WidgetHandle};

/// Everything a host embedding the renderer usually needs.
pub mod prelude {
    pub use crate::attrs::{
        ButtonAttrs, CheckboxAttrs, ContainerAttrs, DropdownAttrs, FontSpec, InputAttrs,
        LabelAttrs, NumericPolicy, RadioAttrs, RenderPolicy, SpacingPolicy, TextAreaAttrs,
    };
    pub use crate::bindings::Bindings;
    pub use crate::command::{Command, CommandTable};
    pub use crate::error::{RenderError, SurfaceError};
    pub use crate::render::{Renderer, WidgetKind};
    pub use crate::state::{SharedState, StateKind, StateValue};
    pub use crate::surface::Surface;
    pub use crate::toolkit::{Orientation, Spacing, Toolkit, ToolkitWidget, WidgetHandle};

    pub use nabu_markup::{Backend, Element, ParseError, ParseOptions, UnknownAttrs};
}
