//! The render target owning one live widget tree and its bindings.

use nabu_markup::{Backend, ParseOptions, parse};

use crate::attrs::RenderPolicy;
use crate::bindings::Bindings;
use crate::command::{Command, CommandTable};
use crate::error::SurfaceError;
use crate::render::Renderer;
use crate::toolkit::{Toolkit, WidgetHandle};

/// A render surface: toolkit + bindings + the current root widget.
///
/// There is exactly one active render target at a time; a render pass owns
/// exclusive write access to the bindings for its duration. Re-rendering
/// destroys the previous subtree and resets the bindings before anything
/// new is created, so no interaction can observe a half-cleared registry,
/// and any fatal error leaves the surface in its cleared pre-render state.
///
/// ```rust,ignore
/// let mut surface = Surface::new(HeadlessToolkit::new())
///     .backend(Backend::Xml)
///     .commands(CommandTable::with_demo_commands());
/// surface.render_markup(src)?;
/// for cmd in surface.take_events() { /* dispatch */ }
/// ```
pub struct Surface<T: Toolkit> {
    toolkit: T,
    commands: CommandTable,
    options: ParseOptions,
    policy: RenderPolicy,
    bindings: Bindings,
    root: Option<WidgetHandle>,
}

impl<T: Toolkit> Surface<T> {
    /// A surface with the tag-scan backend and its strict render policy.
    pub fn new(toolkit: T) -> Self {
        Self {
            toolkit,
            commands: CommandTable::new(),
            options: Backend::TagScan.default_options(),
            policy: RenderPolicy::strict(),
            bindings: Bindings::new(),
            root: None,
        }
    }

    /// Select a parser backend together with its historical companion
    /// policies (tag-scan → strict/uniform, XML → defaulting/per-tag).
    pub fn backend(mut self, backend: Backend) -> Self {
        self.options = backend.default_options();
        self.policy = match backend {
            Backend::TagScan => RenderPolicy::strict(),
            Backend::Xml => RenderPolicy::defaulting(),
        };
        self
    }

    /// Override the parse options independently of the backend pairing.
    pub fn parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the render policy independently of the backend pairing.
    pub fn policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn commands(mut self, table: CommandTable) -> Self {
        self.commands = table;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn root(&self) -> Option<&WidgetHandle> {
        self.root.as_ref()
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Drain the commands queued by button clicks since the last call.
    pub fn take_events(&self) -> Vec<Command> {
        self.bindings.take_events()
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Destroy the current widget subtree and empty the bindings.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            root.destroy();
        }
        self.bindings.clear();
    }

    /// Parse `src` with the configured backend and realize the widget tree.
    ///
    /// The previous tree and bindings are cleared first. On a parse error
    /// nothing is rendered; on a render error every widget created during
    /// the failed pass is destroyed and the bindings are cleared again, so
    /// the surface always recovers to its cleared state.
    ///
    /// `Ok(())` with [`root`](Surface::root) still `None` means the source
    /// contained nothing to render (tag-scan backend on tag-free input).
    pub fn render_markup(&mut self, src: &str) -> Result<(), SurfaceError> {
        self.clear();

        let Some(tree) = parse(src, &self.options)? else {
            return Ok(());
        };

        let mut renderer = Renderer::new(&mut self.toolkit, &self.commands, self.policy);
        match renderer.render(&tree, &mut self.bindings, None) {
            Ok(root) => {
                self.root = root;
                Ok(())
            }
            Err(e) => {
                renderer.teardown();
                self.bindings.clear();
                Err(e.into())
            }
        }
    }
}
