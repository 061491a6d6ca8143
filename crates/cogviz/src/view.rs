//! The hosting view.
//!
//! [`CognitiveView`] owns everything a host needs to show a cognitive graph:
//! the object list, the layout mode, the viewport and at most one live
//! [`Layout`]. Any change to the objects, the mode or the surface size throws
//! the layout away and builds a new one; the old simulation is stopped first.
//!
//! ```
//! use std::time::Duration;
//!
//! use cogviz::{config::AppConfig, view::{CognitiveView, ViewFrame}};
//! use cogviz_core::{
//!     geometry::Size,
//!     object::{CognitiveObject, CognitiveType},
//! };
//!
//! let mut view = CognitiveView::new(&AppConfig::default());
//! view.mount(Size::new(640.0, 480.0));
//! assert!(matches!(view.advance(Duration::from_millis(16)), ViewFrame::AwaitingInput));
//!
//! view.set_objects(vec![
//!     CognitiveObject::new("q", "Why?", CognitiveType::Question),
//!     CognitiveObject::new("h", "Because", CognitiveType::Hypothesis).with_relations(["q"]),
//! ]);
//!
//! let ViewFrame::Frame(frame) = view.advance(Duration::from_millis(16)) else {
//!     panic!("expected a frame");
//! };
//! assert_eq!(frame.len(), 2);
//! ```

use std::{rc::Rc, time::Duration};

use log::{debug, info};

use cogviz_core::{
    geometry::{Point, Size},
    mode::LayoutMode,
    object::CognitiveObject,
};

use crate::{
    config::AppConfig,
    engine::{EngineBuilder, Layout},
    interaction::{InteractionController, PointerOutcome},
    scene::Scene,
    simulation::Frame,
    viewport::ViewportTracker,
};

/// What the host should draw after an advance.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewFrame {
    /// The view has no drawable surface yet.
    Unmounted,
    /// There are no objects; the host shows the awaiting-input placeholder.
    AwaitingInput,
    /// Positions of the live layout.
    Frame(Frame),
}

/// A mounted cognitive graph with its live layout.
#[derive(Debug)]
pub struct CognitiveView {
    engine: EngineBuilder,
    objects: Rc<[CognitiveObject]>,
    mode: LayoutMode,
    viewport: ViewportTracker,
    layout: Option<Layout>,
    interaction: InteractionController,
    rebuilds: u64,
}

impl CognitiveView {
    pub fn new(config: &AppConfig) -> Self {
        let simulation = config.simulation();
        Self {
            engine: EngineBuilder::new().with_config(simulation.clone()),
            objects: Rc::from(Vec::new()),
            mode: config.layout().mode(),
            viewport: ViewportTracker::new(config.layout().size()),
            layout: None,
            interaction: InteractionController::new(simulation.drag_alpha_target()),
            rebuilds: 0,
        }
    }

    /// Set the callback invoked with the object of a clicked node
    pub fn with_selection(mut self, callback: impl FnMut(&CognitiveObject) + 'static) -> Self {
        self.interaction.set_on_select(callback);
        self
    }

    /// Set the callback invoked for clicks on empty canvas
    pub fn with_canvas_click(mut self, callback: impl FnMut(Point) + 'static) -> Self {
        self.interaction.set_on_canvas_click(callback);
        self
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn objects(&self) -> &[CognitiveObject] {
        &self.objects
    }

    pub fn size(&self) -> Size {
        self.viewport.size()
    }

    /// The live layout, absent while unmounted or without objects.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Number of layouts built so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionController {
        &mut self.interaction
    }

    /// Attaches the view to a surface of `size` and runs the first layout.
    pub fn mount(&mut self, size: Size) {
        self.viewport.mount(size);
        self.rebuild("mount");
    }

    /// Replaces the object list.
    pub fn set_objects(&mut self, objects: impl Into<Rc<[CognitiveObject]>>) {
        self.objects = objects.into();
        self.rebuild("objects");
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.rebuild("mode");
    }

    /// Switches between force and DAG mode.
    pub fn toggle_mode(&mut self) -> LayoutMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Reports a new surface size; only real changes rebuild the layout.
    pub fn resize(&mut self, size: Size) {
        if self.viewport.observe(size).needs_rebuild() {
            self.rebuild("resize");
        }
    }

    /// Restarts the live layout from full temperature without rebuilding it.
    ///
    /// Returns false when there is no live layout.
    pub fn reheat(&mut self) -> bool {
        match self.layout.as_mut() {
            Some(layout) => {
                debug!("Reheating layout");
                layout.simulation_mut().reheat();
                true
            }
            None => false,
        }
    }

    /// Advances the live simulation by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) -> ViewFrame {
        if !self.viewport.is_mounted() {
            return ViewFrame::Unmounted;
        }
        if self.objects.is_empty() {
            return ViewFrame::AwaitingInput;
        }
        match self.layout.as_mut() {
            Some(layout) => ViewFrame::Frame(layout.simulation_mut().advance(elapsed)),
            None => ViewFrame::Unmounted,
        }
    }

    pub fn pointer_down(&mut self, at: Point) -> PointerOutcome {
        match self.layout.as_mut() {
            Some(layout) => self.interaction.pointer_down(layout, at),
            None => PointerOutcome::Ignored,
        }
    }

    pub fn pointer_move(&mut self, at: Point) -> PointerOutcome {
        match self.layout.as_mut() {
            Some(layout) => self.interaction.pointer_move(layout, at),
            None => PointerOutcome::Ignored,
        }
    }

    pub fn pointer_up(&mut self, at: Point) -> PointerOutcome {
        match self.layout.as_mut() {
            Some(layout) => self.interaction.pointer_up(layout, at),
            None => PointerOutcome::Ignored,
        }
    }

    /// A complete press and release at `at`.
    pub fn click(&mut self, at: Point) -> PointerOutcome {
        match self.layout.as_mut() {
            Some(layout) => self.interaction.click(layout, at),
            None => self.interaction.canvas_click(at),
        }
    }

    /// The current frame joined with objects and styles.
    pub fn scene(&self) -> Scene<'_> {
        match &self.layout {
            Some(layout) => layout.scene(),
            None => Scene::empty(self.mode, self.viewport.size()),
        }
    }

    /// Stops the live simulation and detaches from the surface.
    pub fn teardown(&mut self) {
        self.interaction.reset();
        if let Some(mut layout) = self.layout.take() {
            layout.simulation_mut().stop();
        }
        if self.viewport.is_mounted() {
            debug!("Tearing down view");
            self.viewport.unmount();
        }
    }

    fn rebuild(&mut self, reason: &str) {
        self.interaction.reset();
        if let Some(mut layout) = self.layout.take() {
            layout.simulation_mut().stop();
        }

        if !self.viewport.is_ready() {
            debug!(reason; "Viewport not ready, postponing layout");
            return;
        }

        info!(reason, mode:% = self.mode, object_count = self.objects.len(); "Rebuilding layout");
        self.layout = self
            .engine
            .build(self.objects.clone(), self.mode, self.viewport.size());
        if self.layout.is_some() {
            self.rebuilds += 1;
        }
    }
}

impl Drop for CognitiveView {
    fn drop(&mut self) {
        self.teardown();
    }
}
