//! Pointer gestures on a layout.
//!
//! A gesture starts with a pointer-down and ends with a pointer-up. On a node,
//! pointer-down pins the node where it is and warms the simulation up so its
//! neighbours follow; moving the pointer turns the gesture into a drag and the
//! pin follows the pointer. A gesture that never moved is a click: on a node it
//! selects the node's object and stops there, on the canvas it reaches the
//! canvas handler.

use std::fmt;

use log::debug;

use cogviz_core::{geometry::Point, identifier::Id, object::CognitiveObject};

use crate::engine::Layout;

type SelectCallback = Box<dyn FnMut(&CognitiveObject)>;
type CanvasCallback = Box<dyn FnMut(Point)>;

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing happened, e.g. a move without a gesture or an unknown node.
    Ignored,
    /// A gesture started on a node and the node got pinned.
    DragStarted(Id),
    /// The pin of a dragged node moved.
    Dragged(Id),
    /// A drag ended and the node was released.
    Released(Id),
    /// A click on a node selected its object.
    Selected(Id),
    /// A gesture started or moved on empty canvas.
    Canvas,
    /// A click on empty canvas reached the canvas handler.
    CanvasClicked,
}

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Node { id: Id, origin: Point, moved: bool },
    Canvas { origin: Point, moved: bool },
}

/// Maps pointer gestures onto pins, temperature and callbacks.
pub struct InteractionController {
    gesture: Option<Gesture>,
    click_tolerance: f32,
    drag_alpha_target: f32,
    on_select: Option<SelectCallback>,
    on_canvas_click: Option<CanvasCallback>,
}

impl InteractionController {
    /// Creates a controller that raises the temperature target to
    /// `drag_alpha_target` while a node is held.
    pub fn new(drag_alpha_target: f32) -> Self {
        Self {
            gesture: None,
            click_tolerance: 0.0,
            drag_alpha_target,
            on_select: None,
            on_canvas_click: None,
        }
    }

    /// Set how far the pointer may travel before a gesture stops being a click
    pub fn set_click_tolerance(&mut self, tolerance: f32) -> &mut Self {
        self.click_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the callback invoked with the object of a clicked node
    pub fn set_on_select(&mut self, callback: impl FnMut(&CognitiveObject) + 'static) -> &mut Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked with the position of a click on empty canvas
    pub fn set_on_canvas_click(&mut self, callback: impl FnMut(Point) + 'static) -> &mut Self {
        self.on_canvas_click = Some(Box::new(callback));
        self
    }

    /// The node currently held, if any.
    pub fn held(&self) -> Option<Id> {
        match self.gesture {
            Some(Gesture::Node { id, .. }) => Some(id),
            _ => None,
        }
    }

    /// Starts a gesture at `at`, on the topmost node under the pointer if any.
    pub fn pointer_down(&mut self, layout: &mut Layout, at: Point) -> PointerOutcome {
        match layout.hit_test(at) {
            Some(id) => self.pointer_down_on(layout, id, at),
            None => {
                self.gesture = Some(Gesture::Canvas {
                    origin: at,
                    moved: false,
                });
                PointerOutcome::Canvas
            }
        }
    }

    /// Starts a gesture on the node `id`, for hosts that resolve targets themselves.
    pub fn pointer_down_on(&mut self, layout: &mut Layout, id: Id, at: Point) -> PointerOutcome {
        let simulation = layout.simulation_mut();
        let Some(position) = simulation.position(id) else {
            debug!(id:% = id; "Ignoring pointer down on unknown node");
            return PointerOutcome::Ignored;
        };

        if let Some(previous) = self.held() {
            simulation.unpin(previous);
        }

        simulation.pin(id, position);
        simulation.set_alpha_target(self.drag_alpha_target);
        self.gesture = Some(Gesture::Node {
            id,
            origin: at,
            moved: false,
        });

        debug!(id:% = id, position:? = position; "Drag started");
        PointerOutcome::DragStarted(id)
    }

    /// Moves the pointer; a held node follows once the gesture counts as a drag.
    pub fn pointer_move(&mut self, layout: &mut Layout, at: Point) -> PointerOutcome {
        let tolerance = self.click_tolerance;
        match &mut self.gesture {
            None => PointerOutcome::Ignored,
            Some(Gesture::Canvas { origin, moved }) => {
                *moved |= origin.distance(at) > tolerance;
                PointerOutcome::Canvas
            }
            Some(Gesture::Node { id, origin, moved }) => {
                *moved |= origin.distance(at) > tolerance;
                if !*moved {
                    return PointerOutcome::Ignored;
                }
                layout.simulation_mut().pin(*id, at);
                PointerOutcome::Dragged(*id)
            }
        }
    }

    /// Ends the gesture: releases a held node, or dispatches a click if the
    /// pointer never moved.
    pub fn pointer_up(&mut self, layout: &mut Layout, at: Point) -> PointerOutcome {
        self.pointer_move(layout, at);

        match self.gesture.take() {
            None => PointerOutcome::Ignored,
            Some(Gesture::Canvas { moved, .. }) => {
                if moved {
                    PointerOutcome::Ignored
                } else {
                    self.canvas_click(at)
                }
            }
            Some(Gesture::Node { id, moved, .. }) => {
                let simulation = layout.simulation_mut();
                simulation.unpin(id);
                simulation.set_alpha_target(0.0);

                if moved {
                    debug!(id:% = id; "Drag released");
                    PointerOutcome::Released(id)
                } else {
                    self.select(layout, id)
                }
            }
        }
    }

    /// A complete press and release at `at`.
    pub fn click(&mut self, layout: &mut Layout, at: Point) -> PointerOutcome {
        self.pointer_down(layout, at);
        self.pointer_up(layout, at)
    }

    /// Dispatches a click on empty canvas.
    pub fn canvas_click(&mut self, at: Point) -> PointerOutcome {
        debug!(at:? = at; "Canvas clicked");
        if let Some(callback) = self.on_canvas_click.as_mut() {
            callback(at);
        }
        PointerOutcome::CanvasClicked
    }

    /// Abandons the current gesture, releasing a held node without a click.
    pub fn cancel(&mut self, layout: &mut Layout) {
        if let Some(Gesture::Node { id, .. }) = self.gesture.take() {
            let simulation = layout.simulation_mut();
            simulation.unpin(id);
            simulation.set_alpha_target(0.0);
        }
    }

    /// Forgets the current gesture without touching any layout.
    ///
    /// Used when the layout the gesture started on has been replaced.
    pub fn reset(&mut self) {
        self.gesture = None;
    }

    fn select(&mut self, layout: &Layout, id: Id) -> PointerOutcome {
        let Some(object) = layout.object(id) else {
            return PointerOutcome::Ignored;
        };

        debug!(id:% = id; "Node selected");
        if let Some(callback) = self.on_select.as_mut() {
            callback(object);
        }
        PointerOutcome::Selected(id)
    }
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("gesture", &self.gesture)
            .field("click_tolerance", &self.click_tolerance)
            .field("drag_alpha_target", &self.drag_alpha_target)
            .field("on_select", &self.on_select.is_some())
            .field("on_canvas_click", &self.on_canvas_click.is_some())
            .finish()
    }
}
