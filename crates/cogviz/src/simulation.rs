//! Iterative force simulation.
//!
//! The simulation keeps a mutable [`NodeState`] per node and advances it in
//! discrete ticks. Each tick cools the temperature (`alpha`) toward its target,
//! lets every registered [`Force`] adjust velocities (or positions), then
//! integrates: pinned nodes snap to their pin, free nodes move by their damped
//! velocity.
//!
//! The host drives the simulation explicitly, either one [`Simulation::tick`]
//! at a time or through [`Simulation::advance`], which converts elapsed time
//! into a bounded number of ticks and returns a [`Frame`].

pub mod anchor;
pub mod collide;
pub mod link;
pub mod many_body;

use std::{f32::consts::PI, time::Duration};

use indexmap::IndexMap;
use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use cogviz_core::{geometry::Point, identifier::Id};

use crate::config::SimulationConfig;

/// Radius of the first ring of the initial phyllotaxis placement.
const INITIAL_RADIUS: f32 = 10.0;

/// Mutable layout state of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeState {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    pin: Option<Point>,
}

impl NodeState {
    fn at(position: Point) -> Self {
        Self {
            x: position.x(),
            y: position.y(),
            ..Self::default()
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Point {
        Point::new(self.vx, self.vy)
    }

    pub fn pin(&self) -> Option<Point> {
        self.pin
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }
}

/// Source of the tiny random offsets used to separate coincident nodes.
///
/// Seeded, so a simulation replays identically for the same input.
#[derive(Debug, Clone)]
pub struct Jiggle(StdRng);

impl Jiggle {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Returns a value in `[-5e-7, 5e-7)`.
    pub fn sample(&mut self) -> f32 {
        (self.0.random::<f32>() - 0.5) * 1e-6
    }
}

/// A force acting on the nodes of a simulation.
///
/// Forces receive the node states in the order the simulation was created
/// with, so index-based bookkeeping (link endpoints, per-node radii) stays
/// valid for the lifetime of the simulation.
pub trait Force {
    /// Applies the force for one tick at temperature `alpha`.
    fn apply(&mut self, nodes: &mut [NodeState], alpha: f32, jiggle: &mut Jiggle);
}

/// Snapshot of node positions after a tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    positions: IndexMap<Id, Point>,
    alpha: f32,
    tick: u64,
}

impl Frame {
    pub fn position(&self, id: Id) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = (Id, Point)> + '_ {
        self.positions.iter().map(|(id, point)| (*id, *point))
    }

    /// Temperature at the time of the snapshot.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Number of ticks run before the snapshot.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A running force simulation over a fixed set of nodes.
pub struct Simulation {
    ids: Vec<Id>,
    index: IndexMap<Id, usize>,
    nodes: Vec<NodeState>,
    forces: Vec<Box<dyn Force>>,
    alpha: f32,
    alpha_target: f32,
    alpha_min: f32,
    alpha_decay: f32,
    velocity_decay: f32,
    jiggle: Jiggle,
    tick_interval: Duration,
    max_ticks_per_advance: u32,
    pending: Duration,
    ticks: u64,
    stopped: bool,
}

impl Simulation {
    /// Creates a simulation with `ids` spread on a phyllotaxis spiral around `center`.
    ///
    /// Duplicate ids each get their own state; lookups by id resolve to the
    /// first of them.
    pub fn new(ids: &[Id], center: Point, config: &SimulationConfig) -> Self {
        let initial_angle = PI * (3.0 - 5f32.sqrt());

        let nodes = (0..ids.len())
            .map(|i| {
                let radius = INITIAL_RADIUS * (0.5 + i as f32).sqrt();
                let angle = i as f32 * initial_angle;
                NodeState::at(Point::new(
                    center.x() + radius * angle.cos(),
                    center.y() + radius * angle.sin(),
                ))
            })
            .collect();

        let mut index = IndexMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            index.entry(*id).or_insert(i);
        }

        debug!(
            node_count = ids.len(),
            center:? = center,
            seed = config.seed();
            "Creating simulation"
        );

        Self {
            ids: ids.to_vec(),
            index,
            nodes,
            forces: Vec::new(),
            alpha: 1.0,
            alpha_target: 0.0,
            alpha_min: config.alpha_min(),
            alpha_decay: config.alpha_decay(),
            velocity_decay: 1.0 - config.velocity_decay(),
            jiggle: Jiggle::new(config.seed()),
            tick_interval: config.tick_interval(),
            max_ticks_per_advance: config.max_ticks_per_advance(),
            pending: Duration::ZERO,
            ticks: 0,
            stopped: false,
        }
    }

    /// Registers a force; forces run in registration order.
    pub fn add_force(&mut self, force: impl Force + 'static) -> &mut Self {
        self.forces.push(Box::new(force));
        self
    }

    /// Position of `id` in the node slice handed to forces.
    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Node states in creation order.
    pub fn nodes(&self) -> &[NodeState] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&NodeState> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    pub fn position(&self, id: Id) -> Option<Point> {
        self.node(id).map(NodeState::position)
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn alpha_target(&self) -> f32 {
        self.alpha_target
    }

    pub fn set_alpha_target(&mut self, target: f32) -> &mut Self {
        trace!(alpha = self.alpha, target; "Setting temperature target");
        self.alpha_target = target;
        self
    }

    /// Restores the temperature to its initial value.
    pub fn reheat(&mut self) -> &mut Self {
        self.alpha = 1.0;
        self
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Fixes `id` at `point` until [`Simulation::unpin`] is called.
    ///
    /// The position is updated immediately, so the next frame reports the pin
    /// even if no tick runs in between. Returns false for unknown ids.
    pub fn pin(&mut self, id: Id, point: Point) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        let node = &mut self.nodes[i];
        node.pin = Some(point);
        node.x = point.x();
        node.y = point.y();
        node.vx = 0.0;
        node.vy = 0.0;
        true
    }

    /// Releases the pin of `id`. Returns false for unknown ids.
    pub fn unpin(&mut self, id: Id) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        self.nodes[i].pin = None;
        true
    }

    /// Halts the simulation for good; later ticks and advances do nothing.
    pub fn stop(&mut self) {
        if !self.stopped {
            debug!(ticks = self.ticks; "Stopping simulation");
            self.stopped = true;
        }
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// True once the temperature and its target are both below the minimum.
    pub fn is_settled(&self) -> bool {
        self.alpha < self.alpha_min && self.alpha_target < self.alpha_min
    }

    /// Runs one iteration.
    pub fn tick(&mut self) {
        if self.stopped {
            return;
        }

        let was_settled = self.alpha < self.alpha_min;
        self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;

        for force in &mut self.forces {
            force.apply(&mut self.nodes, self.alpha, &mut self.jiggle);
        }

        for node in &mut self.nodes {
            match node.pin {
                Some(pin) => {
                    node.x = pin.x();
                    node.y = pin.y();
                    node.vx = 0.0;
                    node.vy = 0.0;
                }
                None => {
                    node.vx *= self.velocity_decay;
                    node.vy *= self.velocity_decay;
                    node.x += node.vx;
                    node.y += node.vy;
                }
            }
        }

        self.ticks += 1;

        if !was_settled && self.is_settled() {
            debug!(ticks = self.ticks, alpha = self.alpha; "Simulation settled");
        }
    }

    /// Accounts `elapsed` time and runs one tick per elapsed tick interval.
    ///
    /// At most `max_ticks_per_advance` ticks run per call; a larger backlog
    /// is dropped rather than carried over. Nothing runs while the simulation
    /// is settled or stopped.
    pub fn advance(&mut self, elapsed: Duration) -> Frame {
        if self.stopped {
            return self.frame();
        }

        self.pending = self.pending.saturating_add(elapsed);

        let mut ran = 0;
        while self.pending >= self.tick_interval && ran < self.max_ticks_per_advance {
            if self.is_settled() {
                break;
            }
            self.tick();
            self.pending -= self.tick_interval;
            ran += 1;
        }

        if ran == self.max_ticks_per_advance || self.is_settled() {
            self.pending = Duration::ZERO;
        }

        self.frame()
    }

    /// Current positions without running a tick.
    pub fn frame(&self) -> Frame {
        let positions = self
            .index
            .iter()
            .map(|(id, i)| (*id, self.nodes[*i].position()))
            .collect();

        Frame {
            positions,
            alpha: self.alpha,
            tick: self.ticks,
        }
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("node_count", &self.nodes.len())
            .field("force_count", &self.forces.len())
            .field("alpha", &self.alpha)
            .field("alpha_target", &self.alpha_target)
            .field("ticks", &self.ticks)
            .field("stopped", &self.stopped)
            .finish()
    }
}
