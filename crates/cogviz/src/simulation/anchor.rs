//! Forces that tie the layout to the viewport.

use cogviz_core::geometry::Point;

use super::{Force, Jiggle, NodeState};

/// Translates all nodes so that their mean position sits on `center`.
///
/// Moves positions directly and leaves velocities alone, so it never adds
/// energy to the system.
#[derive(Debug, Clone)]
pub struct CenterForce {
    center: Point,
}

impl CenterForce {
    pub fn new(center: Point) -> Self {
        Self { center }
    }
}

impl Force for CenterForce {
    fn apply(&mut self, nodes: &mut [NodeState], _alpha: f32, _jiggle: &mut Jiggle) {
        if nodes.is_empty() {
            return;
        }

        let count = nodes.len() as f32;
        let (sx, sy) = nodes
            .iter()
            .fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
        let dx = sx / count - self.center.x();
        let dy = sy / count - self.center.y();

        for node in nodes {
            node.x -= dx;
            node.y -= dy;
        }
    }
}

/// Axis a [`AxisForce`] pulls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pulls each node toward its own target coordinate on one axis.
#[derive(Debug, Clone)]
pub struct AxisForce {
    axis: Axis,
    targets: Vec<f32>,
    strength: f32,
}

impl AxisForce {
    /// Creates the force with one target per node.
    pub fn new(axis: Axis, targets: Vec<f32>, strength: f32) -> Self {
        Self {
            axis,
            targets,
            strength,
        }
    }

    /// Creates the force with the same target for `count` nodes.
    pub fn uniform(axis: Axis, target: f32, count: usize, strength: f32) -> Self {
        Self::new(axis, vec![target; count], strength)
    }
}

impl Force for AxisForce {
    fn apply(&mut self, nodes: &mut [NodeState], alpha: f32, _jiggle: &mut Jiggle) {
        let k = self.strength * alpha;
        for (node, target) in nodes.iter_mut().zip(&self.targets) {
            match self.axis {
                Axis::X => node.vx += (target - node.x) * k,
                Axis::Y => node.vy += (target - node.y) * k,
            }
        }
    }
}
