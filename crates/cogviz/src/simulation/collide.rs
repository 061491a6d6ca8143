//! Overlap resolution between node discs.

use super::{Force, Jiggle, NodeState};

/// Pushes apart nodes whose discs will overlap after the current velocities
/// are applied.
///
/// Independent of the temperature: overlap is corrected by the same fraction
/// on every tick. The correction is split by squared radius, so a small node
/// gets out of the way of a large one.
#[derive(Debug, Clone)]
pub struct CollideForce {
    radii: Vec<f32>,
    strength: f32,
}

impl CollideForce {
    /// Creates the force with one radius per node.
    pub fn new(radii: Vec<f32>, strength: f32) -> Self {
        Self { radii, strength }
    }
}

impl Force for CollideForce {
    fn apply(&mut self, nodes: &mut [NodeState], _alpha: f32, jiggle: &mut Jiggle) {
        let count = nodes.len().min(self.radii.len());

        for i in 0..count {
            let ri = self.radii[i];
            let ri2 = ri * ri;
            let xi = nodes[i].x + nodes[i].vx;
            let yi = nodes[i].y + nodes[i].vy;

            for j in (i + 1)..count {
                let rj = self.radii[j];
                let r = ri + rj;
                let mut x = xi - nodes[j].x - nodes[j].vx;
                let mut y = yi - nodes[j].y - nodes[j].vy;
                let mut l = x * x + y * y;
                if l >= r * r {
                    continue;
                }

                if x == 0.0 {
                    x = jiggle.sample();
                    l += x * x;
                }
                if y == 0.0 {
                    y = jiggle.sample();
                    l += y * y;
                }
                let length = l.sqrt();
                let correction = (r - length) / length * self.strength;
                x *= correction;
                y *= correction;

                let rj2 = rj * rj;
                let share = rj2 / (ri2 + rj2);
                nodes[i].vx += x * share;
                nodes[i].vy += y * share;
                nodes[j].vx -= x * (1.0 - share);
                nodes[j].vy -= y * (1.0 - share);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cogviz_core::geometry::Point;

    use super::*;

    #[test]
    fn test_overlapping_nodes_are_separated() {
        let mut nodes = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(10.0, 0.0)),
        ];

        CollideForce::new(vec![15.0, 15.0], 0.7).apply(&mut nodes, 0.0, &mut Jiggle::new(0));

        assert!(nodes[0].vx < 0.0);
        assert!(nodes[1].vx > 0.0);
    }

    #[test]
    fn test_distant_nodes_are_untouched() {
        let mut nodes = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(31.0, 0.0)),
        ];

        CollideForce::new(vec![15.0, 15.0], 0.7).apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert_eq!(nodes[0].velocity(), Point::default());
        assert_eq!(nodes[1].velocity(), Point::default());
    }

    #[test]
    fn test_small_node_yields_to_large_one() {
        let mut nodes = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(0.0, 10.0)),
        ];

        CollideForce::new(vec![30.0, 10.0], 0.7).apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert!(nodes[1].vy.abs() > nodes[0].vy.abs());
    }

    #[test]
    fn test_coincident_nodes_get_separated() {
        let mut nodes = vec![NodeState::at(Point::new(1.0, 1.0)); 2];

        CollideForce::new(vec![15.0, 15.0], 0.7).apply(&mut nodes, 1.0, &mut Jiggle::new(9));

        assert!(nodes[0].velocity().is_finite());
        assert_ne!(nodes[0].velocity(), nodes[1].velocity());
    }
}
