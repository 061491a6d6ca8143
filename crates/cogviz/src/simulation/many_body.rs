//! Pairwise charge between all nodes.

use super::{Force, Jiggle, NodeState};

/// Charge force between every pair of nodes; negative strength repels.
///
/// Graphs handled here are small, so every pair is visited instead of
/// approximating distant groups.
#[derive(Debug, Clone)]
pub struct ManyBodyForce {
    strength: f32,
}

impl ManyBodyForce {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }
}

impl Force for ManyBodyForce {
    fn apply(&mut self, nodes: &mut [NodeState], alpha: f32, jiggle: &mut Jiggle) {
        for i in 0..nodes.len() {
            for j in 0..nodes.len() {
                if i == j {
                    continue;
                }

                let mut x = nodes[j].x - nodes[i].x;
                let mut y = nodes[j].y - nodes[i].y;
                let mut l = x * x + y * y;
                if x == 0.0 {
                    x = jiggle.sample();
                    l += x * x;
                }
                if y == 0.0 {
                    y = jiggle.sample();
                    l += y * y;
                }
                // Soften the singularity for nearly coincident nodes.
                if l < 1.0 {
                    l = l.sqrt();
                }

                let w = self.strength * alpha / l;
                nodes[i].vx += x * w;
                nodes[i].vy += y * w;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cogviz_core::geometry::Point;
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_negative_strength_repels() {
        let mut nodes = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(10.0, 0.0)),
        ];

        ManyBodyForce::new(-300.0).apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert!(nodes[0].vx < 0.0);
        assert!(nodes[1].vx > 0.0);
        // Δv = d·strength·α / |d|² = 10·(-300) / 100
        assert!(approx_eq!(f32, nodes[0].vx, -30.0, epsilon = 1e-3));
    }

    #[test]
    fn test_scales_with_alpha() {
        let mut hot = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(0.0, 10.0)),
        ];
        let mut cold = hot.clone();

        ManyBodyForce::new(-200.0).apply(&mut hot, 1.0, &mut Jiggle::new(0));
        ManyBodyForce::new(-200.0).apply(&mut cold, 0.1, &mut Jiggle::new(0));

        assert!(approx_eq!(f32, hot[0].vy, cold[0].vy * 10.0, epsilon = 1e-3));
    }

    #[test]
    fn test_coincident_nodes_stay_finite() {
        let mut nodes = vec![NodeState::at(Point::new(5.0, 5.0)); 3];

        ManyBodyForce::new(-300.0).apply(&mut nodes, 1.0, &mut Jiggle::new(3));

        for node in &nodes {
            assert!(node.velocity().is_finite());
        }
    }
}
