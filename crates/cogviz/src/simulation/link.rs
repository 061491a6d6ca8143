//! Spring force along links.

use super::{Force, Jiggle, NodeState};

/// Pulls the endpoints of every link toward a fixed distance.
///
/// A link's strength is `1 / min(deg(source), deg(target))` so that hubs are
/// not yanked around by their many neighbours; the correction is split
/// between the endpoints by relative degree, moving the lighter endpoint more.
#[derive(Debug, Clone)]
pub struct LinkForce {
    links: Vec<Spring>,
    distance: f32,
}

#[derive(Debug, Clone, Copy)]
struct Spring {
    source: usize,
    target: usize,
    strength: f32,
    bias: f32,
}

impl LinkForce {
    /// Creates the force for links given as `(source, target)` node indices.
    ///
    /// Self-links count toward degrees but exert no force.
    pub fn new(links: &[(usize, usize)], node_count: usize, distance: f32) -> Self {
        let mut degree = vec![0u32; node_count];
        for &(source, target) in links {
            degree[source] += 1;
            degree[target] += 1;
        }

        let links = links
            .iter()
            .filter(|(source, target)| source != target)
            .map(|&(source, target)| {
                let (ds, dt) = (degree[source] as f32, degree[target] as f32);
                Spring {
                    source,
                    target,
                    strength: 1.0 / ds.min(dt),
                    bias: ds / (ds + dt),
                }
            })
            .collect();

        Self { links, distance }
    }
}

impl Force for LinkForce {
    fn apply(&mut self, nodes: &mut [NodeState], alpha: f32, jiggle: &mut Jiggle) {
        for spring in &self.links {
            let (s, t) = (nodes[spring.source], nodes[spring.target]);

            let mut x = t.x + t.vx - s.x - s.vx;
            let mut y = t.y + t.vy - s.y - s.vy;
            if x == 0.0 {
                x = jiggle.sample();
            }
            if y == 0.0 {
                y = jiggle.sample();
            }

            let length = x.hypot(y);
            let l = (length - self.distance) / length * alpha * spring.strength;
            x *= l;
            y *= l;

            let target = &mut nodes[spring.target];
            target.vx -= x * spring.bias;
            target.vy -= y * spring.bias;

            let source = &mut nodes[spring.source];
            source.vx += x * (1.0 - spring.bias);
            source.vy += y * (1.0 - spring.bias);
        }
    }
}

#[cfg(test)]
mod tests {
    use cogviz_core::geometry::Point;
    use float_cmp::approx_eq;

    use super::*;

    fn pair(distance_apart: f32) -> Vec<NodeState> {
        vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(distance_apart, 0.0)),
        ]
    }

    #[test]
    fn test_stretched_link_pulls_together() {
        let mut nodes = pair(200.0);
        let mut force = LinkForce::new(&[(0, 1)], 2, 80.0);

        force.apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert!(nodes[0].vx > 0.0);
        assert!(nodes[1].vx < 0.0);
        // Equal degrees split the correction evenly.
        assert_eq!(nodes[0].vx, -nodes[1].vx);
        assert!(approx_eq!(f32, nodes[0].vx, 60.0, epsilon = 1e-3));
    }

    #[test]
    fn test_compressed_link_pushes_apart() {
        let mut nodes = pair(20.0);
        let mut force = LinkForce::new(&[(0, 1)], 2, 80.0);

        force.apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert!(nodes[0].vx < 0.0);
        assert!(nodes[1].vx > 0.0);
    }

    #[test]
    fn test_hub_moves_less_than_leaf() {
        let mut nodes = vec![
            NodeState::at(Point::new(0.0, 0.0)),
            NodeState::at(Point::new(200.0, 0.0)),
            NodeState::at(Point::new(-200.0, 0.0)),
            NodeState::at(Point::new(0.0, 200.0)),
        ];
        let mut force = LinkForce::new(&[(0, 1), (0, 2), (0, 3)], 4, 80.0);

        force.apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert!(nodes[1].vx.abs() > nodes[0].velocity().hypot() / 2.0);
    }

    #[test]
    fn test_self_link_exerts_nothing() {
        let mut nodes = pair(200.0);
        let mut force = LinkForce::new(&[(0, 0)], 2, 80.0);

        force.apply(&mut nodes, 1.0, &mut Jiggle::new(0));

        assert_eq!(nodes[0].velocity(), Point::default());
        assert_eq!(nodes[1].velocity(), Point::default());
    }
}
