//! Layout construction.
//!
//! [`EngineBuilder`] turns an object list, a [`LayoutMode`] and a viewport size
//! into a [`Layout`]: the derived graph, the levels (DAG mode only), per-node
//! styles and a fresh [`Simulation`] wired with the forces of the mode.
//! A layout is never patched in place; any change to its inputs builds a new one.

use std::rc::Rc;

use log::{debug, info};

use cogviz_core::{
    geometry::{Point, Size},
    identifier::Id,
    mode::LayoutMode,
    object::CognitiveObject,
    style::NodeStyle,
};

use crate::{
    config::SimulationConfig,
    derive::{self, GraphData},
    level::{self, Levels},
    scene::{Scene, SceneLink, SceneNode},
    simulation::{
        Simulation,
        anchor::{Axis, AxisForce, CenterForce},
        collide::CollideForce,
        link::LinkForce,
        many_body::ManyBodyForce,
    },
};

/// Builder for layouts sharing one simulation configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: SimulationConfig,
}

impl EngineBuilder {
    /// Create a new engine builder with the default simulation configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulation configuration
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the jiggle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.set_seed(seed);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Builds the layout of `objects`, or `None` when there is nothing to lay out.
    pub fn build(
        &self,
        objects: Rc<[CognitiveObject]>,
        mode: LayoutMode,
        viewport: Size,
    ) -> Option<Layout> {
        if objects.is_empty() {
            debug!("No objects, skipping layout");
            return None;
        }

        let graph = derive::derive(&objects, mode);
        let levels = mode
            .is_dag()
            .then(|| level::compute_levels(graph.nodes(), graph.links()));
        let styles: Vec<NodeStyle> = objects
            .iter()
            .map(|object| NodeStyle::for_object(object, mode))
            .collect();

        let mut simulation = Simulation::new(graph.nodes(), viewport.center(), &self.config);
        self.add_forces(&mut simulation, &graph, levels.as_ref(), &styles, mode, viewport);

        info!(
            mode:% = mode,
            node_count = graph.nodes().len(),
            link_count = graph.links().len(),
            width = viewport.width(),
            height = viewport.height();
            "Built layout"
        );

        Some(Layout {
            objects,
            graph,
            levels,
            styles,
            simulation,
            mode,
            viewport,
        })
    }

    fn add_forces(
        &self,
        simulation: &mut Simulation,
        graph: &GraphData,
        levels: Option<&Levels>,
        styles: &[NodeStyle],
        mode: LayoutMode,
        viewport: Size,
    ) {
        let count = graph.nodes().len();
        let config = &self.config;

        let links: Vec<(usize, usize)> = graph
            .links()
            .iter()
            .filter_map(|link| {
                Some((
                    simulation.index_of(link.source())?,
                    simulation.index_of(link.target())?,
                ))
            })
            .collect();

        let half_clearance = config.collision_clearance() / 2.0;

        match levels {
            None => {
                let radii = styles
                    .iter()
                    .map(|style| style.radius().max(half_clearance))
                    .collect();

                simulation
                    .add_force(LinkForce::new(&links, count, config.force().link_distance()))
                    .add_force(ManyBodyForce::new(config.force().charge_strength()))
                    .add_force(CollideForce::new(radii, config.collision_strength()))
                    .add_force(CenterForce::new(viewport.center()));
            }
            Some(levels) => {
                let dag = config.dag();
                let columns = levels.max_level().max(1) as f32 + 1.0;
                let column_width = (viewport.width() - 2.0 * dag.margin()) / columns;
                let targets = graph
                    .nodes()
                    .iter()
                    .map(|&id| dag.margin() + levels.get(id) as f32 * column_width)
                    .collect();

                simulation
                    .add_force(LinkForce::new(&links, count, dag.link_distance()))
                    .add_force(ManyBodyForce::new(dag.charge_strength()))
                    .add_force(CollideForce::new(
                        vec![half_clearance; count],
                        config.collision_strength(),
                    ))
                    .add_force(AxisForce::new(Axis::X, targets, dag.level_strength()))
                    .add_force(AxisForce::uniform(
                        Axis::Y,
                        viewport.center().y(),
                        count,
                        dag.vertical_strength(),
                    ));
            }
        }

        debug!(mode:% = mode, link_force_count = links.len(); "Configured forces");
    }
}

/// A laid-out graph: domain records, derived topology and live simulation.
#[derive(Debug)]
pub struct Layout {
    objects: Rc<[CognitiveObject]>,
    graph: GraphData,
    levels: Option<Levels>,
    styles: Vec<NodeStyle>,
    simulation: Simulation,
    mode: LayoutMode,
    viewport: Size,
}

impl Layout {
    pub fn objects(&self) -> &[CognitiveObject] {
        &self.objects
    }

    pub fn graph(&self) -> &GraphData {
        &self.graph
    }

    /// Levels of the nodes; only present in DAG mode.
    pub fn levels(&self) -> Option<&Levels> {
        self.levels.as_ref()
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    /// The first object with the given id.
    pub fn object(&self, id: Id) -> Option<&CognitiveObject> {
        self.simulation.index_of(id).map(|i| &self.objects[i])
    }

    pub fn style(&self, id: Id) -> Option<&NodeStyle> {
        self.simulation.index_of(id).map(|i| &self.styles[i])
    }

    /// The topmost node whose disc contains `point`.
    ///
    /// Nodes are drawn in input order, so later nodes cover earlier ones.
    pub fn hit_test(&self, point: Point) -> Option<Id> {
        self.simulation
            .nodes()
            .iter()
            .zip(&self.styles)
            .enumerate()
            .rev()
            .find(|(_, (node, style))| node.position().distance(point) <= style.radius())
            .map(|(i, _)| self.graph.nodes()[i])
    }

    /// Joins the current positions with the domain records and styles.
    pub fn scene(&self) -> Scene<'_> {
        let nodes = self.simulation.nodes();

        let scene_nodes = self
            .objects
            .iter()
            .zip(&self.styles)
            .zip(nodes)
            .map(|((object, style), node)| SceneNode::new(object, style, node.position()))
            .collect();

        let links = self
            .graph
            .links()
            .iter()
            .filter_map(|link| {
                let source = self.simulation.position(link.source())?;
                let target = self.simulation.position(link.target())?;
                Some(SceneLink::new(*link, source, target))
            })
            .collect();

        Scene::new(self.mode, self.viewport, scene_nodes, links)
    }
}
