//! Render-ready snapshot of a layout.
//!
//! A [`Scene`] borrows the domain records and styles of a layout and pairs them
//! with the node positions of one moment. Exporters consume scenes and never
//! see the simulation.

use cogviz_core::{
    geometry::{Point, Size},
    mode::LayoutMode,
    object::CognitiveObject,
    style::NodeStyle,
};

use crate::derive::Link;

/// A node ready to be drawn.
#[derive(Debug, Clone, Copy)]
pub struct SceneNode<'a> {
    object: &'a CognitiveObject,
    style: &'a NodeStyle,
    position: Point,
}

impl<'a> SceneNode<'a> {
    pub fn new(object: &'a CognitiveObject, style: &'a NodeStyle, position: Point) -> Self {
        Self {
            object,
            style,
            position,
        }
    }

    pub fn object(&self) -> &'a CognitiveObject {
        self.object
    }

    pub fn style(&self) -> &'a NodeStyle {
        self.style
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A link with resolved endpoint positions.
#[derive(Debug, Clone, Copy)]
pub struct SceneLink {
    link: Link,
    source: Point,
    target: Point,
}

impl SceneLink {
    pub fn new(link: Link, source: Point, target: Point) -> Self {
        Self {
            link,
            source,
            target,
        }
    }

    pub fn link(&self) -> Link {
        self.link
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

/// Everything needed to draw one frame of a view.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    mode: LayoutMode,
    size: Size,
    nodes: Vec<SceneNode<'a>>,
    links: Vec<SceneLink>,
}

impl<'a> Scene<'a> {
    pub fn new(
        mode: LayoutMode,
        size: Size,
        nodes: Vec<SceneNode<'a>>,
        links: Vec<SceneLink>,
    ) -> Self {
        Self {
            mode,
            size,
            nodes,
            links,
        }
    }

    /// A scene without nodes, drawn as the awaiting-input placeholder.
    pub fn empty(mode: LayoutMode, size: Size) -> Self {
        Self::new(mode, size, Vec::new(), Vec::new())
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn nodes(&self) -> &[SceneNode<'a>] {
        &self.nodes
    }

    pub fn links(&self) -> &[SceneLink] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
