//! SVG rendering of scenes.

mod arrows;

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Circle, Group, Line, Rectangle, Text},
};

use cogviz_core::{
    color::Color,
    geometry::Size,
    mode::LayoutMode,
    style::{LABEL_FILL, LINK_STROKE, NODE_STROKE},
};

use crate::{
    export,
    scene::{Scene, SceneLink, SceneNode},
    viewport::DEFAULT_SIZE,
};

/// Shown instead of a diagram while there are no objects.
pub const PLACEHOLDER_TEXT: &str = "AWAITING COGNITIVE INPUT...";

const FONT_FAMILY: &str = "JetBrains Mono, monospace";

/// SVG exporter for scenes.
#[derive(Debug, Clone, Default)]
pub struct Svg {
    file_name: Option<String>,
    background: Option<Color>,
}

impl Svg {
    /// Creates an exporter that only renders documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file written by [`export::Exporter::export_scene`]
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Set the color painted behind the diagram
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Renders `scene` into a standalone document.
    pub fn render_scene(&self, scene: &Scene<'_>) -> Document {
        let size = if scene.size().is_drawable() {
            scene.size()
        } else {
            DEFAULT_SIZE
        };

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(background) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background),
            );
        }

        if scene.is_empty() {
            debug!("Rendering placeholder for empty scene");
            return doc.add(Self::render_placeholder(size));
        }

        doc = doc.add(arrows::create_marker_definitions());

        let links = scene
            .links()
            .iter()
            .fold(
                Group::new()
                    .set("stroke", LINK_STROKE)
                    .set("stroke-opacity", 0.6),
                |group, link| group.add(Self::render_link(link)),
            );

        let nodes = scene
            .nodes()
            .iter()
            .fold(Group::new(), |group, node| group.add(Self::render_node(node)));

        debug!(
            node_count = scene.nodes().len(),
            link_count = scene.links().len();
            "SVG document rendered"
        );

        doc.add(links)
            .add(nodes)
            .add(Self::render_caption(scene.mode()))
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let Some(file_name) = &self.file_name else {
            return Err(export::Error::Render("No output file configured".to_string()));
        };

        info!(file_name; "Creating SVG file");
        let mut f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }

    fn render_link(link: &SceneLink) -> Line {
        Line::new()
            .set("x1", link.source().x())
            .set("y1", link.source().y())
            .set("x2", link.target().x())
            .set("y2", link.target().y())
            .set("stroke-width", 1.5)
            .set("marker-end", arrows::arrow_reference())
    }

    fn render_node(node: &SceneNode<'_>) -> Group {
        let style = node.style();
        let position = node.position();

        let circle = Circle::new()
            .set("r", style.radius())
            .set("fill", &style.fill())
            .set("stroke", NODE_STROKE)
            .set("stroke-width", 2);

        let label = Text::new(style.label())
            .set("x", 20)
            .set("y", 5)
            .set("font-family", FONT_FAMILY)
            .set("font-size", "11px")
            .set("font-weight", "bold")
            .set("fill", LABEL_FILL);

        let badge_fill = Color::default().with_alpha(0.6);
        let badge = Text::new(style.badge())
            .set("x", -8)
            .set("y", 3)
            .set("font-family", FONT_FAMILY)
            .set("font-size", "7px")
            .set("font-weight", "bold")
            .set("fill", &badge_fill);

        Group::new()
            .set("id", node.object().id())
            .set(
                "transform",
                format!("translate({}, {})", position.x(), position.y()),
            )
            .add(circle)
            .add(label)
            .add(badge)
    }

    fn render_caption(mode: LayoutMode) -> Text {
        Text::new(format!("LAYOUT :: {}", mode.label()))
            .set("x", 8)
            .set("y", 16)
            .set("font-family", FONT_FAMILY)
            .set("font-size", "10px")
            .set("fill", LINK_STROKE)
    }

    fn render_placeholder(size: Size) -> Text {
        let center = size.center();
        Text::new(PLACEHOLDER_TEXT)
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", "12px")
            .set("fill", LINK_STROKE)
            .set("opacity", 0.3)
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene<'_>) -> Result<(), export::Error> {
        let doc = self.render_scene(scene);
        self.write_document(&doc)
    }
}
