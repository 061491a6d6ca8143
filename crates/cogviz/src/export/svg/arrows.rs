use svg::node::element::{Definitions, Marker, Path};

use cogviz_core::style::LINK_STROKE;

/// Id of the arrow head marker shared by all links.
pub const ARROW_ID: &str = "arrow";

/// Marker reference for the `marker-end` attribute of a link.
pub fn arrow_reference() -> String {
    format!("url(#{ARROW_ID})")
}

/// Creates the arrow head definition.
///
/// Links end at node centers, so the marker is pulled back along the line
/// to sit on the rim of the target circle.
pub fn create_marker_definitions() -> Definitions {
    let arrow = Marker::new()
        .set("id", ARROW_ID)
        .set("viewBox", "0 -5 10 10")
        .set("refX", 22)
        .set("refY", 0)
        .set("markerWidth", 6)
        .set("markerHeight", 6)
        .set("orient", "auto")
        .add(Path::new().set("d", "M0,-5L10,0L0,5").set("fill", LINK_STROKE));

    Definitions::new().add(arrow)
}
