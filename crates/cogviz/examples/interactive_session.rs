//! Example: Driving a cognitive view like an interactive host
//!
//! Builds a small reasoning graph in code, lets the force layout settle,
//! drags one node, switches to DAG mode and writes both layouts as SVG files
//! into the current directory.

use std::{cell::RefCell, rc::Rc, time::Duration};

use cogviz::{
    config::AppConfig,
    export::{Exporter, svg::Svg},
    geometry::{Point, Size},
    identifier::Id,
    mode::LayoutMode,
    object::{CognitiveObject, CognitiveType},
    view::{CognitiveView, ViewFrame},
};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let objects = vec![
        CognitiveObject::new("obs", "Latency spike", CognitiveType::Fact).with_weight(0.8),
        CognitiveObject::new("hyp", "Cache eviction", CognitiveType::Hypothesis)
            .with_relations(["obs"]),
        CognitiveObject::new("q", "Which tier?", CognitiveType::Question)
            .with_relations(["Cache eviction"]),
        CognitiveObject::new("plan", "Pin hot keys", CognitiveType::Plan)
            .with_relations(["hyp", "q"]),
        CognitiveObject::new("goal", "p99 < 50ms", CognitiveType::Goal).with_weight(1.0),
    ];

    let selected = Rc::new(RefCell::new(None));
    let sink = selected.clone();
    let mut view = CognitiveView::new(&AppConfig::default())
        .with_selection(move |object| *sink.borrow_mut() = Some(object.name().to_string()));

    view.mount(Size::new(800.0, 500.0));
    view.set_objects(objects);

    let frames = settle(&mut view);
    println!("Force layout settled after {frames} frames");

    // Drag the plan node to the top left corner and let go.
    let plan = Id::new("plan");
    if let Some(start) = view.layout().and_then(|l| l.simulation().position(plan)) {
        view.pointer_down(start);
        for step in 1..=30 {
            let t = step as f32 / 30.0;
            let x = start.x() * (1.0 - t) + 80.0 * t;
            let y = start.y() * (1.0 - t) + 80.0 * t;
            view.pointer_move(Point::new(x, y));
            view.advance(FRAME);
        }
        view.pointer_up(Point::new(80.0, 80.0));
    }
    // Let the rest of the graph fully reorganize around the moved node.
    view.reheat();
    settle(&mut view);

    if let Some(at) = view.layout().and_then(|l| l.simulation().position(Id::new("goal"))) {
        view.click(at);
    }
    println!("Selected: {:?}", selected.borrow());

    Svg::new()
        .with_file_name("session_force.svg")
        .export_scene(&view.scene())?;

    view.set_mode(LayoutMode::Dag);
    let frames = settle(&mut view);
    println!("DAG layout settled after {frames} frames");
    if let Some(levels) = view.layout().and_then(|l| l.levels()) {
        for (id, level) in levels.iter() {
            println!("  {id}: level {level}");
        }
    }

    Svg::new()
        .with_file_name("session_dag.svg")
        .export_scene(&view.scene())?;

    println!("\nWrote session_force.svg and session_dag.svg");
    Ok(())
}

fn settle(view: &mut CognitiveView) -> usize {
    let mut frames = 0;
    while let ViewFrame::Frame(_) = view.advance(FRAME) {
        frames += 1;
        if view.layout().is_none_or(|l| l.simulation().is_settled()) || frames > 2000 {
            break;
        }
    }
    frames
}
