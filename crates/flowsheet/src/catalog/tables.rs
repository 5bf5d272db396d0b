//! Built-in water-treatment diagram tables.

use flowsheet_core::{
    draw::ShapeKind,
    geometry::{Bounds, Point, Size},
};

use crate::diagram::{Diagram, Edge, Node};

fn node(
    id: &str,
    name: &str,
    shape: ShapeKind,
    fill: &str,
    (x, y, width, height): (f32, f32, f32, f32),
    specification: &str,
) -> Node {
    Node::new(
        id,
        name,
        shape,
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height)),
    )
    .with_fill(fill)
    .with_specification(specification)
}

pub(super) fn membrane_bioreactor() -> Diagram {
    Diagram::new(
        "membrane-bioreactor",
        "Membrane Bioreactor System",
        vec![
            node("influent", "Influent", ShapeKind::Pipe, "#94a3b8", (20.0, 140.0, 90.0, 30.0), "4,000 m³/d raw wastewater")
                .with_icon("droplet"),
            node("screen", "Fine Screen", ShapeKind::Rectangle, "#cbd5e1", (150.0, 115.0, 100.0, 80.0), "2 mm perforated plate")
                .with_icon("filter"),
            node("anoxic", "Anoxic Tank", ShapeKind::Tank, "#bfdbfe", (290.0, 80.0, 110.0, 150.0), "HRT 3 h, 500 m³")
                .with_description("Denitrification zone fed with mixed liquor recycle"),
            node("aeration", "Aeration Tank", ShapeKind::Tank, "#93c5fd", (440.0, 80.0, 110.0, 150.0), "HRT 6 h, fine-bubble diffusers")
                .with_icon("wind")
                .with_description("Nitrification and BOD removal"),
            node("membrane", "Membrane Tank", ShapeKind::Membrane, "#e0f2fe", (590.0, 90.0, 110.0, 130.0), "Hollow-fibre PVDF, 0.04 µm")
                .with_description("Submerged ultrafiltration cassettes with air scour"),
            node("permeate-pump", "Permeate Pump", ShapeKind::Circle, "#a7f3d0", (740.0, 125.0, 60.0, 60.0), "Rotary lobe, 50 m³/h")
                .with_icon("gauge"),
            node("permeate", "Treated Effluent", ShapeKind::Pipe, "#6ee7b7", (840.0, 140.0, 100.0, 30.0), "BOD < 5 mg/L, TSS < 1 mg/L"),
            node("was", "Waste Sludge", ShapeKind::Ellipse, "#d6b38a", (590.0, 280.0, 110.0, 60.0), "1.5% solids to thickening"),
        ],
        vec![
            Edge::new("influent", "screen"),
            Edge::new("screen", "anoxic"),
            Edge::new("anoxic", "aeration"),
            Edge::new("aeration", "membrane"),
            Edge::new("membrane", "permeate-pump"),
            Edge::new("permeate-pump", "permeate"),
            Edge::new("membrane", "was"),
            Edge::recycle("membrane", "anoxic"),
        ],
    )
}

pub(super) fn reverse_osmosis() -> Diagram {
    Diagram::new(
        "reverse-osmosis",
        "Reverse Osmosis Desalination",
        vec![
            node("feed-tank", "Feed Tank", ShapeKind::Tank, "#bae6fd", (20.0, 80.0, 100.0, 140.0), "200 m³ brackish well water")
                .with_icon("droplet"),
            node("cartridge", "Cartridge Filter", ShapeKind::Rectangle, "#e2e8f0", (160.0, 110.0, 100.0, 80.0), "5 µm polypropylene")
                .with_icon("filter"),
            node("antiscalant", "Antiscalant Dosing", ShapeKind::Ellipse, "#fde68a", (160.0, 250.0, 100.0, 50.0), "3 mg/L phosphonate"),
            node("hp-pump", "High-Pressure Pump", ShapeKind::Circle, "#c4b5fd", (300.0, 115.0, 70.0, 70.0), "16 bar, 90 kW VFD")
                .with_icon("gauge"),
            node("ro-train", "RO Train", ShapeKind::Membrane, "#e0f2fe", (410.0, 85.0, 120.0, 130.0), "2:1 array, 8\" spiral-wound elements")
                .with_description("Two-stage brackish water membrane array"),
            node("permeate-tank", "Permeate Tank", ShapeKind::Tank, "#a7f3d0", (570.0, 40.0, 100.0, 120.0), "TDS < 300 mg/L"),
            node("concentrate", "Concentrate", ShapeKind::Pipe, "#fca5a5", (570.0, 210.0, 100.0, 30.0), "25% of feed to evaporation pond"),
        ],
        vec![
            Edge::new("feed-tank", "cartridge"),
            Edge::new("antiscalant", "hp-pump"),
            Edge::new("cartridge", "hp-pump"),
            Edge::new("hp-pump", "ro-train"),
            Edge::new("ro-train", "permeate-tank"),
            Edge::new("ro-train", "concentrate"),
        ],
    )
}

pub(super) fn anaerobic_digestion() -> Diagram {
    Diagram::new(
        "anaerobic-digestion",
        "Anaerobic Digestion and Biogas Recovery",
        vec![
            node("sludge-feed", "Sludge Feed", ShapeKind::Pipe, "#d6b38a", (20.0, 150.0, 90.0, 30.0), "Primary and waste activated sludge"),
            node("thickener", "Gravity Belt Thickener", ShapeKind::Rectangle, "#e7d3b5", (150.0, 120.0, 110.0, 90.0), "Thickens to 5% solids")
                .with_icon("layers"),
            node("digester", "Mesophilic Digester", ShapeKind::Tank, "#c08457", (300.0, 60.0, 130.0, 180.0), "2,500 m³, 37 °C, SRT 20 d")
                .with_description("Continuously mixed with external heat exchanger"),
            node("gas-holder", "Gas Holder", ShapeKind::Ellipse, "#fde68a", (480.0, 40.0, 120.0, 70.0), "Double-membrane, 800 m³")
                .with_icon("flame"),
            node("chp", "CHP Engine", ShapeKind::Rectangle, "#fca5a5", (650.0, 40.0, 110.0, 70.0), "400 kWe gas engine"),
            node("dewatering", "Centrifuge", ShapeKind::Circle, "#a8a29e", (490.0, 180.0, 80.0, 80.0), "Cake at 22% dry solids"),
            node("filtrate", "Filtrate Return", ShapeKind::Pipe, "#94a3b8", (650.0, 205.0, 110.0, 30.0), "Returned to plant headworks"),
        ],
        vec![
            Edge::new("sludge-feed", "thickener"),
            Edge::new("thickener", "digester"),
            Edge::new("digester", "gas-holder"),
            Edge::new("gas-holder", "chp"),
            Edge::new("digester", "dewatering"),
            Edge::new("dewatering", "filtrate"),
            Edge::recycle("chp", "digester"),
        ],
    )
}
