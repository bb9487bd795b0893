//! Warehouse: long low shed, split roof, loading docks, clerestory windows,
//! rooftop vents.

use crate::core::script::{py_int, py_range, Material, Primitive, SceneScript, Script, ScriptError};
use crate::schema::building::BuildingSpec;

const ROOF_TILT: f64 = 0.3;

pub fn generate(spec: &BuildingSpec) -> Result<Script, ScriptError> {
    let width = spec.width * 1.5;
    let depth = spec.depth * 2.0;
    let height = spec.floor_height * 2.0;
    let door_width = width / 3.0;
    let door_height = height * 0.7;
    let docks = [-width / 3.0, 0.0, width / 3.0];

    let mut s = SceneScript::new();

    s.comment("Parameters");
    s.param("width", width);
    s.param("depth", depth);
    s.param("height", height);
    s.param("door_width", door_width);
    s.param("door_height", door_height);

    s.comment("Main warehouse body");
    s.add(
        "warehouse",
        "Warehouse_Main",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, height / 2.0]);

    s.comment("Sloped roof sections");
    for (i, (x, tilt)) in [(-width / 4.0, ROOF_TILT), (width / 4.0, -ROOF_TILT)]
        .into_iter()
        .enumerate()
    {
        s.add(
            "roof",
            format!("Roof_Section_{}", i + 1),
            Primitive::Cube { size: 2.0 },
            [x, 0.0, height + 0.8],
        )
        .scale([width / 4.0, depth / 2.0 + 0.3, 0.2])
        .rotate([0.0, tilt, 0.0]);
    }

    s.comment("Garage doors");
    for (i, x) in docks.into_iter().enumerate() {
        s.add(
            "door",
            format!("Garage_Door_{i}"),
            Primitive::Cube { size: 1.0 },
            [x, -depth / 2.0 - 0.1, door_height / 2.0],
        )
        .scale([door_width / 2.0 - 0.2, 0.15, door_height / 2.0]);
        s.add(
            "frame",
            format!("Door_Frame_{i}"),
            Primitive::Cube { size: 1.0 },
            [x, -depth / 2.0 - 0.2, door_height / 2.0],
        )
        .scale([door_width / 2.0, 0.2, door_height / 2.0 + 0.2]);
    }

    s.comment("Loading dock platforms");
    for (i, x) in docks.into_iter().enumerate() {
        s.add(
            "platform",
            format!("Loading_Platform_{i}"),
            Primitive::Cube { size: 1.0 },
            [x, -depth / 2.0 - 2.0, 0.6],
        )
        .scale([door_width / 2.0, 1.0, 0.6]);
    }

    s.comment("High windows near the roofline");
    let xs = py_range(-py_int(width / 2.0) + 2, py_int(width / 2.0) - 1, 4);
    for (i, x) in xs.enumerate() {
        s.add(
            "window",
            format!("High_Window_{i}"),
            Primitive::Cube { size: 1.0 },
            [x as f64, depth / 2.0 + 0.1, height - 1.5],
        )
        .scale([1.0, 0.15, 0.8]);
    }

    s.comment("Roof ventilation units");
    for (i, x) in [-width / 4.0, width / 4.0].into_iter().enumerate() {
        s.add(
            "vent",
            format!("Vent_Unit_{i}"),
            Primitive::Cube { size: 1.0 },
            [x, 0.0, height + 1.5],
        )
        .scale([1.0, 1.0, 0.5]);
    }

    s.comment("Materials");
    s.material(
        Material::new("metal_mat", "Metal_Siding", [0.7, 0.7, 0.7])
            .metallic(0.8)
            .roughness(0.4)
            .object("Warehouse_Main"),
    );
    s.material(
        Material::new("roof_mat", "Metal_Roof", [0.5, 0.5, 0.5])
            .metallic(0.9)
            .category(&["Roof_Section", "Vent_Unit"]),
    );
    s.material(Material::new("door_mat", "Garage_Door", [0.9, 0.6, 0.2]).category(&["Garage_Door"]));
    s.material(Material::new("concrete_mat", "Concrete", [0.6, 0.6, 0.6]).category(&["Platform", "Frame"]));
    s.material(
        Material::new("window_mat", "Wired_Glass", [0.65, 0.75, 0.85])
            .transmission(0.6)
            .category(&["High_Window"]),
    );

    s.comment("Lighting");
    s.sun([15.0, -20.0, 25.0], 2.5);

    s.comment("Camera");
    s.camera(
        [width * 1.2, -depth * 1.5, height * 1.2],
        [1.1, 0.0, 0.5],
    );

    s.summary("Industrial warehouse generated with loading docks");
    s.finish()
}
