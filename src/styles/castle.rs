//! Castle: hollow curtain wall, four corner towers with battlements,
//! crenellated wall tops, gate.

use crate::core::script::{py_int, py_range, Material, Primitive, SceneScript, Script, ScriptError};
use crate::schema::building::BuildingSpec;

const WALL_THICKNESS: f64 = 1.0;
const TOWER_RADIUS: f64 = 2.0;
const BATTLEMENT_RING: f64 = 2.2;
const BATTLEMENT_SPACING: i64 = 2;

pub fn generate(spec: &BuildingSpec) -> Result<Script, ScriptError> {
    let width = spec.width;
    let depth = spec.depth;
    let wall_height = spec.floor_height * 3.0;
    let tower_height = spec.floor_height * 5.0;

    let mut s = SceneScript::new();

    s.comment("Parameters");
    s.param("width", width);
    s.param("depth", depth);
    s.param("wall_height", wall_height);
    s.param("tower_height", tower_height);
    s.param("wall_thickness", WALL_THICKNESS);

    s.comment("Main castle walls");
    s.add(
        "walls",
        "Castle_Walls",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, wall_height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, wall_height / 2.0]);

    s.comment("Hollow out the interior");
    s.subtract_box(
        "walls",
        [0.0, 0.0, wall_height / 2.0],
        [
            width / 2.0 - WALL_THICKNESS,
            depth / 2.0 - WALL_THICKNESS,
            wall_height / 2.0 + 1.0,
        ],
    );

    s.comment("Corner towers");
    let corners = [
        (-width / 2.0, -depth / 2.0),
        (width / 2.0, -depth / 2.0),
        (-width / 2.0, depth / 2.0),
        (width / 2.0, depth / 2.0),
    ];
    for (i, (x, y)) in corners.into_iter().enumerate() {
        s.add(
            "tower",
            format!("Tower_{i}"),
            Primitive::Cylinder {
                radius: TOWER_RADIUS,
                depth: tower_height,
            },
            [x, y, tower_height / 2.0],
        );
        for angle in (0..360).step_by(45) {
            let rad = f64::from(angle).to_radians();
            s.add(
                "battlement",
                format!("Tower_Battlement_{i}_{angle}"),
                Primitive::Cube { size: 0.5 },
                [
                    x + BATTLEMENT_RING * rad.cos(),
                    y + BATTLEMENT_RING * rad.sin(),
                    tower_height + 0.3,
                ],
            )
            .scale([0.4, 0.4, 0.6]);
        }
    }

    s.comment("Wall battlements");
    let along_x = py_range(-py_int(width / 2.0) + 2, py_int(width / 2.0) - 1, BATTLEMENT_SPACING);
    for (j, x) in along_x.enumerate() {
        for (y, edge) in [(-depth / 2.0, "S"), (depth / 2.0, "N")] {
            s.add(
                "batt",
                format!("Wall_Battlement_X_{j}_{edge}"),
                Primitive::Cube { size: 0.8 },
                [x as f64, y, wall_height + 0.4],
            )
            .scale([0.6, WALL_THICKNESS / 2.0, 0.8]);
        }
    }
    let along_y = py_range(-py_int(depth / 2.0) + 2, py_int(depth / 2.0) - 1, BATTLEMENT_SPACING);
    for (j, y) in along_y.enumerate() {
        for (x, edge) in [(-width / 2.0, "W"), (width / 2.0, "E")] {
            s.add(
                "batt",
                format!("Wall_Battlement_Y_{j}_{edge}"),
                Primitive::Cube { size: 0.8 },
                [x, y as f64, wall_height + 0.4],
            )
            .scale([WALL_THICKNESS / 2.0, 0.6, 0.8]);
        }
    }

    s.comment("Gate");
    s.add(
        "gate",
        "Castle_Gate",
        Primitive::Cube { size: 1.0 },
        [0.0, -depth / 2.0, wall_height / 3.0],
    )
    .scale([2.5, WALL_THICKNESS + 0.2, wall_height / 3.0]);

    s.comment("Materials");
    s.material(
        Material::new("stone_mat", "Castle_Stone", [0.5, 0.5, 0.45])
            .roughness(0.95)
            .object("Castle_Walls")
            .category(&["Tower", "Battlement"]),
    );
    s.material(Material::new("gate_mat", "Wood_Gate", [0.3, 0.2, 0.1]).object("Castle_Gate"));

    s.comment("Lighting");
    s.sun([25.0, -25.0, 35.0], 2.5);

    s.comment("Camera");
    s.camera(
        [width * 1.5, -depth * 1.8, tower_height * 0.7],
        [1.2, 0.0, 0.5],
    );

    s.summary("Castle generated with towers and battlements");
    s.finish()
}
