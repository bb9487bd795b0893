//! Standard: box volume, windows on all four sides, entrance, flat roof.

use crate::core::script::{
    format_number, py_int, py_range, Material, Primitive, SceneScript, Script, ScriptError,
};
use crate::schema::building::BuildingSpec;

const WINDOW_WIDTH: f64 = 1.5;
const WINDOW_HEIGHT: f64 = 1.8;
const WINDOW_SPACING: f64 = 2.5;

pub fn generate(spec: &BuildingSpec) -> Result<Script, ScriptError> {
    let BuildingSpec {
        floors,
        width,
        depth,
        floor_height,
        ..
    } = *spec;
    let total_height = spec.total_height();

    let mut s = SceneScript::new();

    s.comment("Building parameters");
    s.param("floors", f64::from(floors));
    s.param("floor_height", floor_height);
    s.param("width", width);
    s.param("depth", depth);
    s.param("total_height", total_height);

    s.comment("Main building structure");
    s.add(
        "building",
        "Building_Main",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, total_height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, total_height / 2.0]);

    s.comment("Windows for each floor");
    let step = py_int(WINDOW_SPACING);
    let xs: Vec<i64> = py_range(-py_int(width / 2.0) + 2, py_int(width / 2.0) - 1, step).collect();
    let ys: Vec<i64> = py_range(-py_int(depth / 2.0) + 2, py_int(depth / 2.0) - 1, step).collect();
    let facade = [WINDOW_WIDTH / 2.0, 0.2, WINDOW_HEIGHT / 2.0];
    let side = [0.2, WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0];

    for floor in 0..floors {
        let z = f64::from(floor) * floor_height + floor_height / 2.0;
        for (i, &x) in xs.iter().enumerate() {
            let x = x as f64;
            s.add(
                "window",
                format!("Window_Front_F{floor}_{i}"),
                Primitive::Cube { size: 1.0 },
                [x, depth / 2.0 + 0.1, z],
            )
            .scale(facade);
            s.add(
                "window",
                format!("Window_Back_F{floor}_{i}"),
                Primitive::Cube { size: 1.0 },
                [x, -depth / 2.0 - 0.1, z],
            )
            .scale(facade);
        }
        for (i, &y) in ys.iter().enumerate() {
            let y = y as f64;
            s.add(
                "window",
                format!("Window_Left_F{floor}_{i}"),
                Primitive::Cube { size: 1.0 },
                [-width / 2.0 - 0.1, y, z],
            )
            .scale(side);
            s.add(
                "window",
                format!("Window_Right_F{floor}_{i}"),
                Primitive::Cube { size: 1.0 },
                [width / 2.0 + 0.1, y, z],
            )
            .scale(side);
        }
    }

    s.comment("Entrance");
    s.add(
        "entrance",
        "Entrance",
        Primitive::Cube { size: 1.0 },
        [0.0, depth / 2.0 + 0.2, 1.5],
    )
    .scale([2.0, 0.3, 1.5]);

    s.comment("Roof");
    s.add(
        "roof",
        "Roof",
        Primitive::Cube { size: 1.0 },
        [0.0, 0.0, total_height + 0.3],
    )
    .scale([width / 2.0 + 0.5, depth / 2.0 + 0.5, 0.3]);

    s.comment("Materials");
    s.material(Material::new("building_mat", "Building_Material", [0.8, 0.8, 0.7]).object("Building_Main"));
    s.material(Material::new("window_mat", "Window_Material", [0.5, 0.7, 0.9]).category(&["Window"]));
    s.material(Material::new("entrance_mat", "Entrance_Material", [0.3, 0.2, 0.1]).object("Entrance"));
    s.material(Material::new("roof_mat", "Roof_Material", [0.4, 0.3, 0.3]).object("Roof"));

    s.comment("Lighting");
    s.sun([10.0, 10.0, 20.0], 2.0);

    s.comment("Camera");
    s.camera(
        [width * 1.5, -depth * 1.5, total_height * 0.7],
        [1.1, 0.0, 0.785],
    );

    s.summary(&format!(
        "Building generated: {floors} floors, {}x{}m, {}m tall",
        format_number(width),
        format_number(depth),
        format_number(total_height)
    ));
    s.finish()
}
