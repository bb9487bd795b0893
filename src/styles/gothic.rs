//! Gothic: elongated nave, twin spires, arched window grid, rose window,
//! flying buttresses.

use std::f64::consts::FRAC_PI_2;

use crate::core::script::{py_int, py_range, Material, Primitive, SceneScript, Script, ScriptError};
use crate::schema::building::BuildingSpec;

const ARCH_WIDTH: f64 = 2.0;
const ARCH_HEIGHT: f64 = 6.0;
const SPIRE_RADIUS: f64 = 1.5;
const ROSE_RADIUS: f64 = 3.0;

pub fn generate(spec: &BuildingSpec) -> Result<Script, ScriptError> {
    let width = spec.width;
    let depth = spec.depth * 2.0;
    let height = spec.total_height();
    let spire_height = height * 0.6;

    let mut s = SceneScript::new();

    s.comment("Parameters");
    s.param("width", width);
    s.param("depth", depth);
    s.param("height", height);
    s.param("spire_height", spire_height);

    s.comment("Main cathedral body");
    s.add(
        "main_body",
        "Cathedral_Body",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, height / 2.0]);

    s.comment("Spires with conical tops");
    for (i, x) in [-width / 2.0 + 2.0, width / 2.0 - 2.0].into_iter().enumerate() {
        s.add(
            "spire",
            format!("Spire_{i}"),
            Primitive::Cylinder {
                radius: SPIRE_RADIUS,
                depth: spire_height,
            },
            [x, depth / 3.0, height + spire_height / 2.0],
        );
        s.add(
            "cone",
            format!("Spire_Top_{i}"),
            Primitive::Cone {
                radius1: SPIRE_RADIUS,
                radius2: 0.0,
                depth: spire_height / 3.0,
            },
            [x, depth / 3.0, height + spire_height + spire_height / 6.0],
        );
    }

    s.comment("Pointed arch windows");
    let rows = py_range(py_int(height / 8.0), py_int(height), py_int(height / 4.0));
    for (row, z) in rows.enumerate() {
        let cols = py_range(-py_int(width / 2.0) + 3, py_int(width / 2.0) - 2, 4);
        for (col, x) in cols.enumerate() {
            s.add(
                "window",
                format!("Gothic_Window_{row}_{col}"),
                Primitive::Cube { size: 1.0 },
                [x as f64, depth / 2.0 + 0.1, z as f64],
            )
            .scale([ARCH_WIDTH / 2.0, 0.2, ARCH_HEIGHT / 2.0]);
        }
    }

    s.comment("Rose window");
    s.add(
        "rose_window",
        "Rose_Window",
        Primitive::Cylinder {
            radius: ROSE_RADIUS,
            depth: 0.3,
        },
        [0.0, -depth / 2.0 - 0.2, height * 0.7],
    )
    .rotate([FRAC_PI_2, 0.0, 0.0]);

    s.comment("Flying buttresses");
    let levels = py_range(py_int(height / 4.0), py_int(height), py_int(height / 3.0));
    for (level, z) in levels.enumerate() {
        for (side, label) in [(-1.0, "L"), (1.0, "R")] {
            s.add(
                "buttress",
                format!("Buttress_{level}_{label}"),
                Primitive::Cube { size: 1.0 },
                [side * (width / 2.0 + 2.0), 0.0, z as f64],
            )
            .scale([0.5, depth / 3.0, 1.0])
            .rotate([0.0, 0.0, side * 0.3]);
        }
    }

    s.comment("Materials");
    s.material(
        Material::new("stone_mat", "Gothic_Stone", [0.6, 0.55, 0.5])
            .roughness(0.9)
            .object("Cathedral_Body")
            .category(&["Spire", "Buttress"]),
    );
    s.material(
        Material::new("stained_glass_mat", "Stained_Glass", [0.8, 0.3, 0.4])
            .transmission(0.9)
            .category(&["Window"]),
    );

    s.comment("Lighting");
    s.sun([20.0, -20.0, 30.0], 2.5);

    s.comment("Camera");
    s.camera(
        [width * 1.8, -depth * 1.2, height * 0.8],
        [1.15, 0.0, 0.6],
    );

    s.summary("Gothic cathedral generated");
    s.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::Style;
    use crate::styles::spec;

    #[test]
    fn derived_dimensions() {
        let script = generate(&spec(Style::Gothic)).unwrap();
        let text = script.text();
        assert!(text.contains("depth = 20\n"));
        assert!(text.contains("height = 15\n"));
        assert!(text.contains("spire_height = 9\n"));
    }

    #[test]
    fn two_spire_cap_pairs() {
        let script = generate(&spec(Style::Gothic)).unwrap();
        let names: Vec<&str> = script
            .object_names()
            .filter(|n| n.starts_with("Spire_"))
            .collect();
        assert_eq!(names, vec!["Spire_0", "Spire_Top_0", "Spire_1", "Spire_Top_1"]);
        assert_eq!(script.text().matches("primitive_cone_add(").count(), 2);
    }

    #[test]
    fn window_grid_and_rose_window() {
        let script = generate(&spec(Style::Gothic)).unwrap();
        // height 15: rows range(1, 15, 3) -> 5; width 10: cols range(-2, 3, 4) -> 2.
        assert_eq!(script.count_objects("Gothic_Window_"), 10);
        assert_eq!(script.count_objects("Rose_Window"), 1);
        assert_eq!(script.material_of("Rose_Window"), Some("Stained_Glass"));
        assert!(script.text().contains("rose_window.rotation_euler = (1.5708, 0, 0)"));
    }

    #[test]
    fn buttresses_on_both_sides() {
        let script = generate(&spec(Style::Gothic)).unwrap();
        // range(3, 15, 5) -> 3 levels.
        assert_eq!(script.count_objects("Buttress_"), 6);
        assert_eq!(script.material_of("Buttress_2_R"), Some("Gothic_Stone"));
    }
}
