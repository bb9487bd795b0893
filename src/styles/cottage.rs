//! Cottage: small single-storey body under a pitched roof.

use crate::core::script::{Material, Primitive, SceneScript, Script, ScriptError};
use crate::schema::building::BuildingSpec;

const ROOF_PITCH_DEG: f64 = 30.0;

pub fn generate(spec: &BuildingSpec) -> Result<Script, ScriptError> {
    let width = spec.width * 0.6;
    let depth = spec.depth * 0.6;
    let height = spec.floor_height * 1.5;

    let mut s = SceneScript::new();

    s.comment("Parameters");
    s.param("width", width);
    s.param("depth", depth);
    s.param("height", height);

    s.comment("Main cottage body");
    s.add(
        "cottage",
        "Cottage_Main",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, height / 2.0]);

    s.comment("Sloped roof");
    let roof_scale = [width / 2.0 + 0.5, depth / 2.0 + 0.5, 1.0];
    for (var, name, pitch) in [
        ("roof", "Cottage_Roof_Left", ROOF_PITCH_DEG),
        ("roof2", "Cottage_Roof_Right", -ROOF_PITCH_DEG),
    ] {
        s.add(var, name, Primitive::Cube { size: 2.0 }, [0.0, 0.0, height + 1.0])
            .scale(roof_scale)
            .rotate([0.0, pitch.to_radians(), 0.0]);
    }

    s.comment("Chimney");
    s.add(
        "chimney",
        "Chimney",
        Primitive::Cube { size: 1.0 },
        [width / 3.0, 0.0, height + 2.5],
    )
    .scale([0.6, 0.6, 2.0]);

    s.comment("Windows");
    let windows = [
        [-width / 3.0, depth / 2.0 + 0.1, height / 2.0],
        [width / 3.0, depth / 2.0 + 0.1, height / 2.0],
        [-width / 3.0, -depth / 2.0 - 0.1, height / 2.0],
    ];
    for (i, location) in windows.into_iter().enumerate() {
        s.add("window", format!("Window_{i}"), Primitive::Cube { size: 1.0 }, location)
            .scale([0.7, 0.15, 0.9]);
    }

    s.comment("Door");
    s.add(
        "door",
        "Door",
        Primitive::Cube { size: 1.0 },
        [width / 3.0, -depth / 2.0 - 0.1, height / 3.0],
    )
    .scale([0.8, 0.15, height / 3.0]);

    s.comment("Porch");
    s.add(
        "porch",
        "Porch",
        Primitive::Cube { size: 1.0 },
        [width / 3.0, -depth / 2.0 - 1.0, 0.1],
    )
    .scale([1.2, 0.8, 0.1]);

    s.comment("Materials");
    s.material(Material::new("cottage_mat", "Cottage_Walls", [0.9, 0.85, 0.7]).object("Cottage_Main"));
    s.material(Material::new("roof_mat", "Cottage_Roof", [0.6, 0.3, 0.2]).category(&["Cottage_Roof"]));
    s.material(Material::new("chimney_mat", "Brick", [0.7, 0.3, 0.2]).object("Chimney"));
    s.material(Material::new("window_mat", "Window_Glass", [0.7, 0.8, 0.9]).category(&["Window"]));
    s.material(
        Material::new("door_mat", "Wood_Door", [0.4, 0.25, 0.15])
            .object("Door")
            .object("Porch"),
    );

    s.comment("Lighting");
    s.sun([10.0, -10.0, 15.0], 2.0);

    s.comment("Camera");
    s.camera(
        [width * 2.0, -depth * 2.5, height * 1.5],
        [1.1, 0.0, 0.6],
    );

    s.summary("Cozy cottage generated");
    s.finish()
}
