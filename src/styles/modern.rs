//! Modern: twisted tower wrapped in glass panels, balconies above ground.

use crate::core::script::{format_number, Material, Primitive, SceneScript, Script, ScriptError};
use crate::schema::building::BuildingSpec;

const TWIST_ANGLE: f64 = 0.3;

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

    s.comment("Parameters");
    s.param("floors", f64::from(floors));
    s.param("floor_height", floor_height);
    s.param("width", width);
    s.param("depth", depth);
    s.param("total_height", total_height);

    s.comment("Main structure with twist");
    s.add(
        "building",
        "Modern_Building",
        Primitive::Cube { size: 2.0 },
        [0.0, 0.0, total_height / 2.0],
    )
    .scale([width / 2.0, depth / 2.0, total_height / 2.0]);
    s.twist("building", TWIST_ANGLE);

    s.comment("Glass facade");
    let panel = [width / 2.0 - 0.5, 0.1, floor_height / 2.0 - 0.2];
    for floor in 0..floors {
        let z = f64::from(floor) * floor_height + floor_height / 2.0;
        s.add(
            "panel",
            format!("Glass_Front_F{floor}"),
            Primitive::Cube { size: 1.0 },
            [0.0, depth / 2.0 + 0.2, z],
        )
        .scale(panel);
        s.add(
            "panel",
            format!("Glass_Back_F{floor}"),
            Primitive::Cube { size: 1.0 },
            [0.0, -depth / 2.0 - 0.2, z],
        )
        .scale(panel);
    }

    s.comment("Balconies");
    for floor in 1..floors {
        let z = f64::from(floor) * floor_height;
        s.add(
            "balcony",
            format!("Balcony_F{floor}"),
            Primitive::Cube { size: 1.0 },
            [0.0, depth / 2.0 + 1.0, z],
        )
        .scale([width / 2.0 - 1.0, 0.8, 0.1]);
    }

    s.comment("Materials");
    s.material(
        Material::new("building_mat", "Modern_Concrete", [0.9, 0.9, 0.9])
            .roughness(0.3)
            .object("Modern_Building")
            .category(&["Balcony"]),
    );
    s.material(
        Material::new("glass_mat", "Modern_Glass", [0.6, 0.8, 1.0])
            .transmission(0.95)
            .roughness(0.1)
            .category(&["Glass"]),
    );

    s.comment("Lighting");
    s.sun([15.0, -15.0, 25.0], 3.0);

    s.comment("Camera");
    s.camera(
        [width * 2.0, -depth * 2.0, total_height * 0.6],
        [1.2, 0.0, 0.785],
    );

    s.summary(&format!(
        "Modern building created: {floors} floors, {}m tall",
        format_number(total_height)
    ));
    s.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::style::Style;
    use crate::styles::spec;

    #[test]
    fn twist_applied_to_main_volume() {
        let script = generate(&spec(Style::Modern)).unwrap();
        let text = script.text();
        assert!(text.contains("bpy.ops.object.modifier_add(type='SIMPLE_DEFORM')"));
        assert!(text.contains("building.modifiers[\"SimpleDeform\"].deform_method = 'TWIST'"));
        assert!(text.contains("building.modifiers[\"SimpleDeform\"].angle = 0.3"));
    }

    #[test]
    fn glass_front_and_back_every_floor() {
        let script = generate(&spec(Style::Modern)).unwrap();
        assert_eq!(script.count_objects("Glass_Front_F"), 5);
        assert_eq!(script.count_objects("Glass_Back_F"), 5);
        assert_eq!(script.material_of("Glass_Back_F4"), Some("Modern_Glass"));
    }

    #[test]
    fn balconies_skip_ground_floor() {
        let script = generate(&spec(Style::Modern)).unwrap();
        let balconies: Vec<&str> = script
            .object_names()
            .filter(|n| n.starts_with("Balcony_"))
            .collect();
        assert_eq!(
            balconies,
            vec!["Balcony_F1", "Balcony_F2", "Balcony_F3", "Balcony_F4"]
        );
        assert_eq!(script.material_of("Balcony_F1"), Some("Modern_Concrete"));
    }
}
