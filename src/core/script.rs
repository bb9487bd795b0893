//! Scene script writer — statement emission, object naming, material coverage.
//!
//! A [`SceneScript`] is created fresh for every generator call. It owns the
//! output buffer and the set of object names emitted so far, so there is no
//! state shared between invocations.

use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("duplicate object name: {0}")]
    DuplicateName(String),
    #[error("object '{name}' receives {count} material assignments, expected exactly one")]
    MaterialCoverage { name: String, count: usize },
    #[error("expected exactly one {what}, found {count}")]
    SceneSetup { what: &'static str, count: usize },
}

/// Format a number for the emitted script.
///
/// Values are rounded to four decimals so float noise (`10.0 * 0.6`) never
/// reaches the output; integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').to_string()
}

fn format_vec3(v: [f64; 3]) -> String {
    format!(
        "({}, {}, {})",
        format_number(v[0]),
        format_number(v[1]),
        format_number(v[2])
    )
}

/// `int(x)` as the target script would evaluate it: truncation toward zero.
pub fn py_int(x: f64) -> i64 {
    x.trunc() as i64
}

/// Values of `range(start, stop, step)`. A step below 1 is clamped to 1.
pub fn py_range(start: i64, stop: i64, step: i64) -> impl Iterator<Item = i64> {
    (start..stop.max(start)).step_by(step.max(1) as usize)
}

/// Mesh primitive used to create an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cube { size: f64 },
    Cylinder { radius: f64, depth: f64 },
    Cone { radius1: f64, radius2: f64, depth: f64 },
}

impl Primitive {
    fn call(&self, location: [f64; 3]) -> String {
        let loc = format_vec3(location);
        match *self {
            Self::Cube { size } => format!(
                "bpy.ops.mesh.primitive_cube_add(size={}, location={loc})",
                format_number(size)
            ),
            Self::Cylinder { radius, depth } => format!(
                "bpy.ops.mesh.primitive_cylinder_add(radius={}, depth={}, location={loc})",
                format_number(radius),
                format_number(depth)
            ),
            Self::Cone {
                radius1,
                radius2,
                depth,
            } => format!(
                "bpy.ops.mesh.primitive_cone_add(radius1={}, radius2={}, depth={}, location={loc})",
                format_number(radius1),
                format_number(radius2),
                format_number(depth)
            ),
        }
    }
}

/// Which objects a material is appended to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// The one object with exactly this name.
    Object(&'static str),
    /// Every object whose name contains any of these substrings.
    Category(&'static [&'static str]),
}

/// A Principled BSDF material and the objects it is assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub var: &'static str,
    pub name: &'static str,
    pub color: [f64; 3],
    pub roughness: Option<f64>,
    pub metallic: Option<f64>,
    pub transmission: Option<f64>,
    pub targets: Vec<Target>,
}

impl Material {
    pub fn new(var: &'static str, name: &'static str, color: [f64; 3]) -> Self {
        Self {
            var,
            name,
            color,
            roughness: None,
            metallic: None,
            transmission: None,
            targets: Vec::new(),
        }
    }

    pub fn roughness(mut self, value: f64) -> Self {
        self.roughness = Some(value);
        self
    }

    pub fn metallic(mut self, value: f64) -> Self {
        self.metallic = Some(value);
        self
    }

    pub fn transmission(mut self, value: f64) -> Self {
        self.transmission = Some(value);
        self
    }

    pub fn object(mut self, name: &'static str) -> Self {
        self.targets.push(Target::Object(name));
        self
    }

    pub fn category(mut self, keys: &'static [&'static str]) -> Self {
        self.targets.push(Target::Category(keys));
        self
    }

    fn category_keys(&self) -> Vec<&'static str> {
        self.targets
            .iter()
            .filter_map(|t| match t {
                Target::Category(keys) => Some(*keys),
                Target::Object(_) => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    /// How many assignment statements this material applies to `object`.
    /// All category keys share one loop, so they count once together.
    fn assignments_for(&self, object: &str) -> usize {
        let direct = self
            .targets
            .iter()
            .filter(|t| matches!(t, Target::Object(name) if *name == object))
            .count();
        let by_category = self.category_keys().iter().any(|k| object.contains(*k));
        direct + usize::from(by_category)
    }
}

/// An object created by the script, with the material it ends up with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptObject {
    pub name: String,
    pub material: &'static str,
}

/// A finished procedural script.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    text: String,
    objects: Vec<ScriptObject>,
}

impl Script {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Created objects in emission order.
    pub fn objects(&self) -> &[ScriptObject] {
        &self.objects
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.name.as_str())
    }

    /// Number of objects whose name contains `fragment`.
    pub fn count_objects(&self, fragment: &str) -> usize {
        self.objects
            .iter()
            .filter(|o| o.name.contains(fragment))
            .count()
    }

    pub fn material_of(&self, name: &str) -> Option<&'static str> {
        self.objects
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.material)
    }
}

/// Builder for one script. Emission order is the call order.
#[derive(Debug)]
pub struct SceneScript {
    out: String,
    names: FxHashSet<String>,
    objects: Vec<String>,
    materials: Vec<Material>,
    duplicate: Option<String>,
    lights: usize,
    cameras: usize,
}

impl SceneScript {
    /// Start a script: imports followed by the scene reset block.
    pub fn new() -> Self {
        let mut script = Self {
            out: String::new(),
            names: FxHashSet::default(),
            objects: Vec::new(),
            materials: Vec::new(),
            duplicate: None,
            lights: 0,
            cameras: 0,
        };
        script.line("import bpy");
        script.comment("Clear existing objects");
        script.line("bpy.ops.object.select_all(action='SELECT')");
        script.line("bpy.ops.object.delete(use_global=False, confirm=False)");
        script.line("bpy.ops.outliner.orphans_purge()");
        script
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    /// Blank line followed by `# text`.
    pub fn comment(&mut self, text: &str) {
        self.out.push('\n');
        self.line(format!("# {text}"));
    }

    /// Echo a parameter as `name = value`.
    pub fn param(&mut self, name: &str, value: f64) {
        self.line(format!("{name} = {}", format_number(value)));
    }

    /// Create a named object. The returned handle adds transforms to it.
    pub fn add(
        &mut self,
        var: &'static str,
        name: impl Into<String>,
        primitive: Primitive,
        location: [f64; 3],
    ) -> ObjectLines<'_> {
        let name = name.into();
        self.line(primitive.call(location));
        self.line(format!("{var} = bpy.context.active_object"));
        self.line(format!("{var}.name = \"{name}\""));
        if !self.names.insert(name.clone()) && self.duplicate.is_none() {
            self.duplicate = Some(name.clone());
        }
        self.objects.push(name);
        ObjectLines { script: self, var }
    }

    /// Hollow `target` by subtracting a temporary box. The cutter is removed
    /// again and is not a scene object.
    pub fn subtract_box(&mut self, target: &str, location: [f64; 3], scale: [f64; 3]) {
        self.line(Primitive::Cube { size: 2.0 }.call(location));
        self.line("cutter = bpy.context.active_object");
        self.line(format!("cutter.scale = {}", format_vec3(scale)));
        self.line(format!(
            "bool_mod = {target}.modifiers.new(name=\"Boolean\", type='BOOLEAN')"
        ));
        self.line("bool_mod.operation = 'DIFFERENCE'");
        self.line("bool_mod.object = cutter");
        self.line(format!("bpy.context.view_layer.objects.active = {target}"));
        self.line("bpy.ops.object.modifier_apply(modifier=\"Boolean\")");
        self.line("bpy.data.objects.remove(cutter, do_unlink=True)");
    }

    /// Add a twist deform to the active object.
    pub fn twist(&mut self, var: &str, angle: f64) {
        self.line("bpy.ops.object.modifier_add(type='SIMPLE_DEFORM')");
        self.line(format!(
            "{var}.modifiers[\"SimpleDeform\"].deform_method = 'TWIST'"
        ));
        self.line(format!(
            "{var}.modifiers[\"SimpleDeform\"].angle = {}",
            format_number(angle)
        ));
    }

    /// Define a material and emit its assignments.
    pub fn material(&mut self, material: Material) {
        let var = material.var;
        self.line(format!(
            "{var} = bpy.data.materials.new(name=\"{}\")",
            material.name
        ));
        self.line(format!("{var}.use_nodes = True"));
        self.line(format!(
            "bsdf = {var}.node_tree.nodes[\"Principled BSDF\"]"
        ));
        let [r, g, b] = material.color;
        self.line(format!(
            "bsdf.inputs['Base Color'].default_value = ({}, {}, {}, 1.0)",
            format_number(r),
            format_number(g),
            format_number(b)
        ));
        let inputs = [
            ("Metallic", material.metallic),
            ("Roughness", material.roughness),
            ("Transmission", material.transmission),
        ];
        for (input, value) in inputs {
            if let Some(value) = value {
                self.line(format!(
                    "bsdf.inputs['{input}'].default_value = {}",
                    format_number(value)
                ));
            }
        }

        for target in &material.targets {
            if let Target::Object(name) = target {
                self.line(format!(
                    "bpy.data.objects[\"{name}\"].data.materials.append({var})"
                ));
            }
        }
        let keys = material.category_keys();
        if !keys.is_empty() {
            let condition = keys
                .iter()
                .map(|k| format!("\"{k}\" in obj.name"))
                .collect::<Vec<_>>()
                .join(" or ");
            self.line("for obj in bpy.data.objects:");
            self.line(format!("    if {condition}:"));
            self.line(format!("        obj.data.materials.append({var})"));
        }
        self.out.push('\n');
        self.materials.push(material);
    }

    /// The single sun light.
    pub fn sun(&mut self, location: [f64; 3], energy: f64) {
        self.lights += 1;
        self.line(format!(
            "bpy.ops.object.light_add(type='SUN', location={})",
            format_vec3(location)
        ));
        self.line("sun = bpy.context.active_object");
        self.line(format!("sun.data.energy = {}", format_number(energy)));
    }

    /// The single camera, made the active scene camera.
    pub fn camera(&mut self, location: [f64; 3], rotation: [f64; 3]) {
        self.cameras += 1;
        self.line(format!(
            "bpy.ops.object.camera_add(location={})",
            format_vec3(location)
        ));
        self.line("camera = bpy.context.active_object");
        self.line(format!("camera.rotation_euler = {}", format_vec3(rotation)));
        self.line("bpy.context.scene.camera = camera");
    }

    /// Closing `print(...)` line.
    pub fn summary(&mut self, text: &str) {
        self.out.push('\n');
        let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
        self.line(format!("print(\"{escaped}\")"));
    }

    /// Check naming and material invariants and produce the script.
    pub fn finish(self) -> Result<Script, ScriptError> {
        if let Some(name) = self.duplicate {
            return Err(ScriptError::DuplicateName(name));
        }
        if self.lights != 1 {
            return Err(ScriptError::SceneSetup {
                what: "light",
                count: self.lights,
            });
        }
        if self.cameras != 1 {
            return Err(ScriptError::SceneSetup {
                what: "camera",
                count: self.cameras,
            });
        }

        let mut objects = Vec::with_capacity(self.objects.len());
        for name in self.objects {
            let mut count = 0;
            let mut assigned = None;
            for material in &self.materials {
                let n = material.assignments_for(&name);
                if n > 0 {
                    assigned = Some(material.name);
                }
                count += n;
            }
            match (count, assigned) {
                (1, Some(material)) => objects.push(ScriptObject { name, material }),
                _ => return Err(ScriptError::MaterialCoverage { name, count }),
            }
        }

        Ok(Script {
            text: self.out,
            objects,
        })
    }
}

impl Default for SceneScript {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform lines for the object just created by [`SceneScript::add`].
pub struct ObjectLines<'a> {
    script: &'a mut SceneScript,
    var: &'static str,
}

impl ObjectLines<'_> {
    pub fn scale(self, scale: [f64; 3]) -> Self {
        let line = format!("{}.scale = {}", self.var, format_vec3(scale));
        self.script.line(line);
        self
    }

    pub fn rotate(self, rotation: [f64; 3]) -> Self {
        let line = format!("{}.rotation_euler = {}", self.var, format_vec3(rotation));
        self.script.line(line);
        self
    }
}
