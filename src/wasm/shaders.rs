//! GLSL ES 300 sources for the demos.

/// Point-sprite vertex stage for the static galaxy: spin is baked into the
/// positions, so the stage only projects and sets a distance-attenuated
/// point size.
pub const POINTS_VERT: &str = r#"#version 300 es
in vec3 a_position;
in vec3 a_color;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;
uniform float u_size;
out vec3 v_color;

void main() {
    vec4 view_pos = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_proj * view_pos;
    gl_PointSize = u_size / -view_pos.z;
    v_color = a_color;
}
"#;

/// Radial-falloff fragment stage shared by both galaxy variants: a sharp
/// disc fading to black toward the sprite edge, composited additively.
pub const POINTS_FRAG: &str = r#"#version 300 es
precision mediump float;
in vec3 v_color;
out vec4 o_color;

void main() {
    float strength = pow(1.0 - distance(gl_PointCoord, vec2(0.5)), 10.0);
    o_color = vec4(v_color * strength, 1.0);
}
"#;

/// Animated galaxy vertex stage: positions arrive on their branch rays, and
/// each frame the stage rotates them by an angle inversely proportional to
/// orbital radius before adding the per-particle random offset.
pub const GALAXY_ANIM_VERT: &str = r#"#version 300 es
in vec3 a_position;
in vec3 a_color;
in float a_scale;
in vec3 a_randomness;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;
uniform float u_time;
uniform float u_speed;
out vec3 v_color;

void main() {
    vec4 model_pos = u_model * vec4(a_position, 1.0);

    float radius = length(model_pos.xz);
    float original_angle = atan(model_pos.x, model_pos.z);
    float offset_angle = (1.0 / radius) * u_time * u_speed;

    model_pos.x = sin(original_angle + offset_angle) * radius;
    model_pos.z = cos(original_angle + offset_angle) * radius;

    model_pos.xyz += a_randomness;

    vec4 view_pos = u_view * model_pos;
    gl_Position = u_proj * view_pos;
    gl_PointSize = a_scale / -view_pos.z;

    v_color = a_color;
}
"#;

/// Flat white-ish squares for the scroll demo's background stars.
pub const STARS_FRAG: &str = r#"#version 300 es
precision mediump float;
in vec3 v_color;
out vec4 o_color;

void main() {
    o_color = vec4(v_color, 1.0);
}
"#;

/// Wireframe line pair for the template cube.
pub const LINES_VERT: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_proj;
uniform mat4 u_view;
uniform mat4 u_model;

void main() {
    gl_Position = u_proj * u_view * u_model * vec4(a_position, 1.0);
}
"#;

pub const LINES_FRAG: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
out vec4 o_color;

void main() {
    o_color = vec4(u_color, 1.0);
}
"#;
