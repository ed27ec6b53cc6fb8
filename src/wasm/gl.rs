//! WebGL2 plumbing shared by the demos: shader compilation, program
//! linking, and attribute buffer upload.

use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader};

pub fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(kind)
        .ok_or("unable to create shader object")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader compile error".to_string());
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&info))
    }
}

pub fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, JsValue> {
    let vert = compile_shader(gl, GL::VERTEX_SHADER, vert_src)?;
    let frag = compile_shader(gl, GL::FRAGMENT_SHADER, frag_src)?;

    let program = gl.create_program().ok_or("unable to create program")?;
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);

    // Shaders are owned by the program once linked.
    gl.delete_shader(Some(&vert));
    gl.delete_shader(Some(&frag));

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let info = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program link error".to_string());
        gl.delete_program(Some(&program));
        Err(JsValue::from_str(&info))
    }
}

/// Upload `data` into a fresh ARRAY_BUFFER and wire it to the named
/// attribute with the given component count.
pub fn upload_attribute(
    gl: &GL,
    program: &WebGlProgram,
    name: &str,
    data: &[f32],
    components: i32,
) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl.create_buffer().ok_or("unable to create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(data),
        GL::STATIC_DRAW,
    );

    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        gl.delete_buffer(Some(&buffer));
        return Err(JsValue::from_str(&format!("attribute {name} not found")));
    }
    gl.enable_vertex_attrib_array(location as u32);
    gl.vertex_attrib_pointer_with_i32(location as u32, components, GL::FLOAT, false, 0, 0);

    Ok(buffer)
}

/// Resize the drawing buffer to the window and update the viewport.
pub fn fit_canvas(gl: &GL, canvas: &web_sys::HtmlCanvasElement) {
    let window = web_sys::window().expect("no window");
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    gl.viewport(0, 0, w as i32, h as i32);
}

/// Device pixel ratio clamped to 2, the cap the original demos use.
pub fn pixel_ratio() -> f32 {
    let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    ratio.min(2.0) as f32
}
