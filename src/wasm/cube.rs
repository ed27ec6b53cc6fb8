//! Template demo: a rotating wireframe cube, the boilerplate scene the
//! other demos grew out of.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, WebGl2RenderingContext as GL};

use crate::math::Mat4;

use super::{gl as glh, shaders};

/// Per-axis rotation speeds, radians per second.
const ROTATION: [f32; 3] = [0.4, 0.3, 0.2];

/// Unit cube edge list: 12 edges, two xyz endpoints each.
pub(super) fn cube_edges(half: f32) -> Vec<f32> {
    let corners: [[f32; 3]; 8] = [
        [-half, -half, -half],
        [half, -half, -half],
        [half, half, -half],
        [-half, half, -half],
        [-half, -half, half],
        [half, -half, half],
        [half, half, half],
        [-half, half, half],
    ];
    let edges: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0), // back face
        (4, 5), (5, 6), (6, 7), (7, 4), // front face
        (0, 4), (1, 5), (2, 6), (3, 7), // connectors
    ];
    let mut out = Vec::with_capacity(edges.len() * 6);
    for (a, b) in edges {
        out.extend_from_slice(&corners[a]);
        out.extend_from_slice(&corners[b]);
    }
    out
}

pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;
    gl.clear_color(0.0, 0.0, 0.0, 1.0);

    let program = glh::link_program(&gl, shaders::LINES_VERT, shaders::LINES_FRAG)?;
    gl.use_program(Some(&program));

    let edges = cube_edges(0.5);
    let vertex_count = (edges.len() / 3) as i32;
    let vao = gl
        .create_vertex_array()
        .ok_or("unable to create vertex array")?;
    gl.bind_vertex_array(Some(&vao));
    let _buffer = glh::upload_attribute(&gl, &program, "a_position", &edges, 3)?;
    gl.bind_vertex_array(None);

    let u_proj = gl.get_uniform_location(&program, "u_proj");
    let u_view = gl.get_uniform_location(&program, "u_view");
    let u_model = gl.get_uniform_location(&program, "u_model");
    let u_color = gl.get_uniform_location(&program, "u_color");
    gl.uniform3f(u_color.as_ref(), 1.0, 0.53, 0.8); // #ff88cc

    glh::fit_canvas(&gl, &canvas);
    let resize_closure = {
        let gl = gl.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            glh::fit_canvas(&gl, &canvas);
        }) as Box<dyn FnMut()>)
    };
    window()
        .unwrap()
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let performance = window().unwrap().performance().unwrap();
    let start_time = performance.now();

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = ((performance.now() - start_time) / 1000.0) as f32;

        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
        let proj = Mat4::perspective(75.0f32.to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::translation(0.0, 0.0, -3.0);
        let model = Mat4::rotation_y(elapsed * ROTATION[0])
            .mul(&Mat4::rotation_x(elapsed * ROTATION[1]))
            .mul(&Mat4::rotation_z(elapsed * ROTATION[2]));

        gl.uniform_matrix4fv_with_f32_array(u_proj.as_ref(), false, proj.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_view.as_ref(), false, view.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_model.as_ref(), false, model.as_slice());

        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.bind_vertex_array(Some(&vao));
        gl.draw_arrays(GL::LINES, 0, vertex_count);
        gl.bind_vertex_array(None);

        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    window()
        .unwrap()
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}
