//! Scroll demo: three showcased wireframe objects spaced one section apart,
//! a background starfield, a scroll-locked camera with cursor parallax, and
//! a rotation kick whenever a new section scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL};

use crate::math::Mat4;
use crate::rng::SeededRng;
use crate::scroll::{self, ObjectRotation, ScrollParams, SpinTween};

use super::{gl as glh, shaders};

const OBJECT_COUNT: usize = 3;
const OBJECT_X: [f32; OBJECT_COUNT] = [2.0, -2.0, 2.0];
const PARALLAX_EASE: f32 = 0.1;

pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;
    gl.clear_color(0.0, 0.0, 0.0, 1.0);

    let params = ScrollParams::default();

    // Background stars: one generation, drawn as flat points.
    let star_program = glh::link_program(&gl, shaders::POINTS_VERT, shaders::STARS_FRAG)?;
    gl.use_program(Some(&star_program));
    let mut rng = SeededRng::from_entropy();
    let star_positions = scroll::scatter(&params, &mut rng);
    let star_count = (star_positions.len() / 3) as i32;
    let star_vao = gl
        .create_vertex_array()
        .ok_or("unable to create vertex array")?;
    gl.bind_vertex_array(Some(&star_vao));
    let _star_buffer = glh::upload_attribute(&gl, &star_program, "a_position", &star_positions, 3)?;
    gl.bind_vertex_array(None);
    // Stars share one color; leave the color attribute constant.
    let color_loc = gl.get_attrib_location(&star_program, "a_color");
    if color_loc >= 0 {
        gl.vertex_attrib3f(color_loc as u32, 1.0, 0.93, 0.93); // #ffeded
    }

    // Showcased objects, one wireframe cube per section.
    let line_program = glh::link_program(&gl, shaders::LINES_VERT, shaders::LINES_FRAG)?;
    let edges = super::cube::cube_edges(0.8);
    let edge_count = (edges.len() / 3) as i32;
    gl.use_program(Some(&line_program));
    let object_vao = gl
        .create_vertex_array()
        .ok_or("unable to create vertex array")?;
    gl.bind_vertex_array(Some(&object_vao));
    let _object_buffer = glh::upload_attribute(&gl, &line_program, "a_position", &edges, 3)?;
    gl.bind_vertex_array(None);
    let u_obj_color = gl.get_uniform_location(&line_program, "u_color");
    gl.uniform3f(u_obj_color.as_ref(), 1.0, 0.93, 0.93);

    // Input state fed by the listeners below.
    let cursor = Rc::new(RefCell::new((0.0f32, 0.0f32)));
    let scroll_y = Rc::new(RefCell::new(0.0f32));

    let mousemove_closure = {
        let cursor = cursor.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let window = window().unwrap();
            let w = window.inner_width().unwrap().as_f64().unwrap() as f32;
            let h = window.inner_height().unwrap().as_f64().unwrap() as f32;
            *cursor.borrow_mut() = (
                event.client_x() as f32 / w - 0.5,
                event.client_y() as f32 / h - 0.5,
            );
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window()
        .unwrap()
        .add_event_listener_with_callback("mousemove", mousemove_closure.as_ref().unchecked_ref())?;
    mousemove_closure.forget();

    let scroll_closure = {
        let scroll_y = scroll_y.clone();
        Closure::wrap(Box::new(move || {
            *scroll_y.borrow_mut() = window().unwrap().scroll_y().unwrap_or(0.0) as f32;
        }) as Box<dyn FnMut()>)
    };
    window()
        .unwrap()
        .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())?;
    scroll_closure.forget();

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

    let mut parallax = scroll::Parallax::default();
    let mut rotations = [ObjectRotation::default(); OBJECT_COUNT];
    let mut tweens: [Option<SpinTween>; OBJECT_COUNT] = [None; OBJECT_COUNT];
    let mut tween_offsets = [(0.0f32, 0.0f32); OBJECT_COUNT];
    let mut current_section = 0usize;
    let mut previous = 0.0f32;

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = ((performance.now() - start_time) / 1000.0) as f32;
        let dt = elapsed - previous;
        previous = elapsed;

        let viewport_h = window()
            .unwrap()
            .inner_height()
            .unwrap()
            .as_f64()
            .unwrap_or(1.0) as f32;
        let scrolled = *scroll_y.borrow();

        // Kick the object whose section just scrolled into view.
        let section = scroll::section_for(scrolled, viewport_h);
        if section != current_section {
            current_section = section;
            if section < OBJECT_COUNT {
                tweens[section] = Some(SpinTween::start());
            }
        }

        let (cx, cy) = *cursor.borrow();
        parallax.update(cx, cy, PARALLAX_EASE);
        let cam_y = scroll::camera_y(scrolled, viewport_h, params.object_distance);

        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
        let proj = Mat4::perspective(35.0f32.to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::translation(-parallax.x, -(cam_y + parallax.y), -6.0);

        gl.clear(GL::COLOR_BUFFER_BIT);

        // Stars
        gl.use_program(Some(&star_program));
        let u_proj = gl.get_uniform_location(&star_program, "u_proj");
        let u_view = gl.get_uniform_location(&star_program, "u_view");
        let u_model = gl.get_uniform_location(&star_program, "u_model");
        let u_size = gl.get_uniform_location(&star_program, "u_size");
        gl.uniform_matrix4fv_with_f32_array(u_proj.as_ref(), false, proj.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_view.as_ref(), false, view.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_model.as_ref(), false, Mat4::IDENTITY.as_slice());
        gl.uniform1f(u_size.as_ref(), params.star_size * canvas.height() as f32 * 0.5);
        gl.bind_vertex_array(Some(&star_vao));
        gl.draw_arrays(GL::POINTS, 0, star_count);
        gl.bind_vertex_array(None);

        // Objects: idle rotation plus any running section tween.
        gl.use_program(Some(&line_program));
        let u_proj = gl.get_uniform_location(&line_program, "u_proj");
        let u_view = gl.get_uniform_location(&line_program, "u_view");
        let u_model = gl.get_uniform_location(&line_program, "u_model");
        gl.uniform_matrix4fv_with_f32_array(u_proj.as_ref(), false, proj.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_view.as_ref(), false, view.as_slice());
        gl.bind_vertex_array(Some(&object_vao));
        for i in 0..OBJECT_COUNT {
            rotations[i].integrate(params.rotation_speed, dt);
            if let Some(tween) = tweens[i].as_mut() {
                tween_offsets[i] = tween.step(dt);
                if tween.finished() {
                    // Fold the finished kick into the idle rotation.
                    rotations[i].x += tween_offsets[i].0;
                    rotations[i].y += tween_offsets[i].1;
                    tween_offsets[i] = (0.0, 0.0);
                    tweens[i] = None;
                }
            }
            let (tx, ty) = tween_offsets[i];
            let model = Mat4::translation(OBJECT_X[i], -params.object_distance * i as f32, 0.0)
                .mul(&Mat4::rotation_x(rotations[i].x + tx))
                .mul(&Mat4::rotation_y(rotations[i].y + ty))
                .mul(&Mat4::rotation_z(rotations[i].z));
            gl.uniform_matrix4fv_with_f32_array(u_model.as_ref(), false, model.as_slice());
            gl.draw_arrays(GL::LINES, 0, edge_count);
        }
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
