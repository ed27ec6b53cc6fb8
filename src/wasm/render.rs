//! Galaxy demo scene: owns the GL resources for the attached particle
//! field, regenerates it whenever the debug panel changes a parameter, and
//! drives the per-frame draw via `request_animation_frame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlVertexArrayObject,
};

use crate::galaxy::{self, ParticleField};
use crate::math::Mat4;
use crate::params::GalaxyParams;
use crate::rng::SeededRng;
use crate::scene::{FieldBacking, FieldSlot};

use super::{gl as glh, panel, shaders};

#[derive(Clone, Copy, PartialEq)]
pub enum Variant {
    /// Spin baked into positions, whole field rotated by the render loop.
    Static,
    /// Differential rotation applied per frame in the vertex stage.
    Animated,
}

/// GPU-side buffers backing the attached field. Released exactly once by
/// the owning `FieldSlot` when a new field replaces it.
struct GlPoints {
    gl: GL,
    vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    count: i32,
}

impl FieldBacking for GlPoints {
    fn release(&mut self) {
        for buffer in &self.buffers {
            self.gl.delete_buffer(Some(buffer));
        }
        self.buffers.clear();
        self.gl.delete_vertex_array(Some(&self.vao));
    }
}

fn upload(
    gl: &GL,
    program: &WebGlProgram,
    field: &ParticleField,
    variant: Variant,
) -> Result<GlPoints, JsValue> {
    let vao = gl
        .create_vertex_array()
        .ok_or("unable to create vertex array")?;
    gl.bind_vertex_array(Some(&vao));

    let mut buffers = vec![
        glh::upload_attribute(gl, program, "a_position", &field.positions, 3)?,
        glh::upload_attribute(gl, program, "a_color", &field.colors, 3)?,
    ];
    if variant == Variant::Animated {
        buffers.push(glh::upload_attribute(gl, program, "a_scale", &field.scales, 1)?);
        buffers.push(glh::upload_attribute(
            gl,
            program,
            "a_randomness",
            &field.randomness,
            3,
        )?);
    }
    gl.bind_vertex_array(None);

    Ok(GlPoints {
        gl: gl.clone(),
        vao,
        buffers,
        count: field.len() as i32,
    })
}

/// Re-read the full parameter snapshot, generate a fresh field, and swap it
/// into the slot. Invalid parameters skip the swap and keep the previous
/// field attached.
fn regenerate(
    gl: &GL,
    program: &WebGlProgram,
    params: &GalaxyParams,
    variant: Variant,
    slot: &mut FieldSlot<GlPoints>,
) -> Result<(), JsValue> {
    let mut rng = SeededRng::from_entropy();
    let field = match variant {
        Variant::Static => galaxy::generate(params, &mut rng),
        Variant::Animated => galaxy::generate_animated(params, glh::pixel_ratio(), &mut rng),
    };
    match field {
        Ok(field) => {
            let backing = upload(gl, program, &field, variant)?;
            log::debug!("regenerated galaxy: {} particles", field.len());
            slot.replace(field, backing);
            Ok(())
        }
        Err(err) => {
            log::warn!("skipping regeneration: {err}");
            Ok(())
        }
    }
}

pub fn start(canvas: HtmlCanvasElement, variant: Variant) -> Result<(), JsValue> {
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;

    // Additive blending, no depth writes, matching the original material.
    gl.enable(GL::BLEND);
    gl.blend_func(GL::ONE, GL::ONE);
    gl.clear_color(0.0, 0.0, 0.0, 1.0);

    let (vert, frag) = match variant {
        Variant::Static => (shaders::POINTS_VERT, shaders::POINTS_FRAG),
        Variant::Animated => (shaders::GALAXY_ANIM_VERT, shaders::POINTS_FRAG),
    };
    let program = glh::link_program(&gl, vert, frag)?;
    gl.use_program(Some(&program));

    let params = Rc::new(RefCell::new(GalaxyParams::default()));
    let slot = Rc::new(RefCell::new(FieldSlot::new()));

    regenerate(&gl, &program, &params.borrow(), variant, &mut slot.borrow_mut())?;

    // Any panel change re-reads the whole snapshot and regenerates.
    {
        let gl = gl.clone();
        let program = program.clone();
        let params_for_regen = params.clone();
        let slot = slot.clone();
        let regen: Rc<dyn Fn()> = Rc::new(move || {
            if let Err(err) = regenerate(
                &gl,
                &program,
                &params_for_regen.borrow(),
                variant,
                &mut slot.borrow_mut(),
            ) {
                log::error!("regeneration failed: {err:?}");
            }
        });
        panel::bind(params.clone(), regen)?;
    }

    // Resize canvas to fit window
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

    let u_proj = gl.get_uniform_location(&program, "u_proj");
    let u_view = gl.get_uniform_location(&program, "u_view");
    let u_model = gl.get_uniform_location(&program, "u_model");
    let u_size = gl.get_uniform_location(&program, "u_size");
    let u_time = gl.get_uniform_location(&program, "u_time");
    let u_speed = gl.get_uniform_location(&program, "u_speed");

    let performance = window().unwrap().performance().unwrap();
    let start_time = performance.now();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = ((performance.now() - start_time) / 1000.0) as f32;
        let p = *params.borrow();

        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
        let proj = Mat4::perspective(75.0f32.to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::look_at([3.0, 3.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let model = match variant {
            Variant::Static => Mat4::rotation_y(-elapsed * p.rotate_speed),
            Variant::Animated => Mat4::IDENTITY,
        };

        gl.uniform_matrix4fv_with_f32_array(u_proj.as_ref(), false, proj.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_view.as_ref(), false, view.as_slice());
        gl.uniform_matrix4fv_with_f32_array(u_model.as_ref(), false, model.as_slice());
        match variant {
            Variant::Static => {
                gl.uniform1f(u_size.as_ref(), p.size * canvas.height() as f32 * 0.5);
            }
            Variant::Animated => {
                gl.uniform1f(u_time.as_ref(), elapsed);
                gl.uniform1f(u_speed.as_ref(), p.spin_speed);
            }
        }

        gl.clear(GL::COLOR_BUFFER_BIT);
        if let Some(points) = slot.borrow().backing() {
            gl.bind_vertex_array(Some(&points.vao));
            gl.draw_arrays(GL::POINTS, 0, points.count);
            gl.bind_vertex_array(None);
        }

        // schedule next
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
