//! Debug panel bindings: plain DOM inputs, one per galaxy parameter.
//!
//! Every listener writes its field into the shared parameter snapshot and
//! then invokes the regeneration callback with no payload; the scene
//! re-reads the whole snapshot. Values that fail to parse are logged and
//! dropped without touching the snapshot, so the attached field never
//! reflects a half-applied change.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlInputElement};

use crate::color::Rgb;
use crate::params::GalaxyParams;

type Apply = fn(&mut GalaxyParams, &str) -> bool;

fn bind_field(
    document: &Document,
    id: &str,
    params: &Rc<RefCell<GalaxyParams>>,
    regen: &Rc<dyn Fn()>,
    apply: Apply,
) -> Result<(), JsValue> {
    // Pages only carry the panel rows they care about.
    let element = match document.get_element_by_id(id) {
        Some(element) => element,
        None => return Ok(()),
    };
    let input: HtmlInputElement = element.dyn_into()?;

    let closure = {
        let input = input.clone();
        let params = params.clone();
        let regen = regen.clone();
        let id = id.to_string();
        Closure::wrap(Box::new(move || {
            let value = input.value();
            if apply(&mut params.borrow_mut(), &value) {
                regen();
            } else {
                log::warn!("ignoring {id} input: {value:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wire every panel input present on the page to the parameter snapshot.
pub fn bind(params: Rc<RefCell<GalaxyParams>>, regen: Rc<dyn Fn()>) -> Result<(), JsValue> {
    let document = window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;

    bind_field(&document, "count", &params, &regen, |p, v| {
        v.parse().map(|n| p.count = n).is_ok()
    })?;
    bind_field(&document, "size", &params, &regen, |p, v| {
        v.parse().map(|n| p.size = n).is_ok()
    })?;
    bind_field(&document, "radius", &params, &regen, |p, v| {
        v.parse().map(|n| p.radius = n).is_ok()
    })?;
    bind_field(&document, "branches", &params, &regen, |p, v| {
        v.parse().map(|n| p.branches = n).is_ok()
    })?;
    bind_field(&document, "spin", &params, &regen, |p, v| {
        v.parse().map(|n| p.spin = n).is_ok()
    })?;
    bind_field(&document, "random-pow", &params, &regen, |p, v| {
        v.parse().map(|n| p.random_pow = n).is_ok()
    })?;
    bind_field(&document, "randomness", &params, &regen, |p, v| {
        v.parse().map(|n| p.randomness = n).is_ok()
    })?;
    bind_field(&document, "rotate", &params, &regen, |p, v| {
        v.parse().map(|n| p.rotate_speed = n).is_ok()
    })?;
    bind_field(&document, "spin-speed", &params, &regen, |p, v| {
        v.parse().map(|n| p.spin_speed = n).is_ok()
    })?;
    bind_field(&document, "inner-color", &params, &regen, |p, v| {
        Rgb::from_hex(v).map(|c| p.inner_color = c).is_ok()
    })?;
    bind_field(&document, "outer-color", &params, &regen, |p, v| {
        Rgb::from_hex(v).map(|c| p.outer_color = c).is_ok()
    })?;

    Ok(())
}
