//! `requestAnimationFrame` driver for canvas scenes.

use crate::error::LandingError;
use leptos::html;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

/// Something that paints itself onto a 2D canvas every frame.
pub trait Scene {
    /// Canvas backing store was resized to `width` x `height` pixels.
    fn resize(&mut self, width: f64, height: f64);

    /// Pointer moved; coordinates are relative to the canvas, 0..1 on both
    /// axes (may fall outside when the pointer is elsewhere on the page).
    fn pointer(&mut self, _u: f64, _v: f64) {}

    /// Paint one frame. `time` is seconds since page load.
    fn draw(&mut self, ctx: &CanvasRenderingContext2d, time: f64) -> Result<(), LandingError>;
}

type FrameCallback = Closure<dyn FnMut(f64)>;
type Listener = (&'static str, Closure<dyn FnMut(Event)>);

/// Running animation bound to one canvas. Dropping it stops the loop and
/// removes its window listeners.
pub struct AnimationLoop {
    window: Window,
    running: Rc<Cell<bool>>,
    stopped: Cell<bool>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
    listeners: RefCell<Vec<Listener>>,
}

impl AnimationLoop {
    pub fn start<S: Scene + 'static>(canvas: HtmlCanvasElement, scene: S) -> Result<Self, LandingError> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(LandingError::Canvas("2d context not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| LandingError::Canvas("unexpected context type"))?;

        let scene = Rc::new(RefCell::new(scene));
        fit_to_layout(&canvas, &mut *scene.borrow_mut());

        let this = Self {
            window: window.clone(),
            running: Rc::new(Cell::new(true)),
            stopped: Cell::new(false),
            frame_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            listeners: RefCell::new(Vec::new()),
        };

        let on_move = {
            let scene = Rc::clone(&scene);
            let canvas = canvas.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let u = (f64::from(event.client_x()) - rect.left()) / rect.width();
                let v = (f64::from(event.client_y()) - rect.top()) / rect.height();
                scene.borrow_mut().pointer(u, v);
            })
        };
        this.listen("mousemove", on_move)?;

        let on_resize = {
            let scene = Rc::clone(&scene);
            let canvas = canvas.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                fit_to_layout(&canvas, &mut *scene.borrow_mut());
            })
        };
        this.listen("resize", on_resize)?;

        let tick = {
            let running = Rc::clone(&this.running);
            let frame_id = Rc::clone(&this.frame_id);
            let slot = Rc::clone(&this.tick);
            let window = window.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                if !running.get() {
                    return;
                }
                if let Err(err) = scene.borrow_mut().draw(&ctx, timestamp / 1000.0) {
                    warn!(error = %err, "scene draw failed, stopping animation");
                    running.set(false);
                    return;
                }
                if let Some(callback) = slot.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => frame_id.set(Some(id)),
                        Err(err) => {
                            warn!(error = ?err, "requestAnimationFrame failed");
                            running.set(false);
                        }
                    }
                }
            })
        };

        let first = window.request_animation_frame(tick.as_ref().unchecked_ref())?;
        this.frame_id.set(Some(first));
        *this.tick.borrow_mut() = Some(tick);

        debug!("animation loop started");
        Ok(this)
    }

    fn listen(&self, event: &'static str, callback: Closure<dyn FnMut(Event)>) -> Result<(), LandingError> {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push((event, callback));
        Ok(())
    }

    /// Cancel the pending frame and detach listeners. Idempotent.
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        self.running.set(false);
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure -> slot -> closure cycle
        self.tick.borrow_mut().take();
        for (event, callback) in self.listeners.borrow_mut().drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        debug!("animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn fit_to_layout<S: Scene>(canvas: &HtmlCanvasElement, scene: &mut S) {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    scene.resize(f64::from(width), f64::from(height));
}

/// Start `make_scene()` on the canvas once it mounts; stop it on unmount.
pub fn drive_canvas<S: Scene + 'static>(
    canvas_ref: NodeRef<html::Canvas>,
    make_scene: fn() -> S,
    label: &'static str,
) {
    let animation = StoredValue::new_local(None::<AnimationLoop>);

    Effect::new(move || {
        if let Some(canvas) = canvas_ref.get() {
            match AnimationLoop::start(canvas, make_scene()) {
                Ok(running) => animation.set_value(Some(running)),
                Err(err) => warn!(effect = label, error = %err, "background effect disabled"),
            }
        }
    });

    on_cleanup(move || {
        animation.try_update_value(|slot| slot.take());
    });
}
