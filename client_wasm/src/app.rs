//! Browser wiring: DOM listeners push input, the animation-frame loop drives
//! the simulation.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, InputEvent, Simulation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::canvas::CanvasPresenter;
use crate::input::{is_pause_key, pointer_surface_y};

const PAUSE_BUTTON_ID: &str = "pauseBtn";

thread_local! {
    // Running game, for exports called from page script
    static GAME: RefCell<Option<Rc<RefCell<Simulation>>>> = const { RefCell::new(None) };
}

/// Start the game on the canvas with id `canvas_id`.
///
/// The field takes the canvas size. A `pauseBtn` element, if present, is
/// wired as a pause control and its label kept in sync.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second start() finds the logger already installed
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("'{}' is not a canvas", canvas_id)))?;

    let config = Config::for_surface(canvas.width() as f32, canvas.height() as f32);
    let sim = Simulation::new(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid field: {}", e)))?;
    let sim = Rc::new(RefCell::new(sim));

    let pause_button = document.get_element_by_id(PAUSE_BUTTON_ID);
    let presenter = CanvasPresenter::new(&canvas, pause_button.clone())?;

    listen_pointer(&canvas, sim.clone())?;
    listen_keyboard(&document, sim.clone())?;
    if let Some(button) = &pause_button {
        listen_pause_button(button, sim.clone())?;
    }

    GAME.with(|game| *game.borrow_mut() = Some(sim.clone()));

    log::info!("Pong running on {}x{} canvas", canvas.width(), canvas.height());
    request_frame(sim, presenter)
}

/// Toggle pause from page script. Ignored until the first frame has run.
#[wasm_bindgen]
pub fn pause_game() -> Result<(), JsValue> {
    GAME.with(|game| match game.borrow().as_ref() {
        Some(sim) => {
            sim.borrow_mut().push_input(InputEvent::TogglePause);
            Ok(())
        }
        None => Err(JsValue::from_str("Game not started")),
    })
}

fn listen_pointer(canvas: &HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) -> Result<(), JsValue> {
    let surface = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = surface.get_bounding_client_rect();
        let y = pointer_surface_y(event.client_y(), rect.top());
        sim.borrow_mut().push_input(InputEvent::PointerMove { y });
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_keyboard(document: &Document, sim: Rc<RefCell<Simulation>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if is_pause_key(&event.code()) {
            // Keep Space from scrolling the page
            event.prevent_default();
            sim.borrow_mut().push_input(InputEvent::TogglePause);
        }
    });
    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_pause_button(button: &Element, sim: Rc<RefCell<Simulation>>) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        sim.borrow_mut().push_input(InputEvent::TogglePause);
    });
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_frame(sim: Rc<RefCell<Simulation>>, presenter: CanvasPresenter) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::once(move |_time: f64| game_loop(sim, presenter));
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(sim: Rc<RefCell<Simulation>>, mut presenter: CanvasPresenter) {
    sim.borrow_mut().frame(&mut presenter);

    // No exit condition: the loop runs until the page goes away
    if let Err(e) = request_frame(sim, presenter) {
        log::error!("Failed to schedule next frame: {:?}", e);
    }
}
