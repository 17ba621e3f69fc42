//! Canvas 2D presenter

use std::f64::consts::TAU;

use game_core::{draw_commands, DrawCommand, Frame, Presenter, TextAlign};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

const FONT_FAMILY: &str = "fantasy";

pub struct CanvasPresenter {
    ctx: CanvasRenderingContext2d,
    pause_button: Option<Element>,
    // Last label written, so the DOM is only touched on change
    button_shows_paused: Option<bool>,
}

impl CanvasPresenter {
    pub fn new(canvas: &HtmlCanvasElement, pause_button: Option<Element>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Unexpected canvas context type"))?;

        Ok(Self {
            ctx,
            pause_button,
            button_shows_paused: None,
        })
    }

    fn draw(&self, command: &DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.ctx.set_fill_style_str(color.css());
                self.ctx
                    .fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => {
                self.ctx.set_fill_style_str(color.css());
                self.ctx.begin_path();
                self.ctx
                    .arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU)?;
                self.ctx.close_path();
                self.ctx.fill();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                size_px,
                align,
                color,
            } => {
                self.ctx.set_fill_style_str(color.css());
                self.ctx.set_font(&format!("{}px {}", size_px, FONT_FAMILY));
                self.ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                });
                self.ctx.fill_text(text, *x as f64, *y as f64)?;
            }
        }
        Ok(())
    }

    fn update_pause_button(&mut self, paused: bool) {
        if self.button_shows_paused == Some(paused) {
            return;
        }
        if let Some(button) = &self.pause_button {
            button.set_text_content(Some(if paused { "Resume" } else { "Pause" }));
        }
        self.button_shows_paused = Some(paused);
    }
}

impl Presenter for CanvasPresenter {
    fn present(&mut self, frame: &Frame) {
        for command in draw_commands(frame) {
            if let Err(e) = self.draw(&command) {
                log::warn!("Failed to draw {:?}: {:?}", command, e);
            }
        }
        self.update_pause_button(frame.paused);
    }
}
