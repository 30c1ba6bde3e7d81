use std::str::FromStr;

use game_core::{Difficulty, GameError};
use proto::HostEvent;
use wasm_bindgen::prelude::*;

use crate::input::{handle_key_down, handle_key_up, should_prevent_default};
use crate::session::{level, Session};
use crate::surface::{find_canvas, fit_canvas};

fn js_error(err: GameError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Handle exported to the page
#[wasm_bindgen]
pub struct NeonPong {
    session: Session,
}

#[wasm_bindgen]
impl NeonPong {
    /// Bind to the canvas with the given id. Fails if the canvas is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<NeonPong, JsValue> {
        console_error_panic_hook::set_once();

        let canvas = find_canvas(canvas_id).map_err(|err| {
            web_sys::console::error_1(&err.to_string().into());
            js_error(err)
        })?;
        let (width, height) = fit_canvas(&canvas);
        let session = Session::new(width, height).map_err(js_error)?;

        Ok(NeonPong { session })
    }

    /// Queue a key press; returns true when the page should suppress the
    /// browser default for this key
    pub fn key_down(&mut self, key: &str) -> bool {
        if let Some(event) = handle_key_down(key) {
            self.session.push_event(event);
        }
        should_prevent_default(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        if let Some(event) = handle_key_up(key) {
            self.session.push_event(event);
        }
        should_prevent_default(key)
    }

    pub fn open_difficulty_menu(&mut self) {
        self.session.push_event(HostEvent::OpenDifficultyMenu);
    }

    /// Queue a difficulty choice by name ("easy", "normal" or "hard")
    pub fn select_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
        let difficulty = Difficulty::from_str(name).map_err(js_error)?;
        self.session.push_event(HostEvent::SelectDifficulty {
            level: level(difficulty),
        });
        Ok(())
    }

    /// Queue a postcard-encoded `HostEvent`
    pub fn push_event(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let event = HostEvent::from_bytes(bytes)
            .map_err(|e| JsValue::from_str(&format!("Bad host event: {}", e)))?;
        self.session.push_event(event);
        Ok(())
    }

    /// Run one animation frame. Returns the postcard-encoded snapshot, or an
    /// empty buffer while no difficulty has been chosen.
    pub fn frame(&mut self) -> Result<Vec<u8>, JsValue> {
        match self.session.frame() {
            Some(snapshot) => snapshot
                .to_bytes()
                .map_err(|e| JsValue::from_str(&format!("Failed to encode frame: {}", e))),
            None => Ok(Vec::new()),
        }
    }
}
