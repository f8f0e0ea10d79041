//! JavaScript entry points
//!
//! The page drives the frame loop: it forwards pointer and key events as they
//! arrive and calls `render_frame` once per animation frame.

use std::cell::RefCell;

use game_core::Config;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::hud::Hud;
use crate::renderer::Renderer;
use crate::simulation::LocalGame;

struct Client {
    canvas: HtmlCanvasElement,
    game: LocalGame,
    renderer: Renderer,
    hud: Hud,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Self, JsValue> {
        let config = load_config(&canvas, config_json.as_deref())?;
        let renderer = Renderer::new(canvas.clone(), &config)
            .await
            .map_err(|e| JsValue::from_str(&e))?;
        let hud = Hud::new(&canvas).map_err(|e| JsValue::from_str(&e))?;

        let seed = js_sys::Date::now() as u64;
        info!(
            "Client initialized: playfield {}x{}, first to {}",
            config.width, config.height, config.win_score
        );

        Ok(Self {
            canvas,
            game: LocalGame::new(config, seed),
            renderer,
            hud,
        })
    }

    fn render(&mut self) -> Result<(), JsValue> {
        self.renderer.resize(self.canvas.width(), self.canvas.height());

        let events = self.game.step();
        if let Some(winner) = events.game_over {
            info!("Game over: {:?} wins", winner);
        }

        let scene = self.game.scene();
        self.renderer
            .draw(&scene)
            .map_err(|e| JsValue::from_str(&e))?;

        let scale = self.canvas.client_width() as f32 / self.game.config().width;
        self.hud
            .align_to(&self.canvas)
            .map_err(|e| JsValue::from_str(&e))?;
        self.hud
            .sync(&scene.labels, scale)
            .map_err(|e| JsValue::from_str(&e))
    }
}

/// JSON fields override the defaults; a missing config takes the canvas size
fn load_config(canvas: &HtmlCanvasElement, config_json: Option<&str>) -> Result<Config, JsValue> {
    match config_json {
        Some(json) => Config::from_json(json).map_err(|e| JsValue::from_str(&e.to_string())),
        None => {
            let (width, height) = (canvas.width(), canvas.height());
            if width == 0 || height == 0 {
                warn!("Canvas has no size, using the default playfield");
                return Ok(Config::new());
            }
            Ok(Config::with_playfield(width as f32, height as f32))
        }
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, config_json: Option<String>) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    // Already set when the page re-initializes
    let _ = console_log::init_with_level(log::Level::Info);

    wasm_bindgen_futures::future_to_promise(async move {
        let client = Client::new(canvas, config_json).await?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        Ok(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen]
pub fn on_pointer_move(client_y: f32) -> Result<(), JsValue> {
    with_client(|client| {
        let rect = client.canvas.get_bounding_client_rect();
        client
            .game
            .on_pointer_move(client_y, rect.top() as f32, rect.height() as f32);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn on_key_down(key: &str) -> Result<bool, JsValue> {
    with_client(|client| Ok(client.game.on_key_down(key)))
}

#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.render())
}

/// Current frame as JSON, for debugging and page-side tooling
#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsValue> {
    with_client(|client| {
        serde_json::to_string(&client.game.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}
