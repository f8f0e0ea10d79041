//! Text overlay for scores and the game-over message
//!
//! wgpu draws shapes only, so labels are absolutely positioned DOM elements
//! stacked over the canvas.

use game_core::Label;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

pub struct Hud {
    document: Document,
    container: HtmlElement,
    labels: Vec<HtmlElement>,
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

fn create_div(document: &Document) -> Result<HtmlElement, String> {
    document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "Created element is not an HtmlElement".to_string())
}

impl Hud {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let document = canvas
            .owner_document()
            .ok_or_else(|| "Canvas is not attached to a document".to_string())?;
        let parent = canvas
            .parent_element()
            .ok_or_else(|| "Canvas has no parent element".to_string())?;

        let container = create_div(&document)?;
        let style = container.style();
        style.set_property("position", "absolute").map_err(js_err)?;
        style.set_property("pointer-events", "none").map_err(js_err)?;
        style.set_property("overflow", "hidden").map_err(js_err)?;
        parent.append_child(&container).map_err(js_err)?;

        let hud = Self {
            document,
            container,
            labels: Vec::new(),
        };
        hud.align_to(canvas)?;
        Ok(hud)
    }

    /// Cover the canvas' displayed box
    pub fn align_to(&self, canvas: &HtmlCanvasElement) -> Result<(), String> {
        let style = self.container.style();
        let px = |v: i32| format!("{v}px");
        style
            .set_property("left", &px(canvas.offset_left()))
            .map_err(js_err)?;
        style
            .set_property("top", &px(canvas.offset_top()))
            .map_err(js_err)?;
        style
            .set_property("width", &px(canvas.client_width()))
            .map_err(js_err)?;
        style
            .set_property("height", &px(canvas.client_height()))
            .map_err(js_err)?;
        Ok(())
    }

    /// Show `labels`, with `scale` CSS pixels per playfield unit
    pub fn sync(&mut self, labels: &[Label], scale: f32) -> Result<(), String> {
        while self.labels.len() < labels.len() {
            let element = create_div(&self.document)?;
            let style = element.style();
            style.set_property("position", "absolute").map_err(js_err)?;
            style.set_property("white-space", "nowrap").map_err(js_err)?;
            style.set_property("line-height", "1").map_err(js_err)?;
            style.set_property("font-family", "Arial").map_err(js_err)?;
            self.container.append_child(&element).map_err(js_err)?;
            self.labels.push(element);
        }

        for (i, element) in self.labels.iter().enumerate() {
            let style = element.style();
            let Some(label) = labels.get(i) else {
                style.set_property("display", "none").map_err(js_err)?;
                continue;
            };

            if element.text_content().as_deref() != Some(label.text.as_str()) {
                element.set_text_content(Some(&label.text));
            }
            let size = label.size_px * scale;
            // Labels are anchored at their baseline
            let top = (label.y - label.size_px) * scale;
            style.set_property("display", "block").map_err(js_err)?;
            style
                .set_property("left", &format!("{}px", label.x * scale))
                .map_err(js_err)?;
            style
                .set_property("top", &format!("{top}px"))
                .map_err(js_err)?;
            style
                .set_property("font-size", &format!("{size}px"))
                .map_err(js_err)?;
            style
                .set_property("color", &label.color.to_css())
                .map_err(js_err)?;
        }
        Ok(())
    }
}
