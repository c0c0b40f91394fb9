//! Content-stream assembly for a single page.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use proforma_layout::{Font, RuleElement, TextElement};
use proforma_types::Rect;

/// Internal resource name for each template face.
pub(crate) fn font_resource_name(font: Font) -> &'static str {
    match font {
        Font::Helvetica => "F1",
        Font::HelveticaBold => "F2",
    }
}

/// Builds the operation list for one page, deduplicating font selection
/// the way a hand-written content stream would.
pub(crate) struct PageContext {
    content: Content,
    state: PageRenderState,
}

#[derive(Default, PartialEq)]
struct PageRenderState {
    font_name: &'static str,
    font_size: f32,
}

impl PageContext {
    pub(crate) fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn set_font(&mut self, font: Font, size: f32) {
        let name = font_resource_name(font);
        if self.state.font_name != name || self.state.font_size != size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            ));
            self.state.font_name = name;
            self.state.font_size = size;
        }
    }

    pub(crate) fn draw_text(&mut self, x: f32, y: f32, text: &TextElement) {
        if text.content.is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(text.font, text.size);
        self.content
            .operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                to_win_ansi(&text.content),
                StringFormat::Literal,
            )],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    pub(crate) fn draw_rule(&mut self, x: f32, y: f32, rule: &RuleElement) {
        self.content
            .operations
            .push(Operation::new("w", vec![rule.stroke_width.into()]));
        self.content
            .operations
            .push(Operation::new("m", vec![x.into(), y.into()]));
        self.content
            .operations
            .push(Operation::new("l", vec![rule.x2.into(), rule.y2.into()]));
        self.content.operations.push(Operation::new("S", vec![]));
    }

    /// Place an already-embedded image XObject scaled into its box.
    pub(crate) fn draw_image(&mut self, bounds: Rect, name: &str) {
        self.content.operations.push(Operation::new("q", vec![]));
        self.content.operations.push(Operation::new(
            "cm",
            vec![
                bounds.width.into(),
                0.into(),
                0.into(),
                bounds.height.into(),
                bounds.x.into(),
                bounds.y.into(),
            ],
        ));
        self.content.operations.push(Operation::new(
            "Do",
            vec![Object::Name(name.as_bytes().to_vec())],
        ));
        self.content.operations.push(Operation::new("Q", vec![]));
        // text state belongs to the graphics state we just popped
        self.state = PageRenderState::default();
    }
}

/// Map text into WinAnsi bytes; anything outside Latin-1 becomes '?'.
pub(crate) fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
