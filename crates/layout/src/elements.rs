//! Output element types of the layout engine.

use crate::document::SharedData;
use proforma_types::Rect;

/// The two faces the template uses. Both are PDF base-14 fonts, so the
/// backend needs no font embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub fn postscript_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// A run of text anchored at a baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: Font,
    pub size: f32,
}

/// A straight stroked line between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleElement {
    pub x2: f32,
    pub y2: f32,
    pub stroke_width: f32,
}

/// An image scaled into a bounding box. The position on the owning
/// [`PositionedElement`] is the box's bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub data: SharedData,
    pub width: f32,
    pub height: f32,
}

impl ImageElement {
    pub fn bounds_at(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rule(RuleElement),
    Image(ImageElement),
}

/// A drawing element placed on a page. `x`/`y` are the text baseline
/// origin, the rule's first endpoint, or the image box's bottom-left.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn text(x: f32, y: f32, content: impl Into<String>, font: Font, size: f32) -> Self {
        Self {
            x,
            y,
            element: LayoutElement::Text(TextElement {
                content: content.into(),
                font,
                size,
            }),
        }
    }

    pub fn rule(x1: f32, y1: f32, x2: f32, y2: f32, stroke_width: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            element: LayoutElement::Rule(RuleElement {
                x2,
                y2,
                stroke_width,
            }),
        }
    }

    pub fn image(x: f32, y: f32, data: SharedData, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            element: LayoutElement::Image(ImageElement {
                data,
                width,
                height,
            }),
        }
    }

    /// The text content, if this is a text element.
    pub fn as_text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}
