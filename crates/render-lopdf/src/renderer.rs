//! The lopdf document renderer.

use crate::content::{PageContext, font_resource_name};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use proforma_layout::{Font, ImageElement, LayoutElement, PositionedElement};
use proforma_render_core::{DocumentRenderer, RenderError};
use proforma_types::Size;
use std::io::{Seek, Write};

fn pdf_err(e: lopdf::Error) -> RenderError {
    RenderError::Pdf(e.to_string())
}

/// A PDF renderer using the `lopdf` library.
///
/// Pages are declared up front with a fixed media box; fonts are the two
/// non-embedded Type1 faces the layout engine measures against.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<W>,
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    images: Vec<(String, ObjectId)>,
    page_size: Size,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(page_size: Size) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            writer: None,
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            images: Vec::new(),
            page_size,
        }
    }

    /// Decode and embed an image as an RGB XObject. Any decode failure
    /// bubbles up to `render_page`, where it is swallowed.
    fn embed_image(&mut self, image: &ImageElement) -> Result<String, RenderError> {
        let decoded = image::load_from_memory(&image.data)
            .map_err(|e| RenderError::Other(format!("image decode failed: {e}")))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            rgb.into_raw(),
        );
        let id = self.doc.add_object(stream);
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push((name.clone(), id));
        Ok(name)
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        self.writer = Some(writer);
        Ok(())
    }

    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }

        let mut ctx = PageContext::new();
        for el in elements {
            match &el.element {
                LayoutElement::Text(text) => ctx.draw_text(el.x, el.y, text),
                LayoutElement::Rule(rule) => ctx.draw_rule(el.x, el.y, rule),
                LayoutElement::Image(image) => match self.embed_image(image) {
                    Ok(name) => ctx.draw_image(image.bounds_at(el.x, el.y), &name),
                    Err(e) => log::warn!("skipping unrenderable image: {e}"),
                },
            }
        }

        let content = ctx.finish();
        let content_stream = Stream::new(dictionary! {}, content.encode().map_err(pdf_err)?);
        let content_id = self.doc.add_object(content_stream);

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                self.page_size.width.into(),
                self.page_size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document not started or already finished".into()))?;

        let mut font_dict = Dictionary::new();
        for font in [Font::Helvetica, Font::HelveticaBold] {
            font_dict.set(
                font_resource_name(font),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        let mut resources = dictionary! { "Font" => font_dict };
        if !self.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.images {
                xobjects.set(name.as_str(), Object::Reference(*id));
            }
            resources.set("XObject", xobjects);
        }
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
                "Count" => self.page_ids.len() as i64,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        self.doc
            .save_to(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        writer.flush()?;
        Ok(writer)
    }
}
