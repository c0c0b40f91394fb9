//! The pagination state machine.
//!
//! One `paginate` call walks the fixed template top to bottom: header block
//! (first page only), column headers, streamed item rows with a break check
//! *before* each row, the totals line, and the notes footer on the final
//! page. The vertical cursor descends in PDF coordinates, so "past the
//! bottom margin" is a plain `<` against [`PageMetrics::bottom_margin`].

use crate::config::PageMetrics;
use crate::document::{DocumentItem, QuoteDocument};
use crate::elements::{Font, PositionedElement};
use crate::text::{text_width, wrap_text};

const TITLE: &str = "Proforma";

pub struct LayoutEngine {
    metrics: PageMetrics,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(PageMetrics::default())
    }
}

impl LayoutEngine {
    pub fn new(metrics: PageMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Lay out one document, returning pages of positioned elements.
    ///
    /// `show_prices` is the already-resolved visibility: when false, the
    /// unit price and subtotal columns are omitted everywhere, including
    /// the repeated column headers of later pages.
    pub fn paginate(
        &self,
        doc: &QuoteDocument,
        show_prices: bool,
    ) -> Vec<Vec<PositionedElement>> {
        let m = &self.metrics;
        let mut pages: Vec<Vec<PositionedElement>> = Vec::new();
        let mut page: Vec<PositionedElement> = Vec::new();

        self.draw_header(&mut page, doc);

        let mut y = m.first_table_y();
        self.draw_column_headers(&mut page, y, show_prices);

        for item in &doc.items {
            // Advance first, then check: a row is drawn in full on exactly
            // one page, never straddling the break.
            y -= m.row_height;
            if y < m.bottom_margin {
                pages.push(std::mem::take(&mut page));
                log::trace!(
                    "quote {}: page break before item {:?}",
                    doc.number,
                    item.description
                );
                y = m.page_reset_y;
                self.draw_column_headers(&mut page, y, show_prices);
                y -= m.row_height;
            }
            self.draw_item_row(&mut page, y, item, show_prices);
        }

        // The totals line lands on whichever page the last item did. No
        // break check here: a total may sit flush against, or inside, the
        // bottom margin when the table stops near the threshold.
        y -= m.totals_gap;
        page.push(PositionedElement::text(
            m.col_unit_price_x,
            y,
            "Total:",
            Font::HelveticaBold,
            m.totals_font_size,
        ));
        page.push(PositionedElement::text(
            m.col_subtotal_x,
            y,
            format!("{:.2}", doc.total),
            Font::HelveticaBold,
            m.totals_font_size,
        ));

        self.draw_footer(&mut page, doc);

        pages.push(page);
        pages
    }

    /// First-page header: logo (when present), centered title, document
    /// fields, divider rule.
    fn draw_header(&self, page: &mut Vec<PositionedElement>, doc: &QuoteDocument) {
        let m = &self.metrics;

        if let Some(logo) = &doc.logo {
            let x = (m.page_width - m.logo_width) / 2.0;
            page.push(PositionedElement::image(
                x,
                m.logo_y(),
                logo.clone(),
                m.logo_width,
                m.logo_height,
            ));
        }

        let title_y = m.title_y();
        let title_x =
            (m.page_width - text_width(TITLE, Font::HelveticaBold, m.title_font_size)) / 2.0;
        page.push(PositionedElement::text(
            title_x,
            title_y,
            TITLE,
            Font::HelveticaBold,
            m.title_font_size,
        ));

        let fields = [
            format!("Number: {}", doc.number),
            format!("Patient: {}", doc.patient_name),
            format!("Date: {}", doc.formatted_date()),
        ];
        for (i, field) in fields.into_iter().enumerate() {
            let y = title_y - m.header_field_gap - m.header_field_step * i as f32;
            page.push(PositionedElement::text(
                m.header_x,
                y,
                field,
                Font::Helvetica,
                m.body_font_size,
            ));
        }

        let divider_y = m.header_divider_y();
        page.push(PositionedElement::rule(
            m.rule_inset,
            divider_y,
            m.page_width - m.rule_inset,
            divider_y,
            m.rule_width,
        ));
    }

    fn draw_column_headers(&self, page: &mut Vec<PositionedElement>, y: f32, show_prices: bool) {
        let m = &self.metrics;
        let header = |x: f32, label: &str| {
            PositionedElement::text(x, y, label, Font::HelveticaBold, m.body_font_size)
        };
        page.push(header(m.col_description_x, "Description"));
        page.push(header(m.col_quantity_x, "Qty"));
        if show_prices {
            page.push(header(m.col_unit_price_x, "Unit Price"));
            page.push(header(m.col_subtotal_x, "Subtotal"));
        }
    }

    fn draw_item_row(
        &self,
        page: &mut Vec<PositionedElement>,
        y: f32,
        item: &DocumentItem,
        show_prices: bool,
    ) {
        let m = &self.metrics;
        let cell = |x: f32, content: String| {
            PositionedElement::text(x, y, content, Font::Helvetica, m.body_font_size)
        };
        page.push(cell(m.col_description_x, item.description.clone()));
        page.push(cell(m.col_quantity_x, item.quantity.to_string()));
        if show_prices {
            page.push(cell(m.col_unit_price_x, format!("{:.2}", item.unit_price)));
            page.push(cell(m.col_subtotal_x, format!("{:.2}", item.subtotal)));
        }
    }

    /// Footer on the last page: divider, label, wrapped note lines at a
    /// fixed position near the page bottom. There is no overflow handling;
    /// unusually long notes run past the bottom edge.
    fn draw_footer(&self, page: &mut Vec<PositionedElement>, doc: &QuoteDocument) {
        let m = &self.metrics;

        let divider_y = m.footer_y + m.footer_divider_gap;
        page.push(PositionedElement::rule(
            m.rule_inset,
            divider_y,
            m.page_width - m.rule_inset,
            divider_y,
            m.rule_width,
        ));
        page.push(PositionedElement::text(
            m.header_x,
            m.footer_y,
            "Notes:",
            Font::HelveticaBold,
            m.body_font_size,
        ));

        let lines = wrap_text(
            &doc.notes,
            Font::Helvetica,
            m.body_font_size,
            m.note_wrap_width,
        );
        for (i, line) in lines.into_iter().enumerate() {
            page.push(PositionedElement::text(
                m.footer_text_x,
                m.footer_y - m.footer_line_height * i as f32,
                line,
                Font::Helvetica,
                m.body_font_size,
            ));
        }
    }
}
