//! Fixed layout constants for the single document template.
//!
//! Everything the pagination state machine measures against lives here as a
//! named value, so tests can run the engine against shrunken pages and the
//! template itself stays free of magic numbers.

use proforma_types::Size;

/// Page and template metrics. The defaults describe a US Letter page
/// (612 x 792 pt) with the clinic's standard proforma template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub page_width: f32,
    pub page_height: f32,

    /// Logo bounding box; horizontally centered, its bottom edge sits
    /// `logo_top_offset` below the top page edge.
    pub logo_width: f32,
    pub logo_height: f32,
    pub logo_top_offset: f32,

    /// Title baseline distance from the top page edge.
    pub title_offset: f32,
    pub title_font_size: f32,

    /// Header field block: x position, gap from the title baseline to the
    /// first field, and step between fields.
    pub header_x: f32,
    pub header_field_gap: f32,
    pub header_field_step: f32,

    /// Divider rules: horizontal inset from both page edges, stroke width,
    /// and the divider's distance below the title baseline.
    pub rule_inset: f32,
    pub rule_width: f32,
    pub header_divider_offset: f32,

    /// Item table: gap from the header divider down to the column header
    /// row, fixed row advance, the cursor threshold that forces a page
    /// break, and the cursor reset position on a fresh page.
    pub table_start_gap: f32,
    pub row_height: f32,
    pub bottom_margin: f32,
    pub page_reset_y: f32,

    /// Column x positions.
    pub col_description_x: f32,
    pub col_quantity_x: f32,
    pub col_unit_price_x: f32,
    pub col_subtotal_x: f32,

    /// Totals line: cursor advance from the last item row and font size.
    /// The label and value reuse the unit-price/subtotal column positions.
    pub totals_gap: f32,
    pub totals_font_size: f32,

    /// Footer block: label baseline height, divider gap above it, x
    /// position and line step of the wrapped note text, and the wrap width.
    pub footer_y: f32,
    pub footer_divider_gap: f32,
    pub footer_text_x: f32,
    pub footer_line_height: f32,
    pub note_wrap_width: f32,

    pub body_font_size: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,

            logo_width: 220.0,
            logo_height: 90.0,
            logo_top_offset: 120.0,

            title_offset: 150.0,
            title_font_size: 16.0,

            header_x: 100.0,
            header_field_gap: 20.0,
            header_field_step: 15.0,

            rule_inset: 80.0,
            rule_width: 0.8,
            header_divider_offset: 65.0,

            table_start_gap: 20.0,
            row_height: 20.0,
            bottom_margin: 150.0,
            page_reset_y: 750.0,

            col_description_x: 100.0,
            col_quantity_x: 300.0,
            col_unit_price_x: 350.0,
            col_subtotal_x: 420.0,

            totals_gap: 40.0,
            totals_font_size: 12.0,

            footer_y: 120.0,
            footer_divider_gap: 20.0,
            footer_text_x: 200.0,
            footer_line_height: 14.0,
            note_wrap_width: 412.0,

            body_font_size: 10.0,
        }
    }
}

impl PageMetrics {
    /// The page dimensions as a size.
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    /// Baseline y of the document title.
    pub fn title_y(&self) -> f32 {
        self.page_height - self.title_offset
    }

    /// Bottom-left y of the logo bounding box.
    pub fn logo_y(&self) -> f32 {
        self.page_height - self.logo_top_offset
    }

    /// y of the divider under the header block.
    pub fn header_divider_y(&self) -> f32 {
        self.title_y() - self.header_divider_offset
    }

    /// y of the column header row on the first page.
    pub fn first_table_y(&self) -> f32 {
        self.header_divider_y() - self.table_start_gap
    }
}
