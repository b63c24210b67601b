use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal A4 report writer: a title block, a row of KPI cards and a
/// paginated table. Text goes through the base-14 Helvetica font, so every
/// string is reduced to ASCII before drawing.
pub struct PdfReport {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    card_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
    card_value_font_size: f32,
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Page title plus one subtitle line.
pub struct ReportHeading<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

impl PdfReport {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            card_h: 54.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
            card_value_font_size: 18.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let safe = to_pdf_ascii(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(safe.as_bytes()));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: [f32; 3]) {
        content.save_state();
        content.set_fill_rgb(rgb[0], rgb[1], rgb[2]);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, font_size, &fit_to_width(text, w));
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Widths follow the longest cell per column, scaled down to the printable width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = (cell.chars().count() as f32 * 6.2).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, heading: &ReportHeading, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            heading.title,
        );

        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin,
            self.font_size,
            heading.subtitle,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Equal-width cards across the page; returns the y below the cards.
    fn draw_cards(&self, content: &mut Content, top: f32, cards: &[(&str, &str)]) -> f32 {
        if cards.is_empty() {
            return top;
        }

        let gap = 10.0;
        let n = cards.len() as f32;
        let w = (self.page_w - 2.0 * self.margin - gap * (n - 1.0)) / n;
        let y = top - self.card_h;

        for (i, (label, value)) in cards.iter().enumerate() {
            let x = self.margin + i as f32 * (w + gap);
            self.fill_rect(content, x, y, w, self.card_h, [0.92, 0.95, 0.98]);
            self.draw_cell_borders(content, x, y, w, self.card_h);
            self.draw_text(content, x + 8.0, y + self.card_h - 16.0, self.font_size, label);
            self.draw_text(content, x + 8.0, y + 12.0, self.card_value_font_size, value);
        }

        y - 20.0
    }

    /// First page carries the cards; the table continues on as many pages as needed.
    pub fn write_report(
        &mut self,
        heading: &ReportHeading,
        cards: &[(&str, &str)],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, heading, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            if page_idx == 1 {
                y = self.draw_cards(&mut content, y, cards) - self.row_h;
            }

            self.fill_rect(&mut content, self.margin, y, table_w, self.row_h, [0.85, 0.87, 0.90]);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);

            y -= self.row_h;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }

                if i % 2 == 0 {
                    self.fill_rect(&mut content, self.margin, y, table_w, self.row_h, [0.96, 0.96, 0.96]);
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Helvetica in a Type1 dictionary has no glyphs outside ASCII.
fn to_pdf_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '→' => out.push_str("->"),
            '…' => out.push_str("..."),
            'á' | 'à' => out.push('a'),
            'é' | 'è' => out.push('e'),
            'í' | 'ì' => out.push('i'),
            'ó' | 'ò' => out.push('o'),
            'ú' | 'ù' => out.push('u'),
            'ñ' => out.push('n'),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Truncate so the text stays inside its cell.
fn fit_to_width(text: &str, width: f32) -> String {
    let max_chars = ((width - 8.0) / 5.0).max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut s: String = text.chars().take(max_chars.saturating_sub(2)).collect();
    s.push_str("..");
    s
}
