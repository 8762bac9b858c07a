//! Block-by-block invoice layout with an advancing vertical cursor.
//!
//! Every block computes its own height and moves the cursor exactly once;
//! optional lines that are absent are skipped entirely rather than leaving
//! blank slots. Line-item rows that would pass the bottom margin trigger a
//! page break and a reprint of the table header band.

use chrono::NaiveDate;
use facture_model::{CustomerRecord, InvoiceStatus, LineItem};
use facture_resolve::{LanguageCode, ResolvedPresentation, Totals};
use facture_types::{format_amount, Color, PageMetrics};

use crate::instruction::{DrawInstruction, LaidOutDocument, TextAlign};
use crate::labels::{labels_for, Labels};
use crate::LayoutError;

const PT_TO_MM: f32 = 0.352_778;

const TITLE_SIZE: f32 = 22.0;
const NUMBER_SIZE: f32 = 11.0;
const NAME_SIZE: f32 = 11.0;
const LABEL_SIZE: f32 = 9.0;
const BODY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 12.0;
const TOTAL_SIZE: f32 = 13.0;

const ROW_HEIGHT: f32 = 6.5;
const HEADER_BAND_HEIGHT: f32 = 7.0;
const BLOCK_GAP: f32 = 7.0;
const COLUMN_GUTTER: f32 = 4.0;
const LOGO_WIDTH: f32 = 36.0;
const LOGO_HEIGHT: f32 = 14.0;

const WHITE: Color = Color::new(0xff, 0xff, 0xff);

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * 1.45
}

/// Rough Helvetica advance: the average glyph is about half an em wide.
/// Only used to bound how many characters fit a column, never for
/// positioning, so renderers stay free to measure precisely.
fn max_chars_for(width: f32, size: f32) -> usize {
    ((width / (size * PT_TO_MM * 0.5)).floor() as usize).max(1)
}

fn truncate_to(text: &str, width: f32, size: f32) -> String {
    let max_chars = max_chars_for(width, size);
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

fn wrap_text(text: &str, width: f32, size: f32) -> Vec<String> {
    let max_chars = max_chars_for(width, size);
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.chars().count() <= max_chars {
            lines.push(raw.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract().abs() < f64::EPSILON {
        format!("{:.0}", quantity)
    } else {
        format!("{:.2}", quantity)
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Invoice header fields the layout engine consumes, assembled by the
/// caller from the invoice row (number already in display form, status
/// already the effective one).
#[derive(Debug, Clone, Default)]
pub struct InvoiceHeaderFields {
    pub number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub currency: String,
    pub tax_rate: f64,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub payment_terms_days: Option<u32>,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

// --- Page composition ---

struct Composer {
    page: PageMetrics,
    pages: Vec<Vec<DrawInstruction>>,
    current: Vec<DrawInstruction>,
    cursor: f32,
}

impl Composer {
    fn new(page: PageMetrics) -> Self {
        Self {
            page,
            pages: Vec::new(),
            current: Vec::new(),
            cursor: page.margin_top,
        }
    }

    /// Check whether a block fits in the remaining space, with a small
    /// epsilon for floating point inaccuracies.
    fn fits(&self, height: f32) -> bool {
        const EPSILON: f32 = 0.01;
        height <= self.page.content_bottom() - self.cursor + EPSILON
    }

    fn ensure_room(&mut self, height: f32) {
        if !self.fits(height) {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = self.page.margin_top;
    }

    fn push(&mut self, instruction: DrawInstruction) {
        self.current.push(instruction);
    }

    fn text(
        &mut self,
        content: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.current.push(DrawInstruction::Text {
            content,
            x,
            y,
            size,
            color,
            align,
        });
    }

    /// Draw one line at the cursor and advance past it.
    fn line(&mut self, content: impl Into<String>, x: f32, size: f32, color: Color, align: TextAlign) {
        let y = self.cursor;
        self.text(content, x, y, size, color, align);
        self.cursor += line_height(size);
    }

    fn finish(mut self) -> Vec<Vec<DrawInstruction>> {
        self.pages.push(self.current);
        self.pages
    }
}

struct TableGeometry {
    desc_x: f32,
    qty_x: f32,
    rate_x: f32,
    amount_x: f32,
    desc_width: f32,
}

fn table_geometry(page: &PageMetrics) -> TableGeometry {
    let amount_x = page.content_right();
    let rate_x = amount_x - 30.0;
    let qty_x = rate_x - 26.0;
    let desc_x = page.content_left();
    TableGeometry {
        desc_x,
        qty_x,
        rate_x,
        amount_x,
        desc_width: qty_x - 10.0 - desc_x,
    }
}

/// Lay the invoice out onto one or more fixed-size pages.
///
/// Fails only when required data is structurally absent (a missing or empty
/// invoice number); absent optional data is omitted, never an error.
pub fn layout_invoice(
    presentation: &ResolvedPresentation,
    header: &InvoiceHeaderFields,
    items: &[LineItem],
    totals: &Totals,
    customer: &CustomerRecord,
    language: LanguageCode,
) -> Result<LaidOutDocument, LayoutError> {
    let number = header
        .number
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(LayoutError::MissingRequiredData("invoice number"))?;
    let labels = labels_for(language);
    let page = PageMetrics::a4();
    let mut c = Composer::new(page);

    title_block(&mut c, presentation, labels, header, number);
    parties_block(&mut c, presentation, labels, customer);
    details_block(&mut c, presentation, labels, header);
    description_block(&mut c, presentation, header);
    items_table(&mut c, presentation, labels, header, items);
    totals_block(&mut c, presentation, labels, header, totals);
    payment_block(&mut c, presentation, labels, customer);
    notes_block(&mut c, presentation, labels, header);

    let pages = c.finish();
    log::debug!(
        "laid out invoice {} as {} instruction(s) across {} page(s)",
        number,
        pages.iter().map(|p| p.len()).sum::<usize>(),
        pages.len()
    );
    Ok(LaidOutDocument {
        pages,
        page,
        font_family: presentation.font_family,
    })
}

fn title_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    header: &InvoiceHeaderFields,
    number: &str,
) {
    let center = c.page.center_x();
    c.line(
        labels.document_title.to_uppercase(),
        center,
        TITLE_SIZE,
        presentation.primary_color,
        TextAlign::Center,
    );
    c.line(
        number,
        center,
        NUMBER_SIZE,
        presentation.secondary_color,
        TextAlign::Center,
    );
    let status_color = if header.status == InvoiceStatus::Overdue {
        presentation.accent_color
    } else {
        presentation.secondary_color
    };
    c.line(
        labels.status(header.status),
        center,
        LABEL_SIZE,
        status_color,
        TextAlign::Center,
    );
    c.cursor += BLOCK_GAP;
}

/// The two-column From / To block. Both columns are collected first so the
/// cursor advances once, by the taller column, regardless of which optional
/// lines were present.
fn parties_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    customer: &CustomerRecord,
) {
    let mut left: Vec<(String, f32, Color)> = vec![
        (labels.from.to_string(), LABEL_SIZE, presentation.secondary_color),
        (
            presentation.company_name.clone(),
            NAME_SIZE,
            presentation.text_color,
        ),
    ];
    for line in presentation.company_address.lines() {
        left.push((line.to_string(), BODY_SIZE, presentation.text_color));
    }
    if let Some(phone) = &presentation.company_phone {
        left.push((phone.clone(), BODY_SIZE, presentation.text_color));
    }
    left.push((
        presentation.company_email.clone(),
        BODY_SIZE,
        presentation.text_color,
    ));
    if let Some(website) = &presentation.company_website {
        left.push((website.clone(), BODY_SIZE, presentation.text_color));
    }
    if let Some(tax_id) = &presentation.tax_id {
        left.push((
            format!("{}: {}", labels.tax_id, tax_id),
            BODY_SIZE,
            presentation.text_color,
        ));
    }
    if let Some(license) = &presentation.business_license {
        left.push((
            format!("{}: {}", labels.business_license, license),
            BODY_SIZE,
            presentation.text_color,
        ));
    }

    let mut right: Vec<(String, f32, Color)> = vec![
        (labels.to.to_string(), LABEL_SIZE, presentation.secondary_color),
        (customer.name.clone(), NAME_SIZE, presentation.text_color),
    ];
    if let Some(address) = &customer.address {
        for line in address.lines() {
            right.push((line.to_string(), BODY_SIZE, presentation.text_color));
        }
    }
    if let Some(phone) = &customer.phone {
        right.push((phone.clone(), BODY_SIZE, presentation.text_color));
    }
    if let Some(email) = &customer.email {
        right.push((email.clone(), BODY_SIZE, presentation.text_color));
    }

    let left_x = c.page.content_left();
    let right_x = c.page.center_x() + COLUMN_GUTTER;
    let mut left_y = c.cursor;
    if let Some(url) = &presentation.logo_url {
        c.push(DrawInstruction::Image {
            url: url.clone(),
            x: left_x,
            y: left_y,
            w: LOGO_WIDTH,
            h: LOGO_HEIGHT,
        });
        left_y += LOGO_HEIGHT + 2.0;
    }
    let right_y = c.cursor;

    let left_end = emit_column(c, &left, left_x, left_y);
    let right_end = emit_column(c, &right, right_x, right_y);
    c.cursor = left_end.max(right_end) + BLOCK_GAP;
}

fn emit_column(c: &mut Composer, lines: &[(String, f32, Color)], x: f32, y0: f32) -> f32 {
    let mut y = y0;
    for (content, size, color) in lines {
        c.text(content.clone(), x, y, *size, *color, TextAlign::Left);
        y += line_height(*size);
    }
    y
}

/// Issue date and currency on the left, due date and payment terms on the
/// right, each line omitted when its value is absent.
fn details_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    header: &InvoiceHeaderFields,
) {
    let mut left: Vec<(String, f32, Color)> = Vec::new();
    if let Some(date) = header.issue_date {
        left.push((
            format!("{}: {}", labels.issue_date, format_date(date)),
            BODY_SIZE,
            presentation.text_color,
        ));
    }
    left.push((
        format!("{}: {}", labels.currency, header.currency),
        BODY_SIZE,
        presentation.text_color,
    ));

    let mut right: Vec<(String, f32, Color)> = Vec::new();
    if let Some(date) = header.due_date {
        right.push((
            format!("{}: {}", labels.due_date, format_date(date)),
            BODY_SIZE,
            presentation.text_color,
        ));
    }
    if let Some(days) = header.payment_terms_days {
        right.push((
            format!("{}: {} {}", labels.payment_terms, days, labels.days),
            BODY_SIZE,
            presentation.text_color,
        ));
    }

    let left_x = c.page.content_left();
    let right_x = c.page.center_x() + COLUMN_GUTTER;
    let y0 = c.cursor;
    let left_end = emit_column(c, &left, left_x, y0);
    let right_end = emit_column(c, &right, right_x, y0);
    c.cursor = left_end.max(right_end) + BLOCK_GAP;
}

fn description_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    header: &InvoiceHeaderFields,
) {
    let title = header.title.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let description = header
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if title.is_none() && description.is_none() {
        return;
    }
    if let Some(title) = title {
        c.line(
            title,
            c.page.content_left(),
            HEADING_SIZE,
            presentation.text_color,
            TextAlign::Left,
        );
    }
    if let Some(description) = description {
        for line in wrap_text(description, c.page.content_width(), BODY_SIZE) {
            c.line(
                line,
                c.page.content_left(),
                BODY_SIZE,
                presentation.secondary_color,
                TextAlign::Left,
            );
        }
    }
    c.cursor += BLOCK_GAP;
}

fn table_header(c: &mut Composer, presentation: &ResolvedPresentation, labels: &Labels, geo: &TableGeometry) {
    let y = c.cursor;
    c.push(DrawInstruction::FilledRect {
        x: c.page.content_left(),
        y,
        w: c.page.content_width(),
        h: HEADER_BAND_HEIGHT,
        color: presentation.primary_color,
    });
    let text_y = y + (HEADER_BAND_HEIGHT - BODY_SIZE * PT_TO_MM) / 2.0;
    c.text(labels.description, geo.desc_x + 1.5, text_y, BODY_SIZE, WHITE, TextAlign::Left);
    c.text(labels.quantity, geo.qty_x, text_y, BODY_SIZE, WHITE, TextAlign::Right);
    c.text(labels.rate, geo.rate_x, text_y, BODY_SIZE, WHITE, TextAlign::Right);
    c.text(labels.amount, geo.amount_x, text_y, BODY_SIZE, WHITE, TextAlign::Right);
    c.cursor += HEADER_BAND_HEIGHT + 1.5;
}

/// The line-item table: header band, then one row per item. A row that
/// does not fit the remaining page height starts a new page and the header
/// band is printed again before rows continue.
fn items_table(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    header: &InvoiceHeaderFields,
    items: &[LineItem],
) {
    let geo = table_geometry(&c.page);
    // Keep the header attached to at least one row.
    c.ensure_room(HEADER_BAND_HEIGHT + 1.5 + ROW_HEIGHT);
    table_header(c, presentation, labels, &geo);

    for item in items {
        if !c.fits(ROW_HEIGHT) {
            c.break_page();
            table_header(c, presentation, labels, &geo);
        }
        let y = c.cursor + 0.8;
        c.text(
            truncate_to(&item.description, geo.desc_width, BODY_SIZE),
            geo.desc_x + 1.5,
            y,
            BODY_SIZE,
            presentation.text_color,
            TextAlign::Left,
        );
        c.text(
            format_quantity(item.quantity),
            geo.qty_x,
            y,
            BODY_SIZE,
            presentation.text_color,
            TextAlign::Right,
        );
        c.text(
            format_amount(&header.currency, item.rate),
            geo.rate_x,
            y,
            BODY_SIZE,
            presentation.text_color,
            TextAlign::Right,
        );
        c.text(
            format_amount(&header.currency, item.amount),
            geo.amount_x,
            y,
            BODY_SIZE,
            presentation.text_color,
            TextAlign::Right,
        );
        c.cursor += ROW_HEIGHT;
        c.push(DrawInstruction::Rule {
            x1: c.page.content_left(),
            y1: c.cursor - 0.8,
            x2: c.page.content_right(),
            y2: c.cursor - 0.8,
            color: Color::gray(0xe1),
            width: 0.2,
        });
    }
    c.cursor += 2.0;
}

fn totals_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    header: &InvoiceHeaderFields,
    totals: &Totals,
) {
    let label_x = c.page.content_right() - 64.0;
    let value_x = c.page.content_right();
    let block_height =
        2.0 * (line_height(BODY_SIZE) + 0.5) + 2.5 + line_height(TOTAL_SIZE) + BLOCK_GAP;
    c.ensure_room(block_height);

    let mut row = |c: &mut Composer, label: String, value: String, size: f32, color: Color| {
        let y = c.cursor;
        c.text(label, label_x, y, size, color, TextAlign::Left);
        c.text(value, value_x, y, size, color, TextAlign::Right);
        c.cursor += line_height(size) + 0.5;
    };

    row(
        c,
        labels.subtotal.to_string(),
        format_amount(&header.currency, totals.subtotal),
        BODY_SIZE,
        presentation.text_color,
    );
    row(
        c,
        format!("{} ({:.1}%)", labels.tax, header.tax_rate),
        format_amount(&header.currency, totals.tax_amount),
        BODY_SIZE,
        presentation.text_color,
    );
    c.push(DrawInstruction::Rule {
        x1: label_x,
        y1: c.cursor,
        x2: value_x,
        y2: c.cursor,
        color: presentation.secondary_color,
        width: 0.4,
    });
    c.cursor += 2.5;
    row(
        c,
        labels.total.to_string(),
        format_amount(&header.currency, totals.total),
        TOTAL_SIZE,
        presentation.primary_color,
    );
    c.cursor += BLOCK_GAP - 0.5;
}

fn payment_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    customer: &CustomerRecord,
) {
    let Some(method) = &customer.payment_method else {
        return;
    };
    let line = method.display_line();
    if line.is_empty() {
        return;
    }
    c.ensure_room(line_height(LABEL_SIZE) + line_height(BODY_SIZE) + BLOCK_GAP);
    c.line(
        labels.payment_method,
        c.page.content_left(),
        LABEL_SIZE,
        presentation.secondary_color,
        TextAlign::Left,
    );
    c.line(
        line,
        c.page.content_left(),
        BODY_SIZE,
        presentation.text_color,
        TextAlign::Left,
    );
    c.cursor += BLOCK_GAP;
}

fn notes_block(
    c: &mut Composer,
    presentation: &ResolvedPresentation,
    labels: &Labels,
    header: &InvoiceHeaderFields,
) {
    let Some(notes) = header.notes.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return;
    };
    let lines = wrap_text(notes, c.page.content_width(), BODY_SIZE);
    c.ensure_room(line_height(LABEL_SIZE) + lines.len() as f32 * line_height(BODY_SIZE));
    c.line(
        labels.notes,
        c.page.content_left(),
        LABEL_SIZE,
        presentation.secondary_color,
        TextAlign::Left,
    );
    for line in lines {
        c.line(
            line,
            c.page.content_left(),
            BODY_SIZE,
            presentation.text_color,
            TextAlign::Left,
        );
    }
}
