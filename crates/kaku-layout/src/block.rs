//! A single kanji block: header row, stroke diagram, writing grid and the
//! optional dictionary block.

use kaku_config::StyleOptions;
use kaku_core::{DictionaryEntry, KanjiRecord};

use crate::canvas::{Align, Canvas, FontSpec};
use crate::engine::RenderContext;
use crate::frame::Frame;
use crate::geometry::{Metrics, Point, Rect, Rgb};
use crate::text;

/// Grid cells across the content area
pub const CONTENT_CELLS: usize = 12;

pub const DICTIONARY_COLUMNS: usize = 3;
pub const DICTIONARY_ROWS: usize = 3;

/// Grid cells from one dictionary column to the next
const DICTIONARY_COLUMN_CELLS: usize = 4;
/// Grid cells of text width in a dictionary column
const DICTIONARY_TEXT_CELLS: usize = 3;
const READING_CELLS: usize = 3;

const GLYPH_SIZE: f32 = 24.0;
const HEADER_SIZE: f32 = 12.0;
const DICTIONARY_SIZE: f32 = 8.0;

pub fn shows_dictionary(record: &KanjiRecord, style: &StyleOptions) -> bool {
    style.show_dictionary && record.has_dictionary()
}

/// Height of the dictionary block for `entries` entries
pub fn dictionary_height(entries: usize, metrics: &Metrics) -> f32 {
    let rows = entries.min(DICTIONARY_ROWS) as f32;
    rows * (2.0 * metrics.text_line() + metrics.padding()) + 2.0 * metrics.padding()
}

/// Vertical space a record's block takes, trailing gap included
pub fn block_height(record: &KanjiRecord, style: &StyleOptions, metrics: &Metrics) -> f32 {
    let base = if style.big_kanji {
        metrics.cells(4)
    } else {
        metrics.cells(3)
    };

    let dictionary = if shows_dictionary(record, style) {
        dictionary_height(record.dictionary_entries.len(), metrics)
    } else {
        0.0
    };

    base + metrics.spacer() + dictionary
}

/// Entries that make it onto the page, as columns of up to three
pub fn dictionary_columns(entries: &[DictionaryEntry]) -> Vec<&[DictionaryEntry]> {
    entries
        .chunks(DICTIONARY_ROWS)
        .take(DICTIONARY_COLUMNS)
        .collect()
}

/// Draw a block with its top-left corner at `origin`, returning the height used
pub fn render_block<C: Canvas + ?Sized>(
    canvas: &mut C,
    record: &KanjiRecord,
    origin: Point,
    metrics: &Metrics,
    ctx: &RenderContext<'_>,
) -> f32 {
    let style = &ctx.style;

    header_row(canvas, record, origin, metrics, ctx);

    let body = origin.offset(0.0, metrics.cell);
    stroke_cell(canvas, record, body, metrics, ctx);
    writing_grid(canvas, body.offset(metrics.cells(style.stroke_cells()), 0.0), metrics, style);

    let mut height = metrics.cell + metrics.cells(style.write_rows());

    if shows_dictionary(record, style) {
        let top = origin.offset(0.0, height);
        height += dictionary_block(canvas, &record.dictionary_entries, top, metrics);
    }

    height + metrics.spacer()
}

fn header_row<C: Canvas + ?Sized>(
    canvas: &mut C,
    record: &KanjiRecord,
    origin: Point,
    metrics: &Metrics,
    ctx: &RenderContext<'_>,
) {
    let mut x = origin.x;

    let meaning_cells = if ctx.style.show_kanji {
        let cell = Rect::new(x, origin.y, metrics.cell, metrics.cell);
        canvas.stroke_rect(cell, Rgb::BLACK);
        canvas.text(cell, &record.symbol, FontSpec::regular(GLYPH_SIZE), Align::Center);
        x += metrics.cell;
        5
    } else {
        6
    };

    let meaning = Rect::new(x, origin.y, metrics.cells(meaning_cells), metrics.cell);
    canvas.stroke_rect(meaning, Rgb::BLACK);
    let font = FontSpec::bold(HEADER_SIZE);
    let lines = text::wrap_clamped(
        &*canvas,
        &text::meaning_text(&record.meanings),
        font,
        meaning.width - 2.0 * metrics.padding(),
        2,
    );
    centered_lines(canvas, meaning, &lines, font, metrics.cell / 2.0);
    x += meaning.width;

    for readings in [&record.on_readings, &record.kun_readings] {
        let cell = Rect::new(x, origin.y, metrics.cells(READING_CELLS), metrics.cell);
        reading_cell(canvas, cell, readings, metrics, ctx);
        x += cell.width;
    }
}

fn reading_cell<C: Canvas + ?Sized>(
    canvas: &mut C,
    cell: Rect,
    readings: &[String],
    metrics: &Metrics,
    ctx: &RenderContext<'_>,
) {
    canvas.stroke_rect(cell, Rgb::BLACK);

    let lines = text::reading_lines(readings, ctx.style.show_romaji, ctx.romanizer);
    let line_height = metrics.cell / 2.0;
    let top = cell.y + (cell.height - line_height * lines.len() as f32) / 2.0;
    let width = cell.width - 2.0 * metrics.padding();

    for (i, line) in lines.iter().enumerate() {
        let font = text::fit_font(&*canvas, line, FontSpec::bold(HEADER_SIZE), width);
        let bbox = Rect::new(cell.x, top + line_height * i as f32, cell.width, line_height);
        canvas.text(bbox, line, font, Align::Center);
    }
}

/// Draw lines of equal height as a vertically centred stack
fn centered_lines<C: Canvas + ?Sized>(
    canvas: &mut C,
    cell: Rect,
    lines: &[String],
    font: FontSpec,
    line_height: f32,
) {
    let top = cell.y + (cell.height - line_height * lines.len() as f32) / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let bbox = Rect::new(cell.x, top + line_height * i as f32, cell.width, line_height);
        canvas.text(bbox, line, font, Align::Center);
    }
}

fn stroke_cell<C: Canvas + ?Sized>(
    canvas: &mut C,
    record: &KanjiRecord,
    origin: Point,
    metrics: &Metrics,
    ctx: &RenderContext<'_>,
) {
    let side = metrics.cells(ctx.style.stroke_cells());
    let cell = Rect::new(origin.x, origin.y, side, side);
    canvas.stroke_rect(cell, Rgb::BLACK);

    let path = ctx.assets.stroke_path(&record.stroke_diagram_file());
    if !path.exists() {
        tracing::debug!("No stroke diagram for {} at {}", record.symbol, path.display());
        return;
    }

    if let Err(e) = canvas.image(&path, cell) {
        tracing::warn!("Skipping stroke diagram for {}: {}", record.symbol, e);
    }
}

fn writing_grid<C: Canvas + ?Sized>(
    canvas: &mut C,
    origin: Point,
    metrics: &Metrics,
    style: &StyleOptions,
) {
    let side = metrics.cell;

    for row in 0..style.write_rows() {
        for col in 0..style.write_cells_per_row() {
            let cell = Rect::new(
                origin.x + side * col as f32,
                origin.y + side * row as f32,
                side,
                side,
            );

            if style.cross_guide {
                let mid = cell.center();
                canvas.line(Point::new(cell.x, mid.y), Point::new(cell.right(), mid.y), Rgb::GUIDE);
                canvas.line(Point::new(mid.x, cell.y), Point::new(mid.x, cell.bottom()), Rgb::GUIDE);
            }

            canvas.stroke_rect(cell, Rgb::BLACK);
        }
    }
}

/// Bordered dictionary rectangle with entries laid out column by column.
/// Returns the rectangle height, which depends only on the entry count.
fn dictionary_block<C: Canvas + ?Sized>(
    canvas: &mut C,
    entries: &[DictionaryEntry],
    origin: Point,
    metrics: &Metrics,
) -> f32 {
    let height = dictionary_height(entries.len(), metrics);
    let frame = Frame::new(Rect::new(origin.x, origin.y, metrics.cells(CONTENT_CELLS), height));
    canvas.stroke_rect(frame.rect(), Rgb::BLACK);

    let pad = metrics.padding();
    let line = metrics.text_line();
    let text_width = metrics.cells(DICTIONARY_TEXT_CELLS);
    let word_font = FontSpec::bold(DICTIONARY_SIZE);
    let gloss_font = FontSpec::regular(DICTIONARY_SIZE);

    for (i, column) in dictionary_columns(entries).into_iter().enumerate() {
        let column_frame = frame.child(
            metrics.cells(DICTIONARY_COLUMN_CELLS * i),
            0.0,
            metrics.cells(DICTIONARY_COLUMN_CELLS),
            height,
        );

        let mut dy = pad;
        for entry in column {
            let word = text::truncate_to_width(&*canvas, &entry.word, word_font, text_width);
            canvas.text(column_frame.region(pad, dy, text_width, line), &word, word_font, Align::Left);

            let glosses = text::truncate_to_width(
                &*canvas,
                &entry.translations.join("; "),
                gloss_font,
                text_width,
            );
            canvas.text(
                column_frame.region(pad, dy + line, text_width, line),
                &glosses,
                gloss_font,
                Align::Left,
            );

            dy += 2.0 * line + pad;
        }
    }

    height
}
