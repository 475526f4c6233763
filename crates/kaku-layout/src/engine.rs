use kaku_config::StyleOptions;
use kaku_config::assets::AssetConfig;
use kaku_core::{KanjiRecord, Romanizer};

use crate::block;
use crate::canvas::Canvas;
use crate::geometry::Metrics;

/// Everything fixed for one document run
pub struct RenderContext<'a> {
    pub style: StyleOptions,
    pub assets: &'a AssetConfig,
    pub romanizer: &'a dyn Romanizer,
}

/// Where a block ended up
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub symbol: String,
    /// Zero-based page index
    pub page: usize,
    /// Offset from the top of the content area
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub pages: usize,
    pub placements: Vec<Placement>,
}

/// Slot handed out by the [`Pager`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub page: usize,
    pub top: f32,
    /// The slot opened a new page
    pub new_page: bool,
}

/// Tracks remaining vertical space and decides page breaks
#[derive(Debug, Clone)]
pub struct Pager {
    usable: f32,
    remaining: f32,
    page: usize,
}

impl Pager {
    pub fn new(usable: f32) -> Self {
        Self {
            usable,
            remaining: usable,
            page: 0,
        }
    }

    /// Reserve `height` on the current page, breaking first if it does not fit.
    /// A page that is still empty is never left blank, even for oversized blocks.
    pub fn place(&mut self, height: f32) -> Slot {
        let new_page = self.remaining < height && self.remaining < self.usable;
        if new_page {
            self.page += 1;
            self.remaining = self.usable;
        }

        let top = self.usable - self.remaining;
        self.remaining -= height;

        Slot {
            page: self.page,
            top,
            new_page,
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }
}

/// Lay out every record in order, starting a new page whenever the next block
/// does not fit in what is left of the current one
pub fn render_document<C: Canvas + ?Sized>(
    canvas: &mut C,
    records: &[KanjiRecord],
    ctx: &RenderContext<'_>,
) -> LayoutSummary {
    let metrics = Metrics::for_page(canvas.page_size());
    let mut pager = Pager::new(metrics.usable_height);
    let mut placements = Vec::with_capacity(records.len());

    canvas.add_page();

    for record in records {
        let height = block::block_height(record, &ctx.style, &metrics);
        let slot = pager.place(height);
        if slot.new_page {
            tracing::debug!("Starting page {} at {}", slot.page + 1, record.symbol);
            canvas.add_page();
        }

        let origin = metrics.content_origin().offset(0.0, slot.top);
        let used = block::render_block(canvas, record, origin, &metrics, ctx);
        debug_assert!((used - height).abs() < 1e-3, "block height drifted");

        placements.push(Placement {
            symbol: record.symbol.clone(),
            page: slot.page,
            top: slot.top,
            height,
        });
    }

    tracing::info!(
        "Laid out {} kanji on {} page(s)",
        records.len(),
        pager.page_count()
    );

    LayoutSummary {
        pages: pager.page_count(),
        placements,
    }
}
