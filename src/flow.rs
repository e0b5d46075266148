//! # Page Flow
//!
//! The pagination state machine. A document is an ordered list of page
//! items streamed into fixed-size pages in a single forward pass:
//!
//! 1. Header and footer nodes (if any) are initialized once against the
//!    margin-adjusted page size — they do not repaginate.
//! 2. A page opens: the header is drawn at the top, the footer is pinned to
//!    the bottom, and the body area in between is what content flows into.
//! 3. Each item is placed in order. A content item that does not fit the
//!    remaining body height finalizes the page and opens a fresh one before
//!    drawing. Indentation shifts the cursor and narrows the line, and
//!    survives page breaks. A vertical space that does not fit becomes the
//!    page break itself rather than being drawn short.
//! 4. After the last item the open page is finalized and the header and
//!    footer are destroyed.
//!
//! There is no backtracking: a single content item is never split across
//! two pages. An item taller than a full fresh body errors out
//! ([`FolioError::ContentTooTall`]) instead of drawing past the page edge.

use crate::cursor::Cursor;
use crate::error::FolioError;
use crate::layout::LayoutNode;
use crate::model::{PageConfig, Size};
use crate::surface::PageSink;
use crate::text::TextShaper;

/// A top-level instruction consumed by the flow controller.
#[derive(Debug)]
pub enum PageItem {
    /// A node to place at the current position, optionally capped on either
    /// axis before the remaining space clamps it.
    Content {
        node: LayoutNode,
        width: Option<u32>,
        height: Option<u32>,
    },
    /// Shift the left cursor edge by `left` and narrow the available width
    /// by `left + right`. Cumulative; negative values undo earlier shifts.
    Indentation { left: i32, right: i32 },
    /// Advance the cursor vertically, or break to a new page when the
    /// space does not fit.
    VerticalSpace { height: u32 },
}

impl PageItem {
    /// Content with no explicit caps.
    pub fn content(node: impl Into<LayoutNode>) -> Self {
        PageItem::Content {
            node: node.into(),
            width: None,
            height: None,
        }
    }

    /// Content with optional width/height caps.
    pub fn content_capped(
        node: impl Into<LayoutNode>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Self {
        PageItem::Content {
            node: node.into(),
            width,
            height,
        }
    }

    pub fn indentation(left: i32, right: i32) -> Self {
        PageItem::Indentation { left, right }
    }

    pub fn vertical_space(height: u32) -> Self {
        PageItem::VerticalSpace { height }
    }
}

/// Everything a document build needs: page geometry, the per-page chrome,
/// and the content stream.
#[derive(Debug)]
pub struct Document {
    pub page: PageConfig,
    pub header: Option<LayoutNode>,
    pub footer: Option<LayoutNode>,
    pub items: Vec<PageItem>,
}

impl Document {
    pub fn new(page: PageConfig) -> Self {
        Self {
            page,
            header: None,
            footer: None,
            items: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: impl Into<LayoutNode>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<LayoutNode>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn push(&mut self, item: PageItem) {
        self.items.push(item);
    }
}

/// Compose `document` into `sink`, returning the total page count.
///
/// This is the single entry point of the engine: one eager, synchronous
/// pass with no retries. Any error aborts the build with the sink left
/// holding whatever pages were already finished.
pub fn compose<K: PageSink>(
    document: Document,
    shaper: &dyn TextShaper,
    sink: &mut K,
) -> Result<u32, FolioError> {
    let Document {
        page,
        header,
        footer,
        items,
    } = document;

    let flow = PageFlow {
        sink,
        shaper,
        page,
        header,
        footer,
        page_no: 0,
        remaining_width: i64::from(page.content_width()),
        remaining_height: 0,
        body_height: 0,
    };
    flow.run(items)
}

/// Mutable page-geometry state for one build pass.
struct PageFlow<'a, K: PageSink> {
    sink: &'a mut K,
    shaper: &'a dyn TextShaper,
    page: PageConfig,
    header: Option<LayoutNode>,
    footer: Option<LayoutNode>,
    /// Current page index, 1-based once the first page opens.
    page_no: u32,
    /// Width still available to content; signed so indentation can
    /// temporarily overshoot and be undone.
    remaining_width: i64,
    /// Height still available on the current page's body.
    remaining_height: u32,
    /// Full body height of a fresh page (post header/footer).
    body_height: u32,
}

impl<K: PageSink> PageFlow<'_, K> {
    fn run(mut self, items: Vec<PageItem>) -> Result<u32, FolioError> {
        let full = Size::new(self.page.content_width(), self.page.content_height());
        if let Some(header) = &mut self.header {
            header.init(full, self.shaper)?;
        }
        if let Some(footer) = &mut self.footer {
            footer.init(full, self.shaper)?;
        }

        let mut cursor = self.start_page(None)?;

        for item in items {
            match item {
                PageItem::Content {
                    mut node,
                    width,
                    height,
                } => {
                    let available_width = match width {
                        Some(cap) => cap.min(self.content_width()),
                        None => self.content_width(),
                    };
                    let available_height = match height {
                        Some(cap) => cap.min(self.body_height),
                        None => self.body_height,
                    };
                    node.init(Size::new(available_width, available_height), self.shaper)?;

                    let content_height = node.measure_height()?;
                    if self.remaining_height < content_height {
                        cursor = self.start_page(Some(cursor))?;
                        if self.remaining_height < content_height {
                            return Err(FolioError::ContentTooTall {
                                required: content_height,
                                available: self.remaining_height,
                            });
                        }
                    }

                    cursor.push();
                    node.draw(&mut cursor, false, true)?;
                    node.destroy()?;
                    cursor.pop();

                    cursor.translate(0.0, f64::from(content_height));
                    self.remaining_height -= content_height;
                }

                PageItem::Indentation { left, right } => {
                    cursor.translate(f64::from(left), 0.0);
                    self.remaining_width -= i64::from(left) + i64::from(right);
                }

                PageItem::VerticalSpace { height } => {
                    if self.remaining_height < height {
                        // The space becomes the break itself; nothing is
                        // carried onto the new page.
                        cursor = self.start_page(Some(cursor))?;
                    } else {
                        cursor.translate(0.0, f64::from(height));
                        self.remaining_height -= height;
                    }
                }
            }
        }

        self.sink.finish_page(cursor.into_surface());
        if let Some(header) = &mut self.header {
            header.destroy()?;
        }
        if let Some(footer) = &mut self.footer {
            footer.destroy()?;
        }
        Ok(self.page_no)
    }

    /// Finalize `prev` (if any) and open the next page: draw the chrome,
    /// reserve its height, and leave the cursor at the body's top-left —
    /// preserving the horizontal indentation across the break.
    fn start_page(
        &mut self,
        prev: Option<Cursor<K::Surface>>,
    ) -> Result<Cursor<K::Surface>, FolioError> {
        let margin = self.page.margin;
        let initial_x = match &prev {
            Some(cursor) => cursor.x(),
            None => f64::from(margin.left),
        };
        if let Some(cursor) = prev {
            self.sink.finish_page(cursor.into_surface());
        }

        self.page_no += 1;
        let surface = self
            .sink
            .begin_page(self.page.width, self.page.height, self.page_no);
        let mut cursor = Cursor::new(surface);
        cursor.move_to(f64::from(margin.left), f64::from(margin.top));
        self.remaining_height = self.page.content_height();

        if let Some(header) = &mut self.header {
            header.draw(&mut cursor, false, true)?;
        }

        let footer_height = match &mut self.footer {
            Some(footer) => {
                let height = footer.measure_height()?;
                cursor.move_to(
                    f64::from(margin.left),
                    f64::from(margin.top) + f64::from(self.remaining_height)
                        - f64::from(height),
                );
                footer.draw(&mut cursor, false, true)?;
                height
            }
            None => 0,
        };
        let header_height = match &mut self.header {
            Some(header) => header.measure_height()?,
            None => 0,
        };

        self.remaining_height = self
            .remaining_height
            .saturating_sub(header_height + footer_height);
        cursor.move_to(initial_x, f64::from(margin.top + header_height));
        self.body_height = self.remaining_height;

        Ok(cursor)
    }

    /// Width currently available to content, clamped to non-negative.
    fn content_width(&self) -> u32 {
        self.remaining_width.clamp(0, i64::from(u32::MAX)) as u32
    }
}
