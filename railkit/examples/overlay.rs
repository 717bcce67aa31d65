//! Interactive overlay-scrollbar demo.
//!
//! Runs a generated document inside a natively scrolling pane with the
//! synthetic scrollbar drawn down the right edge. Wheel to scroll, drag the
//! thumb, press the bare track to step towards the cursor, q or Esc to quit.

use std::fs::File;
use std::io::{Write, stdout};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, EventStream, KeyCode,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue, style};
use futures::StreamExt;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use railkit::prelude::*;

/// Raw-mode guard; restores the terminal on drop even when the loop errors.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

/// This demo's host reserves one column for its builtin scrollbar and can
/// slide it out of view by the same amount.
struct DemoProbe;

impl GutterProbe for DemoProbe {
    fn outer_size(&self, _suppressed: bool) -> (u16, u16) {
        (40, 12)
    }

    fn client_size(&self, _suppressed: bool) -> (u16, u16) {
        (39, 12)
    }
}

fn document() -> Vec<ContentBlock> {
    (1..=120)
        .map(|line| ContentBlock::new(format!("line-{line}"), 1))
        .collect()
}

fn viewport_rect(width: u16, height: u16) -> Rect {
    // Leave a status row at the bottom and the overlay column at the right.
    Rect::new(1, 1, width.saturating_sub(3), height.saturating_sub(3))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let log_file = File::create("overlay.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("failed to initialize logger");

    let metrics = ScrollbarMetrics::measure(&DemoProbe);
    ScrollbarMetrics::init_global(metrics);

    let (width, height) = crossterm::terminal::size()?;
    let viewport = Pane::with_rect("demo-viewport", viewport_rect(width, height));
    let root = Pane::with_rect("demo", Rect::from_size(width, height));
    let content = Pane::new("demo-content");

    let track_rect = track_rect_for(viewport.rect());
    let track = Pane::with_rect("demo-track", track_rect);
    let thumb = Pane::with_rect("demo-thumb", Rect::new(0, 0, 1, 0));
    let scroll = Scroll::new(Vertical, Pane::new("demo-scroll"), track, thumb, ScrollConfig::default());

    let host = ScrollPane::new(viewport.rect());
    let scrollable = ScrollableBuilder::new(root, viewport.clone(), content, host)
        .vertical(scroll.clone())
        .build()
        .expect("demo scrollable should build");
    scrollable.set_content(document());
    info!("demo started at {width}x{height}");

    let _guard = TerminalGuard::new()?;
    let mut events = EventStream::new();

    render(&scrollable, &scroll)?;
    loop {
        let Some(Ok(event)) = events.next().await else {
            break;
        };

        match event {
            CrosstermEvent::Key(key) => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
            CrosstermEvent::Resize(new_width, new_height) => {
                scrollable.viewport().set_rect(viewport_rect(new_width, new_height));
                scroll.track().set_rect(track_rect_for(scrollable.viewport().rect()));
                scrollable.handle_resize();
            }
            CrosstermEvent::Mouse(mouse) => {
                if let Some(pointer) = PointerEvent::from_mouse(&mouse) {
                    let result = scrollable.handle_pointer(&pointer);
                    // Wheel ticks over the content also reach the pane when
                    // the overlay did not claim them.
                    if result == EventResult::Ignored {
                        if let PointerKind::Wheel(delta) = pointer.kind {
                            let top = scrollable.host().scroll_top() as i32 + delta as i32 * 3;
                            scrollable.host().set_scroll_top(top.max(0) as u16);
                        }
                    }
                }
            }
            _ => {}
        }

        render(&scrollable, &scroll)?;
    }

    Ok(())
}

fn track_rect_for(viewport: Rect) -> Rect {
    Rect::new(viewport.right() + 1, viewport.y, 1, viewport.height)
}

fn render(scrollable: &Scrollable, scroll: &VerticalScroll) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    let viewport = scrollable.viewport().rect();
    let top = scrollable.host().scroll_top();

    // Visible slice of the document.
    for row in 0..viewport.height {
        let line = top as u32 + row as u32 + 1;
        queue!(
            out,
            cursor::MoveTo(viewport.x, viewport.y + row),
            style::Print(format!("line {line} of 120"))
        )?;
    }

    // Overlay track and thumb.
    if scroll.root().has_flag("active") {
        let track = scroll.track().rect();
        let thumb = scroll.thumb_rect();
        for row in 0..track.height {
            let y = track.y + row;
            let glyph = if y >= thumb.y && y < thumb.bottom() {
                "█"
            } else {
                "░"
            };
            queue!(out, cursor::MoveTo(track.x, y), style::Print(glyph))?;
        }
    }

    let status = if scroll.root().has_flag("dragging") {
        "dragging"
    } else if scrollable.content().has_flag("scrolling") {
        "scrolling"
    } else {
        "wheel / drag thumb / press track; q quits"
    };
    queue!(
        out,
        cursor::MoveTo(viewport.x, viewport.bottom() + 1),
        style::Print(format!("offset {top:>4}  {status}"))
    )?;

    out.flush()
}
