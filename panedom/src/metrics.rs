//! One-time measurement of the host's builtin scrollbar gutter.
//!
//! Hosts reserve a gutter for their builtin scrollbars; overlay scrollbars
//! need its exact size to slide the builtin bar out of the visible area.
//! The measurement is taken once per process from a probe pane and reused by
//! every scrollable built afterwards.

use std::sync::OnceLock;

static GLOBAL: OnceLock<ScrollbarMetrics> = OnceLock::new();

/// Measurement source: a throwaway pane styled with and without the
/// gutter-suppression variant.
pub trait GutterProbe {
    /// Outer `(width, height)` of the probe pane.
    fn outer_size(&self, suppressed: bool) -> (u16, u16);
    /// Client `(width, height)` — the outer size minus any builtin
    /// scrollbar gutter.
    fn client_size(&self, suppressed: bool) -> (u16, u16);
}

/// Builtin scrollbar gutter sizes for the current host.
///
/// The `*_optimized` variants are measured with the host's
/// gutter-suppression styling applied; a zero there means the host already
/// overlays its scrollbars and no compensation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollbarMetrics {
    pub vertical: u16,
    pub horizontal: u16,
    pub vertical_optimized: u16,
    pub horizontal_optimized: u16,
}

impl ScrollbarMetrics {
    /// Measure the gutter sizes from a probe pane.
    pub fn measure(probe: &dyn GutterProbe) -> Self {
        let (outer_w, outer_h) = probe.outer_size(false);
        let (client_w, client_h) = probe.client_size(false);
        let (opt_outer_w, opt_outer_h) = probe.outer_size(true);
        let (opt_client_w, opt_client_h) = probe.client_size(true);

        Self {
            vertical: outer_w.saturating_sub(client_w),
            horizontal: outer_h.saturating_sub(client_h),
            vertical_optimized: opt_outer_w.saturating_sub(opt_client_w),
            horizontal_optimized: opt_outer_h.saturating_sub(opt_client_h),
        }
    }

    /// Install the process-wide metrics. The first call wins; later calls
    /// return the already-installed value.
    pub fn init_global(self) -> &'static Self {
        GLOBAL.get_or_init(|| self)
    }

    /// The process-wide metrics, if [`Self::init_global`] has run.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}
