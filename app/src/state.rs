/// Delay before the first link row starts its entrance transition.
pub const ROW_REVEAL_BASE_MS: u32 = 500;
/// Extra delay added per row so the rows reveal top to bottom.
pub const ROW_REVEAL_STEP_MS: u32 = 100;

/// Diameter of the pointer glow, in CSS pixels.
pub const GLOW_SIZE_PX: f64 = 600.0;

pub fn row_reveal_delay_ms(index: usize) -> u32 {
    ROW_REVEAL_BASE_MS + ROW_REVEAL_STEP_MS * index as u32
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Top-left corner of the glow such that the glow is centered on the
    /// pointer.
    pub fn glow_origin(&self) -> (f64, f64) {
        (self.x - GLOW_SIZE_PX / 2.0, self.y - GLOW_SIZE_PX / 2.0)
    }
}

/// Everything on the page that changes after the initial render.
///
/// All three slots reset on every page load, nothing here is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    loaded: bool,
    hovered: Option<usize>,
    pointer: PointerPosition,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-way latch, flipped once the page is live in the browser. The
    /// entrance transitions key off of it.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// `index` is the row's position in the link registry. At most one row
    /// is hovered at a time; entering a row while another is marked simply
    /// moves the mark.
    pub fn enter_row(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clears the hover mark, but only if it is still on `index`. A stale
    /// leave event for a row the pointer already moved away from must not
    /// clobber the newer mark.
    pub fn leave_row(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub fn set_pointer(&mut self, position: PointerPosition) {
        self.pointer = position;
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }
}
