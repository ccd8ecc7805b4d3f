/// Column widths and glyphs of the text timeline.
///
/// The default is the compatibility layout: 18 label columns, an 82 column
/// bar including its two borders, and 8 duration columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub label_width: usize,
    pub bar_width: usize,
    pub duration_width: usize,
    pub fill: char,
    pub blank: char,
    pub border: char,
}

impl Layout {
    pub const LABEL_WIDTH: usize = 18;
    pub const BAR_WIDTH: usize = 82;
    pub const DURATION_WIDTH: usize = 8;
    /// Narrowest bar that still leaves one plotting cell between the borders.
    pub const MIN_BAR_WIDTH: usize = 3;

    /// Plotting cells between the two border characters.
    pub fn inner_width(&self) -> usize {
        self.bar_width.saturating_sub(2)
    }

    pub fn row_width(&self) -> usize {
        self.label_width + self.bar_width + self.duration_width
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            label_width: Self::LABEL_WIDTH,
            bar_width: Self::BAR_WIDTH,
            duration_width: Self::DURATION_WIDTH,
            fill: '#',
            blank: ' ',
            border: '|',
        }
    }
}
