//! Fixed page geometry and the vertical cursor used to paginate sections.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner, so
//! the cursor starts at the top margin and moves down.

/// A4 portrait width.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 portrait height.
pub const PAGE_HEIGHT: f32 = 842.0;
/// Margin on every side of the page.
pub const MARGIN: f32 = 50.0;
/// Horizontal space available to text.
pub const USABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// One of the two built-in faces registered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub line_height: f32,
}

pub const HEADING: TextStyle = TextStyle { face: FontFace::Bold, size: 18.0, line_height: 24.0 };
pub const PARAGRAPH: TextStyle = TextStyle { face: FontFace::Regular, size: 12.0, line_height: 16.0 };
pub const TABLE_HEADER: TextStyle = TextStyle { face: FontFace::Bold, size: 10.0, line_height: 14.0 };
pub const TABLE_ROW: TextStyle = TextStyle { face: FontFace::Regular, size: 10.0, line_height: 14.0 };

/// Left edge of column `index` in a table of `count` equal-width columns.
pub fn column_x(index: usize, count: usize) -> f32 {
    let width = USABLE_WIDTH / count.max(1) as f32;
    MARGIN + index as f32 * width
}

/// Top of the next line on the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::top()
    }
}

impl PageCursor {
    pub fn top() -> Self {
        Self { y: PAGE_HEIGHT - MARGIN }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Whether a line of `style` still ends above the bottom margin.
    pub fn fits(&self, style: &TextStyle) -> bool {
        self.y - style.line_height >= MARGIN
    }

    /// Baseline for a line of `style` drawn at the cursor.
    pub fn baseline(&self, style: &TextStyle) -> f32 {
        self.y - style.size
    }

    pub fn advance(&mut self, style: &TextStyle) {
        self.y -= style.line_height;
    }
}
