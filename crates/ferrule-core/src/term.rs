//! ANSI terminal escape sequences.
//!
//! Plain sequences are exposed as `&str` constants. Parameterised sequences
//! (graphics, cursor movement, window title) are written through
//! [`fmt::Write`], so they compose into any writer without allocating,
//! including a fixed-capacity string builder.
//!
//! A graphics sequence and a cursor sequence cannot share one escape; write
//! them separately.

use std::fmt::{self, Write};

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Resets every graphic rendition attribute.
pub const GRAPHICS_RESET: &str = "\x1b[0m";

/// Switch to the alternate screen buffer.
pub const ALT_BUFFER_ENABLE: &str = "\x1b[?1049h";
/// Return to the main screen buffer.
pub const ALT_BUFFER_DISABLE: &str = "\x1b[?1049l";

/// Clear from the cursor to the end of the screen.
pub const CLEAR_AFTER_CURSOR: &str = "\x1b[0J";
/// Clear from the start of the screen to the cursor.
pub const CLEAR_BEFORE_CURSOR: &str = "\x1b[1J";
/// Clear the whole screen.
pub const CLEAR: &str = "\x1b[2J";

/// Clear from the cursor to the end of the line.
pub const CLEAR_LINE_AFTER_CURSOR: &str = "\x1b[0K";
/// Clear from the start of the line to the cursor.
pub const CLEAR_LINE_BEFORE_CURSOR: &str = "\x1b[1K";
/// Clear the whole line.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Move the cursor to line 1, column 1.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Move the cursor up one line, scrolling if at the top.
pub const CURSOR_UP_SCROLL: &str = "\x1bM";
/// Save the cursor position.
pub const CURSOR_SAVE: &str = "\x1b7";
/// Restore the saved cursor position.
pub const CURSOR_RESTORE: &str = "\x1b8";
/// Hide the cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";
/// Show the cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// A terminal colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Palette colour 0.
    Black,
    /// Palette colour 1.
    Red,
    /// Palette colour 2.
    Green,
    /// Palette colour 3.
    Yellow,
    /// Palette colour 4.
    Blue,
    /// Palette colour 5.
    Magenta,
    /// Palette colour 6.
    Cyan,
    /// Palette colour 7.
    White,
    /// The terminal's default colour.
    Default,
    /// 24-bit colour.
    Rgb(u8, u8, u8),
    /// Entry of the 256-colour palette.
    Palette(u8),
}

impl Color {
    /// Write the colour parameters, `base` being 30 (foreground) or 40 (background).
    fn write_params<W: Write>(self, w: &mut W, base: u8) -> fmt::Result {
        let basic = |offset: u8| base + offset;
        match self {
            Self::Black => write!(w, "{}", basic(0)),
            Self::Red => write!(w, "{}", basic(1)),
            Self::Green => write!(w, "{}", basic(2)),
            Self::Yellow => write!(w, "{}", basic(3)),
            Self::Blue => write!(w, "{}", basic(4)),
            Self::Magenta => write!(w, "{}", basic(5)),
            Self::Cyan => write!(w, "{}", basic(6)),
            Self::White => write!(w, "{}", basic(7)),
            Self::Default => write!(w, "{}", basic(9)),
            Self::Rgb(r, g, b) => write!(w, "{};2;{r};{g};{b}", basic(8)),
            Self::Palette(code) => write!(w, "{};5;{code}", basic(8)),
        }
    }
}

/// One select-graphic-rendition attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Graphic {
    /// Reset to defaults.
    Default,
    /// Bold.
    Bold,
    /// Dim.
    Dim,
    /// Italic.
    Italic,
    /// Underline.
    Underline,
    /// Blinking.
    Blinking,
    /// Swap foreground and background.
    Inverse,
    /// Hidden.
    Hidden,
    /// Strikethrough.
    Strikethrough,
    /// Cancel bold.
    NoBold,
    /// Cancel dim.
    NoDim,
    /// Cancel italic.
    NoItalic,
    /// Cancel underline.
    NoUnderline,
    /// Cancel blinking.
    NoBlinking,
    /// Cancel inverse.
    NoInverse,
    /// Cancel hidden.
    NoHidden,
    /// Cancel strikethrough.
    NoStrikethrough,
    /// Foreground colour.
    Fg(Color),
    /// Background colour.
    Bg(Color),
}

impl Graphic {
    fn write_params<W: Write>(self, w: &mut W) -> fmt::Result {
        let code = match self {
            Self::Default => 0,
            Self::Bold => 1,
            Self::Dim => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blinking => 5,
            Self::Inverse => 7,
            Self::Hidden => 8,
            Self::Strikethrough => 9,
            Self::NoBold => 21,
            Self::NoDim => 22,
            Self::NoItalic => 23,
            Self::NoUnderline => 24,
            Self::NoBlinking => 25,
            Self::NoInverse => 27,
            Self::NoHidden => 28,
            Self::NoStrikethrough => 29,
            Self::Fg(color) => return color.write_params(w, 30),
            Self::Bg(color) => return color.write_params(w, 40),
        };
        write!(w, "{code}")
    }
}

/// Write one graphics escape setting every attribute in `graphics`.
///
/// An empty list writes `ESC [ m`, which terminals treat as a reset.
pub fn write_graphics<W: Write>(w: &mut W, graphics: &[Graphic]) -> fmt::Result {
    w.write_str(CSI)?;
    for (i, graphic) in graphics.iter().enumerate() {
        if i > 0 {
            w.write_char(';')?;
        }
        graphic.write_params(w)?;
    }
    w.write_char('m')
}

/// Write `text` wrapped in `graphics`, followed by a reset.
pub fn write_styled<W: Write>(w: &mut W, graphics: &[Graphic], text: &str) -> fmt::Result {
    write_graphics(w, graphics)?;
    w.write_str(text)?;
    w.write_str(GRAPHICS_RESET)
}

/// Move the cursor to a 1-based `line` and `column`.
pub fn cursor_to<W: Write>(w: &mut W, line: u32, column: u32) -> fmt::Result {
    write!(w, "{CSI}{line};{column}H")
}

/// Move the cursor up `n` lines.
pub fn cursor_up<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}A")
}

/// Move the cursor down `n` lines.
pub fn cursor_down<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}B")
}

/// Move the cursor right `n` columns.
pub fn cursor_right<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}C")
}

/// Move the cursor left `n` columns.
pub fn cursor_left<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}D")
}

/// Move the cursor to the start of the line `n` lines down.
pub fn cursor_down_home<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}E")
}

/// Move the cursor to the start of the line `n` lines up.
pub fn cursor_up_home<W: Write>(w: &mut W, n: u32) -> fmt::Result {
    write!(w, "{CSI}{n}F")
}

/// Move the cursor to a 1-based `column` on the current line.
pub fn cursor_column<W: Write>(w: &mut W, column: u32) -> fmt::Result {
    write!(w, "{CSI}{column}G")
}

/// Set the terminal window title.
pub fn window_title<W: Write>(w: &mut W, title: &str) -> fmt::Result {
    write!(w, "\x1b]0;{title}\x07")
}
