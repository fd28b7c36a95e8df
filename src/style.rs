//! Style Resolver
//!
//! Sparse, attribute-keyed style descriptions that inherit from built-in
//! defaults, plus border kinds resolved to concrete glyph sets.
//!
//! The same resolved [`StyleSpec`] drives both output paths: it converts to a
//! ratatui [`Style`] for the interactive table and to a crossterm
//! [`ContentStyle`] for static ANSI output.

use clap::ValueEnum;
use crossterm::style::{Attribute, Color as AnsiColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::{border, line};

// ─────────────────────────────────────────────────────────────────────────────
// Padding
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal cell padding, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

impl Padding {
    pub const fn horizontal(n: usize) -> Self {
        Self { left: n, right: n }
    }

    pub fn total(&self) -> usize {
        self.left + self.right
    }
}

impl std::str::FromStr for Padding {
    type Err = String;

    /// CSS order: `"all"`, `"vertical horizontal"` or `"top right bottom left"`.
    /// Vertical components are parsed but table rows are single-line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(|p| p.parse::<usize>().map_err(|_| format!("invalid padding value '{}'", p)))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [all] => Ok(Padding::horizontal(*all)),
            [_, h] => Ok(Padding::horizontal(*h)),
            [_, right, _, left] => Ok(Padding {
                left: *left,
                right: *right,
            }),
            _ => Err(format!("padding takes 1, 2 or 4 values, got '{}'", s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style spec
// ─────────────────────────────────────────────────────────────────────────────

/// Style description with every attribute independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSpec {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: Option<bool>,
    pub faint: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub padding: Option<Padding>,
}

impl StyleSpec {
    /// Overlay `overrides` onto `self`: each attribute resolves to the
    /// override when present, otherwise to the value in `self`.
    pub fn inherit(&self, overrides: &StyleSpec) -> StyleSpec {
        StyleSpec {
            foreground: overrides.foreground.or(self.foreground),
            background: overrides.background.or(self.background),
            bold: overrides.bold.or(self.bold),
            faint: overrides.faint.or(self.faint),
            italic: overrides.italic.or(self.italic),
            underline: overrides.underline.or(self.underline),
            padding: overrides.padding.or(self.padding),
        }
    }

    pub fn padding(&self) -> Padding {
        self.padding.unwrap_or_default()
    }

    fn modifiers(&self) -> Modifier {
        let mut m = Modifier::empty();
        for (on, flag) in [
            (self.bold, Modifier::BOLD),
            (self.faint, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underline, Modifier::UNDERLINED),
        ] {
            if on == Some(true) {
                m |= flag;
            }
        }
        m
    }

    /// Ratatui style for the interactive table.
    pub fn to_style(&self) -> Style {
        let mut style = Style::default().add_modifier(self.modifiers());
        if let Some(fg) = self.foreground {
            style = style.fg(fg);
        }
        if let Some(bg) = self.background {
            style = style.bg(bg);
        }
        style
    }

    /// Crossterm style for static ANSI output.
    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground.map(ansi_color);
        style.background_color = self.background.map(ansi_color);
        let modifiers = self.modifiers();
        for (flag, attr) in [
            (Modifier::BOLD, Attribute::Bold),
            (Modifier::DIM, Attribute::Dim),
            (Modifier::ITALIC, Attribute::Italic),
            (Modifier::UNDERLINED, Attribute::Underlined),
        ] {
            if modifiers.contains(flag) {
                style.attributes.set(attr);
            }
        }
        style
    }
}

/// Map a ratatui color onto the crossterm palette used for static output.
fn ansi_color(color: Color) -> AnsiColor {
    match color {
        Color::Reset => AnsiColor::Reset,
        Color::Black => AnsiColor::Black,
        Color::Red => AnsiColor::DarkRed,
        Color::Green => AnsiColor::DarkGreen,
        Color::Yellow => AnsiColor::DarkYellow,
        Color::Blue => AnsiColor::DarkBlue,
        Color::Magenta => AnsiColor::DarkMagenta,
        Color::Cyan => AnsiColor::DarkCyan,
        Color::Gray => AnsiColor::Grey,
        Color::DarkGray => AnsiColor::DarkGrey,
        Color::LightRed => AnsiColor::Red,
        Color::LightGreen => AnsiColor::Green,
        Color::LightYellow => AnsiColor::Yellow,
        Color::LightBlue => AnsiColor::Blue,
        Color::LightMagenta => AnsiColor::Magenta,
        Color::LightCyan => AnsiColor::Cyan,
        Color::White => AnsiColor::White,
        Color::Rgb(r, g, b) => AnsiColor::Rgb { r, g, b },
        Color::Indexed(i) => AnsiColor::AnsiValue(i),
    }
}

/// Parse a color name (`red`), 256-color index (`212`) or hex (`#ff8800`).
pub fn parse_color(s: &str) -> Result<Color, String> {
    s.parse::<Color>()
        .map_err(|_| format!("unknown color '{}' (use a name, 0-255 or #rrggbb)", s))
}

// ─────────────────────────────────────────────────────────────────────────────
// Table styles
// ─────────────────────────────────────────────────────────────────────────────

/// Caller overrides for each style role.
#[derive(Debug, Clone, Default)]
pub struct StyleOverrides {
    pub header: StyleSpec,
    pub cell: StyleSpec,
    pub selected: StyleSpec,
    pub border: StyleSpec,
}

/// Effective style per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyles {
    pub header: StyleSpec,
    pub cell: StyleSpec,
    pub selected: StyleSpec,
    pub border: StyleSpec,
}

impl Default for TableStyles {
    fn default() -> Self {
        Self {
            header: StyleSpec {
                bold: Some(true),
                padding: Some(Padding::horizontal(1)),
                ..StyleSpec::default()
            },
            cell: StyleSpec {
                padding: Some(Padding::horizontal(1)),
                ..StyleSpec::default()
            },
            selected: StyleSpec {
                bold: Some(true),
                foreground: Some(Color::Indexed(212)),
                ..StyleSpec::default()
            },
            border: StyleSpec::default(),
        }
    }
}

impl TableStyles {
    /// Built-in defaults with `overrides` layered on top, role by role.
    pub fn resolve(overrides: &StyleOverrides) -> Self {
        let base = Self::default();
        Self {
            header: base.header.inherit(&overrides.header),
            cell: base.cell.inherit(&overrides.cell),
            selected: base.selected.inherit(&overrides.selected),
            border: base.border.inherit(&overrides.border),
        }
    }

    /// Widest horizontal padding of the header and cell roles, so both stay
    /// aligned in the same column.
    pub fn column_padding(&self) -> usize {
        self.header.padding().total().max(self.cell.padding().total())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Borders
// ─────────────────────────────────────────────────────────────────────────────

/// Named border kinds accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BorderKind {
    None,
    Hidden,
    Normal,
    #[default]
    Rounded,
    Thick,
    Double,
}

const HIDDEN: line::Set = line::Set {
    vertical: " ",
    horizontal: " ",
    top_right: " ",
    top_left: " ",
    bottom_right: " ",
    bottom_left: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_down: " ",
    horizontal_up: " ",
    cross: " ",
};

impl BorderKind {
    /// Glyphs for this border, or `None` when no border is drawn.
    pub fn glyphs(self) -> Option<line::Set> {
        match self {
            BorderKind::None => None,
            BorderKind::Hidden => Some(HIDDEN),
            BorderKind::Normal => Some(line::NORMAL),
            BorderKind::Rounded => Some(line::ROUNDED),
            BorderKind::Thick => Some(line::THICK),
            BorderKind::Double => Some(line::DOUBLE),
        }
    }

    /// Outer frame glyphs for a ratatui `Block`.
    pub fn frame(self) -> Option<border::Set> {
        self.glyphs().map(|g| border::Set {
            top_left: g.top_left,
            top_right: g.top_right,
            bottom_left: g.bottom_left,
            bottom_right: g.bottom_right,
            vertical_left: g.vertical,
            vertical_right: g.vertical,
            horizontal_top: g.horizontal,
            horizontal_bottom: g.horizontal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherit_overlays_attribute_by_attribute() {
        let base = StyleSpec {
            foreground: Some(Color::Red),
            bold: Some(true),
            padding: Some(Padding::horizontal(1)),
            ..StyleSpec::default()
        };
        let overrides = StyleSpec {
            background: Some(Color::Blue),
            bold: Some(false),
            ..StyleSpec::default()
        };

        let merged = base.inherit(&overrides);
        assert_eq!(merged.foreground, Some(Color::Red));
        assert_eq!(merged.background, Some(Color::Blue));
        assert_eq!(merged.bold, Some(false));
        assert_eq!(merged.padding, Some(Padding::horizontal(1)));
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let styles = TableStyles::resolve(&StyleOverrides::default());
        assert_eq!(styles, TableStyles::default());
    }

    #[test]
    fn header_override_keeps_default_bold() {
        let overrides = StyleOverrides {
            header: StyleSpec {
                foreground: Some(Color::Indexed(99)),
                ..StyleSpec::default()
            },
            ..StyleOverrides::default()
        };
        let styles = TableStyles::resolve(&overrides);

        let style = styles.header.to_style();
        assert_eq!(style.fg, Some(Color::Indexed(99)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn content_style_carries_attributes() {
        let spec = StyleSpec {
            foreground: Some(Color::Rgb(1, 2, 3)),
            faint: Some(true),
            underline: Some(true),
            ..StyleSpec::default()
        };
        let style = spec.to_content_style();
        assert_eq!(style.foreground_color, Some(AnsiColor::Rgb { r: 1, g: 2, b: 3 }));
        assert!(style.attributes.has(Attribute::Dim));
        assert!(style.attributes.has(Attribute::Underlined));
        assert!(!style.attributes.has(Attribute::Bold));
    }

    #[test]
    fn parse_colors() {
        assert_eq!(parse_color("212"), Ok(Color::Indexed(212)));
        assert_eq!(parse_color("red"), Ok(Color::Red));
        assert_eq!(parse_color("#ff8800"), Ok(Color::Rgb(255, 136, 0)));
        assert!(parse_color("not-a-color").is_err());
    }

    #[test]
    fn parse_padding_css_order() {
        assert_eq!("2".parse::<Padding>(), Ok(Padding::horizontal(2)));
        assert_eq!("0 1".parse::<Padding>(), Ok(Padding::horizontal(1)));
        assert_eq!(
            "0 3 0 1".parse::<Padding>(),
            Ok(Padding { left: 1, right: 3 })
        );
        assert!("1 2 3".parse::<Padding>().is_err());
        assert!("x".parse::<Padding>().is_err());
    }

    #[test]
    fn border_kinds_resolve_to_glyphs() {
        assert!(BorderKind::None.glyphs().is_none());
        assert_eq!(BorderKind::Rounded.glyphs().unwrap().top_left, "╭");
        assert_eq!(BorderKind::Double.glyphs().unwrap().horizontal, "═");
        assert_eq!(BorderKind::Hidden.glyphs().unwrap().cross, " ");

        let frame = BorderKind::Thick.frame().unwrap();
        assert_eq!(frame.vertical_left, "┃");
    }
}
