//! Display sink used by the screens, plus an `embedded-graphics` adapter.
//!
//! Screens never own pixels. They call the [`Display`] primitives and the
//! driver loop decides when the frame is cleared and flushed.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::config::{DISPLAY_HEIGHT, GLYPH_HEIGHT, GLYPH_WIDTH};

/// A titled list with one selected row.
#[derive(Clone, Copy, Debug)]
pub struct ListView<'a> {
    pub title: &'a str,
    pub items: &'a [&'a str],
    pub selected: usize,
}

/// Drawing primitives the screens render through.
pub trait Display {
    /// Single line of text with its top-left corner at `(x, y)`.
    fn label(&mut self, text: &str, x: i32, y: i32);

    /// Word-wrapped text inside `area`; lines past the bottom are dropped.
    fn label_multiline(&mut self, text: &str, area: Rectangle);

    /// Render a list widget.
    fn draw_list(&mut self, list: &ListView<'_>);

    /// Mark the list titled `title` as the one currently shown.
    fn bind_list(&mut self, title: &'static str);

    /// No list is shown any more.
    fn unbind_list(&mut self);
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Split off the first line of `text` that fits in `cols` characters,
/// breaking at the last space or at an explicit newline.
pub(crate) fn next_line(text: &str, cols: usize) -> (&str, &str) {
    let cols = cols.max(1);
    let text = text.trim_start_matches(' ');
    let mut count = 0;
    let mut last_space = None;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            return (&text[..i], &text[i + 1..]);
        }
        if count == cols {
            if c == ' ' {
                return (&text[..i], &text[i + 1..]);
            }
            return match last_space {
                Some(sp) => (&text[..sp], &text[sp + 1..]),
                None => (&text[..i], &text[i..]),
            };
        }
        if c == ' ' {
            last_space = Some(i);
        }
        count += 1;
    }
    (text, "")
}

/// [`Display`] implementation over any monochrome `DrawTarget`
/// (SSD1306 buffer on the badge, `MockDisplay` in tests).
pub struct GraphicsDisplay<D> {
    target: D,
    bound: Option<&'static str>,
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            bound: None,
        }
    }

    /// Title of the bound list, if any.
    pub fn bound_list(&self) -> Option<&'static str> {
        self.bound
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Access the underlying target (clear / flush from the driver loop).
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Display for GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn label(&mut self, text: &str, x: i32, y: i32) {
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(), Baseline::Top)
            .draw(&mut self.target);
    }

    fn label_multiline(&mut self, text: &str, area: Rectangle) {
        let cols = (area.size.width as i32 / GLYPH_WIDTH) as usize;
        let bottom = area.top_left.y + area.size.height as i32;
        let mut y = area.top_left.y;
        let mut rest = text;

        while !rest.is_empty() && y + GLYPH_HEIGHT <= bottom {
            let (line, tail) = next_line(rest, cols);
            self.label(line, area.top_left.x, y);
            rest = tail;
            y += GLYPH_HEIGHT;
        }
    }

    fn draw_list(&mut self, list: &ListView<'_>) {
        self.label(list.title, 0, 0);

        let rows = ((DISPLAY_HEIGHT - GLYPH_HEIGHT) / GLYPH_HEIGHT) as usize;
        let first = list.selected.saturating_sub(rows.saturating_sub(1));

        for (row, item) in list.items.iter().enumerate().skip(first).take(rows) {
            let marker = if row == list.selected { ">" } else { " " };
            let mut line: heapless::String<32> = heapless::String::new();
            let _ = line.push_str(marker);
            for c in item.chars() {
                if line.push(c).is_err() {
                    break;
                }
            }
            let y = GLYPH_HEIGHT + ((row - first) as i32 * GLYPH_HEIGHT);
            self.label(line.as_str(), 0, y);
        }
    }

    fn bind_list(&mut self, title: &'static str) {
        self.bound = Some(title);
    }

    fn unbind_list(&mut self) {
        self.bound = None;
    }
}
