// src/font.rs
//
// Fixed-cell BDF glyph font. The board draws everything (rows, ticker,
// clock) with one bitmap font loaded at startup; glyphs are stored as
// white-on-transparent bitmaps and recolored per draw call. Only the BDF
// subset the dot fonts actually use is accepted: FONTBOUNDINGBOX, ENCODING,
// DWIDTH, BBX and hex BITMAP rows.

use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("could not read font file: {0}")]
    Io(#[from] std::io::Error),

    #[error("font parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("font defines no glyphs")]
    Empty,
}

#[derive(Debug, Clone)]
struct Glyph {
    /// Horizontal advance to the next glyph origin
    advance: i32,
    /// BBX geometry: bitmap extent and offset from the baseline origin
    width: i32,
    height: i32,
    xoff: i32,
    yoff: i32,
    /// Bitmap rows, MSB-aligned (leftmost pixel is bit 31)
    rows: Vec<u32>,
}

/// A loaded bitmap font. Glyph lookups are by Unicode codepoint; unknown
/// codepoints draw nothing but still advance by one cell so mixed text
/// keeps its spacing.
pub struct GlyphFont {
    cell_width: i32,
    cell_height: i32,
    glyphs: HashMap<u32, Glyph>,
}

impl GlyphFont {
    /// Load a BDF font from disk. Failure here is fatal at startup.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let source = fs::read_to_string(path)?;
        let font = Self::parse(&source)?;
        debug!(
            "loaded font {} ({} glyphs, cell {}x{})",
            path.display(),
            font.glyphs.len(),
            font.cell_width,
            font.cell_height
        );
        Ok(font)
    }

    /// Parse BDF source text.
    pub fn parse(source: &str) -> Result<Self, FontError> {
        let mut cell_width = 0i32;
        let mut cell_height = 0i32;
        let mut glyphs = HashMap::new();

        let mut encoding: Option<u32> = None;
        let mut dwidth: Option<i32> = None;
        let mut bbx: Option<(i32, i32, i32, i32)> = None;
        let mut rows: Vec<u32> = Vec::new();
        let mut in_bitmap = false;

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            let lineno = idx + 1;

            if in_bitmap {
                if line == "ENDCHAR" {
                    in_bitmap = false;
                    if let (Some(code), Some((w, h, xo, yo))) = (encoding, bbx) {
                        if rows.len() != h as usize {
                            return Err(FontError::Parse {
                                line: lineno,
                                msg: format!("glyph {code}: {} bitmap rows, BBX says {h}", rows.len()),
                            });
                        }
                        glyphs.insert(code, Glyph {
                            advance: dwidth.unwrap_or(cell_width),
                            width: w,
                            height: h,
                            xoff: xo,
                            yoff: yo,
                            rows: std::mem::take(&mut rows),
                        });
                    }
                    encoding = None;
                    dwidth = None;
                    bbx = None;
                    rows.clear();
                } else {
                    if line.len() > 8 {
                        return Err(FontError::Parse {
                            line: lineno,
                            msg: "glyphs wider than 32 pixels are not supported".to_string(),
                        });
                    }
                    let bits = u32::from_str_radix(line, 16).map_err(|_| FontError::Parse {
                        line: lineno,
                        msg: format!("bad bitmap row {line:?}"),
                    })?;
                    rows.push(bits << (32 - 4 * line.len() as u32));
                }
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("FONTBOUNDINGBOX") => {
                    cell_width = parse_field(&mut parts, lineno, "FONTBOUNDINGBOX width")?;
                    cell_height = parse_field(&mut parts, lineno, "FONTBOUNDINGBOX height")?;
                }
                Some("ENCODING") => {
                    let code: i64 = parse_field(&mut parts, lineno, "ENCODING")?;
                    // negative encodings mark unmapped glyphs; skip them
                    encoding = u32::try_from(code).ok();
                }
                Some("DWIDTH") => {
                    dwidth = Some(parse_field(&mut parts, lineno, "DWIDTH")?);
                }
                Some("BBX") => {
                    bbx = Some((
                        parse_field(&mut parts, lineno, "BBX width")?,
                        parse_field(&mut parts, lineno, "BBX height")?,
                        parse_field(&mut parts, lineno, "BBX xoff")?,
                        parse_field(&mut parts, lineno, "BBX yoff")?,
                    ));
                }
                Some("BITMAP") => {
                    if bbx.is_none() {
                        return Err(FontError::Parse {
                            line: lineno,
                            msg: "BITMAP before BBX".to_string(),
                        });
                    }
                    in_bitmap = true;
                }
                _ => {}
            }
        }

        if glyphs.is_empty() {
            return Err(FontError::Empty);
        }
        if cell_width <= 0 || cell_height <= 0 {
            return Err(FontError::Parse {
                line: 0,
                msg: "missing FONTBOUNDINGBOX".to_string(),
            });
        }
        Ok(Self { cell_width, cell_height, glyphs })
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Rendered pixel width of a string: each glyph's own advance, one cell
    /// for codepoints the font does not cover.
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars()
            .map(|ch| {
                self.glyphs
                    .get(&(ch as u32))
                    .map(|g| g.advance)
                    .unwrap_or(self.cell_width)
            })
            .sum()
    }

    /// Draw `text` with its baseline at `origin`, in `color`. Pixels outside
    /// the target are clipped by the target itself.
    pub fn draw_text<D>(
        &self,
        target: &mut D,
        text: &str,
        origin: Point,
        color: Rgb888,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let mut x = origin.x;
        for ch in text.chars() {
            let Some(glyph) = self.glyphs.get(&(ch as u32)) else {
                x += self.cell_width;
                continue;
            };
            let top = origin.y + 1 - glyph.yoff - glyph.height;
            let mut pixels = Vec::new();
            for (r, row) in glyph.rows.iter().enumerate() {
                for c in 0..glyph.width {
                    if row & (0x8000_0000u32 >> c) != 0 {
                        pixels.push(Pixel(
                            Point::new(x + glyph.xoff + c, top + r as i32),
                            color,
                        ));
                    }
                }
            }
            target.draw_iter(pixels)?;
            x += glyph.advance;
        }
        Ok(())
    }
}

fn parse_field<'a, T, I>(parts: &mut I, line: usize, what: &str) -> Result<T, FontError>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FontError::Parse {
            line,
            msg: format!("bad or missing {what}"),
        })
}
