use hospitals::core::io::render::{Frame, RenderError, StateRenderer};
use hospitals::core::models::cell::Cell;
use hospitals::core::models::grid::Grid;
use image::{ImageError, ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use tracing::debug;

const DEFAULT_CELL_SIZE: u32 = 40;
const MAX_PIXELS: u64 = 64 * 1024 * 1024;
const CELL_BORDER: u32 = 2;

const LABEL_SCALE: u32 = 4;
const LABEL_PADDING: u32 = 10;
const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const EMPTY_CELL: Rgba<u8> = Rgba([40, 40, 40, 255]);
const HOUSE_WALL: Rgba<u8> = Rgba([222, 170, 60, 255]);
const HOUSE_ROOF: Rgba<u8> = Rgba([180, 60, 40, 255]);
const HOSPITAL_TILE: Rgba<u8> = Rgba([245, 245, 245, 255]);
const HOSPITAL_CROSS: Rgba<u8> = Rgba([200, 30, 30, 255]);
const LABEL_BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LABEL_TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Renders grid states to PNG: one dark square per cell, a house glyph on house
/// cells, a red cross on hospital cells, and a band below the grid with the cost.
///
/// Glyphs are drawn procedurally, so no image assets are needed at runtime.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderer {
    cell_size: u32,
}

impl ImageRenderer {
    pub fn new() -> Self {
        Self::with_cell_size(DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(4 * CELL_BORDER),
        }
    }

    fn label_height() -> u32 {
        GLYPH_HEIGHT * LABEL_SCALE + 2 * LABEL_PADDING
    }

    /// Pixel size of the image for `grid`, including the cost band. Images above
    /// `MAX_PIXELS` are refused.
    pub fn dimensions(&self, grid: &Grid) -> Result<(u32, u32), RenderError> {
        let too_large = || RenderError::Encoding(format!(
            "a {}x{} grid does not fit in an image at {} px per cell",
            grid.height(),
            grid.width(),
            self.cell_size
        ));
        let width = u32::try_from(grid.width())
            .ok()
            .and_then(|w| w.checked_mul(self.cell_size))
            .ok_or_else(too_large)?;
        let height = u32::try_from(grid.height())
            .ok()
            .and_then(|h| h.checked_mul(self.cell_size))
            .and_then(|h| h.checked_add(Self::label_height()))
            .ok_or_else(too_large)?;
        if u64::from(width) * u64::from(height) > MAX_PIXELS {
            return Err(too_large());
        }
        Ok((width, height))
    }

    fn cell_origin(&self, cell: Cell) -> (u32, u32) {
        (cell.col as u32 * self.cell_size, cell.row as u32 * self.cell_size)
    }

    /// Maps twentieths of a cell to pixels.
    fn at(&self, twentieths: u32) -> u32 {
        twentieths * self.cell_size / 20
    }

    fn draw_house(&self, img: &mut RgbaImage, x0: u32, y0: u32) {
        fill_rect(
            img,
            (x0 + self.at(4), y0 + self.at(9)),
            (x0 + self.at(16), y0 + self.at(17)),
            HOUSE_WALL,
        );

        let roof_top = y0 + self.at(3);
        let roof_base = y0 + self.at(9);
        let half_base = self.at(7);
        let center = x0 + self.cell_size / 2;
        for y in roof_top..roof_base {
            let half = (y - roof_top) * half_base / (roof_base - roof_top).max(1);
            fill_rect(
                img,
                (center.saturating_sub(half), y),
                (center + half + 1, y + 1),
                HOUSE_ROOF,
            );
        }
    }

    fn draw_hospital(&self, img: &mut RgbaImage, x0: u32, y0: u32) {
        fill_rect(
            img,
            (x0 + self.at(3), y0 + self.at(3)),
            (x0 + self.at(17), y0 + self.at(17)),
            HOSPITAL_TILE,
        );
        fill_rect(
            img,
            (x0 + self.at(8), y0 + self.at(5)),
            (x0 + self.at(12), y0 + self.at(15)),
            HOSPITAL_CROSS,
        );
        fill_rect(
            img,
            (x0 + self.at(5), y0 + self.at(8)),
            (x0 + self.at(15), y0 + self.at(12)),
            HOSPITAL_CROSS,
        );
    }

    fn draw_label(&self, img: &mut RgbaImage, top: u32, text: &str) {
        fill_rect(img, (0, top), (img.width(), img.height()), LABEL_BACKGROUND);

        let advance = (GLYPH_WIDTH + 1) * LABEL_SCALE;
        let baseline = top + LABEL_PADDING;
        for (i, ch) in text.chars().enumerate() {
            let left = LABEL_PADDING + i as u32 * advance;
            for (row, bits) in glyph(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b100 >> col) == 0 {
                        continue;
                    }
                    let x = left + col * LABEL_SCALE;
                    let y = baseline + row as u32 * LABEL_SCALE;
                    fill_rect(
                        img,
                        (x, y),
                        (x + LABEL_SCALE, y + LABEL_SCALE),
                        LABEL_TEXT,
                    );
                }
            }
        }
    }
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRenderer for ImageRenderer {
    fn render(&self, frame: &Frame<'_>, path: &Path) -> Result<(), RenderError> {
        let (width, height) = self.dimensions(frame.grid)?;
        let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

        for cell in frame.grid.cells() {
            let (x0, y0) = self.cell_origin(cell);
            fill_rect(
                &mut img,
                (x0 + CELL_BORDER, y0 + CELL_BORDER),
                (x0 + self.cell_size - CELL_BORDER, y0 + self.cell_size - CELL_BORDER),
                EMPTY_CELL,
            );
            if frame.grid.is_house(&cell) {
                self.draw_house(&mut img, x0, y0);
            } else if frame.placement.contains(&cell) {
                self.draw_hospital(&mut img, x0, y0);
            }
        }

        let band_top = height - Self::label_height();
        self.draw_label(&mut img, band_top, &format!("COST {}", frame.cost));

        img.save_with_format(path, ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(io) => RenderError::Io(io),
                other => RenderError::Encoding(other.to_string()),
            })?;
        debug!(path = %path.display(), cost = frame.cost, "Wrote frame.");
        Ok(())
    }
}

/// Fills the half-open pixel rectangle `[from, to)`, clipped to the image.
fn fill_rect(img: &mut RgbaImage, from: (u32, u32), to: (u32, u32), color: Rgba<u8>) {
    let x_end = to.0.min(img.width());
    let y_end = to.1.min(img.height());
    for y in from.1..y_end {
        for x in from.0..x_end {
            img.put_pixel(x, y, color);
        }
    }
}

/// 3x5 bitmap, one byte per row, most significant of the low three bits on the left.
fn glyph(ch: char) -> [u8; 5] {
    match ch {
        '0' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        _ => [0; 5],
    }
}
