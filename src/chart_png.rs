//! PNG chart rendering for sweep outputs.
//!
//! Minimal line-chart rasterizer: white canvas, framed plot area with
//! gridlines, one polyline per series, and color swatches as the legend.
//! Species lines use the shared color table so every figure colors a
//! species the same way.

use crate::constants::{PA_PER_BAR, species_color};
use crate::series::SpeciesTable;
use crate::sweep_axis::MolarRatioPoint;
use crate::yield_grid::YieldGrid;
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([255u8, 255, 255]);
const FRAME: Rgb<u8> = Rgb([40u8, 40, 40]);
const GRIDLINE: Rgb<u8> = Rgb([215u8, 215, 215]);

// Floor applied before taking log10 of a mole fraction
const LOG_FLOOR: f64 = 1e-12;

/// Chart geometry and scaling options.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub log_scale: bool,
}

impl ChartConfig {
    pub fn new(width: u32, height: u32) -> Self {
        ChartConfig {
            width,
            height,
            margin: 40,
            log_scale: false,
        }
    }

    pub fn with_log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig::new(900, 600)
    }
}

/// Pixel-space plot frame with data-space bounds.
struct PlotArea {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotArea {
    fn new(config: &ChartConfig, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        let x_pad = if x_max > x_min { 0.0 } else { 0.5 };
        let y_pad = if y_max > y_min { 0.0 } else { 0.5 };
        PlotArea {
            left: config.margin,
            top: config.margin,
            right: config.width - config.margin,
            bottom: config.height - config.margin,
            x_min: x_min - x_pad,
            x_max: x_max + x_pad,
            y_min: y_min - y_pad,
            y_max: y_max + y_pad,
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let fx = (x - self.x_min) / (self.x_max - self.x_min);
        let fy = (y - self.y_min) / (self.y_max - self.y_min);
        let px = self.left as f64 + fx * (self.right - self.left) as f64;
        let py = self.bottom as f64 - fy * (self.bottom - self.top) as f64;
        (px.round() as i64, py.round() as i64)
    }

    fn draw_frame(&self, img: &mut RgbImage) {
        for grid in 1..10 {
            let x = self.left + ((self.right - self.left) as f64 * grid as f64 / 10.0) as u32;
            for y in self.top..=self.bottom {
                img.put_pixel(x, y, GRIDLINE);
            }
        }
        for grid in 1..10 {
            let y = self.top + ((self.bottom - self.top) as f64 * grid as f64 / 10.0) as u32;
            for x in self.left..=self.right {
                img.put_pixel(x, y, GRIDLINE);
            }
        }
        for x in self.left..=self.right {
            img.put_pixel(x, self.top, FRAME);
            img.put_pixel(x, self.bottom, FRAME);
        }
        for y in self.top..=self.bottom {
            img.put_pixel(self.left, y, FRAME);
            img.put_pixel(self.right, y, FRAME);
        }
    }
}

fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let x = x0 as f64 + t * (x1 - x0) as f64;
        let y = y0 as f64 + t * (y1 - y0) as f64;
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

fn draw_polyline(img: &mut RgbImage, area: &PlotArea, points: &[(f64, f64)], color: Rgb<u8>) {
    for pair in points.windows(2) {
        let from = area.to_pixel(pair[0].0, pair[0].1);
        let to = area.to_pixel(pair[1].0, pair[1].1);
        draw_line(img, from, to, color);
    }
    // Mark the data points themselves so sparse series stay visible.
    for &(x, y) in points {
        let (px, py) = area.to_pixel(x, y);
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                let (mx, my) = (px + dx, py + dy);
                if mx >= 0 && my >= 0 && (mx as u32) < img.width() && (my as u32) < img.height() {
                    img.put_pixel(mx as u32, my as u32, color);
                }
            }
        }
    }
}

fn draw_legend_swatch(img: &mut RgbImage, slot: usize, color: Rgb<u8>) {
    let x0 = img.width().saturating_sub(30);
    let y0 = 8 + slot as u32 * 14;
    for x in x0..(x0 + 18).min(img.width()) {
        for y in y0..(y0 + 8).min(img.height()) {
            img.put_pixel(x, y, color);
        }
    }
}

fn scale_y(value: f64, log_scale: bool) -> f64 {
    if log_scale {
        value.max(LOG_FLOOR).log10()
    } else {
        value
    }
}

/// Renders one polyline per species in the table. Below-threshold slots
/// are skipped, so a species that drops out leaves a visible gap in its
/// markers rather than a misleadingly continuous line.
pub fn render_species_chart(
    table: &SpeciesTable,
    config: &ChartConfig,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut series: Vec<(&str, Vec<(f64, f64)>)> = Vec::new();
    for name in table.species_names() {
        let points: Vec<(f64, f64)> = table
            .compact_series(name)
            .unwrap_or_default()
            .into_iter()
            .map(|(x, y)| (x, scale_y(y, config.log_scale)))
            .collect();
        if !points.is_empty() {
            series.push((name, points));
        }
    }

    let all_points = series.iter().flat_map(|(_, pts)| pts.iter());
    let x_min = table.axis_values.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = table
        .axis_values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let mut y_min = all_points
        .clone()
        .map(|p| p.1)
        .fold(f64::INFINITY, f64::min);
    let mut y_max = all_points.map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    if series.is_empty() {
        y_min = 0.0;
        y_max = 1.0;
    }

    let mut img = RgbImage::from_pixel(config.width, config.height, BACKGROUND);
    let area = PlotArea::new(config, x_min, x_max, y_min, y_max);
    area.draw_frame(&mut img);
    for (slot, (name, points)) in series.iter().enumerate() {
        let color = species_color(name);
        draw_polyline(&mut img, &area, points, color);
        draw_legend_swatch(&mut img, slot, color);
    }
    img.save(path)?;
    Ok(())
}

/// Blue-to-red ramp over the temperature rows of a yield grid.
fn temperature_ramp(row: usize, rows: usize) -> Rgb<u8> {
    let t = if rows > 1 {
        row as f64 / (rows - 1) as f64
    } else {
        0.0
    };
    Rgb([
        (40.0 + 180.0 * t) as u8,
        40u8,
        (220.0 - 180.0 * t) as u8,
    ])
}

/// Renders one panel per feed ratio, side by side, three panels per row.
/// Each panel plots log10 CH4 yield against pressure in bar, one line per
/// temperature row.
pub fn render_yield_panels(
    grids: &[(MolarRatioPoint, YieldGrid)],
    panel_width: u32,
    panel_height: u32,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let panels_per_row = 3usize.min(grids.len().max(1));
    let rows = grids.len().div_ceil(panels_per_row);
    let mut img = RgbImage::from_pixel(
        panel_width * panels_per_row as u32,
        panel_height * rows as u32,
        BACKGROUND,
    );

    for (index, (_, grid)) in grids.iter().enumerate() {
        let panel_col = (index % panels_per_row) as u32;
        let panel_row = (index / panels_per_row) as u32;
        let config = ChartConfig::new(panel_width, panel_height).with_log_scale();

        let x_min = grid.pressure_axis.values[0] / PA_PER_BAR;
        let x_max = grid.pressure_axis.values[grid.pressure_axis.len() - 1] / PA_PER_BAR;
        let y_min = scale_y(grid.min_value(), true);
        let y_max = scale_y(grid.max_value(), true);

        let mut area = PlotArea::new(&config, x_min, x_max, y_min, y_max);
        area.left += panel_col * panel_width;
        area.right += panel_col * panel_width;
        area.top += panel_row * panel_height;
        area.bottom += panel_row * panel_height;
        area.draw_frame(&mut img);

        let (t_rows, _) = grid.shape();
        for ti in 0..t_rows {
            let points: Vec<(f64, f64)> = grid
                .row(ti)
                .iter()
                .zip(grid.pressure_axis.values.iter())
                .map(|(&y, &p)| (p / PA_PER_BAR, scale_y(y, true)))
                .collect();
            draw_polyline(&mut img, &area, &points, temperature_ramp(ti, t_rows));
        }
    }
    img.save(path)?;
    Ok(())
}
