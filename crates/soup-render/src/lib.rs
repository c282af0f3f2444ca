//! Terminal rendering of a [`TileGrid`].
//!
//! Each cell becomes `scale_x` characters. A cell whose mean density over
//! the configured layers is below the threshold is blank; otherwise the
//! layer with the largest value is drawn, with its background color when
//! color output is enabled. Rendering only reads the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use crossterm::style::{Color, Stylize};
use soup_core::{ChannelId, HEAT, MOISTURE, SEED, SOIL, WATER};
use soup_grid::TileGrid;
use std::iter::repeat_n;

/// How one channel is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Channel read for this layer.
    pub channel: ChannelId,
    /// Character drawn for a cell this layer dominates.
    pub symbol: char,
    /// Background color in color mode.
    pub color: Color,
}

impl Layer {
    /// Shorthand constructor.
    pub fn new(channel: ChannelId, symbol: char, color: Color) -> Self {
        Self {
            channel,
            symbol,
            color,
        }
    }
}

/// Renderer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Layers in priority order; on equal values the earlier layer wins.
    pub layers: Vec<Layer>,
    /// Cells with mean layer density below this render blank. Default: 0.2.
    pub threshold: f32,
    /// Characters per cell, to make cells roughly square. Default: 2.
    pub scale_x: usize,
    /// Emit ANSI background colors. Default: `true`.
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                Layer::new(WATER, '~', Color::Blue),
                Layer::new(SOIL, '#', Color::Yellow),
                Layer::new(SEED, '*', Color::Green),
                Layer::new(MOISTURE, ':', Color::DarkCyan),
                Layer::new(HEAT, '^', Color::Red),
            ],
            threshold: 0.2,
            scale_x: 2,
            color: true,
        }
    }
}

impl RenderConfig {
    /// Default layers without color.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}

/// The layer drawn at `(row, col)`, or `None` for a blank cell.
///
/// Channels absent from the grid count as zero.
pub fn dominant_layer<'c>(
    grid: &TileGrid,
    config: &'c RenderConfig,
    row: usize,
    col: usize,
) -> Option<&'c Layer> {
    if config.layers.is_empty() {
        return None;
    }
    let value = |layer: &Layer| {
        grid.plane(layer.channel)
            .and_then(|p| p.get(row, col))
            .unwrap_or(0.0)
    };

    let mut best: Option<(&Layer, f32)> = None;
    let mut sum = 0.0;
    for layer in &config.layers {
        let v = value(layer);
        sum += v;
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((layer, v));
        }
    }
    if sum / (config.layers.len() as f32) < config.threshold {
        return None;
    }
    best.map(|(layer, _)| layer)
}

/// Render the grid as lines of text, top row first, joined by `\n`.
pub fn render(grid: &TileGrid, config: &RenderConfig) -> String {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let mut line = String::with_capacity(width * config.scale_x);
        for col in 0..width {
            match dominant_layer(grid, config, row, col) {
                None => line.extend(repeat_n(' ', config.scale_x)),
                Some(layer) => {
                    let cell: String = repeat_n(layer.symbol, config.scale_x).collect();
                    if config.color {
                        line.push_str(&cell.on(layer.color).to_string());
                    } else {
                        line.push_str(&cell);
                    }
                }
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}
