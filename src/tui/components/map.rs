//! # Boundary Map Component
//!
//! Canvas world map for the detail screen. Draws the country's boundary
//! rings (when the geometry fetch succeeded) over the braille world
//! backdrop, plus a marker at the capital's coordinates. The marker glyph
//! comes from config rather than a baked-in default.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution};

use crate::api::geometry::BoundaryGeometry;
use crate::api::types::CountryRecord;

/// Fallback viewport half-extents around the marker when no boundary is
/// available, in degrees.
const FALLBACK_SPAN_LNG: f64 = 20.0;
const FALLBACK_SPAN_LAT: f64 = 12.0;

pub struct BoundaryMap<'a> {
    record: &'a CountryRecord,
    boundary: Option<&'a BoundaryGeometry>,
    marker: &'a str,
}

impl<'a> BoundaryMap<'a> {
    pub fn new(
        record: &'a CountryRecord,
        boundary: Option<&'a BoundaryGeometry>,
        marker: &'a str,
    ) -> Self {
        Self {
            record,
            boundary,
            marker,
        }
    }

    /// Viewport as `([min_lng, max_lng], [min_lat, max_lat])`: the padded
    /// boundary box when present, otherwise a fixed window around the
    /// marker, otherwise the whole world.
    fn viewport(&self) -> ([f64; 2], [f64; 2]) {
        if let Some(bounds) = self.boundary.and_then(|b| b.bounds()) {
            let (min_lng, min_lat, max_lng, max_lat) = bounds;
            let pad_lng = ((max_lng - min_lng) * 0.2).max(2.0);
            let pad_lat = ((max_lat - min_lat) * 0.2).max(2.0);
            return (
                [min_lng - pad_lng, max_lng + pad_lng],
                [min_lat - pad_lat, max_lat + pad_lat],
            );
        }
        if let Some((lat, lng)) = self.record.map_coords() {
            return (
                [lng - FALLBACK_SPAN_LNG, lng + FALLBACK_SPAN_LNG],
                [lat - FALLBACK_SPAN_LAT, lat + FALLBACK_SPAN_LAT],
            );
        }
        ([-180.0, 180.0], [-90.0, 90.0])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (x_bounds, y_bounds) = self.viewport();
        let label = self
            .record
            .capital_name()
            .unwrap_or(self.record.name.common.as_str());

        let canvas = Canvas::default()
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Location Map "),
            )
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                if let Some(boundary) = self.boundary {
                    ctx.layer();
                    for ring in &boundary.rings {
                        for segment in ring.windows(2) {
                            ctx.draw(&CanvasLine {
                                x1: segment[0].0,
                                y1: segment[0].1,
                                x2: segment[1].0,
                                y2: segment[1].1,
                                color: Color::Blue,
                            });
                        }
                    }
                }
                if let Some((lat, lng)) = self.record.map_coords() {
                    ctx.layer();
                    ctx.print(
                        lng,
                        lat,
                        Line::styled(
                            format!("{} {}", self.marker, label),
                            Style::default().fg(Color::Red),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
