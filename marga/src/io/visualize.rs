//! SVG rendering of a search.
//!
//! [`SvgRecorder`] is a [`SearchObserver`]: plug it into
//! `AStarPlanner::plan_with` to collect expanded cells and the final path,
//! then write the picture once the search is over. All file IO happens in
//! [`SvgRecorder::save`], never during the search.

use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Polyline, Rectangle};
use thiserror::Error;

use crate::core::{GridCoord, WorldPoint};
use crate::grid::OccupancyGrid;
use crate::pathfinding::{ExpansionEvent, PathResult, SearchObserver};
use crate::scenario::Footprint;

/// Colorblind-friendly palette (Okabe-Ito).
mod colors {
    pub const BLOCKED: &str = "#BBBBBB";
    pub const FOOTPRINT: &str = "#000000";
    pub const EXPANDED: &str = "#CC79A7";
    pub const PATH: &str = "#D55E00";
    pub const START: &str = "#D55E00";
    pub const GOAL: &str = "#56B4E9";
}

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per world unit
    pub scale: f32,
    /// Padding around the map in pixels
    pub padding: f32,
    /// Draw inflated (blocked) cells
    pub draw_blocked: bool,
    /// Path line width in pixels
    pub path_width: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 8.0,
            padding: 10.0,
            draw_blocked: true,
            path_width: 2.0,
        }
    }
}

/// Records a search and renders it to SVG
pub struct SvgRecorder<'a> {
    grid: &'a OccupancyGrid,
    config: SvgConfig,
    footprints: Vec<Footprint>,
    endpoints: Option<(WorldPoint, WorldPoint)>,
    expanded: Vec<GridCoord>,
    path: Vec<WorldPoint>,
}

impl<'a> SvgRecorder<'a> {
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        Self::with_config(grid, SvgConfig::default())
    }

    pub fn with_config(grid: &'a OccupancyGrid, config: SvgConfig) -> Self {
        Self {
            grid,
            config,
            footprints: Vec::new(),
            endpoints: None,
            expanded: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Solid obstacles drawn under everything else
    pub fn with_footprints(mut self, footprints: &[Footprint]) -> Self {
        self.footprints = footprints.to_vec();
        self
    }

    /// Start and goal markers
    pub fn with_endpoints(mut self, start: WorldPoint, goal: WorldPoint) -> Self {
        self.endpoints = Some((start, goal));
        self
    }

    /// Cells expanded so far, in expansion order
    pub fn expanded(&self) -> &[GridCoord] {
        &self.expanded
    }

    /// Final path (goal first), empty until a successful search finishes
    pub fn path(&self) -> &[WorldPoint] {
        &self.path
    }

    /// Forget the previous search and mark new endpoints, keeping grid,
    /// footprints and config
    pub fn reset(&mut self, start: WorldPoint, goal: WorldPoint) {
        self.expanded.clear();
        self.path.clear();
        self.endpoints = Some((start, goal));
    }

    fn to_px(&self, p: WorldPoint) -> (f32, f32) {
        let (min, max) = self.grid.bounds();
        (
            self.config.padding + (p.x - min.x) * self.config.scale,
            self.config.padding + (max.y - p.y) * self.config.scale,
        )
    }

    fn cell_rect(&self, center: WorldPoint, color: &str) -> Rectangle {
        let size = self.grid.resolution() * self.config.scale;
        let (x, y) = self.to_px(center);
        Rectangle::new()
            .set("x", x - size / 2.0)
            .set("y", y - size / 2.0)
            .set("width", size)
            .set("height", size)
            .set("fill", color)
    }

    fn marker(&self, p: WorldPoint, radius: f32, color: &str) -> Circle {
        let (cx, cy) = self.to_px(p);
        Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", radius)
            .set("fill", color)
    }

    /// Build the SVG document
    pub fn render(&self) -> Document {
        let (min, max) = self.grid.bounds();
        let width = (max.x - min.x) * self.config.scale + 2.0 * self.config.padding;
        let height = (max.y - min.y) * self.config.scale + 2.0 * self.config.padding;

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0, 0.0, width, height))
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "white"),
            );

        if self.config.draw_blocked {
            let mut blocked = Group::new().set("id", "blocked");
            for cell in self.grid.blocked_cells() {
                blocked = blocked.add(self.cell_rect(self.grid.grid_to_world(cell), colors::BLOCKED));
            }
            doc = doc.add(blocked);
        }

        let mut footprints = Group::new().set("id", "footprints");
        for f in &self.footprints {
            let (x, y) = self.to_px(WorldPoint::new(f.min_x, f.max_y));
            footprints = footprints.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", f.width() * self.config.scale)
                    .set("height", f.height() * self.config.scale)
                    .set("fill", colors::FOOTPRINT),
            );
        }
        doc = doc.add(footprints);

        let mut expanded = Group::new().set("id", "expanded");
        let dot = self.config.scale * 0.2;
        for &cell in &self.expanded {
            expanded = expanded.add(self.marker(self.grid.grid_to_world(cell), dot, colors::EXPANDED));
        }
        doc = doc.add(expanded);

        if !self.path.is_empty() {
            let points: Vec<String> = self
                .path
                .iter()
                .map(|&p| {
                    let (x, y) = self.to_px(p);
                    format!("{:.1},{:.1}", x, y)
                })
                .collect();
            doc = doc.add(
                Polyline::new()
                    .set("id", "path")
                    .set("points", points.join(" "))
                    .set("fill", "none")
                    .set("stroke", colors::PATH)
                    .set("stroke-width", self.config.path_width),
            );
        }

        if let Some((start, goal)) = self.endpoints {
            let r = self.config.scale * 0.6;
            doc = doc
                .add(self.marker(start, r, colors::START))
                .add(self.marker(goal, r, colors::GOAL));
        }

        doc
    }

    /// Render and write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), SvgError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        svg::save(path, &self.render())?;
        Ok(())
    }
}

impl SearchObserver for SvgRecorder<'_> {
    fn on_expand(&mut self, event: &ExpansionEvent) {
        self.expanded.push(event.coord);
    }

    fn on_finish(&mut self, result: &PathResult) {
        self.path = result.path_world.clone();
    }
}
