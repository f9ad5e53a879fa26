// ui.rs - Renderer and input handling on top of eframe/egui.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Key, PointerButton, Pos2, Rect, Sense, Stroke, Vec2};
use log::{debug, info};

use crate::grid::{CellGrid, CellState, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::patterns;

const ALIVE_COLOR: Color32 = Color32::BLACK;
const DEAD_COLOR: Color32 = Color32::WHITE;
const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0xAA, 0xAA, 0xAA);

/// Fixed frame cadence: one simulation step at most every 10 ms.
const STEP_INTERVAL: Duration = Duration::from_millis(10);

/// Canvas size in pixels; the window is created to match.
pub fn canvas_size() -> Vec2 {
    Vec2::new(
        (GRID_WIDTH * CELL_SIZE) as f32,
        (GRID_HEIGHT * CELL_SIZE) as f32,
    )
}

pub struct LifeApp {
    grid: CellGrid,
    show_grid_lines: bool,
    last_step: Instant,
}

impl Default for LifeApp {
    fn default() -> Self {
        Self {
            grid: CellGrid::new(),
            show_grid_lines: true,
            last_step: Instant::now(),
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(canvas_size(), Sense::click_and_drag());
                let origin = response.rect.min;

                self.handle_pointer(ctx, &response, origin);
                self.draw_cells(&painter, origin);
                if self.show_grid_lines {
                    self.draw_grid_lines(&painter, origin);
                }
            });

        if self.last_step.elapsed() >= STEP_INTERVAL {
            self.grid.advance_generation();
            self.last_step = Instant::now();
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title()));
        ctx.request_repaint_after(STEP_INTERVAL);
    }
}

impl LifeApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pause, clear, grid_lines, step, random, pattern) = ctx.input(|i| {
            let digits = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];
            let pattern = digits.iter().position(|&k| i.key_pressed(k));
            (
                i.key_pressed(Key::P),
                i.key_pressed(Key::R),
                i.key_pressed(Key::G),
                i.key_pressed(Key::Space),
                i.key_pressed(Key::N),
                pattern,
            )
        });

        if pause {
            self.grid.toggle_pause();
            debug!("paused: {}", self.grid.is_paused());
        }
        if clear {
            self.grid.clear();
            debug!("grid cleared");
        }
        if grid_lines {
            self.show_grid_lines = !self.show_grid_lines;
        }
        if step && self.grid.is_paused() {
            self.grid.step();
        }
        if random {
            patterns::random_fill(&mut self.grid);
        }
        if let Some(loaded) = pattern.and_then(|n| patterns::PATTERNS.get(n)) {
            loaded.load(&mut self.grid);
            info!("loaded pattern: {}", loaded.name);
        }
    }

    /// Press or drag: primary button brings the cell under the pointer to
    /// life, secondary kills it. Out-of-range positions fall through to the
    /// grid, which ignores them.
    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response, origin: Pos2) {
        let (primary, secondary, pointer) = ctx.input(|i| {
            (
                i.pointer.button_down(PointerButton::Primary),
                i.pointer.button_down(PointerButton::Secondary),
                i.pointer.interact_pos(),
            )
        });
        if !primary && !secondary {
            return;
        }
        if let Some(pos) = pointer.filter(|p| response.rect.contains(*p)) {
            let col = ((pos.x - origin.x) / CELL_SIZE as f32).floor() as i32;
            let row = ((pos.y - origin.y) / CELL_SIZE as f32).floor() as i32;
            if primary {
                self.grid.activate(col, row);
            } else {
                self.grid.kill(col, row);
            }
        }
    }

    /// Full overwrite every frame: one filled square per cell, row-major.
    fn draw_cells(&self, painter: &egui::Painter, origin: Pos2) {
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let rect = Rect::from_min_size(
                    Pos2::new(
                        origin.x + (col * CELL_SIZE) as f32,
                        origin.y + (row * CELL_SIZE) as f32,
                    ),
                    Vec2::splat(CELL_SIZE as f32),
                );
                let color = match self.grid.state(col, row) {
                    CellState::Alive => ALIVE_COLOR,
                    CellState::Dead => DEAD_COLOR,
                };
                painter.rect_filled(rect, 0.0, color);
            }
        }
    }

    fn draw_grid_lines(&self, painter: &egui::Painter, origin: Pos2) {
        let stroke = Stroke::new(1.0, GRID_LINE_COLOR);
        let size = canvas_size();
        for row in 0..GRID_HEIGHT {
            let y = origin.y + (row * CELL_SIZE) as f32;
            painter.line_segment(
                [Pos2::new(origin.x, y), Pos2::new(origin.x + size.x, y)],
                stroke,
            );
        }
        for col in 0..GRID_WIDTH {
            let x = origin.x + (col * CELL_SIZE) as f32;
            painter.line_segment(
                [Pos2::new(x, origin.y), Pos2::new(x, origin.y + size.y)],
                stroke,
            );
        }
    }

    fn title(&self) -> String {
        let state = if self.grid.is_paused() {
            "paused"
        } else {
            "running"
        };
        format!(
            "Game of Life | gen {} | {} alive | {}",
            self.grid.generation(),
            self.grid.live_cells().len(),
            state
        )
    }
}
