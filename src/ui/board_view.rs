//! Board rendering for the GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        last_move: Option<usize>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_cells(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move.and_then(Pos::from_index) {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if board.get(pos) == Stone::Empty {
                        self.draw_hover_preview(&painter, pos, current_turn);
                    }
                    if response.clicked() {
                        clicked = Some(pos.to_index());
                    }
                }
            }
        }

        clicked
    }

    /// Draw the 10x10 cell grid
    fn draw_cells(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let rect = self.cell_rect(Pos::new(row as u8, col as u8));
                painter.rect_filled(rect, CornerRadius::same(3), CELL_BG);
                painter.rect_stroke(
                    rect,
                    CornerRadius::same(3),
                    Stroke::new(1.0, CELL_BORDER),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (idx, stone) in board.iter() {
            if stone == Stone::Empty {
                continue;
            }
            if let Some(pos) = Pos::from_index(idx) {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 50),
        );

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::Yellow => {
                painter.circle_filled(center, radius, YELLOW_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, YELLOW_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => hover_black(),
            Stone::Yellow => hover_yellow(),
            Stone::Empty => return,
        };
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(pos), radius, color);
    }

    /// Screen area of one cell, inset by the gap
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size + CELL_GAP * 0.5,
                BOARD_MARGIN + pos.row as f32 * self.cell_size + CELL_GAP * 0.5,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size - CELL_GAP))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Center of the cell at `pos`
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
