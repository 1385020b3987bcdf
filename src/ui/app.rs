//! Main application for the GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameEvent, GameMode, Session, SessionConfig, Stone};

/// Which page is showing
enum Screen {
    Welcome,
    Playing(Session),
}

/// Main application: a welcome page to pick the mode, then the game page
pub struct GomokuApp {
    screen: Screen,
    board_view: BoardView,
    config: SessionConfig,
    last_frame: Option<Instant>,
    /// Status line, rewritten from session events
    status_line: String,
    countdown_line: String,
}

impl GomokuApp {
    /// Create the app. With `mode` set the welcome page is skipped.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: SessionConfig,
        mode: Option<GameMode>,
    ) -> Self {
        let mut app = Self {
            screen: Screen::Welcome,
            board_view: BoardView::default(),
            config,
            last_frame: None,
            status_line: String::new(),
            countdown_line: String::new(),
        };
        if let Some(mode) = mode {
            app.start_game(mode);
        }
        app
    }

    fn start_game(&mut self, mode: GameMode) {
        let session = Session::start(mode, self.config);
        self.countdown_line = format!("Time Left: {}s", session.remaining_seconds());
        self.screen = Screen::Playing(session);
        self.last_frame = Some(Instant::now());
    }

    /// Feed wall time into the session and fold its events into the text lines
    fn pump_session(&mut self) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);
        session.advance(elapsed);

        let events: Vec<GameEvent> = session.drain_events().collect();
        for event in events {
            match event {
                GameEvent::TurnChanged(player) => {
                    self.status_line = format!("{}, Play!", player.name());
                    self.countdown_line = format!("Time Left: {}s", session.remaining_seconds());
                }
                GameEvent::Tick(remaining) => {
                    self.countdown_line = format!("Time Left: {remaining}s");
                }
                GameEvent::GameOver { .. } => {
                    self.status_line = session.status_text();
                }
                GameEvent::CellChanged { .. } => {}
            }
            debug!(?event, "ui event");
        }
    }

    /// Render the welcome page
    fn render_welcome(&mut self, ctx: &Context) {
        let mut chosen = None;
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(
                        RichText::new("FIVE IN A ROW")
                            .size(36.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("10x10 board · 15 seconds per move")
                            .size(13.0)
                            .color(TEXT_MUTED),
                    );
                    ui.add_space(32.0);

                    if Self::menu_button(ui, "Player vs Player") {
                        chosen = Some(GameMode::PvP);
                    }
                    ui.add_space(12.0);
                    if Self::menu_button(ui, "Player vs Computer") {
                        chosen = Some(GameMode::PvComputer);
                    }
                });
            });
        if let Some(mode) = chosen {
            self.start_game(mode);
        }
    }

    fn menu_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(16.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the game page: menu, side panel and board
    fn render_game(&mut self, ctx: &Context) {
        let mut restart = false;
        let mut back_to_menu = false;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart").clicked() {
                        restart = true;
                        ui.close_menu();
                    }
                    if ui.button("Change Mode").clicked() {
                        back_to_menu = true;
                        ui.close_menu();
                    }
                });

                if let Screen::Playing(session) = &self.screen {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(match session.mode() {
                            GameMode::PvP => "PvP - Hotseat",
                            GameMode::PvComputer => "PvC - You: Black",
                        });
                    });
                }
            });
        });

        let Screen::Playing(session) = &mut self.screen else {
            return;
        };

        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                Self::card_frame().show(ui, |ui| {
                    let accent = match session.current_player() {
                        Stone::Yellow => YELLOW_STONE,
                        _ => TEXT_PRIMARY,
                    };
                    ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(&self.status_line).size(18.0).strong().color(accent));
                    if session.is_computer_turn() {
                        ui.label(
                            RichText::new("Computer thinking...")
                                .size(12.0)
                                .color(TIMER_WARNING),
                        );
                    }
                });
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    let color = timer_color(session.remaining_seconds());
                    ui.label(RichText::new(&self.countdown_line).size(24.0).color(color));
                });
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("Move #{}", session.board().stone_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(8.0);
                    if Self::menu_button(ui, "Restart") {
                        restart = true;
                    }
                });
            });

        CentralPanel::default().show(ctx, |ui| {
            let accepts_input = session.is_active() && !session.is_computer_turn();
            let clicked = self.board_view.show(
                ui,
                session.board(),
                session.current_player(),
                session.last_move(),
                session.winning_line(),
                accepts_input,
            );
            if let Some(index) = clicked {
                session.submit_move(index);
            }
        });

        if restart {
            session.reset();
        }
        if back_to_menu {
            self.screen = Screen::Welcome;
            self.last_frame = None;
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };
        // R - Restart
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            session.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.pump_session();

        match self.screen {
            Screen::Welcome => self.render_welcome(ctx),
            Screen::Playing(_) => self.render_game(ctx),
        }

        // Input and resets may have emitted events this frame
        self.pump_session();

        // Wake up for the next tick or computer reply
        if let Screen::Playing(session) = &self.screen {
            if let Some(wait) = session.time_to_next_event() {
                ctx.request_repaint_after(wait);
            }
        }
    }
}
