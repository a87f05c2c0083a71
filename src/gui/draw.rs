use super::{app::Status, App, Config};
use eframe::egui::{
    Align, Button, Checkbox, DragValue, Layout, RichText, ScrollArea, Slider, Stroke, TextEdit,
    Ui, Vec2,
};

const HELP_TEXT: &str = "\
Conway's Game of Life is played on a grid of cells, each either alive or dead.
Every generation all cells change at once, based on their eight neighbours:

  - a dead cell with exactly three alive neighbours is born;
  - an alive cell with two or three alive neighbours survives;
  - every other cell dies or stays dead.

The board is bounded: cells outside of it are always dead.

Click a cell to flip it.
  Space   advance one generation
  Enter   start or stop the simulation
  S       save the board
  Esc     back to the menu";

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn new_menu_button(text: &str) -> Button {
        Button::new(
            RichText::new(text)
                .color(Config::TEXT_COLOR)
                .size(Config::TITLE_SIZE * 0.6),
        )
        .fill(Config::BUTTON_FILL_COLOR)
        .stroke(Stroke::new(
            Config::BUTTON_STROKE_WIDTH,
            Config::BUTTON_STROKE_COLOR,
        ))
    }

    fn draw_title(ui: &mut Ui, text: &str) {
        ui.label(
            RichText::new(text)
                .color(Config::TEXT_COLOR)
                .size(Config::TITLE_SIZE),
        );
        ui.add_space(Config::WIDGET_GAP);
    }

    fn draw_status(&self, ui: &mut Ui) {
        match &self.status {
            Some(Status::Info(message)) => {
                ui.label(Self::new_text(message));
            }
            Some(Status::Error(message)) => {
                ui.label(Self::new_text(message).color(Config::ERROR_COLOR));
            }
            None => {}
        }
    }

    pub(super) fn draw_menu(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            Self::draw_title(ui, "Game of Life");

            if ui
                .add_sized(Config::MENU_BUTTON_SIZE, Self::new_menu_button("PLAY"))
                .clicked()
            {
                self.show_board_size();
            }
            ui.add_space(Config::WIDGET_GAP);
            if ui
                .add_sized(Config::MENU_BUTTON_SIZE, Self::new_menu_button("LOAD"))
                .clicked()
            {
                self.show_load();
            }
            ui.add_space(Config::WIDGET_GAP);
            if ui
                .add_sized(Config::MENU_BUTTON_SIZE, Self::new_menu_button("HELP"))
                .clicked()
            {
                self.show_help();
            }

            ui.add_space(Config::WIDGET_GAP);
            self.draw_status(ui);
        });
    }

    pub(super) fn draw_board_size(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            Self::draw_title(ui, "Board size");

            ui.horizontal(|ui| {
                ui.label(Self::new_text("Width: "));
                ui.add(DragValue::new(&mut self.board_width).range(1..=Config::MAX_BOARD_SIDE));
                ui.add_space(Config::WIDGET_GAP);
                ui.label(Self::new_text("Height: "));
                ui.add(DragValue::new(&mut self.board_height).range(1..=Config::MAX_BOARD_SIDE));
            });
            ui.add_space(Config::WIDGET_GAP);

            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Start")).clicked() {
                    let ctx = ui.ctx().clone();
                    self.start_new_board(&ctx);
                }
                if ui.add(Self::new_button("Back")).clicked() {
                    self.show_menu();
                }
            });

            ui.add_space(Config::WIDGET_GAP);
            self.draw_status(ui);
        });
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let is_running = session.is_running();

        let text = if is_running { "Stop" } else { "Run" };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_running();
        }

        ui.add_enabled_ui(!is_running, |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.step();
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Steps per second: "));
            ui.add(
                Slider::new(
                    &mut self.steps_per_second,
                    0.5..=Config::MAX_STEPS_PER_SECOND,
                )
                .logarithmic(true),
            );
        });

        ui.add_space(Config::WIDGET_GAP);

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.clear_board();
            }
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.randomize_board();
            }
        });
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Fill rate: "));
            ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
        });
    }

    fn draw_save_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Save")).clicked() {
                self.save();
            }
            ui.label(Self::new_text("named: "));
            ui.add_sized(
                Config::FILENAME_INPUT_FIELD_SIZE,
                TextEdit::singleline(&mut self.save_name),
            );
        });

        let exists = self
            .saves
            .as_ref()
            .is_some_and(|saves| saves.exists(self.save_name.trim()));
        ui.add_enabled(
            exists,
            Checkbox::new(&mut self.overwrite, Self::new_text("Overwrite existing save")),
        );
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let board = session.board();
        ui.label(Self::new_text(&format!(
            "Board: {} x {}",
            board.width(),
            board.height()
        )));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            session.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            session.population()
        )));
        ui.label(Self::new_text(&format!(
            "Changed cells: {}",
            session.last_changes().len()
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            session.last_step_duration() * 1e3
        )));
        if session.is_running() {
            ui.label(Self::new_text(&format!(
                "Steps per second: {:.1}",
                self.cadence.steps_per_second()
            )));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_save_controls(ui);
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_stats(ui);
                });
            });

            if ui.add(Self::new_button("Menu")).clicked() {
                self.show_menu();
                return;
            }
            ui.add_space(Config::WIDGET_GAP);
            self.draw_status(ui);
        });
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let Some(grid) = self.grid.as_ref() else {
            return;
        };
        let size = grid.fit(ui.available_size());
        let response = grid.show(ui, size);
        if response.clicked() {
            let cell = response
                .interact_pointer_pos()
                .and_then(|pos| grid.cell_at(response.rect, pos));
            if let Some((row, col)) = cell {
                self.toggle_cell(row, col);
            }
        }
    }

    pub(super) fn draw_game(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                self.draw_board(ui);
            });
        });
    }

    pub(super) fn draw_load(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            Self::draw_title(ui, "Load");

            if self.save_list.is_empty() {
                ui.label(Self::new_text("No saves yet."));
            }
            let mut chosen = None;
            ScrollArea::vertical()
                .max_height((ui.available_height() - 4. * Config::WIDGET_GAP).max(0.))
                .show(ui, |ui| {
                    for name in &self.save_list {
                        if ui
                            .add_sized(
                                Vec2::new(Config::MENU_BUTTON_SIZE[0], 0.),
                                Self::new_button(name),
                            )
                            .clicked()
                        {
                            chosen = Some(name.clone());
                        }
                    }
                });
            if let Some(name) = chosen {
                let ctx = ui.ctx().clone();
                self.load_save(&ctx, &name);
                return;
            }

            ui.add_space(Config::WIDGET_GAP);
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Browse...")).clicked() {
                    self.open_file_dialog();
                }
                if ui.add(Self::new_button("Refresh")).clicked() {
                    self.refresh_save_list();
                }
                if ui.add(Self::new_button("Back")).clicked() {
                    self.show_menu();
                }
            });

            ui.add_space(Config::WIDGET_GAP);
            self.draw_status(ui);
        });
    }

    pub(super) fn draw_help(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            Self::draw_title(ui, "Help");
        });
        ui.label(Self::new_text(HELP_TEXT));
        ui.add_space(Config::WIDGET_GAP);
        if ui.add(Self::new_button("Back")).clicked() {
            self.show_menu();
        }
    }
}
