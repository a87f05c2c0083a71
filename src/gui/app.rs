use super::{Config, GridTexture, StepCadence};
use crate::{SaveDir, Session};
use anyhow::{Context as _, Result};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use egui_file::FileDialog;
use gol_board::Board;
use std::{path::Path, time::Instant};

/// Screen currently shown in the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Screen {
    Menu,      // Play / Load / Help buttons.
    BoardSize, // Width and height entry before a new game.
    Game,      // The board itself.
    Load,      // List of saves.
    Help,
}

pub(super) enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub(super) screen: Screen,
    pub(super) saves: Option<SaveDir>, // None if the save directory could not be opened.
    pub(super) session: Option<Session>, // Board being edited or simulated.
    pub(super) grid: Option<GridTexture>, // Texture of the session's board.
    pub(super) cadence: StepCadence,      // Paces the steps of a running simulation.
    pub(super) steps_per_second: f64,
    pub(super) board_width: usize, // Values of the board size entry.
    pub(super) board_height: usize,
    pub(super) fill_rate: f64,
    pub(super) save_name: String, // The name of the save to write the board to.
    pub(super) overwrite: bool,   // Allow replacing an existing save.
    pub(super) save_list: Vec<String>,
    pub(super) file_dialog: Option<FileDialog>,
    pub(super) status: Option<Status>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        match SaveDir::from_env() {
            Ok(saves) => {
                tracing::info!(dir = %saves.root().display(), "using save directory");
                Self::with_saves(Some(saves))
            }
            Err(err) => {
                let mut app = Self::with_saves(None);
                app.report_error(err.into());
                app
            }
        }
    }

    fn with_saves(saves: Option<SaveDir>) -> Self {
        Self {
            screen: Screen::Menu,
            saves,
            session: None,
            grid: None,
            cadence: StepCadence::default(),
            steps_per_second: Config::STEPS_PER_SECOND,
            board_width: Config::DEFAULT_BOARD_SIZE[0],
            board_height: Config::DEFAULT_BOARD_SIZE[1],
            fill_rate: Config::FILL_RATE,
            save_name: Config::DEFAULT_SAVE_NAME.to_string(),
            overwrite: false,
            save_list: vec![],
            file_dialog: None,
            status: None,
        }
    }

    pub(super) fn report_error(&mut self, err: anyhow::Error) {
        tracing::warn!(error = %format!("{:#}", err), "operation failed");
        self.status = Some(Status::Error(format!("{:#}", err)));
    }

    pub(super) fn report_info(&mut self, message: String) {
        self.status = Some(Status::Info(message));
    }

    /// Switches to the menu and drops the current session, if any.
    pub fn show_menu(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("session closed");
        }
        self.grid = None;
        self.file_dialog = None;
        self.status = None;
        self.screen = Screen::Menu;
    }

    pub fn show_board_size(&mut self) {
        self.status = None;
        self.screen = Screen::BoardSize;
    }

    pub fn show_help(&mut self) {
        self.screen = Screen::Help;
    }

    pub fn show_load(&mut self) {
        self.status = None;
        self.refresh_save_list();
        self.screen = Screen::Load;
    }

    pub(super) fn refresh_save_list(&mut self) {
        let listed = match &self.saves {
            Some(saves) => saves.list().context("cannot list saves"),
            None => Ok(vec![]),
        };
        match listed {
            Ok(names) => self.save_list = names,
            Err(err) => {
                self.save_list.clear();
                self.report_error(err);
            }
        }
    }

    /// Starts a game on `board`, replacing the current one.
    pub fn start_session(&mut self, ctx: &Context, board: Board) {
        tracing::info!(
            width = board.width(),
            height = board.height(),
            population = board.population(),
            "session started"
        );
        self.grid = Some(GridTexture::new(ctx, &board));
        self.session = Some(Session::from_board(board));
        self.cadence.restart(Instant::now());
        self.file_dialog = None;
        self.screen = Screen::Game;
    }

    pub(super) fn start_new_board(&mut self, ctx: &Context) {
        match Board::new(self.board_width, self.board_height) {
            Ok(board) => {
                self.status = None;
                self.start_session(ctx, board);
            }
            Err(err) => self.report_error(anyhow::Error::new(err).context("cannot create board")),
        }
    }

    pub(super) fn load_save(&mut self, ctx: &Context, name: &str) {
        let loaded = self
            .saves
            .as_ref()
            .context("save directory is unavailable")
            .and_then(|saves| {
                saves
                    .load(name)
                    .with_context(|| format!("cannot load save {:?}", name))
            });
        match loaded {
            Ok(board) => {
                self.save_name = name.to_string();
                self.start_session(ctx, board);
                self.report_info(format!("Loaded {:?}", name));
            }
            Err(err) => self.report_error(err),
        }
    }

    pub(super) fn load_path(&mut self, ctx: &Context, path: &Path) {
        match SaveDir::load_file(path).with_context(|| format!("cannot load {}", path.display())) {
            Ok(board) => {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    self.save_name = stem.to_string();
                }
                self.start_session(ctx, board);
                self.report_info(format!("Loaded {}", path.display()));
            }
            Err(err) => self.report_error(err),
        }
    }

    pub(super) fn open_file_dialog(&mut self) {
        let initial = self.saves.as_ref().map(|saves| saves.root().to_path_buf());
        let mut dialog = FileDialog::open_file(initial);
        dialog.open();
        self.file_dialog = Some(dialog);
    }

    fn save_board(&mut self) -> Result<String> {
        let session = self.session.as_ref().context("no board to save")?;
        let saves = self.saves.as_ref().context("save directory is unavailable")?;
        let path = saves
            .save(session.board(), self.save_name.trim(), self.overwrite)
            .context("cannot save board")?;
        self.overwrite = false;
        Ok(format!("Saved to {}", path.display()))
    }

    pub(super) fn save(&mut self) {
        match self.save_board() {
            Ok(message) => self.report_info(message),
            Err(err) => self.report_error(err),
        }
    }

    /// Advances the board one generation and repaints the flipped cells.
    pub(super) fn step(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(err) = session.step() {
            session.set_running(false);
            self.report_error(anyhow::Error::new(err).context("cannot advance board"));
            return;
        }
        if let Some(grid) = self.grid.as_mut() {
            grid.apply_changes(session.board(), session.last_changes());
        }
        if session.stopped_on_stall() {
            tracing::info!(generation = session.generation(), "board stalled");
            self.report_info("Nothing changed, simulation stopped".to_string());
        }
    }

    pub(super) fn toggle_cell(&mut self, row: usize, col: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.toggle(row, col) {
            Ok(()) => {
                if let Some(grid) = self.grid.as_mut() {
                    grid.apply_cell(session.board(), row, col);
                }
            }
            Err(err) => self.report_error(anyhow::Error::new(err).context("cannot toggle cell")),
        }
    }

    pub(super) fn toggle_running(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_running();
            if session.is_running() {
                self.cadence.restart(Instant::now());
            }
        }
    }

    pub(super) fn clear_board(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear();
            if let Some(grid) = self.grid.as_mut() {
                grid.reload(session.board());
            }
        }
    }

    pub(super) fn randomize_board(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.randomize(None, self.fill_rate) {
            Ok(()) => {
                if let Some(grid) = self.grid.as_mut() {
                    grid.reload(session.board());
                }
            }
            Err(err) => self.report_error(anyhow::Error::new(err).context("cannot randomize board")),
        }
    }

    fn update_simulation(&mut self, ctx: &Context) {
        let is_running = self.session.as_ref().is_some_and(Session::is_running);
        if !is_running {
            return;
        }
        let now = Instant::now();
        if self.cadence.poll(now, self.steps_per_second) {
            self.step();
        }
        ctx.request_repaint_after(self.cadence.remaining(now, self.steps_per_second));
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (escape, space, enter, s) = ctx.input(|input| {
            (
                input.key_pressed(Key::Escape),
                input.key_pressed(Key::Space),
                input.key_pressed(Key::Enter),
                input.key_pressed(Key::S),
            )
        });
        if escape && self.screen != Screen::Menu {
            self.show_menu();
            return;
        }
        if self.screen == Screen::Game {
            let is_running = self.session.as_ref().is_some_and(Session::is_running);
            if space && !is_running {
                self.step();
            }
            if enter {
                self.toggle_running();
            }
            if s {
                self.save();
            }
        }
    }

    fn update_file_dialog(&mut self, ctx: &Context) {
        let mut selected = None;
        if let Some(dialog) = self.file_dialog.as_mut() {
            if dialog.show(ctx).selected() {
                selected = dialog.path().map(|path| path.to_path_buf());
            }
        }
        if let Some(path) = selected {
            self.file_dialog = None;
            self.load_path(ctx, &path);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| match self.screen {
                Screen::Menu => self.draw_menu(ui),
                Screen::BoardSize => self.draw_board_size(ui),
                Screen::Game => self.draw_game(ui),
                Screen::Load => self.draw_load(ui),
                Screen::Help => self.draw_help(ui),
            });

        self.update_file_dialog(ctx);
        self.update_simulation(ctx);
    }

    fn clear_color(&self, _visuals: &eframe::egui::Visuals) -> [f32; 4] {
        Color32::LIGHT_GRAY.to_normalized_gamma_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Event, Modifiers, RawInput};
    use std::fs;

    fn press(ctx: &Context, app: &mut App, key: Key) {
        let input = RawInput {
            events: vec![Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.handle_keys(ctx));
    }

    fn blinker_app(ctx: &Context) -> App {
        let mut board = Board::new(5, 5).unwrap();
        for col in 2..=4 {
            board.toggle(3, col).unwrap();
        }
        let mut app = App::with_saves(None);
        app.start_session(ctx, board);
        app
    }

    fn generation(app: &App) -> u64 {
        app.session.as_ref().unwrap().generation()
    }

    #[test]
    fn test_space_steps_only_while_paused() {
        let ctx = Context::default();
        let mut app = blinker_app(&ctx);

        press(&ctx, &mut app, Key::Space);
        assert_eq!(generation(&app), 1);

        press(&ctx, &mut app, Key::Enter);
        assert!(app.session.as_ref().unwrap().is_running());
        press(&ctx, &mut app, Key::Space);
        assert_eq!(generation(&app), 1);

        press(&ctx, &mut app, Key::Enter);
        press(&ctx, &mut app, Key::Space);
        assert_eq!(generation(&app), 2);
    }

    #[test]
    fn test_oversized_file_is_not_opened() {
        let ctx = Context::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.txt");
        let width = Config::MAX_BOARD_SIDE + 3;
        let row = vec!["0"; width].join(" ");
        fs::write(&path, format!("0.1\n{} 3\n{row}\n{row}\n{row}\n", width)).unwrap();

        let mut app = App::with_saves(None);
        app.load_path(&ctx, &path);
        assert!(app.session.is_none());
        assert!(app.grid.is_none());
        assert_eq!(app.screen, Screen::Menu);
        assert!(matches!(app.status, Some(Status::Error(_))));
    }
}
