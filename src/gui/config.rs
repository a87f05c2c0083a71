use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1000., 600.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 360.];

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TITLE_SIZE: f32 = 54.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BACKGROUND_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const MENU_BUTTON_SIZE: [f32; 2] = [320., 64.];
    pub const FILENAME_INPUT_FIELD_SIZE: [f32; 2] = [140., 20.];
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;

    pub const WIDGET_GAP: f32 = 20.;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0xf0, 0xc0, 0x20);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(0x20, 0x20, 0x28);
    pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0x40, 0x40, 0x48);
    /// Grid lines are drawn only when a cell is at least this many pixels wide.
    pub const MIN_CELL_PX_FOR_GRID_LINES: f32 = 6.;
    /// Larger change lists re-upload the whole texture instead of single pixels.
    pub const PARTIAL_UPLOAD_LIMIT: usize = 256;

    pub const DEFAULT_BOARD_SIZE: [usize; 2] = [40, 25];
    pub const MAX_BOARD_SIDE: usize = 1000;
    pub const STEPS_PER_SECOND: f64 = 2.;
    pub const MAX_STEPS_PER_SECOND: f64 = 60.;
    pub const FILL_RATE: f64 = 0.3;

    pub const SAVES_DIR: &'static str = "saves";
    pub const SAVES_DIR_ENV: &'static str = "GOL_SAVES_DIR";
    pub const SAVE_EXTENSION: &'static str = "txt";
    pub const DEFAULT_SAVE_NAME: &'static str = "board";
    pub const MAX_SAVE_NAME_LEN: usize = 64;
}
