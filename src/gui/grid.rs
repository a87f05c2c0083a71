use super::Config;
use eframe::egui::{
    load::SizedTexture, pos2, Color32, ColorImage, Context, Image, Pos2, Rect, Response, Sense,
    Stroke, TextureFilter, TextureHandle, TextureOptions, TextureWrapMode, Ui, Vec2,
};
use gol_board::{Board, ChangeList};

const TEXTURE_OPTIONS: TextureOptions = TextureOptions {
    magnification: TextureFilter::Nearest,
    minification: TextureFilter::Nearest,
    wrap_mode: TextureWrapMode::ClampToEdge,
};

/// Texture of the play area, one pixel per cell.
///
/// Built once per board; afterwards only the pixels of changed cells are
/// rewritten.
pub struct GridTexture {
    image: ColorImage,
    texture: TextureHandle,
    width: usize,
    height: usize,
}

fn color(alive: bool) -> Color32 {
    if alive {
        Config::ALIVE_COLOR
    } else {
        Config::DEAD_COLOR
    }
}

impl GridTexture {
    pub fn new(ctx: &Context, board: &Board) -> Self {
        let (width, height) = (board.width(), board.height());
        let mut image = ColorImage::new([width, height], Config::DEAD_COLOR);
        for (row, col) in board.interior() {
            if board.get(row, col).unwrap_or(false) {
                image.pixels[(row - 1) * width + col - 1] = Config::ALIVE_COLOR;
            }
        }
        let texture = ctx.load_texture("Game of Life board", image.clone(), TEXTURE_OPTIONS);
        Self {
            image,
            texture,
            width,
            height,
        }
    }

    /// Repaints the given cells from the board's current state.
    pub fn apply_changes(&mut self, board: &Board, changes: &ChangeList) {
        if changes.is_empty() {
            return;
        }
        let partial = changes.len() <= Config::PARTIAL_UPLOAD_LIMIT;
        for &(row, col) in changes {
            let c = color(board.get(row, col).unwrap_or(false));
            self.image.pixels[(row - 1) * self.width + col - 1] = c;
            if partial {
                self.texture.set_partial(
                    [col - 1, row - 1],
                    ColorImage::new([1, 1], c),
                    TEXTURE_OPTIONS,
                );
            }
        }
        if !partial {
            self.texture.set(self.image.clone(), TEXTURE_OPTIONS);
        }
    }

    /// Repaints a single cell, e.g. after a toggle.
    pub fn apply_cell(&mut self, board: &Board, row: usize, col: usize) {
        let c = color(board.get(row, col).unwrap_or(false));
        self.image.pixels[(row - 1) * self.width + col - 1] = c;
        self.texture
            .set_partial([col - 1, row - 1], ColorImage::new([1, 1], c), TEXTURE_OPTIONS);
    }

    /// Rebuilds the whole texture after the board was replaced in place.
    pub fn reload(&mut self, board: &Board) {
        for (row, col) in board.interior() {
            self.image.pixels[(row - 1) * self.width + col - 1] =
                color(board.get(row, col).unwrap_or(false));
        }
        self.texture.set(self.image.clone(), TEXTURE_OPTIONS);
    }

    /// Largest on-screen size of the board that fits into `area`, keeping cells square.
    pub fn fit(&self, area: Vec2) -> Vec2 {
        let cell = (area.x / self.width as f32).min(area.y / self.height as f32);
        let cell = cell.max(1.);
        Vec2::new(cell * self.width as f32, cell * self.height as f32)
    }

    /// Draws the board and returns the click-sensitive response.
    pub fn show(&self, ui: &mut Ui, size: Vec2) -> Response {
        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));

        let rect = response.rect;
        let cell = rect.width() / self.width as f32;
        if cell >= Config::MIN_CELL_PX_FOR_GRID_LINES {
            let painter = ui.painter_at(rect);
            let stroke = Stroke::new(1., Config::GRID_LINE_COLOR);
            for col in 0..=self.width {
                let x = rect.left() + col as f32 * cell;
                painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            }
            for row in 0..=self.height {
                let y = rect.top() + row as f32 * cell;
                painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
            }
        }
        response
    }

    pub fn cell_at(&self, rect: Rect, pos: Pos2) -> Option<(usize, usize)> {
        cell_at(rect, pos, self.width, self.height)
    }
}

/// Maps a screen position inside `rect` to the `(row, col)` of the play area cell under it.
pub fn cell_at(rect: Rect, pos: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    if !rect.contains(pos) || rect.width() <= 0. || rect.height() <= 0. {
        return None;
    }
    let p = (pos - rect.left_top()) / rect.size();
    let col = ((p.x * width as f32) as usize).min(width - 1) + 1;
    let row = ((p.y * height as f32) as usize).min(height - 1) + 1;
    Some((row, col))
}
