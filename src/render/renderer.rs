use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

use super::icon::ToggleIcons;
use super::surface::{PixelRect, Surface};
use crate::game::{Food, GameConfig, GameState, Position, Rgb, Snake};

/// Top-left of the score line
pub const SCORE_ORIGIN: Position = Position::new(10, 10);
/// Top-left of the "Cheat-Bot" label
pub const LABEL_ORIGIN: Position = Position::new(10, 90);
/// Top-left of the autopilot switch, just under the label
pub const TOGGLE_ORIGIN: Position = Position::new(10, 130);
/// Side of the autopilot switch, in grid cells
pub const TOGGLE_CELLS: i32 = 5;

/// Draw every body segment as a `size` square in the snake's color
pub fn draw_snake(surface: &mut Surface, snake: &Snake, size: i32) {
    for segment in &snake.body {
        surface.fill_rect(PixelRect::new(segment.x, segment.y, size, size), snake.color);
    }
}

/// Draw the food as a full grid cell
pub fn draw_food(surface: &mut Surface, food: &Food, grid_size: i32) {
    let p = food.position;
    surface.fill_rect(PixelRect::new(p.x, p.y, grid_size, grid_size), food.color);
}

/// Maps terminal cells of the last drawn board back to screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMap {
    area: Rect,
    subpixel: i32,
}

impl ScreenMap {
    /// The two screen pixels under an absolute terminal cell, if the cell is
    /// on the board
    pub fn pixels_at(&self, column: u16, row: u16) -> Option<[Position; 2]> {
        if !self.area.contains((column, row).into()) {
            return None;
        }

        let x = i32::from(column - self.area.x) * self.subpixel + self.subpixel / 2;
        let top = i32::from(row - self.area.y) * 2 * self.subpixel + self.subpixel / 2;
        Some([Position::new(x, top), Position::new(x, top + self.subpixel)])
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Sub-pixel side: one snake segment
    fn subpixel(&self) -> i32 {
        self.config.snake_size
    }

    /// Screen rectangle of the autopilot switch
    pub fn toggle_rect(&self) -> PixelRect {
        let side = TOGGLE_CELLS * self.config.grid_size;
        PixelRect::new(TOGGLE_ORIGIN.x, TOGGLE_ORIGIN.y, side, side)
    }

    /// Size of the switch icon in sub-pixels
    pub fn toggle_icon_size(&self) -> (u32, u32) {
        let rect = self.toggle_rect();
        (
            (rect.width / self.subpixel()) as u32,
            (rect.height / self.subpixel()) as u32,
        )
    }

    /// Board size in terminal cells
    pub fn board_size(&self) -> (u16, u16) {
        let columns = self.config.width / self.subpixel();
        let rows = self.config.height / (2 * self.subpixel());
        (columns as u16, rows as u16)
    }

    /// Inner board area for a frame, centred and clipped to the frame
    pub fn board_area(&self, area: Rect) -> Rect {
        let (columns, rows) = self.board_size();
        let outer_width = columns + 2;
        let outer_height = rows + 2;
        let x = area.x + area.width.saturating_sub(outer_width) / 2;
        let y = area.y + area.height.saturating_sub(outer_height) / 2;

        Rect::new(x + 1, y + 1, columns, rows).intersection(area)
    }

    pub fn screen_map(&self, area: Rect) -> ScreenMap {
        ScreenMap {
            area: self.board_area(area),
            subpixel: self.subpixel(),
        }
    }

    /// Draw one frame of the game in screen space
    pub fn compose(&self, state: &GameState, icons: &ToggleIcons) -> Surface {
        let mut surface = Surface::new(self.config.width, self.config.height, self.subpixel());
        surface.fill(Rgb::BLACK);

        draw_snake(&mut surface, &state.snake, self.config.snake_size);
        draw_food(&mut surface, &state.food, self.config.grid_size);

        surface.draw_text(SCORE_ORIGIN, format!("Score: {}", state.score()), Rgb::WHITE);
        surface.draw_text(LABEL_ORIGIN, "Cheat-Bot", Rgb::WHITE);
        surface.blit(icons.for_state(state.snake.auto_move), TOGGLE_ORIGIN);

        surface
    }

    /// Render the frame and return where the board landed
    pub fn render(&self, frame: &mut Frame, state: &GameState, icons: &ToggleIcons) -> ScreenMap {
        let map = self.screen_map(frame.area());
        let board = map.area();

        let outer = Rect::new(
            board.x.saturating_sub(1),
            board.y.saturating_sub(1),
            board.width + 2,
            board.height + 2,
        )
        .intersection(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake Game ")
            .title_alignment(Alignment::Center);
        frame.render_widget(block, outer);

        let surface = self.compose(state, icons);
        frame.render_widget(&surface, board);

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use image::{DynamicImage, Rgba, RgbaImage};
    use ratatui::{Terminal, backend::TestBackend};

    fn icons() -> ToggleIcons {
        let on = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])));
        let off = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])));
        ToggleIcons::from_images(&on, &off, 10, 10)
    }

    fn state() -> GameState {
        let config = GameConfig::default();
        let mut snake = Snake::new(vec![Position::new(300, 300)], Direction::Right);
        snake.color = Rgb::GREEN;
        let mut food = Food::new(Position::new(400, 100));
        food.color = Rgb::BLUE;
        GameState::new(snake, food, config.board())
    }

    #[test]
    fn test_geometry() {
        let renderer = Renderer::new(&GameConfig::default());
        assert_eq!(renderer.board_size(), (60, 20));
        assert_eq!(renderer.toggle_rect(), PixelRect::new(10, 130, 100, 100));
        assert_eq!(renderer.toggle_icon_size(), (10, 10));
    }

    #[test]
    fn test_board_area_centred() {
        let renderer = Renderer::new(&GameConfig::default());
        let area = renderer.board_area(Rect::new(0, 0, 82, 32));
        assert_eq!(area, Rect::new(11, 6, 60, 20));
    }

    #[test]
    fn test_board_area_clipped() {
        let renderer = Renderer::new(&GameConfig::default());
        let area = renderer.board_area(Rect::new(0, 0, 40, 10));
        assert_eq!(area, Rect::new(1, 1, 39, 9));
    }

    #[test]
    fn test_compose_draws_entities() {
        let renderer = Renderer::new(&GameConfig::default());
        let surface = renderer.compose(&state(), &icons());

        // Snake square covers one sub-pixel
        assert_eq!(surface.pixel(Position::new(305, 305)), Some(Rgb::GREEN));
        assert_eq!(surface.pixel(Position::new(315, 305)), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(Position::new(305, 315)), Some(Rgb::BLACK));

        // Food covers the whole grid cell
        assert_eq!(surface.pixel(Position::new(400, 100)), Some(Rgb::BLUE));
        assert_eq!(surface.pixel(Position::new(419, 119)), Some(Rgb::BLUE));

        // Autopilot off: dark switch
        assert_eq!(surface.pixel(Position::new(50, 150)), Some(Rgb::BLACK));
    }

    #[test]
    fn test_compose_toggle_reflects_autopilot() {
        let renderer = Renderer::new(&GameConfig::default());
        let mut state = state();
        state.snake.auto_move = true;
        let surface = renderer.compose(&state, &icons());

        let white = surface.pixel(Position::new(15, 135)).unwrap();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
        let white = surface.pixel(Position::new(105, 225)).unwrap();
        assert!(white.r >= 254);
        assert_eq!(surface.pixel(Position::new(115, 135)), Some(Rgb::BLACK));
        assert_eq!(surface.pixel(Position::new(15, 235)), Some(Rgb::BLACK));
    }

    #[test]
    fn test_render_hud() {
        let renderer = Renderer::new(&GameConfig::default());
        let backend = TestBackend::new(62, 22);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = state();
        state.snake.score = 7;

        let mut map = None;
        terminal
            .draw(|frame| map = Some(renderer.render(frame, &state, &icons())))
            .unwrap();

        let map = map.unwrap();
        assert_eq!(map.area(), Rect::new(1, 1, 60, 20));

        let buf = terminal.backend().buffer();
        let score: String = (2..10).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(score, "Score: 7");
        let label: String = (2..11).map(|x| buf[(x, 5)].symbol().to_string()).collect();
        assert_eq!(label, "Cheat-Bot");
        assert_eq!(buf[(0, 0)].symbol(), "╔");
    }

    #[test]
    fn test_screen_map() {
        let renderer = Renderer::new(&GameConfig::default());
        let map = renderer.screen_map(Rect::new(0, 0, 62, 22));

        assert_eq!(map.pixels_at(0, 0), None);
        assert_eq!(
            map.pixels_at(1, 1),
            Some([Position::new(5, 5), Position::new(5, 15)])
        );
        assert_eq!(
            map.pixels_at(2, 7),
            Some([Position::new(15, 125), Position::new(15, 135)])
        );
        assert_eq!(map.pixels_at(61, 5), None);
    }
}
