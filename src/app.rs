//! SDL2 desktop front-end: window, texture loading, drawing and the frame loop.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sdl2::event::{Event, WindowEvent};
use sdl2::image::{InitFlag, LoadTexture, Sdl2ImageContext};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};
use tracing::{debug, error, info, trace, warn};

use crate::collision::BoundingBox;
use crate::config::Settings;
use crate::constants::{BOARD_PIXEL_SIZE, LOOP_TIME};
use crate::error::{AssetError, GameError, GameResult, TextureError};
use crate::game::Game;
use crate::input::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::texture::repository::ImageLoader;
use crate::texture::sheet::{LoadHandle, SheetId, Tile};
use crate::texture::surface::Surface;

const OUTLINE_COLOR: Color = Color::RGB(255, 0, 0);

/// Maps SDL arrow keys onto the engine's keycodes.
fn arrow_keycode(keycode: Keycode) -> Option<u32> {
    match keycode {
        Keycode::Left => Some(KEY_LEFT),
        Keycode::Up => Some(KEY_UP),
        Keycode::Right => Some(KEY_RIGHT),
        Keycode::Down => Some(KEY_DOWN),
        _ => None,
    }
}

/// Loads sheets synchronously through `SDL_image`.
struct TextureLoader<'a> {
    creator: &'a TextureCreator<WindowContext>,
    textures: &'a mut HashMap<SheetId, Texture>,
}

impl ImageLoader for TextureLoader<'_> {
    fn load(&mut self, id: SheetId, handle: LoadHandle) {
        match self.creator.load_texture(handle.source()) {
            Ok(texture) => {
                let query = texture.query();
                self.textures.insert(id, texture);
                handle.finish(query.width, query.height);
            }
            Err(reason) => handle.fail(AssetError::Decode {
                path: handle.source().to_string(),
                reason,
            }),
        }
    }
}

/// The window canvas plus the textures of every loaded sheet.
pub struct CanvasSurface {
    canvas: Canvas<Window>,
    textures: HashMap<SheetId, Texture>,
}

fn to_rect(bounds: BoundingBox) -> Rect {
    Rect::new(
        bounds.x.round() as i32,
        bounds.y.round() as i32,
        bounds.width.round().max(0.0) as u32,
        bounds.height.round().max(0.0) as u32,
    )
}

impl Surface for CanvasSurface {
    fn draw(&mut self, tile: &Tile, dest: BoundingBox) -> Result<(), TextureError> {
        let Some(texture) = self.textures.get(&tile.sheet) else {
            trace!(sheet = ?tile.sheet, "Skipping tile from a sheet with no texture");
            return Ok(());
        };

        let src = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x, tile.size.y);
        self.canvas
            .copy(texture, src, to_rect(dest))
            .map_err(TextureError::RenderFailed)
    }

    fn outline(&mut self, bounds: BoundingBox) -> Result<(), TextureError> {
        self.canvas.set_draw_color(OUTLINE_COLOR);
        self.canvas.draw_rect(to_rect(bounds)).map_err(TextureError::RenderFailed)
    }
}

/// Main application wrapper: owns SDL, the window and the game, and runs one frame per call.
pub struct App {
    game: Game,
    surface: CanvasSurface,
    event_pump: EventPump,
    paused: bool,
    last_tick: Instant,
    // Dropping these shuts their subsystems down
    _texture_creator: TextureCreator<WindowContext>,
    _image_context: Sdl2ImageContext,
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, creates the window and loads both sprite sheets.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails. A sheet
    /// that fails to load is not an error: it is logged and its tiles are missing.
    pub fn new(settings: &Settings) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let image_context = sdl2::image::init(InitFlag::PNG).map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        let width = (BOARD_PIXEL_SIZE.x as f32 * settings.scale).round() as u32;
        let height = (BOARD_PIXEL_SIZE.y as f32 * settings.scale).round() as u32;
        trace!(width, height, scale = settings.scale, "Creating game window");

        let window = video_subsystem
            .window("Tile Maze", width, height)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(BOARD_PIXEL_SIZE.x, BOARD_PIXEL_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::from_settings(settings);

        let mut textures = HashMap::new();
        game.load_sprites(&mut TextureLoader {
            creator: &texture_creator,
            textures: &mut textures,
        });
        info!(textures = textures.len(), sheets = game.sprites().len(), "Sprite sheets loaded");

        Ok(App {
            game,
            surface: CanvasSurface { canvas, textures },
            event_pump,
            paused: false,
            last_tick: Instant::now(),
            _texture_creator: texture_creator,
            _image_context: image_context,
            _sdl_context: sdl_context,
        })
    }

    /// Runs a single frame: input, update, draw, then sleeps out the rest of [`LOOP_TIME`].
    ///
    /// Returns `false` once the player asked to quit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::Hidden => debug!("Window hidden"),
                    WindowEvent::Shown => debug!("Window shown"),
                    _ => {}
                },
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    return false;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => {
                    self.paused = !self.paused;
                    info!("{}", if self.paused { "Paused" } else { "Unpaused" });
                }
                Event::KeyDown {
                    keycode: Some(keycode), ..
                } => {
                    if let Some(code) = arrow_keycode(keycode) {
                        self.game.key_down(code);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode), ..
                } => {
                    if let Some(code) = arrow_keycode(keycode) {
                        self.game.key_up(code);
                    }
                }
                _ => {}
            }
        }

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        if !self.paused {
            if let Err(e) = self.game.tick(dt) {
                error!("Failed to tick game: {e}");
            }

            self.surface.canvas.set_draw_color(Color::BLACK);
            self.surface.canvas.clear();
            self.game.draw(&mut self.surface);
            self.surface.canvas.present();
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
