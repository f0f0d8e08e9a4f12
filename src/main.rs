//! Ludo Board entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use glam::Vec2;
    use ludo_board::renderer::{BoardLayout, CanvasSurface, Surface};
    use ludo_board::{Game, Settings};

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        surface: Option<CanvasSurface>,
        layout: BoardLayout,
    }

    impl App {
        fn frame(&mut self, time: f64) -> bool {
            let surface = self.surface.as_mut().map(|s| s as &mut dyn Surface);
            self.game.frame(time, surface, &self.layout)
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
        }

        log::info!("Ludo Board starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        let width = canvas.client_width().max(1) as f32;
        let height = canvas.client_height().max(1) as f32;
        let mut layout = BoardLayout::fit(width, height);
        layout.cell_size = layout.cell_size.min(settings.max_cell_size);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let surface = CanvasSurface::from_canvas(&canvas);
        if surface.is_none() {
            log::warn!("No 2D context, running without drawing");
        }

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, settings);
        game.start();

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            layout,
        }));

        setup_click_handler(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Ludo Board running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut a = app.borrow_mut();
            let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            let layout = a.layout;
            a.game.click(point, &layout);
        });
        let _ = canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_going = app.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(app);
        } else {
            log::info!("Frame loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ludo Board (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the board");

    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Roll once, slide a coin onto Red's entry square, then stop
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use std::time::Duration;

    use ludo_board::renderer::{BoardLayout, CommandRecorder};
    use ludo_board::sim::Position;
    use ludo_board::{Game, Settings};
    use web_time::{Instant, SystemTime, UNIX_EPOCH};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let layout = BoardLayout::default();
    let mut recorder = CommandRecorder::new();
    let mut game = Game::new(seed, Settings::load());
    game.start();

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;
    let mut frames = 0u32;

    if let Some(value) = game.roll_dice() {
        log::info!("Rolled {}, waiting for the dice to settle", value);
    }
    while game.is_rolling() {
        game.frame(now_ms(), Some(&mut recorder), &layout);
        frames += 1;
        std::thread::sleep(Duration::from_millis(16));
    }

    let player = game.state().current();
    log::info!(
        "{} is {:?} with {} move(s) left after {} frames",
        player.id,
        player.state,
        player.moves_left,
        frames
    );

    let path = [
        layout.cell_center(Position::new(1, 1)),
        layout.cell_center(Position::new(6, 1)),
    ];
    if game.slide_coin(&path) {
        while game.is_sliding() {
            game.frame(now_ms(), Some(&mut recorder), &layout);
            frames += 1;
            std::thread::sleep(Duration::from_millis(16));
        }
        log::info!("Coin slide finished");
    }

    game.stop();
    log::info!(
        "Session done: {} frames, {} draw calls",
        frames,
        recorder.len()
    );
}
