//! Browser client: owns the simulation loop, Canvas2D rendering and the
//! score API calls. The page supplies a canvas, forwards keyboard/touch
//! events, and reads results back as JSON strings.

pub mod input;
#[cfg(target_arch = "wasm32")]
mod net;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod client {
    use std::cell::RefCell;
    use std::rc::Rc;

    use hecs::World;
    use runner_core::{
        create_character, render_model, start_run as reset_run, step, Config, Events, GameRng,
        Intents, RunState, RunStatus, Time,
    };
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, HtmlImageElement};

    use crate::input::{intent_for_code, KeyIntent};
    use crate::net;
    use crate::renderer::Renderer;

    struct Client {
        renderer: Renderer,
        world: World,
        time: Time,
        config: Config,
        run: RunState,
        intents: Intents,
        events: Events,
        rng: GameRng,
        character_image: Option<HtmlImageElement>,
        last_frame_ms: Option<f64>,
    }

    impl Client {
        fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let config = Config::new();
            let renderer = Renderer::new(&canvas, &config)?;
            let mut world = World::new();
            create_character(&mut world, &config);
            // Wall-clock seed so each page load gets a fresh obstacle pattern
            let rng = GameRng::new(js_sys::Date::now() as u64);
            Ok(Self {
                renderer,
                world,
                time: Time::default(),
                run: RunState::new(&config),
                intents: Intents::new(),
                events: Events::new(),
                rng,
                config,
                character_image: None,
                last_frame_ms: None,
            })
        }

        fn frame(&mut self, now_ms: f64) {
            let dt_ms = match self.last_frame_ms {
                Some(prev) => (now_ms - prev).max(0.0) as f32,
                None => 16.67,
            };
            self.last_frame_ms = Some(now_ms);
            self.time.dt_ms = dt_ms;

            step(
                &mut self.world,
                &mut self.time,
                &self.config,
                &mut self.run,
                &self.intents,
                &mut self.events,
                &mut self.rng,
            );

            let cmds = render_model(&self.world, &self.run, &self.config);
            self.renderer
                .draw(&cmds, now_ms, self.character_image.as_ref());
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
        CLIENT.with(|cell| {
            cell.borrow_mut()
                .as_mut()
                .map(f)
                .ok_or_else(|| JsValue::from_str("client not initialized"))
        })
    }

    fn start_frame_loop() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let inner = handle.clone();
        *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            if let Err(err) = with_client(|client| client.frame(now_ms)) {
                web_sys::console::error_1(&err);
            }
            if let Some(window) = web_sys::window() {
                if let Some(closure) = inner.borrow().as_ref() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut(f64)>));
        let borrowed = handle.borrow();
        let closure = borrowed
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame closure missing"))?;
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let client = Client::new(canvas)?;
        CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
        start_frame_loop()?;
        web_sys::console::log_1(&JsValue::from_str("runner client initialized"));
        Ok(())
    }

    /// Begin (or restart) a run. Safe to call from game-over.
    #[wasm_bindgen]
    pub fn start_run() -> Result<(), JsValue> {
        with_client(|client| {
            reset_run(&mut client.world, &mut client.run, &client.config);
        })
    }

    /// Returns true when the key was consumed, so the page can call
    /// preventDefault and stop Space from scrolling.
    #[wasm_bindgen]
    pub fn handle_key_down(code: &str) -> bool {
        let Some(intent) = intent_for_code(code) else {
            return false;
        };
        with_client(|client| match intent {
            KeyIntent::Jump => client.intents.jump_held = true,
            KeyIntent::Duck => client.intents.duck_held = true,
        })
        .is_ok()
    }

    #[wasm_bindgen]
    pub fn handle_key_up(code: &str) -> bool {
        let Some(intent) = intent_for_code(code) else {
            return false;
        };
        with_client(|client| match intent {
            KeyIntent::Jump => client.intents.jump_held = false,
            KeyIntent::Duck => client.intents.duck_held = false,
        })
        .is_ok()
    }

    /// Touch controls: tap-and-hold maps straight onto the held intents.
    #[wasm_bindgen]
    pub fn input_jump(held: bool) -> Result<(), JsValue> {
        with_client(|client| client.intents.jump_held = held)
    }

    #[wasm_bindgen]
    pub fn input_duck(held: bool) -> Result<(), JsValue> {
        with_client(|client| client.intents.duck_held = held)
    }

    #[wasm_bindgen]
    pub fn is_running() -> bool {
        with_client(|client| client.run.is_running()).unwrap_or(false)
    }

    #[wasm_bindgen]
    pub fn is_game_over() -> bool {
        with_client(|client| client.run.status == RunStatus::Ended).unwrap_or(false)
    }

    #[wasm_bindgen]
    pub fn final_score() -> u32 {
        with_client(|client| client.run.display_score()).unwrap_or(0)
    }

    /// Optional character sprite; until the page provides one the renderer
    /// falls back to a plain rectangle.
    #[wasm_bindgen]
    pub fn set_character_image(image: HtmlImageElement) -> Result<(), JsValue> {
        with_client(|client| client.character_image = Some(image))
    }

    /// Submit the current score. Resolves to the server's JSON response.
    #[wasm_bindgen]
    pub fn submit_score(twitter: String, wallet: String) -> js_sys::Promise {
        let score = final_score();
        wasm_bindgen_futures::future_to_promise(async move {
            net::submit_score(twitter, wallet, score)
                .await
                .map(|json| JsValue::from_str(&json))
        })
    }

    /// Fetch a day's leaderboard (today when `date` is empty) as JSON. A
    /// failed fetch resolves to an empty board rather than rejecting.
    #[wasm_bindgen]
    pub fn leaderboard_daily(date: Option<String>) -> js_sys::Promise {
        let date = date.filter(|d| !d.is_empty());
        wasm_bindgen_futures::future_to_promise(async move {
            Ok(match net::fetch_daily(date).await {
                Ok(json) => JsValue::from_str(&json),
                Err(err) => {
                    web_sys::console::warn_1(&err);
                    JsValue::from_str(r#"{"date":"","leaderboard":[]}"#)
                }
            })
        })
    }

    /// Fetch the per-day winners map as JSON. Empty map on failure.
    #[wasm_bindgen]
    pub fn winners() -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async {
            Ok(match net::fetch_winners().await {
                Ok(json) => JsValue::from_str(&json),
                Err(err) => {
                    web_sys::console::warn_1(&err);
                    JsValue::from_str("{}")
                }
            })
        })
    }
}
