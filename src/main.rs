//! Blurdle entry point
//!
//! Wires the puzzle into the page and drives the reveal animation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlImageElement, HtmlInputElement};

    use blurdle::game::AnimationStatus;
    use blurdle::share::{ShareNotice, ShareRequest, ShareSurface, share_or_copy};
    use blurdle::{Catalog, GameSession, RevealAnimator, Rules, RulesError, SubmitOutcome};

    // navigator.share / clipboard bindings
    #[wasm_bindgen(inline_js = "
        export function can_share() {
            return typeof navigator !== 'undefined' && typeof navigator.share === 'function';
        }

        export function native_share(title, text, url) {
            navigator.share({ title, text, url }).catch(e => console.warn('Share dismissed:', e));
        }

        export function copy_text(text) {
            if (navigator.clipboard) {
                navigator.clipboard.writeText(text).catch(e => console.warn('Clipboard write failed:', e));
            }
        }
    ")]
    extern "C" {
        fn can_share() -> bool;
        fn native_share(title: &str, text: &str, url: &str);
        fn copy_text(text: &str);
    }

    /// Browser share surface
    struct BrowserShare;

    impl ShareSurface for BrowserShare {
        fn can_share_natively(&self) -> bool {
            can_share()
        }

        fn share_natively(&mut self, request: &ShareRequest) {
            native_share(&request.title, &request.text, &request.url);
        }

        fn copy_to_clipboard(&mut self, text: &str) {
            copy_text(text);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        animator: RevealAnimator,
        notice: ShareNotice,
        // True while a frame callback is pending
        animating: bool,
    }

    impl Game {
        fn new(catalog: &Catalog, rules: Rules, seed: u64) -> Result<Self, RulesError> {
            let mut rng = Pcg32::seed_from_u64(seed);
            let session = GameSession::start(catalog, rules, &mut rng, None)?;
            let animator = session.animator();
            Ok(Self {
                session,
                animator,
                notice: ShareNotice::default(),
                animating: false,
            })
        }

        /// Advance the reveal one frame
        fn step(&mut self) -> AnimationStatus {
            let target = self.session.blur_target();
            self.animator.step(target)
        }

        /// Push the current snapshot into the DOM
        fn update_dom(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snap = self.session.snapshot(&self.animator);
            let finished = snap.is_finished();

            // Photo
            if let Some(img) = document
                .get_element_by_id("photo")
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                if img.get_attribute("src").as_deref() != Some(snap.image_ref.as_str()) {
                    img.set_src(&snap.image_ref);
                }
                let _ = img.style().set_property("filter", &snap.css_filter());
            }

            // Guesses left
            if let Some(el) = document.get_element_by_id("guesses-left") {
                el.set_text_content(Some(&snap.guesses_remaining.to_string()));
            }

            // Status line
            if let Some(el) = document.get_element_by_id("status") {
                let class = if snap.is_correct {
                    "success"
                } else if snap.is_exhausted {
                    "fail"
                } else {
                    "status-text"
                };
                let _ = el.set_attribute("class", class);
                el.set_text_content(snap.status_message().as_deref());
            }

            // Lock the form once the round is over
            if let Some(input) = document
                .get_element_by_id("guess-input")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_disabled(finished);
            }
            if let Some(btn) = document.get_element_by_id("guess-btn") {
                if finished || self.session.input().trim().is_empty() {
                    let _ = btn.set_attribute("disabled", "");
                } else {
                    let _ = btn.remove_attribute("disabled");
                }
            }

            // Brand link + share button only after the round
            if let Some(el) = document.get_element_by_id("brand-link") {
                if let (Some(href), Some(text)) = (&snap.outbound_link, snap.brand_link_text()) {
                    let _ = el.set_attribute("href", href);
                    el.set_text_content(Some(&text));
                    let _ = el.set_attribute("class", "brand-link-btn");
                } else {
                    let _ = el.set_attribute("class", "brand-link-btn hidden");
                }
            }
            if let Some(el) = document.get_element_by_id("share-wrapper") {
                let class = if finished { "share-btn-wrapper" } else { "share-btn-wrapper hidden" };
                let _ = el.set_attribute("class", class);
            }
        }

        fn update_notice(&self, now: f64) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("share-tooltip") {
                match self.notice.message(now) {
                    Some(msg) => {
                        el.set_text_content(Some(msg));
                        let _ = el.set_attribute("class", "share-tooltip");
                    }
                    None => {
                        el.set_text_content(None);
                        let _ = el.set_attribute("class", "share-tooltip hidden");
                    }
                }
            }
        }
    }

    /// Read an optional JSON blob from a data attribute on the game root
    fn root_data(document: &Document, attr: &str) -> Option<String> {
        document.get_element_by_id("game")?.get_attribute(attr)
    }

    fn load_catalog(document: &Document) -> Catalog {
        match root_data(document, "data-catalog").map(|json| Catalog::from_json(&json)) {
            Some(Ok(catalog)) => {
                log::info!("Loaded {} puzzles from page", catalog.len());
                catalog
            }
            Some(Err(e)) => {
                log::error!("Bad catalog, using built-in puzzles: {}", e);
                Catalog::builtin()
            }
            None => Catalog::builtin(),
        }
    }

    fn load_rules(document: &Document) -> Rules {
        match root_data(document, "data-rules").map(|json| Rules::from_json(&json)) {
            Some(Ok(rules)) => {
                log::info!("Loaded rules from page");
                rules
            }
            Some(Err(e)) => {
                log::error!("Bad rules, using defaults: {}", e);
                Rules::default()
            }
            None => Rules::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blurdle starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let catalog = load_catalog(&document);
        let rules = load_rules(&document);

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(&catalog, rules, seed) {
            Ok(game) => Rc::new(RefCell::new(game)),
            Err(e) => {
                log::error!("Cannot start round: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        setup_guess_form(game.clone());
        setup_share_button(game.clone());

        game.borrow().update_dom();
        game.borrow().update_notice(js_sys::Date::now());

        log::info!("Blurdle running!");
    }

    fn setup_guess_form(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Keep the session's input buffer in sync with the text box
        if let Some(input) = document.get_element_by_id("guess-input") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                if let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    let mut g = game.borrow_mut();
                    g.session.set_input(input.value());
                    g.update_dom();
                }
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Submit (button click or Enter)
        if let Some(form) = document.get_element_by_id("guess-form") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                let outcome = game.borrow_mut().session.submit_input();
                if let SubmitOutcome::Accepted(_) = outcome {
                    if let Some(input) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id("guess-input"))
                        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                    {
                        input.set_value("");
                    }
                    start_animation(game.clone());
                }
                game.borrow().update_dom();
            });
            let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_share_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("share-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let url = web_sys::window()
                    .and_then(|w| w.location().href().ok())
                    .unwrap_or_default();
                let now = js_sys::Date::now();
                let token = {
                    let mut g = game.borrow_mut();
                    let request = ShareRequest::new(g.session.share_text(), url);
                    let outcome = share_or_copy(&mut BrowserShare, &request);
                    let token = g.notice.record(outcome, now);
                    g.update_notice(now);
                    token
                };
                if let Some(generation) = token {
                    schedule_notice_dismiss(game.clone(), generation);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Hide the "copied" notice when its timer fires (fire-and-forget).
    ///
    /// A later share replaces the generation, so a stale timer leaves it alone.
    fn schedule_notice_dismiss(game: Rc<RefCell<Game>>, generation: u64) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move || {
            let mut g = game.borrow_mut();
            g.notice.dismiss(generation);
            g.update_notice(js_sys::Date::now());
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            blurdle::consts::SHARE_NOTICE_MS as i32,
        );
        closure.forget();
    }

    /// Kick off the frame loop unless one is already pending
    fn start_animation(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.animating {
                return;
            }
            g.animating = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            animation_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(game: Rc<RefCell<Game>>) {
        let status = {
            let mut g = game.borrow_mut();
            let status = g.step();
            g.update_dom();
            if status == AnimationStatus::Idle {
                g.animating = false;
            }
            status
        };

        if status == AnimationStatus::Animating {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Blurdle (native) starting...");
    log::info!("The game runs in the browser - build with `trunk serve` for the web version");

    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted round and print how the photo would be revealed
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use blurdle::game::AnimationStatus;
    use blurdle::{Catalog, GameSession, Rules, SubmitOutcome};

    let catalog = Catalog::builtin();
    let Some(target) = catalog.get(0).cloned() else {
        return;
    };
    let mut session = match GameSession::new(0, target, Rules::default()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Demo round unavailable: {}", e);
            return;
        }
    };
    let mut animator = session.animator();

    println!("\nDemo round: guessing {}", session.target().name);
    for guess in ["madonna", "lady gogo", "lady gaga"] {
        if let SubmitOutcome::Rejected(reason) = session.submit_guess(guess) {
            println!("  '{}' ignored ({:?})", guess, reason);
            continue;
        }
        let target_blur = session.blur_target();
        let mut frames = 0;
        while animator.step(target_blur) == AnimationStatus::Animating {
            frames += 1;
        }
        let snap = session.snapshot(&animator);
        println!(
            "  '{}' -> blur {}px after {} frames, {} guesses left",
            guess, snap.blur_px, frames, snap.guesses_remaining
        );
        if let Some(msg) = snap.status_message() {
            println!("  {}", msg);
        }
    }
    println!("  Share: {}", session.share_text());
}
