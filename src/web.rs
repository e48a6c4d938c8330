//! Browser glue: canvas lookup, keyboard listeners, the level-select menu and
//! the `requestAnimationFrame` loop. All game logic lives in [`crate::game`];
//! this module only moves events in and pixels out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, window};

use crate::config::{Bounds, GameConfig};
use crate::game::GameState;
use crate::input::KeyState;
use crate::render;

pub const CANVAS_ID: &str = "game";
pub const MENU_ID: &str = "level-select";
const DEFAULT_CANVAS_SIZE: (u32, u32) = (600, 400);

struct Session {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    menu: Option<HtmlElement>,
    game: GameState,
    keys: KeyState,
    last_ts: Option<f64>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static LOOP_RUNNING: Cell<bool> = const { Cell::new(false) };
    static KEYS_BOUND: Cell<bool> = const { Cell::new(false) };
    static PENDING_CONFIG: RefCell<Option<GameConfig>> = const { RefCell::new(None) };
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

// --- Entry points ------------------------------------------------------------

/// Classic variant: one level, canvas visible immediately.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let doc = document()?;
    let canvas = game_canvas(&doc)?;
    let ctx = context_2d(&canvas)?;
    let game = GameState::classic(session_config(&canvas));
    log::info!("classic mode on {}x{} canvas", canvas.width(), canvas.height());

    let session = Session {
        canvas,
        ctx,
        menu: None,
        game,
        keys: KeyState::new(),
        last_ts: None,
    };
    show_game(&session)?;
    SESSION.with(|s| s.replace(Some(session)));
    bind_keys()?;
    start_loop();
    Ok(())
}

/// Level-select variant: show the menu; the loop starts on the first pick.
#[wasm_bindgen]
pub fn start_level_select() -> Result<(), JsValue> {
    let doc = document()?;
    let canvas = game_canvas(&doc)?;
    let ctx = context_2d(&canvas)?;
    let game = GameState::level_select(session_config(&canvas));
    let menu = level_menu(&doc, game.level_count())?;
    wire_menu_buttons(&menu)?;

    let session = Session {
        canvas,
        ctx,
        menu: Some(menu),
        game,
        keys: KeyState::new(),
        last_ts: None,
    };
    show_menu(&session)?;
    SESSION.with(|s| s.replace(Some(session)));
    bind_keys()?;
    log::info!("level select ready");
    Ok(())
}

/// Start (or restart) level `index` in the current session.
#[wasm_bindgen]
pub fn start_level(index: usize) -> Result<(), JsValue> {
    SESSION.with(|cell| -> Result<(), JsValue> {
        let mut borrow = cell.borrow_mut();
        let session = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("game not started"))?;
        let count = session.game.level_count();
        if index >= count {
            return Err(JsValue::from_str(&format!(
                "level index {index} out of range (have {count})"
            )));
        }
        session.game.select_level(index);
        session.keys.clear();
        session.last_ts = None;
        show_game(session)
    })?;
    start_loop();
    Ok(())
}

/// Override physics / player tuning from JSON. Applies to the running session
/// or, before one exists, to the next one started.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let applied = SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(session) => {
            session.game.reconfigure(cfg);
            session.last_ts = None;
            true
        }
        None => false,
    });
    if !applied {
        PENDING_CONFIG.with(|p| p.replace(Some(cfg)));
    }
    log::debug!("configured: {cfg:?}");
    Ok(())
}

// --- DOM helpers ---------------------------------------------------------------

fn document() -> Result<Document, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Reuse `#game` when the page has one; its configured size defines the bounds.
fn game_canvas(doc: &Document) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        return el.dyn_into::<HtmlCanvasElement>().map_err(JsValue::from);
    }
    let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    c.set_id(CANVAS_ID);
    c.set_width(DEFAULT_CANVAS_SIZE.0);
    c.set_height(DEFAULT_CANVAS_SIZE.1);
    c.set_attribute("style", "border:1px solid #333; background:#87ceeb;")?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&c)?;
    Ok(c)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn session_config(canvas: &HtmlCanvasElement) -> GameConfig {
    let bounds = Bounds::new(canvas.width() as f64, canvas.height() as f64);
    let mut cfg = PENDING_CONFIG
        .with(|p| p.borrow_mut().take())
        .unwrap_or_default();
    cfg.bounds = bounds;
    cfg
}

/// Reuse `#level-select` when present, else build one button per level.
fn level_menu(doc: &Document, count: usize) -> Result<HtmlElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(MENU_ID) {
        return el.dyn_into::<HtmlElement>().map_err(JsValue::from);
    }
    let menu: HtmlElement = doc.create_element("div")?.dyn_into()?;
    menu.set_id(MENU_ID);
    menu.set_attribute(
        "style",
        "gap:12px; justify-content:center; padding:24px; font-family:Arial, sans-serif;",
    )?;
    for i in 0..count {
        let button = doc.create_element("button")?;
        button.set_attribute("data-level", &i.to_string())?;
        button.set_text_content(Some(&format!("Level {}", i + 1)));
        menu.append_child(&button)?;
    }
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&menu)?;
    log::debug!("built level menu with {count} buttons");
    Ok(menu)
}

fn wire_menu_buttons(menu: &HtmlElement) -> Result<(), JsValue> {
    let buttons = menu.query_selector_all("button")?;
    for i in 0..buttons.length() {
        let Some(node) = buttons.get(i) else { continue };
        let button: web_sys::Element = node.dyn_into()?;
        let raw = button.get_attribute("data-level").unwrap_or_default();
        let index = match raw.trim().parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => {
                log::warn!("ignoring level button with data-level={raw:?}");
                continue;
            }
        };
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(e) = start_level(index) {
                log::error!("could not start level {}: {:?}", index + 1, e);
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn set_display(el: &HtmlElement, value: &str) -> Result<(), JsValue> {
    el.style().set_property("display", value)
}

fn show_menu(session: &Session) -> Result<(), JsValue> {
    if let Some(menu) = &session.menu {
        set_display(menu, "flex")?;
    }
    set_display(&session.canvas, "none")
}

fn show_game(session: &Session) -> Result<(), JsValue> {
    if let Some(menu) = &session.menu {
        set_display(menu, "none")?;
    }
    set_display(&session.canvas, "block")
}

// --- Input -------------------------------------------------------------------

/// Window-level keydown / keyup / blur listeners, installed once per page.
fn bind_keys() -> Result<(), JsValue> {
    if KEYS_BOUND.with(|b| b.replace(true)) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;

    let down = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        SESSION.with(|cell| {
            if let Some(s) = cell.borrow_mut().as_mut() {
                s.keys.press(&evt.code());
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    down.forget();

    let up = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        SESSION.with(|cell| {
            if let Some(s) = cell.borrow_mut().as_mut() {
                s.keys.release(&evt.code());
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    up.forget();

    // Focus loss swallows the keyup events; drop everything held.
    let blur = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        SESSION.with(|cell| {
            if let Some(s) = cell.borrow_mut().as_mut() {
                s.keys.clear();
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
    blur.forget();
    Ok(())
}

// --- Frame loop --------------------------------------------------------------

/// Start the animation-frame loop unless it is already running. Level
/// switches reuse the running loop.
fn start_loop() {
    if LOOP_RUNNING.with(|r| r.replace(true)) {
        return;
    }
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                tick(session, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    let Some(w) = window() else { return };
    if let Some(closure) = cb.borrow().as_ref() {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

fn tick(session: &mut Session, ts: f64) {
    let dt = session.last_ts.map(|last| ts - last).unwrap_or(0.0);
    session.last_ts = Some(ts);
    let input = session.keys.actions();
    session.game.advance_by(&input, dt);
    render::render(&session.game, &mut session.ctx);
}
