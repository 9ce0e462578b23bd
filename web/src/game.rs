use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use gloo::events::{EventListener, EventListenerOptions};
use rotagrid_core as game;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const BACKGROUND: &str = "#181818";
const GRID_LINE: &str = "#303030";
const ARROW: &str = "#FFFFFF";
const STROKE_WIDTH: f64 = 0.05;
const CELL_RADIUS: f64 = 0.45;
const ARROW_REACH: f64 = 0.20;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Action(game::Action),
    NewGame,
}

/// Fill of every cell circle, which only depends on the mode and whether the grid is solved.
fn cell_fill(mode: game::Mode, solved: bool) -> &'static str {
    match (mode, solved) {
        (game::Mode::Editing, _) => "#202020",
        (game::Mode::Playing, false) => "#1e2630",
        (game::Mode::Playing, true) => "#24402c",
    }
}

/// The three points of the arrow stroke drawn over a cell, in grid units.
fn arrow_points(cell: &game::Cell) -> [(f64, f64); 3] {
    use game::Direction::*;

    let (x, y) = cell.center();
    let top = (x, y - ARROW_REACH);
    let left = (x - ARROW_REACH, y);
    let right = (x + ARROW_REACH, y);
    let bottom = (x, y + ARROW_REACH);

    match cell.direction {
        Up => [left, top, right],
        Right => [top, right, bottom],
        Down => [right, bottom, left],
        Left => [bottom, left, top],
    }
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_toggle_key(key: &str, toggle_key: &str) -> bool {
    key == toggle_key
}

fn mode_label(mode: game::Mode) -> &'static str {
    match mode {
        game::Mode::Editing => "Editing: click turns one arrow",
        game::Mode::Playing => "Playing: click turns a 3x3 block",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: game::Cell,
    fill: &'static str,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { cell, fill } = props.clone();
    let (cx, cy) = cell.center();
    let points = points_attr(&arrow_points(&cell));

    html! {
        <g class="cell">
            <circle cx={cx.to_string()} cy={cy.to_string()} r={CELL_RADIUS.to_string()} fill={fill}/>
            <polyline
                {points}
                fill="none"
                stroke={ARROW}
                stroke-width={STROKE_WIDTH.to_string()}
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </g>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Key that switches between editing and playing
    #[arg(long, default_value = " ")]
    pub toggle_key: String,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::PlayEngine,
    seed: u64,
    _key_listener: EventListener,
}

impl GameView {
    fn create_grid(seed: u64) -> game::Result<game::Grid> {
        use game::LayoutGenerator;

        log::debug!("seed: {}", seed);
        game::RandomLayoutGenerator::new(seed).generate(game::GRID_SIZE)
    }

    fn create_key_listener(ctx: &Context<Self>) -> EventListener {
        use gloo::utils::window;

        let link = ctx.link().clone();
        let toggle_key = ctx.props().toggle_key.clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&window(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let key = event.key();
            if !is_toggle_key(&key, &toggle_key) {
                log::trace!("key pressed: {:?}", key);
                return;
            }

            // keeps a focused button from also being activated by the same key
            event.prevent_default();
            if event.repeat() {
                return;
            }
            link.send_message(Msg::Action(game::Action::ToggleMode));
        })
    }

    /// Translates a press on the surface into a cell click, primary button only.
    fn pointer_action(event: &MouseEvent, size: game::Coord) -> Option<Msg> {
        let buttons = MouseButtons::from_bits_truncate(event.buttons());
        if !buttons.contains(MouseButtons::LEFT) {
            log::trace!("ignored press ({:?})", buttons);
            return None;
        }

        let surface: web_sys::Element = event.current_target()?.dyn_into().ok()?;
        let rect = surface.get_bounding_client_rect();
        let surface_size = game::SurfaceSize::new(rect.width(), rect.height());
        let position = (
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        );
        let offset = surface_size.pointer_to_offset(position, size);
        log::trace!("press at {:?} -> {:?}", position, offset);

        Some(Msg::Action(game::Action::ClickCell(offset)))
    }

    fn view_grid_lines(size: game::Coord) -> Html {
        let n = f64::from(size);
        let stroke_width = STROKE_WIDTH.to_string();

        (0..=size)
            .flat_map(|i| {
                let i = f64::from(i);
                [(i, 0., i, n), (0., i, n, i)]
            })
            .map(|(x1, y1, x2, y2)| {
                html! {
                    <line
                        x1={x1.to_string()}
                        y1={y1.to_string()}
                        x2={x2.to_string()}
                        y2={y2.to_string()}
                        stroke={GRID_LINE}
                        stroke-width={stroke_width.clone()}
                    />
                }
            })
            .collect()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let grid = Self::create_grid(seed).expect("Could not create grid");

        Self {
            engine: game::PlayEngine::new(grid),
            seed,
            _key_listener: Self::create_key_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Action(action) => {
                log::debug!("action: {:?}", action);
                self.engine.apply(action).has_update()
            }
            NewGame => {
                self.seed = js_random_seed();
                match Self::create_grid(self.seed) {
                    Ok(grid) => {
                        self.engine.reset(grid);
                        true
                    }
                    Err(err) => {
                        log::error!("failed to create grid: {}", err);
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = self.engine.grid();
        let size = grid.size();
        let mode = self.engine.mode();
        let solved = mode.is_playing() && self.engine.is_solved();
        let fill = cell_fill(mode, solved);
        let view_box = format!("0 0 {0} {0}", size);
        let toggle_hint = format!("{} switches mode", key_label(&ctx.props().toggle_key));

        let onmousedown = ctx
            .link()
            .batch_callback(move |e: MouseEvent| Self::pointer_action(&e, size));
        // the button must not keep focus, or the toggle key would press it again
        let keep_focus_off = Callback::from(|e: MouseEvent| e.prevent_default());
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="rotagrid" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside>{mode_label(mode)}</aside>
                    <span><button onmousedown={keep_focus_off} onclick={cb_new_game}>{"New puzzle"}</button></span>
                    <aside class={solved.then_some("solved")}>
                        { if solved { "Solved!".to_string() } else { toggle_hint } }
                    </aside>
                </nav>
                <svg viewBox={view_box} {onmousedown}>
                    <rect width={size.to_string()} height={size.to_string()} fill={BACKGROUND}/>
                    { Self::view_grid_lines(size) }
                    {
                        for grid.cells().map(|cell| html! {
                            <CellView {cell} {fill}/>
                        })
                    }
                </svg>
            </div>
        }
    }
}
