//! Interactive search visualizer model shared by the `pathviz` binary.
//!
//! The user places a start cell, a target cell and walls on a grid, runs the
//! search and watches the trace being replayed in small batches: cells turn
//! "registered" when discovered, "visited" when expanded and finally "path".

pub mod config;

pub use config::{Config, ConfigError};

use gridtrace_core::{
    Cell, GridDims, GridError, Point,
    messages::{Key, MouseAction, Msg},
    screen::Screen,
    style::Color,
};
use gridtrace_paths::{Adjacency, Heuristic, Phase, SearchQuery, TraceStep};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

// Colours
const COL_START: Color = Color::from_hex(0xADD8E6);
const COL_END: Color = Color::from_hex(0xFFFF00);
const COL_WALL: Color = Color::from_hex(0x190D32);
const COL_PATH: Color = Color::from_hex(0x9D4F0F);
const COL_VISITED: Color = Color::from_hex(0xA5EA5F);
const COL_REGISTERED: Color = Color::from_hex(0x53504F);
const COL_BLANK: Color = Color::from_hex(0x453BD1);
const COL_CURSOR: Color = Color::from_rgb(255, 255, 255);
const COL_STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const COL_STATUS_BG: Color = Color::from_rgb(30, 30, 50);

const HELP_LINES: [&str; 2] = [
    "arrows/click: select  g: go  c: reset  h: heuristic  d: diagonals",
    "w: random walls  1-3: scale  q: quit",
];

/// Rows below the grid: status line and key help.
const STATUS_ROWS: i32 = 1 + HELP_LINES.len() as i32;
/// Wide enough for the longest status line (scale 3, four-digit cost).
const MIN_SCREEN_WIDTH: i32 = 80;

// ---------------------------------------------------------------------------
// Scale presets
// ---------------------------------------------------------------------------

/// Grid size presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Small,
    Medium,
    Large,
}

impl Scale {
    /// Preset for the numbers 1 to 3.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Small),
            2 => Some(Self::Medium),
            3 => Some(Self::Large),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// Width and height in cells.
    pub fn size(self) -> (usize, usize) {
        match self {
            Self::Small => (5, 5),
            Self::Medium => (40, 28),
            Self::Large => (100, 60),
        }
    }

    pub fn dims(self) -> Result<GridDims, GridError> {
        let (w, h) = self.size();
        GridDims::new(w, h)
    }
}

// ---------------------------------------------------------------------------
// Modes and cell state
// ---------------------------------------------------------------------------

/// What selecting a cell currently does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignMode {
    SetStart,
    SetTarget,
    AddWalls,
    Animating,
    Done,
}

impl AssignMode {
    fn label(self) -> &'static str {
        match self {
            Self::SetStart => "set start",
            Self::SetTarget => "set target",
            Self::AddWalls => "add walls",
            Self::Animating => "searching",
            Self::Done => "done",
        }
    }
}

/// Display state of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellFlags {
    pub start: bool,
    pub end: bool,
    pub wall: bool,
    pub registered: bool,
    pub visited: bool,
    pub path: bool,
}

impl CellFlags {
    /// Record one trace event. Start, end and wall flags are left alone.
    pub fn mark(&mut self, phase: Phase) {
        match phase {
            Phase::Discovered => self.registered = true,
            Phase::Expanded => self.visited = true,
            Phase::Path => self.path = true,
        }
    }

    pub fn color(self) -> Color {
        if self.start {
            COL_START
        } else if self.end {
            COL_END
        } else if self.wall {
            COL_WALL
        } else if self.path {
            COL_PATH
        } else if self.visited {
            COL_VISITED
        } else if self.registered {
            COL_REGISTERED
        } else {
            COL_BLANK
        }
    }
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

/// Replays trace steps a batch at a time.
#[derive(Clone, Debug)]
pub struct Animation {
    steps: Vec<TraceStep>,
    pos: usize,
    batch_size: usize,
}

impl Animation {
    /// A `batch_size` of 0 is treated as 1.
    pub fn new(steps: Vec<TraceStep>, batch_size: usize) -> Self {
        Self {
            steps,
            pos: 0,
            batch_size: batch_size.max(1),
        }
    }

    /// The next batch; the last one may be short. Empty once finished.
    pub fn next_batch(&mut self) -> &[TraceStep] {
        let from = self.pos;
        self.pos = (from + self.batch_size).min(self.steps.len());
        &self.steps[from..self.pos]
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.steps.len()
    }

    pub fn remaining(&self) -> usize {
        self.steps.len() - self.pos
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// What the event loop should do after [`Board::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    End,
}

/// Outcome of the last search, for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Cost(usize),
    NoPath,
}

pub struct Board {
    scale: Scale,
    dims: GridDims,
    cells: Vec<CellFlags>,
    start: Option<usize>,
    end: Option<usize>,
    walls: Vec<usize>,
    mode: AssignMode,
    heuristic: Heuristic,
    adjacency: Adjacency,
    cursor: Point,
    /// Mouse button held down in wall mode.
    painting: bool,
    animation: Option<Animation>,
    outcome: Option<Outcome>,
    batch_size: usize,
    wall_density: f64,
    rng: StdRng,
}

impl Board {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let scale = Scale::from_number(config.grid.scale).unwrap_or(Scale::Medium);
        let dims = scale.dims()?;
        Ok(Self {
            scale,
            dims,
            cells: vec![CellFlags::default(); dims.len()],
            start: None,
            end: None,
            walls: Vec::new(),
            mode: AssignMode::SetStart,
            heuristic: Heuristic::from_flag(config.search.heuristic),
            adjacency: Adjacency::from_flag(config.search.diagonals),
            cursor: Point::ZERO,
            painting: false,
            animation: None,
            outcome: None,
            batch_size: config.animation.batch_size,
            wall_density: config.walls.density,
            rng: StdRng::seed_from_u64(config.walls.seed),
        })
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Wall cells in the order they were placed.
    pub fn walls(&self) -> &[usize] {
        &self.walls
    }

    pub fn cell(&self, idx: usize) -> Option<CellFlags> {
        self.cells.get(idx).copied()
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn is_animating(&self) -> bool {
        self.mode == AssignMode::Animating
    }

    /// Screen size needed to show the grid and the status rows.
    pub fn screen_size(&self) -> (i32, i32) {
        let w = self.dims.width() as i32;
        let h = self.dims.height() as i32;
        let help = HELP_LINES.iter().map(|l| l.len() as i32).max().unwrap_or(0);
        (w.max(MIN_SCREEN_WIDTH).max(help), h + STATUS_ROWS)
    }

    /// Clear the board and switch to `scale`.
    pub fn reset_to(&mut self, scale: Scale) -> Result<(), GridError> {
        let dims = scale.dims()?;
        self.scale = scale;
        self.dims = dims;
        self.cells = vec![CellFlags::default(); dims.len()];
        self.start = None;
        self.end = None;
        self.walls.clear();
        self.mode = AssignMode::SetStart;
        self.cursor = dims.bounds().clamp(self.cursor);
        self.painting = false;
        self.animation = None;
        self.outcome = None;
        log::debug!("board reset to scale {} ({}x{})", scale.number(), dims.width(), dims.height());
        Ok(())
    }

    pub fn reset(&mut self) -> Result<(), GridError> {
        self.reset_to(self.scale)
    }

    /// Apply a selection at cell `idx` according to the current mode.
    pub fn select(&mut self, idx: usize) -> Result<(), GridError> {
        if !self.dims.contains(idx) {
            return Ok(());
        }
        match self.mode {
            AssignMode::SetStart => {
                self.cells[idx].start = true;
                self.start = Some(idx);
                self.mode = AssignMode::SetTarget;
            }
            AssignMode::SetTarget => {
                self.cells[idx].end = true;
                self.end = Some(idx);
                self.mode = AssignMode::AddWalls;
            }
            AssignMode::AddWalls => self.add_wall(idx),
            AssignMode::Animating => {}
            AssignMode::Done => self.reset()?,
        }
        Ok(())
    }

    /// Turn `idx` into a wall. Start, end and existing walls are skipped.
    pub fn add_wall(&mut self, idx: usize) {
        let Some(cell) = self.cells.get_mut(idx) else {
            return;
        };
        if cell.start || cell.end || cell.wall {
            return;
        }
        cell.wall = true;
        self.walls.push(idx);
    }

    /// Scatter walls over free cells, each with the configured density.
    pub fn random_walls(&mut self) {
        if self.mode != AssignMode::AddWalls {
            return;
        }
        let before = self.walls.len();
        for idx in 0..self.dims.len() {
            let r: f64 = self.rng.random();
            if r < self.wall_density {
                self.add_wall(idx);
            }
        }
        log::debug!("scattered {} walls", self.walls.len() - before);
    }

    /// Run the search and start replaying its trace. Only valid once both
    /// endpoints are placed.
    pub fn go(&mut self) -> Result<(), GridError> {
        if self.mode != AssignMode::AddWalls {
            return Ok(());
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Ok(());
        };
        let trace = SearchQuery::new(self.dims, start, end)
            .with_walls(self.walls.clone())
            .with_heuristic(self.heuristic)
            .with_adjacency(self.adjacency)
            .run()?;
        self.outcome = Some(match trace.cost() {
            Some(cost) => Outcome::Cost(cost),
            None => Outcome::NoPath,
        });
        log::info!(
            "search {start} -> {end}: {} steps, outcome {:?}",
            trace.steps().len(),
            self.outcome
        );
        self.animation = Some(Animation::new(trace.steps().to_vec(), self.batch_size));
        self.painting = false;
        self.mode = AssignMode::Animating;
        Ok(())
    }

    /// Replay the next batch of the running animation. Returns whether
    /// anything changed.
    pub fn tick(&mut self) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        for step in anim.next_batch() {
            self.cells[step.index].mark(step.phase);
        }
        if anim.is_done() {
            self.animation = None;
            self.mode = AssignMode::Done;
        }
        true
    }

    /// Run the whole animation at once.
    pub fn finish(&mut self) {
        while self.tick() {}
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor = self.dims.bounds().clamp(self.cursor.shift(dx, dy));
    }

    fn toggles_allowed(&self) -> bool {
        !matches!(self.mode, AssignMode::Animating | AssignMode::Done)
    }

    /// Handle one input message.
    pub fn update(&mut self, msg: Msg) -> Result<Option<Effect>, GridError> {
        match msg {
            Msg::Quit => Ok(Some(Effect::End)),
            Msg::Screen { .. } => Ok(Some(Effect::Redraw)),
            Msg::KeyDown { key } => self.update_key(key),
            Msg::Mouse { action, pos } => self.update_mouse(action, pos),
        }
    }

    fn update_key(&mut self, key: Key) -> Result<Option<Effect>, GridError> {
        match key {
            Key::Escape | Key::Char('q') | Key::Char('Q') => return Ok(Some(Effect::End)),
            Key::ArrowUp => self.move_cursor(0, -1),
            Key::ArrowDown => self.move_cursor(0, 1),
            Key::ArrowLeft => self.move_cursor(-1, 0),
            Key::ArrowRight => self.move_cursor(1, 0),
            Key::Enter | Key::Space => {
                if let Some(idx) = self.dims.index(self.cursor) {
                    self.select(idx)?;
                }
            }
            Key::Char('g') => self.go()?,
            Key::Char('c') => self.reset()?,
            Key::Char('w') => self.random_walls(),
            Key::Char('h') if self.toggles_allowed() => {
                self.heuristic = match self.heuristic {
                    Heuristic::None => Heuristic::Manhattan,
                    Heuristic::Manhattan => Heuristic::None,
                };
            }
            Key::Char('d') if self.toggles_allowed() => {
                self.adjacency = match self.adjacency {
                    Adjacency::Cardinal => Adjacency::Diagonal,
                    Adjacency::Diagonal => Adjacency::Cardinal,
                };
            }
            Key::Char(c @ '1'..='3') => {
                if let Some(scale) = c.to_digit(10).and_then(|n| Scale::from_number(n as u8)) {
                    self.reset_to(scale)?;
                }
            }
            _ => return Ok(None),
        }
        Ok(Some(Effect::Redraw))
    }

    fn update_mouse(&mut self, action: MouseAction, pos: Point) -> Result<Option<Effect>, GridError> {
        let idx = self.dims.index(pos);
        match action {
            MouseAction::Main => {
                let Some(idx) = idx else {
                    return Ok(None);
                };
                self.cursor = pos;
                if self.mode == AssignMode::AddWalls {
                    self.painting = true;
                }
                self.select(idx)?;
            }
            MouseAction::Move => {
                let Some(idx) = idx else {
                    return Ok(None);
                };
                if !self.painting {
                    return Ok(None);
                }
                self.cursor = pos;
                self.add_wall(idx);
            }
            MouseAction::Release => {
                if !self.painting {
                    return Ok(None);
                }
                self.painting = false;
            }
            MouseAction::Secondary => return Ok(None),
        }
        Ok(Some(Effect::Redraw))
    }

    // ---- Drawing ----

    fn status_line(&self) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        let (w, h) = self.scale.size();
        let mut line = format!(
            "{} | scale {} ({w}x{h}) | heuristic {} | diagonals {}",
            self.mode.label(),
            self.scale.number(),
            on_off(self.heuristic == Heuristic::Manhattan),
            on_off(self.adjacency == Adjacency::Diagonal),
        );
        match self.outcome {
            Some(Outcome::Cost(cost)) => line.push_str(&format!(" | path cost {cost}")),
            Some(Outcome::NoPath) => line.push_str(" | no path"),
            None => {}
        }
        line
    }

    pub fn draw(&self, screen: &mut Screen) {
        screen.fill(Cell::default());

        for (idx, flags) in self.cells.iter().enumerate() {
            let p = self.dims.point(idx);
            let mut cell = Cell::default().with_bg(flags.color());
            if p == self.cursor && !self.is_animating() {
                cell = cell.with_char('+').with_fg(COL_CURSOR);
            }
            screen.set(p, cell);
        }

        let status = Cell::default().with_fg(COL_STATUS_FG).with_bg(COL_STATUS_BG);
        let y = self.dims.height() as i32;
        let width = screen.size().x;
        for x in 0..width {
            screen.set(Point::new(x, y), status);
        }
        screen.text(Point::new(0, y), &self.status_line(), status);
        let help = Cell::default().with_fg(COL_STATUS_FG);
        for (i, line) in HELP_LINES.iter().enumerate() {
            screen.text(Point::new(0, y + 1 + i as i32), line, help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        let config = Config {
            grid: config::GridConfig { scale: 1 },
            ..Config::default()
        };
        Board::new(&config).unwrap()
    }

    fn key(c: char) -> Msg {
        Msg::key(Key::Char(c))
    }

    #[test]
    fn scale_presets() {
        assert_eq!(Scale::from_number(1).map(Scale::size), Some((5, 5)));
        assert_eq!(Scale::from_number(2).map(Scale::size), Some((40, 28)));
        assert_eq!(Scale::from_number(3).map(Scale::size), Some((100, 60)));
        assert_eq!(Scale::from_number(4), None);
        let b = Board::new(&Config::default()).unwrap();
        assert_eq!(b.scale(), Scale::Medium);
        assert_eq!(b.dims().len(), 40 * 28);
    }

    #[test]
    fn assign_mode_transitions() {
        let mut b = small_board();
        assert_eq!(b.mode(), AssignMode::SetStart);
        b.select(0).unwrap();
        assert_eq!(b.mode(), AssignMode::SetTarget);
        assert_eq!(b.start(), Some(0));
        b.select(24).unwrap();
        assert_eq!(b.mode(), AssignMode::AddWalls);
        assert_eq!(b.end(), Some(24));
        b.select(12).unwrap();
        b.select(12).unwrap();
        assert_eq!(b.walls(), &[12]);
        assert_eq!(b.mode(), AssignMode::AddWalls);

        b.go().unwrap();
        assert_eq!(b.mode(), AssignMode::Animating);
        b.select(3).unwrap();
        assert!(!b.cell(3).unwrap().wall);

        b.finish();
        assert_eq!(b.mode(), AssignMode::Done);
        b.select(3).unwrap();
        assert_eq!(b.mode(), AssignMode::SetStart);
        assert_eq!(b.start(), None);
        assert!(b.walls().is_empty());
    }

    #[test]
    fn walls_skip_endpoints() {
        let mut b = small_board();
        b.select(6).unwrap();
        b.select(7).unwrap();
        b.select(6).unwrap();
        b.select(7).unwrap();
        assert!(b.walls().is_empty());
        let c = b.cell(6).unwrap();
        assert!(c.start && !c.wall);
    }

    #[test]
    fn go_requires_both_endpoints() {
        let mut b = small_board();
        b.update(key('g')).unwrap();
        assert_eq!(b.mode(), AssignMode::SetStart);
        b.select(0).unwrap();
        b.update(key('g')).unwrap();
        assert_eq!(b.mode(), AssignMode::SetTarget);
    }

    #[test]
    fn keyboard_selection_uses_cursor() {
        let mut b = small_board();
        b.update(Msg::key(Key::ArrowRight)).unwrap();
        b.update(Msg::key(Key::ArrowDown)).unwrap();
        b.update(Msg::key(Key::Enter)).unwrap();
        assert_eq!(b.start(), Some(6));
        // The cursor stays on the grid.
        for _ in 0..10 {
            b.update(Msg::key(Key::ArrowLeft)).unwrap();
        }
        b.update(Msg::key(Key::Space)).unwrap();
        assert_eq!(b.end(), Some(5));
    }

    #[test]
    fn drag_paints_walls() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.select(24).unwrap();

        // Moving without a button held paints nothing.
        b.update(Msg::mouse(MouseAction::Move, Point::new(1, 1))).unwrap();
        assert!(b.walls().is_empty());

        b.update(Msg::mouse(MouseAction::Main, Point::new(2, 0))).unwrap();
        assert!(b.is_painting());
        b.update(Msg::mouse(MouseAction::Move, Point::new(2, 1))).unwrap();
        b.update(Msg::mouse(MouseAction::Move, Point::new(2, 2))).unwrap();
        b.update(Msg::mouse(MouseAction::Move, Point::new(9, 9))).unwrap();
        b.update(Msg::mouse(MouseAction::Release, Point::new(2, 2))).unwrap();
        assert!(!b.is_painting());
        b.update(Msg::mouse(MouseAction::Move, Point::new(2, 3))).unwrap();
        assert_eq!(b.walls(), &[2, 7, 12]);
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut b = small_board();
        let effect = b
            .update(Msg::mouse(MouseAction::Main, Point::new(7, 1)))
            .unwrap();
        assert_eq!(effect, None);
        assert_eq!(b.mode(), AssignMode::SetStart);
    }

    #[test]
    fn classification_by_phase() {
        let mut flags = CellFlags::default();
        assert_eq!(flags.color(), COL_BLANK);
        flags.mark(Phase::Discovered);
        assert_eq!(flags.color(), COL_REGISTERED);
        flags.mark(Phase::Expanded);
        assert_eq!(flags.color(), COL_VISITED);
        flags.mark(Phase::Path);
        assert_eq!(flags.color(), COL_PATH);

        let mut start = CellFlags {
            start: true,
            end: true,
            ..CellFlags::default()
        };
        start.mark(Phase::Path);
        assert!(start.start && start.path);
        assert_eq!(start.color(), COL_START);
        let wall = CellFlags {
            wall: true,
            path: true,
            ..CellFlags::default()
        };
        assert_eq!(wall.color(), COL_WALL);
    }

    #[test]
    fn batches() {
        let steps: Vec<TraceStep> = (0..25).map(|i| TraceStep::new(i, Phase::Discovered)).collect();
        let mut anim = Animation::new(steps, 10);
        assert_eq!(anim.next_batch().len(), 10);
        assert_eq!(anim.remaining(), 15);
        assert_eq!(anim.next_batch().len(), 10);
        let last = anim.next_batch();
        assert_eq!(last.len(), 5);
        assert_eq!(last[4].index, 24);
        assert!(anim.is_done());
        assert!(anim.next_batch().is_empty());
        assert_eq!(Animation::new(Vec::new(), 0).next_batch().len(), 0);
    }

    #[test]
    fn animation_marks_the_path() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.select(4).unwrap();
        b.go().unwrap();
        assert_eq!(b.outcome(), Some(Outcome::Cost(4)));
        let mut ticks = 0;
        while b.tick() {
            ticks += 1;
        }
        assert!(ticks > 0);
        assert_eq!(b.mode(), AssignMode::Done);
        for idx in 0..5 {
            assert!(b.cell(idx).unwrap().path, "cell {idx} not on path");
        }
        assert!(!b.cell(24).unwrap().path);
        assert!(b.cell(0).unwrap().start);
    }

    #[test]
    fn walled_off_target_reports_no_path() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.select(24).unwrap();
        for idx in [1, 5, 6] {
            b.select(idx).unwrap();
        }
        b.go().unwrap();
        b.finish();
        assert_eq!(b.outcome(), Some(Outcome::NoPath));
        assert!(b.status_line().ends_with("no path"));
        assert!((0..25).all(|i| !b.cell(i).unwrap().path));
    }

    #[test]
    fn scale_keys_reset_the_board() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.update(key('3')).unwrap();
        assert_eq!(b.scale(), Scale::Large);
        assert_eq!(b.dims().len(), 6000);
        assert_eq!(b.start(), None);
        assert_eq!(b.mode(), AssignMode::SetStart);
        assert_eq!(b.screen_size(), (100, 63));
    }

    #[test]
    fn toggles() {
        let mut b = small_board();
        b.update(key('h')).unwrap();
        b.update(key('d')).unwrap();
        assert_eq!(b.heuristic(), Heuristic::Manhattan);
        assert_eq!(b.adjacency(), Adjacency::Diagonal);
        assert!(b.status_line().contains("heuristic on | diagonals on"));
        assert_eq!(b.update(key('q')).unwrap(), Some(Effect::End));
        assert_eq!(b.update(key('x')).unwrap(), None);
    }

    #[test]
    fn random_walls_respect_density() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.select(24).unwrap();
        b.wall_density = 0.0;
        b.random_walls();
        assert!(b.walls().is_empty());
        b.wall_density = 1.0;
        b.random_walls();
        assert_eq!(b.walls().len(), 23);
        assert!(!b.walls().contains(&0) && !b.walls().contains(&24));
    }

    fn row_text(screen: &Screen, y: i32) -> String {
        let row: String = (0..screen.size().x)
            .map(|x| screen.at(Point::new(x, y)).ch)
            .collect();
        row.trim_end().to_string()
    }

    #[test]
    fn status_and_help_rows_fit_on_screen() {
        let mut b = Board::new(&Config::default()).unwrap();
        b.select(0).unwrap();
        b.select(50).unwrap();
        b.go().unwrap();
        b.finish();
        let (w, h) = b.screen_size();
        let mut screen = Screen::new(w, h);
        b.draw(&mut screen);
        assert!(row_text(&screen, 28).ends_with("path cost 11"));
        assert_eq!(row_text(&screen, 29), HELP_LINES[0]);
        assert!(row_text(&screen, 30).ends_with("q: quit"));
    }

    #[test]
    fn longest_status_line_fits() {
        // 40x28 uses the minimum width; its costs stay below 40 * 28.
        let mut b = Board::new(&Config::default()).unwrap();
        b.mode = AssignMode::Animating;
        b.outcome = Some(Outcome::Cost(1119));
        let (w, _) = b.screen_size();
        assert_eq!(w, MIN_SCREEN_WIDTH);
        assert!(b.status_line().len() <= w as usize, "{}", b.status_line());
    }

    #[test]
    fn draw_uses_palette_and_status() {
        let mut b = small_board();
        b.select(0).unwrap();
        b.select(24).unwrap();
        b.select(12).unwrap();
        let (w, h) = b.screen_size();
        let mut screen = Screen::new(w, h);
        b.draw(&mut screen);
        assert_eq!(screen.at(Point::new(0, 0)).bg, COL_START);
        assert_eq!(screen.at(Point::new(0, 0)).ch, '+');
        assert_eq!(screen.at(Point::new(4, 4)).bg, COL_END);
        assert_eq!(screen.at(Point::new(2, 2)).bg, COL_WALL);
        assert_eq!(screen.at(Point::new(1, 0)).bg, COL_BLANK);
        assert_eq!(screen.at(Point::new(0, 5)).ch, 'a');
        assert_eq!(screen.at(Point::new(0, 5)).bg, COL_STATUS_BG);
    }
}
