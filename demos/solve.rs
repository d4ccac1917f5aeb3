//! Terminal maze solver with live search visualization.
//!
//! Run: cargo run --bin solve -- path/to/maze.txt [--speed N] [--quiet]
//!
//! Walls are drawn dark, the start green, the goal red; frontier cells light
//! up cyan as they are opened, yellow while expanded, blue once closed, and
//! the final path is repainted green cell by cell. Space pauses, `q` or
//! Escape cancels. `--speed N` divides the per-event delay; `--quiet` skips
//! rendering entirely and prints a one-line summary.

use std::cell::Cell as StdCell;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazepath_core::{CellKind, MazeMap, Point};
use mazepath_search::{NullObserver, SearchObserver, SearchOutcome, search};

const BASE_DELAY: Duration = Duration::from_millis(40);

struct Options {
    path: String,
    speed: u32,
    quiet: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut path = None;
    let mut speed = 1u32;
    let mut quiet = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--speed" => {
                let v = args.next().ok_or("--speed needs a value")?;
                speed = v
                    .parse()
                    .map_err(|_| format!("bad --speed value: {v}"))?;
                if speed == 0 {
                    return Err("--speed must be at least 1".into());
                }
            }
            "--quiet" => quiet = true,
            _ if path.is_none() => path = Some(arg),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(Options {
        path: path.ok_or("usage: solve MAZE_FILE [--speed N] [--quiet]")?,
        speed,
        quiet,
    })
}

/// Observer that repaints cells in the terminal as the search progresses.
///
/// Keyboard is polled on every event: Space toggles pause, `q`/Escape
/// cancels. The per-event delay is `BASE_DELAY / speed`, the external
/// playback-speed knob of the engine's suspension points.
struct TermPainter {
    map: MazeMap,
    delay: Duration,
    paused: StdCell<bool>,
    cancelled: StdCell<bool>,
}

impl TermPainter {
    fn new(map: MazeMap, speed: u32) -> Self {
        Self {
            map,
            delay: BASE_DELAY / speed,
            paused: StdCell::new(false),
            cancelled: StdCell::new(false),
        }
    }

    fn draw_maze(&self) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, terminal::Clear(ClearType::All), cursor::Hide)?;
        for (p, kind) in self.map.grid.iter() {
            let (color, ch) = if p == self.map.start {
                (Color::Green, 'S')
            } else if p == self.map.goal {
                (Color::Red, 'F')
            } else {
                match kind {
                    CellKind::Blocked => (Color::DarkGrey, '#'),
                    CellKind::Open => (Color::Grey, '.'),
                }
            };
            self.put(&mut out, p, color, ch)?;
        }
        out.flush()
    }

    fn put(&self, out: &mut impl Write, p: Point, color: Color, ch: char) -> io::Result<()> {
        execute!(
            out,
            cursor::MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(color),
            crossterm::style::Print(ch),
            ResetColor
        )
    }

    fn paint(&self, p: Point, color: Color, ch: char) {
        // Endpoints keep their markers whatever the search reports.
        if p == self.map.start || p == self.map.goal {
            return;
        }
        let mut out = io::stdout();
        let _ = self.put(&mut out, p, color, ch);
        let _ = out.flush();
    }

    fn pump_input(&self) {
        while event::poll(Duration::ZERO).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                match key.code {
                    KeyCode::Char(' ') => self.paused.set(!self.paused.get()),
                    KeyCode::Char('q') | KeyCode::Esc => self.cancelled.set(true),
                    _ => {}
                }
            }
        }
    }

    fn throttle(&self) {
        self.pump_input();
        std::thread::sleep(self.delay);
    }
}

impl SearchObserver for TermPainter {
    fn node_expanded(&mut self, pos: Point, _g: i32, _h: i32, _f: i32) {
        self.paint(pos, Color::Yellow, '*');
        self.throttle();
    }

    fn node_opened(&mut self, pos: Point, _g: i32, _h: i32, _f: i32) {
        self.paint(pos, Color::Cyan, '+');
        self.throttle();
    }

    fn node_closed(&mut self, pos: Point, _f: i32) {
        self.paint(pos, Color::Blue, 'o');
    }

    fn path_step(&mut self, pos: Point, _index: usize) {
        self.paint(pos, Color::Green, '@');
        self.throttle();
    }

    fn should_pause(&self) -> bool {
        self.paused.get()
    }

    fn should_cancel(&self) -> bool {
        self.cancelled.get()
    }

    fn pause_wait(&mut self) {
        self.pump_input();
        std::thread::sleep(Duration::from_millis(20));
    }
}

fn run(opts: &Options) -> Result<SearchOutcome, Box<dyn std::error::Error>> {
    let map = MazeMap::load(&opts.path)?;
    if opts.quiet {
        return Ok(search(&map.grid, map.start, map.goal, &mut NullObserver)?);
    }

    let height = map.grid.height() as u16;
    let mut painter = TermPainter::new(map.clone(), opts.speed);
    painter.draw_maze()?;
    terminal::enable_raw_mode()?;
    let result = search(&map.grid, map.start, map.goal, &mut painter);
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::MoveTo(0, height), cursor::Show)?;
    Ok(result?)
}

fn main() -> ExitCode {
    let opts = match parse_args() {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(1);
        }
    };

    match run(&opts) {
        Ok(SearchOutcome::Found { path, expanded }) => {
            println!(
                "path found: {} cells, {} expansions",
                path.len(),
                expanded.len()
            );
            ExitCode::SUCCESS
        }
        Ok(SearchOutcome::NotFound { expanded }) => {
            println!("no path exists ({} cells explored)", expanded.len());
            ExitCode::from(2)
        }
        Ok(SearchOutcome::Cancelled { expanded }) => {
            println!("cancelled after {} expansions", expanded.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("solve failed: {e}");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
