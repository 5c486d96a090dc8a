//! Terminal falling-block puzzle (default binary).
//!
//! `single` plays alone; `versus` queues on an in-process matchmaker together
//! with a sparring bot and shows both boards side by side.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tetrissh::bot;
use tetrissh::cli::{CliArgs, Mode};
use tetrissh::input::{handle_key_event, should_quit};
use tetrissh::logging;
use tetrissh::play::{Effect, Effects, MatchController, Matchmaker, Msg, PlayConfig, SinglePlayer};
use tetrissh::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrissh::timers::Timers;

/// Upper bound on the wait between redraws, so the opponent board stays fresh.
const REDRAW: Duration = Duration::from_millis(100);

/// A play mode as seen by the event loop.
trait Screen {
    fn init(&mut self) -> Effects;
    fn update(&mut self, msg: Msg) -> Effects;
    fn render(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer);
}

impl Screen for SinglePlayer {
    fn init(&mut self) -> Effects {
        SinglePlayer::init(self)
    }

    fn update(&mut self, msg: Msg) -> Effects {
        SinglePlayer::update(self, msg)
    }

    fn render(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        view.render_single(&self.view(), viewport, fb);
    }
}

impl Screen for MatchController {
    fn init(&mut self) -> Effects {
        MatchController::init(self)
    }

    fn update(&mut self, msg: Msg) -> Effects {
        MatchController::update(self, msg)
    }

    fn render(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        view.render_match(&self.view(), viewport, fb);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = CliArgs::parse(&args)?;
    logging::init_from_env()?;
    let config = PlayConfig::from_env();
    let seed = cli.seed();
    info!(mode = ?cli.mode, seed, ?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = match cli.mode {
        Mode::Single => run(&mut term, &mut SinglePlayer::new(&config, seed)),
        Mode::Versus => run_versus(&mut term, &config, seed),
    };

    // Always try to restore terminal state.
    let _ = term.leave();
    result
}

fn run_versus(term: &mut TerminalRenderer, config: &PlayConfig, seed: u32) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let (matchmaker, worker) = Matchmaker::new(config.queue_capacity);
    runtime.spawn(worker.run());
    let sparring = runtime.spawn(bot::spar(
        matchmaker.clone(),
        config.clone(),
        seed.wrapping_add(1),
    ));

    let mut controller = MatchController::new(&matchmaker, config, seed);
    drop(matchmaker);
    let result = run(term, &mut controller);
    controller.close();

    runtime.block_on(async {
        match tokio::time::timeout(Duration::from_secs(1), sparring).await {
            Ok(Ok(score)) => info!(score, "sparring bot finished"),
            Ok(Err(e)) => warn!(error = %e, "sparring bot failed"),
            Err(_) => warn!("sparring bot still running at exit"),
        }
    });
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

fn run(term: &mut TerminalRenderer, screen: &mut impl Screen) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut timers = Timers::default();

    if settle(&mut timers, screen.init()) {
        return Ok(());
    }

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        screen.render(&view, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        let timeout = timers
            .next_deadline()
            .map(|t| t.saturating_duration_since(Instant::now()))
            .unwrap_or(REDRAW)
            .min(REDRAW);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let msg = if should_quit(key) {
                        Some(Msg::Quit)
                    } else {
                        handle_key_event(key).map(Msg::Act)
                    };
                    if let Some(msg) = msg {
                        if settle(&mut timers, screen.update(msg)) {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        while let Some(msg) = timers.take_due(Instant::now()) {
            if settle(&mut timers, screen.update(msg)) {
                return Ok(());
            }
        }
    }
}

/// Arm timers and log notifications. Returns true on `Exit`.
fn settle(timers: &mut Timers, effects: Effects) -> bool {
    for effect in timers.arm(effects, Instant::now()) {
        match effect {
            Effect::Exit => return true,
            Effect::GameOver { score } => info!(score, "game over"),
            Effect::OpponentFound => info!("opponent found"),
            Effect::MatchCanceled => {
                info!("match canceled");
                timers.clear();
            }
            Effect::ScheduleFall(_) | Effect::ScheduleLook(_) => {}
        }
    }
    false
}
