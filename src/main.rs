use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::input::{handle_action, map_event, InputResult};
use flappy::ui::draw_game;
use flappy::utils::persistence::{
    data_dir, flush_high_score, HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore,
};
use flappy::{
    AppError, Game, GameSettings, GameState, Playfield, TickEvent, TickResult, LOG_FILE,
    TICK_INTERVAL_MS,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), AppError> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut reset_high_score = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - a terminal Flappy Bird\n");
                println!("Usage: flappy [option]\n");
                println!("Options:");
                println!("  --reset-high-score  Set the saved high score back to 0");
                println!("  --version           Show version information");
                println!("  --help              Show this help message\n");
                println!("Controls: Space/Up/Enter/click to flap, R to reset, Q to quit");
                std::process::exit(0);
            }
            "--reset-high-score" => reset_high_score = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let mut store: Box<dyn HighScoreStore> = match JsonHighScoreStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("high score will not be saved: {}", e);
            Box::new(MemoryHighScoreStore::default())
        }
    };

    if reset_high_score {
        store.save(0)?;
        println!("High score reset.");
        return Ok(());
    }

    // Bad settings fail here, before the terminal is touched
    let mut game = Game::new(
        GameSettings::default_settings(),
        Playfield::default(),
        store.load(),
    )?;
    log::info!("session started, best {}", game.score.high);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut game, store.as_mut());

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    log::info!("session ended, best {}", game.score.high);
    println!("Best: {}", game.score.high);

    Ok(())
}

/// Fixed-cadence loop: draw, take input until the next tick is due, tick with
/// the measured wall-clock delta, persist a new best.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    store: &mut dyn HighScoreStore,
) -> Result<(), AppError> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let snapshot = game.snapshot();
        terminal.draw(|frame| draw_game(frame, &snapshot))?;

        // Poll for input until the tick deadline
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let before = game.state();
            if handle_action(game, map_event(&event::read()?)) == InputResult::Quit {
                return Ok(());
            }
            log_transition(before, game.state());
        }

        let now = Instant::now();
        let result = game.tick_at(now);
        log_tick(&result);
        flush_high_score(&result, game.score.high, store);

        next_tick += tick_interval;
        if next_tick < now {
            // Fell behind; the next tick's elapsed time absorbs the gap
            next_tick = now + tick_interval;
        }
    }
}

fn log_transition(before: GameState, after: GameState) {
    match (before, after) {
        (GameState::Ready, GameState::Active) => log::info!("run started"),
        (GameState::Stopped, GameState::Ready) => log::info!("reset"),
        _ => {}
    }
}

fn log_tick(result: &TickResult) {
    for event in &result.events {
        match event {
            TickEvent::PipeRecycled { top_gap_height } => {
                log::debug!("pipe recycled, gap top at {:.1}", top_gap_height)
            }
            TickEvent::Scored { score } => log::debug!("scored, now {}", score),
            TickEvent::NewHighScore { high_score } => log::info!("new high score {}", high_score),
            TickEvent::Crashed { cause, score } => {
                log::info!("run ended: {:?}, score {}", cause, score)
            }
        }
    }
}

/// Log to a file in the data directory; the terminal belongs to the UI.
/// Filter with `RUST_LOG`, default `info`.
fn init_logging() {
    let Ok(dir) = data_dir() else {
        return;
    };
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
