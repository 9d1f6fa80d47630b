use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use labyrinth::args::Args;
use labyrinth::render::Renderer;
use labyrinth::report_file::ReportFile;
use labyrinth::{format_seed, input, messages, seed};
use labyrinth_core::{GameRng, GameSession, Outcome};

/// Raw mode and the alternate screen, undone on drop so a panic or an
/// early `?` still leaves the terminal usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("could not switch the terminal to raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
            .context("could not enter the alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed_value = args.seed.unwrap_or_else(seed::generate_runtime_seed);
    let config = args.into_config().map_err(anyhow::Error::msg)?;

    println!("\n{}\n", messages::WELCOME_BANNER);
    println!("{}", messages::HERMES_MESSAGE);
    println!("{}", messages::HEPHAESTUS_MESSAGE);

    let mut session = GameSession::new(config, GameRng::seeded(seed_value))
        .context("maze generation wrote outside its own grid")?;

    println!("{}", messages::build_trivia(session.generation()));
    for &warning in &session.generation().warnings {
        println!("{}", messages::warning_line(warning));
    }

    print!("\nPress Enter to step into the labyrinth...");
    io::stdout().flush()?;
    io::stdin().lock().read_line(&mut String::new())?;

    let outcome = run_game(&mut session)?;

    println!("\n{}", messages::outcome_line(outcome));
    println!("Total moves made: {}", session.moves_made());
    println!("Game duration: {} ms", session.elapsed().as_millis());
    println!("Seed: {} (replay with --seed)", format_seed(seed_value));

    if let Some(report) = session.final_report() {
        let file = ReportFile::new(seed_value, report);
        let path = file.default_path();
        match file.write_atomic(&path) {
            Ok(()) => println!("Game result saved to {}", path.display()),
            Err(err) => eprintln!("Could not save the game result: {err}"),
        }
    }

    Ok(())
}

fn run_game(session: &mut GameSession) -> Result<Outcome> {
    let _guard = TerminalGuard::enter()?;
    let mut renderer = Renderer::new();
    renderer.draw_full(session)?;

    loop {
        let intent = input::read_intent()?;
        let report = session.apply(intent);

        if report.redraw_requested {
            renderer.draw_full(session)?;
        } else {
            renderer.draw_turn(session, &report.cell_changes)?;
        }

        let line = report
            .events
            .iter()
            .rev()
            .find_map(messages::event_line)
            .unwrap_or_default();
        renderer.draw_message(session, &line)?;

        if let Some(outcome) = report.outcome {
            return Ok(outcome);
        }
    }
}
