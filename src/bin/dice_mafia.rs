//! Console front-end.
//!
//! Plays one match in the terminal. Human starting players are asked for a
//! direction; automated players flip a coin.
//!
//! Options: --players, --humans, --rounds, --starting-score, --seed, --direction,
//! --direction-policy

use clap::Parser;
use dialoguer::Select;

use dice_mafia::core::{DirectionPolicy, GameConfig, GameRng, Player};
use dice_mafia::events::{EventSink, GameEvent};
use dice_mafia::games::mafia::Game;
use dice_mafia::rules::{ByController, Direction, DirectionProvider, FixedDirection, RandomDirection};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a match of dice mafia", long_about = None)]
struct Args {
    /// Seated players (2-8)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// How many seats are human
    #[arg(long, default_value_t = 1)]
    humans: usize,

    /// Rounds before the match is decided on points
    #[arg(short, long, default_value_t = 10)]
    rounds: u32,

    /// Points every player starts with
    #[arg(long, default_value_t = 50)]
    starting_score: u32,

    /// Dice seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the prompt: every player always plays this way (forward|backward)
    #[arg(long, value_parser = parse_direction)]
    direction: Option<Direction>,

    /// When the starting player picks a direction (every-round|first-round-only)
    #[arg(long, value_parser = parse_policy, default_value = "every-round")]
    direction_policy: DirectionPolicy,
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    match s.to_ascii_lowercase().as_str() {
        "forward" | "f" | "cw" => Ok(Direction::Forward),
        "backward" | "b" | "ccw" => Ok(Direction::Backward),
        other => Err(format!("unknown direction '{other}', expected forward or backward")),
    }
}

fn parse_policy(s: &str) -> Result<DirectionPolicy, String> {
    match s.to_ascii_lowercase().as_str() {
        "every-round" | "every" => Ok(DirectionPolicy::EveryRound),
        "first-round-only" | "first" => Ok(DirectionPolicy::FirstRoundOnly),
        other => Err(format!(
            "unknown direction policy '{other}', expected every-round or first-round-only"
        )),
    }
}

/// Asks a human at the terminal.
struct Prompt;

impl DirectionProvider for Prompt {
    fn choose_direction(&mut self, player: &Player) -> Direction {
        let choices = ["Forward (clockwise)", "Backward (counter-clockwise)"];
        let selection = Select::new()
            .with_prompt(format!("{}, which way should play go?", player.id()))
            .items(&choices)
            .default(0)
            .interact();
        match selection {
            Ok(1) => Direction::Backward,
            Ok(_) => Direction::Forward,
            Err(err) => {
                log::warn!("could not read a direction ({err}), playing forward");
                Direction::Forward
            }
        }
    }
}

/// Prints events the way the table would announce them.
struct Table;

impl EventSink for Table {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { .. } => println!("\n{event}"),
            GameEvent::RoundEnded { .. } => println!("{event}\n"),
            GameEvent::GameOver { final_scores, .. } => {
                println!("\nFinal scores:");
                for (id, score) in final_scores {
                    println!("  {id}: {score} point{}", if *score != 1 { "s" } else { "" });
                }
                println!("{event}");
            }
            _ => println!("{event}"),
        }
    }
}

fn announce_roster(game: &Game) {
    let humans: Vec<String> = game
        .roster()
        .iter()
        .filter(|p| p.is_human())
        .map(|p| p.id().raw().to_string())
        .collect();
    match humans.len() {
        0 => println!("All players are automated."),
        n if n == game.roster().len() => println!("All players are human!"),
        1 => println!("Player {} is human; the others are automated.", humans[0]),
        _ => println!("Players {} are human; the others are automated.", humans.join(", ")),
    }
}

fn print_rules(game: &Game) {
    let config = game.config();
    println!("How to play:");
    println!("  Everyone starts with {} points.", config.starting_score);
    println!("  On your turn, roll all your dice. Every 1 leaves play; every 6 goes to the next player.");
    println!("  Empty your hand to win the round. The others roll what they still hold");
    println!("  and pay you the total, or whatever points they have left.");
    println!("  A player with no points is out.");
    match config.direction_policy {
        DirectionPolicy::EveryRound => println!("  Each round's first player chooses which way play goes."),
        DirectionPolicy::FirstRoundOnly => println!("  The first player chooses which way play goes for the whole match."),
    }
    println!(
        "  The last player standing wins, or the highest score after {} rounds.\n",
        config.round_limit
    );
}

fn print_standings(game: &Game) {
    println!("Standings after round {}:", game.round() - 1);
    for (id, score) in game.standings() {
        let status = if game.is_active(id) { "" } else { " (eliminated)" };
        println!("  {id}: {score}{status}");
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = GameConfig::new(args.players, args.humans)
        .with_round_limit(args.rounds)
        .with_starting_score(args.starting_score)
        .with_direction_policy(args.direction_policy);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    announce_roster(&game);
    print_rules(&game);

    let mut table = Table;
    let chooser = match args.seed {
        Some(seed) => RandomDirection::from_rng(GameRng::new(seed).fork()),
        None => RandomDirection::from_rng(GameRng::from_entropy()),
    };
    let mut provider: Box<dyn DirectionProvider> = match args.direction {
        Some(direction) => Box::new(FixedDirection(direction)),
        None => Box::new(ByController::new(Prompt, chooser)),
    };

    while let Some(report) = game.play_round(&mut provider, &mut table) {
        if report.outcome.is_none() {
            print_standings(&game);
        }
    }

    log::debug!("{:?}", game.outcome());
    println!("Thanks for playing dice mafia!");
}
