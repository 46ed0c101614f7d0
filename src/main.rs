use std::{cell::RefCell, path::Path, process, rc::Rc, thread};

use clap::Parser;
use log::LevelFilter;
use pattern_trace::{
  Algorithm,
  Playback,
  PlaybackEvent,
  InputError,
  Session,
  config::Config,
  error::validate,
  format::{self, algorithm_name},
  naive,
  playback::StepRef,
  pseudocode,
  trace::{Phase, SearchResult},
};

mod cli;
use cli::{Cli, Commands, Inputs};

fn main() {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();

  if let Err(e) = run(cli) {
    eprintln!("error: {}", e);
    process::exit(1);
  }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
  Ok(match path {
    Some(path) => Config::load(path)?,
    None => Config::default(),
  })
}

fn session_for(config: &Config, inputs: &Inputs) -> Session {
  let mut session = Session::new(config);
  session.set_algorithm(inputs.algorithm.unwrap_or(config.algorithm));
  session.set_text(&inputs.text);
  session.set_pattern(&inputs.pattern);
  session
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
  let config = load_config(cli.config.as_deref())?;

  match cli.command {
    Commands::Trace { inputs, json } => {
      let mut session = session_for(&config, &inputs);
      let result = session.visualize()?;
      if json {
        println!("{}", serde_json::to_string_pretty(result)?);
      } else {
        print_trace(result);
      }
    }
    Commands::Play { inputs, speed } => {
      let mut session = session_for(&config, &inputs);
      session.visualize()?;
      play(&mut session, speed.unwrap_or(config.playback.default_speed));
    }
    Commands::Compare { text, pattern } => {
      let (expected, results) = compare(&config, &text, &pattern)?;
      println!("{:<12} {:?}", "brute force", expected);
      for result in &results {
        let verdict = if result.matches == expected { "ok" } else { "MISMATCH" };
        println!(
          "{:<12} {:?} ({} steps, {})",
          algorithm_name(result.algorithm),
          result.matches,
          result.preprocess_steps.len() + result.search_steps.len(),
          verdict
        );
      }
    }
  }
  Ok(())
}

/// Brute-force matches plus one result per engine, on inputs normalized like every other command.
fn compare(config: &Config, text: &str, pattern: &str) -> Result<(Vec<usize>, Vec<SearchResult>), InputError> {
  let mut session = Session::new(config);
  session.set_text(text);
  session.set_pattern(pattern);
  validate(session.text(), session.pattern())?;
  let expected = naive::find_all(session.text(), session.pattern());
  let mut results = vec![];
  for algorithm in Algorithm::ALL {
    session.set_algorithm(algorithm);
    results.push(session.visualize()?.clone());
  }
  Ok((expected, results))
}

fn print_step(result: &SearchResult, step: StepRef<'_>) {
  let (line, description, table) = match step {
    StepRef::Preprocess(step) => (
      pseudocode::listing(result.algorithm, Phase::Preprocessing)[pseudocode::preprocess_line(step.op)],
      format::describe_preprocess(result, step),
      format::preprocess_table(result, step),
    ),
    StepRef::Search(step) => (
      pseudocode::listing(result.algorithm, Phase::Search)[pseudocode::search_line(result.algorithm, step.op)],
      format::describe_search(result, step),
      format::search_table(result, step),
    ),
  };
  println!("{}", description);
  println!("  > {}", line.trim());
  println!("{}\n", table.render());
}

fn print_trace(result: &SearchResult) {
  println!("== {} preprocessing ({} steps)", algorithm_name(result.algorithm), result.preprocess_steps.len());
  for (i, step) in result.preprocess_steps.iter().enumerate() {
    println!("-- step {}", i + 1);
    print_step(result, StepRef::Preprocess(step));
  }
  println!("== {} search ({} steps)", algorithm_name(result.algorithm), result.search_steps.len());
  for (i, step) in result.search_steps.iter().enumerate() {
    println!("-- step {}", i + 1);
    print_step(result, StepRef::Search(step));
  }
  println!("Matches: {:?}", result.matches);
}

fn show(playback: &Playback) {
  if let (Some(result), Some(step)) = (playback.result(), playback.current_step()) {
    let (n, total) = playback.position();
    println!("-- {:?} step {} of {}", playback.phase(), n, total);
    print_step(result, step);
  }
}

fn play(session: &mut Session, speed: f64) {
  let events = Rc::new(RefCell::new(Vec::<PlaybackEvent>::new()));
  let playback = session.playback_mut();
  let sink = Rc::clone(&events);
  playback.subscribe(move |event| sink.borrow_mut().push(event.clone()));

  println!("== preprocessing phase");
  show(playback);
  playback.play(speed);
  while let Some((handle, interval)) = playback.active_timer() {
    thread::sleep(interval);
    let moved = playback.tick(handle);
    let pending = events.borrow_mut().drain(..).collect::<Vec<_>>();
    for event in &pending {
      if let PlaybackEvent::PhaseChanged { to: Phase::Search, .. } = event {
        println!("== search phase");
      }
    }
    if moved {
      show(playback);
    }
    for event in &pending {
      if let PlaybackEvent::Completed { matches } = event {
        println!("== search complete, {} match(es) at {:?}", matches.len(), matches);
      }
    }
  }
}
