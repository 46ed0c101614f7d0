//! Replays a [`SearchResult`]: first its preprocessing steps, then its search steps.
//!
//! The position is `(phase, index)` with `index` bounded by the step count of `phase`. All
//! navigation is total: anything that would leave the bounds is a no-op.
//!
//! Auto-advance is driven from outside. `play` issues a [`TimerHandle`]; the driver waits
//! [`Playback::interval`] and calls [`Playback::tick`] with that handle. A handle becomes stale
//! as soon as anything else moves the position, changes the speed, pauses or resets, and
//! ticks carrying a stale handle are ignored. At most one handle is live at a time.

use std::{rc::Rc, time::Duration};

use log::{trace, warn};

use crate::{
  config::PlaybackConfig,
  trace::{Phase, PreprocessStep, SearchResult, SearchStep},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackEvent {
  PhaseChanged { from: Phase, to: Phase },
  /// the last search step was reached; sent once per loaded result
  Completed { matches: Vec<usize> },
  Started { interval: Duration },
  Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepRef<'a> {
  Preprocess(&'a PreprocessStep),
  Search(&'a SearchStep),
}

type Subscriber = Box<dyn FnMut(&PlaybackEvent)>;

pub struct Playback {
  config: PlaybackConfig,
  result: Option<Rc<SearchResult>>,
  phase: Phase,
  index: usize,
  speed: f64,
  timer: Option<TimerHandle>,
  next_handle: u64,
  completed: bool,
  subscribers: Vec<Subscriber>,
}

impl Default for Playback {
  fn default() -> Self {
    Self::new(PlaybackConfig::default())
  }
}

impl Playback {
  pub fn new(config: PlaybackConfig) -> Self {
    let speed = config.clamp_speed(config.default_speed);
    Playback {
      config,
      result: None,
      phase: Phase::Preprocessing,
      index: 0,
      speed,
      timer: None,
      next_handle: 0,
      completed: false,
      subscribers: vec![],
    }
  }

  pub fn subscribe(&mut self, subscriber: impl FnMut(&PlaybackEvent) + 'static) {
    self.subscribers.push(Box::new(subscriber));
  }

  /// Replaces the current result and returns to `Preprocessing(0)`.
  pub fn load(&mut self, result: Rc<SearchResult>) {
    self.stop();
    self.move_to(Phase::Preprocessing, 0);
    self.result = Some(result);
    self.completed = false;
    self.check_completed();
  }

  /// Drops the current result, e.g. after its inputs changed.
  pub fn unload(&mut self) {
    self.stop();
    self.move_to(Phase::Preprocessing, 0);
    self.result = None;
    self.completed = false;
  }

  pub fn result(&self) -> Option<&SearchResult> {
    self.result.as_deref()
  }

  pub fn phase(&self) -> Phase {
    self.phase
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn speed(&self) -> f64 {
    self.speed
  }

  pub fn interval(&self) -> Duration {
    self.config.interval(self.speed)
  }

  pub fn is_playing(&self) -> bool {
    self.timer.is_some()
  }

  pub fn is_completed(&self) -> bool {
    self.completed
  }

  /// The live timer handle and the interval to wait before ticking it.
  pub fn active_timer(&self) -> Option<(TimerHandle, Duration)> {
    self.timer.map(|handle| (handle, self.interval()))
  }

  pub fn current_step(&self) -> Option<StepRef<'_>> {
    let result = self.result.as_deref()?;
    match self.phase {
      Phase::Preprocessing => result.preprocess_steps.get(self.index).map(StepRef::Preprocess),
      Phase::Search => result.search_steps.get(self.index).map(StepRef::Search),
    }
  }

  /// `(step number, steps in phase)`, 1-based as shown to the user.
  pub fn position(&self) -> (usize, usize) {
    (self.index + 1, self.len_of(self.phase))
  }

  pub fn step_forward(&mut self) -> bool {
    let moved = self.advance();
    if moved {
      self.restart_timer();
    }
    moved
  }

  pub fn step_backward(&mut self) -> bool {
    let moved = if self.index > 0 {
      self.move_to(self.phase, self.index - 1);
      true
    } else if self.phase == Phase::Search && self.len_of(Phase::Preprocessing) > 0 {
      self.move_to(Phase::Preprocessing, self.len_of(Phase::Preprocessing) - 1);
      true
    } else {
      false
    };
    if moved {
      self.restart_timer();
    }
    moved
  }

  /// Jumps to `index` within the current phase; out-of-range indices are ignored.
  pub fn seek(&mut self, index: usize) -> bool {
    if index >= self.len_of(self.phase) || index == self.index {
      return false;
    }
    self.move_to(self.phase, index);
    self.check_completed();
    self.restart_timer();
    true
  }

  /// Starts auto-advance at `speed` steps per second. Calling it while already playing only
  /// changes the speed.
  pub fn play(&mut self, speed: f64) -> Option<TimerHandle> {
    if self.result.is_none() {
      return None;
    }
    if self.timer.is_some() {
      self.set_speed(speed);
    } else {
      self.speed = self.checked_speed(speed);
      self.timer = Some(self.issue_handle());
      let interval = self.interval();
      trace!("playback started, interval {:?}", interval);
      self.emit(PlaybackEvent::Started { interval });
    }
    self.timer
  }

  pub fn pause(&mut self) {
    self.stop();
  }

  pub fn set_speed(&mut self, speed: f64) {
    let speed = self.checked_speed(speed);
    if speed != self.speed {
      self.speed = speed;
      self.restart_timer();
    }
  }

  pub fn reset(&mut self) {
    self.stop();
    self.move_to(Phase::Preprocessing, 0);
  }

  /// Advances on behalf of the timer identified by `handle`. Stale handles are ignored.
  /// Playback stops on its own once there is nothing left to advance to.
  pub fn tick(&mut self, handle: TimerHandle) -> bool {
    if self.timer != Some(handle) {
      trace!("ignoring stale tick {:?}", handle);
      return false;
    }
    let moved = self.advance();
    if !moved {
      self.stop();
    }
    moved
  }

  /// Runs auto-advance to completion, calling `wait` with the interval before every tick.
  pub fn drive(&mut self, mut wait: impl FnMut(Duration)) {
    while let Some((handle, interval)) = self.active_timer() {
      wait(interval);
      self.tick(handle);
    }
  }

  fn len_of(&self, phase: Phase) -> usize {
    self.result.as_deref().map_or(0, |r| r.steps_in(phase))
  }

  fn advance(&mut self) -> bool {
    if self.index + 1 < self.len_of(self.phase) {
      self.move_to(self.phase, self.index + 1);
    } else if self.phase == Phase::Preprocessing && self.len_of(Phase::Search) > 0 {
      self.move_to(Phase::Search, 0);
    } else {
      return false;
    }
    self.check_completed();
    true
  }

  fn move_to(&mut self, phase: Phase, index: usize) {
    let from = self.phase;
    self.phase = phase;
    self.index = index;
    trace!("playback at {:?}({})", phase, index);
    if from != phase {
      self.emit(PlaybackEvent::PhaseChanged { from, to: phase });
    }
  }

  fn check_completed(&mut self) {
    if self.completed || self.phase != Phase::Search {
      return;
    }
    let Some(result) = self.result.as_deref() else {
      return;
    };
    if self.index + 1 == result.search_steps.len() {
      self.completed = true;
      let matches = result.matches.clone();
      self.emit(PlaybackEvent::Completed { matches });
    }
  }

  fn checked_speed(&self, speed: f64) -> f64 {
    let clamped = self.config.clamp_speed(speed);
    if clamped != speed {
      warn!("playback speed {} outside supported range, using {}", speed, clamped);
    }
    clamped
  }

  fn issue_handle(&mut self) -> TimerHandle {
    self.next_handle += 1;
    TimerHandle(self.next_handle)
  }

  // replaces a live handle so any tick already scheduled for it is dropped
  fn restart_timer(&mut self) {
    if self.timer.is_some() {
      self.timer = Some(self.issue_handle());
    }
  }

  fn stop(&mut self) {
    if self.timer.take().is_some() {
      trace!("playback stopped");
      self.emit(PlaybackEvent::Stopped);
    }
  }

  fn emit(&mut self, event: PlaybackEvent) {
    for subscriber in &mut self.subscribers {
      subscriber(&event);
    }
  }
}
