//! The game controller: lifecycle, orchestration and deferred work.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ─begin→ NamingPlayer ─submit_name→ SelectingCategory
//!      ─select_category→ SelectingDifficulty ─select_difficulty→ Active
//!      ─last pair matched→ Completed ─begin/restart→ ...
//! ```
//!
//! `start_session` runs the three selection steps in one call, and
//! `abandon` drops back to `Idle` from anywhere.
//!
//! ## Deferred Work
//!
//! Evaluation delays, hint previews and the per-second tick are tasks on a
//! virtual clock that the host moves with `advance`. Every task carries the
//! generation of the session that queued it; tasks from a replaced session
//! are cancelled, and any that slip through are dropped when they fire.
//!
//! ## Rejections
//!
//! Reveals and hints refused in the current state return an
//! `InvalidTransition` and change nothing. They are logged at debug and
//! emit no event, since they come from ordinary input races such as a
//! double click.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::evaluator::{Completion, Evaluation, RevealOutcome};
use super::state::{Session, SessionSnapshot};
use super::timer::{DueTask, Scheduler, SessionTimer, TaskKind};
use crate::board::check_pair_supply;
use crate::content::{Catalog, Category};
use crate::core::{CardId, Difficulty, EngineConfig, GameRng, GameRngState, Generation};
use crate::error::{InvalidTransition, PersistenceError, Result};
use crate::events::{EventBus, EventSink, GameEvent};
use crate::persistence::{
    rank_records, GameRecord, LeaderboardEntry, LeaderboardQuery, PersistenceGateway, ProfileStore,
};

/// Where the game is, from the player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// No game in progress.
    #[default]
    Idle,
    /// Waiting for a player name.
    NamingPlayer,
    /// Waiting for a category.
    SelectingCategory,
    /// Waiting for a difficulty.
    SelectingDifficulty,
    /// A session is being played.
    Active,
    /// The last session finished. Its final state stays readable.
    Completed,
}

/// Choices made on the way to a session.
#[derive(Clone, Debug, Default)]
struct Selection {
    player_name: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
}

/// Drives sessions for one player seat.
pub struct GameController<G, P> {
    config: EngineConfig,
    catalog: Catalog,
    gateway: G,
    profiles: P,
    bus: EventBus,
    rng: GameRng,
    scheduler: Scheduler,
    timer: SessionTimer,
    lifecycle: Lifecycle,
    session: Option<Session>,
    generation: Generation,
    selection: Selection,
    last_record: Option<GameRecord>,
}

impl<G, P> GameController<G, P>
where
    G: PersistenceGateway,
    P: ProfileStore,
{
    /// Create a controller with an entropy-seeded RNG.
    pub fn new(config: EngineConfig, catalog: Catalog, gateway: G, profiles: P) -> Self {
        Self::with_rng(config, catalog, gateway, profiles, GameRng::from_entropy())
    }

    /// Create a controller whose boards and hints are reproducible.
    pub fn with_seed(
        config: EngineConfig,
        catalog: Catalog,
        gateway: G,
        profiles: P,
        seed: u64,
    ) -> Self {
        Self::with_rng(config, catalog, gateway, profiles, GameRng::new(seed))
    }

    /// Create a controller that continues a saved RNG stream.
    pub fn with_rng_state(
        config: EngineConfig,
        catalog: Catalog,
        gateway: G,
        profiles: P,
        state: &GameRngState,
    ) -> Self {
        Self::with_rng(config, catalog, gateway, profiles, GameRng::from_state(state))
    }

    fn with_rng(
        config: EngineConfig,
        catalog: Catalog,
        gateway: G,
        profiles: P,
        rng: GameRng,
    ) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("{}; the session tick will run every 1 ms", e);
        }
        Self {
            config,
            catalog,
            gateway,
            profiles,
            bus: EventBus::new(),
            rng,
            scheduler: Scheduler::new(),
            timer: SessionTimer::new(),
            lifecycle: Lifecycle::Idle,
            session: None,
            generation: Generation::initial(),
            selection: Selection::default(),
            last_record: None,
        }
    }

    /// Register an event listener.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.bus.subscribe(sink);
    }

    // === Selection flow ===

    /// Start choosing a new game.
    ///
    /// Any session in play is discarded. Returns the remembered player name
    /// to pre-fill the name prompt.
    pub fn begin(&mut self) -> Option<String> {
        self.discard_session();
        self.selection = Selection::default();
        self.lifecycle = Lifecycle::NamingPlayer;

        match self.profiles.load_name() {
            Ok(name) => name,
            Err(e) => {
                log::warn!("could not load remembered player name: {}", e);
                None
            }
        }
    }

    /// Accept the player name. Returns the name as stored.
    pub fn submit_name(&mut self, raw: &str) -> Result<String> {
        self.expect_phase(Lifecycle::NamingPlayer)?;
        let name = self.config.normalize_player_name(raw)?;
        self.remember_name(&name);
        self.selection.player_name = Some(name.clone());
        self.lifecycle = Lifecycle::SelectingCategory;
        Ok(name)
    }

    /// Pick a category by key.
    pub fn select_category(&mut self, key: &str) -> Result<()> {
        self.expect_phase(Lifecycle::SelectingCategory)?;
        self.catalog.category(key)?;
        self.selection.category = Some(key.to_string());
        self.lifecycle = Lifecycle::SelectingDifficulty;
        Ok(())
    }

    /// Pick a difficulty by key and deal the session.
    ///
    /// If the chosen category cannot fill the board, the error is returned
    /// before anything is dealt and the difficulty can be chosen again.
    pub fn select_difficulty(&mut self, key: &str) -> Result<Generation> {
        self.expect_phase(Lifecycle::SelectingDifficulty)?;
        let (name, category) = match (&self.selection.player_name, &self.selection.category) {
            (Some(name), Some(category)) => (name.clone(), category.clone()),
            _ => {
                return Err(InvalidTransition::UnexpectedPhase {
                    expected: Lifecycle::SelectingCategory,
                    actual: self.lifecycle,
                }
                .into())
            }
        };
        let generation = self.launch(&name, &category, key)?;
        self.selection.difficulty = Some(key.to_string());
        Ok(generation)
    }

    /// Run the whole selection flow in one call.
    ///
    /// Every input is checked before the current session is touched.
    pub fn start_session(
        &mut self,
        player_name: &str,
        category: &str,
        difficulty: &str,
    ) -> Result<Generation> {
        let name = self.config.normalize_player_name(player_name)?;
        let (category_def, difficulty_def) = self.resolve(category, difficulty)?;
        check_pair_supply(&category_def, &difficulty_def)?;

        self.remember_name(&name);
        let generation = self.launch(&name, category, difficulty)?;
        self.selection = Selection {
            player_name: Some(name),
            category: Some(category.to_string()),
            difficulty: Some(difficulty.to_string()),
        };
        Ok(generation)
    }

    /// Deal a fresh session with the previous selections.
    pub fn restart(&mut self) -> Result<Generation> {
        let Selection {
            player_name: Some(name),
            category: Some(category),
            difficulty: Some(difficulty),
        } = self.selection.clone()
        else {
            return Err(InvalidTransition::UnexpectedPhase {
                expected: Lifecycle::Completed,
                actual: self.lifecycle,
            }
            .into());
        };
        self.launch(&name, &category, &difficulty)
    }

    /// Drop the current session and return to `Idle`.
    ///
    /// Returns true if a session was discarded.
    pub fn abandon(&mut self) -> bool {
        let had_session = self.discard_session();
        self.lifecycle = Lifecycle::Idle;
        had_session
    }

    // === Play ===

    /// Turn a card face up.
    pub fn reveal(
        &mut self,
        card: CardId,
    ) -> std::result::Result<RevealOutcome, InvalidTransition> {
        let session = self.active_session_mut()?;
        let generation = session.generation();
        let outcome = session.reveal(card).map_err(|e| {
            log::debug!("reveal of {} ignored: {}", card, e);
            e
        })?;

        self.bus.emit(&GameEvent::Flip { generation, card });
        if let RevealOutcome::PairPending(_) = outcome {
            self.scheduler.schedule(
                self.config.timings.evaluation_delay_ms,
                generation,
                TaskKind::Evaluate,
            );
        }
        Ok(outcome)
    }

    /// Show a random unmatched pair for a short preview.
    pub fn use_hint(&mut self) -> std::result::Result<[CardId; 2], InvalidTransition> {
        let session = self.active_session_mut()?;
        let generation = session.generation();
        let cards = session.use_hint().map_err(|e| {
            log::debug!("hint ignored: {}", e);
            e
        })?;
        let hints_remaining = session.hints_remaining();

        self.bus.emit(&GameEvent::Hint {
            generation,
            cards,
            hints_remaining,
        });
        self.scheduler.schedule(
            self.config.timings.hint_preview_ms,
            generation,
            TaskKind::EndHintPreview(cards),
        );
        Ok(cards)
    }

    /// Move the clock forward by `elapsed_ms`, firing every task that falls due.
    ///
    /// Returns how many tasks fired, stale ones included.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        let mut fired = 0;
        while let Some(task) = self.scheduler.next_due(until) {
            self.dispatch(task);
            fired += 1;
        }
        self.scheduler.advance_clock_to(until);
        fired
    }

    // === Leaderboard ===

    /// Ranked leaderboard rows for `query`.
    pub fn leaderboard(
        &self,
        query: &LeaderboardQuery,
    ) -> std::result::Result<Vec<LeaderboardEntry>, PersistenceError> {
        Ok(rank_records(self.gateway.query(query)?))
    }

    /// The default query: configured row limit, filtered to the current
    /// category and difficulty when a game has been chosen.
    #[must_use]
    pub fn leaderboard_query(&self) -> LeaderboardQuery {
        let mut query = LeaderboardQuery::new().limit(self.config.leaderboard_limit);
        query.category = self.selection.category.clone();
        query.difficulty = self.selection.difficulty.clone();
        query
    }

    // === Accessors ===

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The current or last finished session.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Generation of the current session, or `Generation::initial()` if
    /// none was ever started.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Position of the RNG that seeds future sessions.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    #[must_use]
    pub fn profiles(&self) -> &P {
        &self.profiles
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// The selected player name, once submitted.
    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.selection.player_name.as_deref()
    }

    /// Record stored for the last completed session, if the store accepted it.
    #[must_use]
    pub fn last_record(&self) -> Option<&GameRecord> {
        self.last_record.as_ref()
    }

    // === Internals ===

    fn expect_phase(&self, expected: Lifecycle) -> std::result::Result<(), InvalidTransition> {
        if self.lifecycle == expected {
            Ok(())
        } else {
            Err(InvalidTransition::UnexpectedPhase {
                expected,
                actual: self.lifecycle,
            })
        }
    }

    fn active_session_mut(&mut self) -> std::result::Result<&mut Session, InvalidTransition> {
        match (self.lifecycle, self.session.as_mut()) {
            (Lifecycle::Active, Some(session)) => Ok(session),
            _ => {
                log::debug!("input ignored in {:?}", self.lifecycle);
                Err(InvalidTransition::NotActive)
            }
        }
    }

    fn resolve(&self, category: &str, difficulty: &str) -> Result<(Category, Difficulty)> {
        let category = self.catalog.category(category)?.clone();
        let difficulty = self.catalog.difficulty(difficulty)?.clone();
        Ok((category, difficulty))
    }

    fn remember_name(&mut self, name: &str) {
        if let Err(e) = self.profiles.save_name(name) {
            log::warn!("could not remember player name: {}", e);
        }
    }

    /// Deal and start a session, replacing any current one.
    fn launch(
        &mut self,
        player_name: &str,
        category: &str,
        difficulty: &str,
    ) -> Result<Generation> {
        let (category, difficulty) = self.resolve(category, difficulty)?;
        check_pair_supply(&category, &difficulty)?;

        self.discard_session();
        let generation = self.generation.next();
        let rng = self.rng.fork();
        let mut session = Session::new(
            generation,
            player_name,
            &category,
            &difficulty,
            &self.config,
            &rng,
        )?;
        session.start();

        self.generation = generation;
        self.session = Some(session);
        self.last_record = None;
        self.timer
            .start(&mut self.scheduler, generation, self.config.timings.tick_ms);
        self.lifecycle = Lifecycle::Active;

        log::info!(
            "{} started: {} playing {} on {}",
            generation,
            player_name,
            category.key,
            difficulty.key
        );
        self.bus.emit(&GameEvent::Start {
            generation,
            player_name: player_name.to_string(),
            category: category.key,
            difficulty: difficulty.key,
        });
        Ok(generation)
    }

    /// Stop the timer and cancel every task of the current session.
    fn discard_session(&mut self) -> bool {
        self.timer.stop(&mut self.scheduler);
        match self.session.take() {
            Some(old) => {
                let cancelled = self.scheduler.cancel_generation(old.generation());
                log::debug!("discarded {} ({} tasks cancelled)", old.generation(), cancelled);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, task: DueTask) {
        let Some(session) = self
            .session
            .as_mut()
            .filter(|s| s.generation() == task.generation)
        else {
            log::debug!("dropping stale {:?} task from {}", task.kind, task.generation);
            return;
        };

        match task.kind {
            TaskKind::Tick => {
                if session.tick() {
                    log::trace!("{} tick: {}s", task.generation, session.elapsed_seconds());
                    self.timer
                        .rearm(&mut self.scheduler, task.generation, self.config.timings.tick_ms);
                }
            }
            TaskKind::Evaluate => {
                let hints_remaining = session.hints_remaining();
                if let Some(evaluation) = session.evaluate_pending() {
                    self.on_evaluation(task.generation, evaluation, hints_remaining);
                }
            }
            TaskKind::EndHintPreview(cards) => {
                session.end_hint_preview(cards);
            }
        }
    }

    fn on_evaluation(
        &mut self,
        generation: Generation,
        evaluation: Evaluation,
        hints_remaining: u32,
    ) {
        match evaluation {
            Evaluation::Matched {
                cards,
                award,
                streak,
                completion,
            } => {
                self.bus.emit(&GameEvent::Match {
                    generation,
                    cards,
                    award,
                    streak,
                });
                if let Some(completion) = completion {
                    self.finish(generation, completion);
                }
            }
            Evaluation::Mismatched {
                cards,
                wrong_streak,
                suggest_hint,
            } => {
                self.bus.emit(&GameEvent::Wrong {
                    generation,
                    cards,
                    wrong_streak,
                });
                if suggest_hint {
                    self.bus.emit(&GameEvent::SuggestHint {
                        generation,
                        wrong_streak,
                        hints_remaining,
                    });
                }
            }
        }
    }

    /// Freeze the finished session and hand it to the gateway once.
    fn finish(&mut self, generation: Generation, completion: Completion) {
        self.timer.stop(&mut self.scheduler);
        self.scheduler.cancel_generation(generation);
        self.lifecycle = Lifecycle::Completed;

        let Some(snapshot) = self.snapshot() else {
            return;
        };
        log::info!(
            "{} completed: score {} (bonus {}) in {}s, {} moves",
            generation,
            completion.final_score,
            completion.bonus,
            snapshot.elapsed_seconds,
            snapshot.move_count
        );

        let record = GameRecord::from_snapshot(&snapshot, Utc::now());
        self.bus.emit(&GameEvent::Complete { snapshot });

        match self.gateway.append(record.clone()) {
            Ok(()) => {
                log::info!("{} recorded as {}", generation, record.id);
                self.last_record = Some(record);
            }
            Err(e) => {
                log::warn!("{} could not be recorded: {}", generation, e);
                self.bus.emit(&GameEvent::RecordNotSaved {
                    generation,
                    reason: e.to_string(),
                });
            }
        }
    }
}

impl<G, P> std::fmt::Debug for GameController<G, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("lifecycle", &self.lifecycle)
            .field("generation", &self.generation)
            .field("now_ms", &self.scheduler.now_ms())
            .field("listeners", &self.bus.len())
            .finish()
    }
}
