//! Roster application state
//!
//! `RosterApp` is what a front end holds: the active session, the store it
//! persists to, the user's settings and the shuffle RNG. Every operation
//! validates and writes before it touches the session, so a failed call
//! leaves the previous state in place.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::engine::{self, Command, ListBinding, RosterList, Session};
use crate::error::Result;
use crate::persistence::{KeyValueStore, RosterStore};
use crate::settings::Settings;

pub struct RosterApp<S, R = Pcg32> {
    store: RosterStore<S>,
    session: Session,
    settings: Settings,
    rng: R,
}

impl<S: KeyValueStore, R: Rng> RosterApp<S, R> {
    /// Start with an empty session
    pub fn new(store: S, rng: R) -> Self {
        let settings = Settings::load(&store);
        Self {
            store: RosterStore::new(store),
            session: Session::new(),
            settings,
            rng,
        }
    }

    /// Pick up the working list from the last visit.
    ///
    /// If its names match a saved list the session binds to that name.
    /// Unreadable data is logged and dropped.
    pub fn restore(store: S, rng: R) -> Self {
        let mut app = Self::new(store, rng);

        let mut list = app.store.load_current().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable working list: {}", e);
            RosterList::new()
        });
        let repaired = list.normalize();
        if repaired > 0 {
            log::warn!("Repaired {} blank or untrimmed names in the working list", repaired);
        }
        if list.is_empty() {
            return app;
        }

        let binding = match app.store.load_saved() {
            Ok(saved) => saved
                .find_matching(&list)
                .map(|name| ListBinding::Saved(name.to_string()))
                .unwrap_or(ListBinding::Unsaved),
            Err(e) => {
                log::warn!("Could not read saved lists: {}", e);
                ListBinding::Unsaved
            }
        };
        log::info!(
            "Restored {} names ({})",
            list.len(),
            binding.label()
        );
        app.session = Session { list, binding };
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list(&self) -> &RosterList {
        &self.session.list
    }

    pub fn binding(&self) -> &ListBinding {
        &self.session.binding
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &RosterStore<S> {
        &self.store
    }

    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        let settings = settings.sanitized();
        settings.save(self.store.inner_mut())?;
        self.settings = settings;
        Ok(())
    }

    /// Shuffled copy of `names`
    pub fn shuffle(&mut self, names: &[String]) -> Vec<String> {
        engine::shuffle(names, &mut self.rng)
    }

    /// Replace the session with a freshly shuffled, unsaved list
    pub fn ingest(&mut self, raw: &str) -> Result<&RosterList> {
        let list = RosterList::ingest(raw, &mut self.rng)?;
        self.store.save_current(&list)?;
        log::info!("Shuffled {} new names", list.len());
        self.session = Session::unsaved(list);
        Ok(&self.session.list)
    }

    /// Move unchecked names to the front and reshuffle the checked ones
    /// behind them. Returns how many stayed in front.
    pub fn regenerate(&mut self) -> Result<usize> {
        if self.session.list.is_empty() {
            return Ok(0);
        }
        let regenerated = self.session.list.regenerate(&mut self.rng);
        self.store.save_current(&regenerated.list)?;
        log::info!(
            "Regenerated list: {} unanswered at the top",
            regenerated.kept_in_front
        );
        self.session.replace_list(regenerated.list);
        Ok(regenerated.kept_in_front)
    }

    /// Apply a UI command and persist the working list if it changed
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        let mut next = self.session.clone();
        if !next.dispatch(command) {
            return Ok(false);
        }
        self.store.save_current(&next.list)?;
        self.session = next;
        Ok(true)
    }

    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<bool> {
        self.dispatch(Command::SetChecked { index, checked })
    }

    pub fn clear(&mut self) -> Result<()> {
        self.dispatch(Command::Clear).map(|_| ())
    }

    /// Save the active list's names under `name`. Returns the trimmed name.
    pub fn save(&mut self, name: &str) -> Result<String> {
        let mut saved = self.store.load_saved()?;
        let name = saved.insert(name, &self.session.list)?;
        self.store.save_saved(&saved)?;
        log::info!("Saved list \"{}\" ({} names)", name, self.session.list.len());
        self.session.binding = ListBinding::Saved(name.clone());
        Ok(name)
    }

    /// Make the saved list `name` active, all unchecked
    pub fn load(&mut self, name: &str) -> Result<&RosterList> {
        let list = self.store.load_saved()?.get(name)?;
        self.store.save_current(&list)?;
        log::info!("Loaded list \"{}\" ({} names)", name, list.len());
        self.session = Session::bound(list, name);
        Ok(&self.session.list)
    }

    /// Delete a saved list. Deleting the active list empties the session.
    ///
    /// The working list is emptied first and the saved lists written last;
    /// if that last write fails the working list is put back.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let mut saved = self.store.load_saved()?;
        saved.remove(name)?;

        let active = self.session.binding.is_bound_to(name);
        if active {
            self.store.save_current(&RosterList::new())?;
        }
        if let Err(e) = self.store.save_saved(&saved) {
            if active {
                if let Err(restore) = self.store.save_current(&self.session.list) {
                    log::warn!("Could not restore working list: {}", restore);
                }
            }
            return Err(e);
        }
        log::info!("Deleted list \"{}\"", name);

        if active {
            self.session.clear();
        }
        Ok(())
    }

    /// Saved list names, sorted
    pub fn saved_list_names(&self) -> Result<Vec<String>> {
        Ok(self.store.load_saved()?.names().map(str::to_string).collect())
    }

    /// Independently shuffled, fixed-width copies of the active list
    pub fn print_segments(&mut self) -> Result<Vec<Vec<String>>> {
        let layout = self.settings.print_layout();
        Ok(engine::generate_segments_with(
            &self.session.list,
            &layout,
            &mut self.rng,
        )?)
    }
}
