//! Days, exercises and the synchronized registry that holds them.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// Signature every exercise implementation follows.
///
/// Implementations log through the `log` facade rather than receiving a logger.
pub type ExerciseImplementation = fn(&mut dyn Read) -> anyhow::Result<serde_json::Value>;

/// One exercise: an explanation and the code that solves it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exercise {
    pub notes: String,
    #[serde(skip)]
    pub implementation: Option<ExerciseImplementation>,
}

impl Exercise {
    pub fn new(notes: impl Into<String>, implementation: ExerciseImplementation) -> Self {
        Self {
            notes: notes.into(),
            implementation: Some(implementation),
        }
    }

    /// An exercise that only carries notes.
    pub fn notes_only(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            implementation: None,
        }
    }

    /// Runs the implementation against `input`.
    pub fn run(&self, name: &str, input: &mut dyn Read) -> Result<serde_json::Value, RegistryError> {
        let implementation = self
            .implementation
            .ok_or_else(|| RegistryError::NotImplemented(name.to_string()))?;
        implementation(input).map_err(|source| RegistryError::Failed {
            name: name.to_string(),
            source,
        })
    }
}

/// An input plus the exercises that use it.
///
/// Serialized with the exercises inline next to `input`:
///
/// ```json
/// { "input": "inputs/day01.txt", "part1": { "notes": "..." } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Day {
    pub input: String,
    #[serde(flatten)]
    pub exercises: BTreeMap<String, Exercise>,
}

impl Day {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            exercises: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) an exercise.
    pub fn exercise(mut self, name: impl Into<String>, exercise: Exercise) -> Self {
        self.exercises.insert(name.into(), exercise);
        self
    }
}

/// A synchronized collection of days, keyed by name.
///
/// Each name may be registered once. Lookups take a read lock and return a
/// clone, so callers never hold the lock while running an exercise.
#[derive(Debug, Default)]
pub struct Registry {
    days: RwLock<HashMap<String, Day>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `day` under `name`, refusing to replace an existing entry.
    pub fn register(&self, name: impl Into<String>, day: Day) -> Result<(), RegistryError> {
        let name = name.into();
        let mut days = self.days.write().unwrap_or_else(PoisonError::into_inner);

        if days.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }

        log::trace!("registering {} with {} exercise(s)", name, day.exercises.len());
        days.insert(name, day);
        Ok(())
    }

    /// Returns a copy of the day registered under `name`.
    pub fn get_day(&self, name: &str) -> Result<Day, RegistryError> {
        let days = self.days.read().unwrap_or_else(PoisonError::into_inner);
        days.get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Looks up `day`/`exercise` and runs it against `input`.
    pub fn run(
        &self,
        day: &str,
        exercise: &str,
        input: &mut dyn Read,
    ) -> Result<serde_json::Value, RegistryError> {
        let found = self.get_day(day)?;
        let name = format!("{}/{}", day, exercise);
        let entry = found
            .exercises
            .get(exercise)
            .ok_or_else(|| RegistryError::NotFound(name.clone()))?;

        log::debug!("running {}", name);
        entry.run(&name, input)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let days = self.days.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = days.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.days.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
