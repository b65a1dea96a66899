use std::collections::BTreeMap;

use foundation::time::Time;

/// Cubic ease-in below the midpoint, cubic ease-out above it.
///
/// `ease(0) = 0`, `ease(0.5) = 0.5`, `ease(1) = 1`; monotone on [0, 1].
pub fn ease(p: f64) -> f64 {
    if p <= 0.5 {
        return 4.0 * p * p * p;
    }
    let q = 1.0 - p;
    1.0 - 4.0 * q * q * q
}

#[derive(Debug, Clone, PartialEq)]
struct Entry<T> {
    duration_ms: f64,
    delay_ms: f64,
    /// Recorded on the first tick after registration, not at `start`.
    started_at: Option<Time>,
    payload: T,
}

/// One progress report delivered by `Animations::tick`.
#[derive(Debug, PartialEq)]
pub struct Sample<'a, T> {
    pub name: &'a str,
    pub payload: &'a T,
    /// Eased progress in [0, 1].
    pub eased: f64,
    /// True on the entry's final sample; it is deregistered after the sweep.
    pub finished: bool,
}

/// Named, data-driven animations.
///
/// Each entry carries a plain payload describing what it drives; the owner
/// applies samples, so the scheduler holds no closures and captures no
/// environment. Starting a name that is already registered silently replaces
/// the previous entry, dropping its pending completion.
///
/// Ordering contract: entries are sampled in name order each tick.
#[derive(Debug)]
pub struct Animations<T> {
    entries: BTreeMap<String, Entry<T>>,
}

impl<T> Default for Animations<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> Animations<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the animation under `name`.
    ///
    /// The clock starts on the first subsequent tick; `delay_ms` then holds
    /// the entry silent before progress begins. A zero duration completes on
    /// its first active tick.
    pub fn start(&mut self, name: impl Into<String>, duration_ms: f64, delay_ms: f64, payload: T) {
        self.entries.insert(
            name.into(),
            Entry {
                duration_ms: duration_ms.max(0.0),
                delay_ms: delay_ms.max(0.0),
                started_at: None,
                payload,
            },
        );
    }

    /// Remove an entry without delivering a final sample.
    pub fn cancel(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Mutable access to an in-flight payload, e.g. to retarget it without
    /// disturbing its timing.
    pub fn payload_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name).map(|entry| &mut entry.payload)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every entry to `now`, delivering at most one sample each.
    ///
    /// Entries still inside their delay window deliver nothing. Finished
    /// entries are deregistered after the sweep.
    pub fn tick<F>(&mut self, now: Time, mut sink: F)
    where
        F: FnMut(Sample<'_, T>),
    {
        let mut finished: Vec<String> = Vec::new();
        for (name, entry) in self.entries.iter_mut() {
            let started = *entry.started_at.get_or_insert(now);
            let mut dt = now.since(started);
            if dt < entry.delay_ms {
                continue;
            }
            dt -= entry.delay_ms;

            let progress = if entry.duration_ms == 0.0 {
                1.0
            } else {
                (dt / entry.duration_ms).min(1.0)
            };
            sink(Sample {
                name,
                payload: &entry.payload,
                eased: ease(progress),
                finished: progress >= 1.0,
            });
            if progress >= 1.0 {
                finished.push(name.clone());
            }
        }
        for name in finished {
            self.entries.remove(&name);
        }
    }
}
