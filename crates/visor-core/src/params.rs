//! Reactive parameter store driving the scene builder and the control panel.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::color::ColorSpec;
use crate::constants::{
    DEFAULT_COLORS, DEFAULT_ROTATE_Y, DEFAULT_SCALE, DEFAULT_SPACING, DEFAULT_SPHERE_SIZE,
};

#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f32),
    Bool(bool),
    Color(ColorSpec),
}

/// Immutable view of the full parameter set, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamSnapshot {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSnapshot {
    pub fn entries(&self) -> &[(String, ParamValue)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn number(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Color in packed `0xRRGGBB` form regardless of how it was supplied.
    pub fn color(&self, key: &str) -> Option<u32> {
        match self.get(key)? {
            ParamValue::Color(c) => Some(c.packed()),
            _ => None,
        }
    }
}

type Listener = Box<dyn FnMut(&ParamSnapshot)>;

/// Ordered key/value store with a fixed key set and synchronous
/// full-snapshot change notifications. Listeners always receive the complete
/// set, never a diff; the set is small and bounded so granularity is not
/// worth the bookkeeping.
pub struct ParamStore {
    snapshot: ParamSnapshot,
    index: FnvHashMap<String, usize>,
    listeners: SmallVec<[Listener; 2]>,
}

impl ParamStore {
    /// Declare the key set. Keys are fixed for the store's lifetime.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ParamValue)>,
    {
        let entries: Vec<(String, ParamValue)> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
        Self {
            snapshot: ParamSnapshot { entries },
            index,
            listeners: SmallVec::new(),
        }
    }

    /// Register a listener; it is called synchronously after every [`set`]
    /// with the resulting full parameter set.
    ///
    /// [`set`]: ParamStore::set
    pub fn subscribe(&mut self, listener: impl FnMut(&ParamSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Merge `updates` into the current values, then notify every listener
    /// exactly once before returning. Keys not declared at construction are
    /// ignored.
    pub fn set(&mut self, updates: &[(&str, ParamValue)]) {
        for (key, value) in updates {
            match self.index.get(*key) {
                Some(&i) => self.snapshot.entries[i].1 = value.clone(),
                None => log::warn!("ignoring update for unknown param {key:?}"),
            }
        }
        let snapshot = self.snapshot.clone();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        self.snapshot.clone()
    }
}

/// Parameter set for the interactive sphere scene, matching
/// [`default_controls`](crate::controls::default_controls).
pub fn default_params() -> ParamStore {
    ParamStore::new([
        ("rotateX", ParamValue::Number(0.0)),
        ("rotateY", ParamValue::Number(DEFAULT_ROTATE_Y)),
        ("rotateZ", ParamValue::Number(0.0)),
        ("scale", ParamValue::Number(DEFAULT_SCALE)),
        ("spacing", ParamValue::Number(DEFAULT_SPACING)),
        ("sphereSize", ParamValue::Number(DEFAULT_SPHERE_SIZE)),
        ("color1", ParamValue::Color(ColorSpec::Packed(DEFAULT_COLORS[0]))),
        ("color2", ParamValue::Color(ColorSpec::Packed(DEFAULT_COLORS[1]))),
        ("color3", ParamValue::Color(ColorSpec::Packed(DEFAULT_COLORS[2]))),
        ("color4", ParamValue::Color(ColorSpec::Packed(DEFAULT_COLORS[3]))),
        ("wireframe", ParamValue::Bool(false)),
    ])
}
