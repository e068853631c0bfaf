//! Behaviors - per-category physics rules
//!
//! Each category gets at most one rule. The registry is a table indexed by
//! `Category::index()`, built once when the world is created; a category without an
//! entry has no rule and its particles stay where they are.

mod inert;
mod sand;

pub use inert::InertBehavior;
pub use sand::SandBehavior;

use crate::core::utils::random::SimRng;
use crate::domain::elements::Category;
use crate::spatial::grid::{Grid, ParticleHandle};

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub handle: ParticleHandle,
    pub rng: &'a mut SimRng,
    pub jitter: bool,
    /// Incremented once per successful move.
    pub moved: &'a mut u32,
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    rules: [Option<Box<dyn Behavior>>; Category::COUNT],
}

impl BehaviorRegistry {
    /// Sand falls and piles; solids, liquids, gases and electronics are inert for now.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Category::Sand, SandBehavior::new());
        for category in [Category::Solid, Category::Liquid, Category::Gas, Category::Electronics] {
            registry.register(category, InertBehavior);
        }
        registry
    }

    /// A registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: std::array::from_fn(|_| None),
        }
    }

    /// Install (or replace) the rule for `category`.
    pub fn register(&mut self, category: Category, behavior: impl Behavior + 'static) {
        self.rules[category.index()] = Some(Box::new(behavior));
    }

    #[inline]
    pub fn has_rule(&self, category: Category) -> bool {
        self.rules[category.index()].is_some()
    }

    /// Dispatch update to the rule for `category`. `false` when there is none.
    pub fn update(&self, category: Category, ctx: &mut UpdateContext) -> bool {
        match &self.rules[category.index()] {
            Some(rule) => {
                rule.update(ctx);
                true
            }
            None => false,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
