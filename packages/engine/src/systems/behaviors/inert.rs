use super::{Behavior, UpdateContext};

/// Placeholder rule: the particle is dispatched but never moves.
pub struct InertBehavior;

impl Behavior for InertBehavior {
    #[inline]
    fn update(&self, _ctx: &mut UpdateContext) {}
}
