//! Timed blessings granted by stepping on relics. Four independent
//! countdowns; picking up a relic refreshes its counter to the full
//! duration, it never stacks.

use crate::types::ItemKind;

pub const EFFECT_DURATION: u8 = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectState {
    sword: u8,
    shield: u8,
    hammer: u8,
    fog_of_war: u8,
}

impl EffectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self, kind: ItemKind) -> u8 {
        match kind {
            ItemKind::Sword => self.sword,
            ItemKind::Shield => self.shield,
            ItemKind::Hammer => self.hammer,
            ItemKind::FogOfWar => self.fog_of_war,
        }
    }

    pub fn is_active(&self, kind: ItemKind) -> bool {
        self.counter(kind) > 0
    }

    pub fn refresh(&mut self, kind: ItemKind) {
        *self.slot(kind) = EFFECT_DURATION;
    }

    /// One decay step: every running counter loses exactly one move.
    pub fn decay(&mut self) {
        for kind in [ItemKind::Sword, ItemKind::Shield, ItemKind::Hammer, ItemKind::FogOfWar] {
            let slot = self.slot(kind);
            *slot = slot.saturating_sub(1);
        }
    }

    fn slot(&mut self, kind: ItemKind) -> &mut u8 {
        match kind {
            ItemKind::Sword => &mut self.sword,
            ItemKind::Shield => &mut self.shield,
            ItemKind::Hammer => &mut self.hammer,
            ItemKind::FogOfWar => &mut self.fog_of_war,
        }
    }
}
