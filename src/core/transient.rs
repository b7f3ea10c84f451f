//! Short-lived DOM decorations for touch bursts.
//!
//! Every decoration is an entity with a spawn time and a fixed lifetime;
//! the owner calls [`Transients::sweep`] once per tick and removes whatever
//! it returns from the page.

use super::color::{Rgba, GREEN, LIME, PALETTE};
use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransientId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransientKind {
    OuterRing { size: f32, border: Rgba },
    InnerRing { size: f32 },
    Flash,
    Particle { offset: Vec2, color: Rgba },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transient {
    pub id: TransientId,
    pub kind: TransientKind,
    pub pos: Vec2,
    pub spawned_at: Duration,
    pub lifetime: Duration,
}

impl Transient {
    pub fn expires_at(&self) -> Duration {
        self.spawned_at + self.lifetime
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at()
    }

    /// CSS class the page stylesheet animates, if any.
    pub fn class_name(&self) -> Option<&'static str> {
        match self.kind {
            TransientKind::OuterRing { .. } | TransientKind::InnerRing { .. } => Some("tap-ripple"),
            TransientKind::Flash => Some("tap-flash"),
            TransientKind::Particle { .. } => None,
        }
    }

    /// Inline style for the element.
    pub fn css(&self) -> String {
        let (x, y) = (self.pos.x, self.pos.y);
        match self.kind {
            TransientKind::OuterRing { size, border } => format!(
                "left:{x}px;top:{y}px;width:{size}px;height:{size}px;\
                 border:1.5px solid {border};\
                 box-shadow:0 0 12px {GREEN},inset 0 0 8px rgba(127,255,95,0.08);"
            ),
            TransientKind::InnerRing { size } => format!(
                "left:{x}px;top:{y}px;width:{size}px;height:{size}px;\
                 border:1px solid {LIME};animation-delay:{}ms;box-shadow:0 0 8px {LIME};",
                BURST_INNER_DELAY_MS
            ),
            TransientKind::Flash => format!(
                "left:{x}px;top:{y}px;width:{s}px;height:{s}px;\
                 background:radial-gradient(circle,rgba(127,255,95,0.35) 0%,\
                 rgba(127,255,95,0.1) 50%,transparent 100%);",
                s = BURST_FLASH_SIZE
            ),
            TransientKind::Particle { offset, color } => format!(
                "position:fixed;width:{s}px;height:{s}px;background:{color};\
                 pointer-events:none;z-index:9998;left:{x}px;top:{y}px;\
                 transform:translate(-50%,-50%);box-shadow:0 0 4px {color};\
                 animation:pixelBurst {}ms ease-out forwards;\
                 --tx:{}px;--ty:{}px;image-rendering:pixelated;",
                BURST_ANIMATION_MS,
                offset.x,
                offset.y,
                s = BURST_PARTICLE_SIZE
            ),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Transients {
    next_id: u64,
    live: Vec<Transient>,
}

impl Transients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transient> {
        self.live.iter()
    }

    fn spawn(&mut self, kind: TransientKind, pos: Vec2, now: Duration, lifetime_ms: u64) {
        let id = TransientId(self.next_id);
        self.next_id += 1;
        self.live.push(Transient {
            id,
            kind,
            pos,
            spawned_at: now,
            lifetime: Duration::from_millis(lifetime_ms),
        });
    }

    /// Spawn the rings, flash and particle burst for one touch point and
    /// return the newly created entities.
    pub fn spawn_burst<R: Rng + ?Sized>(&mut self, pos: Vec2, now: Duration, rng: &mut R) -> &[Transient] {
        let first = self.live.len();
        let size = BURST_RING_MIN + rng.gen::<f32>() * BURST_RING_SPAN;
        let border = PALETTE[rng.gen_range(0..PALETTE.len())];
        self.spawn(TransientKind::OuterRing { size, border }, pos, now, BURST_RING_LIFETIME_MS);
        self.spawn(
            TransientKind::InnerRing {
                size: size * BURST_INNER_FRACTION,
            },
            pos,
            now,
            BURST_RING_LIFETIME_MS,
        );
        self.spawn(TransientKind::Flash, pos, now, BURST_RING_LIFETIME_MS);
        for i in 0..BURST_PARTICLES {
            let angle = (i as f32 / BURST_PARTICLES as f32) * TAU;
            let dist = BURST_DISTANCE_MIN + rng.gen::<f32>() * BURST_DISTANCE_SPAN;
            self.spawn(
                TransientKind::Particle {
                    offset: Vec2::new(angle.cos(), angle.sin()) * dist,
                    color: PALETTE[i % PALETTE.len()],
                },
                pos,
                now,
                BURST_PARTICLE_LIFETIME_MS,
            );
        }
        &self.live[first..]
    }

    /// Remove every entity whose lifetime has elapsed and return their ids.
    pub fn sweep(&mut self, now: Duration) -> Vec<TransientId> {
        let mut expired = Vec::new();
        self.live.retain(|t| {
            if t.is_expired(now) {
                expired.push(t.id);
                false
            } else {
                true
            }
        });
        expired
    }
}
