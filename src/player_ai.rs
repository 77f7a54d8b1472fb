use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::grid::TileView;
use crate::player::Targeting;
use crate::view::SeaView;

/// Computer opponent: shoots a uniformly random tile it has not shot yet.
#[derive(Debug, Default)]
pub struct AiTargeting;

impl AiTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for AiTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &SeaView) -> Option<(usize, usize)> {
        let mut open = Vec::new();
        for r in 0..enemy.height() {
            for c in 0..enemy.width() {
                if enemy.tile(r, c).ok() == Some(TileView::Sea) {
                    open.push((r, c));
                }
            }
        }
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }
}
