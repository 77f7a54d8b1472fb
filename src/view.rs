//! Read-only handle on an opponent's grid.
//!
//! A [`SeaView`] lets its holder attack the grid and observe shot results,
//! but never exposes the [`SeaGrid`] itself, so ship identities and unshot
//! positions stay hidden.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::attack::AttackResult;
use crate::common::GridError;
use crate::grid::{SeaGrid, TileView};

#[derive(Clone)]
pub struct SeaView {
    grid: Rc<RefCell<SeaGrid>>,
}

impl SeaView {
    pub(crate) fn new(grid: Rc<RefCell<SeaGrid>>) -> Self {
        Self { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.borrow().width()
    }

    pub fn height(&self) -> usize {
        self.grid.borrow().height()
    }

    /// True if (`row`, `col`) lies on the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.grid.borrow().contains(row, col)
    }

    /// What an attacker can see: unshot ships read as open sea.
    pub fn tile(&self, row: usize, col: usize) -> Result<TileView, GridError> {
        match self.grid.borrow().tile(row, col)? {
            TileView::Ship => Ok(TileView::Sea),
            view => Ok(view),
        }
    }

    /// Attack the underlying grid.
    pub fn hit_tile(&self, row: usize, col: usize) -> Result<AttackResult, GridError> {
        self.grid.borrow_mut().hit_tile(row, col)
    }

    /// Forward a change listener to the underlying grid.
    pub fn on_changed<F>(&self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.grid.borrow_mut().on_changed(listener);
    }

    /// True if both views observe the same grid.
    pub fn same_grid(&self, other: &SeaView) -> bool {
        Rc::ptr_eq(&self.grid, &other.grid)
    }
}

impl fmt::Debug for SeaView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeaView")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
