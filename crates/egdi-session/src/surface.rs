//! Drawing surface bookkeeping.
//!
//! The decoder tracks surface identity and dimensions only; pixel storage
//! belongs to the consumer. The primary screen surface always exists under
//! its reserved id and is the initial drawing target.

use std::collections::HashMap;

use egdi_pdu::altsec::SCREEN_SURFACE_ID;

use crate::{SessionError, SessionResult};

/// A drawing surface known to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub id: u16,
    pub width: u16,
    pub height: u16,
}

/// All surfaces of a session plus the currently selected drawing target.
#[derive(Debug, Clone)]
pub struct SurfaceTable {
    surfaces: HashMap<u16, Surface>,
    active: u16,
}

impl SurfaceTable {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        let screen = Surface {
            id: SCREEN_SURFACE_ID,
            width: screen_width,
            height: screen_height,
        };

        Self {
            surfaces: HashMap::from([(SCREEN_SURFACE_ID, screen)]),
            active: SCREEN_SURFACE_ID,
        }
    }

    /// Registers an offscreen surface; re-creating an existing id replaces
    /// its dimensions.
    pub fn create(&mut self, id: u16, width: u16, height: u16) {
        self.surfaces.insert(id, Surface { id, width, height });
    }

    /// Removes a surface; the screen surface cannot be deleted. Returns
    /// whether a surface was removed. Deleting the active surface falls
    /// back to the screen.
    pub fn delete(&mut self, id: u16) -> bool {
        if id == SCREEN_SURFACE_ID {
            return false;
        }

        let removed = self.surfaces.remove(&id).is_some();
        if removed && self.active == id {
            self.active = SCREEN_SURFACE_ID;
        }

        removed
    }

    /// Selects the drawing target for subsequent orders. An id with no
    /// matching create order signals a desynchronized stream.
    pub fn switch(&mut self, id: u16) -> SessionResult<()> {
        if !self.surfaces.contains_key(&id) {
            return Err(SessionError::UnknownSurface { surface_id: id });
        }

        self.active = id;
        Ok(())
    }

    pub fn contains(&self, id: u16) -> bool {
        self.surfaces.contains_key(&id)
    }

    pub fn get(&self, id: u16) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    pub fn active_id(&self) -> u16 {
        self.active
    }

    pub fn active(&self) -> &Surface {
        self.surfaces.get(&self.active).unwrap_or_else(|| {
            // The active id always points at a live surface: deleting the
            // active surface falls back to the screen, which is never
            // removed.
            unreachable!("active surface exists")
        })
    }
}
