//! The control byte leading every drawing order.

use bitflags::bitflags;

bitflags! {
    /// 2.2.2.2.1 controlFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ControlFlags: u8 {
        const STANDARD = 0x01;
        const SECONDARY = 0x02;
        const BOUNDS = 0x04;
        const TYPE_CHANGE = 0x08;
        const DELTA_COORDS = 0x10;
        const ZERO_BOUNDS_DELTAS = 0x20;
        const ZERO_FIELD_BYTE_BIT0 = 0x40;
        const ZERO_FIELD_BYTE_BIT1 = 0x80;
    }
}

/// The three wire-format classes of a drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderClass {
    Primary,
    Secondary,
    AlternateSecondary,
}

impl ControlFlags {
    /// Classifies an order from its control byte: a clear STANDARD bit
    /// selects the alternate secondary class and the SECONDARY bit then
    /// splits standard orders between the secondary and primary classes.
    pub fn class(self) -> OrderClass {
        if !self.contains(ControlFlags::STANDARD) {
            OrderClass::AlternateSecondary
        } else if self.contains(ControlFlags::SECONDARY) {
            OrderClass::Secondary
        } else {
            OrderClass::Primary
        }
    }

    /// The alternate secondary order type carried in the upper six bits of
    /// the control byte.
    pub fn altsec_order_type(self) -> u8 {
        self.bits() >> 2
    }
}
