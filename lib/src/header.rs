// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 40-pin connector of the Raspberry Pi board family.
//!
//! Only the pins that carry a general purpose BCM pin, 2 through 27, have an alias.
//! Physical pins 27 and 28 carry the ID EEPROM bus and are not aliased, nor are
//! the power and ground pins.

use crate::PinId;

/// The physical pin number on the connector, counting from 1.
pub type Physical = u8;

/// Physical pin 3, BCM 2 (SDA).
pub const PIN_3: PinId = 2;
/// Physical pin 5, BCM 3 (SCL).
pub const PIN_5: PinId = 3;
/// Physical pin 7, BCM 4.
pub const PIN_7: PinId = 4;
/// Physical pin 8, BCM 14 (TXD).
pub const PIN_8: PinId = 14;
/// Physical pin 10, BCM 15 (RXD).
pub const PIN_10: PinId = 15;
/// Physical pin 11, BCM 17.
pub const PIN_11: PinId = 17;
/// Physical pin 12, BCM 18.
pub const PIN_12: PinId = 18;
/// Physical pin 13, BCM 27.
pub const PIN_13: PinId = 27;
/// Physical pin 15, BCM 22.
pub const PIN_15: PinId = 22;
/// Physical pin 16, BCM 23.
pub const PIN_16: PinId = 23;
/// Physical pin 18, BCM 24.
pub const PIN_18: PinId = 24;
/// Physical pin 19, BCM 10 (MOSI).
pub const PIN_19: PinId = 10;
/// Physical pin 21, BCM 9 (MISO).
pub const PIN_21: PinId = 9;
/// Physical pin 22, BCM 25.
pub const PIN_22: PinId = 25;
/// Physical pin 23, BCM 11 (SCLK).
pub const PIN_23: PinId = 11;
/// Physical pin 24, BCM 8 (CE0).
pub const PIN_24: PinId = 8;
/// Physical pin 26, BCM 7 (CE1).
pub const PIN_26: PinId = 7;
/// Physical pin 29, BCM 5.
pub const PIN_29: PinId = 5;
/// Physical pin 31, BCM 6.
pub const PIN_31: PinId = 6;
/// Physical pin 32, BCM 12.
pub const PIN_32: PinId = 12;
/// Physical pin 33, BCM 13.
pub const PIN_33: PinId = 13;
/// Physical pin 35, BCM 19.
pub const PIN_35: PinId = 19;
/// Physical pin 36, BCM 16.
pub const PIN_36: PinId = 16;
/// Physical pin 37, BCM 26.
pub const PIN_37: PinId = 26;
/// Physical pin 38, BCM 20.
pub const PIN_38: PinId = 20;
/// Physical pin 40, BCM 21.
pub const PIN_40: PinId = 21;

/// Every aliased pin, as (physical, BCM) pairs in connector order.
pub const PINS: [(Physical, PinId); 26] = [
    (3, PIN_3),
    (5, PIN_5),
    (7, PIN_7),
    (8, PIN_8),
    (10, PIN_10),
    (11, PIN_11),
    (12, PIN_12),
    (13, PIN_13),
    (15, PIN_15),
    (16, PIN_16),
    (18, PIN_18),
    (19, PIN_19),
    (21, PIN_21),
    (22, PIN_22),
    (23, PIN_23),
    (24, PIN_24),
    (26, PIN_26),
    (29, PIN_29),
    (31, PIN_31),
    (32, PIN_32),
    (33, PIN_33),
    (35, PIN_35),
    (36, PIN_36),
    (37, PIN_37),
    (38, PIN_38),
    (40, PIN_40),
];

/// The BCM pin carried by a physical pin, if any.
pub fn bcm(physical: Physical) -> Option<PinId> {
    PINS.iter()
        .find(|(p, _)| *p == physical)
        .map(|(_, id)| *id)
}

/// The physical pin carrying a BCM pin, if any.
pub fn physical(id: PinId) -> Option<Physical> {
    PINS.iter().find(|(_, b)| *b == id).map(|(p, _)| *p)
}
