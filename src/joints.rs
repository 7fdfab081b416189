/// Joint table for the Sesame leg rig.
///
/// The rig has 8 servos, four per side. Labels and firmware channel numbers
/// match the firmware sketch's ServoName enum, so generated code can pass the
/// label straight through to setServoAngle().

use std::fmt;

/// One of the 8 named servo joints. Declared in firmware channel order
/// (R1=0 .. L4=7) so the discriminant doubles as the channel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    R1 = 0,
    R2 = 1,
    L1 = 2,
    L2 = 3,
    R4 = 4,
    R3 = 5,
    L3 = 6,
    L4 = 7,
}

impl Joint {
    /// All joints in firmware channel order.
    pub const ALL: [Joint; 8] = [
        Joint::R1,
        Joint::R2,
        Joint::L1,
        Joint::L2,
        Joint::R4,
        Joint::R3,
        Joint::L3,
        Joint::L4,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Joint::R1 => "R1",
            Joint::R2 => "R2",
            Joint::L1 => "L1",
            Joint::L2 => "L2",
            Joint::R4 => "R4",
            Joint::R3 => "R3",
            Joint::L3 => "L3",
            Joint::L4 => "L4",
        }
    }

    /// PWM channel on the servo driver board.
    pub fn channel(&self) -> usize {
        *self as usize
    }

    /// Inclusive valid angle range in degrees. The hip servos closest to the
    /// body ({R1,L2} and {R2,L1}) are mechanically limited; the outer leg
    /// servos get the full sweep.
    pub fn range(&self) -> (i32, i32) {
        match self {
            Joint::R1 | Joint::L2 => (45, 180),
            Joint::R2 | Joint::L1 => (0, 135),
            _ => (0, 180),
        }
    }

    /// Display color for this joint's widgets, keyed by channel to match the
    /// wire colors on the physical rig. Cosmetic only.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self.channel() {
            0 => (255, 255, 255), // R1 white
            1 => (255, 105, 180), // R2 pink
            2 => (147, 112, 219), // L1 purple
            3 => (255, 38, 0),    // L2 red
            4 => (0, 206, 209),   // R4 cyan
            5 => (255, 165, 0),   // R3 orange
            6 => (50, 205, 50),   // L3 green
            _ => (255, 242, 59),  // L4 yellow
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation batches for frame generation, in checking/emission order.
/// Each batch shares one range and is emitted as one line of generated code.
/// Order matters: the first failing joint in this order is the one reported.
pub const VALIDATION_BATCHES: [&[Joint]; 3] = [
    &[Joint::R1, Joint::L2],
    &[Joint::R2, Joint::L1],
    &[Joint::R3, Joint::R4, Joint::L3, Joint::L4],
];
