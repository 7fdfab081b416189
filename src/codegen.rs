/// Frame generator / validator.
///
/// Turns the raw angle and delay entry fields into one block of firmware
/// source text (setServoAngle/delay calls). Fields arrive as free-form
/// strings straight from the GUI, so everything is parse-then-validate here;
/// the GUI itself does no checking.

use crate::joints::{Joint, VALIDATION_BATCHES};
use std::fmt;

/// The raw angle entry fields, one free-form string per joint, indexed by
/// firmware channel. The GUI binds its text widgets to these directly.
#[derive(Debug, Clone)]
pub struct AngleFields {
    values: [String; 8],
}

impl AngleFields {
    /// All fields preset to the same angle (normally 90, the rig's neutral).
    pub fn with_default(angle: i32) -> Self {
        Self {
            values: std::array::from_fn(|_| angle.to_string()),
        }
    }

    pub fn get(&self, joint: Joint) -> &str {
        &self.values[joint.channel()]
    }

    pub fn set(&mut self, joint: Joint, value: impl Into<String>) {
        self.values[joint.channel()] = value.into();
    }

    /// Mutable access for widget binding (egui TextEdit wants &mut String).
    pub fn field_mut(&mut self, joint: Joint) -> &mut String {
        &mut self.values[joint.channel()]
    }
}

/// Why a frame could not be generated. Every variant is a user-correctable
/// input error; the caller leaves the code buffer untouched and lets the
/// user edit and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    DelayNotNumeric,
    AngleNotNumeric { joint: Joint },
    AngleOutOfRange { joint: Joint },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FrameError::DelayNotNumeric => write!(f, "Delay must be a number"),
            // Both angle failures render the same dialog text the original
            // tool used, so the user sees the joint and its valid range.
            FrameError::AngleNotNumeric { joint } | FrameError::AngleOutOfRange { joint } => {
                let (min, max) = joint.range();
                write!(f, "Invalid angle for servo {}, range is {}-{}", joint, min, max)
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// Generate one frame block from the current field contents.
///
/// Validation order is fixed: delay first, then the three joint batches of
/// `VALIDATION_BATCHES` left to right, stopping at the first failure. The
/// returned block is complete or nothing; the caller appends it atomically.
pub fn generate_frame(fields: &AngleFields, delay_field: &str) -> Result<String, FrameError> {
    let delay: i32 = delay_field
        .trim()
        .parse()
        .map_err(|_| FrameError::DelayNotNumeric)?;

    let mut block = String::from("// Frame\n");
    for (batch_idx, batch) in VALIDATION_BATCHES.iter().enumerate() {
        for &joint in *batch {
            let angle: i32 = fields
                .get(joint)
                .trim()
                .parse()
                .map_err(|_| FrameError::AngleNotNumeric { joint })?;
            let (min, max) = joint.range();
            if angle < min || angle > max {
                return Err(FrameError::AngleOutOfRange { joint });
            }
            block.push_str(&format!("setServoAngle({}, {}); ", joint.label(), angle));
        }
        block.push('\n');
        // Blank line after the second and third batches, per the sketch
        // formatting the firmware examples use.
        if batch_idx > 0 {
            block.push('\n');
        }
    }
    block.push_str(&format!("delay({});\n\n", delay));
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_fields() -> AngleFields {
        AngleFields::with_default(90)
    }

    const NEUTRAL_BLOCK: &str = "// Frame\n\
        setServoAngle(R1, 90); setServoAngle(L2, 90); \n\
        setServoAngle(R2, 90); setServoAngle(L1, 90); \n\
        \n\
        setServoAngle(R3, 90); setServoAngle(R4, 90); setServoAngle(L3, 90); setServoAngle(L4, 90); \n\
        \n\
        delay(200);\n\n";

    #[test]
    fn test_neutral_pose_block_is_exact() {
        let block = generate_frame(&neutral_fields(), "200").unwrap();
        assert_eq!(block, NEUTRAL_BLOCK);
    }

    #[test]
    fn test_non_numeric_delay_fails() {
        for bad in ["abc", "", "12.5", "200ms"] {
            let err = generate_frame(&neutral_fields(), bad).unwrap_err();
            assert_eq!(err, FrameError::DelayNotNumeric, "delay field {:?}", bad);
        }
    }

    #[test]
    fn test_delay_checked_before_joints() {
        // A bad joint must not be reported while the delay is invalid.
        let mut fields = neutral_fields();
        fields.set(Joint::R1, "999");
        let err = generate_frame(&fields, "abc").unwrap_err();
        assert_eq!(err, FrameError::DelayNotNumeric);
    }

    #[test]
    fn test_bounds_inclusive_per_joint() {
        for joint in Joint::ALL {
            let (min, max) = joint.range();
            for ok in [min, max] {
                let mut fields = neutral_fields();
                fields.set(joint, ok.to_string());
                assert!(
                    generate_frame(&fields, "200").is_ok(),
                    "{} at {} should be accepted",
                    joint,
                    ok
                );
            }
            for bad in [min - 1, max + 1] {
                let mut fields = neutral_fields();
                fields.set(joint, bad.to_string());
                let err = generate_frame(&fields, "200").unwrap_err();
                assert_eq!(
                    err,
                    FrameError::AngleOutOfRange { joint },
                    "{} at {} should be rejected",
                    joint,
                    bad
                );
            }
        }
    }

    #[test]
    fn test_non_numeric_angle_names_the_joint() {
        let mut fields = neutral_fields();
        fields.set(Joint::R3, "x");
        let err = generate_frame(&fields, "200").unwrap_err();
        assert_eq!(err, FrameError::AngleNotNumeric { joint: Joint::R3 });
    }

    #[test]
    fn test_first_failure_wins() {
        // R1 is checked first; later bad fields must not be reported.
        let mut fields = neutral_fields();
        fields.set(Joint::R1, "44");
        fields.set(Joint::L1, "999");
        fields.set(Joint::L4, "nope");
        let err = generate_frame(&fields, "200").unwrap_err();
        assert_eq!(err, FrameError::AngleOutOfRange { joint: Joint::R1 });
    }

    #[test]
    fn test_batch_order_r2_before_l1() {
        let mut fields = neutral_fields();
        fields.set(Joint::R2, "150");
        fields.set(Joint::L1, "150");
        let err = generate_frame(&fields, "200").unwrap_err();
        assert_eq!(err, FrameError::AngleOutOfRange { joint: Joint::R2 });
    }

    #[test]
    fn test_whitespace_around_numbers_is_accepted() {
        let mut fields = neutral_fields();
        fields.set(Joint::L3, " 120 ");
        let block = generate_frame(&fields, " 200 ").unwrap();
        assert!(block.contains("setServoAngle(L3, 120); "));
        assert!(block.contains("delay(200);"));
    }

    #[test]
    fn test_out_of_range_error_text_names_joint_and_range() {
        let mut fields = neutral_fields();
        fields.set(Joint::R1, "200");
        let err = generate_frame(&fields, "200").unwrap_err();
        assert_eq!(err.to_string(), "Invalid angle for servo R1, range is 45-180");
    }
}
