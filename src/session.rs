/// Editing session state: the live entry fields plus the accumulated code.
///
/// The GUI owns one Session and routes every button press through it, so all
/// validation and buffer mutation happens here and the view layer stays dumb.

use crate::code_buffer::CodeBuffer;
use crate::codegen::{generate_frame, AngleFields, FrameError};

#[derive(Debug)]
pub struct Session {
    /// Free-form angle entry text, one field per joint.
    pub fields: AngleFields,
    /// Free-form delay entry text, re-read on every add_frame.
    pub delay_field: String,
    code: CodeBuffer,
}

impl Session {
    pub fn new(default_angle: i32, default_delay_ms: i32) -> Self {
        Self {
            fields: AngleFields::with_default(default_angle),
            delay_field: default_delay_ms.to_string(),
            code: CodeBuffer::new(),
        }
    }

    /// Capture the current pose as one frame. Validates every field first;
    /// on any failure the code buffer is left exactly as it was.
    pub fn add_frame(&mut self) -> Result<(), FrameError> {
        let block = generate_frame(&self.fields, &self.delay_field)?;
        self.code.append_block(&block);
        log::debug!(
            target: "session",
            "Frame {} added ({} bytes)",
            self.code.frame_count(),
            block.len()
        );
        Ok(())
    }

    pub fn clear_code(&mut self) {
        self.code.clear();
        log::debug!(target: "session", "Code buffer cleared");
    }

    /// Snapshot of the generated code for clipboard export.
    pub fn export_code(&self) -> String {
        self.code.snapshot()
    }

    pub fn generated_code(&self) -> &str {
        self.code.as_str()
    }

    pub fn frame_count(&self) -> usize {
        self.code.frame_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joints::Joint;

    #[test]
    fn test_two_adds_concatenate_in_order() {
        let mut session = Session::new(90, 200);
        session.add_frame().unwrap();
        let one = session.generated_code().to_string();
        session.add_frame().unwrap();
        assert_eq!(session.generated_code(), format!("{}{}", one, one));
        assert_eq!(session.frame_count(), 2);
    }

    #[test]
    fn test_failed_add_leaves_buffer_untouched() {
        let mut session = Session::new(90, 200);
        session.add_frame().unwrap();
        let before = session.generated_code().to_string();

        session.fields.set(Joint::R1, "200");
        let err = session.add_frame().unwrap_err();
        assert_eq!(err, FrameError::AngleOutOfRange { joint: Joint::R1 });
        assert_eq!(session.generated_code(), before);
        assert_eq!(session.frame_count(), 1);
    }

    #[test]
    fn test_bad_delay_leaves_buffer_untouched() {
        let mut session = Session::new(90, 200);
        session.delay_field = "fast".to_string();
        assert_eq!(session.add_frame().unwrap_err(), FrameError::DelayNotNumeric);
        assert!(session.generated_code().is_empty());
    }

    #[test]
    fn test_delay_re_read_each_add() {
        let mut session = Session::new(90, 200);
        session.add_frame().unwrap();
        session.delay_field = "500".to_string();
        session.add_frame().unwrap();
        let code = session.generated_code();
        assert!(code.contains("delay(200);"));
        assert!(code.contains("delay(500);"));
    }

    #[test]
    fn test_clear_then_export_is_empty() {
        let mut session = Session::new(90, 200);
        session.add_frame().unwrap();
        session.clear_code();
        session.clear_code();
        assert_eq!(session.export_code(), "");
        assert_eq!(session.frame_count(), 0);
    }

    #[test]
    fn test_export_does_not_mutate() {
        let mut session = Session::new(90, 200);
        session.add_frame().unwrap();
        let snap = session.export_code();
        assert_eq!(snap, session.generated_code());
        assert_eq!(session.frame_count(), 1);
    }
}
