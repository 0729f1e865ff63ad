//! Exit code constants for the clueforge CLI.
//!
//! Per-row generation failures never affect the exit code: the run exits
//! successfully as long as the output file was written.
//! - 0: Success
//! - 1: User error (bad args, unreadable input, unwritable output)
//! - 2: Backend failure (generation server unreachable or broken)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input file, or unwritable output file.
pub const USER_ERROR: i32 = 1;

/// Backend failure: generation server unreachable or returned an unusable response.
pub const BACKEND_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, BACKEND_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
