//! Scoring - points awarded per lock event
//!
//! Points double (minus one unit) with every extra row cleared together:
//!
//! | Rows | Points |
//! |------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 700 |
//! | 4 | 1500 |

/// Points for a single row clear
pub const LINE_UNIT: u32 = 100;

/// Points for clearing `rows` rows in one lock event
pub fn line_clear_score(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    let factor = 1u32.checked_shl(rows as u32).unwrap_or(u32::MAX);
    LINE_UNIT.saturating_mul(factor.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_score_nothing() {
        assert_eq!(line_clear_score(0), 0);
    }

    #[test]
    fn known_values() {
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 700);
        assert_eq!(line_clear_score(4), 1500);
    }

    #[test]
    fn strictly_increasing_and_super_linear() {
        for rows in 1..12 {
            let prev = line_clear_score(rows - 1);
            let next = line_clear_score(rows);
            assert!(next > prev, "rows={rows}");
            if rows > 1 {
                assert!(next > line_clear_score(1) * rows as u32, "rows={rows}");
            }
        }
    }

    #[test]
    fn huge_row_counts_saturate() {
        assert_eq!(line_clear_score(64), u32::MAX);
    }
}
