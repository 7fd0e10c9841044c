use crate::types::FrameDimensions;

pub const REPORT_HEADING: &str = "Calculated Frame Dimensions:";

/// Underline used beneath headings
pub const RULE: &str = "------------------------------";

/// The three result lines shown to the user
pub fn report_lines(dimensions: &FrameDimensions) -> [String; 3] {
    [
        format!("Art Piece Size: {}", dimensions.art),
        format!("Frame Opening Size: {}", dimensions.opening),
        format!("Outside Frame Dimensions: {}", dimensions.outside),
    ]
}
