//! Segmented input masking for long numeric identifiers.
//!
//! A billing account number is typed across several small boxes. The mask
//! filters non-digits, caps each box at its configured width, and tells the
//! UI layer when focus should hop to the next box. Incomplete input is not a
//! masking error; completeness is checked by validation at submit time.

/// Fixed segment widths for one mask configuration, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskLayout {
    pub widths: &'static [usize],
}

/// Electricity accounts: ten single-digit boxes.
pub const ELECTRICITY_ACCOUNT: MaskLayout = MaskLayout {
    widths: &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
};

/// Water accounts: five groups of 2-2-3-3-2 digits (12 total).
pub const WATER_ACCOUNT: MaskLayout = MaskLayout {
    widths: &[2, 2, 3, 3, 2],
};

impl MaskLayout {
    pub fn segment_count(&self) -> usize {
        self.widths.len()
    }

    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }
}

/// Current contents of every segment of a masked identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedValue {
    layout: MaskLayout,
    segments: Vec<String>,
}

impl SegmentedValue {
    pub fn empty(layout: MaskLayout) -> Self {
        Self {
            layout,
            segments: vec![String::new(); layout.segment_count()],
        }
    }

    /// Split a stored account number back into segments: zero-pad on the
    /// left to the layout's total width, then slice by the group widths.
    /// Exact inverse of [`compose`](Self::compose) for complete input.
    pub fn decompose(layout: MaskLayout, value: u64) -> Self {
        let padded = format!("{:0>width$}", value, width = layout.total_width());
        let mut segments = Vec::with_capacity(layout.segment_count());
        let mut rest = padded.as_str();
        for &width in layout.widths {
            let take = width.min(rest.len());
            segments.push(rest[..take].to_string());
            rest = &rest[take..];
        }
        Self { layout, segments }
    }

    pub fn layout(&self) -> MaskLayout {
        self.layout
    }

    pub fn segment(&self, index: usize) -> &str {
        self.segments.get(index).map(String::as_str).unwrap_or("")
    }

    /// Apply a raw keystroke value to one segment: non-digits are stripped,
    /// the rest is truncated to the segment width. Returns the index of the
    /// segment that should receive focus next, when the typed digits filled
    /// this one and a next segment exists.
    pub fn set_segment(&mut self, index: usize, raw: &str) -> Option<usize> {
        let width = *self.layout.widths.get(index)?;
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let filled = digits.chars().count() >= width;
        let mut value = digits;
        value.truncate(width);
        self.segments[index] = value;
        if filled && index + 1 < self.segments.len() {
            Some(index + 1)
        } else {
            None
        }
    }

    /// All segments at their full configured width.
    pub fn is_complete(&self) -> bool {
        self.segments
            .iter()
            .zip(self.layout.widths)
            .all(|(segment, &width)| segment.chars().count() == width)
    }

    /// Concatenate the segments in order and parse the result as one
    /// integer. `None` until every segment is complete.
    pub fn compose(&self) -> Option<u64> {
        if !self.is_complete() {
            return None;
        }
        self.segments.concat().parse().ok()
    }

    pub fn clear(&mut self) {
        for segment in &mut self.segments {
            segment.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_round_trip() {
        let mut value = SegmentedValue::empty(WATER_ACCOUNT);
        for (index, group) in ["12", "34", "567", "890", "12"].iter().enumerate() {
            value.set_segment(index, group);
        }
        assert_eq!(value.compose(), Some(123456789012));
        assert_eq!(SegmentedValue::decompose(WATER_ACCOUNT, 123456789012), value);
    }

    #[test]
    fn test_electricity_round_trip() {
        let mut value = SegmentedValue::empty(ELECTRICITY_ACCOUNT);
        for (index, digit) in "4071234567".chars().enumerate() {
            value.set_segment(index, &digit.to_string());
        }
        assert_eq!(value.compose(), Some(4071234567));
        assert_eq!(
            SegmentedValue::decompose(ELECTRICITY_ACCOUNT, 4071234567),
            value
        );
    }

    #[test]
    fn test_decompose_pads_leading_zeros() {
        let value = SegmentedValue::decompose(WATER_ACCOUNT, 42);
        assert_eq!(value.segment(0), "00");
        assert_eq!(value.segment(4), "42");
        assert_eq!(value.compose(), Some(42));
    }

    #[test]
    fn test_set_segment_filters_and_truncates() {
        let mut value = SegmentedValue::empty(WATER_ACCOUNT);
        value.set_segment(2, "1a2b3c4");
        assert_eq!(value.segment(2), "123");
        value.set_segment(0, "x");
        assert_eq!(value.segment(0), "");
    }

    #[test]
    fn test_auto_advance() {
        let mut value = SegmentedValue::empty(WATER_ACCOUNT);
        assert_eq!(value.set_segment(0, "1"), None);
        assert_eq!(value.set_segment(0, "12"), Some(1));
        // overflow past the width still advances
        assert_eq!(value.set_segment(1, "345"), Some(2));
        assert_eq!(value.segment(1), "34");
        // the last segment never advances
        assert_eq!(value.set_segment(4, "99"), None);
    }

    #[test]
    fn test_single_digit_boxes_keep_first_digit() {
        let mut value = SegmentedValue::empty(ELECTRICITY_ACCOUNT);
        assert_eq!(value.set_segment(3, "78"), Some(4));
        assert_eq!(value.segment(3), "7");
        assert_eq!(value.set_segment(9, "5"), None);
    }

    #[test]
    fn test_incomplete_compose_is_none() {
        let mut value = SegmentedValue::empty(WATER_ACCOUNT);
        value.set_segment(0, "12");
        assert!(!value.is_complete());
        assert_eq!(value.compose(), None);
    }
}
