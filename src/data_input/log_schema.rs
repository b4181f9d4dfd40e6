// src/data_input/log_schema.rs

/// Column layouts of the supported planner log variants.
///
/// All variants are whitespace-delimited floats with one header line. A data
/// line belongs to the active variant only if its token count matches the
/// variant's column count exactly; the column meanings are positional.
///
/// Note: a malformed line that happens to carry the active variant's token
/// count is accepted and (mis)parsed. The token-count check is a filter, not
/// a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogVariant {
    /// `t x y z e`
    FiveColumn,
    /// `s t x y z e`
    SixColumn,
    /// `s t x y z e u1 u2` (the two trailing scalars are unused)
    EightColumn,
}

impl LogVariant {
    /// Selects the variant matching a declared column count.
    pub fn from_column_count(count: usize) -> Option<Self> {
        match count {
            5 => Some(Self::FiveColumn),
            6 => Some(Self::SixColumn),
            8 => Some(Self::EightColumn),
            _ => None,
        }
    }

    /// Exact token count a data line must have to be accepted.
    pub fn column_count(self) -> usize {
        match self {
            Self::FiveColumn => 5,
            Self::SixColumn => 6,
            Self::EightColumn => 8,
        }
    }

    /// Column index of the timestamp.
    pub fn time_index(self) -> usize {
        match self {
            Self::FiveColumn => 0,
            Self::SixColumn | Self::EightColumn => 1,
        }
    }

    /// Column indices of x, y, z in axis order.
    pub fn position_indices(self) -> [usize; 3] {
        let t = self.time_index();
        [t + 1, t + 2, t + 3]
    }

    /// Column index of the auxiliary scalar `e`.
    pub fn scalar_e_index(self) -> usize {
        self.time_index() + 4
    }

    /// Column index of the auxiliary scalar `s`, where the variant carries it.
    pub fn scalar_s_index(self) -> Option<usize> {
        match self {
            Self::FiveColumn => None,
            Self::SixColumn | Self::EightColumn => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_selection_by_count() {
        assert_eq!(LogVariant::from_column_count(5), Some(LogVariant::FiveColumn));
        assert_eq!(LogVariant::from_column_count(6), Some(LogVariant::SixColumn));
        assert_eq!(LogVariant::from_column_count(8), Some(LogVariant::EightColumn));
        assert_eq!(LogVariant::from_column_count(7), None);
    }

    #[test]
    fn five_column_layout() {
        let v = LogVariant::FiveColumn;
        assert_eq!(v.column_count(), 5);
        assert_eq!(v.time_index(), 0);
        assert_eq!(v.position_indices(), [1, 2, 3]);
        assert_eq!(v.scalar_e_index(), 4);
        assert_eq!(v.scalar_s_index(), None);
    }

    #[test]
    fn six_and_eight_column_layouts_share_positions() {
        for v in [LogVariant::SixColumn, LogVariant::EightColumn] {
            assert_eq!(v.time_index(), 1);
            assert_eq!(v.position_indices(), [2, 3, 4]);
            assert_eq!(v.scalar_e_index(), 5);
            assert_eq!(v.scalar_s_index(), Some(0));
        }
        assert_eq!(LogVariant::SixColumn.column_count(), 6);
        assert_eq!(LogVariant::EightColumn.column_count(), 8);
    }
}
