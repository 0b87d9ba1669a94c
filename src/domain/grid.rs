//! Responsive 12-unit grid.
//!
//! Columns are sized in grid units (`offset` units skipped, `span` units
//! occupied) and only take that size once the row is at least as wide as
//! their breakpoint. Narrower rows stack every column at full width.

use crate::domain::errors::GridError;

/// Number of units in a grid row.
pub const GRID_COLUMNS: u16 = 12;

/// Width tier at which a column's sizing becomes active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Always active.
    #[default]
    Xs,
    /// Small terminals.
    Sm,
    /// Medium terminals.
    Md,
    /// Large terminals.
    Lg,
    /// Extra large terminals.
    Xl,
}

impl Breakpoint {
    /// Minimum row width, in cells, for this breakpoint to apply.
    #[must_use]
    pub const fn min_width(self) -> u16 {
        match self {
            Self::Xs => 0,
            Self::Sm => 48,
            Self::Md => 64,
            Self::Lg => 96,
            Self::Xl => 120,
        }
    }

    /// Returns whether a row of `width` cells reaches this breakpoint.
    #[must_use]
    pub const fn is_active(self, width: u16) -> bool {
        width >= self.min_width()
    }
}

/// Offset/span pair of a column, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponsiveConfig {
    offset: u16,
    span: u16,
}

impl ResponsiveConfig {
    /// Full-width column.
    pub const FULL: Self = Self {
        offset: 0,
        span: GRID_COLUMNS,
    };

    /// Creates a column sizing.
    ///
    /// # Errors
    ///
    /// Returns `GridError` if `span` is zero or `offset + span` exceeds the grid.
    pub const fn new(offset: u16, span: u16) -> Result<Self, GridError> {
        if span == 0 {
            return Err(GridError::EmptySpan);
        }
        if offset.saturating_add(span) > GRID_COLUMNS {
            return Err(GridError::Overflow {
                offset,
                span,
                columns: GRID_COLUMNS,
            });
        }
        Ok(Self { offset, span })
    }

    /// Units skipped before the column.
    #[must_use]
    pub const fn offset(self) -> u16 {
        self.offset
    }

    /// Units occupied by the column.
    #[must_use]
    pub const fn span(self) -> u16 {
        self.span
    }

    /// Total units consumed on a line.
    #[must_use]
    pub const fn extent(self) -> u16 {
        self.offset + self.span
    }

    /// Sizing to use in a row of `width` cells.
    #[must_use]
    pub const fn resolve(self, breakpoint: Breakpoint, width: u16) -> Self {
        if breakpoint.is_active(width) {
            self
        } else {
            Self::FULL
        }
    }
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self::FULL
    }
}

/// Cell position of a placed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Zero-based line inside the row.
    pub line: u16,
    /// First cell, relative to the row.
    pub start: u16,
    /// Width in cells.
    pub width: u16,
}

/// Flows columns across a row of `width` cells.
///
/// Columns are laid out left to right; one that does not fit in the units
/// left on the current line starts a new line.
#[must_use]
pub fn place_columns(configs: &[ResponsiveConfig], width: u16) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(configs.len());
    let mut cursor = 0;
    let mut line = 0;

    for config in configs {
        if cursor > 0 && cursor + config.extent() > GRID_COLUMNS {
            line += 1;
            cursor = 0;
        }

        let first = cursor + config.offset();
        let last = first + config.span();
        let start = unit_edge(first, width);
        let end = unit_edge(last, width);

        placements.push(Placement {
            line,
            start,
            width: end - start,
        });
        cursor = last;
    }

    placements
}

/// Cell at which grid unit `unit` begins.
fn unit_edge(unit: u16, width: u16) -> u16 {
    let edge = u32::from(width) * u32::from(unit) / u32::from(GRID_COLUMNS);
    u16::try_from(edge).unwrap_or(width)
}
