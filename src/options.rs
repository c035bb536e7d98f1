//! The ordered set of time controls offered during setup.

use crate::types::{ConfigError, Direction, TimeOption};
use heapless::Vec;

/// Number of options in the standard set.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// 2, 10, 30 and 60 minutes.
pub const DEFAULT_OPTIONS: [TimeOption; DEFAULT_OPTION_COUNT] = [
    TimeOption::from_secs(120),
    TimeOption::from_secs(600),
    TimeOption::from_secs(1800),
    TimeOption::from_secs(3600),
];

/// Index of the option selected at power-on (10 minutes).
pub const DEFAULT_OPTION_INDEX: usize = 1;

/// A validated, non-empty set of time options with a selection cursor.
///
/// # Type Parameters
/// * `N` - Maximum number of options this set can hold
#[derive(Debug, Clone)]
pub struct TimeOptions<const N: usize> {
    options: Vec<TimeOption, N>,
    selected: usize,
}

impl<const N: usize> TimeOptions<N> {
    /// Creates a new option set builder.
    pub fn builder() -> TimeOptionsBuilder<N> {
        TimeOptionsBuilder::new()
    }

    /// Returns the currently selected option.
    pub fn selected(&self) -> TimeOption {
        self.options[self.selected]
    }

    /// Returns the index of the currently selected option.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Moves the cursor one step, wrapping at either end.
    pub fn select(&mut self, direction: Direction) -> TimeOption {
        let len = self.options.len();
        self.selected = match direction {
            Direction::Next => (self.selected + 1) % len,
            Direction::Previous => (self.selected + len - 1) % len,
        };
        self.selected()
    }

    /// Returns all options in order.
    pub fn as_slice(&self) -> &[TimeOption] {
        &self.options
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; a built set holds at least one option.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for TimeOptions<DEFAULT_OPTION_COUNT> {
    fn default() -> Self {
        Self {
            options: Vec::from_iter(DEFAULT_OPTIONS),
            selected: DEFAULT_OPTION_INDEX,
        }
    }
}

/// Builder for constructing validated option sets.
#[derive(Debug)]
pub struct TimeOptionsBuilder<const N: usize> {
    options: Vec<TimeOption, N>,
    default_index: usize,
}

impl<const N: usize> TimeOptionsBuilder<N> {
    /// Creates a new empty builder. The default index starts at 0.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            default_index: 0,
        }
    }

    /// Appends an option.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` options were added
    pub fn option(mut self, option: TimeOption) -> Result<Self, ConfigError> {
        self.options
            .push(option)
            .map_err(|_| ConfigError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets which option is selected when the engine powers on.
    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    /// Builds and validates the option set.
    ///
    /// # Errors
    /// * `NoOptions` - No options were added
    /// * `ZeroDurationOption` - An option is zero seconds long
    /// * `OptionTooLong` - An option is longer than 99:59
    /// * `DefaultIndexOutOfRange` - The default index names no option
    pub fn build(self) -> Result<TimeOptions<N>, ConfigError> {
        if self.options.is_empty() {
            return Err(ConfigError::NoOptions);
        }

        if self.options.iter().any(|option| option.as_secs() == 0) {
            return Err(ConfigError::ZeroDurationOption);
        }

        if let Some(option) = self
            .options
            .iter()
            .find(|option| option.as_secs() > TimeOption::MAX_SECS)
        {
            return Err(ConfigError::OptionTooLong {
                secs: option.as_secs(),
            });
        }

        if self.default_index >= self.options.len() {
            return Err(ConfigError::DefaultIndexOutOfRange {
                index: self.default_index,
                len: self.options.len(),
            });
        }

        Ok(TimeOptions {
            options: self.options,
            selected: self.default_index,
        })
    }
}

impl<const N: usize> Default for TimeOptionsBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
