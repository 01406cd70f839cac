//! Mock embedded-hal pins for unit tests

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

/// Output pin recording its level and edge count
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
    pub fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            high: false,
            writes: 0,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Input pin reading the given level
    pub fn reading(high: bool) -> Self {
        Self {
            high,
            ..Self::new()
        }
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
