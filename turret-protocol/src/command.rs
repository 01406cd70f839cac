//! Command parsing

use core::fmt;
use core::str::SplitAsciiWhitespace;

/// Commands accepted by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `home`: calibrate, park, power off
    Home,
    /// `reset`: calibrate and stay powered
    Reset,
    /// `target <az> <el>`: store a target without moving
    SetTarget { azimuth: i32, elevation: i32 },
    /// `aim`: move to the stored target
    Aim,
    /// `aim <az> <el>`: store a target and move to it
    AimAt { azimuth: i32, elevation: i32 },
    /// `fire`: pulse the actuator
    Fire,
    /// `aimfire <az> <el>`: aim, then fire only if on target
    AimAndFire { azimuth: i32, elevation: i32 },
    /// `motors on|off`: assert or remove holding power
    Motors(bool),
    /// `status`: report position and power
    Status,
}

/// Errors parsing a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Blank line
    Empty,
    /// Keyword not recognised
    UnknownCommand,
    /// Fewer arguments than the command takes
    MissingArgument,
    /// Argument is not a valid number or switch value
    InvalidNumber,
    /// More arguments than the command takes
    TooManyArguments,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ParseError::Empty => "empty command",
            ParseError::UnknownCommand => "unknown command",
            ParseError::MissingArgument => "missing argument",
            ParseError::InvalidNumber => "invalid argument",
            ParseError::TooManyArguments => "too many arguments",
        };
        f.write_str(text)
    }
}

impl Command {
    /// Parse one command line (without the line terminator)
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut args = line.split_ascii_whitespace();
        let keyword = args.next().ok_or(ParseError::Empty)?;

        let command = if keyword.eq_ignore_ascii_case("home") {
            Command::Home
        } else if keyword.eq_ignore_ascii_case("reset") {
            Command::Reset
        } else if keyword.eq_ignore_ascii_case("target") {
            let (azimuth, elevation) = coordinates(&mut args)?;
            Command::SetTarget { azimuth, elevation }
        } else if keyword.eq_ignore_ascii_case("aim") {
            // Bare `aim` reuses the stored target
            match args.next() {
                None => Command::Aim,
                Some(first) => {
                    let azimuth = number(first)?;
                    let elevation = number(args.next().ok_or(ParseError::MissingArgument)?)?;
                    Command::AimAt { azimuth, elevation }
                }
            }
        } else if keyword.eq_ignore_ascii_case("fire") {
            Command::Fire
        } else if keyword.eq_ignore_ascii_case("aimfire") {
            let (azimuth, elevation) = coordinates(&mut args)?;
            Command::AimAndFire { azimuth, elevation }
        } else if keyword.eq_ignore_ascii_case("motors") {
            let value = args.next().ok_or(ParseError::MissingArgument)?;
            Command::Motors(switch(value)?)
        } else if keyword.eq_ignore_ascii_case("status") {
            Command::Status
        } else {
            return Err(ParseError::UnknownCommand);
        };

        if args.next().is_some() {
            return Err(ParseError::TooManyArguments);
        }
        Ok(command)
    }

    /// Check if this command can move an axis
    pub fn moves(&self) -> bool {
        matches!(
            self,
            Command::Home
                | Command::Reset
                | Command::Aim
                | Command::AimAt { .. }
                | Command::AimAndFire { .. }
        )
    }
}

fn coordinates(args: &mut SplitAsciiWhitespace<'_>) -> Result<(i32, i32), ParseError> {
    let azimuth = number(args.next().ok_or(ParseError::MissingArgument)?)?;
    let elevation = number(args.next().ok_or(ParseError::MissingArgument)?)?;
    Ok((azimuth, elevation))
}

fn number(text: &str) -> Result<i32, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber)
}

fn switch(text: &str) -> Result<bool, ParseError> {
    if text.eq_ignore_ascii_case("on") || text == "1" {
        Ok(true)
    } else if text.eq_ignore_ascii_case("off") || text == "0" {
        Ok(false)
    } else {
        Err(ParseError::InvalidNumber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use proptest::prelude::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("home"), Ok(Command::Home));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("aim"), Ok(Command::Aim));
        assert_eq!(Command::parse("fire"), Ok(Command::Fire));
        assert_eq!(Command::parse("status"), Ok(Command::Status));
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(Command::parse("  HOME \t"), Ok(Command::Home));
        assert_eq!(
            Command::parse("Target   -100\t-200"),
            Ok(Command::SetTarget {
                azimuth: -100,
                elevation: -200
            })
        );
    }

    #[test]
    fn test_aim_variants() {
        assert_eq!(
            Command::parse("aim -100 -200"),
            Ok(Command::AimAt {
                azimuth: -100,
                elevation: -200
            })
        );
        assert_eq!(Command::parse("aim -100"), Err(ParseError::MissingArgument));
        assert_eq!(
            Command::parse("aim -1 -2 -3"),
            Err(ParseError::TooManyArguments)
        );
    }

    #[test]
    fn test_aimfire() {
        assert_eq!(
            Command::parse("aimfire 0 -4000"),
            Ok(Command::AimAndFire {
                azimuth: 0,
                elevation: -4000
            })
        );
        assert_eq!(Command::parse("aimfire"), Err(ParseError::MissingArgument));
    }

    #[test]
    fn test_motors() {
        assert_eq!(Command::parse("motors on"), Ok(Command::Motors(true)));
        assert_eq!(Command::parse("motors OFF"), Ok(Command::Motors(false)));
        assert_eq!(Command::parse("motors 1"), Ok(Command::Motors(true)));
        assert_eq!(Command::parse("motors maybe"), Err(ParseError::InvalidNumber));
        assert_eq!(Command::parse("motors"), Err(ParseError::MissingArgument));
    }

    #[test]
    fn test_errors() {
        assert_eq!(Command::parse(""), Err(ParseError::Empty));
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(Command::parse("launch"), Err(ParseError::UnknownCommand));
        assert_eq!(Command::parse("target x 0"), Err(ParseError::InvalidNumber));
        assert_eq!(
            Command::parse("target 99999999999 0"),
            Err(ParseError::InvalidNumber)
        );
        assert_eq!(Command::parse("fire now"), Err(ParseError::TooManyArguments));
    }

    #[test]
    fn test_moves() {
        assert!(Command::Aim.moves());
        assert!(Command::Home.moves());
        assert!(!Command::Fire.moves());
        assert!(!Command::Status.moves());
        assert!(!Command::SetTarget {
            azimuth: 0,
            elevation: 0
        }
        .moves());
    }

    proptest! {
        #[test]
        fn prop_coordinates_parse(az in any::<i32>(), el in any::<i32>()) {
            let mut line: heapless::String<64> = heapless::String::new();
            write!(line, "aim {} {}", az, el).unwrap();

            prop_assert_eq!(
                Command::parse(&line),
                Ok(Command::AimAt { azimuth: az, elevation: el })
            );
        }

        #[test]
        fn prop_never_panics(line in "[ -~\\t]{0,40}") {
            let _ = Command::parse(&line);
        }
    }
}
