// Manual control directions
use crate::domain::error::DashboardError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Left,
    Right,
}

impl FromStr for MoveDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(MoveDirection::Forward),
            "backward" => Ok(MoveDirection::Backward),
            other => Err(DashboardError::UnknownDirection(other.to_string())),
        }
    }
}

impl FromStr for RotateDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(RotateDirection::Left),
            "right" => Ok(RotateDirection::Right),
            other => Err(DashboardError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("forward".parse::<MoveDirection>().unwrap(), MoveDirection::Forward);
        assert_eq!("right".parse::<RotateDirection>().unwrap(), RotateDirection::Right);
        assert_eq!(
            "left".parse::<MoveDirection>(),
            Err(DashboardError::UnknownDirection("left".to_string()))
        );
    }
}
