// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Enumeration to track the space type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Real,
    Reciprocal,
}

impl Space {
    pub fn dual(&self) -> Space {
        match self {
            Space::Real => Space::Reciprocal,
            Space::Reciprocal => Space::Real,
        }
    }
}

// Spin channel of the calculation, selects the suffix of the .win file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinChannel {
    #[default]
    Unpolarized,
    Up,
    Down,
}

impl SpinChannel {
    pub fn suffix(&self) -> &'static str {
        match self {
            SpinChannel::Unpolarized => "",
            SpinChannel::Up => "up",
            SpinChannel::Down => "dn",
        }
    }
}
