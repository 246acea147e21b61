use super::position::Position;

/// Kind of food on the grid. Each kind carries a fixed point value and,
/// for the last two, a temporary speed effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Normal,
    Bonus,
    FastFood,
    SlowFood,
}

impl FoodKind {
    /// Points awarded when eaten.
    pub fn points(self) -> u32 {
        match self {
            FoodKind::Normal => 10,
            FoodKind::Bonus => 50,
            FoodKind::FastFood => 5,
            FoodKind::SlowFood => 15,
        }
    }

    /// Map a uniform roll in [0, 100) onto the kind distribution:
    /// 60% Normal, 20% Bonus, 10% FastFood, 10% SlowFood.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=59 => FoodKind::Normal,
            60..=79 => FoodKind::Bonus,
            80..=89 => FoodKind::FastFood,
            _ => FoodKind::SlowFood,
        }
    }
}

/// The single active food item. Replaced wholesale on consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }
}
