pub mod game_over;
pub mod quiz;
pub mod welcome;
