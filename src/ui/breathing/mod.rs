mod intent;
mod reducer;
mod state;

pub use intent::BreathingIntent;
pub use reducer::BreathingReducer;
pub use state::BreathingState;
