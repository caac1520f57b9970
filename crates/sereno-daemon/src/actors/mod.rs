mod hydration;
mod notifier;
mod pomodoro;
mod screen_time;
mod water;

pub use hydration::{HydrationActor, HydrationHandle, HydrationStatus};
pub use notifier::{NotifierActor, NotifierHandle};
pub use pomodoro::{PomodoroActor, PomodoroHandle, PomodoroStatus};
pub use screen_time::{ScreenTimeActor, ScreenTimeHandle, ScreenTimeStatus};
pub use water::{WaterActor, WaterHandle, WaterStatus};
