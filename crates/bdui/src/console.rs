//! Terminal stand-ins for the host application's navigator and presenter.

use bdui_engine::{Alert, Navigator, Presenter, Route, Toast};
use tracing::info;

/// Prints navigation and presentation requests instead of performing them.
#[derive(Debug, Default)]
pub struct Console;

impl Navigator for Console {
    fn navigate(&self, route: &Route) {
        info!(screen = %route, "navigate");
        println!("-> navigate to {route}");
    }
}

impl Presenter for Console {
    fn present_alert(&self, alert: &Alert) {
        println!("-> alert \"{}\": {} [{}]", alert.title, alert.message, alert.acknowledge);
    }

    fn show_toast(&self, toast: &Toast) {
        println!(
            "-> toast \"{}\" for {:.1}s",
            toast.message,
            toast.timing.total().as_secs_f64()
        );
    }

    fn dismiss(&self) {
        println!("-> dismiss");
    }
}
