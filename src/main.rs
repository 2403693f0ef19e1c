use pwa_icons::{IconConfig, RunState, generate};

fn main() {
    let config = IconConfig::default();
    if let RunState::Failed(_) = generate(&config) {
        std::process::exit(1);
    }
}
