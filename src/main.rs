mod animator;
mod driver;
mod error;
mod frame;
mod rotor;
mod settings;
mod trail;
mod tween;
mod viewer;

use log::error;

use settings::Settings;
use viewer::App;

fn main() {
    env_logger::init();

    let result = App::new(Settings::default()).and_then(|mut app| app.run());

    if let Err(error) = result {
        error!("{}", error);
        std::process::exit(1);
    }
}
