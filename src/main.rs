// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{App, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        max: args.opt_value_from_str("--max").unwrap_or(None),
        position: args.opt_value_from_str("--position").unwrap_or(None),
    };

    iced::application(move || App::new(&flags), App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .title("Iced Toasts")
        .window_size((640.0, 420.0))
        .run()
}
