mod app_builder;
mod app_router;
mod cursor_style;
mod disclosure_view;
mod input;
mod motion_view;
mod persisted_store;
mod preview_view;
mod toggle_view;

fn main() {
    console_error_panic_hook::set_once();
    app_builder::start();
}
