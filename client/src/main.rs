//! Browser entry point: logging setup and root component mount.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("console logger was already initialized");
        }
        leptos::mount::mount_to_body(client::app::App);
    }
}
