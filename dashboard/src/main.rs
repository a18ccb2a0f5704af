#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(inventory_dashboard::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Build with `--features csr` (e.g. through trunk) to run in the browser.
}
