//! Lucky Draw Frontend Entry Point

mod models;
mod routes;
mod reveal;
mod store;
mod commands;
mod context;
mod page;
mod navigation;
mod components;
mod app;

fn main() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    navigation::bind_group_selectors(&document);

    match page::DrawPage::find(&document) {
        Ok(Some(page)) => app::mount_draw_page(page),
        Ok(None) => {}
        Err(e) => web_sys::console::error_1(&format!("[Reveal] {}", e).into()),
    }
}
