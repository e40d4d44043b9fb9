#![cfg(target_arch = "wasm32")]

use console_error_panic_hook::set_once as set_panic_hook;
use dbwebsites_frontend::components::escape_listener::active_listeners;
use dbwebsites_frontend::components::work_gallery::{WorkGallery, WorkGalleryProps};
use dbwebsites_frontend::gallery::{CropPosition, GalleryEntry};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

// Inline 1x1 GIFs so no test image can fail to load and fall back to the placeholder.
const BLACK_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
const CLEAR_PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAP///wAAACH5BAEAAAAALAAAAAABAAEAAAICRAEAOw==";

static ENTRIES: [GalleryEntry; 3] = [
    GalleryEntry {
        title: "A",
        subtitle: "Alpha subtitle",
        badge: Some("First"),
        thumbnail_image: BLACK_PIXEL,
        full_image: Some(CLEAR_PIXEL),
        crop_position: Some(CropPosition::Top),
        external_link: Some("https://a.example.com"),
    },
    GalleryEntry {
        title: "B",
        subtitle: "Bravo subtitle",
        badge: None,
        thumbnail_image: BLACK_PIXEL,
        full_image: None,
        crop_position: None,
        external_link: None,
    },
    GalleryEntry {
        title: "C",
        subtitle: "Charlie subtitle",
        badge: None,
        thumbnail_image: BLACK_PIXEL,
        full_image: None,
        crop_position: Some(CropPosition::Left),
        external_link: None,
    },
];

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

async fn mount() -> (AppHandle<WorkGallery>, Element) {
    let document = document();
    let root = document.create_element("div").expect("create test root");
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    let handle =
        yew::Renderer::<WorkGallery>::with_root_and_props(root.clone(), WorkGalleryProps { items: &ENTRIES })
            .render();
    settle().await;
    (handle, root)
}

async fn unmount(handle: AppHandle<WorkGallery>, root: Element) {
    handle.destroy();
    settle().await;
    root.remove();
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn click_card(root: &Element, title: &str) {
    let selector = format!("button.work-card[aria-label='Open preview: {}']", title);
    click(&find(root, &selector).expect("card rendered"));
}

fn press(key: &str) {
    let mut init = KeyboardEventInit::new();
    init.key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    web_sys::window()
        .expect("window available")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

fn open_title(root: &Element) -> Option<String> {
    find(root, ".preview-overlay .preview-title").and_then(|title| title.text_content())
}

#[wasm_bindgen_test(async)]
async fn walkthrough_over_three_entries() {
    set_panic_hook();
    let (handle, root) = mount().await;
    assert_eq!(root.query_selector_all("button.work-card").unwrap().length(), 3);
    assert_eq!(root.query_selector_all("button.work-card div").unwrap().length(), 0);
    assert_eq!(open_title(&root), None);
    assert_eq!(active_listeners(), 0);

    click_card(&root, "B");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("B"));
    let subtitle = find(&root, ".preview-subtitle").and_then(|e| e.text_content());
    assert_eq!(subtitle.as_deref(), Some("Bravo subtitle"));
    let image = find(&root, ".preview-full-image").expect("full image shown");
    assert_eq!(image.get_attribute("src").as_deref(), Some(BLACK_PIXEL));
    assert!(find(&root, ".preview-visit").is_none());
    assert_eq!(active_listeners(), 1);

    press("Escape");
    settle().await;
    assert_eq!(open_title(&root), None);
    assert_eq!(active_listeners(), 0);

    click_card(&root, "A");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("A"));
    let image = find(&root, ".preview-full-image").expect("full image shown");
    assert_eq!(image.get_attribute("src").as_deref(), Some(CLEAR_PIXEL));
    let visit = find(&root, ".preview-visit").expect("visit link for A");
    assert_eq!(visit.get_attribute("href").as_deref(), Some("https://a.example.com"));

    click_card(&root, "C");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("C"));
    // Switching entries keeps the one listener.
    assert_eq!(active_listeners(), 1);

    click(&find(&root, ".preview-backdrop").expect("backdrop"));
    settle().await;
    assert_eq!(open_title(&root), None);
    assert_eq!(active_listeners(), 0);

    unmount(handle, root).await;
}

#[wasm_bindgen_test(async)]
async fn clicks_inside_panel_keep_it_open() {
    set_panic_hook();
    let (handle, root) = mount().await;

    click_card(&root, "A");
    settle().await;
    click(&find(&root, ".preview-panel").expect("panel"));
    click(&find(&root, ".preview-tip").expect("tip"));
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("A"));

    press("Enter");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("A"));

    click(&find(&root, ".preview-close").expect("close button"));
    settle().await;
    assert_eq!(open_title(&root), None);
    assert_eq!(active_listeners(), 0);

    unmount(handle, root).await;
}

#[wasm_bindgen_test(async)]
async fn reopening_same_entry_stays_open() {
    set_panic_hook();
    let (handle, root) = mount().await;

    click_card(&root, "A");
    settle().await;
    click_card(&root, "A");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("A"));
    assert_eq!(active_listeners(), 1);

    let dialog = find(&root, "[role='dialog']").expect("dialog");
    assert_eq!(dialog.get_attribute("aria-modal").as_deref(), Some("true"));
    assert_eq!(dialog.get_attribute("aria-label").as_deref(), Some("Full preview: A"));

    press("Escape");
    settle().await;
    assert_eq!(active_listeners(), 0);

    unmount(handle, root).await;
}

#[wasm_bindgen_test(async)]
async fn destroying_open_gallery_releases_listener() {
    set_panic_hook();
    let (handle, root) = mount().await;

    click_card(&root, "A");
    settle().await;
    assert_eq!(open_title(&root).as_deref(), Some("A"));
    assert_eq!(active_listeners(), 1);

    unmount(handle, root).await;
    assert_eq!(active_listeners(), 0);

    // Nothing left listening, so this must be a no-op.
    press("Escape");
    settle().await;
    assert_eq!(active_listeners(), 0);
}
