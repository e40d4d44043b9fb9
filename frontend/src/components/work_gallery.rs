use yew::prelude::*;

use crate::components::preview_overlay::PreviewOverlay;
use crate::components::thumbnail_card::ThumbnailCard;
use crate::config;
use crate::gallery::{work_items, GalleryEntry};
use crate::overlay::{CloseTrigger, OverlayAction, OverlayState};

#[derive(Properties, PartialEq)]
pub struct WorkGalleryProps {
    #[prop_or_else(work_items)]
    pub items: &'static [GalleryEntry],
}

/// Thumbnail grid plus the preview overlay. This component is the only
/// writer of the overlay state.
#[function_component(WorkGallery)]
pub fn work_gallery(props: &WorkGalleryProps) -> Html {
    let items = props.items;
    let overlay = use_reducer_eq(OverlayState::default);

    let on_open = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |entry: &'static GalleryEntry| {
            dispatcher.dispatch(OverlayAction::Open(entry))
        })
    };
    let on_close = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |trigger: CloseTrigger| {
            dispatcher.dispatch(OverlayAction::Close(trigger))
        })
    };

    html! {
        <>
            <PreviewOverlay
                state={*overlay}
                {on_close}
                max_image_height_vh={config::site().overlay.max_image_height_vh}
            />
            <div class="work-grid">
                { for items.iter().map(|entry| html! {
                    <ThumbnailCard key={entry.title} {entry} on_open={on_open.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .work-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .work-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                .work-card {
                    display: block;
                    width: 100%;
                    padding: 0;
                    border: none;
                    background: none;
                    text-align: left;
                    cursor: pointer;
                    font: inherit;
                }
                .work-card-frame {
                    display: block;
                    padding: 1rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .work-card:hover .work-card-frame,
                .work-card:focus-visible .work-card-frame {
                    transform: translateY(-2px);
                    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08);
                }
                .work-card-media {
                    display: block;
                    position: relative;
                    aspect-ratio: 16 / 10;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--muted);
                }
                .work-card-thumb {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .work-card:hover .work-card-thumb {
                    transform: scale(1.03);
                }
                .work-card-badge {
                    display: block;
                    position: absolute;
                    left: 0.75rem;
                    top: 0.75rem;
                    z-index: 1;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(6px);
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: var(--muted-foreground);
                }
                .work-card-hint {
                    display: block;
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.35), rgba(0, 0, 0, 0) 55%);
                }
                .work-card:hover .work-card-hint {
                    opacity: 1;
                }
                .work-card-hint span {
                    position: absolute;
                    left: 0.75rem;
                    bottom: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.4);
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.75rem;
                }
                .work-card-text {
                    display: block;
                    margin-top: 1rem;
                }
                .work-card-title {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--foreground);
                }
                .work-card-subtitle {
                    display: block;
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                "#}
            </style>
        </>
    }
}
