use yew::prelude::*;

use crate::components::escape_listener::EscapeListener;
use crate::components::preview_image::PreviewImage;
use crate::overlay::{CloseTrigger, OverlayState};

#[derive(Properties, PartialEq)]
pub struct PreviewOverlayProps {
    pub state: OverlayState,
    pub on_close: Callback<CloseTrigger>,
    #[prop_or(78)]
    pub max_image_height_vh: u8,
}

/// Full-size, uncropped view of the open gallery entry.
#[function_component(PreviewOverlay)]
pub fn preview_overlay(props: &PreviewOverlayProps) -> Html {
    // The Escape listener follows open/closed, not the entry, so switching
    // entries keeps the same listener.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    EscapeListener::attach(move || on_close.emit(CloseTrigger::EscapeKey))
                } else {
                    None
                };
                move || drop(listener)
            },
            props.state.is_open(),
        );
    }

    let Some(entry) = props.state.entry() else {
        return html! {};
    };

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseTrigger::CloseButton))
    };
    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseTrigger::Backdrop))
    };

    let image_bounds = format!("max-height: {}vh;", props.max_image_height_vh);

    html! {
        <div
            class="preview-overlay"
            role="dialog"
            aria-modal="true"
            aria-label={format!("Full preview: {}", entry.title)}
        >
            // Sibling of the panel, so clicks inside the panel never reach it.
            <div class="preview-backdrop" onclick={close_backdrop}></div>

            <div class="preview-panel">
                <div class="preview-header">
                    <div class="preview-heading">
                        <div class="preview-title">{entry.title}</div>
                        <div class="preview-subtitle">{entry.subtitle}</div>
                    </div>
                    <div class="preview-actions">
                        {
                            if let Some(link) = entry.external_link {
                                html! {
                                    <a class="btn btn-outline btn-sm preview-visit" href={link} target="_blank" rel="noreferrer noopener">
                                        {"Visit site →"}
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <button type="button" class="preview-close" aria-label="Close preview" onclick={close_button}>
                            {"✕"}
                        </button>
                    </div>
                </div>

                <div class="preview-body">
                    <div class="preview-frame" style={image_bounds.clone()}>
                        <PreviewImage
                            key={entry.full_image_src()}
                            src={entry.full_image_src()}
                            alt={format!("{} full screenshot", entry.title)}
                            class={classes!("preview-full-image")}
                            style={image_bounds}
                        />
                    </div>
                    <div class="preview-tip">
                        {"Tip: this view is full size (no crop). Press "}<span class="preview-key">{"ESC"}</span>{" to close."}
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .preview-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .preview-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                }
                .preview-panel {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    max-width: 72rem;
                    overflow: hidden;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--background);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .preview-header {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.75rem 1.5rem;
                    border-bottom: 1px solid var(--border);
                }
                .preview-heading {
                    min-width: 0;
                }
                .preview-title {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--foreground);
                }
                .preview-subtitle {
                    margin-top: 0.125rem;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                .preview-actions {
                    display: flex;
                    flex-shrink: 0;
                    align-items: center;
                    gap: 0.5rem;
                }
                .preview-close {
                    width: 2.25rem;
                    height: 2.25rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: transparent;
                    font-size: 1.1rem;
                    cursor: pointer;
                    color: var(--foreground);
                }
                .preview-close:hover {
                    background: var(--muted);
                }
                .preview-body {
                    padding: 1rem;
                    background: var(--muted-soft);
                }
                .preview-frame {
                    width: 100%;
                    overflow: auto;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--background);
                }
                .preview-full-image {
                    display: block;
                    margin: 0 auto;
                    width: auto;
                    height: auto;
                    max-width: 100%;
                    object-fit: contain;
                }
                .preview-tip {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                .preview-key {
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}
