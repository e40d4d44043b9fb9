use yew::prelude::*;

use crate::components::preview_image::PreviewImage;
use crate::gallery::GalleryEntry;

#[derive(Properties, PartialEq)]
pub struct ThumbnailCardProps {
    pub entry: &'static GalleryEntry,
    pub on_open: Callback<&'static GalleryEntry>,
}

#[function_component(ThumbnailCard)]
pub fn thumbnail_card(props: &ThumbnailCardProps) -> Html {
    let entry = props.entry;

    // A native button, so Enter and Space activate it too. Only spans inside it.
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(entry))
    };

    html! {
        <button
            type="button"
            class="work-card"
            aria-label={format!("Open preview: {}", entry.title)}
            {onclick}
        >
            <span class="work-card-frame">
                <span class="work-card-media">
                    {
                        if let Some(badge) = entry.badge {
                            html! { <span class="work-card-badge">{badge}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <PreviewImage
                        src={entry.thumbnail_image}
                        alt={format!("{} screenshot", entry.title)}
                        class={classes!("work-card-thumb")}
                        style={format!("object-position: {};", entry.object_position())}
                        lazy=true
                    />
                    <span class="work-card-hint">
                        <span>{"Click to view full size →"}</span>
                    </span>
                </span>
                <span class="work-card-text">
                    <span class="work-card-title">{entry.title}</span>
                    <span class="work-card-subtitle">{entry.subtitle}</span>
                </span>
            </span>
        </button>
    }
}
