use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreviewImageProps {
    pub src: &'static str,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub lazy: bool,
}

/// An `<img>` that swaps itself for a placeholder if the file fails to load.
/// Key it by source when the same slot shows different images.
#[function_component(PreviewImage)]
pub fn preview_image(props: &PreviewImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src;
        Callback::from(move |_: Event| {
            warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };

    if *failed {
        // Phrasing content, so it can sit inside a card button.
        return html! {
            <span class={classes!("image-placeholder", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                {"Preview unavailable"}
            </span>
        };
    }

    html! {
        <img
            src={props.src}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            loading={if props.lazy { "lazy" } else { "eager" }}
            {onerror}
        />
    }
}
