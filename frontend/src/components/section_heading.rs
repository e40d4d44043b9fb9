use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            {
                if let Some(eyebrow) = props.eyebrow {
                    html! { <div class="section-eyebrow"><span>{eyebrow}</span></div> }
                } else {
                    html! {}
                }
            }
            <h2>{props.title}</h2>
            {
                if let Some(subtitle) = props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
