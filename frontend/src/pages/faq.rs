use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::section_heading::SectionHeading;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Do you do domains?",
        answer: "Yes — domain registration and setup is optional and can be added after launch. I can guide you through it or handle it for you as an add-on.",
    },
    FaqEntry {
        question: "How fast is delivery?",
        answer: "Fast Launch sites can be very quick once I’ve got your basics (business name, services, logo/photos). Premium custom builds are scoped based on complexity.",
    },
    FaqEntry {
        question: "What's not included?",
        answer: "The Fast Launch package doesn’t include e-commerce, booking systems, custom integrations, or unlimited revisions. Those are quoted as premium builds.",
    },
    FaqEntry {
        question: "What should I send you to start?",
        answer: "Business name, services (dot points), location, whether you own a domain, and any links (FB/IG/current site). If you email, the template is pre-filled for you.",
    },
];

/// Single, collapsible accordion: at most one answer is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        if self.expanded == Some(index) {
            Self { expanded: None }
        } else {
            Self { expanded: Some(index) }
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            {
                if props.open {
                    html! { <div class="faq-answer">{props.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(AccordionState::default);

    html! {
        <section id="faq" class="band">
            <div class="container section-pad">
                <SectionHeading
                    eyebrow="FAQ"
                    title="Quick answers"
                    subtitle="If you’ve got more questions, just message me."
                />
                <div class="narrow">
                    <div class="card faq-card">
                        { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                            let on_toggle = {
                                let accordion = accordion.clone();
                                Callback::from(move |_: ()| accordion.set((*accordion).toggle(index)))
                            };
                            html! {
                                <FaqItem
                                    key={index}
                                    question={entry.question}
                                    answer={entry.answer}
                                    open={accordion.is_expanded(index)}
                                    {on_toggle}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .faq-card {
                    padding: 1.5rem 2rem;
                }
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-item:last-child {
                    border-bottom: none;
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1rem 0;
                    border: none;
                    background: none;
                    text-align: left;
                    font: inherit;
                    font-size: 1rem;
                    font-weight: 600;
                    color: var(--foreground);
                    cursor: pointer;
                }
                .faq-question:hover .question-text {
                    text-decoration: underline;
                }
                .toggle-icon {
                    color: var(--muted-foreground);
                    font-size: 1.25rem;
                }
                .faq-answer {
                    padding-bottom: 1rem;
                    line-height: 1.6;
                    color: var(--muted-foreground);
                }
                "#}
            </style>
        </section>
    }
}
