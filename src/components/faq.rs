use web_sys::MouseEvent;
use yew::prelude::*;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "When and where does the festival happen?",
        answer: "Doors open February 28th 2026 at the Harbour Field grounds. \
                 The site is a ten minute walk from the central station and \
                 shuttle buses run all night.",
    },
    FaqEntry {
        question: "Are tickets refundable?",
        answer: "Tickets can be refunded up to 14 days before the festival. \
                 After that you can still transfer your ticket to a friend \
                 free of charge.",
    },
    FaqEntry {
        question: "Can I bring my own food and drinks?",
        answer: "Sealed water bottles up to half a litre are fine. Everything \
                 else is covered by the food court, which has vegan and \
                 gluten-free options at every stand.",
    },
    FaqEntry {
        question: "Is the festival accessible?",
        answer: "Yes. Both stages have raised viewing platforms, all paths \
                 are paved, and accessible parking sits next to the main \
                 entrance. Email us ahead of time and our crew will meet you.",
    },
    FaqEntry {
        question: "What happens if it rains?",
        answer: "We play on. The main stage is covered and ponchos are handed \
                 out at the gates. Only a severe weather warning can pause \
                 the music.",
    },
];

/// Accordion transition: clicking the open question closes it, clicking any
/// other question makes it the only open one.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section reveal-on-scroll" id="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for ENTRIES.iter().enumerate().map(|(index, entry)| {
                    let is_open = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(next_open(*open, index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={onclick}>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
            <style>
                {r#"
                .faq-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .faq-section h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }

                .faq-item {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 184, 76, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(255, 184, 76, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    color: #eee;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #ffb84c;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #ffb84c;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.5rem 1.2rem;
                }

                .faq-answer p {
                    color: #aaa;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_closed_question_opens_it() {
        assert_eq!(next_open(None, 0), Some(0));
    }

    #[test]
    fn clicking_another_question_switches_the_open_one() {
        let open = next_open(None, 0);
        let open = next_open(open, 2);
        assert_eq!(open, Some(2));
    }

    #[test]
    fn clicking_the_open_question_closes_everything() {
        let open = next_open(None, 1);
        assert_eq!(next_open(open, 1), None);
    }
}
