use web_sys::Document;
use yew::prelude::*;

/// Clone the marquee content block once so the CSS animation can loop
/// seamlessly: when the first copy scrolls out, the second is in place.
pub fn duplicate_marquee(document: &Document) {
    if let Some(content) = document.query_selector(".marquee-content").ok().flatten() {
        if let Some(parent) = content.parent_node() {
            if let Ok(clone) = content.clone_node_with_deep(true) {
                let _ = parent.append_child(&clone);
            }
        }
    }
}

#[function_component(Marquee)]
pub fn marquee() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                duplicate_marquee(&document);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="marquee">
            <div class="marquee-track">
                <div class="marquee-content">
                    <span>{"Solstice Festival ✶ February 28 2026 ✶ Harbour Field ✶ "}</span>
                    <span>{"Two stages ✶ 24 acts ✶ Art dome ✶ Night market ✶ "}</span>
                </div>
            </div>
            <style>
                {r#"
                .marquee {
                    overflow: hidden;
                    background: #ffb84c;
                    color: #1a1026;
                    padding: 0.6rem 0;
                    font-weight: 600;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                }

                .marquee-track {
                    display: flex;
                    width: max-content;
                    animation: marquee-scroll 20s linear infinite;
                }

                .marquee-content {
                    display: flex;
                    flex-shrink: 0;
                    white-space: nowrap;
                }

                @keyframes marquee-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                "#}
            </style>
        </div>
    }
}
