use log::info;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::clipboard;
use crate::components::countdown::Countdown;
use crate::components::faq::Faq;
use crate::components::gallery::Gallery;
use crate::components::marquee::Marquee;
use crate::components::upload::UploadPreview;
use crate::config;
use crate::effects::{parallax, scroll_reveal};

struct Act {
    name: &'static str,
    stage: &'static str,
    time: &'static str,
}

const LINEUP: &[Act] = &[
    Act { name: "Velvet Meridian", stage: "Main Stage", time: "21:30" },
    Act { name: "Northern Echoes", stage: "Main Stage", time: "19:45" },
    Act { name: "Cassia & The Tide", stage: "Harbour Stage", time: "20:15" },
    Act { name: "Glass Atlas", stage: "Harbour Stage", time: "18:30" },
    Act { name: "Mirabel Oak", stage: "Main Stage", time: "17:00" },
    Act { name: "The Slow Comets", stage: "Harbour Stage", time: "16:00" },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Wire the page-level effects once the sections are in the DOM.
    use_effect_with_deps(
        move |_| {
            info!("Home page mounted");
            let document = web_sys::window().unwrap().document().unwrap();
            let reveal = scroll_reveal::observe_all(&document);
            let parallax = parallax::attach(&document);
            move || {
                drop(reveal);
                drop(parallax);
            }
        },
        (),
    );

    let copy_button_ref = NodeRef::default();
    let copy_code = {
        let copy_button_ref = copy_button_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            clipboard::copy_to_clipboard(
                config::PRESALE_CODE.to_string(),
                copy_button_ref.cast::<HtmlElement>(),
            );
        })
    };

    html! {
        <div class="home-page" id="top">
            <header class="hero">
                <div class="parallax-element hero-glow"></div>
                <div class="hero-content">
                    <p class="hero-kicker">{"Tenth edition"}</p>
                    <h1>{"Solstice Festival"}</h1>
                    <p class="hero-subtitle">
                        {"One night of music, light and fire on Harbour Field. \
                          February 28th, 2026."}
                    </p>
                    <Countdown />
                    <a class="hero-cta" href={config::TICKET_URL}>{"Get Tickets"}</a>
                </div>
            </header>

            <Marquee />

            <section class="lineup-section reveal-on-scroll" id="lineup">
                <h2>{"Lineup"}</h2>
                <div class="lineup-grid">
                    { for LINEUP.iter().map(|act| html! {
                        <div class="lineup-card">
                            <span class="lineup-time">{act.time}</span>
                            <h3>{act.name}</h3>
                            <span class="lineup-stage">{act.stage}</span>
                        </div>
                    })}
                </div>
            </section>

            <Gallery />
            <Faq />

            <section class="tickets-section reveal-on-scroll" id="tickets">
                <h2>{"Tickets"}</h2>
                <p>
                    {"Presale opens with code "}
                    <code class="presale-code">{config::PRESALE_CODE}</code>
                </p>
                <div class="tickets-actions">
                    <button ref={copy_button_ref} class="copy-button" onclick={copy_code}>
                        {"Copy code"}
                    </button>
                    <a class="hero-cta" href={config::TICKET_URL}>{"Open ticket shop"}</a>
                </div>
            </section>

            <UploadPreview />

            <footer class="site-footer">
                <p>{"Solstice Festival · Harbour Field · See you at sundown."}</p>
            </footer>

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #0c0a18;
                    color: #eee;
                    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                }

                .home-page {
                    padding-top: 58px;
                }

                .home-page h2 {
                    color: #fff;
                }

                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    overflow: hidden;
                    background: radial-gradient(ellipse at bottom, #241a3d 0%, #0c0a18 70%);
                }

                .hero-glow {
                    position: absolute;
                    top: 15%;
                    left: 50%;
                    margin-left: -160px;
                    width: 320px;
                    height: 320px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(255, 184, 76, 0.5) 0%, rgba(255, 184, 76, 0) 70%);
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    padding: 4rem 1.5rem;
                }

                .hero-kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: #ffb84c;
                    font-size: 0.85rem;
                }

                .hero h1 {
                    font-size: 4rem;
                    margin: 0.5rem 0 1rem;
                    letter-spacing: 0.04em;
                }

                .hero-subtitle {
                    color: #bbb;
                    max-width: 460px;
                    margin: 0 auto;
                    line-height: 1.6;
                }

                .hero-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.8rem 2.2rem;
                    border-radius: 999px;
                    background: #ffb84c;
                    color: #1a1026;
                    font-weight: 700;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                }

                .reveal-on-scroll {
                    opacity: 0;
                    transform: translateY(28px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal-on-scroll.revealed {
                    opacity: 1;
                    transform: none;
                }

                .lineup-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .lineup-section h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }

                .lineup-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1rem;
                }

                .lineup-card {
                    padding: 1.4rem 1.6rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 184, 76, 0.15);
                }

                .lineup-card h3 {
                    margin: 0.3rem 0;
                    font-size: 1.3rem;
                }

                .lineup-time {
                    color: #ffb84c;
                    font-variant-numeric: tabular-nums;
                }

                .lineup-stage {
                    color: #999;
                    font-size: 0.9rem;
                }

                .tickets-section {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }

                .tickets-section h2 {
                    font-size: 2.2rem;
                }

                .presale-code {
                    padding: 0.2rem 0.6rem;
                    border-radius: 6px;
                    background: rgba(255, 184, 76, 0.15);
                    color: #ffb84c;
                    font-size: 1.1rem;
                }

                .tickets-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                    margin-top: 1.2rem;
                }

                .copy-button {
                    padding: 0.7rem 1.6rem;
                    border-radius: 999px;
                    background: none;
                    border: 1px solid rgba(255, 184, 76, 0.5);
                    color: #ffb84c;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .copy-button:hover {
                    background: rgba(255, 184, 76, 0.12);
                }

                .site-footer {
                    padding: 2.5rem 1.5rem;
                    text-align: center;
                    color: #777;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                @media (max-width: 600px) {
                    .hero h1 {
                        font-size: 2.6rem;
                    }

                    .tickets-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
