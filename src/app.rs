use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::home::Home;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a class="nav-logo" href="#top">{"Solstice Festival"}</a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "is-active"))}
                    aria-label="menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "is-active"))}>
                    <a href="#lineup" class="nav-link" onclick={close_menu.clone()}>{"Lineup"}</a>
                    <a href="#gallery" class="nav-link" onclick={close_menu.clone()}>{"Gallery"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <a href="#tickets" class="nav-ticket-link" onclick={close_menu}>{"Tickets"}</a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: rgba(12, 10, 24, 0.9);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(255, 184, 76, 0.15);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.8rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: #ffb84c;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.8rem;
                }

                .nav-link {
                    color: #eee;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #ffb84c;
                }

                .nav-ticket-link {
                    padding: 0.4rem 1.2rem;
                    border-radius: 999px;
                    background: #ffb84c;
                    color: #1a1026;
                    font-weight: 600;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #eee;
                    transition: transform 0.25s ease, opacity 0.25s ease;
                }

                .burger-menu.is-active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.is-active span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.is-active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.2rem 0;
                        background: rgba(12, 10, 24, 0.97);
                        border-bottom: 1px solid rgba(255, 184, 76, 0.15);
                        display: none;
                    }

                    .nav-links.is-active {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}
