use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct GalleryImage {
    src: &'static str,
    alt: &'static str,
}

const IMAGES: &[GalleryImage] = &[
    GalleryImage {
        src: "/assets/gallery/main-stage.jpg",
        alt: "Main stage at sunset",
    },
    GalleryImage {
        src: "/assets/gallery/crowd.jpg",
        alt: "Crowd during the headline set",
    },
    GalleryImage {
        src: "/assets/gallery/lanterns.jpg",
        alt: "Lantern walk on the harbour pier",
    },
    GalleryImage {
        src: "/assets/gallery/food-court.jpg",
        alt: "Food court by night",
    },
    GalleryImage {
        src: "/assets/gallery/fireworks.jpg",
        alt: "Closing fireworks over the bay",
    },
    GalleryImage {
        src: "/assets/gallery/art-dome.jpg",
        alt: "Light installation inside the art dome",
    },
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| None::<GalleryImage>);

    // Escape closes the lightbox; the listener only exists while it is open.
    {
        let is_open = lightbox.is_some();
        let lightbox = lightbox.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut keydown: Option<(Document, Closure<dyn FnMut(KeyboardEvent)>)> = None;
                if *open {
                    if let Some(document) =
                        web_sys::window().and_then(|window| window.document())
                    {
                        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                lightbox.set(None);
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                        keydown = Some((document, closure));
                    }
                }
                move || {
                    if let Some((document, closure)) = keydown {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            is_open,
        );
    }

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            lightbox.set(None);
        })
    };

    html! {
        <section class="gallery-section reveal-on-scroll" id="gallery">
            <h2>{"Moments from Last Year"}</h2>
            <div class="gallery-grid">
                { for IMAGES.iter().map(|image| {
                    let onclick = {
                        let lightbox = lightbox.clone();
                        let image = image.clone();
                        Callback::from(move |_e: MouseEvent| {
                            lightbox.set(Some(image.clone()));
                        })
                    };
                    html! {
                        <figure class="gallery-item" onclick={onclick}>
                            <img src={image.src} alt={image.alt} loading="lazy" />
                        </figure>
                    }
                })}
            </div>

            <div class={classes!("gallery-modal", lightbox.is_some().then(|| "is-active"))}>
                <div class="modal-background" onclick={close.clone()}></div>
                {
                    if let Some(image) = (*lightbox).clone() {
                        html! { <img class="modal-image" src={image.src} alt={image.alt} /> }
                    } else {
                        html! {}
                    }
                }
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
            </div>
            <style>
                {r#"
                .gallery-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .gallery-section h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1rem;
                }

                .gallery-item {
                    margin: 0;
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                }

                .gallery-item img {
                    display: block;
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }

                .gallery-item:hover img {
                    transform: scale(1.05);
                }

                .gallery-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: none;
                    align-items: center;
                    justify-content: center;
                }

                .gallery-modal.is-active {
                    display: flex;
                }

                .modal-background {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.85);
                }

                .modal-image {
                    position: relative;
                    max-width: 90vw;
                    max-height: 85vh;
                    border-radius: 8px;
                    z-index: 1;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    z-index: 2;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 2.4rem;
                    line-height: 1;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
