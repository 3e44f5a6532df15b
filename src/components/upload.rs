use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FileReader, HtmlInputElement};
use yew::prelude::*;

/// Read the first selected file as a data URL and render it into `target`.
/// Runs before any upload happens; file type and size are not checked.
pub fn preview_image(input: &HtmlInputElement, target: &Element) {
    let file = match input.files().and_then(|files| files.get(0)) {
        Some(file) => file,
        None => return,
    };
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let target = target.clone();
    let reader_handle = reader.clone();
    let onload = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(data_url) = reader_handle
            .result()
            .ok()
            .and_then(|value| value.as_string())
        {
            target.set_inner_html(&format!("<img src=\"{}\" alt=\"Preview\" />", data_url));
        }
    }) as Box<dyn FnMut(Event)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let _ = reader.read_as_data_url(&file);
}

#[function_component(UploadPreview)]
pub fn upload_preview() -> Html {
    let input_ref = NodeRef::default();
    let preview_ref = NodeRef::default();

    let onchange = {
        let input_ref = input_ref.clone();
        let preview_ref = preview_ref.clone();
        Callback::from(move |_e: Event| {
            if let (Some(input), Some(target)) = (
                input_ref.cast::<HtmlInputElement>(),
                preview_ref.cast::<Element>(),
            ) {
                preview_image(&input, &target);
            }
        })
    };

    html! {
        <section class="contest-section reveal-on-scroll" id="poster-contest">
            <h2>{"Poster Contest"}</h2>
            <p>
                {"Design next year's festival poster. Pick your artwork below to \
                  see how it looks, then send it to "}
                <a href="mailto:poster@solsticefestival.example">{"poster@solsticefestival.example"}</a>
                {"."}
            </p>
            <label class="contest-upload">
                {"Choose an image"}
                <input ref={input_ref} type="file" accept="image/*" onchange={onchange} />
            </label>
            <div ref={preview_ref} class="contest-preview">
                <p>{"No image selected yet."}</p>
            </div>
            <style>
                {r#"
                .contest-section {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }

                .contest-section h2 {
                    font-size: 2.2rem;
                    margin-bottom: 1rem;
                }

                .contest-section p {
                    color: #aaa;
                    line-height: 1.6;
                }

                .contest-section a {
                    color: #ffb84c;
                }

                .contest-upload {
                    display: inline-block;
                    margin: 1.5rem 0;
                    padding: 0.7rem 1.6rem;
                    border-radius: 999px;
                    background: rgba(255, 184, 76, 0.15);
                    border: 1px solid rgba(255, 184, 76, 0.5);
                    color: #ffb84c;
                    cursor: pointer;
                }

                .contest-upload input {
                    display: none;
                }

                .contest-preview {
                    min-height: 120px;
                    border: 1px dashed rgba(255, 255, 255, 0.2);
                    border-radius: 12px;
                    padding: 1rem;
                    color: #777;
                }

                .contest-preview img {
                    max-width: 100%;
                    max-height: 360px;
                    border-radius: 8px;
                }
                "#}
            </style>
        </section>
    }
}
